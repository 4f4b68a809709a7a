pub const FORMAT_NAME: &str = "DRCS Bitmap";
pub const FILE_EXT: &str = "bmp";
pub const OUTPUT_EXT: &str = "png";

/// Length of the fixed header region, file header and info header together.
pub const HEADER_SIZE: usize = 56;
/// One `[b, g, r, reserved]` color table entry.
pub const PALETTE_ENTRY_SIZE: usize = 4;
/// Bytes per decoded RGBA pixel.
pub const RGBA_PIXEL_SIZE: usize = 4;
pub const OPAQUE: u8 = 255;
