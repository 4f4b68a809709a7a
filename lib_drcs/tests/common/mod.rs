#![allow(dead_code)]

use lib_drcs::DrcsHeader;

pub const WIDTH: usize = 36;
pub const HEIGHT: usize = 36;
pub const BYTES_PER_ROW_RAW: usize = 18;
pub const BYTES_PER_ROW_PADDED: usize = 20;
pub const HEADER_LEN: usize = 56;
pub const PALETTE_LEN: usize = 64;
pub const FILE_LEN: usize = HEADER_LEN + PALETTE_LEN + HEIGHT * BYTES_PER_ROW_PADDED;

/// Sixteen distinct colors as stored on disk, `[b, g, r, reserved]`.
pub fn stored_palette() -> Vec<u8> {
    let mut palette = Vec::with_capacity(PALETTE_LEN);
    for i in 0..16u8 {
        palette.extend_from_slice(&[i * 16, 255 - i, i, 0x5A]);
    }
    palette
}

/// What `stored_palette` must decode to.
pub fn expected_rgba(index: u8) -> [u8; 4] {
    [index, 255 - index, index * 16, 255]
}

/// A deterministic index for every pixel, counted from the top-left corner.
pub fn pattern_index(x: usize, y: usize) -> u8 {
    ((x * 7 + y * 3 + x * y) % 16) as u8
}

/// Packs top-down indices into bottom-up padded rows, filling the padding
/// bytes with `padding_fill`.
pub fn pack_rows(index: impl Fn(usize, usize) -> u8, padding_fill: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(HEIGHT * BYTES_PER_ROW_PADDED);
    for y in (0..HEIGHT).rev() {
        for byte in 0..BYTES_PER_ROW_RAW {
            let x = byte * 2;
            data.push(index(x, y) << 4 | index(x + 1, y));
        }
        data.extend(std::iter::repeat(padding_fill).take(BYTES_PER_ROW_PADDED - BYTES_PER_ROW_RAW));
    }
    data
}

pub fn build_file(palette: &[u8], pixels: &[u8]) -> Vec<u8> {
    let mut data = DrcsHeader::EXPECTED.to_bytes();
    data.extend_from_slice(palette);
    data.extend_from_slice(pixels);
    data
}

pub fn pattern_file() -> Vec<u8> {
    build_file(&stored_palette(), &pack_rows(pattern_index, 0))
}
