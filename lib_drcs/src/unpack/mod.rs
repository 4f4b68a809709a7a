pub mod indices;
pub mod palette;

pub use indices::{decode_indices, row_layout, unpack_indices};
pub use palette::{apply_palette, build_palette_rgba};
