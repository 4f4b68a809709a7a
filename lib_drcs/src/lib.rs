pub mod constants;
pub mod cursor;
pub mod error;
pub mod image;
pub mod unpack;

pub use crate::cursor::ByteCursor;
pub use crate::error::{DrcsError, DrcsErrorKind, FieldValue};
pub use crate::image::format::{DrcsBody, DrcsHeader, DrcsImage};
pub use crate::image::{decode, encode, parse, parse_header, EncodeError};
pub use crate::unpack::{apply_palette, build_palette_rgba, decode_indices};
