pub mod decoder;
pub mod encoder;
pub mod format;
pub mod header;

pub use decoder::{decode, parse};
pub use encoder::{encode, EncodeError};
pub use header::parse_header;
