use std::fmt;

use thiserror::Error;

/// A header value as it appears in an error report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Bytes([u8; 2]),
    Int(u32),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bytes(bytes) => write!(f, "b\"{}\"", bytes.escape_ascii()),
            FieldValue::Int(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrcsError {
    #[error("Malformed input: needed {needed} bytes at offset {offset}, only {available} available")]
    MalformedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("Unsupported format: field `{field}` at offset {offset} is {actual}, expected {expected}")]
    UnsupportedFormat {
        field: &'static str,
        offset: usize,
        expected: FieldValue,
        actual: FieldValue,
    },
    #[error("Invalid palette index: {index} at ({x}, {y}) exceeds palette size of {palette_len}")]
    PaletteIndexOutOfRange {
        index: u8,
        palette_len: usize,
        x: usize,
        y: usize,
    },
}

/// The failure category of a [`DrcsError`], without its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrcsErrorKind {
    MalformedInput,
    UnsupportedFormat,
    PaletteIndexOutOfRange,
}

impl DrcsError {
    pub fn kind(&self) -> DrcsErrorKind {
        match self {
            DrcsError::MalformedInput { .. } => DrcsErrorKind::MalformedInput,
            DrcsError::UnsupportedFormat { .. } => DrcsErrorKind::UnsupportedFormat,
            DrcsError::PaletteIndexOutOfRange { .. } => DrcsErrorKind::PaletteIndexOutOfRange,
        }
    }
}
