use thiserror::Error;

use super::format::DrcsHeader;
use crate::constants::{HEADER_SIZE, PALETTE_ENTRY_SIZE};
use crate::unpack::row_layout;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Palette must hold exactly {expected} colors, got {actual}")]
    PaletteLength { expected: usize, actual: usize },
    #[error("Expected {expected} pixel indices, got {actual}")]
    IndexCount { expected: usize, actual: usize },
    #[error("Pixel index {index} at position {position} does not fit in 4 bits")]
    IndexOutOfRange { index: u8, position: usize },
}

/// Builds a DRCS file from RGBA palette colors and top-down pixel indices.
///
/// Alpha is not stored; the reserved byte of each color table entry is zero.
pub fn encode(palette: &[[u8; 4]], indices: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let header = DrcsHeader::EXPECTED;
    let width = header.width as usize;
    let height = header.height as usize;

    if palette.len() != header.palette_len() {
        return Err(EncodeError::PaletteLength {
            expected: header.palette_len(),
            actual: palette.len(),
        });
    }
    if indices.len() != width * height {
        return Err(EncodeError::IndexCount {
            expected: width * height,
            actual: indices.len(),
        });
    }
    if let Some(position) = indices.iter().position(|&index| index > 0x0F) {
        return Err(EncodeError::IndexOutOfRange {
            index: indices[position],
            position,
        });
    }

    let (_, bytes_per_row_padded) = row_layout(width);
    let mut encoded_data = Vec::with_capacity(
        HEADER_SIZE + palette.len() * PALETTE_ENTRY_SIZE + height * bytes_per_row_padded,
    );

    encoded_data.extend_from_slice(&header.to_bytes());
    for &[r, g, b, _] in palette {
        encoded_data.extend_from_slice(&[b, g, r, 0]);
    }

    // Rows go out bottom first
    for row in indices.chunks_exact(width).rev() {
        let row_start = encoded_data.len();
        for pair in row.chunks(2) {
            let low = pair.get(1).copied().unwrap_or(0);
            encoded_data.push(pair[0] << 4 | low);
        }
        encoded_data.resize(row_start + bytes_per_row_padded, 0);
    }

    Ok(encoded_data)
}
