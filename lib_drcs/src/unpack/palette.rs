use crate::constants::{HEADER_SIZE, OPAQUE, PALETTE_ENTRY_SIZE, RGBA_PIXEL_SIZE};
use crate::error::DrcsError;
use crate::image::format::{DrcsBody, DrcsHeader};

/// Converts the stored color table into RGBA entries.
///
/// Each stored entry is `[b, g, r, reserved]`. The reserved byte is dropped and
/// alpha is always opaque.
///
/// # Errors
/// - Returns `DrcsError::MalformedInput` if the body holds fewer than
///   `2^bit_count` entries
pub fn build_palette_rgba(header: &DrcsHeader, body: &DrcsBody) -> Result<Vec<[u8; 4]>, DrcsError> {
    let num_colors = header.palette_len();
    let needed = header.palette_byte_len();
    if body.palette.len() < needed {
        return Err(DrcsError::MalformedInput {
            offset: HEADER_SIZE,
            needed,
            available: body.palette.len(),
        });
    }

    let palette = body
        .palette
        .chunks_exact(PALETTE_ENTRY_SIZE)
        .take(num_colors)
        .map(|entry| [entry[2], entry[1], entry[0], OPAQUE])
        .collect();

    Ok(palette)
}

/// Expands palette indices into RGBA pixel data.
///
/// # Parameters
/// - `palette`: RGBA colors, as produced by [`build_palette_rgba`].
/// - `indices`: One palette index per pixel, row-major, top row first.
/// - `width`: Row length, used to locate a bad index in the error.
///
/// # Errors
/// - Returns `DrcsError::PaletteIndexOutOfRange` if any index is not below the palette size
pub fn apply_palette(palette: &[[u8; 4]], indices: &[u8], width: usize) -> Result<Vec<u8>, DrcsError> {
    let mut decoded_pixels = Vec::with_capacity(indices.len() * RGBA_PIXEL_SIZE);

    for (position, &index) in indices.iter().enumerate() {
        let color = palette.get(index as usize).ok_or(DrcsError::PaletteIndexOutOfRange {
            index,
            palette_len: palette.len(),
            x: position.checked_rem(width).unwrap_or(position),
            y: position.checked_div(width).unwrap_or(0),
        })?;
        decoded_pixels.extend_from_slice(color);
    }

    Ok(decoded_pixels)
}
