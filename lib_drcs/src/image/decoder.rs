use super::format::{DrcsBody, DrcsHeader, DrcsImage};
use super::header::parse_header;
use crate::error::DrcsError;
use crate::unpack::{apply_palette, build_palette_rgba, decode_indices};

/// Splits a DRCS file into its validated header and undecoded body.
pub fn parse(data: &[u8]) -> Result<(DrcsHeader, DrcsBody<'_>), DrcsError> {
    let (header, mut cursor) = parse_header(data)?;

    let palette = cursor.read_bytes(header.palette_byte_len())?;
    let pixel_offset = cursor.position();
    let pixel_indices = cursor.read_rest();

    Ok((
        header,
        DrcsBody {
            palette,
            pixel_indices,
            pixel_offset,
        },
    ))
}

/// Decodes a complete DRCS file into a top-down RGBA buffer.
///
/// Any failure aborts the decode; no partial image is produced.
pub fn decode(data: &[u8]) -> Result<DrcsImage, DrcsError> {
    let (header, body) = parse(data)?;

    let palette = build_palette_rgba(&header, &body)?;
    let indices = decode_indices(&header, &body)?;
    let rgba_data = apply_palette(&palette, &indices, header.width as usize)?;

    Ok(DrcsImage::new(header.width, header.height, palette, rgba_data))
}
