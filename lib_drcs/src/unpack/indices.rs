use crate::error::DrcsError;
use crate::image::format::{DrcsBody, DrcsHeader};

/// Byte lengths of one 4bpp row: `(packed, padded)`.
///
/// Two pixels share a byte, and stored rows are padded out to a multiple of 4.
pub fn row_layout(width: usize) -> (usize, usize) {
    let bytes_per_row_raw = width.div_ceil(2);
    let bytes_per_row_padded = bytes_per_row_raw.div_ceil(4) * 4;
    (bytes_per_row_raw, bytes_per_row_padded)
}

/// Unpacks the pixel block of `body` into one palette index per pixel.
///
/// The result is `width * height` indices, row-major, top row first.
pub fn decode_indices(header: &DrcsHeader, body: &DrcsBody) -> Result<Vec<u8>, DrcsError> {
    unpack_indices(
        header.width as usize,
        header.height as usize,
        body.pixel_indices,
        body.pixel_offset,
    )
}

/// Unpacks bottom-up, 4-byte padded, nibble packed rows.
///
/// `data_offset` is the position of `data` within the file and only feeds
/// error reports. Bytes past the last stored row are ignored.
///
/// # Errors
/// - Returns `DrcsError::MalformedInput` if `data` is shorter than
///   `height` padded rows
pub fn unpack_indices(
    width: usize,
    height: usize,
    data: &[u8],
    data_offset: usize,
) -> Result<Vec<u8>, DrcsError> {
    let (bytes_per_row_raw, bytes_per_row_padded) = row_layout(width);

    let needed = height.checked_mul(bytes_per_row_padded).unwrap_or(usize::MAX);
    if data.len() < needed {
        return Err(DrcsError::MalformedInput {
            offset: data_offset,
            needed,
            available: data.len(),
        });
    }

    let mut indices = Vec::with_capacity(width * height);

    // The first stored row is the bottom of the image
    for row in (0..height).rev() {
        let start = row * bytes_per_row_padded;
        let packed = &data[start..start + bytes_per_row_raw];

        let row_start = indices.len();
        for &byte in packed {
            indices.push(byte >> 4);
            indices.push(byte & 0x0F);
        }
        // Odd widths leave an unused low nibble in the last byte
        indices.truncate(row_start + width);
    }

    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HEADER_SIZE;

    #[test]
    fn test_row_layout() {
        assert_eq!(row_layout(36), (18, 20));
        assert_eq!(row_layout(8), (4, 4));
        assert_eq!(row_layout(9), (5, 8));
        assert_eq!(row_layout(1), (1, 4));
        assert_eq!(row_layout(0), (0, 0));
    }

    #[test]
    fn test_unpack_high_nibble_first() {
        // 8 pixels wide, one row, no padding needed
        let data = [0x12, 0x34, 0x56, 0x78];
        let indices = unpack_indices(8, 1, &data, 0).unwrap();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_unpack_reverses_rows() {
        // 2x3 image; each row padded to 4 bytes
        let data = [
            0xAB, 0, 0, 0, // bottom row
            0xCD, 0, 0, 0, // middle row
            0xEF, 0, 0, 0, // top row
        ];
        let indices = unpack_indices(2, 3, &data, 0).unwrap();
        assert_eq!(indices, vec![0xE, 0xF, 0xC, 0xD, 0xA, 0xB]);
    }

    #[test]
    fn test_unpack_odd_width_drops_trailing_nibble() {
        // 3 pixels per row: two bytes, the last low nibble is unused
        let data = [
            0x12, 0x3F, 0xEE, 0xEE, // bottom row, padding is junk
            0x45, 0x6F, 0xEE, 0xEE, // top row
        ];
        let indices = unpack_indices(3, 2, &data, 0).unwrap();
        assert_eq!(indices, vec![4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_unpack_ignores_trailing_bytes() {
        let data = [0x11, 0, 0, 0, 0xFF, 0xFF];
        let indices = unpack_indices(2, 1, &data, 0).unwrap();
        assert_eq!(indices, vec![1, 1]);
    }

    #[test]
    fn test_unpack_short_data() {
        let data = [0u8; 719];
        let result = unpack_indices(36, 36, &data, 120);
        assert_eq!(
            result,
            Err(DrcsError::MalformedInput {
                offset: 120,
                needed: 720,
                available: 719
            })
        );
    }

    #[test]
    fn test_decode_indices_uses_header_dimensions() {
        let header = DrcsHeader {
            width: 5,
            height: 1,
            ..DrcsHeader::EXPECTED
        };
        let body = DrcsBody {
            palette: &[],
            pixel_indices: &[0x01, 0x23, 0x4F, 0x00],
            pixel_offset: HEADER_SIZE + 64,
        };
        assert_eq!(decode_indices(&header, &body).unwrap(), vec![0, 1, 2, 3, 4]);
    }
}
