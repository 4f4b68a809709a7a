use crate::constants::{HEADER_SIZE, PALETTE_ENTRY_SIZE, RGBA_PIXEL_SIZE};
use crate::error::{DrcsError, FieldValue};

pub const SIGNATURE: [u8; 2] = *b"BM";

/// The fixed file header and info header of a DRCS bitmap, in storage order.
///
/// All multi-byte fields are little-endian on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrcsHeader {
    pub signature: [u8; 2],
    pub declared_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub declared_data_offset: u32,
    pub padding: [u8; 2],
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub size_image: u32,
    pub x_pels_per_meter: u32,
    pub y_pels_per_meter: u32,
    pub clr_used: u32,
    pub clr_important: u32,
}

impl DrcsHeader {
    /// The one header every DRCS file carries. Anything else is rejected.
    pub const EXPECTED: DrcsHeader = DrcsHeader {
        signature: SIGNATURE,
        declared_size: 55_050_240,
        reserved1: 0,
        reserved2: 0,
        declared_data_offset: 7_864_320,
        padding: [0, 0],
        header_size: 40,
        width: 36,
        height: 36,
        planes: 1,
        bit_count: 4,
        compression: 0,
        size_image: 720,
        x_pels_per_meter: 0,
        y_pels_per_meter: 0,
        clr_used: 0,
        clr_important: 0,
    };

    /// Every field as `(name, byte offset, value)`, in storage order.
    pub fn fields(&self) -> [(&'static str, usize, FieldValue); 17] {
        use FieldValue::{Bytes, Int};

        [
            ("signature", 0, Bytes(self.signature)),
            ("declared_size", 2, Int(self.declared_size)),
            ("reserved1", 6, Int(self.reserved1.into())),
            ("reserved2", 8, Int(self.reserved2.into())),
            ("declared_data_offset", 10, Int(self.declared_data_offset)),
            ("padding", 14, Bytes(self.padding)),
            ("header_size", 16, Int(self.header_size)),
            ("width", 20, Int(self.width)),
            ("height", 24, Int(self.height)),
            ("planes", 28, Int(self.planes.into())),
            ("bit_count", 30, Int(self.bit_count.into())),
            ("compression", 32, Int(self.compression)),
            ("size_image", 36, Int(self.size_image)),
            ("x_pels_per_meter", 40, Int(self.x_pels_per_meter)),
            ("y_pels_per_meter", 44, Int(self.y_pels_per_meter)),
            ("clr_used", 48, Int(self.clr_used)),
            ("clr_important", 52, Int(self.clr_important)),
        ]
    }

    /// Compares this header against [`DrcsHeader::EXPECTED`].
    ///
    /// # Errors
    /// - Returns `DrcsError::UnsupportedFormat` naming the first field, in
    ///   storage order, that differs from the expected profile
    pub fn validate(&self) -> Result<(), DrcsError> {
        if *self == Self::EXPECTED {
            return Ok(());
        }

        let expected = Self::EXPECTED.fields();
        for ((field, offset, actual), (_, _, expected)) in self.fields().into_iter().zip(expected)
        {
            if actual != expected {
                return Err(DrcsError::UnsupportedFormat {
                    field,
                    offset,
                    expected,
                    actual,
                });
            }
        }

        Ok(())
    }

    /// Number of color table entries, `2^bit_count`.
    pub fn palette_len(&self) -> usize {
        1usize
            .checked_shl(u32::from(self.bit_count))
            .unwrap_or(usize::MAX)
    }

    pub fn palette_byte_len(&self) -> usize {
        self.palette_len().saturating_mul(PALETTE_ENTRY_SIZE)
    }

    /// Serializes the header back into its on-disk layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE);
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.declared_size.to_le_bytes());
        out.extend_from_slice(&self.reserved1.to_le_bytes());
        out.extend_from_slice(&self.reserved2.to_le_bytes());
        out.extend_from_slice(&self.declared_data_offset.to_le_bytes());
        out.extend_from_slice(&self.padding);
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bit_count.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.size_image.to_le_bytes());
        out.extend_from_slice(&self.x_pels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.y_pels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.clr_used.to_le_bytes());
        out.extend_from_slice(&self.clr_important.to_le_bytes());
        out
    }
}

/// The undecoded remainder of a DRCS file, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrcsBody<'a> {
    pub palette: &'a [u8], // BGRx color table
    pub pixel_indices: &'a [u8],
    pub pixel_offset: usize, // File offset of `pixel_indices`
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrcsImage {
    pub width: u32,
    pub height: u32,
    pub palette: Vec<[u8; 4]>,
    pub rgba_data: Vec<u8>,
}

impl DrcsImage {
    pub fn new(width: u32, height: u32, palette: Vec<[u8; 4]>, rgba_data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            palette,
            rgba_data,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The RGBA value at column `x` of row `y`, counting rows from the top.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * RGBA_PIXEL_SIZE;
        let px = self.rgba_data.get(start..start + RGBA_PIXEL_SIZE)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_header_is_valid() {
        assert_eq!(DrcsHeader::EXPECTED.validate(), Ok(()));
        assert_eq!(DrcsHeader::EXPECTED.palette_len(), 16);
        assert_eq!(DrcsHeader::EXPECTED.palette_byte_len(), 64);
    }

    #[test]
    fn test_header_bytes_match_field_offsets() {
        let bytes = DrcsHeader::EXPECTED.to_bytes();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(&bytes[20..24], &36u32.to_le_bytes());
        assert_eq!(&bytes[30..32], &4u16.to_le_bytes());
        assert_eq!(&bytes[36..40], &720u32.to_le_bytes());
    }

    #[test]
    fn test_validate_reports_first_mismatch() {
        let header = DrcsHeader {
            width: 48,
            compression: 2,
            ..DrcsHeader::EXPECTED
        };
        assert_eq!(
            header.validate(),
            Err(DrcsError::UnsupportedFormat {
                field: "width",
                offset: 20,
                expected: FieldValue::Int(36),
                actual: FieldValue::Int(48),
            })
        );
    }

    #[test]
    fn test_validate_rejects_plain_bmp_header() {
        // An ordinary 4bpp BMP with the usual 14-byte file header layout
        let header = DrcsHeader {
            declared_size: 838,
            declared_data_offset: 118,
            ..DrcsHeader::EXPECTED
        };
        let err = header.validate().unwrap_err();
        assert!(matches!(
            err,
            DrcsError::UnsupportedFormat {
                field: "declared_size",
                offset: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_pixel_accessor_bounds() {
        let image = DrcsImage::new(2, 1, vec![], vec![1, 2, 3, 255, 4, 5, 6, 255]);
        assert_eq!(image.pixel(1, 0), Some([4, 5, 6, 255]));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 1), None);
    }
}
