use crate::cursor::ByteCursor;
use crate::error::DrcsError;
use crate::image::format::DrcsHeader;

/// Reads the 17 header fields in storage order without judging them.
pub fn read_header(cursor: &mut ByteCursor<'_>) -> Result<DrcsHeader, DrcsError> {
    Ok(DrcsHeader {
        signature: cursor.read_array()?,
        declared_size: cursor.read_u32_le()?,
        reserved1: cursor.read_u16_le()?,
        reserved2: cursor.read_u16_le()?,
        declared_data_offset: cursor.read_u32_le()?,
        padding: cursor.read_array()?,
        header_size: cursor.read_u32_le()?,
        width: cursor.read_u32_le()?,
        height: cursor.read_u32_le()?,
        planes: cursor.read_u16_le()?,
        bit_count: cursor.read_u16_le()?,
        compression: cursor.read_u32_le()?,
        size_image: cursor.read_u32_le()?,
        x_pels_per_meter: cursor.read_u32_le()?,
        y_pels_per_meter: cursor.read_u32_le()?,
        clr_used: cursor.read_u32_le()?,
        clr_important: cursor.read_u32_le()?,
    })
}

/// Parses and validates the fixed header at the start of `data`.
///
/// # Returns
/// The header and a cursor positioned at the first byte after it.
///
/// # Errors
/// - Returns `DrcsError::MalformedInput` if `data` ends inside the header
/// - Returns `DrcsError::UnsupportedFormat` if any field differs from the DRCS profile
pub fn parse_header(data: &[u8]) -> Result<(DrcsHeader, ByteCursor<'_>), DrcsError> {
    let mut cursor = ByteCursor::new(data);
    let header = read_header(&mut cursor)?;
    header.validate()?;
    Ok((header, cursor))
}
