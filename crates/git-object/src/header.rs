use crate::{ObjectError, ObjectKind};

/// Parse an object header from raw bytes.
///
/// The header format is `"<type> <size>\0"`. Returns `(kind, content_size, header_length)`
/// where `header_length` includes the null terminator.
pub fn parse_header(data: &[u8]) -> Result<(ObjectKind, usize, usize), ObjectError> {
    let null_pos = data
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| ObjectError::InvalidHeader("missing null terminator".into()))?;

    let header = &data[..null_pos];
    let space_pos = header
        .iter()
        .position(|&b| b == b' ')
        .ok_or_else(|| ObjectError::InvalidHeader("missing space in header".into()))?;

    let kind = ObjectKind::from_bytes(&header[..space_pos])?;

    let size_bytes = &header[space_pos + 1..];
    if size_bytes.is_empty() || !size_bytes.iter().all(u8::is_ascii_digit) {
        return Err(ObjectError::InvalidHeader(format!(
            "invalid size: {}",
            String::from_utf8_lossy(size_bytes)
        )));
    }
    // Digits only, so this is valid UTF-8; parse can still overflow.
    let content_size: usize = std::str::from_utf8(size_bytes)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| {
            ObjectError::InvalidHeader(format!(
                "size out of range: {}",
                String::from_utf8_lossy(size_bytes)
            ))
        })?;

    Ok((kind, content_size, null_pos + 1))
}
