use super::error::RawSourceError;

/// Check whether a file's bytes look like hex payload text rather than one
/// raw binary payload.
///
/// Hex text is line oriented: blank lines and `#` comment lines are
/// allowed, every other line must consist of ASCII hex digits and
/// whitespace. Anything else is treated as binary.
pub fn is_hex_text(data: &[u8]) -> bool {
    if data.is_empty() {
        return false;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return false;
    };
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty()
            || line.starts_with('#')
            || line.chars().all(|c| c.is_ascii_hexdigit() || c == ' ' || c == '\t')
    })
}

/// Decode one hex payload line, ignoring interior whitespace.
///
/// `line_no` is the 1-based line number used in error reports.
pub fn decode_hex_line(line: &str, line_no: usize) -> Result<Vec<u8>, RawSourceError> {
    let digits: Vec<u8> = line
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if digits.len() % 2 != 0 {
        return Err(RawSourceError::Hex {
            line: line_no,
            message: format!("odd number of hex digits ({})", digits.len()),
        });
    }
    digits
        .chunks(2)
        .map(|pair| {
            let hi = hex_value(pair[0], line_no)?;
            let lo = hex_value(pair[1], line_no)?;
            Ok(hi << 4 | lo)
        })
        .collect()
}

fn hex_value(digit: u8, line_no: usize) -> Result<u8, RawSourceError> {
    (digit as char)
        .to_digit(16)
        .map(|value| value as u8)
        .ok_or_else(|| RawSourceError::Hex {
            line: line_no,
            message: format!("invalid hex digit '{}'", digit as char),
        })
}
