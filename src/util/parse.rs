/// Splits the given bytes into the hour and minute of an `H:MM` or `HH:MM`
/// clock time.
///
/// The input must match exactly: one or two ASCII digits, a colon, then
/// exactly two ASCII digits. Nothing may precede or follow. This does no
/// range checking on the values parsed.
///
/// This returns `None` when the input doesn't match.
pub(crate) fn hour_minute(bytes: &[u8]) -> Option<(i64, i64)> {
    let colon = bytes.iter().position(|&b| b == b':')?;
    let (hour, minute) = (&bytes[..colon], &bytes[colon + 1..]);
    if !(1..=2).contains(&hour.len()) || minute.len() != 2 {
        return None;
    }
    Some((digits(hour)?, digits(minute)?))
}

/// Parses a short run of ASCII decimal digits.
///
/// Callers must bound the length of `bytes` so that this cannot overflow.
fn digits(bytes: &[u8]) -> Option<i64> {
    let mut n: i64 = 0;
    for &byte in bytes {
        if !byte.is_ascii_digit() {
            return None;
        }
        n = n * 10 + i64::from(byte - b'0');
    }
    Some(n)
}
