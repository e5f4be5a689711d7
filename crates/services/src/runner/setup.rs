use crate::error::CountError;

/// Parse the setup screen's item count against a group of `max` items.
///
/// Reads the leading integer the way a browser's `parseInt(_, 10)` does:
/// leading whitespace and an optional sign are skipped, then digits are taken
/// up to the first non-digit. `"2.5"` reads as 2 and `"3abc"` as 3.
///
/// # Errors
///
/// Returns `CountError::NotANumber` when no digits lead the input and
/// `CountError::OutOfRange` for integers outside `1..=max`.
pub fn parse_count(input: &str, max: usize) -> Result<usize, CountError> {
    let raw = input.trim_start();
    let (negative, unsigned) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(CountError::NotANumber {
            raw: input.trim().to_string(),
            max,
        });
    }

    let magnitude = unsigned[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };

    match usize::try_from(value) {
        Ok(count) if (1..=max).contains(&count) => Ok(count),
        _ => Err(CountError::OutOfRange { value, max }),
    }
}
