use crate::error::{fmt::Error as E, Error};

/// The maximum number of digits in an excess day count, i.e., any
/// non-negative `i32`.
pub(crate) const MAX_DAY_DIGITS: usize = 10;

/// The maximum number of digits in an expanded hour. The largest is
/// `i32::MAX * 24 + 23`, which has 11 digits.
pub(crate) const MAX_HOUR_DIGITS: usize = 11;

/// The maximum number of fractional second digits. i.e., nanosecond
/// precision.
pub(crate) const MAX_PRECISION: usize = 9;

/// Parses a non-negative integer from between `1` and `max` ASCII digits at
/// the beginning of `inp`. Parsing stops at the first non-digit.
///
/// Callers narrow the result to their own field's range.
pub(crate) fn parse_number(
    inp: &[u8],
    max: usize,
) -> Result<(i64, &[u8]), Error> {
    let len = digits_len(inp, max);
    if len == 0 {
        return Err(Error::from(E::NoDigits));
    }
    let (digits, rest) = inp.split_at(len);
    let mut n: i64 = 0;
    for &byte in digits {
        let digit = i64::from(byte - b'0');
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit))
            .ok_or(E::NumberTooBig)?;
    }
    Ok((n, rest))
}

/// Parses exactly two ASCII digits at the beginning of `inp`.
///
/// This returns `None` when there aren't two digits. Callers are expected to
/// attach their own error.
pub(crate) fn parse_two_digits(inp: &[u8]) -> Option<(i32, &[u8])> {
    match *inp {
        [a @ b'0'..=b'9', b @ b'0'..=b'9', ref rest @ ..] => {
            Some((i32::from(a - b'0') * 10 + i32::from(b - b'0'), rest))
        }
        _ => None,
    }
}

/// Parses between `1` and `9` ASCII digits as a fractional second and
/// returns it in units of nanoseconds.
///
/// Parsing stops at the first non-digit, or after nine digits.
pub(crate) fn parse_fraction(inp: &[u8]) -> Result<(i32, &[u8]), Error> {
    let len = digits_len(inp, MAX_PRECISION);
    if len == 0 {
        return Err(Error::from(E::ExpectedFractionalDigit));
    }
    let (digits, rest) = inp.split_at(len);
    let mut nanos: i32 = 0;
    for &byte in digits {
        nanos = nanos * 10 + i32::from(byte - b'0');
    }
    for _ in len..MAX_PRECISION {
        nanos *= 10;
    }
    Ok((nanos, rest))
}

/// Returns the number of leading ASCII digits in `inp`, up to `max`.
fn digits_len(inp: &[u8], max: usize) -> usize {
    inp.iter().take(max).take_while(|b| b.is_ascii_digit()).count()
}
