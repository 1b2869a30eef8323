use jiff::civil::Time;

use crate::{
    error::{fmt::Error as E, Error, ErrorContext},
    fmt::util::{
        parse_fraction, parse_number, parse_two_digits, MAX_DAY_DIGITS,
        MAX_HOUR_DIGITS,
    },
    ExpandedTime, Field,
};

/// Parses either of the two forms this crate prints.
///
/// The grammar is:
///
/// ```text
/// ExpandedTime :::
///   Clock
///   "+" Digits " " Clock
///
/// Clock :::
///   Digits ":" TwoDigits
///   Digits ":" TwoDigits ":" TwoDigits
///   Digits ":" TwoDigits ":" TwoDigits "." Fraction
///
/// Fraction :::
///   one to nine ASCII digits
/// ```
///
/// Without the `+` prefix, the hour is an expanded hour and is folded into
/// excess days. With the prefix, the day count is explicit and the hour must
/// be a wall clock hour.
pub(crate) fn parse(input: &[u8]) -> Result<ExpandedTime, Error> {
    parse_impl(input).context(E::FailedTemporal)
}

fn parse_impl(input: &[u8]) -> Result<ExpandedTime, Error> {
    let (excess_days, input) = parse_excess_days(input)?;
    let (hour, input) =
        parse_number(input, MAX_HOUR_DIGITS).context(E::ParseHour)?;
    let Some(input) = input.strip_prefix(b":") else {
        return Err(Error::from(E::ExpectedColonAfterHour));
    };
    let (minute, input) =
        parse_two_digits(input).ok_or(E::ExpectedTwoDigitMinute)?;
    let minute =
        Field::Minute.check(i64::from(minute)).context(E::ParseMinute)?;

    let (mut second, mut subsec, mut input) = (0, 0, input);
    if let Some(rest) = input.strip_prefix(b":") {
        let (s, rest) =
            parse_two_digits(rest).ok_or(E::ExpectedTwoDigitSecond)?;
        second = Field::Second.check(i64::from(s)).context(E::ParseSecond)?;
        input = rest;
        if let Some(rest) = input.strip_prefix(b".") {
            let (nanos, rest) =
                parse_fraction(rest).context(E::ParseFractionalSeconds)?;
            subsec = nanos;
            input = rest;
        }
    }
    if !input.is_empty() {
        return Err(Error::from(E::TrailingInput));
    }

    // Both minute and second were range checked above.
    let (minute, second) = (minute as i8, second as i8);
    match excess_days {
        None => {
            ExpandedTime::from_expanded_hour(hour, minute, second, subsec)
        }
        Some(days) => {
            if hour >= 24 {
                return Err(Error::from(E::InvalidCanonicalHour));
            }
            let time = Time::new(hour as i8, minute, second, subsec)?;
            ExpandedTime::from_time(days, time)
        }
    }
}

/// Parses the optional `+N ` prefix of the canonical form.
fn parse_excess_days(input: &[u8]) -> Result<(Option<i32>, &[u8]), Error> {
    let Some(input) = input.strip_prefix(b"+") else {
        return Ok((None, input));
    };
    let (days, input) =
        parse_number(input, MAX_DAY_DIGITS).context(E::ParseExcessDays)?;
    let days = i32::try_from(days)
        .map_err(|_| Error::range("excess-days", days, 0, i32::MAX))
        .context(E::ParseExcessDays)?;
    let Some(input) = input.strip_prefix(b" ") else {
        return Err(Error::from(E::ExpectedSpaceAfterExcessDays));
    };
    Ok((Some(days), input))
}
