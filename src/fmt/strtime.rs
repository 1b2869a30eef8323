/*!
Support for "strptime" style parsing of expanded times.

This is a small, lenient cousin of [`jiff::fmt::strtime`]. Jiff's own
`strptime` rejects any hour greater than `23`, which is exactly the hour this
crate needs to accept. So this module implements the time-of-day subset of
the same conversion specifiers, with one difference: the hour directives
accept any non-negative hour an expanded time can represent, up to
`i32::MAX * 24 + 23`. An hour of `24` or more is folded into excess days,
exactly like [`ExpandedTime::new`](crate::ExpandedTime::new). So every
expanded-hour string this crate prints can be parsed back.

Every other field is checked strictly. A minute or second of `60` or more is
an error.

# Example

```
use jiff_expanded::{fmt::strtime, ExpandedTime};

let et = strtime::parse("%H:%M", "25:30")?;
assert_eq!(et, ExpandedTime::new(25, 30, 0)?);
assert_eq!(et.excess_days(), 1);
assert_eq!(et.to_string(), "+1 01:30");

// Literals and whitespace in the format must match the input.
let et = strtime::parse("dep. %H.%M", "dep.  49.05")?;
assert_eq!(et.to_expanded_hour_string(), "49:05");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Conversion specifications

| Specifier | Example | Description |
| --------- | ------- | ----------- |
| `%%` | `%%` | A literal `%`. |
| `%H` | `25` | The expanded hour. Leading zeros are optional. |
| `%k` | ` 7` | The expanded hour, with optional leading spaces. |
| `%M` | `04` | The minute, `0-59`. |
| `%S` | `59` | The second, `0-59`. |
| `%f` | `123` | A fractional second, 1 to 9 digits, without a leading dot. |
| `%N` | `123` | An alias for `%f`. |
| `%.f` | `.123` | An optional dot followed by a fractional second. |
| `%R` | `25:30` | Equivalent to `%H:%M`. |
| `%T` | `25:30:59` | Equivalent to `%H:%M:%S`. |
| `%n`, `%t` | ` ` | Any amount of whitespace, including none. |

Any ASCII whitespace in the format matches any amount of ASCII whitespace in
the input. Every other byte must match exactly.

The flags `_`, `-`, `0`, `^` and `#` are accepted after the `%` and ignored.
A decimal width may follow the flag. When given, it limits the number of
digits consumed by a numeric directive. This is mostly useful for formats
without delimiters, where the hour would otherwise consume every digit:

```
use jiff_expanded::{fmt::strtime, ExpandedTime};

let et = strtime::parse("%2H%M", "2530")?;
assert_eq!(et, ExpandedTime::new(25, 30, 0)?);

// Without a width, the hour is greedy.
assert!(strtime::parse("%H%M", "2530").is_err());

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Resolution

An hour directive is required. If a second directive is present, then a
minute directive must be too. If a fractional second directive is present,
then a second directive must be too. Minutes, seconds and fractional seconds
that aren't present default to zero.
*/

use crate::{
    error::{fmt::Error as E, Error, ErrorContext},
    fmt::util::{parse_fraction, parse_number, MAX_HOUR_DIGITS},
    ExpandedTime, Field,
};

/// The largest width accepted between a `%` and its directive.
const MAX_WIDTH: i64 = 10;

/// Parse the given `input` according to the given `format` string into an
/// expanded time.
///
/// See the [module documentation](self) for details on what's supported.
///
/// This is the same as [`ExpandedTime::strptime`].
///
/// # Errors
///
/// This returns an error when parsing failed. This might happen because the
/// format string itself was invalid, or because the input didn't match the
/// format string. It also returns an error when the input matched but a
/// minute or second is out of range, or when some of the input remains
/// unconsumed.
///
/// # Example
///
/// ```
/// use jiff_expanded::fmt::strtime;
///
/// let et = strtime::parse("%T%.f", "26:00:00.5")?;
/// assert_eq!(et.to_string(), "+1 02:00:00.500");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse(
    format: impl AsRef<[u8]>,
    input: impl AsRef<[u8]>,
) -> Result<ExpandedTime, Error> {
    let format = format.as_ref();
    let input = input.as_ref();

    let mut pieces = Pieces::default();
    let mut p = Parser { fmt: format, inp: input, pieces: &mut pieces };
    p.parse().context(E::FailedStrptime)?;
    if !p.inp.is_empty() {
        return Err(Error::from(E::unconsumed(p.inp)));
    }
    pieces.to_expanded_time()
}

/// The fields found while parsing. Nothing is resolved until the entire
/// format has been matched.
#[derive(Debug, Default)]
struct Pieces {
    hour: Option<i64>,
    minute: Option<i8>,
    second: Option<i8>,
    subsec: Option<i32>,
}

impl Pieces {
    fn to_expanded_time(&self) -> Result<ExpandedTime, Error> {
        let Some(hour) = self.hour else {
            return Err(Error::from(E::MissingTimeHour));
        };
        if self.second.is_some() && self.minute.is_none() {
            return Err(Error::from(E::MissingTimeMinuteForSecond));
        }
        if self.subsec.is_some() && self.second.is_none() {
            return Err(Error::from(E::MissingTimeSecondForFractional));
        }
        let et = ExpandedTime::from_expanded_hour(
            hour,
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.subsec.unwrap_or(0),
        )
        .context(E::FailedStrptime)?;
        trace!(
            "strptime resolved hour {hour} to {days} excess day(s) \
             and wall clock {time}",
            days = et.excess_days(),
            time = et.time(),
        );
        Ok(et)
    }
}

struct Parser<'f, 'i, 'p> {
    fmt: &'f [u8],
    inp: &'i [u8],
    pieces: &'p mut Pieces,
}

impl<'f, 'i, 'p> Parser<'f, 'i, 'p> {
    fn parse(&mut self) -> Result<(), Error> {
        let fail = |directive| E::DirectiveFailure { directive };

        while !self.fmt.is_empty() {
            if self.f() != b'%' {
                self.parse_literal()?;
                continue;
            }
            if !self.bump_fmt() {
                return Err(Error::from(E::UnexpectedEndAfterPercent));
            }
            let width = self.parse_extension()?;
            // `%.f` can match the empty string, as can whitespace.
            if self.inp.is_empty() && !matches!(self.f(), b'.' | b'n' | b't')
            {
                return Err(Error::from(E::ExpectedNonEmpty {
                    directive: self.f(),
                }));
            }
            match self.f() {
                b'%' => self.parse_percent().context(fail(b'%'))?,
                b'f' => self.parse_fractional().context(fail(b'f'))?,
                b'H' => self.parse_hour(width).context(fail(b'H'))?,
                b'k' => {
                    self.skip_spaces();
                    self.parse_hour(width).context(fail(b'k'))?
                }
                b'M' => self.parse_minute(width).context(fail(b'M'))?,
                b'N' => self.parse_fractional().context(fail(b'N'))?,
                b'n' | b't' => self.parse_whitespace(),
                b'R' => self.parse_clock_nosecs().context(fail(b'R'))?,
                b'S' => self.parse_second(width).context(fail(b'S'))?,
                b'T' => self.parse_clock_secs().context(fail(b'T'))?,
                b'.' => {
                    if !self.bump_fmt() {
                        return Err(Error::from(E::UnexpectedEndAfterDot));
                    }
                    match self.f() {
                        b'f' => self.parse_dot_fractional().context(
                            E::DirectiveFailureDot { directive: b'f' },
                        )?,
                        unk => {
                            return Err(Error::from(
                                E::UnknownDirectiveAfterDot { directive: unk },
                            ));
                        }
                    }
                }
                unk => {
                    return Err(Error::from(E::UnknownDirective {
                        directive: unk,
                    }));
                }
            }
        }
        Ok(())
    }

    /// Returns the byte at the current position of the format string.
    ///
    /// # Panics
    ///
    /// This panics when the entire format string has been consumed.
    fn f(&self) -> u8 {
        self.fmt[0]
    }

    /// Returns the byte at the current position of the input string.
    ///
    /// # Panics
    ///
    /// This panics when the entire input string has been consumed.
    fn i(&self) -> u8 {
        self.inp[0]
    }

    /// Bumps the position of the format string.
    ///
    /// This returns true in precisely the cases where `self.f()` will not
    /// panic. i.e., When the end of the format string hasn't been reached yet.
    fn bump_fmt(&mut self) -> bool {
        self.fmt = &self.fmt[1..];
        !self.fmt.is_empty()
    }

    /// Bumps the position of the input string.
    ///
    /// This returns true in precisely the cases where `self.i()` will not
    /// panic. i.e., When the end of the input string hasn't been reached yet.
    fn bump_input(&mut self) -> bool {
        self.inp = &self.inp[1..];
        !self.inp.is_empty()
    }

    /// Parses the optional flag and width between a `%` and its directive.
    /// Flags are skipped. If a width is present, it is returned.
    fn parse_extension(&mut self) -> Result<Option<usize>, Error> {
        if matches!(self.f(), b'_' | b'-' | b'0' | b'^' | b'#')
            && !self.bump_fmt()
        {
            return Err(Error::from(E::UnexpectedEndAfterPercent));
        }
        if !self.f().is_ascii_digit() {
            return Ok(None);
        }
        let (width, fmt) = parse_number(self.fmt, 2)?;
        if !(1..=MAX_WIDTH).contains(&width) {
            return Err(Error::from(E::RangeWidth));
        }
        if fmt.is_empty() {
            return Err(Error::from(E::ExpectedDirectiveAfterWidth));
        }
        self.fmt = fmt;
        Ok(Some(width as usize))
    }

    // Each directive parsing routine below assumes that the parser is
    // positioned at the directive (just after the `%` and any extension),
    // and that there is at least one unconsumed byte in the input.

    /// Parses a literal from the input that matches the current byte in the
    /// format string.
    ///
    /// This may consume multiple bytes from the input, for example, a single
    /// whitespace byte in the format string can match zero or more whitespace
    /// in the input.
    fn parse_literal(&mut self) -> Result<(), Error> {
        if self.f().is_ascii_whitespace() {
            self.skip_whitespace();
        } else if self.inp.is_empty() {
            return Err(Error::from(E::ExpectedMatchLiteralEndOfInput {
                expected: self.f(),
            }));
        } else if self.f() != self.i() {
            return Err(Error::from(E::ExpectedMatchLiteralByte {
                expected: self.f(),
                got: self.i(),
            }));
        } else {
            self.bump_input();
        }
        self.bump_fmt();
        Ok(())
    }

    /// Parses `%n` or `%t`, which match any amount of ASCII whitespace.
    fn parse_whitespace(&mut self) {
        self.skip_whitespace();
        self.bump_fmt();
    }

    /// Parses a literal '%' from the input.
    fn parse_percent(&mut self) -> Result<(), Error> {
        if self.i() != b'%' {
            return Err(Error::from(E::ExpectedMatchLiteralByte {
                expected: b'%',
                got: self.i(),
            }));
        }
        self.bump_fmt();
        self.bump_input();
        Ok(())
    }

    /// Parses `%H` or `%k`, which is the expanded hour.
    ///
    /// This is the one lenient directive. Up to 11 digits are read, and the
    /// range is only checked once every directive has been matched.
    fn parse_hour(&mut self, width: Option<usize>) -> Result<(), Error> {
        let (hour, inp) =
            parse_number(self.inp, width.unwrap_or(MAX_HOUR_DIGITS))
                .context(E::ParseHour)?;
        self.inp = inp;
        self.pieces.hour = Some(hour);
        self.bump_fmt();
        Ok(())
    }

    /// Parses `%M`, which is the minute.
    fn parse_minute(&mut self, width: Option<usize>) -> Result<(), Error> {
        let (minute, inp) = parse_number(self.inp, width.unwrap_or(2))
            .context(E::ParseMinute)?;
        let minute =
            Field::Minute.check(minute).context(E::ParseMinute)?;
        self.inp = inp;
        self.pieces.minute = Some(minute as i8);
        self.bump_fmt();
        Ok(())
    }

    /// Parses `%S`, which is the second.
    ///
    /// Unlike Jiff, a leap second of `60` is not clamped to `59`. It's
    /// rejected like any other out of range second.
    fn parse_second(&mut self, width: Option<usize>) -> Result<(), Error> {
        let (second, inp) = parse_number(self.inp, width.unwrap_or(2))
            .context(E::ParseSecond)?;
        let second =
            Field::Second.check(second).context(E::ParseSecond)?;
        self.inp = inp;
        self.pieces.second = Some(second as i8);
        self.bump_fmt();
        Ok(())
    }

    /// Parses `%f` (or `%N`), which is a fractional second up to nanosecond
    /// precision. This must always parse at least one decimal digit and does
    /// not parse any leading dot.
    fn parse_fractional(&mut self) -> Result<(), Error> {
        let (nanos, inp) =
            parse_fraction(self.inp).context(E::ParseFractionalSeconds)?;
        self.inp = inp;
        self.pieces.subsec = Some(nanos);
        self.bump_fmt();
        Ok(())
    }

    /// Parses `%.f`, which is a dot followed by a fractional second up to
    /// nanosecond precision. Note that if there is no leading dot, then this
    /// successfully parses the empty string.
    fn parse_dot_fractional(&mut self) -> Result<(), Error> {
        if !self.inp.starts_with(b".") {
            self.bump_fmt();
            return Ok(());
        }
        self.inp = &self.inp[1..];
        self.parse_fractional()
    }

    /// Parses `%R`, which is equivalent to `%H:%M`.
    fn parse_clock_nosecs(&mut self) -> Result<(), Error> {
        self.parse_sub(b"%H:%M")
    }

    /// Parses `%T`, which is equivalent to `%H:%M:%S`.
    fn parse_clock_secs(&mut self) -> Result<(), Error> {
        self.parse_sub(b"%H:%M:%S")
    }

    /// Runs a nested parser over the given format, sharing this parser's
    /// input and pieces.
    fn parse_sub(&mut self, fmt: &[u8]) -> Result<(), Error> {
        let mut p = Parser { fmt, inp: self.inp, pieces: &mut *self.pieces };
        p.parse()?;
        self.inp = p.inp;
        self.bump_fmt();
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        if !self.inp.is_empty() {
            while self.i().is_ascii_whitespace() && self.bump_input() {}
        }
    }

    fn skip_spaces(&mut self) {
        if !self.inp.is_empty() {
            while self.i() == b' ' && self.bump_input() {}
        }
    }
}
