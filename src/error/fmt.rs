use crate::{error, util::escape};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    DirectiveFailure {
        directive: u8,
    },
    DirectiveFailureDot {
        directive: u8,
    },
    ExpectedColonAfterHour,
    ExpectedDirectiveAfterWidth,
    ExpectedFractionalDigit,
    ExpectedMatchLiteralByte {
        expected: u8,
        got: u8,
    },
    ExpectedMatchLiteralEndOfInput {
        expected: u8,
    },
    ExpectedNonEmpty {
        directive: u8,
    },
    ExpectedSpaceAfterExcessDays,
    ExpectedTwoDigitMinute,
    ExpectedTwoDigitSecond,
    FailedStrptime,
    FailedTemporal,
    InvalidCanonicalHour,
    MissingTimeHour,
    MissingTimeMinuteForSecond,
    MissingTimeSecondForFractional,
    NoDigits,
    NumberTooBig,
    ParseExcessDays,
    ParseFractionalSeconds,
    ParseHour,
    ParseMinute,
    ParseSecond,
    RangeWidth,
    TrailingInput,
    Unconsumed {
        #[cfg(feature = "alloc")]
        remaining: alloc::boxed::Box<[u8]>,
    },
    UnexpectedEndAfterDot,
    UnexpectedEndAfterPercent,
    UnknownDirective {
        directive: u8,
    },
    UnknownDirectiveAfterDot {
        directive: u8,
    },
}

impl Error {
    pub(crate) fn unconsumed(_remaining: &[u8]) -> Error {
        Error::Unconsumed {
            #[cfg(feature = "alloc")]
            remaining: _remaining.into(),
        }
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            DirectiveFailure { directive } => write!(
                f,
                "%{directive} failed",
                directive = escape::Byte(directive),
            ),
            DirectiveFailureDot { directive } => write!(
                f,
                "%.{directive} failed",
                directive = escape::Byte(directive),
            ),
            ExpectedColonAfterHour => f.write_str("expected `:` after hour"),
            ExpectedDirectiveAfterWidth => f.write_str(
                "expected to find specifier directive after width, \
                 but found end of format string",
            ),
            ExpectedFractionalDigit => f.write_str(
                "expected at least one fractional decimal digit, \
                 but did not find any",
            ),
            ExpectedMatchLiteralByte { expected, got } => write!(
                f,
                "expected to match literal byte `{expected}` from \
                 format string, but found byte `{got}` in input",
                expected = escape::Byte(expected),
                got = escape::Byte(got),
            ),
            ExpectedMatchLiteralEndOfInput { expected } => write!(
                f,
                "expected to match literal byte `{expected}` from \
                 format string, but found end of input",
                expected = escape::Byte(expected),
            ),
            ExpectedNonEmpty { directive } => write!(
                f,
                "expected non-empty input for directive `%{directive}`, \
                 but found end of input",
                directive = escape::Byte(directive),
            ),
            ExpectedSpaceAfterExcessDays => f.write_str(
                "expected a single space after excess day count",
            ),
            ExpectedTwoDigitMinute => {
                f.write_str("expected two digit minute after hour")
            }
            ExpectedTwoDigitSecond => {
                f.write_str("expected two digit second after minute")
            }
            FailedStrptime => f.write_str("strptime parsing failed"),
            FailedTemporal => f.write_str("failed to parse expanded time"),
            InvalidCanonicalHour => f.write_str(
                "hour must be less than 24 when an excess day count \
                 is given explicitly",
            ),
            MissingTimeHour => f.write_str(
                "parsing format did not include hour directive, \
                 but an hour is required to build an expanded time",
            ),
            MissingTimeMinuteForSecond => f.write_str(
                "parsing format did not include minute directive, \
                 but did include second directive (cannot have smaller \
                 time units with bigger time units missing)",
            ),
            MissingTimeSecondForFractional => f.write_str(
                "parsing format did not include second directive, \
                 but did include fractional second directive (cannot have \
                 smaller time units with bigger time units missing)",
            ),
            NoDigits => f.write_str("invalid number, no digits found"),
            NumberTooBig => {
                f.write_str("number too big to parse into 64-bit integer")
            }
            ParseExcessDays => f.write_str("failed to parse excess day count"),
            ParseFractionalSeconds => f.write_str(
                "failed to parse fractional second component \
                 (up to 9 digits, nanosecond precision)",
            ),
            ParseHour => f.write_str("failed to parse hour number"),
            ParseMinute => f.write_str("failed to parse minute number"),
            ParseSecond => f.write_str("failed to parse second number"),
            RangeWidth => f.write_str("width must be between 1 and 10"),
            TrailingInput => f.write_str(
                "parsed expanded time, but found unexpected input after it",
            ),
            #[cfg(feature = "alloc")]
            Unconsumed { ref remaining } => write!(
                f,
                "strptime expects to consume the entire input, but \
                 `{remaining}` remains unparsed",
                remaining = escape::Bytes(remaining),
            ),
            #[cfg(not(feature = "alloc"))]
            Unconsumed {} => f.write_str(
                "strptime expects to consume the entire input, but \
                 there is unparsed input remaining",
            ),
            UnexpectedEndAfterDot => f.write_str(
                "invalid format string, expected directive after `%.`",
            ),
            UnexpectedEndAfterPercent => f.write_str(
                "invalid format string, expected byte after `%`, \
                 but found end of format string",
            ),
            UnknownDirective { directive } => write!(
                f,
                "found unrecognized specifier directive `{directive}`",
                directive = escape::Byte(directive),
            ),
            UnknownDirectiveAfterDot { directive } => write!(
                f,
                "found unrecognized specifier directive `{directive}` \
                 following `%.`",
                directive = escape::Byte(directive),
            ),
        }
    }
}
