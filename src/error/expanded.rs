use jiff::Unit;

use crate::{error, util::unit_plural, Field};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedAdjustInto,
    FailedAdd { unit: Unit },
    FailedUntil { unit: Unit },
    FailedWithField { field: Field },
    UnsupportedUnit { unit: Unit },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Expanded(err).into()
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
            FailedAdjustInto => f.write_str(
                "failed to adjust target to expanded time's \
                 nanosecond of day",
            ),
            FailedAdd { unit } => write!(
                f,
                "failed to add {unit} to expanded time",
                unit = unit_plural(unit),
            ),
            FailedUntil { unit } => write!(
                f,
                "failed to compute {unit} between expanded times",
                unit = unit_plural(unit),
            ),
            FailedWithField { field } => write!(
                f,
                "failed to set {field} on expanded time",
                field = field.name(),
            ),
            UnsupportedUnit { unit } => write!(
                f,
                "wall clock arithmetic must use hours or smaller \
                 for its units, but found {unit}",
                unit = unit_plural(unit),
            ),
        }
    }
}
