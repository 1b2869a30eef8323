use jiff::{
    civil::{DateTime, Time},
    SignedDuration,
};

use crate::{error::Error, Field};

/// A value whose time of day can be replaced by a nanosecond of day.
///
/// This is the target interface for
/// [`ExpandedTime::adjust_into`](crate::ExpandedTime::adjust_into). It is
/// implemented for Jiff's [`Time`] and [`DateTime`]. In both cases, the
/// nanosecond of day must be in the range `0..=86_399_999_999_999`, or else
/// an error is returned.
///
/// # Example
///
/// ```
/// use jiff::civil::{date, time};
/// use jiff_expanded::AdjustNanoOfDay;
///
/// let t = time(9, 0, 0, 0).with_nano_of_day(3_600_000_000_000)?;
/// assert_eq!(t, time(1, 0, 0, 0));
///
/// let dt = date(2024, 7, 15).at(9, 0, 0, 0);
/// let dt = dt.with_nano_of_day(1)?;
/// assert_eq!(dt, date(2024, 7, 15).at(0, 0, 0, 1));
///
/// assert!(time(0, 0, 0, 0).with_nano_of_day(86_400_000_000_000).is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait AdjustNanoOfDay: Sized {
    /// Returns a copy of this value with its time of day set to the given
    /// number of nanoseconds after midnight.
    fn with_nano_of_day(self, nanos: i64) -> Result<Self, Error>;
}

impl AdjustNanoOfDay for Time {
    fn with_nano_of_day(self, nanos: i64) -> Result<Time, Error> {
        let nanos = Field::NanoOfDay.check(nanos)?;
        Ok(time_from_nano_of_day(nanos))
    }
}

impl AdjustNanoOfDay for DateTime {
    fn with_nano_of_day(self, nanos: i64) -> Result<DateTime, Error> {
        let time = self.time().with_nano_of_day(nanos)?;
        Ok(self.date().to_datetime(time))
    }
}

/// Converts a range checked nanosecond of day into a wall clock time.
pub(crate) fn time_from_nano_of_day(nanos: i64) -> Time {
    debug_assert!(Field::NanoOfDay.check(nanos).is_ok());
    Time::MIN.wrapping_add(SignedDuration::from_nanos(nanos))
}
