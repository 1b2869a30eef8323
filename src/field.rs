use jiff::civil::Time;

use crate::{
    error::Error,
    util::{nano_of_day, MAX_NANO_OF_DAY},
};

/// A single field of an [`ExpandedTime`](crate::ExpandedTime) that can be
/// queried with [`ExpandedTime::get`](crate::ExpandedTime::get) or replaced
/// with [`ExpandedTime::with_field`](crate::ExpandedTime::with_field).
///
/// The sub-second fields follow Jiff's convention: [`Field::Millisecond`],
/// [`Field::Microsecond`] and [`Field::Nanosecond`] are each in the range
/// `0..=999` and measure the component within their parent unit. That is,
/// the time `00:00:00.123456789` has a millisecond of `123`, a microsecond
/// of `456` and a nanosecond of `789`. [`Field::SubsecNanosecond`] combines
/// them into the full fractional second, `123456789`.
///
/// # The hour field
///
/// [`Field::Hour`] is the one field whose read and write views differ.
/// Reading it returns the *expanded* hour (which includes excess days) while
/// writing it sets the *wrapped* wall clock hour and leaves the excess days
/// alone. See [`ExpandedTime::get`](crate::ExpandedTime::get) for an example.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Field {
    /// The hour of the day.
    Hour,
    /// The minute of the hour, in the range `0..=59`.
    Minute,
    /// The second of the minute, in the range `0..=59`.
    Second,
    /// The millisecond of the second, in the range `0..=999`.
    Millisecond,
    /// The microsecond of the millisecond, in the range `0..=999`.
    Microsecond,
    /// The nanosecond of the microsecond, in the range `0..=999`.
    Nanosecond,
    /// The fractional second in nanoseconds, in the range
    /// `0..=999_999_999`.
    SubsecNanosecond,
    /// The nanoseconds elapsed since midnight of the wall clock, in the range
    /// `0..=86_399_999_999_999`.
    NanoOfDay,
}

impl Field {
    /// Returns a human readable name for this field.
    pub(crate) fn name(self) -> &'static str {
        match self {
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
            Field::Millisecond => "millisecond",
            Field::Microsecond => "microsecond",
            Field::Nanosecond => "nanosecond",
            Field::SubsecNanosecond => "subsec-nanosecond",
            Field::NanoOfDay => "nanosecond-of-day",
        }
    }

    /// Returns the inclusive range of values this field permits on a wall
    /// clock time.
    pub(crate) fn range(self) -> (i64, i64) {
        match self {
            Field::Hour => (0, 23),
            Field::Minute | Field::Second => (0, 59),
            Field::Millisecond | Field::Microsecond | Field::Nanosecond => {
                (0, 999)
            }
            Field::SubsecNanosecond => (0, 999_999_999),
            Field::NanoOfDay => (0, MAX_NANO_OF_DAY),
        }
    }

    /// Checks that the given value is within this field's range.
    pub(crate) fn check(self, value: i64) -> Result<i64, Error> {
        let (min, max) = self.range();
        if !(min <= value && value <= max) {
            return Err(Error::field_range(self, value));
        }
        Ok(value)
    }

    /// Returns this field's value on the given wall clock time.
    pub(crate) fn get(self, time: Time) -> i64 {
        match self {
            Field::Hour => i64::from(time.hour()),
            Field::Minute => i64::from(time.minute()),
            Field::Second => i64::from(time.second()),
            Field::Millisecond => i64::from(time.millisecond()),
            Field::Microsecond => i64::from(time.microsecond()),
            Field::Nanosecond => i64::from(time.nanosecond()),
            Field::SubsecNanosecond => i64::from(time.subsec_nanosecond()),
            Field::NanoOfDay => nano_of_day(time),
        }
    }

    /// Returns a copy of the given wall clock time with this field set to
    /// `value`.
    ///
    /// The value is range checked first, so the narrowing casts below are
    /// lossless.
    pub(crate) fn set(self, time: Time, value: i64) -> Result<Time, Error> {
        let value = self.check(value)?;
        let with = time.with();
        let time = match self {
            Field::Hour => with.hour(value as i8).build()?,
            Field::Minute => with.minute(value as i8).build()?,
            Field::Second => with.second(value as i8).build()?,
            Field::Millisecond => with.millisecond(value as i16).build()?,
            Field::Microsecond => with.microsecond(value as i16).build()?,
            Field::Nanosecond => with.nanosecond(value as i16).build()?,
            Field::SubsecNanosecond => {
                with.subsec_nanosecond(value as i32).build()?
            }
            Field::NanoOfDay => crate::adjust::time_from_nano_of_day(value),
        };
        Ok(time)
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
