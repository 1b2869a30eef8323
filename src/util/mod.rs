use jiff::{civil::Time, Unit};

pub(crate) mod escape;

pub(crate) const HOURS_PER_DAY: i64 = 24;
pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
pub(crate) const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
pub(crate) const NANOS_PER_DAY: i64 = HOURS_PER_DAY * NANOS_PER_HOUR;

/// The largest expanded hour: the most excess days an `i32` can count, plus
/// the last wall clock hour.
pub(crate) const MAX_EXPANDED_HOUR: i64 =
    i32::MAX as i64 * HOURS_PER_DAY + (HOURS_PER_DAY - 1);

/// The largest nanosecond of day that a wall clock time can represent.
pub(crate) const MAX_NANO_OF_DAY: i64 = NANOS_PER_DAY - 1;

/// Returns the number of nanoseconds elapsed since midnight for the given
/// wall clock time.
pub(crate) fn nano_of_day(time: Time) -> i64 {
    i64::from(time.hour()) * NANOS_PER_HOUR
        + i64::from(time.minute()) * NANOS_PER_MINUTE
        + i64::from(time.second()) * NANOS_PER_SECOND
        + i64::from(time.subsec_nanosecond())
}

/// Returns the number of nanoseconds in a single unit, but only for units
/// that a wall clock supports. That is, hours or smaller.
pub(crate) fn wall_unit_nanos(unit: Unit) -> Option<i64> {
    Some(match unit {
        Unit::Hour => NANOS_PER_HOUR,
        Unit::Minute => NANOS_PER_MINUTE,
        Unit::Second => NANOS_PER_SECOND,
        Unit::Millisecond => 1_000_000,
        Unit::Microsecond => 1_000,
        Unit::Nanosecond => 1,
        _ => return None,
    })
}

/// Returns the plural name of the given unit, suitable for error messages.
pub(crate) fn unit_plural(unit: Unit) -> &'static str {
    match unit {
        Unit::Year => "years",
        Unit::Month => "months",
        Unit::Week => "weeks",
        Unit::Day => "days",
        Unit::Hour => "hours",
        Unit::Minute => "minutes",
        Unit::Second => "seconds",
        Unit::Millisecond => "milliseconds",
        Unit::Microsecond => "microseconds",
        Unit::Nanosecond => "nanoseconds",
    }
}
