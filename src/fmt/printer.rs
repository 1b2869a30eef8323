use core::fmt::Write;

use jiff::civil::Time;

use crate::ExpandedTime;

/// Formats the canonical form of an expanded time: the wrapped wall clock
/// time, prefixed by `+N ` when there is at least one excess day.
pub(crate) fn print_canonical<W: Write>(
    et: &ExpandedTime,
    mut wtr: W,
) -> core::fmt::Result {
    if et.excess_days() > 0 {
        write!(wtr, "+{} ", et.excess_days())?;
    }
    print_clock(i64::from(et.time().hour()), et.time(), wtr)
}

/// Formats the expanded-hour form of an expanded time. The excess days are
/// folded back into the hour, which may have more than two digits.
pub(crate) fn print_expanded<W: Write>(
    et: &ExpandedTime,
    wtr: W,
) -> core::fmt::Result {
    print_clock(et.expanded_hour(), et.time(), wtr)
}

/// Formats `HH:MM[:SS[.fraction]]` using the given hour in place of the
/// wall clock's own hour.
///
/// Seconds are only written when the seconds or the fractional second are
/// non-zero. The fraction is only written when non-zero, and uses the
/// smallest of millisecond, microsecond or nanosecond precision that
/// represents it exactly.
fn print_clock<W: Write>(
    hour: i64,
    time: Time,
    mut wtr: W,
) -> core::fmt::Result {
    write!(wtr, "{hour:02}:{minute:02}", minute = time.minute())?;
    let (second, nanos) = (time.second(), time.subsec_nanosecond());
    if second == 0 && nanos == 0 {
        return Ok(());
    }
    write!(wtr, ":{second:02}")?;
    if nanos == 0 {
        return Ok(());
    }
    if nanos % 1_000_000 == 0 {
        write!(wtr, ".{:03}", nanos / 1_000_000)
    } else if nanos % 1_000 == 0 {
        write!(wtr, ".{:06}", nanos / 1_000)
    } else {
        write!(wtr, ".{nanos:09}")
    }
}
