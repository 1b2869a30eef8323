use jiff::{civil::Time, SignedDuration, Unit};

use crate::{
    adjust::AdjustNanoOfDay,
    error::{expanded::Error as E, Error, ErrorContext},
    fmt::{printer, strtime, temporal},
    util::{
        nano_of_day, wall_unit_nanos, HOURS_PER_DAY, MAX_EXPANDED_HOUR,
        NANOS_PER_DAY, NANOS_PER_HOUR,
    },
    Field,
};

/// A wall clock time plus a non-negative number of excess days.
///
/// An `ExpandedTime` represents a time of day written with an hour that may
/// run past `23`, as is common in transit timetables: `25:30` means `01:30`
/// on the day after the service day started. Internally, the hour is always
/// folded into a normalized [`jiff::civil::Time`] (the "wall clock") and a
/// count of *excess days*. So `25:30` is stored as one excess day and a wall
/// clock time of `01:30`.
///
/// An expanded time has no date and no time zone. The excess day count is a
/// duration, not a calendar day.
///
/// # Construction
///
/// [`ExpandedTime::new`] accepts any non-negative hour and folds it:
///
/// ```
/// use jiff::civil::time;
/// use jiff_expanded::ExpandedTime;
///
/// let et = ExpandedTime::new(25, 30, 0)?;
/// assert_eq!(et.excess_days(), 1);
/// assert_eq!(et.time(), time(1, 30, 0, 0));
/// assert_eq!(et.expanded_hour(), 25);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// [`ExpandedTime::with_excess_days`] takes the day count explicitly and
/// does *not* fold. Its hour must be a wall clock hour:
///
/// ```
/// use jiff_expanded::ExpandedTime;
///
/// let et = ExpandedTime::with_excess_days(1, 1, 30, 0)?;
/// assert_eq!(et, ExpandedTime::new(25, 30, 0)?);
/// assert!(ExpandedTime::with_excess_days(1, 25, 30, 0).is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Formatting and parsing
///
/// The `Display` impl writes the *canonical* form, which is the wall clock
/// time prefixed by `+N ` when there are excess days.
/// [`ExpandedTime::display_expanded`] writes the *expanded-hour* form
/// instead. Both parse back with `str::parse`:
///
/// ```
/// use jiff_expanded::ExpandedTime;
///
/// let et = ExpandedTime::new(25, 30, 0)?;
/// assert_eq!(et.to_string(), "+1 01:30");
/// assert_eq!(et.display_expanded().to_string(), "25:30");
/// assert_eq!("+1 01:30".parse::<ExpandedTime>()?, et);
/// assert_eq!("25:30".parse::<ExpandedTime>()?, et);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// Other formats can be parsed with [`ExpandedTime::strptime`].
///
/// # Comparisons
///
/// Expanded times are ordered by their excess days first, and then by their
/// wall clock time. This means that any time with more excess days is
/// greater, regardless of its wall clock:
///
/// ```
/// use jiff_expanded::ExpandedTime;
///
/// let late = ExpandedTime::with_excess_days(0, 23, 59, 59)?;
/// let early_next_day = ExpandedTime::with_excess_days(1, 0, 0, 0)?;
/// assert!(late < early_next_day);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Arithmetic does not fold
///
/// [`ExpandedTime::wrapping_add`] and [`ExpandedTime::with_field`] operate
/// on the wall clock only. They never change the excess days, and the wall
/// clock wraps around midnight. To get a day-folded result, build a new
/// value with [`ExpandedTime::new`].
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct ExpandedTime {
    // N.B. The field order matters: the derived `Ord` compares excess days
    // before the wall clock.
    excess_days: i32,
    time: Time,
}

impl ExpandedTime {
    /// The minimum expanded time: midnight with no excess days.
    pub const MIN: ExpandedTime =
        ExpandedTime { excess_days: 0, time: Time::MIN };

    /// Creates a new expanded time from an hour that may exceed `23`.
    ///
    /// The hour is folded into a wall clock hour (`hour % 24`) and a number
    /// of excess days (`hour / 24`). Folding is exact: the
    /// [`expanded hour`](ExpandedTime::expanded_hour) of the result is always
    /// `hour`.
    ///
    /// # Errors
    ///
    /// This returns an error when `hour` is negative, or when `minute` or
    /// `second` are not in the range `0..=59`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::time;
    /// use jiff_expanded::ExpandedTime;
    ///
    /// let et = ExpandedTime::new(49, 5, 0)?;
    /// assert_eq!(et.excess_days(), 2);
    /// assert_eq!(et.time(), time(1, 5, 0, 0));
    ///
    /// assert!(ExpandedTime::new(-1, 0, 0).is_err());
    /// assert!(ExpandedTime::new(25, 60, 0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(
        hour: i32,
        minute: i8,
        second: i8,
    ) -> Result<ExpandedTime, Error> {
        ExpandedTime::new_subsec(hour, minute, second, 0)
    }

    /// Like [`ExpandedTime::new`], but also accepts a fractional second in
    /// units of nanoseconds.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`ExpandedTime::new`], this returns an
    /// error when `subsec_nanosecond` is not in the range
    /// `0..=999_999_999`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_expanded::ExpandedTime;
    ///
    /// let et = ExpandedTime::new_subsec(26, 0, 1, 500_000_000)?;
    /// assert_eq!(et.to_string(), "+1 02:00:01.500");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new_subsec(
        hour: i32,
        minute: i8,
        second: i8,
        subsec_nanosecond: i32,
    ) -> Result<ExpandedTime, Error> {
        if hour < 0 {
            return Err(Error::range("hour", hour, 0, i32::MAX));
        }
        ExpandedTime::from_expanded_hour(
            i64::from(hour),
            minute,
            second,
            subsec_nanosecond,
        )
    }

    /// Folds an expanded hour of any size this type can represent. That is,
    /// every hour in `0..=i32::MAX * 24 + 23`.
    ///
    /// This is what the parsers use, since a printed expanded hour may not
    /// fit in an `i32`.
    pub(crate) fn from_expanded_hour(
        hour: i64,
        minute: i8,
        second: i8,
        subsec_nanosecond: i32,
    ) -> Result<ExpandedTime, Error> {
        if !(0..=MAX_EXPANDED_HOUR).contains(&hour) {
            return Err(Error::range("hour", hour, 0, MAX_EXPANDED_HOUR));
        }
        // Both casts are lossless after the range check above.
        let excess_days = (hour / HOURS_PER_DAY) as i32;
        let wall_hour = (hour % HOURS_PER_DAY) as i32;
        let time =
            checked_time(wall_hour, minute, second, subsec_nanosecond)?;
        trace!("folded hour {hour} into {excess_days} excess day(s)");
        Ok(ExpandedTime { excess_days, time })
    }

    /// Creates a new expanded time from an explicit number of excess days
    /// and a wall clock time.
    ///
    /// Unlike [`ExpandedTime::new`], the hour is not folded. It must be a
    /// wall clock hour.
    ///
    /// # Errors
    ///
    /// This returns an error when `excess_days` is negative, when `hour` is
    /// not in the range `0..=23` or when `minute` or `second` are not in the
    /// range `0..=59`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_expanded::ExpandedTime;
    ///
    /// let et = ExpandedTime::with_excess_days(2, 1, 5, 0)?;
    /// assert_eq!(et.expanded_hour(), 49);
    ///
    /// let err = ExpandedTime::with_excess_days(0, 24, 0, 0).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "parameter 'hour' with value 24 is not in the required range of 0..=23",
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_excess_days(
        excess_days: i32,
        hour: i8,
        minute: i8,
        second: i8,
    ) -> Result<ExpandedTime, Error> {
        let time = checked_time(i32::from(hour), minute, second, 0)?;
        ExpandedTime::from_time(excess_days, time)
    }

    /// Creates a new expanded time from an explicit number of excess days
    /// and an existing wall clock time.
    ///
    /// # Errors
    ///
    /// This returns an error when `excess_days` is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::time;
    /// use jiff_expanded::ExpandedTime;
    ///
    /// let et = ExpandedTime::from_time(1, time(1, 30, 0, 123))?;
    /// assert_eq!(et.display_expanded().to_string(), "25:30:00.000000123");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_time(
        excess_days: i32,
        time: Time,
    ) -> Result<ExpandedTime, Error> {
        if excess_days < 0 {
            return Err(Error::range("excess-days", excess_days, 0, i32::MAX));
        }
        Ok(ExpandedTime { excess_days, time })
    }

    /// Returns midnight with no excess days. This is the same as
    /// [`ExpandedTime::MIN`].
    #[inline]
    pub const fn midnight() -> ExpandedTime {
        ExpandedTime::MIN
    }

    /// Parses an expanded time from `input` according to the `format` given.
    ///
    /// The hour directives (`%H` and `%k`) are lenient: an hour of `24` or
    /// more is folded into excess days. See the [`strtime`] module for the
    /// supported directives.
    ///
    /// # Errors
    ///
    /// This returns an error when the input doesn't match the format, or
    /// when a minute or second is out of range. Such errors always report
    /// true for [`Error::is_parse`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_expanded::ExpandedTime;
    ///
    /// let et = ExpandedTime::strptime("%H:%M", "25:30")?;
    /// assert_eq!(et, ExpandedTime::new(25, 30, 0)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn strptime(
        format: impl AsRef<[u8]>,
        input: impl AsRef<[u8]>,
    ) -> Result<ExpandedTime, Error> {
        strtime::parse(format, input)
    }

    /// Returns the number of whole days by which this time's hour exceeds a
    /// single day. This is never negative.
    #[inline]
    pub fn excess_days(self) -> i32 {
        self.excess_days
    }

    /// Returns the wall clock time. Its hour is always in the range
    /// `0..=23`.
    #[inline]
    pub fn time(self) -> Time {
        self.time
    }

    /// Returns the hour with the excess days folded back in. That is,
    /// `time().hour() + excess_days() * 24`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_expanded::ExpandedTime;
    ///
    /// assert_eq!(ExpandedTime::new(1, 0, 0)?.expanded_hour(), 1);
    /// assert_eq!(ExpandedTime::new(73, 0, 0)?.expanded_hour(), 73);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn expanded_hour(self) -> i64 {
        i64::from(self.time.hour())
            + i64::from(self.excess_days) * HOURS_PER_DAY
    }

    /// Returns the minute of the wall clock, in the range `0..=59`.
    #[inline]
    pub fn minute(self) -> i8 {
        self.time.minute()
    }

    /// Returns the second of the wall clock, in the range `0..=59`.
    #[inline]
    pub fn second(self) -> i8 {
        self.time.second()
    }

    /// Returns the fractional second of the wall clock in nanoseconds, in
    /// the range `0..=999_999_999`.
    #[inline]
    pub fn subsec_nanosecond(self) -> i32 {
        self.time.subsec_nanosecond()
    }

    /// Returns the value of the given field.
    ///
    /// Every field reads the wall clock, except for [`Field::Hour`], which
    /// returns the [expanded hour](ExpandedTime::expanded_hour).
    ///
    /// # Read/write asymmetry of the hour
    ///
    /// [`ExpandedTime::with_field`] with [`Field::Hour`] sets the *wrapped*
    /// wall clock hour and keeps the excess days. So writing an hour and
    /// reading it back does not return the value written when there are
    /// excess days. This is deliberate and preserved for compatibility with
    /// existing timetable code:
    ///
    /// ```
    /// use jiff_expanded::{ExpandedTime, Field};
    ///
    /// let et = ExpandedTime::new(25, 30, 0)?;
    /// assert_eq!(et.get(Field::Hour), 25);
    ///
    /// let et = et.with_field(Field::Hour, 3)?;
    /// assert_eq!(et.excess_days(), 1);
    /// assert_eq!(et.get(Field::Hour), 27);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// Similarly, [`Field::NanoOfDay`] reads the wall clock's nanosecond of
    /// day. It does not include the excess days.
    pub fn get(self, field: Field) -> i64 {
        match field {
            Field::Hour => self.expanded_hour(),
            _ => field.get(self.time),
        }
    }

    /// Returns a copy of this expanded time with the given wall clock field
    /// replaced. The excess days are never changed.
    ///
    /// See [`ExpandedTime::get`] for how this interacts with
    /// [`Field::Hour`].
    ///
    /// # Errors
    ///
    /// This returns an error when `value` is not within the field's wall
    /// clock range. For example, an hour must be in the range `0..=23`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::time;
    /// use jiff_expanded::{ExpandedTime, Field};
    ///
    /// let et = ExpandedTime::new(25, 30, 0)?;
    /// let et = et.with_field(Field::Millisecond, 250)?;
    /// assert_eq!(et.time(), time(1, 30, 0, 250_000_000));
    ///
    /// assert!(et.with_field(Field::Hour, 25).unwrap_err().is_invalid_field());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_field(
        self,
        field: Field,
        value: i64,
    ) -> Result<ExpandedTime, Error> {
        let time =
            field.set(self.time, value).context(E::FailedWithField { field })?;
        Ok(ExpandedTime { time, ..self })
    }

    /// Adds the given amount of `unit`s to the wall clock, wrapping around
    /// midnight. The excess days are never changed.
    ///
    /// The amount may be negative.
    ///
    /// # Errors
    ///
    /// This returns an error when `unit` is bigger than [`Unit::Hour`],
    /// since a wall clock has no notion of days.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::{civil::time, Unit};
    /// use jiff_expanded::ExpandedTime;
    ///
    /// let et = ExpandedTime::new(25, 30, 0)?;
    ///
    /// // Wraps within the wall clock, leaving excess days alone.
    /// let later = et.wrapping_add(23, Unit::Hour)?;
    /// assert_eq!(later.excess_days(), 1);
    /// assert_eq!(later.time(), time(0, 30, 0, 0));
    ///
    /// let earlier = et.wrapping_add(-90, Unit::Minute)?;
    /// assert_eq!(earlier.excess_days(), 1);
    /// assert_eq!(earlier.time(), time(0, 0, 0, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn wrapping_add(
        self,
        amount: i64,
        unit: Unit,
    ) -> Result<ExpandedTime, Error> {
        let unit_nanos = wall_unit_nanos(unit)
            .ok_or(E::UnsupportedUnit { unit })
            .context(E::FailedAdd { unit })?;
        // Reduce modulo a day first so that the product never overflows a
        // `SignedDuration`. The result is in `0..NANOS_PER_DAY`.
        let nanos = (i128::from(amount) * i128::from(unit_nanos))
            .rem_euclid(i128::from(NANOS_PER_DAY)) as i64;
        let time = self.time.wrapping_add(SignedDuration::from_nanos(nanos));
        Ok(ExpandedTime { time, ..self })
    }

    /// Returns true if and only if the given unit can be used with
    /// [`ExpandedTime::wrapping_add`] and [`ExpandedTime::until`].
    ///
    /// Only units of hours or smaller are supported.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::Unit;
    /// use jiff_expanded::ExpandedTime;
    ///
    /// assert!(ExpandedTime::is_supported_unit(Unit::Hour));
    /// assert!(ExpandedTime::is_supported_unit(Unit::Nanosecond));
    /// assert!(!ExpandedTime::is_supported_unit(Unit::Day));
    /// ```
    pub fn is_supported_unit(unit: Unit) -> bool {
        wall_unit_nanos(unit).is_some()
    }

    /// Returns the number of whole `unit`s from this wall clock time until
    /// the `other` wall clock time. The result is truncated toward zero and
    /// is negative when `other` is earlier on the wall clock.
    ///
    /// Excess days are ignored. Only the wall clocks are compared.
    ///
    /// # Errors
    ///
    /// This returns an error when `unit` is bigger than [`Unit::Hour`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::Unit;
    /// use jiff_expanded::ExpandedTime;
    ///
    /// let start = ExpandedTime::new(22, 0, 0)?;
    /// let end = ExpandedTime::new(25, 30, 0)?;
    /// // 22:00 to 01:30 on the wall clock, going backwards.
    /// assert_eq!(start.until(end, Unit::Hour)?, -20);
    /// assert_eq!(start.until(end, Unit::Minute)?, -1230);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn until(
        self,
        other: ExpandedTime,
        unit: Unit,
    ) -> Result<i64, Error> {
        let unit_nanos = wall_unit_nanos(unit)
            .ok_or(E::UnsupportedUnit { unit })
            .context(E::FailedUntil { unit })?;
        let nanos = nano_of_day(other.time) - nano_of_day(self.time);
        Ok(nanos / unit_nanos)
    }

    /// Returns the "nanosecond of day" of this expanded time, as computed by
    /// the timetable code this type is compatible with.
    ///
    /// **This is probably not what you want.** The value returned is
    /// `excess_days() + 86_400_000_000_000 + (wall clock nanosecond of day)`.
    /// That is, the excess day count is added as a raw number of
    /// nanoseconds, and a full day of nanoseconds is always added, even when
    /// there are no excess days. The formula is reproduced exactly because
    /// [`ExpandedTime::adjust_into`] is defined in terms of it. Use
    /// [`ExpandedTime::to_duration`] for the actual elapsed time since the
    /// start of the service day.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_expanded::ExpandedTime;
    ///
    /// let day = 86_400_000_000_000;
    /// assert_eq!(ExpandedTime::MIN.to_nano_of_day(), day);
    /// assert_eq!(ExpandedTime::new(24, 0, 0)?.to_nano_of_day(), day + 1);
    /// assert_eq!(
    ///     ExpandedTime::new(25, 0, 0)?.to_nano_of_day(),
    ///     day + 1 + 3_600_000_000_000,
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_nano_of_day(self) -> i64 {
        i64::from(self.excess_days) + NANOS_PER_DAY + nano_of_day(self.time)
    }

    /// Returns the elapsed time since midnight of the day on which the
    /// excess days are counted. That is,
    /// `excess_days() * 24h + (wall clock time since midnight)`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::SignedDuration;
    /// use jiff_expanded::ExpandedTime;
    ///
    /// let et = ExpandedTime::new(25, 30, 0)?;
    /// assert_eq!(et.to_duration(), SignedDuration::from_mins(25 * 60 + 30));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_duration(self) -> SignedDuration {
        let hours = SignedDuration::from_hours(self.expanded_hour());
        let rest = nano_of_day(self.time)
            - i64::from(self.time.hour()) * NANOS_PER_HOUR;
        hours + SignedDuration::from_nanos(rest)
    }

    /// Sets the time of day of `target` to this expanded time's
    /// [`ExpandedTime::to_nano_of_day`].
    ///
    /// # Errors
    ///
    /// Since `to_nano_of_day` always exceeds the nanoseconds in a single day,
    /// this returns an error for every target provided by this crate. The
    /// operation is kept so that callers relying on its failure keep
    /// failing. The error reports true for [`Error::is_invalid_field`].
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::time;
    /// use jiff_expanded::ExpandedTime;
    ///
    /// let et = ExpandedTime::new(1, 30, 0)?;
    /// let err = et.adjust_into(time(9, 0, 0, 0)).unwrap_err();
    /// assert!(err.is_invalid_field());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn adjust_into<T: AdjustNanoOfDay>(
        self,
        target: T,
    ) -> Result<T, Error> {
        let nanos = self.to_nano_of_day();
        let result =
            target.with_nano_of_day(nanos).context(E::FailedAdjustInto);
        if result.is_err() {
            debug!("could not adjust target to nanosecond of day {nanos}");
        }
        result
    }

    /// Returns a value that formats this expanded time in its expanded-hour
    /// form, e.g., `25:30`.
    ///
    /// The hour is zero padded to at least two digits and is never
    /// truncated. Seconds are written only when the seconds or fractional
    /// seconds are non-zero. The fraction is written only when non-zero, with
    /// the fewest of 3, 6 or 9 digits that represent it exactly.
    ///
    /// Parsing the output with `str::parse` returns an equal expanded time.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::time;
    /// use jiff_expanded::ExpandedTime;
    ///
    /// let et = ExpandedTime::new(25, 30, 0)?;
    /// assert_eq!(et.display_expanded().to_string(), "25:30");
    ///
    /// let et = ExpandedTime::from_time(4, time(4, 0, 5, 0))?;
    /// assert_eq!(et.display_expanded().to_string(), "100:00:05");
    ///
    /// let et = ExpandedTime::from_time(0, time(7, 0, 0, 123_000))?;
    /// assert_eq!(et.display_expanded().to_string(), "07:00:00.000123");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn display_expanded(self) -> ExpandedHourDisplay {
        ExpandedHourDisplay { et: self }
    }

    /// Returns the canonical form of this expanded time as a string.
    ///
    /// This is the same as `to_string()`.
    #[cfg(feature = "alloc")]
    pub fn to_canonical_string(self) -> alloc::string::String {
        use alloc::string::ToString;

        self.to_string()
    }

    /// Returns the expanded-hour form of this expanded time as a string.
    ///
    /// This is the same as `display_expanded().to_string()`.
    #[cfg(feature = "alloc")]
    pub fn to_expanded_hour_string(self) -> alloc::string::String {
        use alloc::string::ToString;

        self.display_expanded().to_string()
    }
}

impl Default for ExpandedTime {
    fn default() -> ExpandedTime {
        ExpandedTime::MIN
    }
}

impl core::fmt::Display for ExpandedTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        printer::print_canonical(self, f)
    }
}

impl core::fmt::Debug for ExpandedTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::str::FromStr for ExpandedTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<ExpandedTime, Error> {
        temporal::parse(s.as_bytes())
    }
}

/// A `Display` adapter for the expanded-hour form of an [`ExpandedTime`].
///
/// This is created by [`ExpandedTime::display_expanded`].
#[derive(Clone, Copy, Debug)]
pub struct ExpandedHourDisplay {
    et: ExpandedTime,
}

impl core::fmt::Display for ExpandedHourDisplay {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        printer::print_expanded(&self.et, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ExpandedTime {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.display_expanded())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ExpandedTime {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<ExpandedTime, D::Error> {
        use serde::de;

        struct ExpandedTimeVisitor;

        impl<'de> de::Visitor<'de> for ExpandedTimeVisitor {
            type Value = ExpandedTime;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an expanded time string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<ExpandedTime, E> {
                temporal::parse(value).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<ExpandedTime, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_str(ExpandedTimeVisitor)
    }
}

/// Builds a wall clock time after checking each field, so that errors name
/// the offending field in this crate's own terms.
fn checked_time(
    hour: i32,
    minute: i8,
    second: i8,
    subsec_nanosecond: i32,
) -> Result<Time, Error> {
    let hour = Field::Hour.check(i64::from(hour))?;
    let minute = Field::Minute.check(i64::from(minute))?;
    let second = Field::Second.check(i64::from(second))?;
    let subsec =
        Field::SubsecNanosecond.check(i64::from(subsec_nanosecond))?;
    Ok(Time::new(hour as i8, minute as i8, second as i8, subsec as i32)?)
}

#[cfg(test)]
impl quickcheck::Arbitrary for ExpandedTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> ExpandedTime {
        // Mix small day counts, as in real timetables, with the whole range
        // and values right at the top of it.
        let excess_days = match u8::arbitrary(g) % 4 {
            0 | 1 => i32::from(u16::arbitrary(g) % 1_000),
            2 => i32::MAX - i32::from(u16::arbitrary(g) % 1_000),
            _ => (u32::arbitrary(g) % (i32::MAX as u32 + 1)) as i32,
        };
        let hour = (u8::arbitrary(g) % 24) as i8;
        let minute = (u8::arbitrary(g) % 60) as i8;
        let second = (u8::arbitrary(g) % 60) as i8;
        let subsec = match u8::arbitrary(g) % 4 {
            0 => 0,
            1 => (u32::arbitrary(g) % 1_000) as i32 * 1_000_000,
            2 => (u32::arbitrary(g) % 1_000_000) as i32 * 1_000,
            _ => (u32::arbitrary(g) % 1_000_000_000) as i32,
        };
        let time = jiff::civil::time(hour, minute, second, subsec);
        ExpandedTime { excess_days, time }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use jiff::civil::{date, time};

    use crate::util::NANOS_PER_SECOND;

    use super::*;

    fn et(hour: i32, minute: i8, second: i8) -> ExpandedTime {
        ExpandedTime::new(hour, minute, second).unwrap()
    }

    fn etd(days: i32, hour: i8, minute: i8, second: i8) -> ExpandedTime {
        ExpandedTime::with_excess_days(days, hour, minute, second).unwrap()
    }

    fn ets(days: i32, subsec: i32) -> ExpandedTime {
        ExpandedTime::from_time(days, time(0, 0, 0, subsec)).unwrap()
    }

    #[test]
    fn new_folds_hour() {
        let t = et(25, 30, 0);
        assert_eq!(t.excess_days(), 1);
        assert_eq!(t.time(), time(1, 30, 0, 0));

        let t = et(23, 59, 59);
        assert_eq!(t.excess_days(), 0);
        assert_eq!(t.time(), time(23, 59, 59, 0));

        let t = et(24, 0, 0);
        assert_eq!(t.excess_days(), 1);
        assert_eq!(t.time(), time(0, 0, 0, 0));

        let t = et(i32::MAX, 59, 59);
        assert_eq!(t.excess_days(), i32::MAX / 24);
        assert_eq!(t.expanded_hour(), i64::from(i32::MAX));
    }

    #[test]
    fn new_rejects_invalid_fields() {
        insta::assert_snapshot!(
            ExpandedTime::new(-1, 0, 0).unwrap_err(),
            @"parameter 'hour' with value -1 is not in the required range of 0..=2147483647",
        );
        insta::assert_snapshot!(
            ExpandedTime::new(25, 60, 0).unwrap_err(),
            @"parameter 'minute' with value 60 is not in the required range of 0..=59",
        );
        insta::assert_snapshot!(
            ExpandedTime::new(25, 0, -1).unwrap_err(),
            @"parameter 'second' with value -1 is not in the required range of 0..=59",
        );
        insta::assert_snapshot!(
            ExpandedTime::new_subsec(25, 0, 0, 1_000_000_000).unwrap_err(),
            @"parameter 'subsec-nanosecond' with value 1000000000 is not in the required range of 0..=999999999",
        );
        let err = ExpandedTime::new(25, 60, 0).unwrap_err();
        assert!(err.is_invalid_field());
    }

    #[test]
    fn with_excess_days_does_not_fold() {
        assert_eq!(etd(1, 1, 30, 0), et(25, 30, 0));
        assert_eq!(etd(0, 23, 0, 0).excess_days(), 0);

        insta::assert_snapshot!(
            ExpandedTime::with_excess_days(1, 24, 0, 0).unwrap_err(),
            @"parameter 'hour' with value 24 is not in the required range of 0..=23",
        );
        insta::assert_snapshot!(
            ExpandedTime::with_excess_days(-1, 0, 0, 0).unwrap_err(),
            @"parameter 'excess-days' with value -1 is not in the required range of 0..=2147483647",
        );
        let err = ExpandedTime::with_excess_days(0, 0, 60, 0).unwrap_err();
        assert!(err.is_invalid_field());
        assert!(!err.is_parse());
    }

    #[test]
    fn canonical_string() {
        assert_eq!(et(1, 30, 0).to_string(), "01:30");
        assert_eq!(et(25, 30, 0).to_string(), "+1 01:30");
        assert_eq!(et(49, 0, 7).to_string(), "+2 01:00:07");
        assert_eq!(et(0, 0, 0).to_string(), "00:00");
        assert_eq!(ets(3, 5).to_string(), "+3 00:00:00.000000005");
        assert_eq!(et(25, 30, 0).to_canonical_string(), "+1 01:30");
        assert_eq!(alloc::format!("{:?}", et(25, 30, 0)), "+1 01:30");
    }

    #[test]
    fn expanded_hour_string() {
        assert_eq!(et(25, 30, 0).to_expanded_hour_string(), "25:30");
        assert_eq!(et(1, 30, 0).to_expanded_hour_string(), "01:30");
        assert_eq!(et(0, 0, 1).to_expanded_hour_string(), "00:00:01");
        assert_eq!(et(240, 0, 0).to_expanded_hour_string(), "240:00");
        assert_eq!(
            etd(99, 23, 59, 59).to_expanded_hour_string(),
            "2399:59:59",
        );
    }

    #[test]
    fn expanded_hour_string_fraction() {
        let s = |subsec| ets(0, subsec).to_expanded_hour_string();
        assert_eq!(s(500_000_000), "00:00:00.500");
        assert_eq!(s(123_000), "00:00:00.000123");
        assert_eq!(s(123), "00:00:00.000000123");
        assert_eq!(s(0), "00:00");
        assert_eq!(s(120_000_000), "00:00:00.120");
        assert_eq!(s(100_100_000), "00:00:00.100100");
    }

    #[test]
    fn parse_round_trips_both_forms() {
        for t in [et(25, 30, 0), et(1, 30, 0), et(100, 0, 5), ets(2, 123)] {
            let canonical = t.to_string();
            assert_eq!(canonical.parse::<ExpandedTime>().unwrap(), t);
            let expanded = t.to_expanded_hour_string();
            assert_eq!(expanded.parse::<ExpandedTime>().unwrap(), t);
        }
    }

    #[test]
    fn expanded_hour_beyond_i32_round_trips() {
        let first_past_i32 =
            ExpandedTime::from_time(89_478_486, time(0, 0, 0, 0)).unwrap();
        let max = ExpandedTime::from_time(
            i32::MAX,
            time(23, 59, 59, 999_999_999),
        )
        .unwrap();

        let s = first_past_i32.to_expanded_hour_string();
        assert_eq!(s, "2147483664:00");
        assert_eq!(s.parse::<ExpandedTime>().unwrap(), first_past_i32);
        assert_eq!(
            ExpandedTime::strptime("%H:%M", &s).unwrap(),
            first_past_i32,
        );

        let s = max.to_expanded_hour_string();
        assert_eq!(s, "51539607551:59:59.999999999");
        assert_eq!(s.parse::<ExpandedTime>().unwrap(), max);
        assert_eq!(ExpandedTime::strptime("%T%.f", &s).unwrap(), max);
        assert_eq!(max.to_string().parse::<ExpandedTime>().unwrap(), max);
    }

    #[test]
    fn expanded_hour_past_max_is_rejected() {
        insta::assert_snapshot!(
            "51539607552:00".parse::<ExpandedTime>().unwrap_err(),
            @"failed to parse expanded time: parameter 'hour' with value 51539607552 is not in the required range of 0..=51539607551",
        );
        let err =
            ExpandedTime::strptime("%H:%M", "99999999999:00").unwrap_err();
        assert!(err.is_parse());
        assert!(!err.is_invalid_field());
    }

    #[test]
    fn strptime_matches_new() {
        let t = ExpandedTime::strptime("%H:%M", "25:30").unwrap();
        assert_eq!(t, et(25, 30, 0));
        assert_eq!(t.cmp(&et(25, 30, 0)), core::cmp::Ordering::Equal);
    }

    #[test]
    fn ordering_excess_days_dominate() {
        assert!(etd(0, 23, 59, 59) < etd(1, 0, 0, 0));
        assert!(etd(1, 0, 0, 0) < etd(1, 0, 0, 1));
        assert!(ets(1, 0) > ets(0, 999_999_999));
        assert_eq!(etd(2, 3, 4, 5), etd(2, 3, 4, 5));
        assert_ne!(etd(2, 3, 4, 5), etd(1, 3, 4, 5));
    }

    #[test]
    fn hour_field_read_write_asymmetry() {
        let t = etd(1, 5, 0, 0);
        let t = t.with_field(Field::Hour, 7).unwrap();
        assert_eq!(t.excess_days(), 1);
        assert_eq!(t.time().hour(), 7);
        assert_eq!(t.get(Field::Hour), 7 + 24);
    }

    #[test]
    fn get_delegates_to_wall_clock() {
        let t = ExpandedTime::from_time(2, time(3, 4, 5, 6_007_008)).unwrap();
        assert_eq!(t.get(Field::Hour), 51);
        assert_eq!(t.get(Field::Minute), 4);
        assert_eq!(t.get(Field::Second), 5);
        assert_eq!(t.get(Field::Millisecond), 6);
        assert_eq!(t.get(Field::Microsecond), 7);
        assert_eq!(t.get(Field::Nanosecond), 8);
        assert_eq!(t.get(Field::SubsecNanosecond), 6_007_008);
        assert_eq!(
            t.get(Field::NanoOfDay),
            3 * NANOS_PER_HOUR + 4 * 60 * NANOS_PER_SECOND
                + 5 * NANOS_PER_SECOND
                + 6_007_008,
        );
    }

    #[test]
    fn with_field_errors() {
        let t = et(25, 30, 0);
        let err = t.with_field(Field::Minute, 60).unwrap_err();
        insta::assert_snapshot!(
            err,
            @"failed to set minute on expanded time: parameter 'minute' with value 60 is not in the required range of 0..=59",
        );
        assert!(err.is_invalid_field());
    }

    #[test]
    fn wrapping_add_keeps_excess_days() {
        let t = et(25, 30, 0);

        let got = t.wrapping_add(25, Unit::Hour).unwrap();
        assert_eq!(got.excess_days(), 1);
        assert_eq!(got.time(), time(2, 30, 0, 0));

        let got = t.wrapping_add(-2, Unit::Hour).unwrap();
        assert_eq!(got.excess_days(), 1);
        assert_eq!(got.time(), time(23, 30, 0, 0));

        let got = t.wrapping_add(1, Unit::Nanosecond).unwrap();
        assert_eq!(got.time(), time(1, 30, 0, 1));

        let got = t.wrapping_add(i64::MAX, Unit::Hour).unwrap();
        assert_eq!(got.excess_days(), 1);
        // i64::MAX % 24 == 7
        assert_eq!(got.time(), time(8, 30, 0, 0));

        let got = t.wrapping_add(i64::MIN, Unit::Millisecond).unwrap();
        assert_eq!(got.excess_days(), 1);
    }

    #[test]
    fn wrapping_add_unsupported_unit() {
        let err = et(25, 30, 0).wrapping_add(1, Unit::Day).unwrap_err();
        insta::assert_snapshot!(
            err,
            @"failed to add days to expanded time: wall clock arithmetic must use hours or smaller for its units, but found days",
        );
        assert!(err.is_invalid_parameter());
        assert!(!err.is_invalid_field());
        assert!(!err.is_parse());
    }

    #[test]
    fn until_ignores_excess_days() {
        let a = et(1, 0, 0);
        let b = et(26, 30, 0);
        assert_eq!(a.until(b, Unit::Hour).unwrap(), 1);
        assert_eq!(a.until(b, Unit::Minute).unwrap(), 90);
        assert_eq!(b.until(a, Unit::Hour).unwrap(), -1);
        assert_eq!(a.until(a, Unit::Second).unwrap(), 0);

        let err = a.until(b, Unit::Week).unwrap_err();
        insta::assert_snapshot!(
            err,
            @"failed to compute weeks between expanded times: wall clock arithmetic must use hours or smaller for its units, but found weeks",
        );
        assert!(err.is_invalid_parameter());
    }

    // This reproduces the formula the type has always used, which adds the
    // excess day count as raw nanoseconds. See `to_nano_of_day` docs.
    #[test]
    fn to_nano_of_day_formula() {
        assert_eq!(ExpandedTime::MIN.to_nano_of_day(), NANOS_PER_DAY);
        assert_eq!(et(24, 0, 0).to_nano_of_day(), NANOS_PER_DAY + 1);
        assert_eq!(
            et(49, 0, 0).to_nano_of_day(),
            2 + NANOS_PER_DAY + NANOS_PER_HOUR,
        );
        assert_eq!(ets(0, 1).to_nano_of_day(), NANOS_PER_DAY + 1);
    }

    #[test]
    fn to_duration_scales_excess_days() {
        assert_eq!(ExpandedTime::MIN.to_duration(), SignedDuration::ZERO);
        assert_eq!(
            et(49, 0, 0).to_duration(),
            SignedDuration::from_hours(49),
        );
        assert_eq!(
            ExpandedTime::from_time(1, time(0, 1, 2, 3))
                .unwrap()
                .to_duration(),
            SignedDuration::from_hours(24)
                + SignedDuration::from_secs(62)
                + SignedDuration::from_nanos(3),
        );
    }

    #[test]
    fn adjust_into_inherits_nano_of_day() {
        let err = et(1, 30, 0).adjust_into(time(9, 0, 0, 0)).unwrap_err();
        insta::assert_snapshot!(
            err,
            @"failed to adjust target to expanded time's nanosecond of day: parameter 'nanosecond-of-day' with value 91800000000000 is not in the required range of 0..=86399999999999",
        );
        assert!(err.is_invalid_field());

        let dt = date(2016, 11, 6).at(9, 0, 0, 0);
        assert!(ExpandedTime::MIN.adjust_into(dt).is_err());
    }

    #[test]
    fn default_is_midnight() {
        assert_eq!(ExpandedTime::default(), ExpandedTime::MIN);
        assert_eq!(ExpandedTime::midnight(), ExpandedTime::MIN);
        assert_eq!(ExpandedTime::MIN.to_string(), "00:00");
    }

    quickcheck::quickcheck! {
        fn prop_new_folds_exactly(hour: u16, minute: u8, second: u8) -> bool {
            let hour = i32::from(hour) * 17;
            let (minute, second) = ((minute % 60) as i8, (second % 60) as i8);
            let t = ExpandedTime::new(hour, minute, second).unwrap();
            t.excess_days() == hour / 24
                && i32::from(t.time().hour()) == hour % 24
                && t.expanded_hour() == i64::from(hour)
                && t.display_expanded().to_string().starts_with(
                    &alloc::format!("{hour:02}:"),
                )
        }

        fn prop_expanded_form_round_trips(t: ExpandedTime) -> bool {
            let s = t.to_expanded_hour_string();
            s.parse::<ExpandedTime>().map_or(false, |got| got == t)
        }

        fn prop_canonical_form_round_trips(t: ExpandedTime) -> bool {
            let s = t.to_string();
            s.parse::<ExpandedTime>().map_or(false, |got| got == t)
        }

        fn prop_strptime_agrees_with_from_str(t: ExpandedTime) -> bool {
            let wall = t.time().with().second(0).subsec_nanosecond(0);
            let t = ExpandedTime::from_time(
                t.excess_days(),
                wall.build().unwrap(),
            )
            .unwrap();
            let s = t.to_expanded_hour_string();
            ExpandedTime::strptime("%H:%M", &s).map_or(false, |got| got == t)
        }

        fn prop_ordering_is_lexicographic(
            t1: ExpandedTime,
            t2: ExpandedTime
        ) -> bool {
            let expected = (t1.excess_days(), t1.time())
                .cmp(&(t2.excess_days(), t2.time()));
            t1.cmp(&t2) == expected
        }

        fn prop_duration_ordering_agrees(
            t1: ExpandedTime,
            t2: ExpandedTime
        ) -> bool {
            t1.cmp(&t2) == t1.to_duration().cmp(&t2.to_duration())
        }
    }
}
