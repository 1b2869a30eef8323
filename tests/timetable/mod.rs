use jiff::{
    civil::{date, time},
    SignedDuration, Unit,
};
use jiff_expanded::{fmt::strtime, AdjustNanoOfDay, ExpandedTime, Field};

use crate::Result;

/// A small excerpt of a night bus schedule, written the way timetable feeds
/// write it: hours keep counting past midnight.
const NIGHT_BUS: &[&str] = &[
    "23:40", "24:05", "24:35", "25:05", "25:35", "26:05", "27:10", "28:15",
];

#[test]
fn parse_sort_and_print_schedule() -> Result {
    let mut stops = NIGHT_BUS
        .iter()
        .rev()
        .map(|s| s.parse::<ExpandedTime>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    stops.sort();

    let expanded: Vec<String> =
        stops.iter().map(|et| et.to_expanded_hour_string()).collect();
    assert_eq!(expanded, NIGHT_BUS);

    let canonical: Vec<String> =
        stops.iter().map(|et| et.to_string()).collect();
    assert_eq!(
        canonical,
        [
            "23:40", "+1 00:05", "+1 00:35", "+1 01:05", "+1 01:35",
            "+1 02:05", "+1 03:10", "+1 04:15",
        ],
    );
    Ok(())
}

#[test]
fn canonical_and_expanded_forms_agree() -> Result {
    for s in NIGHT_BUS {
        let et: ExpandedTime = s.parse()?;
        let canonical: ExpandedTime = et.to_canonical_string().parse()?;
        assert_eq!(et, canonical);
    }
    Ok(())
}

#[test]
fn journey_duration_across_midnight() -> Result {
    let depart: ExpandedTime = "23:40".parse()?;
    let arrive: ExpandedTime = "28:15".parse()?;
    assert_eq!(
        arrive.to_duration() - depart.to_duration(),
        SignedDuration::from_mins(4 * 60 + 35),
    );
    // The wall clock difference ignores the excess days.
    assert_eq!(depart.until(arrive, Unit::Minute)?, -(19 * 60 + 25));
    Ok(())
}

#[test]
fn wall_clock_arithmetic_wraps() -> Result {
    let et = ExpandedTime::new(47, 45, 0)?;
    let later = et.wrapping_add(30, Unit::Minute)?;
    assert_eq!(later.excess_days(), 1);
    assert_eq!(later.time(), time(0, 15, 0, 0));

    let err = et.wrapping_add(1, Unit::Month).unwrap_err();
    assert!(err.is_invalid_parameter());
    assert!(!ExpandedTime::is_supported_unit(Unit::Month));
    assert!(!ExpandedTime::is_supported_unit(Unit::Year));
    Ok(())
}

#[test]
fn fields() -> Result {
    let et = ExpandedTime::from_time(3, time(2, 15, 30, 250_000_000))?;
    assert_eq!(et.get(Field::Hour), 74);
    assert_eq!(et.get(Field::Minute), 15);
    assert_eq!(et.get(Field::Millisecond), 250);

    let et = et.with_field(Field::Second, 0)?;
    assert_eq!(et.to_expanded_hour_string(), "74:15:00.250");
    let et = et.with_field(Field::SubsecNanosecond, 0)?;
    assert_eq!(et.to_expanded_hour_string(), "74:15");

    let err = et.with_field(Field::Nanosecond, 1_000).unwrap_err();
    assert!(err.is_invalid_field());
    Ok(())
}

#[test]
fn strptime_lenient_hours() -> Result {
    let et = strtime::parse("%H:%M:%S", "30:00:00")?;
    assert_eq!(et, ExpandedTime::with_excess_days(1, 6, 0, 0)?);

    let et = ExpandedTime::strptime("%T%.f", "24:00:00.5")?;
    assert_eq!(et.to_string(), "+1 00:00:00.500");

    let err = ExpandedTime::strptime("%H:%M", "24:60").unwrap_err();
    assert!(err.is_parse());
    assert!(!err.is_invalid_field());
    Ok(())
}

#[test]
fn adjust_into_always_fails_for_jiff_types() -> Result {
    for s in ["00:00", "12:00", "25:30"] {
        let et: ExpandedTime = s.parse()?;
        let err = et.adjust_into(time(9, 0, 0, 0)).unwrap_err();
        assert!(err.is_invalid_field(), "{s}: {err}");
        let dt = date(2024, 3, 10).at(9, 0, 0, 0);
        let err = et.adjust_into(dt).unwrap_err();
        assert!(err.is_invalid_field(), "{s}: {err}");
    }
    Ok(())
}

/// A custom target shows what value is handed to `with_nano_of_day`.
#[test]
fn adjust_into_custom_target() -> Result {
    #[derive(Debug)]
    struct Recorder(i64);

    impl AdjustNanoOfDay for Recorder {
        fn with_nano_of_day(
            self,
            nanos: i64,
        ) -> std::result::Result<Recorder, jiff_expanded::Error> {
            Ok(Recorder(nanos))
        }
    }

    let et = ExpandedTime::new(24, 0, 0)?;
    let got = et.adjust_into(Recorder(0))?;
    assert_eq!(got.0, 86_400_000_000_001);
    assert_eq!(got.0, et.to_nano_of_day());
    Ok(())
}

#[test]
fn errors_display_their_context() {
    let err = "25:3x".parse::<ExpandedTime>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to parse expanded time: expected two digit minute after hour",
    );
    let err = ExpandedTime::new(-3, 0, 0).unwrap_err();
    assert!(err.is_invalid_field());
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("'hour'"));
}
