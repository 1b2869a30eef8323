#![cfg(feature = "serde")]

use jiff_expanded::ExpandedTime;

use crate::Result;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Trip {
    route: String,
    departure: ExpandedTime,
    arrival: ExpandedTime,
}

#[test]
fn serialize_uses_expanded_hour_form() -> Result {
    let trip = Trip {
        route: "N29".to_string(),
        departure: ExpandedTime::new(23, 55, 0)?,
        arrival: ExpandedTime::new(25, 10, 30)?,
    };
    let json = serde_json::to_string(&trip)?;
    assert_eq!(
        json,
        r#"{"route":"N29","departure":"23:55","arrival":"25:10:30"}"#,
    );
    Ok(())
}

#[test]
fn deserialize_accepts_both_forms() -> Result {
    let json = r#"{"route":"N29","departure":"23:55","arrival":"+1 01:10:30"}"#;
    let trip: Trip = serde_json::from_str(json)?;
    assert_eq!(trip.departure, ExpandedTime::new(23, 55, 0)?);
    assert_eq!(trip.arrival, ExpandedTime::new(25, 10, 30)?);
    assert!(trip.departure < trip.arrival);
    Ok(())
}

#[test]
fn deserialize_rejects_garbage() {
    let json = r#"{"route":"N29","departure":"23:60","arrival":"25:10"}"#;
    let err = serde_json::from_str::<Trip>(json).unwrap_err();
    assert!(
        err.to_string().contains("failed to parse expanded time"),
        "{err}",
    );
}

#[test]
fn round_trips_largest_excess_day_counts() -> Result {
    for days in [89_478_486, i32::MAX] {
        let wall = jiff::civil::time(23, 0, 0, 0);
        let et = ExpandedTime::from_time(days, wall)?;
        let json = serde_json::to_string(&et)?;
        let got: ExpandedTime = serde_json::from_str(&json)?;
        assert_eq!(got, et, "{json}");
    }
    Ok(())
}
