/*!
This crate provides [`ExpandedTime`], a wall clock time whose hour may run
past `23`, for use with [`jiff`].

Transit timetables commonly write trips that run past midnight with hours
like `25:30`, meaning `01:30` on the day after the service day started.
Jiff's [`civil::Time`](jiff::civil::Time) rejects such hours. An
`ExpandedTime` accepts them and stores them as a normalized wall clock time
plus a count of *excess days*.

# Example

This shows how to parse a timetable entry, inspect it and print it back
in both of its textual forms:

```
use jiff::civil::time;
use jiff_expanded::ExpandedTime;

let et: ExpandedTime = "25:30".parse()?;
assert_eq!(et.excess_days(), 1);
assert_eq!(et.time(), time(1, 30, 0, 0));
assert_eq!(et.expanded_hour(), 25);

// The canonical form shows the excess days explicitly.
assert_eq!(et.to_string(), "+1 01:30");
// The expanded-hour form folds them back into the hour.
assert_eq!(et.display_expanded().to_string(), "25:30");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Parsing other formats

Timetables come in many shapes. The [`fmt::strtime`] module provides a
`strptime`-like parser whose hour directives accept hours of `24` or more:

```
use jiff_expanded::ExpandedTime;

let et = ExpandedTime::strptime("dep. %H.%M", "dep. 26.05")?;
assert_eq!(et, ExpandedTime::new(26, 5, 0)?);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Ordering

Expanded times are ordered by their excess days first and their wall clock
time second. So sorting a list of departures puts trips after midnight at
the end, where they belong:

```
use jiff_expanded::ExpandedTime;

let mut departures: Vec<ExpandedTime> = ["24:10", "23:50", "00:30"]
    .iter()
    .map(|s| s.parse())
    .collect::<Result<_, _>>()?;
departures.sort();
let got: Vec<String> =
    departures.iter().map(|et| et.display_expanded().to_string()).collect();
assert_eq!(got, ["00:30", "23:50", "24:10"]);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) - When enabled, this implements
`std::error::Error` for [`Error`].
* **alloc** (enabled by default via `std`) - When enabled, errors carry a
chain of context and methods returning a `String`, such as
[`ExpandedTime::to_expanded_hour_string`], are available.
* **logging** - When enabled, the `log` crate is used to emit messages
about parsing and construction at the `debug` and `trace` levels.
* **serde** - When enabled, [`ExpandedTime`] implements `Serialize` and
`Deserialize`. Values serialize to their expanded-hour form and deserialize
from either form.
*/

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

pub use crate::{
    adjust::AdjustNanoOfDay,
    error::Error,
    expanded::{ExpandedHourDisplay, ExpandedTime},
    field::Field,
};

#[macro_use]
mod logging;

mod adjust;
mod error;
mod expanded;
mod field;
pub mod fmt;
mod util;
