/*!
Minutely provides wall clock times with minute precision, ranges over them
and flexible parsing of both.

A [`Time`] is an hour and a minute, such as `14:05`, with no date or time zone
attached. A [`TimeRange`] is a run of consecutive minutes, such as
`22:00-06:00`, that may wrap around through midnight. These are small `Copy`
values meant for things like opening hours and recurring schedules, where a
full datetime library carries more than is needed.

# Overview

The primary entry points are:

* [`parse`] converts many kinds of input into a `Time`: strings like
`"9:05"`, integers like `905`, existing `Time` values, or anything that
implements [`HasHourMinute`].
* [`parse_range`] converts many kinds of input into a `TimeRange`: strings
like `"9:00-17:00"`, pairs of times, mappings with `from` and `to` keys, or
native ranges like `a..b`.
* [`Time::new`] and [`TimeRange::new`] construct values directly.

Parsing blank input, like an empty string or `None`, yields `Ok(None)` instead
of an error. See the [`fmt`] module for the precise rules.

# Example

```
use minutely::{time, TimeRange};

let night_shift = minutely::parse_range("22:00 - 6:00")?.unwrap();
assert!(night_shift.spanning_midnight());
assert_eq!(night_shift.len(), 8 * 60 + 1);
assert_eq!(night_shift.iter().nth(120), Some(time(0, 0)));

let lunch = TimeRange::new_exclusive("12:00", 1300)?;
assert!(lunch.includes("12:59")?);
assert!(!lunch.includes("13:00")?);
assert_eq!(lunch.to_string(), "12:00-13:00");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) - When enabled, [`Error`] implements
`std::error::Error` and `HashMap` values can be parsed as time ranges.
* **serde** (enabled by default) - When enabled, [`Time`] and
[`TimeRange`] serialize to their canonical strings and deserialize from any
shape the parsers accept.
* **logging** - When enabled, the `log` crate is used to emit trace
messages describing how each input was parsed.
* **jiff** - When enabled, times from the `jiff` crate implement
[`HasHourMinute`].
* **chrono** - When enabled, times from the `chrono` crate implement
[`HasHourMinute`].
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub use crate::{
    civil::{time, HasHourMinute, Time, TimeRange, TimeRangeIter},
    error::Error,
    fmt::{TimeInput, TimeRangeInput},
};

#[macro_use]
mod logging;

pub mod civil;
mod error;
pub mod fmt;
mod util;

/// Parses a [`Time`] from any of the supported input shapes.
///
/// See [`TimeInput`] for the accepted shapes and
/// [`TimeParser`](crate::fmt::TimeParser) for the precise rules. Blank input
/// yields `Ok(None)`.
///
/// # Errors
///
/// This returns an error when the input has an unsupported shape, when a
/// string is not of the form `H:MM` or `HH:MM`, or when the hour or minute
/// is out of range.
///
/// # Example
///
/// ```
/// use minutely::time;
///
/// assert_eq!(minutely::parse("14:32")?, Some(time(14, 32)));
/// assert_eq!(minutely::parse(309)?, Some(time(3, 9)));
/// assert_eq!(minutely::parse(None::<&str>)?, None);
///
/// assert!(minutely::parse(2400).unwrap_err().is_invalid_hour());
/// assert!(minutely::parse("2pm").unwrap_err().is_invalid_time_string());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[inline]
pub fn parse<I: Into<TimeInput>>(input: I) -> Result<Option<Time>, Error> {
    Time::parse(input)
}

/// Parses a [`TimeRange`] from any of the supported input shapes.
///
/// See [`TimeRangeInput`] for the accepted shapes and
/// [`TimeRangeParser`](crate::fmt::TimeRangeParser) for the precise rules.
/// Blank input yields `Ok(None)`.
///
/// # Errors
///
/// This returns an error when the input has an unsupported shape, when it
/// doesn't have exactly two non-blank endpoints, when a mapping is missing
/// its `from` or `to` key, or when either endpoint fails to parse.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// use minutely::{time, TimeRange};
///
/// let want = TimeRange::new(time(9, 0), time(17, 0))?;
/// assert_eq!(minutely::parse_range("9:00-17:00")?, Some(want));
/// assert_eq!(minutely::parse_range(("9:00", 1700))?, Some(want));
/// assert_eq!(minutely::parse_range(time(9, 0)..=time(17, 0))?, Some(want));
///
/// let mut map = BTreeMap::new();
/// map.insert("from", "9:00");
/// map.insert("to", "17:00");
/// assert_eq!(minutely::parse_range(map)?, Some(want));
///
/// assert_eq!(minutely::parse_range(BTreeMap::<String, String>::new())?, None);
/// assert!(minutely::parse_range("9:00").unwrap_err().is_invalid_time_range());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[inline]
pub fn parse_range<I: Into<TimeRangeInput>>(
    input: I,
) -> Result<Option<TimeRange>, Error> {
    TimeRange::parse(input)
}
