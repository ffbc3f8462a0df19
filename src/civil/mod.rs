/*!
Wall clock times with minute precision, and ranges over them.

The two core types are [`Time`] and [`TimeRange`]. Neither is associated with
a date or a time zone. A `Time` is one of the `1,440` minutes of a day, and a
`TimeRange` is a run of consecutive minutes that may wrap around through
midnight.

Values from other libraries that know their own hour and minute can be turned
into a `Time` by implementing [`HasHourMinute`].
*/

pub use self::{
    hour_minute::HasHourMinute,
    range::{TimeRange, TimeRangeIter},
    time::Time,
};

mod hour_minute;
mod range;
mod time;

/// Creates a new `Time` value in a `const` context.
///
/// This is a convenience free function for [`Time::constant`]. It is
/// intended to provide a terse syntax for constructing `Time` values from
/// parameters that are known to be valid.
///
/// # Panics
///
/// This panics unless `0 <= hour <= 23` and `0 <= minute <= 59`. When used
/// in a `const` context, this is a compile time error.
///
/// # Example
///
/// ```
/// use minutely::time;
///
/// let t = time(14, 5);
/// assert_eq!(t.to_string(), "14:05");
/// ```
#[inline]
pub const fn time(hour: i8, minute: i8) -> Time {
    Time::constant(hour, minute)
}
