use core::ops::{Bound, Range, RangeInclusive};

use alloc::vec::Vec;

use crate::{
    civil::Time,
    error::{range::Error as E, time::Error as TE, Error, ErrorContext},
    fmt::{TimeInput, TimeRangeInput, TimeRangeParser},
};

/// A range of wall clock times with minute precision.
///
/// A `TimeRange` is a start time (`from`), an end time (`to`) and whether the
/// end time is excluded from the range. The end is included by default.
///
/// # Spanning midnight
///
/// There is no requirement that `from <= to`. When `from > to`, the range
/// wraps around through `00:00`. For example, `23:57-00:03` covers seven
/// minutes, four of them before midnight and three after it:
///
/// ```
/// use minutely::{time, TimeRange};
///
/// let range = TimeRange::new("23:57", "0:03")?;
/// assert!(range.spanning_midnight());
/// assert_eq!(range.len(), 7);
/// assert_eq!(range.iter().nth(3), Some(time(0, 0)));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// Iteration is the only operation that understands wrapping. In particular,
/// [`TimeRange::includes`] compares against the endpoints directly, and
/// [`TimeRange::to_ordered_range`] refuses ranges spanning midnight.
///
/// # Comparisons
///
/// Two ranges are equal when their endpoints and their exclusivity are
/// equal. Ranges are ordered by `from` and then by `to`, but only when they
/// agree on exclusivity. Otherwise they are unordered:
///
/// ```
/// use minutely::TimeRange;
///
/// let r1 = TimeRange::new("9:00", "17:00")?;
/// let r2 = TimeRange::new("9:00", "18:00")?;
/// assert!(r1 < r2);
///
/// let r3 = TimeRange::new_exclusive("9:00", "18:00")?;
/// assert_eq!(r1.partial_cmp(&r3), None);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Parsing and formatting
///
/// The `Display` impl writes `HH:MM-HH:MM`. This does not record whether the
/// end is excluded. The `FromStr` impl accepts the same strings as
/// [`TimeRange::parse`].
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct TimeRange {
    from: Time,
    to: Time,
    exclude_end: bool,
}

impl TimeRange {
    /// Creates a range that includes its end from two time-like values.
    ///
    /// Each endpoint is parsed with the same rules as [`Time::parse`].
    ///
    /// # Errors
    ///
    /// This returns an error when either endpoint fails to parse, or when
    /// either endpoint is blank.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::{time, TimeRange};
    ///
    /// let range = TimeRange::new("9:57", 1003)?;
    /// assert_eq!(range.from(), time(9, 57));
    /// assert_eq!(range.to(), time(10, 3));
    /// assert!(!range.exclude_end());
    ///
    /// assert!(TimeRange::new("9:57", "").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new<F, T>(from: F, to: T) -> Result<TimeRange, Error>
    where
        F: Into<TimeInput>,
        T: Into<TimeInput>,
    {
        TimeRange::with_exclude_end(from, to, false)
    }

    /// Creates a range that excludes its end from two time-like values.
    ///
    /// This is like [`TimeRange::new`], except the end is not part of the
    /// range.
    pub fn new_exclusive<F, T>(from: F, to: T) -> Result<TimeRange, Error>
    where
        F: Into<TimeInput>,
        T: Into<TimeInput>,
    {
        TimeRange::with_exclude_end(from, to, true)
    }

    /// Creates a range from two time-like values and its exclusivity.
    pub fn with_exclude_end<F, T>(
        from: F,
        to: T,
        exclude_end: bool,
    ) -> Result<TimeRange, Error>
    where
        F: Into<TimeInput>,
        T: Into<TimeInput>,
    {
        let from = Time::parse(from).context(E::Start)?;
        let to = Time::parse(to).context(E::End)?;
        match (from, to) {
            (Some(from), Some(to)) => {
                Ok(TimeRange::from_times(from, to, exclude_end))
            }
            _ => Err(E::BlankEndpoint.into()),
        }
    }

    /// Creates a range from two times that are already valid.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::{time, TimeRange};
    ///
    /// const LUNCH: TimeRange =
    ///     TimeRange::from_times(time(12, 0), time(13, 0), true);
    /// assert_eq!(LUNCH.to_string(), "12:00-13:00");
    /// ```
    #[inline]
    pub const fn from_times(
        from: Time,
        to: Time,
        exclude_end: bool,
    ) -> TimeRange {
        TimeRange { from, to, exclude_end }
    }

    /// Parses a `TimeRange` from any of the supported input shapes.
    ///
    /// This is the same as [`minutely::parse_range`](crate::parse_range).
    /// See [`TimeRangeInput`] for the accepted shapes and
    /// [`TimeRangeParser`] for the precise rules.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::{time, TimeRange};
    ///
    /// let range = TimeRange::parse("14:00 - 15:30")?.unwrap();
    /// assert_eq!(range.from(), time(14, 0));
    /// assert_eq!(range.to(), time(15, 30));
    ///
    /// let range = TimeRange::parse(time(9, 0)..time(17, 0))?.unwrap();
    /// assert!(range.exclude_end());
    ///
    /// assert_eq!(TimeRange::parse("")?, None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse<I: Into<TimeRangeInput>>(
        input: I,
    ) -> Result<Option<TimeRange>, Error> {
        static P: TimeRangeParser = TimeRangeParser::new();
        P.parse(input)
    }

    /// Returns the start of this range.
    #[inline]
    pub fn from(self) -> Time {
        self.from
    }

    /// Returns the end of this range.
    #[inline]
    pub fn to(self) -> Time {
        self.to
    }

    /// Returns true when the end of this range is not part of it.
    #[inline]
    pub fn exclude_end(self) -> bool {
        self.exclude_end
    }

    /// Returns true when the given time-like value falls within this range.
    ///
    /// The check is `from <= time <= to`, or `from <= time < to` when the end
    /// is excluded. It does not account for ranges spanning midnight. Since
    /// `from > to` for those, no time is ever reported as included. Use
    /// [`TimeRange::iter`] when wrapping matters.
    ///
    /// # Errors
    ///
    /// This returns an error when the given value is blank or fails to parse
    /// as a time.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::TimeRange;
    ///
    /// let range = TimeRange::new("9:00", "17:00")?;
    /// assert!(range.includes("9:00")?);
    /// assert!(range.includes(1700)?);
    /// assert!(!range.includes("17:01")?);
    ///
    /// let range = TimeRange::new_exclusive("9:00", "17:00")?;
    /// assert!(!range.includes("17:00")?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn includes<I: Into<TimeInput>>(self, time: I) -> Result<bool, Error> {
        let Some(time) = Time::parse(time).context(E::Member)? else {
            let err = TE::InvalidTime { what: "a blank value" };
            return Err(err).context(E::Member);
        };
        if self.exclude_end {
            Ok(self.from <= time && time < self.to)
        } else {
            Ok(self.from <= time && time <= self.to)
        }
    }

    /// Returns an iterator over every minute in this range, in order.
    ///
    /// When the range spans midnight, the iterator wraps from `23:59` to
    /// `00:00`. The iterator always terminates.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::{time, TimeRange};
    ///
    /// let range = TimeRange::new("9:57", "10:00")?;
    /// let got: Vec<String> = range.iter().map(|t| t.to_string()).collect();
    /// assert_eq!(got, ["09:57", "09:58", "09:59", "10:00"]);
    ///
    /// let range = TimeRange::new_exclusive("9:57", "9:57")?;
    /// assert_eq!(range.iter().next(), None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn iter(self) -> TimeRangeIter {
        TimeRangeIter { next: self.from, remaining: self.minutes() }
    }

    /// Collects every minute in this range into a vector.
    pub fn to_vec(self) -> Vec<Time> {
        self.iter().collect()
    }

    /// Returns the number of minutes in this range.
    ///
    /// This is the number of times yielded by [`TimeRange::iter`].
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::TimeRange;
    ///
    /// assert_eq!(TimeRange::new("0:00", "23:59")?.len(), 1440);
    /// assert_eq!(TimeRange::new("23:59", "0:00")?.len(), 2);
    /// assert_eq!(TimeRange::new("12:00", "12:00")?.len(), 1);
    /// assert_eq!(TimeRange::new_exclusive("12:00", "12:00")?.len(), 0);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn len(self) -> usize {
        usize::from(self.minutes())
    }

    /// Returns true when this range contains no minutes at all.
    ///
    /// This only happens when the end is excluded and equal to the start.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true when this range wraps around through midnight. That is,
    /// when `from > to`.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::TimeRange;
    ///
    /// assert!(TimeRange::new("23:57", "0:03")?.spanning_midnight());
    /// assert!(!TimeRange::new("0:00", "23:59")?.spanning_midnight());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn spanning_midnight(self) -> bool {
        self.from > self.to
    }

    /// Converts this range into native range bounds over `Time`.
    ///
    /// The start bound is always included. The end bound is excluded when
    /// this range excludes its end. The tuple implements
    /// [`core::ops::RangeBounds`].
    ///
    /// # Errors
    ///
    /// This returns an error when this range spans midnight, since native
    /// ranges have no notion of wrapping.
    ///
    /// # Example
    ///
    /// ```
    /// use core::ops::{Bound, RangeBounds};
    /// use minutely::{time, TimeRange};
    ///
    /// let range = TimeRange::new("9:57", "10:03")?;
    /// let bounds = range.to_ordered_range()?;
    /// assert_eq!(bounds, (Bound::Included(time(9, 57)), Bound::Included(time(10, 3))));
    /// assert!(bounds.contains(&time(10, 0)));
    ///
    /// let range = TimeRange::new("23:57", "0:03")?;
    /// assert!(range.to_ordered_range().is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_ordered_range(self) -> Result<(Bound<Time>, Bound<Time>), Error> {
        if self.spanning_midnight() {
            return Err(E::SpanningMidnight.into());
        }
        let end = if self.exclude_end {
            Bound::Excluded(self.to)
        } else {
            Bound::Included(self.to)
        };
        Ok((Bound::Included(self.from), end))
    }

    /// Returns the number of minutes yielded by iteration.
    fn minutes(self) -> u16 {
        let span = (self.to.minute_of_day() - self.from.minute_of_day())
            .rem_euclid(1440);
        // `span` is in `0..1440`, so this is at most `1440`.
        let len = (span as u16) + 1;
        if self.exclude_end {
            len - 1
        } else {
            len
        }
    }
}

impl PartialOrd for TimeRange {
    fn partial_cmp(&self, other: &TimeRange) -> Option<core::cmp::Ordering> {
        if self.exclude_end != other.exclude_end {
            return None;
        }
        Some((self.from, self.to).cmp(&(other.from, other.to)))
    }
}

impl core::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl core::fmt::Debug for TimeRange {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let op = if self.exclude_end { ".." } else { "..=" };
        write!(f, "{:?}{}{:?}", self.from, op, self.to)
    }
}

/// Parses a `TimeRange` from strings like `14:00-15:30`.
///
/// Unlike [`TimeRange::parse`], an empty string is an error here since there
/// is no way to return "no time range."
impl core::str::FromStr for TimeRange {
    type Err = Error;

    fn from_str(string: &str) -> Result<TimeRange, Error> {
        static P: TimeRangeParser = TimeRangeParser::new();
        P.parse(string)?
            .ok_or_else(|| E::InvalidShape { what: "an empty string" }.into())
    }
}

impl TryFrom<TimeRange> for RangeInclusive<Time> {
    type Error = Error;

    fn try_from(range: TimeRange) -> Result<RangeInclusive<Time>, Error> {
        if range.spanning_midnight() {
            return Err(E::SpanningMidnight.into());
        }
        if range.exclude_end {
            return Err(E::MismatchedExclusivity { exclude_end: true }.into());
        }
        Ok(range.from..=range.to)
    }
}

impl TryFrom<TimeRange> for Range<Time> {
    type Error = Error;

    fn try_from(range: TimeRange) -> Result<Range<Time>, Error> {
        if range.spanning_midnight() {
            return Err(E::SpanningMidnight.into());
        }
        if !range.exclude_end {
            return Err(E::MismatchedExclusivity { exclude_end: false }.into());
        }
        Ok(range.from..range.to)
    }
}

impl IntoIterator for TimeRange {
    type Item = Time;
    type IntoIter = TimeRangeIter;

    fn into_iter(self) -> TimeRangeIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a TimeRange {
    type Item = Time;
    type IntoIter = TimeRangeIter;

    fn into_iter(self) -> TimeRangeIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeRange {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserializes a `TimeRange` from any shape [`TimeRangeInput`] deserializes
/// from.
///
/// Blank values are rejected. Use `Option<TimeRange>` for fields that may be
/// absent.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeRange {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<TimeRange, D::Error> {
        use serde::de;

        let input =
            <TimeRangeInput as serde::Deserialize>::deserialize(deserializer)?;
        TimeRange::parse(input).map_err(de::Error::custom)?.ok_or_else(|| {
            de::Error::custom("expected a time range but got blank")
        })
    }
}

/// An iterator over every minute of a [`TimeRange`].
///
/// This is created by [`TimeRange::iter`].
#[derive(Clone, Debug)]
pub struct TimeRangeIter {
    next: Time,
    remaining: u16,
}

impl Iterator for TimeRangeIter {
    type Item = Time;

    #[inline]
    fn next(&mut self) -> Option<Time> {
        if self.remaining == 0 {
            return None;
        }
        let time = self.next;
        self.next = time.succ();
        self.remaining -= 1;
        Some(time)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.remaining);
        (len, Some(len))
    }
}

impl ExactSizeIterator for TimeRangeIter {}

impl core::iter::FusedIterator for TimeRangeIter {}

#[cfg(test)]
impl quickcheck::Arbitrary for TimeRange {
    fn arbitrary(g: &mut quickcheck::Gen) -> TimeRange {
        TimeRange::from_times(
            quickcheck::Arbitrary::arbitrary(g),
            quickcheck::Arbitrary::arbitrary(g),
            quickcheck::Arbitrary::arbitrary(g),
        )
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = TimeRange>> {
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&(
                self.from,
                self.to,
                self.exclude_end,
            ))
            .map(|(from, to, exclude_end)| {
                TimeRange::from_times(from, to, exclude_end)
            }),
        )
    }
}
