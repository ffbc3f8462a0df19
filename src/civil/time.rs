use crate::{
    error::{time::Error as E, Error},
    fmt::{TimeInput, TimeParser},
};

/// A representation of "wall clock" time with minute precision.
///
/// Conceptually, a `Time` value corresponds to the hours and minutes that you
/// might see on a clock. There are exactly `1,440` distinct values, from
/// `00:00` ([`Time::MIN`]) to `23:59` ([`Time::MAX`]). A `Time` is not
/// associated with any date or time zone.
///
/// # Default value
///
/// For convenience, this type implements the `Default` trait. Its default
/// value is midnight. i.e., `00:00`.
///
/// # Comparisons
///
/// The `Time` type provides both `Eq` and `Ord` trait implementations. Times
/// are ordered by hour and then by minute:
///
/// ```
/// use minutely::Time;
///
/// let t1 = Time::constant(7, 30);
/// let t2 = Time::constant(8, 10);
/// assert!(t1 < t2);
/// ```
///
/// # Parsing and formatting
///
/// The canonical textual representation of a `Time` is `HH:MM`, with both
/// fields zero padded. This is what the `Display` impl (and, when the `serde`
/// feature is enabled, the `Serialize` impl) produces. Parsing through
/// `FromStr` accepts `H:MM` or `HH:MM`:
///
/// ```
/// use minutely::Time;
///
/// let t: Time = "9:05".parse()?;
/// assert_eq!(t.to_string(), "09:05");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// For parsing from integers, hour/minute values of other libraries and the
/// like, see [`Time::parse`].
///
/// # Integer representation
///
/// A `Time` also has a canonical integer form, `hour * 100 + minute`. This
/// matches the digits of a 24-hour "military" clock:
///
/// ```
/// use minutely::Time;
///
/// assert_eq!(Time::constant(14, 5).to_int(), 1405);
/// assert_eq!(minutely::parse(1405)?, Some(Time::constant(14, 5)));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Time {
    hour: i8,
    minute: i8,
}

impl Time {
    /// The minimum representable time value.
    ///
    /// This corresponds to `00:00`.
    pub const MIN: Time = Time::midnight();

    /// The maximum representable time value.
    ///
    /// This corresponds to `23:59`.
    pub const MAX: Time = Time::constant(23, 59);

    /// Creates a new `Time` value from its component hour and minute.
    ///
    /// As a convenience for callers computing "the hour after 23", an hour
    /// of `24` is accepted and normalized to `0`. The value `24` is never
    /// stored.
    ///
    /// # Errors
    ///
    /// This returns an error unless *all* of the following conditions are
    /// true:
    ///
    /// * `0 <= hour <= 24`
    /// * `0 <= minute <= 59`
    ///
    /// The hour is checked first.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::Time;
    ///
    /// let t = Time::new(14, 32)?;
    /// assert_eq!(t.hour(), 14);
    /// assert_eq!(t.minute(), 32);
    ///
    /// let t = Time::new(24, 12)?;
    /// assert_eq!(t, Time::constant(0, 12));
    ///
    /// assert!(Time::new(25, 32).is_err());
    /// assert!(Time::new(14, 60).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(hour: i8, minute: i8) -> Result<Time, Error> {
        Time::checked(i64::from(hour), i64::from(minute), 24)
    }

    /// Creates a new `Time` value in a `const` context.
    ///
    /// Unlike [`Time::new`], this does not accept `24` as an alias for
    /// midnight.
    ///
    /// # Panics
    ///
    /// This panics unless `0 <= hour <= 23` and `0 <= minute <= 59`.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::Time;
    ///
    /// const OPENING: Time = Time::constant(9, 30);
    /// assert_eq!(OPENING.hour(), 9);
    /// assert_eq!(OPENING.minute(), 30);
    /// ```
    #[inline]
    pub const fn constant(hour: i8, minute: i8) -> Time {
        if hour < 0 || hour > 23 {
            panic!("invalid hour");
        }
        if minute < 0 || minute > 59 {
            panic!("invalid minute");
        }
        Time { hour, minute }
    }

    /// Returns the first minute of a day, `00:00`.
    #[inline]
    pub const fn midnight() -> Time {
        Time { hour: 0, minute: 0 }
    }

    /// Returns the first minute of a day, `00:00`.
    ///
    /// This is an alias for [`Time::midnight`].
    #[inline]
    pub const fn beginning_of_day() -> Time {
        Time::midnight()
    }

    /// Returns the last minute of a day, `23:59`.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::Time;
    ///
    /// assert_eq!(Time::end_of_day(), Time::MAX);
    /// assert_eq!(Time::end_of_day().succ(), Time::beginning_of_day());
    /// ```
    #[inline]
    pub const fn end_of_day() -> Time {
        Time::MAX
    }

    /// Parses a `Time` from any of the supported input shapes.
    ///
    /// This is the same as [`minutely::parse`](crate::parse). See
    /// [`TimeInput`] for the accepted shapes and [`TimeParser`] for the
    /// precise rules.
    ///
    /// Blank input (an absent value or an empty string) is not an error and
    /// returns `Ok(None)`.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::Time;
    ///
    /// assert_eq!(Time::parse("14:32")?, Some(Time::constant(14, 32)));
    /// assert_eq!(Time::parse(304)?, Some(Time::constant(3, 4)));
    /// assert_eq!(Time::parse("")?, None);
    /// assert_eq!(Time::parse(None::<&str>)?, None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse<I: Into<TimeInput>>(input: I) -> Result<Option<Time>, Error> {
        static P: TimeParser = TimeParser::new();
        P.parse(input)
    }

    /// Returns the "hour" component of this time.
    ///
    /// The value returned is guaranteed to be in the range `0..=23`.
    #[inline]
    pub fn hour(self) -> i8 {
        self.hour
    }

    /// Returns the "minute" component of this time.
    ///
    /// The value returned is guaranteed to be in the range `0..=59`.
    #[inline]
    pub fn minute(self) -> i8 {
        self.minute
    }

    /// Returns the time one minute after this one.
    ///
    /// This wraps around from `23:59` to `00:00`.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::Time;
    ///
    /// assert_eq!(Time::constant(12, 31).succ(), Time::constant(12, 32));
    /// assert_eq!(Time::constant(12, 59).succ(), Time::constant(13, 0));
    /// assert_eq!(Time::constant(23, 59).succ(), Time::constant(0, 0));
    /// ```
    #[inline]
    pub fn succ(self) -> Time {
        if self.minute == 59 {
            Time { hour: (self.hour + 1) % 24, minute: 0 }
        } else {
            Time { minute: self.minute + 1, ..self }
        }
    }

    /// Returns the integer representation of this time, `hour * 100 +
    /// minute`.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::Time;
    ///
    /// assert_eq!(Time::constant(14, 32).to_int(), 1432);
    /// assert_eq!(Time::constant(3, 9).to_int(), 309);
    /// assert_eq!(Time::MIN.to_int(), 0);
    /// ```
    #[inline]
    pub fn to_int(self) -> i16 {
        i16::from(self.hour) * 100 + i16::from(self.minute)
    }
}

impl Time {
    /// Checks the given hour and minute and builds a time from them.
    ///
    /// An hour equal to `max_hour` is allowed. When `max_hour` is `24`, that
    /// hour wraps around to `0`.
    pub(crate) fn checked(
        hour: i64,
        minute: i64,
        max_hour: i64,
    ) -> Result<Time, Error> {
        if !(0..=max_hour).contains(&hour) {
            return Err(E::InvalidHour { given: hour, max: max_hour }.into());
        }
        if !(0..=59).contains(&minute) {
            return Err(E::InvalidMinute { given: minute }.into());
        }
        // Both are now known to fit in an `i8`.
        Ok(Time { hour: (hour % 24) as i8, minute: minute as i8 })
    }

    /// Returns the number of minutes elapsed since midnight.
    pub(crate) fn minute_of_day(self) -> i16 {
        i16::from(self.hour) * 60 + i16::from(self.minute)
    }
}

impl Default for Time {
    fn default() -> Time {
        Time::midnight()
    }
}

impl core::fmt::Display for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl core::fmt::Debug for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

/// Parses a `Time` from `H:MM` or `HH:MM`.
///
/// Unlike [`Time::parse`], an empty string is an error here since there is
/// no way to return "no time."
impl core::str::FromStr for Time {
    type Err = Error;

    fn from_str(string: &str) -> Result<Time, Error> {
        static P: TimeParser = TimeParser::new();
        P.parse_str(string)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Time {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserializes a `Time` from any shape [`TimeInput`] deserializes from.
///
/// Blank values are rejected. Use `Option<Time>` for fields that may be
/// absent.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Time {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Time, D::Error> {
        use serde::de;

        let input = <TimeInput as serde::Deserialize>::deserialize(deserializer)?;
        Time::parse(input)
            .map_err(de::Error::custom)?
            .ok_or_else(|| de::Error::custom("expected a time but got blank"))
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Time {
    fn arbitrary(g: &mut quickcheck::Gen) -> Time {
        let minute_of_day = <u16 as quickcheck::Arbitrary>::arbitrary(g) % 1440;
        Time {
            hour: (minute_of_day / 60) as i8,
            minute: (minute_of_day % 60) as i8,
        }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Time>> {
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&(self.hour, self.minute))
                .filter_map(|(hour, minute)| {
                    Time::checked(i64::from(hour), i64::from(minute), 23).ok()
                }),
        )
    }
}
