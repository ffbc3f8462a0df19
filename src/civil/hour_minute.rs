/// A value that has an hour and a minute, such as a full timestamp from
/// another datetime library.
///
/// Implementing this trait lets a value be parsed into a
/// [`Time`](crate::Time) by taking only its hour and minute. Everything else
/// about the value (seconds, date, time zone) is ignored. The hour and minute
/// are validated the same way as [`Time::new`](crate::Time::new), so an hour
/// of `24` is accepted as midnight.
///
/// With the `jiff` crate feature, this is implemented for
/// `jiff::civil::Time`, `jiff::civil::DateTime` and `jiff::Zoned`. With the
/// `chrono` crate feature, it is implemented for `chrono::NaiveTime`,
/// `chrono::NaiveDateTime` and `chrono::DateTime<Tz>`. Each of those also
/// converts directly into a [`TimeInput`](crate::TimeInput).
///
/// # Example
///
/// ```
/// use minutely::{HasHourMinute, Time, TimeInput};
///
/// struct Reading {
///     hour: u8,
///     minute: u8,
///     celsius: f64,
/// }
///
/// impl HasHourMinute for Reading {
///     fn hour(&self) -> i64 {
///         i64::from(self.hour)
///     }
///
///     fn minute(&self) -> i64 {
///         i64::from(self.minute)
///     }
/// }
///
/// let reading = Reading { hour: 6, minute: 45, celsius: 12.5 };
/// let input = TimeInput::from_hour_minute(&reading);
/// assert_eq!(minutely::parse(input)?, Some(Time::constant(6, 45)));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait HasHourMinute {
    /// Returns the hour of this value.
    fn hour(&self) -> i64;

    /// Returns the minute of this value.
    fn minute(&self) -> i64;
}

#[allow(unused_macros)]
macro_rules! impl_time_input_from_hour_minute {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for TimeInput {
                fn from(value: $ty) -> TimeInput {
                    TimeInput::from_hour_minute(&value)
                }
            }

            impl<'a> From<&'a $ty> for TimeInput {
                fn from(value: &'a $ty) -> TimeInput {
                    TimeInput::from_hour_minute(value)
                }
            }
        )*
    }
}

#[cfg(feature = "jiff")]
mod jiff_impls {
    use super::HasHourMinute;
    use crate::fmt::TimeInput;

    impl HasHourMinute for jiff::civil::Time {
        fn hour(&self) -> i64 {
            i64::from(jiff::civil::Time::hour(*self))
        }

        fn minute(&self) -> i64 {
            i64::from(jiff::civil::Time::minute(*self))
        }
    }

    impl HasHourMinute for jiff::civil::DateTime {
        fn hour(&self) -> i64 {
            i64::from(jiff::civil::DateTime::hour(*self))
        }

        fn minute(&self) -> i64 {
            i64::from(jiff::civil::DateTime::minute(*self))
        }
    }

    impl HasHourMinute for jiff::Zoned {
        fn hour(&self) -> i64 {
            i64::from(jiff::Zoned::hour(self))
        }

        fn minute(&self) -> i64 {
            i64::from(jiff::Zoned::minute(self))
        }
    }

    impl_time_input_from_hour_minute!(
        jiff::civil::Time,
        jiff::civil::DateTime,
        jiff::Zoned,
    );
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use chrono::Timelike;

    use super::HasHourMinute;
    use crate::fmt::TimeInput;

    impl HasHourMinute for chrono::NaiveTime {
        fn hour(&self) -> i64 {
            i64::from(Timelike::hour(self))
        }

        fn minute(&self) -> i64 {
            i64::from(Timelike::minute(self))
        }
    }

    impl HasHourMinute for chrono::NaiveDateTime {
        fn hour(&self) -> i64 {
            i64::from(Timelike::hour(self))
        }

        fn minute(&self) -> i64 {
            i64::from(Timelike::minute(self))
        }
    }

    impl<Tz: chrono::TimeZone> HasHourMinute for chrono::DateTime<Tz> {
        fn hour(&self) -> i64 {
            i64::from(Timelike::hour(self))
        }

        fn minute(&self) -> i64 {
            i64::from(Timelike::minute(self))
        }
    }

    impl_time_input_from_hour_minute!(chrono::NaiveTime, chrono::NaiveDateTime);

    impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for TimeInput {
        fn from(value: chrono::DateTime<Tz>) -> TimeInput {
            TimeInput::from_hour_minute(&value)
        }
    }

    impl<'a, Tz: chrono::TimeZone> From<&'a chrono::DateTime<Tz>> for TimeInput {
        fn from(value: &'a chrono::DateTime<Tz>) -> TimeInput {
            TimeInput::from_hour_minute(value)
        }
    }
}
