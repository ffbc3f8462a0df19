use core::ops::{Range, RangeInclusive};

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

use crate::{
    civil::{HasHourMinute, Time, TimeRange},
    util::blank::Blank,
};

/// The shape of a value to parse into a [`Time`].
///
/// Every value accepted by [`minutely::parse`](crate::parse) is first turned
/// into one of these variants through a `From` impl. Most callers never name
/// this type directly. It is useful when writing a `From` impl for your own
/// type, or when inspecting untyped data deserialized with serde.
///
/// # Conversions
///
/// * `Time` and `&Time` become [`TimeInput::Time`].
/// * Every primitive integer type becomes [`TimeInput::Integer`].
/// * `&str`, `String` and `&String` become [`TimeInput::String`].
/// * `Option<T>` becomes [`TimeInput::Blank`] when it's `None`, and otherwise
/// whatever `T` becomes.
/// * Values implementing [`HasHourMinute`] become
/// [`TimeInput::HourMinute`] through [`TimeInput::from_hour_minute`]. With
/// the `jiff` or `chrono` crate features, their time types convert
/// directly.
///
/// # Deserialization
///
/// With the `serde` crate feature, this type deserializes from any value
/// in a self describing format. Strings and integers map to their
/// variants. A null or an empty sequence or mapping is blank. Everything
/// else becomes [`TimeInput::Unsupported`], which fails to parse.
///
/// # Example
///
/// ```
/// use minutely::{Time, TimeInput};
///
/// assert_eq!(TimeInput::from(1405), TimeInput::Integer(1405));
/// assert_eq!(TimeInput::from(None::<&str>), TimeInput::Blank);
/// assert_eq!(minutely::parse(TimeInput::from("14:05"))?, Some(Time::constant(14, 5)));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TimeInput {
    /// An absent value. This parses to no time at all.
    Blank,
    /// A time that has already been parsed.
    Time(Time),
    /// The hour and minute of some other time-like value.
    ///
    /// Like [`Time::new`], an hour of `24` is accepted as midnight.
    HourMinute {
        /// The hour.
        hour: i64,
        /// The minute.
        minute: i64,
    },
    /// An integer of the form `hour * 100 + minute`.
    Integer(i64),
    /// A string of the form `H:MM` or `HH:MM`. An empty string is blank.
    String(String),
    /// A value of a shape that cannot be parsed into a time. `what` names the
    /// shape for error messages, e.g. `"a boolean"`.
    Unsupported {
        /// A description of the unsupported shape.
        what: &'static str,
    },
}

impl TimeInput {
    /// Creates an input from the hour and minute of any time-like value.
    ///
    /// See [`HasHourMinute`] for an example.
    #[inline]
    pub fn from_hour_minute<T: HasHourMinute + ?Sized>(value: &T) -> TimeInput {
        TimeInput::HourMinute { hour: value.hour(), minute: value.minute() }
    }
}

impl Blank for TimeInput {
    fn is_blank(&self) -> bool {
        match *self {
            TimeInput::Blank => true,
            TimeInput::String(ref s) => s.is_blank(),
            _ => false,
        }
    }
}

impl From<Time> for TimeInput {
    fn from(time: Time) -> TimeInput {
        TimeInput::Time(time)
    }
}

impl<'a> From<&'a Time> for TimeInput {
    fn from(time: &'a Time) -> TimeInput {
        TimeInput::Time(*time)
    }
}

macro_rules! impl_time_input_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for TimeInput {
                fn from(n: $ty) -> TimeInput {
                    TimeInput::Integer(i64::from(n))
                }
            }
        )*
    }
}

impl_time_input_from_integer!(i8, i16, i32, i64, u8, u16, u32);

// These can exceed `i64::MAX`. Saturating still fails validation as an
// out of range hour.
macro_rules! impl_time_input_from_wide_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for TimeInput {
                fn from(n: $ty) -> TimeInput {
                    TimeInput::Integer(i64::try_from(n).unwrap_or(i64::MAX))
                }
            }
        )*
    }
}

impl_time_input_from_wide_integer!(isize, u64, usize);

impl<'a> From<&'a str> for TimeInput {
    fn from(string: &'a str) -> TimeInput {
        TimeInput::String(string.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(string: String) -> TimeInput {
        TimeInput::String(string)
    }
}

impl<'a> From<&'a String> for TimeInput {
    fn from(string: &'a String) -> TimeInput {
        TimeInput::String(string.clone())
    }
}

impl<T: Into<TimeInput>> From<Option<T>> for TimeInput {
    fn from(value: Option<T>) -> TimeInput {
        value.map_or(TimeInput::Blank, Into::into)
    }
}

/// The shape of a value to parse into a [`TimeRange`].
///
/// Every value accepted by [`minutely::parse_range`](crate::parse_range) is
/// first turned into one of these variants through a `From` impl.
///
/// # Conversions
///
/// * `TimeRange` and `&TimeRange` become [`TimeRangeInput::TimeRange`].
/// * `Vec<T>`, `[T; N]` and `(A, B)` become [`TimeRangeInput::Sequence`]
/// when their elements convert into a [`TimeInput`].
/// * `BTreeMap<K, V>` (and `HashMap<K, V>` with the `std` feature) become
/// [`TimeRangeInput::Mapping`] when the keys convert into a `String` and
/// the values into a `TimeInput`.
/// * `a..b` and `a..=b` become [`TimeRangeInput::Range`], excluding or
/// including their end respectively.
/// * `&str`, `String` and `&String` become [`TimeRangeInput::String`].
/// * `Option<T>` becomes [`TimeRangeInput::Blank`] when it's `None`, and
/// otherwise whatever `T` becomes.
///
/// # Deserialization
///
/// With the `serde` crate feature, this type deserializes from any value in
/// a self describing format. Strings, sequences and mappings map to their
/// variants, and null is blank. Everything else becomes
/// [`TimeRangeInput::Unsupported`], which fails to parse.
///
/// # Example
///
/// ```
/// use minutely::{time, TimeRange, TimeRangeInput};
///
/// let input = TimeRangeInput::from(("9:00", 1700));
/// let range = minutely::parse_range(input)?.unwrap();
/// assert_eq!(range, TimeRange::new(time(9, 0), time(17, 0))?);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TimeRangeInput {
    /// An absent value. This parses to no time range at all.
    Blank,
    /// A time range that has already been parsed.
    TimeRange(TimeRange),
    /// A sequence of endpoints. Exactly two non-blank endpoints are needed.
    Sequence(Vec<TimeInput>),
    /// A mapping with `from` and `to` keys. Other keys are ignored. An empty
    /// mapping is blank.
    Mapping(BTreeMap<String, TimeInput>),
    /// The endpoints of a native range.
    Range {
        /// The start of the range.
        start: TimeInput,
        /// The end of the range.
        end: TimeInput,
        /// Whether `end` is excluded from the range.
        exclude_end: bool,
    },
    /// A string of the form `FROM-TO`, where each side is a time string
    /// surrounded by optional whitespace. An empty string is blank.
    String(String),
    /// A value of a shape that cannot be parsed into a time range. `what`
    /// names the shape for error messages, e.g. `"an integer"`.
    Unsupported {
        /// A description of the unsupported shape.
        what: &'static str,
    },
}

impl From<TimeRange> for TimeRangeInput {
    fn from(range: TimeRange) -> TimeRangeInput {
        TimeRangeInput::TimeRange(range)
    }
}

impl<'a> From<&'a TimeRange> for TimeRangeInput {
    fn from(range: &'a TimeRange) -> TimeRangeInput {
        TimeRangeInput::TimeRange(*range)
    }
}

impl<T: Into<TimeInput>> From<Vec<T>> for TimeRangeInput {
    fn from(items: Vec<T>) -> TimeRangeInput {
        TimeRangeInput::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<TimeInput>, const N: usize> From<[T; N]> for TimeRangeInput {
    fn from(items: [T; N]) -> TimeRangeInput {
        TimeRangeInput::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<TimeInput>, B: Into<TimeInput>> From<(A, B)> for TimeRangeInput {
    fn from((from, to): (A, B)) -> TimeRangeInput {
        TimeRangeInput::Sequence(alloc::vec![from.into(), to.into()])
    }
}

impl<K, V> From<BTreeMap<K, V>> for TimeRangeInput
where
    K: Into<String>,
    V: Into<TimeInput>,
{
    fn from(map: BTreeMap<K, V>) -> TimeRangeInput {
        TimeRangeInput::Mapping(
            map.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        )
    }
}

#[cfg(feature = "std")]
impl<K, V, S> From<std::collections::HashMap<K, V, S>> for TimeRangeInput
where
    K: Into<String>,
    V: Into<TimeInput>,
{
    fn from(map: std::collections::HashMap<K, V, S>) -> TimeRangeInput {
        TimeRangeInput::Mapping(
            map.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        )
    }
}

impl<T: Into<TimeInput>> From<Range<T>> for TimeRangeInput {
    fn from(range: Range<T>) -> TimeRangeInput {
        TimeRangeInput::Range {
            start: range.start.into(),
            end: range.end.into(),
            exclude_end: true,
        }
    }
}

impl<T: Into<TimeInput>> From<RangeInclusive<T>> for TimeRangeInput {
    fn from(range: RangeInclusive<T>) -> TimeRangeInput {
        let (start, end) = range.into_inner();
        TimeRangeInput::Range {
            start: start.into(),
            end: end.into(),
            exclude_end: false,
        }
    }
}

impl<'a> From<&'a str> for TimeRangeInput {
    fn from(string: &'a str) -> TimeRangeInput {
        TimeRangeInput::String(string.to_string())
    }
}

impl From<String> for TimeRangeInput {
    fn from(string: String) -> TimeRangeInput {
        TimeRangeInput::String(string)
    }
}

impl<'a> From<&'a String> for TimeRangeInput {
    fn from(string: &'a String) -> TimeRangeInput {
        TimeRangeInput::String(string.clone())
    }
}

impl<T: Into<TimeRangeInput>> From<Option<T>> for TimeRangeInput {
    fn from(value: Option<T>) -> TimeRangeInput {
        value.map_or(TimeRangeInput::Blank, Into::into)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use alloc::{collections::BTreeMap, string::String, vec::Vec};

    use serde::de;

    use super::{TimeInput, TimeRangeInput};

    impl<'de> serde::Deserialize<'de> for TimeInput {
        #[inline]
        fn deserialize<D: serde::Deserializer<'de>>(
            deserializer: D,
        ) -> Result<TimeInput, D::Error> {
            deserializer.deserialize_any(TimeInputVisitor)
        }
    }

    struct TimeInputVisitor;

    impl<'de> de::Visitor<'de> for TimeInputVisitor {
        type Value = TimeInput;

        fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
            f.write_str("a time string, an integer or null")
        }

        #[inline]
        fn visit_bool<E: de::Error>(self, _: bool) -> Result<TimeInput, E> {
            Ok(TimeInput::Unsupported { what: "a boolean" })
        }

        #[inline]
        fn visit_i64<E: de::Error>(self, v: i64) -> Result<TimeInput, E> {
            Ok(TimeInput::Integer(v))
        }

        #[inline]
        fn visit_u64<E: de::Error>(self, v: u64) -> Result<TimeInput, E> {
            Ok(TimeInput::from(v))
        }

        #[inline]
        fn visit_f64<E: de::Error>(self, _: f64) -> Result<TimeInput, E> {
            Ok(TimeInput::Unsupported { what: "a floating point number" })
        }

        #[inline]
        fn visit_str<E: de::Error>(self, v: &str) -> Result<TimeInput, E> {
            Ok(TimeInput::from(v))
        }

        #[inline]
        fn visit_string<E: de::Error>(self, v: String) -> Result<TimeInput, E> {
            Ok(TimeInput::String(v))
        }

        #[inline]
        fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<TimeInput, E> {
            Ok(TimeInput::Unsupported { what: "bytes" })
        }

        #[inline]
        fn visit_none<E: de::Error>(self) -> Result<TimeInput, E> {
            Ok(TimeInput::Blank)
        }

        #[inline]
        fn visit_unit<E: de::Error>(self) -> Result<TimeInput, E> {
            Ok(TimeInput::Blank)
        }

        #[inline]
        fn visit_some<D: de::Deserializer<'de>>(
            self,
            deserializer: D,
        ) -> Result<TimeInput, D::Error> {
            deserializer.deserialize_any(self)
        }

        fn visit_seq<A: de::SeqAccess<'de>>(
            self,
            mut seq: A,
        ) -> Result<TimeInput, A::Error> {
            if seq.next_element::<de::IgnoredAny>()?.is_none() {
                return Ok(TimeInput::Blank);
            }
            while seq.next_element::<de::IgnoredAny>()?.is_some() {}
            Ok(TimeInput::Unsupported { what: "a sequence" })
        }

        fn visit_map<A: de::MapAccess<'de>>(
            self,
            mut map: A,
        ) -> Result<TimeInput, A::Error> {
            type Any = de::IgnoredAny;

            if map.next_entry::<Any, Any>()?.is_none() {
                return Ok(TimeInput::Blank);
            }
            while map.next_entry::<Any, Any>()?.is_some() {}
            Ok(TimeInput::Unsupported { what: "a mapping" })
        }
    }

    impl<'de> serde::Deserialize<'de> for TimeRangeInput {
        #[inline]
        fn deserialize<D: serde::Deserializer<'de>>(
            deserializer: D,
        ) -> Result<TimeRangeInput, D::Error> {
            deserializer.deserialize_any(TimeRangeInputVisitor)
        }
    }

    struct TimeRangeInputVisitor;

    impl<'de> de::Visitor<'de> for TimeRangeInputVisitor {
        type Value = TimeRangeInput;

        fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
            f.write_str(
                "a time range string, a pair of times, \
                 a mapping with `from` and `to` keys or null",
            )
        }

        #[inline]
        fn visit_bool<E: de::Error>(
            self,
            _: bool,
        ) -> Result<TimeRangeInput, E> {
            Ok(TimeRangeInput::Unsupported { what: "a boolean" })
        }

        #[inline]
        fn visit_i64<E: de::Error>(self, _: i64) -> Result<TimeRangeInput, E> {
            Ok(TimeRangeInput::Unsupported { what: "an integer" })
        }

        #[inline]
        fn visit_u64<E: de::Error>(self, _: u64) -> Result<TimeRangeInput, E> {
            Ok(TimeRangeInput::Unsupported { what: "an integer" })
        }

        #[inline]
        fn visit_f64<E: de::Error>(self, _: f64) -> Result<TimeRangeInput, E> {
            Ok(TimeRangeInput::Unsupported { what: "a floating point number" })
        }

        #[inline]
        fn visit_str<E: de::Error>(
            self,
            v: &str,
        ) -> Result<TimeRangeInput, E> {
            Ok(TimeRangeInput::from(v))
        }

        #[inline]
        fn visit_string<E: de::Error>(
            self,
            v: String,
        ) -> Result<TimeRangeInput, E> {
            Ok(TimeRangeInput::String(v))
        }

        #[inline]
        fn visit_bytes<E: de::Error>(
            self,
            _: &[u8],
        ) -> Result<TimeRangeInput, E> {
            Ok(TimeRangeInput::Unsupported { what: "bytes" })
        }

        #[inline]
        fn visit_none<E: de::Error>(self) -> Result<TimeRangeInput, E> {
            Ok(TimeRangeInput::Blank)
        }

        #[inline]
        fn visit_unit<E: de::Error>(self) -> Result<TimeRangeInput, E> {
            Ok(TimeRangeInput::Blank)
        }

        #[inline]
        fn visit_some<D: de::Deserializer<'de>>(
            self,
            deserializer: D,
        ) -> Result<TimeRangeInput, D::Error> {
            deserializer.deserialize_any(self)
        }

        fn visit_seq<A: de::SeqAccess<'de>>(
            self,
            mut seq: A,
        ) -> Result<TimeRangeInput, A::Error> {
            let mut items = Vec::new();
            while let Some(item) = seq.next_element::<TimeInput>()? {
                items.push(item);
            }
            Ok(TimeRangeInput::Sequence(items))
        }

        fn visit_map<A: de::MapAccess<'de>>(
            self,
            mut map: A,
        ) -> Result<TimeRangeInput, A::Error> {
            let mut entries = BTreeMap::new();
            while let Some((key, value)) =
                map.next_entry::<String, TimeInput>()?
            {
                entries.insert(key, value);
            }
            Ok(TimeRangeInput::Mapping(entries))
        }
    }
}
