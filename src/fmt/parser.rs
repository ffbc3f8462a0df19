use alloc::{string::ToString, vec::Vec};

use crate::{
    civil::{Time, TimeRange},
    error::{range::Error as RE, time::Error as TE, Error},
    fmt::{TimeInput, TimeRangeInput},
    util::{
        blank::{is_blank, Blank},
        parse,
    },
};

/// A parser for converting any [`TimeInput`] into a [`Time`].
///
/// The input is inspected once and dispatched on its shape:
///
/// 1. A blank input (absent, or an empty string) yields `None`.
/// 2. A `Time` is returned unchanged.
/// 3. An hour and minute taken from some other time-like value are
/// validated like [`Time::new`], so an hour of `24` means midnight.
/// 4. An integer is split into `value div 100` hours and `value mod 100`
/// minutes, using floored division.
/// 5. A string must be exactly `H:MM` or `HH:MM`, with ASCII digits and no
/// surrounding whitespace.
/// 6. Anything else is an error.
///
/// Unlike [`Time::new`], integers and strings must name an hour in the range
/// `0..=23`. That is, `2400` and `"24:00"` are both rejected.
///
/// # Example
///
/// ```
/// use minutely::{fmt::TimeParser, Time};
///
/// static PARSER: TimeParser = TimeParser::new();
///
/// assert_eq!(PARSER.parse("9:05")?, Some(Time::constant(9, 5)));
/// assert_eq!(PARSER.parse(905)?, Some(Time::constant(9, 5)));
/// assert_eq!(PARSER.parse("")?, None);
/// assert!(PARSER.parse(2400).is_err());
/// assert!(PARSER.parse("9:05:00").is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct TimeParser {
    _priv: (),
}

impl TimeParser {
    /// Create a new time parser.
    #[inline]
    pub const fn new() -> TimeParser {
        TimeParser { _priv: () }
    }

    /// Parse a time from the given input.
    ///
    /// # Errors
    ///
    /// This returns an error when the input has an unsupported shape, when a
    /// string is malformed or when the hour or minute is out of range.
    pub fn parse<I: Into<TimeInput>>(
        &self,
        input: I,
    ) -> Result<Option<Time>, Error> {
        let input = input.into();
        if input.is_blank() {
            trace!("parsed blank time input as no time");
            return Ok(None);
        }
        let time = match input {
            TimeInput::Blank => return Ok(None),
            TimeInput::Time(time) => time,
            TimeInput::HourMinute { hour, minute } => {
                trace!("parsing time from hour {hour} and minute {minute}");
                Time::checked(hour, minute, 24)?
            }
            TimeInput::Integer(n) => self.parse_integer(n)?,
            TimeInput::String(ref s) => self.parse_str(s)?,
            TimeInput::Unsupported { what } => {
                return Err(TE::InvalidTime { what }.into())
            }
        };
        Ok(Some(time))
    }

    /// Parse a time from an `H:MM` or `HH:MM` string.
    ///
    /// An empty string is an error, not blank.
    pub(crate) fn parse_str(&self, string: &str) -> Result<Time, Error> {
        trace!("parsing time from string {string:?}");
        let Some((hour, minute)) = parse::hour_minute(string.as_bytes())
        else {
            return Err(TE::InvalidTimeString { given: string.to_string() }
                .into());
        };
        Time::checked(hour, minute, 23)
    }

    fn parse_integer(&self, n: i64) -> Result<Time, Error> {
        trace!("parsing time from integer {n}");
        Time::checked(n.div_euclid(100), n.rem_euclid(100), 23)
    }
}

/// A parser for converting any [`TimeRangeInput`] into a [`TimeRange`].
///
/// The input is inspected once and dispatched on its shape:
///
/// 1. A blank input yields `None`.
/// 2. A `TimeRange` is returned unchanged.
/// 3. A sequence must have exactly two elements, neither of them blank.
/// Each element is parsed as a time by [`TimeParser`], and the range
/// includes its end.
/// 4. An empty mapping yields `None`. Otherwise the mapping must have a
/// `from` and a `to` key, whose values are treated like a sequence of two
/// elements. Other keys are ignored.
/// 5. A native range keeps its own choice of including or excluding its
/// end. Both of its endpoints must be non-blank.
/// 6. An empty string yields `None`. Otherwise the string is split on every
/// `-`, empty pieces at the end are dropped, each remaining piece is trimmed
/// of whitespace and the pieces are treated like a sequence. So
/// `"14:00-15:00-"` is accepted while `"14:00-"` has only one endpoint.
/// 7. Anything else is an error.
///
/// # Example
///
/// ```
/// use minutely::{fmt::TimeRangeParser, time, TimeRange};
///
/// static PARSER: TimeRangeParser = TimeRangeParser::new();
///
/// let range = PARSER.parse("23:00 - 1:00")?.unwrap();
/// assert_eq!(range, TimeRange::new(time(23, 0), time(1, 0))?);
///
/// assert_eq!(PARSER.parse(vec![900, 1700])?, TimeRange::new(900, 1700).ok());
/// assert_eq!(PARSER.parse("")?, None);
/// assert!(PARSER.parse("14:00-").is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct TimeRangeParser {
    _priv: (),
}

impl TimeRangeParser {
    /// Create a new time range parser.
    #[inline]
    pub const fn new() -> TimeRangeParser {
        TimeRangeParser { _priv: () }
    }

    /// Parse a time range from the given input.
    ///
    /// # Errors
    ///
    /// This returns an error when the input has an unsupported shape, when
    /// it doesn't have exactly two non-blank endpoints, when a mapping lacks
    /// a `from` or `to` key, or when either endpoint fails to parse as a
    /// time.
    pub fn parse<I: Into<TimeRangeInput>>(
        &self,
        input: I,
    ) -> Result<Option<TimeRange>, Error> {
        let range = match input.into() {
            TimeRangeInput::Blank => {
                trace!("parsed blank time range input as no time range");
                return Ok(None);
            }
            TimeRangeInput::TimeRange(range) => range,
            TimeRangeInput::Sequence(items) => {
                trace!("parsing time range from {} items", items.len());
                self.parse_pair(items)?
            }
            TimeRangeInput::Mapping(mut map) => {
                if is_blank(&map) {
                    trace!("parsed empty mapping as no time range");
                    return Ok(None);
                }
                trace!("parsing time range from mapping");
                let from = map
                    .remove("from")
                    .ok_or(RE::MissingKey { key: "from" })?;
                let to = map.remove("to").ok_or(RE::MissingKey { key: "to" })?;
                self.parse_pair(alloc::vec![from, to])?
            }
            TimeRangeInput::Range { start, end, exclude_end } => {
                trace!(
                    "parsing time range from native range \
                     (exclude_end={exclude_end})",
                );
                TimeRange::with_exclude_end(start, end, exclude_end)?
            }
            TimeRangeInput::String(string) => {
                if is_blank(&string) {
                    trace!("parsed empty string as no time range");
                    return Ok(None);
                }
                trace!("parsing time range from string {string:?}");
                let mut pieces: Vec<&str> = string.split('-').collect();
                // Trailing empty pieces are dropped, but leading and
                // interior ones are kept and rejected as blank endpoints.
                while pieces.last().map_or(false, |piece| piece.is_empty()) {
                    pieces.pop();
                }
                let pieces = pieces
                    .into_iter()
                    .map(|piece| TimeInput::from(piece.trim()))
                    .collect();
                self.parse_pair(pieces)?
            }
            TimeRangeInput::Unsupported { what } => {
                return Err(RE::InvalidShape { what }.into())
            }
        };
        Ok(Some(range))
    }

    /// Builds an inclusive range from exactly two non-blank endpoints.
    fn parse_pair(&self, items: Vec<TimeInput>) -> Result<TimeRange, Error> {
        let [from, to]: [TimeInput; 2] = items
            .try_into()
            .map_err(|items: Vec<TimeInput>| RE::WrongArity {
                len: items.len(),
            })?;
        if from.is_blank() || to.is_blank() {
            return Err(RE::BlankEndpoint.into());
        }
        TimeRange::new(from, to)
    }
}
