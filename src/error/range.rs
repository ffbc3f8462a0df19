use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    BlankEndpoint,
    End,
    InvalidShape { what: &'static str },
    Member,
    MismatchedExclusivity { exclude_end: bool },
    MissingKey { key: &'static str },
    SpanningMidnight,
    Start,
    WrongArity { len: usize },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::TimeRange(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            BlankEndpoint => f.write_str(
                "invalid time range, both endpoints must be non-blank",
            ),
            End => f.write_str("failed to parse end of time range"),
            InvalidShape { what } => write!(
                f,
                "invalid time range, cannot parse a time range from {what}",
            ),
            Member => {
                f.write_str("failed to parse time to test for membership")
            }
            MismatchedExclusivity { exclude_end: true } => f.write_str(
                "cannot convert a time range excluding its end \
                 into an inclusive range",
            ),
            MismatchedExclusivity { exclude_end: false } => f.write_str(
                "cannot convert a time range including its end \
                 into an exclusive range",
            ),
            MissingKey { key } => {
                write!(f, "time range mapping is missing key `{key}`")
            }
            SpanningMidnight => f.write_str(
                "unable to convert a time range spanning midnight \
                 into ordered range bounds",
            ),
            Start => f.write_str("failed to parse start of time range"),
            WrongArity { len } => write!(
                f,
                "invalid time range, expected exactly 2 endpoints \
                 but found {len}",
            ),
        }
    }
}
