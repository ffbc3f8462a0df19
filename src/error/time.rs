use alloc::string::String;

use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    InvalidHour { given: i64, max: i64 },
    InvalidMinute { given: i64 },
    InvalidTime { what: &'static str },
    InvalidTimeString { given: String },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Time(err).into()
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
            InvalidHour { given, max } => write!(
                f,
                "invalid hour {given}, expected a value in the range 0..={max}",
            ),
            InvalidMinute { given } => write!(
                f,
                "invalid minute {given}, expected a value in the range 0..=59",
            ),
            InvalidTime { what } => {
                write!(f, "invalid time, cannot parse a time from {what}")
            }
            InvalidTimeString { ref given } => write!(
                f,
                "invalid time string {given:?}, expected `H:MM` or `HH:MM`",
            ),
        }
    }
}
