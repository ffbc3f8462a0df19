use alloc::sync::Arc;

pub(crate) mod range;
pub(crate) mod time;

/// An error that can occur in this crate.
///
/// Errors come from one of two places:
///
/// * Constructing a [`Time`](crate::Time) from an hour or minute that is out
/// of range.
/// * Parsing a [`Time`](crate::Time) or [`TimeRange`](crate::TimeRange) from
/// an input whose shape or contents are not supported.
///
/// Converting a [`TimeRange`](crate::TimeRange) that spans midnight into
/// native range bounds also fails with this error type.
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait when the
/// `std` feature is enabled, the [`core::fmt::Debug`] trait and the
/// [`core::fmt::Display`] trait, this error type provides introspection only
/// through the `Error::is_*` predicates. Each predicate looks at the root
/// cause of the error. So for example, failing to parse the start of a time
/// range from `"25:00"` reports `true` for [`Error::is_invalid_hour`] even
/// though the message mentions the time range.
///
/// # Design
///
/// Only one error type exists for all operations. Every error is a cheap to
/// clone pointer to its kind plus an optional cause, which lets parsers add
/// context (like "start of time range") without losing the root failure.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Returns true when the root cause of this error is an hour outside of
    /// the accepted range.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::Time;
    ///
    /// assert!(Time::new(25, 0).unwrap_err().is_invalid_hour());
    /// assert!(minutely::parse(2400).unwrap_err().is_invalid_hour());
    /// ```
    pub fn is_invalid_hour(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Time(self::time::Error::InvalidHour { .. })
        )
    }

    /// Returns true when the root cause of this error is a minute outside of
    /// the accepted range.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::Time;
    ///
    /// assert!(Time::new(14, 60).unwrap_err().is_invalid_minute());
    /// assert!(minutely::parse("00:61").unwrap_err().is_invalid_minute());
    /// ```
    pub fn is_invalid_minute(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Time(self::time::Error::InvalidMinute { .. })
        )
    }

    /// Returns true when the root cause of this error is an input whose shape
    /// cannot be interpreted as a time at all.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::TimeInput;
    ///
    /// let input = TimeInput::Unsupported { what: "boolean" };
    /// assert!(minutely::parse(input).unwrap_err().is_invalid_time());
    /// ```
    pub fn is_invalid_time(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Time(self::time::Error::InvalidTime { .. })
        )
    }

    /// Returns true when the root cause of this error is a string that is
    /// not of the form `H:MM` or `HH:MM`.
    ///
    /// # Example
    ///
    /// ```
    /// assert!(minutely::parse("14:2").unwrap_err().is_invalid_time_string());
    /// ```
    pub fn is_invalid_time_string(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Time(self::time::Error::InvalidTimeString { .. })
        )
    }

    /// Returns true when the root cause of this error is an input that
    /// cannot be interpreted as a time range. This covers unsupported input
    /// shapes, sequences without exactly two elements and blank endpoints.
    ///
    /// # Example
    ///
    /// ```
    /// let err = minutely::parse_range("14:00-15:00-16:00").unwrap_err();
    /// assert!(err.is_invalid_time_range());
    /// ```
    pub fn is_invalid_time_range(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::TimeRange(
                self::range::Error::InvalidShape { .. }
                    | self::range::Error::WrongArity { .. }
                    | self::range::Error::BlankEndpoint
            )
        )
    }

    /// Returns true when the root cause of this error is a mapping that is
    /// missing its `from` or `to` key.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("from", "1:23");
    /// assert!(minutely::parse_range(map).unwrap_err().is_missing_key());
    /// ```
    pub fn is_missing_key(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::TimeRange(self::range::Error::MissingKey { .. })
        )
    }

    /// Returns true when the root cause of this error is an attempt to
    /// convert a time range into native range bounds that cannot represent
    /// it. This happens for ranges spanning midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use minutely::TimeRange;
    ///
    /// let range = TimeRange::new("23:57", "0:03")?;
    /// assert!(range.to_ordered_range().unwrap_err().is_unsupported_conversion());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_unsupported_conversion(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::TimeRange(
                self::range::Error::SpanningMidnight
                    | self::range::Error::MismatchedExclusivity { .. }
            )
        )
    }
}

impl Error {
    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        let inner = Arc::get_mut(&mut err.inner)
            .expect("consequent error must be freshly created");
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        inner.cause = Some(self);
        err
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(ref cause) = err.inner.cause {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Time(self::time::Error),
    TimeRange(self::range::Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            ErrorKind::Time(ref err) => err.fmt(f),
            ErrorKind::TimeRange(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This exists so that contextual errors can be attached without public
/// `From` impls on `Error`.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize a `Result<T, Error>` without calling
/// `map_err` everywhere.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This panics if the consequent already has a cause, since an error
    /// causal chain is a linked list and not a tree.
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    #[inline]
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }
}
