use crate::Field;

pub(crate) mod expanded;
pub(crate) mod fmt;

/// An error that can occur in this crate.
///
/// Errors fall into three broad categories, each of which has a predicate:
///
/// * [`Error::is_invalid_field`]: a value given to a constructor, to
/// [`ExpandedTime::with_field`](crate::ExpandedTime::with_field) or produced
/// for [`ExpandedTime::adjust_into`](crate::ExpandedTime::adjust_into) is
/// outside the range permitted for its field. For example, a minute of `60`.
/// * [`Error::is_parse`]: text given to
/// [`ExpandedTime::strptime`](crate::ExpandedTime::strptime) or to the
/// `FromStr` implementation did not match, or matched but resolved to an
/// invalid time.
/// * [`Error::is_invalid_parameter`]: an operation was asked to work with
/// a unit it doesn't support. For example, adding days to a wall clock.
///
/// Other than these predicates, the [`core::fmt::Debug`] and
/// [`core::fmt::Display`] traits, and [`std::error::Error`] when the `std`
/// feature is enabled, this type intentionally offers no introspection.
///
/// # Design
///
/// Like Jiff itself, this crate uses a single error type for every fallible
/// operation. Internally, errors are structured and may carry a chain of
/// context. The `Display` implementation prints the whole chain, starting
/// with the highest level context and ending with the root cause, separated
/// by `: `.
#[derive(Clone)]
pub struct Error {
    kind: ErrorKind,
    #[cfg(feature = "alloc")]
    cause: Option<alloc::boxed::Box<Error>>,
}

impl Error {
    /// Returns true when this error originated as a result of a field value
    /// (hour, minute, second, sub-second, excess days or nanosecond of day)
    /// being out of its permitted range outside of parsing.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_expanded::ExpandedTime;
    ///
    /// assert!(ExpandedTime::new(25, 60, 0).unwrap_err().is_invalid_field());
    /// assert!(ExpandedTime::with_excess_days(1, 24, 0, 0)
    ///     .unwrap_err()
    ///     .is_invalid_field());
    /// // Out of range fields while parsing are parse errors instead.
    /// let err = ExpandedTime::strptime("%H:%M", "25:60").unwrap_err();
    /// assert!(!err.is_invalid_field());
    /// assert!(err.is_parse());
    /// ```
    pub fn is_invalid_field(&self) -> bool {
        if self.is_parse() {
            return false;
        }
        matches!(*self.root().kind(), ErrorKind::Range(_) | ErrorKind::Jiff(_))
    }

    /// Returns true when this error originated from parsing text into an
    /// [`ExpandedTime`](crate::ExpandedTime).
    ///
    /// # Example
    ///
    /// ```
    /// use jiff_expanded::ExpandedTime;
    ///
    /// assert!(ExpandedTime::strptime("%H:%M", "25-30").unwrap_err().is_parse());
    /// assert!("25:3".parse::<ExpandedTime>().unwrap_err().is_parse());
    /// ```
    pub fn is_parse(&self) -> bool {
        self.chain().any(|err| matches!(*err.kind(), ErrorKind::Fmt(_)))
    }

    /// Returns true when this error originated as a result of an operation
    /// being given a unit it cannot work with.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::Unit;
    /// use jiff_expanded::ExpandedTime;
    ///
    /// let et = ExpandedTime::new(25, 30, 0)?;
    /// assert!(et.wrapping_add(1, Unit::Day).unwrap_err().is_invalid_parameter());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Expanded(expanded::Error::UnsupportedUnit { .. })
        )
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "minute")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }))
    }

    /// Creates a range error for the given field and value.
    #[inline(never)]
    #[cold]
    pub(crate) fn field_range(field: Field, given: i64) -> Error {
        let (min, max) = field.range();
        Error::range(field.name(), given, min, max)
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        #[cfg(feature = "alloc")]
        {
            let mut err = consequent;
            assert!(err.cause.is_none(), "cause of consequence must be `None`");
            err.cause = Some(alloc::boxed::Box::new(self));
            err
        }
        #[cfg(not(feature = "alloc"))]
        {
            // Without an allocator we can't build a chain. We keep the root
            // cause since that's what the predicates inspect.
            let _ = consequent;
            self
        }
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    /// Returns a chain of error values, starting with the highest level
    /// context and ending with the root cause.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut next = Some(self);
        core::iter::from_fn(move || {
            let err = next?;
            #[cfg(feature = "alloc")]
            {
                next = err.cause.as_deref();
            }
            #[cfg(not(feature = "alloc"))]
            {
                next = None;
            }
            Some(err)
        })
    }

    fn kind(&self) -> &ErrorKind {
        &self.kind
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
            #[cfg(feature = "alloc")]
            {
                f.debug_struct("Error")
                    .field("kind", &self.kind)
                    .field("cause", &self.cause)
                    .finish()
            }
            #[cfg(not(feature = "alloc"))]
            {
                f.debug_struct("Error").field("kind", &self.kind).finish()
            }
        }
    }
}

impl From<jiff::Error> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: jiff::Error) -> Error {
        Error::from(ErrorKind::Jiff(err))
    }
}

/// The underlying kind of a [`Error`].
#[derive(Clone, Debug)]
enum ErrorKind {
    Expanded(self::expanded::Error),
    Fmt(self::fmt::Error),
    Jiff(jiff::Error),
    Range(RangeError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Expanded(ref err) => err.fmt(f),
            Fmt(ref err) => err.fmt(f),
            Jiff(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            #[cfg(feature = "alloc")]
            cause: None,
        }
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Clone, Debug)]
struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This exists to make `Error::context` work without needing public `From`
/// impls for every internal error enum.
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
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`
/// without calling `map_err` everywhere.
pub(crate) trait ErrorContext<T> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: IntoError,
{
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }
}
