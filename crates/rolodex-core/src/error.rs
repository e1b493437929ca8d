//! Classified errors.
//!
//! Every failure that leaves this workspace is a [`ClassifiedError`]: one of a
//! closed set of kinds that callers `match` on, plus the diagnostics an
//! operator needs to chase it down:
//!
//! - an optional human message
//! - key/value context attached where the error was raised
//! - the wrapped cause (any `std::error::Error`), reachable through
//!   [`std::error::Error::source`]
//! - the call site that raised it, and a backtrace when capture is enabled
//!
//! Translations can be stacked: a `ClassifiedError` may itself be the cause of
//! another one. [`chain`], [`kind_of`] and [`root_cause`] walk such stacks
//! through plain `dyn Error` references, so callers never string-match.

use std::{
    backtrace::{Backtrace, BacktraceStatus},
    error::Error as StdError,
    fmt,
    panic::Location,
};

/// Boxed underlying error carried as the cause of a [`ClassifiedError`].
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Result alias used throughout the workspace.
pub type Result<T, E = ClassifiedError> = std::result::Result<T, E>;

/// Classification of a failure.
///
/// This is the field-less mirror of [`ClassifiedError`], convenient for
/// comparisons and for [`kind_of`] on arbitrary error chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested record does not exist.
    NotFound,
    /// The address check failed, whether the whitelist could not be read or
    /// the address is simply not on it.
    Forbidden,
}

impl ErrorKind {
    /// Stable name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NotFound",
            Self::Forbidden => "Forbidden",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostics shared by every kind of [`ClassifiedError`].
///
/// Reachable by matching on a variant's `detail` field; the same values are
/// also exposed directly on [`ClassifiedError`].
#[derive(Debug)]
pub struct Detail {
    message: Option<String>,
    context: Vec<(&'static str, String)>,
    origin: &'static Location<'static>,
    backtrace: Backtrace,
}

impl Detail {
    #[track_caller]
    fn capture() -> Self {
        Self {
            message: None,
            context: Vec::new(),
            origin: Location::caller(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Human-readable message, if one was attached.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Context pairs in the order they were attached.
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Source location that raised the error.
    pub fn origin(&self) -> &'static Location<'static> {
        self.origin
    }

    /// Backtrace captured at construction.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

/// An error tagged with one of a closed set of kinds.
///
/// Construct with [`ClassifiedError::new`] when the failure is detected
/// directly, or [`ClassifiedError::translate`] when wrapping a lower-level
/// error. Both record the caller's location as the origin.
#[derive(Debug, thiserror::Error)]
pub enum ClassifiedError {
    /// The requested record does not exist.
    #[error("{}", summary(ErrorKind::NotFound, .detail))]
    NotFound {
        /// Message, context and origin.
        detail: Detail,
        /// Underlying error, if this was a translation.
        #[source]
        cause: Option<Cause>,
    },

    /// The address is not permitted, or permission could not be verified.
    #[error("{}", summary(ErrorKind::Forbidden, .detail))]
    Forbidden {
        /// Message, context and origin.
        detail: Detail,
        /// Underlying error, if this was a translation.
        #[source]
        cause: Option<Cause>,
    },
}

fn summary(kind: ErrorKind, detail: &Detail) -> String {
    match &detail.message {
        Some(message) => format!("{kind}: {message}"),
        None => kind.to_string(),
    }
}

impl ClassifiedError {
    /// Raise a new error of the given kind with no cause.
    #[track_caller]
    pub fn new(kind: ErrorKind) -> Self {
        Self::build(kind, Detail::capture(), None)
    }

    /// Translate a lower-level error into the given kind, keeping it as the
    /// cause.
    #[track_caller]
    pub fn translate(cause: impl Into<Cause>, kind: ErrorKind) -> Self {
        Self::build(kind, Detail::capture(), Some(cause.into()))
    }

    fn build(kind: ErrorKind, detail: Detail, cause: Option<Cause>) -> Self {
        match kind {
            ErrorKind::NotFound => Self::NotFound { detail, cause },
            ErrorKind::Forbidden => Self::Forbidden { detail, cause },
        }
    }

    /// Attach a human-readable message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.detail_mut().message = Some(message.into());
        self
    }

    /// Attach a key/value pair of diagnostic context.
    #[must_use]
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.detail_mut().context.push((key, value.into()));
        self
    }

    /// Classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Forbidden { .. } => ErrorKind::Forbidden,
        }
    }

    /// Returns true if this error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }

    /// Human-readable message, if one was attached.
    pub fn message(&self) -> Option<&str> {
        self.detail().message()
    }

    /// Context pairs in the order they were attached.
    pub fn context(&self) -> &[(&'static str, String)] {
        self.detail().context()
    }

    /// Source location that raised this error.
    pub fn origin(&self) -> &'static Location<'static> {
        self.detail().origin()
    }

    /// Backtrace captured at construction.
    ///
    /// Empty unless `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` enables capture.
    pub fn backtrace(&self) -> &Backtrace {
        self.detail().backtrace()
    }

    /// The wrapped lower-level error, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::NotFound { cause, .. } | Self::Forbidden { cause, .. } => cause.as_deref(),
        }
    }

    /// Take ownership of the wrapped lower-level error.
    pub fn into_cause(self) -> Option<Cause> {
        match self {
            Self::NotFound { cause, .. } | Self::Forbidden { cause, .. } => cause,
        }
    }

    /// Detailed multi-line rendering: summary, origin, context, every cause in
    /// the chain, and the backtrace when one was captured.
    pub fn report(&self) -> Report<'_> {
        Report(self)
    }

    fn detail(&self) -> &Detail {
        match self {
            Self::NotFound { detail, .. } | Self::Forbidden { detail, .. } => detail,
        }
    }

    fn detail_mut(&mut self) -> &mut Detail {
        match self {
            Self::NotFound { detail, .. } | Self::Forbidden { detail, .. } => detail,
        }
    }
}

/// Iterate an error followed by all of its transitive sources.
pub fn chain<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |e| (*e).source())
}

/// Outermost classification found in the chain of `err`.
///
/// Returns `None` when no [`ClassifiedError`] appears anywhere in the chain.
pub fn kind_of(err: &(dyn StdError + 'static)) -> Option<ErrorKind> {
    chain(err).find_map(|e| e.downcast_ref::<ClassifiedError>()).map(ClassifiedError::kind)
}

/// Innermost error in the chain of `err` (`err` itself if it has no source).
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    chain(err).last().unwrap_or(err)
}

/// Detailed rendering of a [`ClassifiedError`], see
/// [`ClassifiedError::report`].
pub struct Report<'a>(&'a ClassifiedError);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        write_detail(f, self.0.detail())?;

        let top: &(dyn StdError + 'static) = self.0;
        for cause in chain(top).skip(1) {
            write!(f, "\ncaused by: {cause}")?;
            if let Some(classified) = cause.downcast_ref::<ClassifiedError>() {
                write_detail(f, classified.detail())?;
            }
        }

        let backtrace = self.0.backtrace();
        if backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\nbacktrace:\n{backtrace}")?;
        }
        Ok(())
    }
}

fn write_detail(f: &mut fmt::Formatter<'_>, detail: &Detail) -> fmt::Result {
    write!(f, "\n    at {}", detail.origin)?;
    for (key, value) in &detail.context {
        write!(f, "\n    {key}={value}")?;
    }
    Ok(())
}
