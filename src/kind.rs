//! Classification of the error held by an [`ErrorContext`].
//!
//! [`ErrorContext`]: crate::ErrorContext

use core::fmt;

/// The kind of error currently held by an [`ErrorContext`], including the
/// "no error" state.
///
/// [`ErrorContext`]: crate::ErrorContext
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// There is no error.
    #[default]
    None,
    /// A check predicate failed.
    Check,
    /// An OS call failed and reported an error number.
    Errno,
    /// A library call that does not set an error number failed.
    System,
    /// An application-level operation failed.
    User,
}

impl ErrorKind {
    /// Returns `true` for every kind except [`ErrorKind::None`].
    #[inline]
    pub fn is_error(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Check => "check",
            Self::Errno => "errno",
            Self::System => "system",
            Self::User => "user",
        })
    }
}

/// The kind of a raised error. Unlike [`ErrorKind`] this has no "no error"
/// variant, since a [`RaisedError`] only exists once something failed.
///
/// [`RaisedError`]: crate::RaisedError
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A check predicate failed.
    Check,
    /// An OS call failed and reported an error number.
    Errno,
    /// A library call that does not set an error number failed.
    System,
    /// An application-level operation failed.
    User,
}

impl FailureKind {
    /// The label the numeric code is printed with: `errno` for
    /// [`FailureKind::Errno`], `error code` for everything else.
    #[inline]
    pub fn code_label(self) -> &'static str {
        match self {
            Self::Errno => "errno",
            Self::Check | Self::System | Self::User => "error code",
        }
    }
}

impl From<FailureKind> for ErrorKind {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::Check => Self::Check,
            FailureKind::Errno => Self::Errno,
            FailureKind::System => Self::System,
            FailureKind::User => Self::User,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ErrorKind::from(*self), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(ErrorKind::default(), ErrorKind::None);
        assert!(!ErrorKind::None.is_error());
        assert!(ErrorKind::User.is_error());
    }

    #[test]
    fn test_code_labels() {
        assert_eq!(FailureKind::Errno.code_label(), "errno");
        assert_eq!(FailureKind::Check.code_label(), "error code");
        assert_eq!(FailureKind::System.code_label(), "error code");
        assert_eq!(FailureKind::User.code_label(), "error code");
    }

    #[test]
    fn test_failure_kind_conversion() {
        assert_eq!(ErrorKind::from(FailureKind::Check), ErrorKind::Check);
        assert_eq!(ErrorKind::from(FailureKind::System), ErrorKind::System);
        assert_eq!(FailureKind::User.to_string(), "user");
    }
}
