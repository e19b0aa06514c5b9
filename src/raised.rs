use core::fmt;

use errslot_internals::{CallSite, Message};

use crate::kind::{ErrorKind, FailureKind};

/// A single raised error: its kind, message, call site and numeric code.
///
/// This is what an [`ErrorContext`] holds while it has an error. It can be
/// moved out of the context with [`ErrorContext::take_error`], after which it
/// behaves like any other [`core::error::Error`] and can be propagated with
/// `?`.
///
/// The interpretation of [`code`](Self::code) depends on the kind:
///
/// | Kind | Code |
/// |---|---|
/// | [`Check`](FailureKind::Check) | always `-1` |
/// | [`Errno`](FailureKind::Errno) | the OS error number |
/// | [`System`](FailureKind::System), [`User`](FailureKind::User) | the caller's value, verbatim |
///
/// # Examples
///
/// ```
/// use errslot::prelude::*;
///
/// let mut context = ErrorContext::new(false);
/// raise_user!(&mut context, "quota exceeded", 7);
///
/// let error = context.take_error().unwrap();
/// assert_eq!(error.message(), "quota exceeded");
/// assert_eq!(error.code(), 7);
/// assert!(context.has_no_error());
/// ```
///
/// [`ErrorContext`]: crate::ErrorContext
/// [`ErrorContext::take_error`]: crate::ErrorContext::take_error
#[derive(Debug, PartialEq, Eq)]
pub struct RaisedError {
    kind: FailureKind,
    message: Message,
    site: CallSite,
    code: i32,
}

impl RaisedError {
    #[inline]
    pub(crate) fn new(kind: FailureKind, message: Message, site: CallSite, code: i32) -> Self {
        Self {
            kind,
            message,
            site,
            code,
        }
    }

    /// The kind of the error.
    #[inline]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The kind of the error, as an [`ErrorKind`].
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.kind.into()
    }

    /// The text of the message.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// The message together with its ownership mode.
    #[inline]
    pub fn raw_message(&self) -> &Message {
        &self.message
    }

    /// Where the error was raised.
    #[inline]
    pub fn site(&self) -> CallSite {
        self.site
    }

    /// The numeric code. See the type-level documentation for its meaning.
    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }
}

impl fmt::Display for RaisedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : ({} = {}) : {}",
            self.site,
            self.kind.code_label(),
            self.code,
            self.message
        )
    }
}

impl core::error::Error for RaisedError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = RaisedError::new(
            FailureKind::System,
            Message::copy_or_placeholder("pthread_create failed"),
            CallSite::new("src/pool.rs", "spawn", 18),
            11,
        );
        assert_eq!(
            error.to_string(),
            "src/pool.rs : spawn : @ 18 : (error code = 11) : pthread_create failed"
        );

        let error = RaisedError::new(
            FailureKind::Errno,
            Message::Borrowed("bad errno"),
            CallSite::new("src/fs.rs", "open", 3),
            22,
        );
        assert_eq!(
            error.to_string(),
            "src/fs.rs : open : @ 3 : (errno = 22) : bad errno"
        );
    }

    #[test]
    fn test_raised_error_traits() {
        static_assertions::assert_impl_all!(RaisedError: Send, Sync, core::error::Error);
        static_assertions::assert_not_impl_any!(RaisedError: Copy, Clone);
    }
}
