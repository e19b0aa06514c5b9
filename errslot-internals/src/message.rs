//! Storage for the human-readable part of a raised error.
//!
//! A message is in exactly one of two ownership modes:
//!
//! - [`Message::Owned`]: a private copy that was allocated when the error was
//!   raised. It is released when the [`Message`] is dropped, which happens
//!   when the next error is raised, when the context is reset, or when the
//!   context itself is dropped.
//! - [`Message::Borrowed`]: a reference to a `'static` string (a literal or
//!   one of the fallback texts). It is never released.
//!
//! Representing the two modes as a sum type means it is impossible to have
//! both populated at once, and impossible to free a borrowed string.

use alloc::{collections::TryReserveError, string::String};
use core::fmt;

/// Text stored when copying a caller-supplied message could not allocate.
pub const NO_MESSAGE: &str = "no message available";

/// The message of a raised error, either owned or borrowed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Message {
    /// A copy allocated for this error.
    Owned(String),
    /// A string with static lifetime that is never freed.
    Borrowed(&'static str),
}

impl Message {
    /// Copies `text` into a freshly allocated [`Message::Owned`].
    ///
    /// The allocation is fallible: if the allocator cannot provide
    /// `text.len()` bytes, the error is returned instead of aborting.
    ///
    /// # Examples
    ///
    /// ```
    /// use errslot_internals::Message;
    ///
    /// let message = Message::try_copy("disk full").unwrap();
    /// assert!(message.is_owned());
    /// assert_eq!(message.as_str(), "disk full");
    /// ```
    pub fn try_copy(text: &str) -> Result<Self, TryReserveError> {
        let mut owned = String::new();
        owned.try_reserve_exact(text.len())?;
        owned.push_str(text);
        Ok(Self::Owned(owned))
    }

    /// Copies `text`, degrading to the borrowed [`NO_MESSAGE`] placeholder
    /// when the copy cannot be allocated.
    pub fn copy_or_placeholder(text: &str) -> Self {
        match Self::try_copy(text) {
            Ok(message) => message,
            Err(_) => Self::Borrowed(NO_MESSAGE),
        }
    }

    /// Returns the text of the message, whichever mode it is stored in.
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Owned(text) => text,
            Self::Borrowed(text) => text,
        }
    }

    /// Returns `true` if the message owns its buffer.
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Returns `true` if the message borrows a `'static` string.
    #[inline]
    pub fn is_borrowed(&self) -> bool {
        matches!(self, Self::Borrowed(_))
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for Message {
    fn from(text: &'static str) -> Self {
        Self::Borrowed(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Owned(text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owned(text) => f.debug_tuple("Owned").field(text).finish(),
            Self::Borrowed(text) => f.debug_tuple("Borrowed").field(text).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_message_modes_are_exclusive() {
        let owned = Message::try_copy("boom").unwrap();
        assert!(owned.is_owned());
        assert!(!owned.is_borrowed());

        let borrowed = Message::from("boom");
        assert!(borrowed.is_borrowed());
        assert!(!borrowed.is_owned());

        assert_eq!(owned.as_str(), borrowed.as_str());
        assert_ne!(owned, borrowed);
    }

    #[test]
    fn test_copy_does_not_alias_source() {
        let mut source = String::from("original");
        let message = Message::copy_or_placeholder(&source);
        source.clear();
        source.push_str("changed");
        assert_eq!(message.as_str(), "original");
    }

    #[test]
    fn test_empty_copy() {
        let message = Message::copy_or_placeholder("");
        assert!(message.is_owned());
        assert_eq!(message.as_str(), "");
    }

    #[test]
    fn test_formatting() {
        let owned = Message::from(String::from("owned text"));
        let borrowed = Message::from("borrowed text");
        assert_eq!(format!("{owned}"), "owned text");
        assert_eq!(format!("{borrowed}"), "borrowed text");
        assert_eq!(format!("{owned:?}"), r#"Owned("owned text")"#);
        assert_eq!(format!("{borrowed:?}"), r#"Borrowed("borrowed text")"#);
    }

    #[test]
    fn test_message_send_sync() {
        static_assertions::assert_impl_all!(Message: Send, Sync, Clone);
        static_assertions::assert_not_impl_any!(Message: Copy);
    }
}
