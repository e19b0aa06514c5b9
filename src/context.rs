use alloc::boxed::Box;
use core::fmt;

use errslot_internals::{
    CallSite, Message,
    errno::{self, DESCRIPTION_CAPACITY},
    try_box,
};

use crate::{
    config::EnvOptions,
    kind::{ErrorKind, FailureKind},
    raised::RaisedError,
    reporter::{DefaultReporter, Reporter},
};

/// Message stored by every check failure.
pub const CHECK_FAILED: &str = "failed check";

/// Code stored by every check failure.
pub const CHECK_FAILED_CODE: i32 = -1;

/// A mutable record holding at most one raised error.
///
/// A context starts out without an error. Each `raise_*` call records a new
/// error, unconditionally replacing the previous one, and then hands the
/// context to the attached [`Reporter`] (if any) before returning. Nothing is
/// ever propagated automatically: callers inspect [`has_error`] or the
/// boolean returned by a [`check`] predicate and decide for themselves.
///
/// A context is owned by one logical call path at a time. It is [`Send`], so
/// it can be handed to another thread, but it is neither [`Sync`] nor
/// [`Clone`].
///
/// # Examples
///
/// ```
/// use errslot::prelude::*;
///
/// fn parse_port(context: &mut ErrorContext, text: &str) -> Option<u16> {
///     match text.parse() {
///         Ok(port) => Some(port),
///         Err(_) => {
///             raise_user!(context, "port is not a number", 2);
///             None
///         }
///     }
/// }
///
/// let mut context = ErrorContext::new(false);
/// assert_eq!(parse_port(&mut context, "8080"), Some(8080));
/// assert!(context.has_no_error());
///
/// assert_eq!(parse_port(&mut context, "http"), None);
/// assert_eq!(context.kind(), ErrorKind::User);
/// assert_eq!(context.message(), Some("port is not a number"));
/// assert_eq!(context.site().unwrap().function, "parse_port");
/// ```
///
/// [`has_error`]: Self::has_error
/// [`check`]: crate::check
pub struct ErrorContext {
    error: Option<RaisedError>,
    reporter: Option<Box<dyn Reporter>>,
}

/// Error returned by [`ErrorContext::create`] when the context could not be
/// allocated.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct CreateError;

impl fmt::Debug for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateError").finish()
    }
}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not enough memory to allocate an error context")
    }
}

impl core::error::Error for CreateError {}

impl ErrorContext {
    /// Creates a context without an error.
    ///
    /// When `report` is `true` the [`DefaultReporter`] is attached, so every
    /// raise prints one line to standard error.
    ///
    /// This does not allocate, so it cannot fail. Use [`create`](Self::create)
    /// when the context has to live on the heap.
    #[must_use]
    pub fn new(report: bool) -> Self {
        Self {
            error: None,
            reporter: report.then(default_reporter),
        }
    }

    /// Creates a heap-allocated context.
    ///
    /// Returns [`CreateError`] instead of aborting when the allocator cannot
    /// provide the memory. There is no fallback context in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use errslot::ErrorContext;
    ///
    /// let context = ErrorContext::create(true).expect("out of memory");
    /// assert!(context.is_reporting());
    /// assert!(context.has_no_error());
    /// ```
    pub fn create(report: bool) -> Result<Box<Self>, CreateError> {
        try_box(Self::new(report)).map_err(|_| CreateError)
    }

    /// Creates a context with a custom [`Reporter`] attached.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::{
    ///     Arc,
    ///     atomic::{AtomicUsize, Ordering},
    /// };
    ///
    /// use errslot::prelude::*;
    ///
    /// let raised = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&raised);
    /// let mut context = ErrorContext::with_reporter(move |_: &ErrorContext| {
    ///     counter.fetch_add(1, Ordering::Relaxed);
    /// });
    ///
    /// raise_check!(&mut context);
    /// assert_eq!(raised.load(Ordering::Relaxed), 1);
    /// ```
    #[must_use]
    pub fn with_reporter<R: Reporter>(reporter: R) -> Self {
        Self {
            error: None,
            reporter: Some(Box::new(reporter)),
        }
    }

    /// Creates a context whose reporting preference comes from the
    /// `ERRSLOT_REPORT` environment variable.
    ///
    /// `1`, `true`, `on` and `yes` (case-insensitive) enable the
    /// [`DefaultReporter`]; anything else, or an unset variable, disables it.
    /// The variable is read once per process.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(EnvOptions::get().report)
    }

    /// Clears the error, keeping the reporter configuration.
    ///
    /// An owned message is released. Calling this without a live error does
    /// nothing.
    #[inline]
    pub fn reset(&mut self) {
        self.error = None;
    }

    /// Returns `true` if a reporter is attached.
    #[inline]
    pub fn is_reporting(&self) -> bool {
        self.reporter.is_some()
    }

    /// Attaches the [`DefaultReporter`] when `on` is `true`, detaches any
    /// reporter when it is `false`.
    ///
    /// An error that is already live is not reported retroactively.
    pub fn set_reporting(&mut self, on: bool) {
        self.reporter = on.then(default_reporter);
    }

    /// Attaches `reporter`, replacing any reporter already attached.
    pub fn set_reporter<R: Reporter>(&mut self, reporter: R) {
        self.reporter = Some(Box::new(reporter));
    }

    /// The live error, if any.
    #[inline]
    pub fn error(&self) -> Option<&RaisedError> {
        self.error.as_ref()
    }

    /// Moves the live error out of the context, leaving it without an error.
    ///
    /// The reporter configuration is kept.
    #[inline]
    pub fn take_error(&mut self) -> Option<RaisedError> {
        self.error.take()
    }

    /// Returns `Ok(value)` if there is no live error. Otherwise the error is
    /// taken out of the context and returned in `Err`.
    ///
    /// This is the bridge from the flag-based style to `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use errslot::{check, prelude::*};
    ///
    /// fn clamp(context: &mut ErrorContext, value: i32) -> errslot::Result<i32> {
    ///     check::less_than(context, value, 100);
    ///     context.take_result(value)
    /// }
    ///
    /// let mut context = ErrorContext::new(false);
    /// assert_eq!(clamp(&mut context, 5), Ok(5));
    /// assert!(clamp(&mut context, 500).is_err());
    /// assert!(context.has_no_error());
    /// ```
    pub fn take_result<T>(&mut self, value: T) -> crate::Result<T> {
        match self.error.take() {
            None => Ok(value),
            Some(error) => Err(error),
        }
    }

    /// The kind of the live error, or [`ErrorKind::None`].
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.error
            .as_ref()
            .map_or(ErrorKind::None, RaisedError::error_kind)
    }

    /// The message of the live error, whether owned or borrowed.
    ///
    /// Never allocates. The returned string is valid until the next mutating
    /// call on the context.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.error.as_ref().map(RaisedError::message)
    }

    /// Where the live error was raised.
    #[inline]
    pub fn site(&self) -> Option<CallSite> {
        self.error.as_ref().map(RaisedError::site)
    }

    /// Returns `true` if there is a live error.
    #[inline]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Returns `true` if there is no live error.
    #[inline]
    pub fn has_no_error(&self) -> bool {
        self.error.is_none()
    }

    /// Returns `true` if the live error is an errno failure with exactly
    /// `code`.
    #[inline]
    pub fn is_errno(&self, code: i32) -> bool {
        self.error
            .as_ref()
            .is_some_and(|error| error.kind() == FailureKind::Errno && error.code() == code)
    }

    /// The stored numeric code, regardless of kind. `0` without an error.
    ///
    /// Only meaningful when [`kind`](Self::kind) says how to read it.
    #[inline]
    pub fn errno_code(&self) -> i32 {
        self.error.as_ref().map_or(0, RaisedError::code)
    }

    /// Records a failed check raised at `site`.
    ///
    /// The message is always [`CHECK_FAILED`] and the code always
    /// [`CHECK_FAILED_CODE`]. Usually called through [`raise_check!`].
    ///
    /// [`raise_check!`]: crate::raise_check!
    pub fn raise_check(&mut self, site: CallSite) {
        self.replace(|| {
            RaisedError::new(
                FailureKind::Check,
                Message::Borrowed(CHECK_FAILED),
                site,
                CHECK_FAILED_CODE,
            )
        });
    }

    /// Records a failed OS call that reported the error number `code`.
    ///
    /// The message is a private copy of the platform description of `code`.
    /// Codes the platform has no entry for are described as
    /// `Unknown error <code>` and keep `code`. If the description cannot be
    /// produced at all, a fixed borrowed text is stored instead (`"bad errno"`, `"out of memory"` or `"unknown error"`,
    /// depending on why the lookup failed) together with the lookup's own
    /// error number. Usually called through [`raise_errno!`].
    ///
    /// [`raise_errno!`]: crate::raise_errno!
    pub fn raise_errno(&mut self, site: CallSite, code: i32) {
        self.replace(|| {
            let mut buffer = [0u8; DESCRIPTION_CAPACITY];
            match errno::describe(code, &mut buffer) {
                Ok(description) => RaisedError::new(
                    FailureKind::Errno,
                    Message::copy_or_placeholder(&description),
                    site,
                    code,
                ),
                Err(lookup) => RaisedError::new(
                    FailureKind::Errno,
                    Message::Borrowed(lookup.fallback_message()),
                    site,
                    lookup.raw_os_error(),
                ),
            }
        });
    }

    /// Records a failed library call that does not set an error number.
    ///
    /// `message` is copied; if the copy cannot be allocated the placeholder
    /// `"no message available"` is stored and everything else is kept.
    /// Usually called through [`raise_system!`].
    ///
    /// [`raise_system!`]: crate::raise_system!
    pub fn raise_system(&mut self, site: CallSite, message: &str, code: i32) {
        self.replace(|| {
            RaisedError::new(
                FailureKind::System,
                Message::copy_or_placeholder(message),
                site,
                code,
            )
        });
    }

    /// Records an application-level failure.
    ///
    /// Behaves exactly like [`raise_system`](Self::raise_system) except for
    /// the kind. Usually called through [`raise_user!`].
    ///
    /// [`raise_user!`]: crate::raise_user!
    pub fn raise_user(&mut self, site: CallSite, message: &str, code: i32) {
        self.replace(|| {
            RaisedError::new(
                FailureKind::User,
                Message::copy_or_placeholder(message),
                site,
                code,
            )
        });
    }

    /// Drops the previous error before building the new one, then notifies
    /// the reporter.
    fn replace(&mut self, build: impl FnOnce() -> RaisedError) {
        self.error = None;
        self.error = Some(build());

        let this: &Self = self;
        if let Some(reporter) = &this.reporter {
            reporter.report(this);
        }
    }
}

fn default_reporter() -> Box<dyn Reporter> {
    // Zero-sized, so this does not allocate.
    Box::new(DefaultReporter)
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorContext")
            .field("error", &self.error)
            .field("reporting", &self.is_reporting())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, sync::Arc, vec::Vec};
    use std::sync::Mutex;

    use super::*;

    const SITE_A: CallSite = CallSite::new("src/a.rs", "alpha", 10);
    const SITE_B: CallSite = CallSite::new("src/b.rs", "beta", 20);

    fn recording_context() -> (ErrorContext, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let context = ErrorContext::with_reporter(move |context: &ErrorContext| {
            let message = context.message().unwrap_or("<none>");
            sink.lock().unwrap().push(String::from(message));
        });
        (context, seen)
    }

    #[test]
    fn test_fresh_context_has_no_error() {
        for report in [false, true] {
            let context = ErrorContext::new(report);
            assert!(!context.has_error());
            assert!(context.has_no_error());
            assert_eq!(context.kind(), ErrorKind::None);
            assert_eq!(context.message(), None);
            assert_eq!(context.site(), None);
            assert_eq!(context.errno_code(), 0);
            assert_eq!(context.is_reporting(), report);
        }
    }

    #[test]
    fn test_create_on_heap() {
        let context = ErrorContext::create(false).unwrap();
        assert!(context.has_no_error());
        assert!(!context.is_reporting());
    }

    #[test]
    fn test_raise_check() {
        let mut context = ErrorContext::new(false);
        context.raise_check(SITE_A);

        assert!(context.has_error());
        assert_eq!(context.kind(), ErrorKind::Check);
        assert_eq!(context.message(), Some(CHECK_FAILED));
        assert_eq!(context.errno_code(), CHECK_FAILED_CODE);
        assert_eq!(context.site(), Some(SITE_A));
        assert!(context.error().unwrap().raw_message().is_borrowed());
    }

    #[test]
    fn test_raise_system_and_user_copy_message() {
        let mut context = ErrorContext::new(false);

        let mut text = String::from("getaddrinfo failed");
        context.raise_system(SITE_A, &text, -3);
        text.clear();
        assert_eq!(context.kind(), ErrorKind::System);
        assert_eq!(context.message(), Some("getaddrinfo failed"));
        assert_eq!(context.errno_code(), -3);
        assert!(context.error().unwrap().raw_message().is_owned());

        context.raise_user(SITE_B, "config missing", 12);
        assert_eq!(context.kind(), ErrorKind::User);
        assert_eq!(context.message(), Some("config missing"));
        assert_eq!(context.errno_code(), 12);
        assert_eq!(context.site(), Some(SITE_B));
    }

    #[cfg(unix)]
    #[test]
    fn test_raise_errno_known_code() {
        let mut context = ErrorContext::new(false);
        context.raise_errno(SITE_A, libc::ENOENT);

        assert_eq!(context.kind(), ErrorKind::Errno);
        assert_eq!(context.message(), Some("No such file or directory"));
        assert_eq!(context.errno_code(), libc::ENOENT);
        assert_eq!(context.site(), Some(SITE_A));
        assert!(context.is_errno(libc::ENOENT));
        assert!(!context.is_errno(libc::EACCES));
        assert!(context.error().unwrap().raw_message().is_owned());
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn test_raise_errno_unknown_code_keeps_code() {
        let mut context = ErrorContext::new(false);

        for code in [134, 99_999, -1] {
            context.raise_errno(SITE_B, code);

            assert_eq!(context.kind(), ErrorKind::Errno);
            assert_eq!(
                context.message(),
                Some(format!("Unknown error {code}").as_str())
            );
            assert_eq!(context.errno_code(), code);
            assert!(context.is_errno(code));
            assert_eq!(context.site(), Some(SITE_B));
            assert!(context.error().unwrap().raw_message().is_owned());
        }
    }

    #[test]
    fn test_is_errno_requires_errno_kind() {
        let mut context = ErrorContext::new(false);
        context.raise_user(SITE_A, "looks like ENOENT", 2);
        assert!(!context.is_errno(2));
        assert_eq!(context.errno_code(), 2);
    }

    #[test]
    fn test_overwrite_keeps_only_latest() {
        let mut context = ErrorContext::new(false);
        context.raise_user(SITE_A, "first", 1);
        context.raise_check(SITE_B);

        assert_eq!(context.kind(), ErrorKind::Check);
        assert_eq!(context.message(), Some(CHECK_FAILED));
        assert_eq!(context.site(), Some(SITE_B));
        assert_eq!(context.errno_code(), CHECK_FAILED_CODE);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let (mut context, _seen) = recording_context();
        context.raise_system(SITE_A, "boom", 5);

        context.reset();
        assert!(context.has_no_error());
        assert!(context.is_reporting());

        context.reset();
        assert!(context.has_no_error());
        assert_eq!(context.message(), None);
        assert!(context.is_reporting());
    }

    #[test]
    fn test_reporting_disabled_is_silent() {
        let (mut context, seen) = recording_context();
        context.set_reporting(false);
        assert!(!context.is_reporting());

        context.raise_check(SITE_A);
        context.raise_user(SITE_B, "quiet", 1);
        assert!(seen.lock().unwrap().is_empty());
        assert!(context.has_error());
    }

    #[test]
    fn test_reporter_called_once_per_raise_after_mutation() {
        let (mut context, seen) = recording_context();
        context.raise_user(SITE_A, "first", 1);
        context.raise_system(SITE_B, "second", 2);

        assert_eq!(*seen.lock().unwrap(), ["first", "second"]);
    }

    #[test]
    fn test_toggle_does_not_touch_live_error() {
        let mut context = ErrorContext::new(false);
        context.raise_user(SITE_A, "kept", 3);

        context.set_reporting(true);
        assert!(context.is_reporting());
        assert_eq!(context.message(), Some("kept"));

        context.set_reporting(false);
        assert_eq!(context.message(), Some("kept"));
    }

    #[test]
    fn test_take_error_and_result() {
        let mut context = ErrorContext::new(false);
        assert_eq!(context.take_error(), None);
        assert_eq!(context.take_result("value"), Ok("value"));

        context.raise_user(SITE_A, "gone", 9);
        let error = context.take_result(()).unwrap_err();
        assert_eq!(error.message(), "gone");
        assert_eq!(error.code(), 9);
        assert_eq!(error.site(), SITE_A);
        assert!(context.has_no_error());
    }

    #[test]
    fn test_debug_output() {
        let mut context = ErrorContext::new(false);
        assert_eq!(
            format!("{context:?}"),
            "ErrorContext { error: None, reporting: false }"
        );
        context.raise_check(SITE_A);
        assert!(format!("{context:?}").contains(r#"Borrowed("failed check")"#));
    }

    #[test]
    fn test_context_auto_traits() {
        static_assertions::assert_impl_all!(ErrorContext: Send, Unpin);
        static_assertions::assert_not_impl_any!(ErrorContext: Sync, Copy, Clone);
        static_assertions::assert_impl_all!(CreateError: Send, Sync, Copy, core::error::Error);
    }
}
