//! Reporters: the strategy an [`ErrorContext`] notifies after every raise.
//!
//! # When Reporters Run
//!
//! A reporter is invoked synchronously, on the raising thread, right after
//! the context has recorded the new error and before the `raise_*` call
//! returns. It receives a shared reference to the context, so it sees the
//! error exactly as the caller will. If the reporter blocks (for example on
//! I/O), the raise blocks with it.
//!
//! # Built-in Reporters
//!
//! - **[`DefaultReporter`]**: writes one line per error to standard error in
//!   a fixed format. Attached by [`ErrorContext::new(true)`] and
//!   [`ErrorContext::set_reporting(true)`].
//!
//! The `errslot-tracing` companion crate provides a reporter that emits a
//! structured `tracing` event instead.
//!
//! # Custom Reporters
//!
//! Implement [`Reporter`] for a type, or pass a closure:
//!
//! ```rust
//! use errslot::{prelude::*, reporter::ReportLine};
//!
//! let mut context = ErrorContext::with_reporter(|context: &ErrorContext| {
//!     if let Some(error) = context.error() {
//!         println!("{}", ReportLine::for_current_process(error));
//!     }
//! });
//! raise_check!(&mut context);
//! ```
//!
//! [`ErrorContext`]: crate::ErrorContext
//! [`ErrorContext::new(true)`]: crate::ErrorContext::new
//! [`ErrorContext::set_reporting(true)`]: crate::ErrorContext::set_reporting

mod default;

pub use self::default::{DefaultReporter, ReportLine};
use crate::ErrorContext;

/// A strategy that is notified every time an error is raised into an
/// [`ErrorContext`].
///
/// Reporters must be `Send` so that a context can be moved between threads.
/// They do not need to be `Sync`, since a context is never shared.
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
///
/// use errslot::{prelude::*, reporter::Reporter};
///
/// #[derive(Default)]
/// struct History(Arc<Mutex<Vec<i32>>>);
///
/// impl Reporter for History {
///     fn report(&self, context: &ErrorContext) {
///         self.0.lock().unwrap().push(context.errno_code());
///     }
/// }
///
/// let codes = Arc::new(Mutex::new(Vec::new()));
/// let mut context = ErrorContext::with_reporter(History(Arc::clone(&codes)));
/// raise_user!(&mut context, "first", 1);
/// raise_user!(&mut context, "second", 2);
/// assert_eq!(*codes.lock().unwrap(), [1, 2]);
/// ```
pub trait Reporter: 'static + Send {
    /// Called once per raise, after the context has been updated.
    fn report(&self, context: &ErrorContext);
}

impl<F> Reporter for F
where
    F: 'static + Send + Fn(&ErrorContext),
{
    fn report(&self, context: &ErrorContext) {
        (self)(context)
    }
}
