#![deny(
    missing_docs,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments,
    unsafe_code
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A single-slot error context with call-site capture, pluggable reporting
//! and fail-fast check predicates.
//!
//! ## Overview
//!
//! An [`ErrorContext`] is a small mutable record that holds **at most one**
//! error at a time: what kind of failure it was, a human-readable message,
//! the call site that raised it, and a numeric code. Functions receive the
//! context by `&mut`, record a failure into it, and signal failure to their
//! caller with a plain boolean or `Option`. There is no unwinding and no
//! chaining: every raise replaces whatever was there before.
//!
//! On top of the context sit the [`check`] predicates, which evaluate a
//! condition and record a check failure when it does not hold.
//!
//! ## Quick Example
//!
//! ```
//! use errslot::{check, prelude::*};
//!
//! fn average(context: &mut ErrorContext, values: &[i32]) -> Option<i32> {
//!     let count = i32::try_from(values.len()).ok()?;
//!     if !check::greater_than(context, count, 0) {
//!         return None;
//!     }
//!     Some(values.iter().sum::<i32>() / count)
//! }
//!
//! let mut context = ErrorContext::new(false);
//! assert_eq!(average(&mut context, &[2, 4]), Some(3));
//! assert!(context.has_no_error());
//!
//! assert_eq!(average(&mut context, &[]), None);
//! assert_eq!(context.kind(), ErrorKind::Check);
//! assert_eq!(context.message(), Some("failed check"));
//! ```
//!
//! ## Error Kinds
//!
//! | Kind | Raised with | Message | Code |
//! |---|---|---|---|
//! | [`Check`] | [`raise_check!`] or a [`check`] predicate | `"failed check"` | `-1` |
//! | [`Errno`] | [`raise_errno!`] | the OS description of the code | the OS error number |
//! | [`System`] | [`raise_system!`] | caller-supplied, copied | caller-supplied |
//! | [`User`] | [`raise_user!`] | caller-supplied, copied | caller-supplied |
//!
//! `System` and `User` behave identically. They are separate so callers can
//! tell "a library call failed" apart from "an application invariant
//! failed".
//!
//! ## Reporting
//!
//! A context can carry a [`Reporter`] that is called synchronously after
//! every raise. `ErrorContext::new(true)` attaches the [`DefaultReporter`],
//! which prints one line to standard error:
//!
//! ```text
//! ERROR (pid=4711): src/net.rs : connect : @ 88 : (errno = 111) : Connection refused
//! ```
//!
//! See the [`reporter`] module for custom reporters, and the
//! `errslot-tracing` crate for a reporter that emits `tracing` events.
//!
//! ## Configuration
//!
//! Besides the constructor flag and [`ErrorContext::set_reporting`], the
//! default can come from the environment: [`ErrorContext::from_env`] enables
//! reporting when `ERRSLOT_REPORT` is `1`, `true`, `on` or `yes`.
//!
//! ## Interoperability
//!
//! When a caller would rather use `?`, [`ErrorContext::take_error`] and
//! [`ErrorContext::take_result`] move the live error out as a
//! [`RaisedError`], which implements [`core::error::Error`].
//!
//! [`Check`]: ErrorKind::Check
//! [`Errno`]: ErrorKind::Errno
//! [`System`]: ErrorKind::System
//! [`User`]: ErrorKind::User
//! [`Reporter`]: reporter::Reporter
//! [`DefaultReporter`]: reporter::DefaultReporter

extern crate alloc;

#[macro_use]
mod macros;

pub mod check;
pub mod prelude;
pub mod reporter;

mod config;
mod context;
mod kind;
mod raised;

pub use errslot_internals::{CallSite, Message};

pub use self::{
    config::REPORT_ENV_VAR,
    context::{CHECK_FAILED, CHECK_FAILED_CODE, CreateError, ErrorContext},
    kind::{ErrorKind, FailureKind},
    raised::RaisedError,
};

/// A [`Result`](core::result::Result) type alias where the error is a
/// [`RaisedError`] taken out of an [`ErrorContext`].
///
/// # Examples
///
/// ```
/// use errslot::prelude::*;
///
/// fn open(context: &mut ErrorContext) -> errslot::Result<()> {
///     raise_system!(context, "device busy", 16);
///     context.take_result(())
/// }
///
/// let mut context = ErrorContext::new(false);
/// let error = open(&mut context).unwrap_err();
/// assert_eq!(error.code(), 16);
/// ```
pub type Result<T> = core::result::Result<T, RaisedError>;

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    #[inline]
    #[must_use]
    pub fn function_name_of<F>(_marker: F) -> &'static str {
        errslot_internals::site::function_name(core::any::type_name::<F>())
    }
}
