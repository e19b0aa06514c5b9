#![deny(
    missing_docs,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! Structured `tracing` events for errslot error contexts.
//!
//! This crate provides [`TracingReporter`], an errslot [`Reporter`] that turns
//! every raise into one `tracing` event instead of a line on standard error.
//! The event goes wherever your subscriber sends it: console, files, log
//! forwarding, and so on.
//!
//! # Quick Start
//!
//! ```
//! use errslot::prelude::*;
//! use errslot_tracing::TracingReporter;
//!
//! tracing_subscriber::fmt().init();
//!
//! let mut context = ErrorContext::with_reporter(TracingReporter::new());
//! raise_user!(&mut context, "cache directory is read-only", 30);
//! ```
//!
//! Output:
//! ```text
//! ERROR errslot: cache directory is read-only pid=4711 kind=user file="src/main.rs" function="main" line=8 code=30
//! ```
//!
//! # Event Fields
//!
//! Every event has target `errslot` and carries:
//!
//! | Field | Value |
//! |---|---|
//! | message | the error message |
//! | `pid` | the process id |
//! | `kind` | `check`, `errno`, `system` or `user` |
//! | `file`, `function`, `line` | the call site |
//! | `code` | the numeric code |
//!
//! # Environment Variables
//!
//! - `ERRSLOT_TRACING` - Comma-separated options:
//!   - `warn` - Emit events at `WARN` instead of `ERROR`
//!
//! [`Reporter`]: errslot::reporter::Reporter

use std::sync::OnceLock;

use errslot::{ErrorContext, reporter::Reporter};
use tracing::Level;

/// Name of the variable read by [`TracingReporter::new`].
pub const TRACING_ENV_VAR: &str = "ERRSLOT_TRACING";

/// Reporter that emits one `tracing` event per raised error.
///
/// # Examples
///
/// Default settings, respecting `ERRSLOT_TRACING`:
///
/// ```
/// use errslot::ErrorContext;
/// use errslot_tracing::TracingReporter;
///
/// let context = ErrorContext::with_reporter(TracingReporter::new());
/// assert!(context.is_reporting());
/// ```
///
/// Custom level:
///
/// ```
/// use errslot::ErrorContext;
/// use errslot_tracing::TracingReporter;
/// use tracing::Level;
///
/// let mut context = ErrorContext::new(false);
/// context.set_reporter(TracingReporter { level: Level::WARN });
/// ```
#[derive(Copy, Clone, Debug)]
pub struct TracingReporter {
    /// The level events are emitted at.
    ///
    /// Only `ERROR` and `WARN` are distinguished; any other level is emitted
    /// at `WARN`.
    pub level: Level,
}

#[derive(Debug)]
struct ErrslotTracingEnvOptions {
    warn: bool,
}

impl ErrslotTracingEnvOptions {
    fn get() -> &'static Self {
        static ERRSLOT_TRACING_FLAGS: OnceLock<ErrslotTracingEnvOptions> = OnceLock::new();

        ERRSLOT_TRACING_FLAGS.get_or_init(|| {
            let mut warn = false;

            if let Some(var) = std::env::var_os(TRACING_ENV_VAR) {
                for v in var.to_string_lossy().split(',') {
                    if v.trim().eq_ignore_ascii_case("warn") {
                        warn = true;
                    }
                }
            }

            ErrslotTracingEnvOptions { warn }
        })
    }
}

impl TracingReporter {
    /// Creates a new [`TracingReporter`] with default settings.
    ///
    /// The level is `ERROR`, or `WARN` if `ERRSLOT_TRACING` contains `warn`.
    pub fn new() -> Self {
        let env_options = ErrslotTracingEnvOptions::get();
        let level = if env_options.warn {
            Level::WARN
        } else {
            Level::ERROR
        };

        Self { level }
    }
}

impl Default for TracingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TracingReporter {
    fn report(&self, context: &ErrorContext) {
        let Some(error) = context.error() else {
            return;
        };
        let site = error.site();

        // The level of an event is part of its static metadata, so each level
        // needs its own callsite.
        macro_rules! emit {
            ($level:expr) => {
                tracing::event!(
                    target: "errslot",
                    $level,
                    pid = std::process::id(),
                    kind = %error.kind(),
                    file = site.file,
                    function = site.function,
                    line = site.line,
                    code = error.code(),
                    "{}",
                    error.message()
                )
            };
        }

        if self.level == Level::ERROR {
            emit!(Level::ERROR);
        } else {
            emit!(Level::WARN);
        }
    }
}
