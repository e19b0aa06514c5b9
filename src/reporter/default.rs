use core::fmt;
use std::io::Write as _;

use crate::{ErrorContext, RaisedError, reporter::Reporter};

/// The reporter attached by [`ErrorContext::new(true)`].
///
/// Writes one line per raised error to standard error:
///
/// ```text
/// ERROR (pid=<pid>): <file> : <function> : @ <line> : (errno = <code>) : <message>
/// ERROR (pid=<pid>): <file> : <function> : @ <line> : (error code = <code>) : <message>
/// ```
///
/// The first form is used for errno failures, the second for every other
/// kind. Failures to write to standard error are ignored.
///
/// [`ErrorContext::new(true)`]: crate::ErrorContext::new
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultReporter;

impl Reporter for DefaultReporter {
    fn report(&self, context: &ErrorContext) {
        let Some(error) = context.error() else {
            return;
        };
        let line = ReportLine::for_current_process(error);
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{line}");
    }
}

/// [`Display`](fmt::Display) adapter that renders a [`RaisedError`] in the
/// [`DefaultReporter`] format, without the trailing newline.
///
/// # Examples
///
/// ```
/// use errslot::{prelude::*, reporter::ReportLine};
///
/// let mut context = ErrorContext::new(false);
/// context.raise_user(CallSite::new("main.rs", "main", 4), "bad input", 3);
///
/// let line = ReportLine::new(context.error().unwrap(), 1234);
/// assert_eq!(
///     line.to_string(),
///     "ERROR (pid=1234): main.rs : main : @ 4 : (error code = 3) : bad input"
/// );
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ReportLine<'a> {
    error: &'a RaisedError,
    pid: u32,
}

impl<'a> ReportLine<'a> {
    /// Renders `error` as reported by process `pid`.
    pub fn new(error: &'a RaisedError, pid: u32) -> Self {
        Self { error, pid }
    }

    /// Renders `error` as reported by the calling process.
    pub fn for_current_process(error: &'a RaisedError) -> Self {
        Self::new(error, std::process::id())
    }
}

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let site = self.error.site();
        write!(
            f,
            "ERROR (pid={}): {} : {} : @ {} : ({} = {}) : {}",
            self.pid,
            site.file,
            site.function,
            site.line,
            self.error.kind().code_label(),
            self.error.code(),
            self.error.message()
        )
    }
}

#[cfg(test)]
mod tests {
    use errslot_internals::CallSite;

    use super::*;

    const SITE: CallSite = CallSite::new("src/server.rs", "bind", 77);

    #[test]
    fn test_report_line_non_errno_kinds() {
        let mut context = ErrorContext::new(false);

        context.raise_check(SITE);
        assert_eq!(
            ReportLine::new(context.error().unwrap(), 42).to_string(),
            "ERROR (pid=42): src/server.rs : bind : @ 77 : (error code = -1) : failed check"
        );

        context.raise_system(SITE, "listen failed", 98);
        assert_eq!(
            ReportLine::new(context.error().unwrap(), 42).to_string(),
            "ERROR (pid=42): src/server.rs : bind : @ 77 : (error code = 98) : listen failed"
        );

        context.raise_user(SITE, "port reserved", 1);
        assert_eq!(
            ReportLine::new(context.error().unwrap(), 42).to_string(),
            "ERROR (pid=42): src/server.rs : bind : @ 77 : (error code = 1) : port reserved"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_report_line_errno() {
        let mut context = ErrorContext::new(false);
        context.raise_errno(SITE, libc::EACCES);
        assert_eq!(
            ReportLine::new(context.error().unwrap(), 7).to_string(),
            format!(
                "ERROR (pid=7): src/server.rs : bind : @ 77 : (errno = {}) : Permission denied",
                libc::EACCES
            )
        );
    }

    #[test]
    fn test_report_line_uses_current_pid() {
        let mut context = ErrorContext::new(false);
        context.raise_check(SITE);
        let line = ReportLine::for_current_process(context.error().unwrap()).to_string();
        assert!(line.starts_with(&format!("ERROR (pid={}): ", std::process::id())));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_default_reporter_without_error_is_noop() {
        let context = ErrorContext::new(true);
        DefaultReporter.report(&context);
        assert!(context.has_no_error());
    }
}
