/// Captures the [`CallSite`] of the invocation: file, enclosing function and
/// line.
///
/// The function name is the name of the innermost named function; closures
/// and async blocks are skipped.
///
/// # Examples
///
/// ```
/// use errslot::call_site;
///
/// fn connect() -> errslot::CallSite {
///     call_site!()
/// }
///
/// let site = connect();
/// assert_eq!(site.function, "connect");
/// assert_eq!(site.file, file!());
/// ```
///
/// [`CallSite`]: crate::CallSite
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __errslot_marker() {}
        $crate::CallSite::new(
            ::core::file!(),
            $crate::__private::function_name_of(__errslot_marker),
            ::core::line!(),
        )
    }};
}

/// Raises a check failure into the context at the current call site.
///
/// Expands to [`ErrorContext::raise_check`] with [`call_site!()`].
///
/// [`ErrorContext::raise_check`]: crate::ErrorContext::raise_check
/// [`call_site!()`]: crate::call_site!
#[macro_export]
macro_rules! raise_check {
    ($context:expr $(,)?) => {
        $crate::ErrorContext::raise_check($context, $crate::call_site!())
    };
}

/// Raises an errno failure with the given error number into the context at
/// the current call site.
///
/// # Examples
///
/// ```
/// use errslot::prelude::*;
///
/// let mut context = ErrorContext::new(false);
/// if let Err(error) = std::fs::read("/definitely/not/here") {
///     raise_errno!(&mut context, error.raw_os_error().unwrap_or(0));
/// }
/// assert_eq!(context.kind(), ErrorKind::Errno);
/// ```
#[macro_export]
macro_rules! raise_errno {
    ($context:expr, $code:expr $(,)?) => {
        $crate::ErrorContext::raise_errno($context, $crate::call_site!(), $code)
    };
}

/// Raises a system failure with a message and code into the context at the
/// current call site.
#[macro_export]
macro_rules! raise_system {
    ($context:expr, $message:expr, $code:expr $(,)?) => {
        $crate::ErrorContext::raise_system($context, $crate::call_site!(), $message, $code)
    };
}

/// Raises a user failure with a message and code into the context at the
/// current call site.
///
/// # Examples
///
/// ```
/// use errslot::prelude::*;
///
/// fn load(context: &mut ErrorContext) {
///     raise_user!(context, "nothing to load", 4);
/// }
///
/// let mut context = ErrorContext::new(false);
/// load(&mut context);
/// assert_eq!(context.site().unwrap().function, "load");
/// assert_eq!(context.errno_code(), 4);
/// ```
#[macro_export]
macro_rules! raise_user {
    ($context:expr, $message:expr, $code:expr $(,)?) => {
        $crate::ErrorContext::raise_user($context, $crate::call_site!(), $message, $code)
    };
}
