//! Call-site metadata recorded alongside a raised error.
//!
//! All three fields borrow `'static` data produced by `file!()`, `line!()`
//! and [`core::any::type_name`], so a [`CallSite`] never owns or frees
//! anything and is freely copyable.

use core::fmt;

/// The location in the source code where an error was raised.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallSite {
    /// The source file, as reported by `file!()`.
    pub file: &'static str,
    /// The name of the enclosing function, without its module path.
    pub function: &'static str,
    /// The line number, as reported by `line!()`.
    pub line: u32,
}

impl CallSite {
    /// Creates a new [`CallSite`].
    #[inline]
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} : @ {}", self.file, self.function, self.line)
    }
}

/// Suffix of the marker function the `call_site!` macro declares inside the
/// caller's body.
pub const MARKER_SUFFIX: &str = "::__errslot_marker";

/// Reduces the `type_name` of a marker function nested in some function `f`
/// to the bare name of `f`.
///
/// Closure and async-block segments (`{{closure}}`) are skipped so the name
/// of the enclosing named function is reported.
///
/// # Examples
///
/// ```
/// use errslot_internals::site::function_name;
///
/// assert_eq!(function_name("app::net::connect::__errslot_marker"), "connect");
/// assert_eq!(
///     function_name("app::run::{{closure}}::__errslot_marker"),
///     "run"
/// );
/// assert_eq!(
///     function_name("<app::Pool as app::Source>::acquire::__errslot_marker"),
///     "acquire"
/// );
/// ```
pub fn function_name(type_name: &'static str) -> &'static str {
    let mut path = type_name.strip_suffix(MARKER_SUFFIX).unwrap_or(type_name);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    match path.rfind("::") {
        Some(index) => &path[index + 2..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_function_name_plain() {
        assert_eq!(function_name("main::__errslot_marker"), "main");
        assert_eq!(function_name("a::b::c::__errslot_marker"), "c");
    }

    #[test]
    fn test_function_name_without_marker() {
        assert_eq!(function_name("a::b::c"), "c");
        assert_eq!(function_name("free"), "free");
    }

    #[test]
    fn test_function_name_nested_closures() {
        assert_eq!(
            function_name("a::work::{{closure}}::{{closure}}::__errslot_marker"),
            "work"
        );
    }

    #[test]
    fn test_call_site_display() {
        let site = CallSite::new("src/io.rs", "open", 42);
        assert_eq!(format!("{site}"), "src/io.rs : open : @ 42");
    }
}
