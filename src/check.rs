//! Fail-fast check predicates.
//!
//! Every predicate takes the [`ErrorContext`] plus its operands and evaluates
//! one condition:
//!
//! - if the condition holds it returns `true` and leaves the context alone;
//! - otherwise it raises a check failure (message `"failed check"`, code
//!   `-1`) and returns `false`.
//!
//! The recorded call site is the predicate's own location, not the location
//! of its caller. A failed [`not_null`] therefore always reports function
//! `not_null` in this file.
//!
//! # Examples
//!
//! ```rust
//! use errslot::{check, prelude::*};
//!
//! fn split_pair<'a>(context: &mut ErrorContext, text: &'a str) -> Option<(&'a str, &'a str)> {
//!     let (key, value) = text.split_once('=')?;
//!     if !check::not_equals(context, key, "") {
//!         return None;
//!     }
//!     Some((key, value))
//! }
//!
//! let mut context = ErrorContext::new(false);
//! assert_eq!(split_pair(&mut context, "a=1"), Some(("a", "1")));
//! assert_eq!(split_pair(&mut context, "=1"), None);
//! assert_eq!(context.kind(), ErrorKind::Check);
//! assert_eq!(context.site().unwrap().function, "not_equals_str");
//! ```

use alloc::string::String;
use core::ptr::NonNull;

use crate::ErrorContext;

/// Values that can be null.
///
/// Implemented for raw pointers, [`NonNull`] (never null) and [`Option`]
/// (null when `None`).
pub trait Nullable {
    /// Returns `true` if the value is null.
    fn is_null(&self) -> bool;
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for NonNull<T> {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

/// Fails when `value` is null.
///
/// ```rust
/// use errslot::{check, prelude::*};
///
/// let mut context = ErrorContext::new(false);
/// let present = 5;
///
/// assert!(check::not_null(&mut context, &Some(&present)));
/// assert!(context.has_no_error());
///
/// assert!(!check::not_null(&mut context, &core::ptr::null::<u8>()));
/// assert_eq!(context.message(), Some("failed check"));
/// assert_eq!(context.errno_code(), -1);
/// ```
pub fn not_null<N: Nullable + ?Sized>(context: &mut ErrorContext, value: &N) -> bool {
    if value.is_null() {
        raise_check!(context);
        return false;
    }
    true
}

/// Fails when `value` is not null.
pub fn null<N: Nullable + ?Sized>(context: &mut ErrorContext, value: &N) -> bool {
    if !value.is_null() {
        raise_check!(context);
        return false;
    }
    true
}

/// Fails when `a <= b`.
pub fn greater_than(context: &mut ErrorContext, a: i32, b: i32) -> bool {
    if a <= b {
        raise_check!(context);
        return false;
    }
    true
}

/// Fails when `a >= b`.
pub fn less_than(context: &mut ErrorContext, a: i32, b: i32) -> bool {
    if a >= b {
        raise_check!(context);
        return false;
    }
    true
}

/// Fails when `a != b`.
pub fn equals_int(context: &mut ErrorContext, a: i32, b: i32) -> bool {
    if a != b {
        raise_check!(context);
        return false;
    }
    true
}

/// Fails when the strings differ, byte by byte.
pub fn equals_str(context: &mut ErrorContext, a: &str, b: &str) -> bool {
    if a.as_bytes() != b.as_bytes() {
        raise_check!(context);
        return false;
    }
    true
}

/// Fails when `a == b`.
pub fn not_equals_int(context: &mut ErrorContext, a: i32, b: i32) -> bool {
    if a == b {
        raise_check!(context);
        return false;
    }
    true
}

/// Fails when the strings are identical, byte by byte.
pub fn not_equals_str(context: &mut ErrorContext, a: &str, b: &str) -> bool {
    if a.as_bytes() == b.as_bytes() {
        raise_check!(context);
        return false;
    }
    true
}

/// Operand types accepted by [`equals`] and [`not_equals`].
///
/// Each implementation forwards to the matching concrete predicate, so the
/// choice between the integer and the string variant is made at compile time
/// from the operand types. String operands can be mixed: a `&String` compares
/// against a `&str` and the other way round.
pub trait Comparable<Rhs = Self>: Sized {
    /// Forwards to the `equals_*` predicate for this type.
    fn check_equals(context: &mut ErrorContext, a: Self, b: Rhs) -> bool;

    /// Forwards to the `not_equals_*` predicate for this type.
    fn check_not_equals(context: &mut ErrorContext, a: Self, b: Rhs) -> bool;
}

impl Comparable for i32 {
    #[inline]
    fn check_equals(context: &mut ErrorContext, a: Self, b: Self) -> bool {
        equals_int(context, a, b)
    }

    #[inline]
    fn check_not_equals(context: &mut ErrorContext, a: Self, b: Self) -> bool {
        not_equals_int(context, a, b)
    }
}

macro_rules! impl_comparable_str {
    ($($lhs:ty => $rhs:ty),* $(,)?) => {
        $(
            impl Comparable<$rhs> for $lhs {
                #[inline]
                fn check_equals(context: &mut ErrorContext, a: Self, b: $rhs) -> bool {
                    equals_str(context, a, b)
                }

                #[inline]
                fn check_not_equals(context: &mut ErrorContext, a: Self, b: $rhs) -> bool {
                    not_equals_str(context, a, b)
                }
            }
        )*
    };
}

impl_comparable_str!(
    &str => &str,
    &String => &String,
    &String => &str,
    &str => &String,
);

/// Fails when `a` and `b` differ. Dispatches on the operand types, see
/// [`Comparable`].
///
/// ```rust
/// use errslot::{check, prelude::*};
///
/// let mut context = ErrorContext::new(false);
/// assert!(check::equals(&mut context, "abc", "abc"));
/// assert!(check::equals(&mut context, 3, 3));
/// assert!(check::equals(&mut context, &String::from("abc"), "abc"));
/// assert!(context.has_no_error());
///
/// assert!(!check::equals(&mut context, "abc", "abd"));
/// assert_eq!(context.site().unwrap().function, "equals_str");
/// ```
#[inline]
pub fn equals<T: Comparable<U>, U>(context: &mut ErrorContext, a: T, b: U) -> bool {
    T::check_equals(context, a, b)
}

/// Fails when `a` and `b` are equal. Dispatches on the operand types, see
/// [`Comparable`].
#[inline]
pub fn not_equals<T: Comparable<U>, U>(context: &mut ErrorContext, a: T, b: U) -> bool {
    T::check_not_equals(context, a, b)
}
