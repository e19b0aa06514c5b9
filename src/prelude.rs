//! Commonly used items for convenient importing.
//!
//! # Usage
//!
//! ```rust
//! use errslot::prelude::*;
//!
//! fn require_positive(context: &mut ErrorContext, value: i32) -> bool {
//!     if value <= 0 {
//!         raise_user!(context, "value must be positive", value);
//!         return false;
//!     }
//!     true
//! }
//!
//! let mut context = ErrorContext::new(false);
//! assert!(!require_positive(&mut context, -3));
//! assert_eq!(context.errno_code(), -3);
//! ```
//!
//! # What's Included
//!
//! - **[`ErrorContext`]**, **[`ErrorKind`]**, **[`RaisedError`]** and
//!   **[`CallSite`]**
//! - **[`Reporter`]**: the reporting strategy trait
//! - **[`call_site!`]**, **[`raise_check!`]**, **[`raise_errno!`]**,
//!   **[`raise_system!`]** and **[`raise_user!`]**
//!
//! The [`check`](crate::check) predicates are not re-exported; call them
//! through the module (`check::not_null(...)`) so the call reads as a check.

pub use crate::{
    CallSite, ErrorContext, ErrorKind, RaisedError, call_site, raise_check, raise_errno,
    raise_system, raise_user, reporter::Reporter,
};
