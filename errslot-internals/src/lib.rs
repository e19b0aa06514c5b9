#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::missing_docs_in_private_items,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`errslot`].
//!
//! # Overview
//!
//! This crate contains the low-level building blocks that the [`errslot`]
//! error context is assembled from. Everything here is `no_std` and only
//! needs `alloc`.
//!
//! **This crate is an implementation detail.** No semantic versioning guarantees
//! are provided. Users should depend on the [`errslot`] crate, not this one.
//!
//! # Architecture
//!
//! - **[`message`]**: The [`Message`] sum type. A message is either an
//!   [`Owned`] copy that the context allocated, or a [`Borrowed`] reference to
//!   a `'static` string. Dropping the value is the release rule, so there is
//!   no runtime flag to get out of sync.
//! - **[`site`]**: The [`CallSite`] record (file, function, line) and the
//!   helper that turns a `type_name` into a bare function name.
//! - **[`errno`]**: The OS error number to description lookup, with the
//!   lookup's own failures surfaced as a [`DescribeError`].
//! - **[`boxed`]**: Heap placement that reports allocation exhaustion instead
//!   of aborting the process.
//!
//! # Safety Strategy
//!
//! Only two places need `unsafe`: the call into the platform's
//! `strerror_r`, and the raw allocation in [`try_box`]. Both are kept in
//! their own module so the invariants can be checked locally within a single
//! file, and every unsafe block documents why it is sound.
//!
//! [`errslot`]: https://docs.rs/errslot/latest/errslot/
//! [`Owned`]: message::Message::Owned
//! [`Borrowed`]: message::Message::Borrowed
//! [`Message`]: message::Message
//! [`CallSite`]: site::CallSite
//! [`DescribeError`]: errno::DescribeError
//! [`try_box`]: boxed::try_box

extern crate alloc;

pub mod boxed;
pub mod errno;
pub mod message;
pub mod site;

pub use boxed::try_box;
pub use message::Message;
pub use site::CallSite;
