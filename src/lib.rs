//! Facade crate for the bstack project.
//!
//! Re-exports the bounded LIFO collections from
//! [`bstack-collections-core-rs`](bstack_collections_core_rs) under a single
//! dependency name.

#![no_std]

pub use bstack_collections_core_rs::*;


/// Gets the version of this crate as recorded in its package metadata.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
