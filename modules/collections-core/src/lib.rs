//! Core bounded LIFO collection abstractions.
//!
//! The crate is split into a contract layer (the [`BoundedStack`] trait with
//! its status-code semantics) and one concrete realisation
//! ([`ListBoundStack`], backed by `alloc::vec::Vec`). Operation outcomes are
//! reported through per-family [`OpStatus`] codes rather than return values;
//! the only hard failure is rejecting a zero capacity at construction.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

extern crate alloc;

pub mod collections;

pub use collections::{BoundedStack, DEFAULT_MAX_CAPACITY, ListBoundStack, OpStatus, StackConfigError};
