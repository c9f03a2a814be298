//! Collection abstractions provided by this crate.

pub mod stack;

pub use stack::{BoundedStack, DEFAULT_MAX_CAPACITY, ListBoundStack, OpStatus, StackConfigError};
