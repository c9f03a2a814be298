//! Bounded stack contract and its list-backed realisation.

mod bounded_stack;
mod list_bound_stack;
mod op_status;
mod stack_config_error;

pub use bounded_stack::{BoundedStack, DEFAULT_MAX_CAPACITY};
pub use list_bound_stack::ListBoundStack;
pub use op_status::OpStatus;
pub use stack_config_error::StackConfigError;
