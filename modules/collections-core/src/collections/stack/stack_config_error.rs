use core::fmt;

/// Errors detected while constructing a bounded stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackConfigError {
  /// The requested maximum capacity is zero; a bounded stack must be able to
  /// hold at least one element.
  ZeroCapacity,
}

impl fmt::Display for StackConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackConfigError::ZeroCapacity => write!(f, "max capacity must be a positive integer"),
    }
  }
}

impl core::error::Error for StackConfigError {}
