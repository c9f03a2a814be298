use alloc::vec::Vec;

use super::{
  bounded_stack::{BoundedStack, DEFAULT_MAX_CAPACITY},
  op_status::OpStatus,
  stack_config_error::StackConfigError,
};


/// Bounded stack realised over an `alloc::vec::Vec`.
///
/// Insertion order is stack order; the last element of the backing vector is
/// the top. The capacity limit is stored separately from the vector's own
/// growth mechanics, which stay an implementation detail.
#[derive(Debug, Clone)]
pub struct ListBoundStack<T> {
  items:       Vec<T>,
  capacity:    usize,
  push_status: OpStatus,
  pop_status:  OpStatus,
  peek_status: OpStatus,
}

impl<T> ListBoundStack<T> {
  /// Creates an empty stack with a maximum capacity of
  /// [`DEFAULT_MAX_CAPACITY`].
  #[must_use]
  pub fn new() -> Self {
    Self {
      items: Vec::with_capacity(DEFAULT_MAX_CAPACITY),
      capacity: DEFAULT_MAX_CAPACITY,
      push_status: OpStatus::Nil,
      pop_status: OpStatus::Nil,
      peek_status: OpStatus::Nil,
    }
  }

  /// Creates an empty stack with the specified maximum capacity.
  ///
  /// Fails with [`StackConfigError::ZeroCapacity`] when `capacity` is zero;
  /// no stack value exists on error.
  pub fn with_capacity(capacity: usize) -> Result<Self, StackConfigError> {
    if capacity == 0 {
      return Err(StackConfigError::ZeroCapacity);
    }
    Ok(Self {
      items: Vec::with_capacity(capacity),
      capacity,
      push_status: OpStatus::Nil,
      pop_status: OpStatus::Nil,
      peek_status: OpStatus::Nil,
    })
  }
}

impl<T> BoundedStack<T> for ListBoundStack<T> {
  fn push(&mut self, value: T) {
    if self.items.len() == self.capacity {
      self.push_status = OpStatus::Err;
      return;
    }
    self.items.push(value);
    self.push_status = OpStatus::Ok;
  }

  fn pop(&mut self) {
    if self.items.pop().is_none() {
      self.pop_status = OpStatus::Err;
      return;
    }
    self.pop_status = OpStatus::Ok;
  }

  fn clear(&mut self) {
    self.items.clear();
    self.push_status = OpStatus::Nil;
    self.pop_status = OpStatus::Nil;
    self.peek_status = OpStatus::Nil;
  }

  fn peek(&mut self) -> Option<&T> {
    if self.items.is_empty() {
      self.peek_status = OpStatus::Err;
      return None;
    }
    self.peek_status = OpStatus::Ok;
    self.items.last()
  }

  fn len(&self) -> usize {
    self.items.len()
  }

  fn capacity(&self) -> usize {
    self.capacity
  }

  fn push_status(&self) -> OpStatus {
    self.push_status
  }

  fn pop_status(&self) -> OpStatus {
    self.pop_status
  }

  fn peek_status(&self) -> OpStatus {
    self.peek_status
  }
}

impl<T> Default for ListBoundStack<T> {
  fn default() -> Self {
    Self::new()
  }
}
