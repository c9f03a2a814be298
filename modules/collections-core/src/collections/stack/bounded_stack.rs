use super::op_status::OpStatus;

/// Capacity applied when a stack is constructed without an explicit limit.
pub const DEFAULT_MAX_CAPACITY: usize = 32;

/// Contract for LIFO containers with a fixed maximum capacity.
///
/// Commands (`push`, `pop`, `clear`) return nothing; their outcome is
/// recorded in a per-family [`OpStatus`] that callers inspect through the
/// status queries. Exceeding the capacity on push, or popping or peeking an
/// empty stack, is a recoverable reported condition and never a panic:
/// the contents stay untouched and the family's status becomes
/// [`OpStatus::Err`].
///
/// Implementations must uphold `0 <= len() <= capacity()` after every
/// operation. The three status families are independent: invoking one never
/// alters another family's status, and only [`BoundedStack::clear`] resets
/// them all to [`OpStatus::Nil`].
pub trait BoundedStack<T> {
  /// Pushes a value as the new top of the stack.
  ///
  /// When the stack is full the contents are left unchanged and the push
  /// status becomes [`OpStatus::Err`]; otherwise [`OpStatus::Ok`].
  fn push(&mut self, value: T);

  /// Removes the top element of the stack.
  ///
  /// When the stack is empty the contents are left unchanged and the pop
  /// status becomes [`OpStatus::Err`]; otherwise [`OpStatus::Ok`].
  fn pop(&mut self);

  /// Removes every element and resets all three status families to
  /// [`OpStatus::Nil`]. Cannot fail.
  fn clear(&mut self);

  /// Gets the top value of the stack without removing it.
  ///
  /// Returns `None` and records [`OpStatus::Err`] when the stack is empty.
  /// This query takes `&mut self` because it records the peek status as an
  /// observable side effect.
  fn peek(&mut self) -> Option<&T>;

  /// Gets the current number of elements in the stack.
  fn len(&self) -> usize;

  /// Gets the fixed maximum capacity of the stack.
  fn capacity(&self) -> usize;

  /// Gets the status recorded by the most recent push.
  fn push_status(&self) -> OpStatus;

  /// Gets the status recorded by the most recent pop.
  fn pop_status(&self) -> OpStatus;

  /// Gets the status recorded by the most recent peek.
  fn peek_status(&self) -> OpStatus;

  /// Checks if the stack is empty.
  #[must_use]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Checks if the stack is full.
  #[must_use]
  fn is_full(&self) -> bool {
    self.len() == self.capacity()
  }
}
