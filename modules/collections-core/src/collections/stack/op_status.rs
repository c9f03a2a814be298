/// Tri-state result code recorded per stack operation family.
///
/// Each of push, pop, and peek owns an independent `OpStatus` field that
/// reflects only the most recent invocation of that family. `clear` resets
/// every family back to [`OpStatus::Nil`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum OpStatus {
  /// The operation family has not been invoked since construction or the
  /// last clear.
  Nil = 0,
  /// The most recent invocation of the family completed successfully.
  Ok = 1,
  /// The most recent invocation of the family violated a capacity or
  /// emptiness precondition.
  Err = 2,
}

impl OpStatus {
  /// Gets the numeric code of this status.
  #[must_use]
  pub const fn code(self) -> u8 {
    self as u8
  }

  /// Determines whether this status records a successful invocation.
  #[must_use]
  pub const fn is_ok(self) -> bool {
    matches!(self, Self::Ok)
  }

  /// Determines whether this status records a failed invocation.
  #[must_use]
  pub const fn is_err(self) -> bool {
    matches!(self, Self::Err)
  }
}

impl Default for OpStatus {
  fn default() -> Self {
    OpStatus::Nil
  }
}

impl From<&OpStatus> for &'static str {
  fn from(status: &OpStatus) -> Self {
    match status {
      | OpStatus::Nil => "nil",
      | OpStatus::Ok => "ok",
      | OpStatus::Err => "err",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn op_status_codes_match_the_documented_values() {
    assert_eq!(OpStatus::Nil.code(), 0);
    assert_eq!(OpStatus::Ok.code(), 1);
    assert_eq!(OpStatus::Err.code(), 2);
  }

  #[test]
  fn op_status_default_is_nil() {
    assert_eq!(OpStatus::default(), OpStatus::Nil);
  }

  #[test]
  fn op_status_predicates() {
    assert!(OpStatus::Ok.is_ok());
    assert!(!OpStatus::Ok.is_err());
    assert!(OpStatus::Err.is_err());
    assert!(!OpStatus::Nil.is_ok());
    assert!(!OpStatus::Nil.is_err());
  }

  #[test]
  fn op_status_str_conversion() {
    let nil: &str = (&OpStatus::Nil).into();
    let ok: &str = (&OpStatus::Ok).into();
    let err: &str = (&OpStatus::Err).into();
    assert_eq!(nil, "nil");
    assert_eq!(ok, "ok");
    assert_eq!(err, "err");
  }

  #[test]
  fn op_status_copy_works() {
    let original = OpStatus::Ok;
    let copied = original;
    assert_eq!(original, copied);
  }

  #[test]
  fn op_status_debug_format() {
    let debug_str = format!("{:?}", OpStatus::Err);
    assert!(debug_str.contains("Err"));
  }

  #[test]
  fn op_status_partial_eq() {
    assert_eq!(OpStatus::Nil, OpStatus::Nil);
    assert_ne!(OpStatus::Nil, OpStatus::Ok);
    assert_ne!(OpStatus::Ok, OpStatus::Err);
  }
}
