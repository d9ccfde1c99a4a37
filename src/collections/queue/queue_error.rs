use core::fmt;

/// Errors that occur during persistent queue operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
  /// The no-value sentinel was supplied where a real element was required.
  NilElement,
}

impl fmt::Display for QueueError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::NilElement => f.write_str("an element was required but the no-value sentinel was supplied"),
    }
  }
}

impl core::error::Error for QueueError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn nil_element_displays_reason() {
    let error = QueueError::NilElement;
    assert!(error.to_string().contains("no-value sentinel"));
  }

  #[test]
  fn queue_error_is_copy_and_eq() {
    let error = QueueError::NilElement;
    let copied = error;
    assert_eq!(error, copied);
  }

  #[test]
  fn queue_error_debug_format() {
    let debug_str = alloc::format!("{:?}", QueueError::NilElement);
    assert!(debug_str.contains("NilElement"));
  }
}
