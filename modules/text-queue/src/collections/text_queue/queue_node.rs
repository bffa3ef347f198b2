use alloc::{collections::TryReserveError, string::String};

/// Single link of the chain: an owned text value and the index of its successor.
#[derive(Debug)]
pub(crate) struct QueueNode {
  value: String,
  next:  Option<usize>,
}

impl QueueNode {
  /// Copies `text` into a freshly reserved buffer.
  ///
  /// The copy never aliases the caller's buffer.
  pub(crate) fn try_new(text: &str, next: Option<usize>) -> Result<Self, TryReserveError> {
    let mut value = String::new();
    value.try_reserve_exact(text.len())?;
    value.push_str(text);
    Ok(Self { value, next })
  }

  pub(crate) fn value(&self) -> &str {
    &self.value
  }

  pub(crate) fn into_value(self) -> String {
    self.value
  }

  pub(crate) const fn next(&self) -> Option<usize> {
    self.next
  }

  pub(crate) const fn set_next(&mut self, next: Option<usize>) {
    self.next = next;
  }
}
