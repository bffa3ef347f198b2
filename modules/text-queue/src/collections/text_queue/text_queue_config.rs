
/// Construction settings for [`TextQueue`](super::TextQueue).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextQueueConfig {
  initial_capacity: usize,
  release_on_empty: bool,
}

impl TextQueueConfig {
  /// Creates the default configuration: no reserved slots, storage released once the queue drains.
  #[must_use]
  pub const fn new() -> Self {
    Self { initial_capacity: 0, release_on_empty: true }
  }

  /// Sets the number of node slots reserved when the queue is created.
  #[must_use]
  pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
    self.initial_capacity = initial_capacity;
    self
  }

  /// Sets whether node storage is returned to the allocator when the queue becomes empty.
  #[must_use]
  pub const fn with_release_on_empty(mut self, release_on_empty: bool) -> Self {
    self.release_on_empty = release_on_empty;
    self
  }

  /// Returns the number of node slots reserved up front.
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }

  /// Indicates whether node storage is released when the queue drains.
  #[must_use]
  pub const fn release_on_empty(&self) -> bool {
    self.release_on_empty
  }
}

impl Default for TextQueueConfig {
  fn default() -> Self {
    Self::new()
  }
}
