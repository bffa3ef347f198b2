use alloc::collections::TryReserveError;


/// Errors produced by text queue operations.
///
/// The boolean surface in [`handle`](crate::handle) collapses every variant into `false`.
#[derive(Clone, Copy, Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextQueueError {
  /// No queue was supplied.
  #[error("queue handle is absent")]
  QueueAbsent,
  /// The queue has no elements to remove.
  #[error("queue is empty")]
  Empty,
  /// Storage for a node or its value could not be reserved.
  #[error("queue allocation failed")]
  AllocationFailed,
}

impl From<TryReserveError> for TextQueueError {
  fn from(_err: TryReserveError) -> Self {
    TextQueueError::AllocationFailed
  }
}
