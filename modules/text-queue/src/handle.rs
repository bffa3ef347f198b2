//! Boolean, absent-handle surface over [`TextQueue`].
//!
//! External drivers hold the queue as an optional handle and only ever observe `true` /
//! `false` (or an absent queue from [`new`]). Every function here is a thin adapter: the
//! detailed cause is available through the `Result`-returning methods on [`TextQueue`].

use crate::collections::{TextQueue, TextQueueError};


/// Creates an empty queue. Returns `None` when the queue record cannot be allocated.
#[must_use]
pub fn new() -> Option<TextQueue> {
  TextQueue::with_config(Default::default()).ok()
}

/// Releases every value held by `queue`. Does nothing for an absent handle.
#[allow(clippy::needless_pass_by_value)]
pub fn destroy(queue: Option<TextQueue>) {
  if let Some(queue) = queue {
    tracing::trace!(target: TextQueue::TRACE_TARGET, size = queue.len(), "destroying queue");
  }
}

/// Inserts a copy of `text` at the head. Returns `false` for an absent handle or when
/// allocation fails.
pub fn insert_head(queue: Option<&mut TextQueue>, text: &str) -> bool {
  present(queue).and_then(|queue| queue.insert_head(text)).is_ok()
}

/// Appends a copy of `text` at the tail. Returns `false` for an absent handle or when
/// allocation fails.
pub fn insert_tail(queue: Option<&mut TextQueue>, text: &str) -> bool {
  present(queue).and_then(|queue| queue.insert_tail(text)).is_ok()
}

/// Removes the head element, copying its value into `out` when supplied.
///
/// The copy holds at most `out.len() - 1` bytes followed by a `0` terminator; a zero-length
/// `out` receives nothing. Returns `false` for an absent handle or an empty queue, in which
/// case neither the queue nor `out` is modified.
pub fn remove_head(queue: Option<&mut TextQueue>, out: Option<&mut [u8]>) -> bool {
  present(queue)
    .and_then(|queue| match out {
      | Some(out) => queue.remove_head_into(out).map(|_| ()),
      | None => queue.remove_head().map(|_| ()),
    })
    .is_ok()
}

/// Returns the number of stored values, or `0` for an absent handle.
#[must_use]
pub fn size(queue: Option<&TextQueue>) -> usize {
  queue.map_or(0, TextQueue::len)
}

/// Reverses the queue in place. Does nothing for an absent handle.
pub fn reverse(queue: Option<&mut TextQueue>) {
  if let Ok(queue) = present(queue) {
    queue.reverse();
  }
}

/// Sorts the queue in ascending byte order. Does nothing for an absent handle.
pub fn sort(queue: Option<&mut TextQueue>) {
  if let Ok(queue) = present(queue) {
    queue.sort();
  }
}

fn present(queue: Option<&mut TextQueue>) -> Result<&mut TextQueue, TextQueueError> {
  queue.ok_or_else(|| {
    tracing::debug!(target: TextQueue::TRACE_TARGET, "queue handle absent");
    TextQueueError::QueueAbsent
  })
}
