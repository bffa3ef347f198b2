use alloc::string::String;
use core::fmt;

use super::{
  TextQueueConfig, TextQueueError, TextQueueIter, merge_sort, node_arena::NodeArena, output_buffer,
  queue_node::QueueNode,
};


/// Singly-linked queue of owned text values.
///
/// Nodes live in an arena and are linked by index; `head` and `tail` are indices into it and
/// `tail` never owns anything. Every value is an independent copy of the text passed in.
///
/// Invariants kept across every call, failed ones included:
/// - `len() == 0` exactly when both `head` and `tail` are absent;
/// - walking `len() - 1` links from `head` reaches `tail`, whose link is absent.
///
/// Slots freed by removals are kept for later inserts, so node storage stays at its peak size
/// while any value remains. It is handed back only once the queue drains or is cleared, and
/// only when [`TextQueueConfig::release_on_empty`] is set.
pub struct TextQueue {
  arena:  NodeArena,
  head:   Option<usize>,
  tail:   Option<usize>,
  size:   usize,
  config: TextQueueConfig,
}

impl TextQueue {
  /// Target used for every `tracing` event emitted by the queue.
  pub const TRACE_TARGET: &'static str = "fraktor::text_queue";

  /// Creates an empty queue with the default configuration. Does not allocate.
  #[must_use]
  pub const fn new() -> Self {
    Self { arena: NodeArena::new(), head: None, tail: None, size: 0, config: TextQueueConfig::new() }
  }

  /// Creates an empty queue, reserving `config.initial_capacity()` node slots up front.
  ///
  /// # Errors
  ///
  /// Returns [`TextQueueError::AllocationFailed`] when the initial slots cannot be reserved.
  pub fn with_config(config: TextQueueConfig) -> Result<Self, TextQueueError> {
    let mut arena = NodeArena::new();
    if let Err(err) = arena.try_reserve(config.initial_capacity()) {
      tracing::debug!(
        target: TextQueue::TRACE_TARGET,
        capacity = config.initial_capacity(),
        "failed to reserve initial node slots"
      );
      return Err(err.into());
    }
    Ok(Self { arena, head: None, tail: None, size: 0, config })
  }

  /// Returns the configuration the queue was built with.
  #[must_use]
  pub const fn config(&self) -> TextQueueConfig {
    self.config
  }

  /// Inserts a copy of `text` in front of the current head.
  ///
  /// # Errors
  ///
  /// Returns [`TextQueueError::AllocationFailed`] when the node or its value cannot be
  /// allocated. The queue is left untouched in that case.
  pub fn insert_head(&mut self, text: &str) -> Result<(), TextQueueError> {
    let idx = self.allocate(text, self.head)?;
    self.head = Some(idx);
    if self.tail.is_none() {
      self.tail = Some(idx);
    }
    self.size += 1;
    debug_assert_eq!(self.arena.len(), self.size);
    tracing::trace!(target: TextQueue::TRACE_TARGET, size = self.size, "inserted at head");
    Ok(())
  }

  /// Appends a copy of `text` after the current tail.
  ///
  /// # Errors
  ///
  /// Returns [`TextQueueError::AllocationFailed`] when the node or its value cannot be
  /// allocated. The queue is left untouched in that case.
  pub fn insert_tail(&mut self, text: &str) -> Result<(), TextQueueError> {
    let idx = self.allocate(text, None)?;
    match self.tail {
      | Some(tail) => self.arena.set_next(tail, Some(idx)),
      | None => self.head = Some(idx),
    }
    self.tail = Some(idx);
    self.size += 1;
    debug_assert_eq!(self.arena.len(), self.size);
    tracing::trace!(target: TextQueue::TRACE_TARGET, size = self.size, "inserted at tail");
    Ok(())
  }

  /// Removes the head element and returns its value.
  ///
  /// # Errors
  ///
  /// Returns [`TextQueueError::Empty`] when there is nothing to remove.
  pub fn remove_head(&mut self) -> Result<String, TextQueueError> {
    self.detach_head().map(QueueNode::into_value)
  }

  /// Removes the head element and copies its value into `out`.
  ///
  /// At most `out.len() - 1` bytes are copied, silently truncating longer values, and a `0`
  /// terminator is written right after them. An empty `out` receives nothing. Returns the
  /// number of content bytes written.
  ///
  /// # Errors
  ///
  /// Returns [`TextQueueError::Empty`] when there is nothing to remove; `out` is not written.
  pub fn remove_head_into(&mut self, out: &mut [u8]) -> Result<usize, TextQueueError> {
    let node = self.detach_head()?;
    let copied = output_buffer::copy_truncated(node.value().as_bytes(), out);
    if copied < node.value().len() {
      tracing::trace!(
        target: TextQueue::TRACE_TARGET,
        stored = node.value().len(),
        copied,
        "removed value truncated to output buffer"
      );
    }
    Ok(copied)
  }

  /// Returns the number of stored values.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.size
  }

  /// Indicates whether the queue holds no values.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.size == 0
  }

  /// Returns the number of node slots currently allocated.
  ///
  /// Does not shrink as values are removed; see the type-level docs.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.arena.capacity()
  }

  /// Returns the value at the head without removing it.
  #[must_use]
  pub fn peek_head(&self) -> Option<&str> {
    self.head.and_then(|idx| self.arena.value(idx))
  }

  /// Returns the value at the tail without removing it.
  #[must_use]
  pub fn peek_tail(&self) -> Option<&str> {
    self.tail.and_then(|idx| self.arena.value(idx))
  }

  /// Iterates over the values from head to tail.
  #[must_use]
  pub const fn iter(&self) -> TextQueueIter<'_> {
    TextQueueIter::new(&self.arena, self.head, self.size)
  }

  /// Reverses the order of the values by relinking the existing nodes.
  pub fn reverse(&mut self) {
    if self.size < 2 {
      return;
    }
    let mut previous = None;
    let mut cursor = self.head;
    while let Some(idx) = cursor {
      cursor = self.arena.next(idx);
      self.arena.set_next(idx, previous);
      previous = Some(idx);
    }
    self.tail = self.head;
    self.head = previous;
    tracing::trace!(target: TextQueue::TRACE_TARGET, size = self.size, "reversed");
  }

  /// Sorts the values in ascending byte order by relinking the existing nodes.
  ///
  /// Equal values are not kept in their original relative order: when both halves of a merge
  /// offer equal values, the one from the later half is placed first.
  pub fn sort(&mut self) {
    if self.size < 2 {
      return;
    }
    self.head = merge_sort::sort_chain(&mut self.arena, self.head);

    let mut last = self.head;
    while let Some(next) = last.and_then(|idx| self.arena.next(idx)) {
      last = Some(next);
    }
    self.tail = last;
    tracing::trace!(target: TextQueue::TRACE_TARGET, size = self.size, "sorted");
  }

  /// Drops every value.
  pub fn clear(&mut self) {
    self.head = None;
    self.tail = None;
    self.size = 0;
    self.drain_storage();
    tracing::trace!(target: TextQueue::TRACE_TARGET, size = self.size, "cleared");
  }

  fn allocate(&mut self, text: &str, next: Option<usize>) -> Result<usize, TextQueueError> {
    let stored = QueueNode::try_new(text, next).and_then(|node| self.arena.try_insert(node));
    stored.map_err(|err| {
      tracing::debug!(target: TextQueue::TRACE_TARGET, len = text.len(), "node allocation failed");
      TextQueueError::from(err)
    })
  }

  fn detach_head(&mut self) -> Result<QueueNode, TextQueueError> {
    let Some(node) = self.head.and_then(|idx| self.arena.remove(idx)) else {
      tracing::debug!(target: TextQueue::TRACE_TARGET, "remove on empty queue");
      return Err(TextQueueError::Empty);
    };
    self.head = node.next();
    self.size -= 1;
    debug_assert_eq!(self.arena.len(), self.size);
    if self.head.is_none() {
      self.tail = None;
      self.drain_storage();
    }
    tracing::trace!(target: TextQueue::TRACE_TARGET, size = self.size, "removed head");
    Ok(node)
  }

  fn drain_storage(&mut self) {
    if self.config.release_on_empty() {
      self.arena.release();
    } else {
      self.arena.clear();
    }
  }
}

impl Default for TextQueue {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for TextQueue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<'a> IntoIterator for &'a TextQueue {
  type IntoIter = TextQueueIter<'a>;
  type Item = &'a str;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
