use core::iter::FusedIterator;

use super::node_arena::NodeArena;

/// Head-to-tail iterator over the values of a [`TextQueue`](super::TextQueue).
#[derive(Clone, Debug)]
pub struct TextQueueIter<'a> {
  arena:     &'a NodeArena,
  cursor:    Option<usize>,
  remaining: usize,
}

impl<'a> TextQueueIter<'a> {
  pub(crate) const fn new(arena: &'a NodeArena, head: Option<usize>, len: usize) -> Self {
    Self { arena, cursor: head, remaining: len }
  }
}

impl<'a> Iterator for TextQueueIter<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<Self::Item> {
    let idx = self.cursor.take()?;
    let node = self.arena.node(idx)?;
    self.cursor = node.next();
    self.remaining = self.remaining.saturating_sub(1);
    Some(node.value())
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl ExactSizeIterator for TextQueueIter<'_> {}

impl FusedIterator for TextQueueIter<'_> {}
