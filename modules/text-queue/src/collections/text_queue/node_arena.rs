use alloc::{collections::TryReserveError, vec::Vec};
use core::mem;

use super::{arena_slot::ArenaSlot, queue_node::QueueNode};


/// Owning storage for queue nodes, addressed by slot index.
///
/// Released slots form an intrusive free list and are handed out again before the
/// backing vector grows.
#[derive(Debug)]
pub(crate) struct NodeArena {
  slots:     Vec<ArenaSlot>,
  free_head: Option<usize>,
  occupied:  usize,
}

impl NodeArena {
  pub(crate) const fn new() -> Self {
    Self { slots: Vec::new(), free_head: None, occupied: 0 }
  }

  /// Reserves room for at least `additional` more slots.
  pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
    self.slots.try_reserve(additional)
  }

  /// Stores `node` and returns its slot index.
  pub(crate) fn try_insert(&mut self, node: QueueNode) -> Result<usize, TryReserveError> {
    if let Some(idx) = self.free_head {
      if let Some(slot) = self.slots.get_mut(idx) {
        if let ArenaSlot::Vacant { next_free } = *slot {
          self.free_head = next_free;
          *slot = ArenaSlot::Occupied(node);
          self.occupied += 1;
          return Ok(idx);
        }
      }
    }

    self.slots.try_reserve(1)?;
    let idx = self.slots.len();
    self.slots.push(ArenaSlot::Occupied(node));
    self.occupied += 1;
    Ok(idx)
  }

  /// Takes the node out of `idx`, leaving the slot on the free list.
  pub(crate) fn remove(&mut self, idx: usize) -> Option<QueueNode> {
    let slot = self.slots.get_mut(idx)?;
    match mem::replace(slot, ArenaSlot::Vacant { next_free: self.free_head }) {
      | ArenaSlot::Occupied(node) => {
        self.free_head = Some(idx);
        self.occupied -= 1;
        Some(node)
      },
      | vacant @ ArenaSlot::Vacant { .. } => {
        *slot = vacant;
        None
      },
    }
  }

  pub(crate) fn node(&self, idx: usize) -> Option<&QueueNode> {
    self.slots.get(idx).and_then(ArenaSlot::as_node)
  }

  pub(crate) fn value(&self, idx: usize) -> Option<&str> {
    self.node(idx).map(QueueNode::value)
  }

  pub(crate) fn next(&self, idx: usize) -> Option<usize> {
    self.node(idx).and_then(QueueNode::next)
  }

  /// Rewires the successor of `idx`. Ignored for vacant slots.
  pub(crate) fn set_next(&mut self, idx: usize, next: Option<usize>) {
    if let Some(node) = self.slots.get_mut(idx).and_then(ArenaSlot::as_node_mut) {
      node.set_next(next);
    }
  }

  pub(crate) const fn len(&self) -> usize {
    self.occupied
  }

  pub(crate) fn capacity(&self) -> usize {
    self.slots.capacity()
  }

  /// Drops every node but keeps the allocated capacity.
  pub(crate) fn clear(&mut self) {
    self.slots.clear();
    self.free_head = None;
    self.occupied = 0;
  }

  /// Drops every node and returns the backing storage to the allocator.
  pub(crate) fn release(&mut self) {
    self.slots = Vec::new();
    self.free_head = None;
    self.occupied = 0;
  }
}
