use super::queue_node::QueueNode;

/// Storage cell of the node arena.
#[derive(Debug)]
pub(crate) enum ArenaSlot {
  /// Slot holding a live node.
  Occupied(QueueNode),
  /// Free slot; links to the next free slot so releases never allocate.
  Vacant { next_free: Option<usize> },
}

impl ArenaSlot {
  pub(crate) const fn as_node(&self) -> Option<&QueueNode> {
    match self {
      | Self::Occupied(node) => Some(node),
      | Self::Vacant { .. } => None,
    }
  }

  pub(crate) const fn as_node_mut(&mut self) -> Option<&mut QueueNode> {
    match self {
      | Self::Occupied(node) => Some(node),
      | Self::Vacant { .. } => None,
    }
  }
}
