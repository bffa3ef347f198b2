//! Merge sort over an arena-backed chain.
//!
//! Nodes are relinked in place; nothing is allocated or released. The merge emits a left
//! element only while it is strictly less than the current right element, so equal values
//! coming from the right half of a split are placed first. The sort is not stable.

use super::node_arena::NodeArena;


/// Sorts the chain starting at `head` in ascending byte order and returns its new head.
///
/// Recursion depth is bounded by `log2` of the chain length because every split halves it.
pub(crate) fn sort_chain(arena: &mut NodeArena, head: Option<usize>) -> Option<usize> {
  let first = head?;
  if arena.next(first).is_none() {
    return head;
  }
  let second_half = split_at_midpoint(arena, first);
  let left = sort_chain(arena, head);
  let right = sort_chain(arena, second_half);
  merge(arena, left, right)
}

/// Cuts the chain after its midpoint and returns the head of the second half.
///
/// For an even length both halves are equal; for an odd length the first half is longer.
fn split_at_midpoint(arena: &mut NodeArena, head: usize) -> Option<usize> {
  let mut slow = head;
  let mut fast = arena.next(head);
  while let Some(step) = fast.and_then(|idx| arena.next(idx)) {
    let Some(next_slow) = arena.next(slow) else {
      break;
    };
    slow = next_slow;
    fast = arena.next(step);
  }
  let mid = arena.next(slow);
  arena.set_next(slow, None);
  mid
}

fn merge(arena: &mut NodeArena, mut left: Option<usize>, mut right: Option<usize>) -> Option<usize> {
  let mut head = None;
  let mut last: Option<usize> = None;
  loop {
    let taken = match (left, right) {
      | (None, rest) | (rest, None) => {
        append(arena, &mut head, last, rest);
        return head;
      },
      | (Some(l), Some(r)) => {
        if is_less(arena, l, r) {
          left = arena.next(l);
          l
        } else {
          right = arena.next(r);
          r
        }
      },
    };
    append(arena, &mut head, last, Some(taken));
    last = Some(taken);
  }
}

fn append(arena: &mut NodeArena, head: &mut Option<usize>, last: Option<usize>, node: Option<usize>) {
  match last {
    | Some(prev) => arena.set_next(prev, node),
    | None => *head = node,
  }
}

fn is_less(arena: &NodeArena, left: usize, right: usize) -> bool {
  match (arena.value(left), arena.value(right)) {
    | (Some(l), Some(r)) => l.as_bytes() < r.as_bytes(),
    | _ => false,
  }
}
