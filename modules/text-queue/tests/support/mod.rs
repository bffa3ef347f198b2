//! Global allocator that can be told to refuse allocations made by the current thread.
#![allow(dead_code)]

use std::{
  alloc::{GlobalAlloc, Layout, System},
  cell::Cell,
  ptr,
};

#[global_allocator]
static ALLOCATOR: FailingAllocator = FailingAllocator;

thread_local! {
  static RULE: Cell<FailureRule> = const { Cell::new(FailureRule::Never) };
  static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
}

/// Which allocations the current thread refuses.
#[derive(Clone, Copy, Debug)]
pub enum FailureRule {
  Never,
  /// Lets this many allocations through, then refuses every later one.
  RefuseAfter(usize),
  /// Refuses any allocation of at least this many bytes.
  RefuseFromSize(usize),
}

pub struct FailingAllocator;

impl FailingAllocator {
  fn refuses(size: usize) -> bool {
    RULE
      .try_with(|rule| match rule.get() {
        | FailureRule::Never => false,
        | FailureRule::RefuseAfter(0) => true,
        | FailureRule::RefuseAfter(allowed) => {
          rule.set(FailureRule::RefuseAfter(allowed - 1));
          false
        },
        | FailureRule::RefuseFromSize(limit) => size >= limit,
      })
      .unwrap_or(false)
  }

  fn account(delta: isize) {
    let _ = LIVE_BYTES.try_with(|live| live.set(live.get() + delta));
  }
}

unsafe impl GlobalAlloc for FailingAllocator {
  unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
    if Self::refuses(layout.size()) {
      return ptr::null_mut();
    }
    let block = unsafe { System.alloc(layout) };
    if !block.is_null() {
      Self::account(layout.size() as isize);
    }
    block
  }

  unsafe fn dealloc(&self, block: *mut u8, layout: Layout) {
    Self::account(-(layout.size() as isize));
    unsafe { System.dealloc(block, layout) }
  }

  unsafe fn realloc(&self, block: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
    if Self::refuses(new_size) {
      return ptr::null_mut();
    }
    let moved = unsafe { System.realloc(block, layout, new_size) };
    if !moved.is_null() {
      Self::account(new_size as isize - layout.size() as isize);
    }
    moved
  }
}

struct Disarm;

impl Drop for Disarm {
  fn drop(&mut self) {
    RULE.with(|rule| rule.set(FailureRule::Never));
  }
}

/// Runs `f` with `rule` applied to the current thread's allocations.
pub fn with_failure_rule<R>(rule: FailureRule, f: impl FnOnce() -> R) -> R {
  RULE.with(|current| current.set(rule));
  let _disarm = Disarm;
  f()
}

/// Net bytes allocated by the current thread and not yet freed by it.
pub fn live_bytes() -> isize {
  LIVE_BYTES.with(Cell::get)
}
