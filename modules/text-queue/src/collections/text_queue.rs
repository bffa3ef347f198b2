//! Linked text queue backed by an index arena.

mod arena_slot;
mod merge_sort;
mod node_arena;
mod output_buffer;
mod queue_node;
mod text_queue_config;
mod text_queue_error;
mod text_queue_iter;
mod text_queue_struct;

pub use text_queue_config::TextQueueConfig;
pub use text_queue_error::TextQueueError;
pub use text_queue_iter::TextQueueIter;
pub use text_queue_struct::TextQueue;
