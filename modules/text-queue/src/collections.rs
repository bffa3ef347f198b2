mod text_queue;

pub use text_queue::{TextQueue, TextQueueConfig, TextQueueError, TextQueueIter};
