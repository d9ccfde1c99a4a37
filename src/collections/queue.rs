//! Persistent FIFO queue built on a full-copy array strategy.

mod persistent_queue;
mod queue_error;

pub use persistent_queue::PersistentQueue;
pub use queue_error::QueueError;
