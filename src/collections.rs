//! Collection types built around immutable, copy-on-write storage.

mod element;
pub mod queue;

pub use element::Element;
pub use queue::{PersistentQueue, QueueError};
