use alloc::vec::Vec;

use crate::collections::{Element, queue::QueueError};

/// Persistent FIFO queue backed by a full-copy array strategy.
///
/// Mutating operations take `&self` and return a new queue whose backing store is a fresh copy;
/// the receiver is never touched. Because no instance ever observes another instance's writes,
/// queue values can be shared across threads and derived from concurrently without any lock.
///
/// Each `enqueue`/`dequeue` costs O(n) time and space where n is the current length. This is a
/// deliberate trade of throughput for instance independence, not an oversight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistentQueue<T>
where
  T: Element, {
  items: Vec<T>,
}

impl<T> PersistentQueue<T>
where
  T: Element,
{
  /// Creates the canonical empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { items: Vec::new() }
  }

  /// Produces a new queue with `item` appended at the back.
  ///
  /// The receiver keeps its contents; the result owns a fresh copy of the backing store with the
  /// new element in the last position.
  #[must_use]
  pub fn enqueue(&self, item: T) -> Self {
    let mut items = Vec::with_capacity(self.items.len() + 1);
    items.extend_from_slice(&self.items);
    items.push(item);
    Self { items }
  }

  /// Checked form of [`enqueue`](Self::enqueue) for callers holding an optional value.
  ///
  /// `None` stands for the no-value sentinel and is never stored.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::NilElement`] when `item` is `None`; the receiver is left untouched.
  pub fn try_enqueue(&self, item: Option<T>) -> Result<Self, QueueError> {
    match item {
      | Some(item) => Ok(self.enqueue(item)),
      | None => Err(QueueError::NilElement),
    }
  }

  /// Produces a new queue with the front element removed.
  ///
  /// Dequeuing an empty queue is not an error: it yields a fresh empty queue. Otherwise the
  /// elements at index `1..` are copied into a new backing store with their order preserved.
  #[must_use]
  pub fn dequeue(&self) -> Self {
    match self.items.split_first() {
      | Some((_, rest)) => Self { items: rest.to_vec() },
      | None => Self::new(),
    }
  }

  /// Returns the front element, or `None` when the queue is empty.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    self.items.first()
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Indicates whether the queue is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Exposes the backing sequence, front first.
  #[must_use]
  pub fn as_slice(&self) -> &[T] {
    &self.items
  }
}

impl<T> Default for PersistentQueue<T>
where
  T: Element,
{
  fn default() -> Self {
    Self::new()
  }
}
