#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::unnecessary_wraps)]
#![no_std]

//! Persistent (immutable) FIFO queue.
//!
//! Every mutating operation returns a new queue value and leaves the receiver untouched, so any
//! number of threads may hold references to the same queue and read it or derive new queues from
//! it without a lock. The backing store is copied in full on every `enqueue`/`dequeue`; the O(n)
//! cost per operation is the price of keeping every instance fully independent.

extern crate alloc;

pub mod collections;

pub use collections::{Element, PersistentQueue, QueueError};
