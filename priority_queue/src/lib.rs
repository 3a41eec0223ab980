//! A max-priority queue over `(value, priority)` pairs, stored as a binary
//! heap in one contiguous buffer that doubles when full and halves when
//! mostly empty.

mod config;
mod entry;
mod error;
mod heap;
mod impls;

pub use config::{QueueConfig, DEFAULT_CAPACITY, DEFAULT_SHRINK_FLOOR};
pub use entry::Entry;
pub use error::{PriorityQueueError, Result};
use impls::SavedQueue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SavedQueue<E>")]
pub struct PriorityQueue<E> {
    config: QueueConfig,
    // logical capacity; `entries` is kept allocated to exactly this size
    capacity: usize,
    entries: Vec<Entry<E>>,
}
