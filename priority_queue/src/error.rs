use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriorityQueueError {
    #[error("priority queue is empty")]
    Empty,
    #[error("no entry with priority {priority}")]
    NotFound { priority: i32 },
    #[error("priority queue is full (capacity {capacity})")]
    Full { capacity: usize },
    #[error("cannot allocate a priority queue with capacity {capacity}")]
    CapacityOverflow { capacity: usize },
}

pub type Result<T> = std::result::Result<T, PriorityQueueError>;
