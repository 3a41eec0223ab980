use serde::{Deserialize, Serialize};

pub const DEFAULT_CAPACITY: usize = 10;
pub const DEFAULT_SHRINK_FLOOR: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Number of entries allocated up front. Zero defers allocation to the
    /// first push.
    pub initial_capacity: usize,
    /// A resizable queue never shrinks below this many slots.
    pub shrink_floor: usize,
    /// Bounded queues keep their initial capacity and reject pushes once full
    /// instead of growing.
    pub bounded: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            shrink_floor: DEFAULT_SHRINK_FLOOR,
            bounded: false,
        }
    }
}

impl QueueConfig {
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    pub fn bounded(capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
            bounded: true,
            ..Self::default()
        }
    }
}
