// Lookups ignore heap order and scan the whole buffer.

use super::{PriorityQueue, PriorityQueueError, Result};

impl<E> PriorityQueue<E> {
    pub fn find_by_priority(&self, priority: i32) -> Result<&E> {
        self.entries
            .iter()
            .find(|entry| entry.priority == priority)
            .map(|entry| &entry.value)
            .ok_or(PriorityQueueError::NotFound { priority })
    }

    pub fn contains_by_priority(&self, priority: i32) -> bool {
        self.entries.iter().any(|entry| entry.priority == priority)
    }
}

impl<E: PartialEq> PriorityQueue<E> {
    /// Priority of the first entry holding `value`, or `None` if there is no
    /// such entry.
    pub fn find_by_value(&self, value: &E) -> Option<i32> {
        self.entries
            .iter()
            .find(|entry| entry.value == *value)
            .map(|entry| entry.priority)
    }
}
