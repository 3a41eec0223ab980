use super::{PriorityQueue, PriorityQueueError, Result};

impl<E> PriorityQueue<E> {
    // assumes the queue is resizable
    pub(super) fn grow(&mut self) {
        let capacity = self.capacity.saturating_mul(2).max(1);
        log::debug!(
            "growing priority queue from {} to {} slots",
            self.capacity,
            capacity
        );
        self.resize(capacity);
    }

    pub(super) fn shrink_if_sparse(&mut self) {
        if self.config.bounded {
            return;
        }
        let floor = self.config.shrink_floor;
        if self.capacity > floor && self.entries.len() < self.capacity / 4 {
            let capacity = floor.max(self.capacity / 2);
            log::debug!(
                "shrinking priority queue from {} to {} slots ({} in use)",
                self.capacity,
                capacity,
                self.entries.len()
            );
            self.resize(capacity);
        }
    }

    // assumes every live entry fits in the new capacity
    pub(super) fn resize(&mut self, capacity: usize) {
        let len = self.entries.len();
        debug_assert!(capacity >= len);
        if capacity > self.entries.capacity() {
            self.entries.reserve_exact(capacity - len);
        } else {
            self.entries.shrink_to(capacity);
        }
        self.capacity = capacity;
    }

    // like `resize`, but an allocation the system cannot satisfy is an error
    pub(super) fn try_resize(&mut self, capacity: usize) -> Result<()> {
        let len = self.entries.len();
        debug_assert!(capacity >= len);
        if capacity > self.entries.capacity() {
            self.entries
                .try_reserve_exact(capacity - len)
                .map_err(|e| {
                    log::warn!("cannot reserve {} slots: {}", capacity, e);
                    PriorityQueueError::CapacityOverflow { capacity }
                })?;
        } else {
            self.entries.shrink_to(capacity);
        }
        self.capacity = capacity;
        Ok(())
    }
}
