mod collect;
mod find;
mod resize;

pub use collect::SavedQueue;

use super::heap::{self, ROOT};
use super::{Entry, PriorityQueue, PriorityQueueError, QueueConfig, Result};

impl<E> PriorityQueue<E> {
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(QueueConfig::with_capacity(capacity))
    }

    /// Panics if the initial capacity cannot be allocated, like
    /// `Vec::with_capacity`. Use [`Self::try_with_config`] for capacities that
    /// come from user input.
    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            config,
            capacity: config.initial_capacity,
            entries: Vec::with_capacity(config.initial_capacity),
        }
    }

    pub fn try_with_config(config: QueueConfig) -> Result<Self> {
        let mut queue = Self {
            config,
            capacity: 0,
            entries: Vec::new(),
        };
        queue.try_resize(config.initial_capacity)?;
        Ok(queue)
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Only a bounded queue can be full; a resizable one grows on push.
    pub fn is_full(&self) -> bool {
        self.config.bounded && self.entries.len() == self.capacity
    }

    pub fn top(&self) -> Result<&E> {
        self.top_entry().map(|entry| &entry.value)
    }

    pub fn top_priority(&self) -> Result<i32> {
        self.top_entry().map(|entry| entry.priority)
    }

    pub fn top_entry(&self) -> Result<&Entry<E>> {
        self.entries.first().ok_or(PriorityQueueError::Empty)
    }

    pub fn push(&mut self, value: E, priority: i32) -> Result<()> {
        if self.entries.len() == self.capacity {
            if self.config.bounded {
                return Err(PriorityQueueError::Full {
                    capacity: self.capacity,
                });
            }
            self.grow();
        }
        log::trace!("push with priority {}", priority);
        self.entries.push(Entry::new(value, priority));
        let last = self.entries.len() - 1;
        heap::sift_up(&mut self.entries, last);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<E> {
        self.pop_entry().map(|entry| entry.value)
    }

    pub fn pop_entry(&mut self) -> Result<Entry<E>> {
        if self.entries.is_empty() {
            return Err(PriorityQueueError::Empty);
        }
        // the last entry takes the root's place, then sinks to where it belongs
        let top = self.entries.swap_remove(ROOT);
        heap::sift_down(&mut self.entries, ROOT);
        log::trace!("pop with priority {}", top.priority);
        self.shrink_if_sparse();
        Ok(top)
    }

    /// Drops every entry. A resizable queue also returns to its initial
    /// capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
        if !self.config.bounded {
            self.resize(self.config.initial_capacity);
        }
    }

    /// Entries in buffer order, which is not priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<E>> {
        self.entries.iter()
    }

    /// Consumes the queue, yielding its values highest priority first.
    pub fn into_vec_by_priority(self) -> Vec<E> {
        let mut entries = self.entries;
        let mut values = Vec::with_capacity(entries.len());
        while !entries.is_empty() {
            let top = entries.swap_remove(ROOT);
            heap::sift_down(&mut entries, ROOT);
            values.push(top.value);
        }
        values
    }
}

impl<E> Default for PriorityQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E> IntoIterator for &'a PriorityQueue<E> {
    type Item = &'a Entry<E>;
    type IntoIter = std::slice::Iter<'a, Entry<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
