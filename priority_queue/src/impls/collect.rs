use super::heap;
use super::{Entry, PriorityQueue, PriorityQueueError, QueueConfig, Result};
use serde::Deserialize;

impl<E> PriorityQueue<E> {
    // capacity is raised to fit every entry if it is too small
    fn from_parts(config: QueueConfig, capacity: usize, mut entries: Vec<Entry<E>>) -> Result<Self> {
        heap::heapify(&mut entries);
        let capacity = capacity.max(entries.len());
        let mut queue = Self {
            config,
            capacity: entries.len(),
            entries,
        };
        queue.try_resize(capacity)?;
        Ok(queue)
    }

    /// Pushes every pair in order. A bounded queue stops at the first entry
    /// that does not fit and returns `Full`; the entries before it stay queued.
    pub fn try_extend<I: IntoIterator<Item = (E, i32)>>(&mut self, iter: I) -> Result<()> {
        for (value, priority) in iter {
            self.push(value, priority)?;
        }
        Ok(())
    }
}

impl<E> From<Vec<Entry<E>>> for PriorityQueue<E> {
    fn from(mut entries: Vec<Entry<E>>) -> Self {
        let config = QueueConfig::default();
        heap::heapify(&mut entries);
        // the entries are already allocated, so at most the default capacity
        // is reserved on top of them
        let capacity = config.initial_capacity.max(entries.len());
        let mut queue = Self {
            config,
            capacity: entries.len(),
            entries,
        };
        queue.resize(capacity);
        queue
    }
}

impl<E> FromIterator<(E, i32)> for PriorityQueue<E> {
    fn from_iter<I: IntoIterator<Item = (E, i32)>>(iter: I) -> Self {
        iter.into_iter()
            .map(Entry::from)
            .collect::<Vec<_>>()
            .into()
    }
}

impl<E> Extend<(E, i32)> for PriorityQueue<E> {
    // pushes one at a time so a bounded queue stops at its capacity
    fn extend<I: IntoIterator<Item = (E, i32)>>(&mut self, iter: I) {
        if let Err(e) = self.try_extend(iter) {
            log::warn!("{}, dropping remaining entries", e);
        }
    }
}

// Deserialization goes through this type so that whatever arrives is
// re-heapified, and a capacity that cannot be allocated is a serde error.
#[derive(Deserialize)]
pub struct SavedQueue<E> {
    config: QueueConfig,
    capacity: usize,
    entries: Vec<Entry<E>>,
}

impl<E> TryFrom<SavedQueue<E>> for PriorityQueue<E> {
    type Error = PriorityQueueError;

    fn try_from(saved: SavedQueue<E>) -> Result<Self> {
        Self::from_parts(saved.config, saved.capacity, saved.entries)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Entry, PriorityQueue, PriorityQueueError, QueueConfig};

    #[test]
    fn collect_builds_a_heap() {
        let queue: PriorityQueue<char> = "heapify"
            .chars()
            .zip([3, 9, 1, 4, 7, 2, 8])
            .collect();
        assert_eq!(queue.len(), 7);
        assert_eq!(queue.capacity(), 10);
        assert_eq!(queue.top(), Ok(&'e'));
        assert_eq!(
            queue.into_vec_by_priority(),
            vec!['e', 'y', 'i', 'p', 'h', 'f', 'a']
        );
    }

    #[test]
    fn from_entries_keeps_every_entry() {
        let entries: Vec<Entry<u32>> = (0..25).map(|i| Entry::new(i, i as i32 % 5)).collect();
        let queue = PriorityQueue::from(entries);
        assert_eq!(queue.len(), 25);
        assert_eq!(queue.capacity(), 25);
        assert_eq!(queue.top_priority(), Ok(4));
    }

    #[test]
    fn extend_grows_a_resizable_queue() {
        let mut queue = PriorityQueue::with_capacity(2);
        queue.extend((0..9).map(|i| (i, i)));
        assert_eq!(queue.len(), 9);
        assert_eq!(queue.capacity(), 16);
        assert_eq!(queue.top(), Ok(&8));
    }

    #[test]
    fn extend_stops_when_a_bounded_queue_fills() {
        let mut queue = PriorityQueue::with_config(QueueConfig::bounded(3));
        queue.extend([(1, 1), (5, 5), (2, 2), (9, 9)]);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.top(), Ok(&5));
    }

    #[test]
    fn try_extend_reports_the_entries_that_did_not_fit() {
        let mut queue = PriorityQueue::with_config(QueueConfig::bounded(2));
        assert_eq!(
            queue.try_extend([(1, 1), (5, 5), (2, 2)]),
            Err(PriorityQueueError::Full { capacity: 2 })
        );
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.into_vec_by_priority(), vec![5, 1]);

        let mut queue = PriorityQueue::with_capacity(1);
        assert_eq!(queue.try_extend((0..5).map(|i| (i, i))), Ok(()));
        assert_eq!(queue.len(), 5);
    }

    #[test]
    fn bincode_round_trip_keeps_order_and_config() {
        let mut queue = PriorityQueue::with_config(QueueConfig::bounded(6));
        queue.extend([("b", 2), ("d", 4), ("a", 1), ("c", 3)]);
        let bytes = bincode::serialize(&queue).unwrap();
        let restored: PriorityQueue<String> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(restored.config(), &QueueConfig::bounded(6));
        assert_eq!(restored.capacity(), 6);
        assert_eq!(restored.into_vec_by_priority(), vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn deserialized_entries_are_reheapified() {
        #[derive(serde::Serialize)]
        struct Raw {
            config: QueueConfig,
            capacity: usize,
            entries: Vec<Entry<i32>>,
        }
        let raw = Raw {
            config: QueueConfig::default(),
            capacity: 2,
            entries: vec![Entry::new(1, 1), Entry::new(2, 2), Entry::new(3, 3)],
        };
        let bytes = bincode::serialize(&raw).unwrap();
        let queue: PriorityQueue<i32> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(queue.capacity(), 3);
        assert_eq!(queue.top(), Ok(&3));
        assert_eq!(queue.into_vec_by_priority(), vec![3, 2, 1]);
    }

    #[test]
    fn unallocatable_saved_capacity_fails_to_deserialize() {
        #[derive(serde::Serialize)]
        struct Raw {
            config: QueueConfig,
            capacity: usize,
            entries: Vec<Entry<i32>>,
        }
        let raw = Raw {
            config: QueueConfig::default(),
            capacity: usize::MAX,
            entries: vec![Entry::new(1, 1)],
        };
        let bytes = bincode::serialize(&raw).unwrap();
        let error = bincode::deserialize::<PriorityQueue<i32>>(&bytes).unwrap_err();
        assert!(error
            .to_string()
            .contains("cannot allocate a priority queue with capacity"));
    }
}
