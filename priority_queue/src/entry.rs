use serde::{Deserialize, Serialize};

/// A value together with the priority it was pushed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<E> {
    pub value: E,
    pub priority: i32,
}

impl<E> Entry<E> {
    pub fn new(value: E, priority: i32) -> Self {
        Self { value, priority }
    }
}

impl<E> From<(E, i32)> for Entry<E> {
    fn from((value, priority): (E, i32)) -> Self {
        Self::new(value, priority)
    }
}
