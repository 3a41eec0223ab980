// Index arithmetic and repair routines for a max-heap laid out in a slice:
// the children of node `i` live at `2i + 1` and `2i + 2`.

use super::Entry;

pub const ROOT: usize = 0;

enum TreeDir {
    Left,
    Right,
}

pub fn parent(node: usize) -> Option<usize> {
    if node == ROOT {
        None
    } else {
        Some((node - 1) / 2)
    }
}

fn child(node: usize, dir: TreeDir, len: usize) -> Option<usize> {
    let child = match dir {
        TreeDir::Left => 2 * node + 1,
        TreeDir::Right => 2 * node + 2,
    };
    if child < len {
        Some(child)
    } else {
        None
    }
}

pub fn children(node: usize, len: usize) -> (Option<usize>, Option<usize>) {
    (
        child(node, TreeDir::Left, len),
        child(node, TreeDir::Right, len),
    )
}

// the child a sifted-down entry would be swapped with, if any
fn larger_child<E>(entries: &[Entry<E>], node: usize) -> Option<usize> {
    match children(node, entries.len()) {
        (None, _) => None,
        (Some(left), None) => Some(left),
        (Some(left), Some(right)) => {
            if entries[right].priority > entries[left].priority {
                Some(right)
            } else {
                Some(left)
            }
        }
    }
}

pub fn sift_up<E>(entries: &mut [Entry<E>], mut node: usize) {
    while let Some(parent) = parent(node) {
        if entries[node].priority <= entries[parent].priority {
            break;
        }
        entries.swap(node, parent);
        node = parent;
    }
}

pub fn sift_down<E>(entries: &mut [Entry<E>], mut node: usize) {
    while let Some(child) = larger_child(entries, node) {
        if entries[child].priority <= entries[node].priority {
            break;
        }
        entries.swap(node, child);
        node = child;
    }
}

// Floyd's construction: sift down every internal node, last one first
pub fn heapify<E>(entries: &mut [Entry<E>]) {
    let Some(last) = entries.len().checked_sub(1) else {
        return;
    };
    if let Some(last_internal) = parent(last) {
        for node in (ROOT..=last_internal).rev() {
            sift_down(entries, node);
        }
    }
}

#[cfg(test)]
pub fn is_heap<E>(entries: &[Entry<E>]) -> bool {
    (1..entries.len()).all(|node| {
        // parent always exists for non-root nodes
        parent(node).map_or(true, |parent| {
            entries[parent].priority >= entries[node].priority
        })
    })
}
