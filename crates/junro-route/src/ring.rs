//! Circular candidate ring: the pool of not-yet-placed route units.
//!
//! Nodes live in a fixed arena allocated up front from the input; the
//! `prev`/`next` index links thread the live nodes into a single
//! circular list. Removing a node relinks its neighbours in O(1) and
//! never shifts other entries, so indices handed out by [`Ring::iter`]
//! stay valid until the node itself is removed. The arena is dropped
//! wholesale when the planning call returns.

/// One arena slot. `item` is `None` once the node has been removed.
struct Node<T> {
    item: Option<T>,
    prev: usize,
    next: usize,
}

/// A circular doubly-linked list of candidates backed by an index arena.
///
/// Invariant: the live nodes (those with `item.is_some()`) form exactly
/// one circular list, or the ring is empty and `head` is `None`.
/// Traversal from the head visits live nodes in insertion order, which
/// is what makes first-seen tie-breaking deterministic.
pub(crate) struct Ring<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    live: usize,
}

impl<T> Ring<T> {
    /// Build a ring holding every item, linked in input order.
    pub(crate) fn new(items: Vec<T>) -> Self {
        let count = items.len();
        let mut nodes: Vec<Node<T>> = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| Node {
                item: Some(item),
                prev: i.saturating_sub(1),
                next: i + 1,
            })
            .collect();

        // Close the cycle between the first and last nodes.
        if let Some(last) = count.checked_sub(1) {
            nodes[0].prev = last;
            nodes[last].next = 0;
        }

        Self {
            nodes,
            head: if count == 0 { None } else { Some(0) },
            live: count,
        }
    }

    /// Number of candidates still in the ring.
    pub(crate) const fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` when every candidate has been removed.
    pub(crate) const fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Remove and return the candidate at the head of the ring.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.remove(head)
    }

    /// Remove the candidate at `index`, relinking its neighbours.
    ///
    /// Returns `None` if the slot was already removed. The head advances
    /// past a removed head so traversal always starts at a live node.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        let item = self.nodes.get_mut(index)?.item.take()?;
        let prev = self.nodes[index].prev;
        let next = self.nodes[index].next;
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;

        self.live -= 1;
        if self.live == 0 {
            self.head = None;
        } else if self.head == Some(index) {
            self.head = Some(next);
        }

        Some(item)
    }

    /// Iterate over the live candidates in ring order, yielding each
    /// node's arena index alongside the item.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            cursor: self.head,
            remaining: self.live,
        }
    }
}

/// Borrowing iterator over the live nodes of a [`Ring`].
pub(crate) struct Iter<'a, T> {
    ring: &'a Ring<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.cursor?;
        let node = self.ring.nodes.get(index)?;
        let item = node.item.as_ref()?;

        self.remaining -= 1;
        self.cursor = Some(node.next);
        Some((index, item))
    }
}
