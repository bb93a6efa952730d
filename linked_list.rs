//! Doubly-linked list with index-addressed access.
//!
//! Nodes live in an [`Arena`] and point at each other through handles: the
//! successor link runs head to tail, the ancestor link runs back from tail to
//! head. Indexed operations always walk forward from the head, so they cost
//! O(n) each; use [`LinkedList::iter`] or [`LinkedList::each`] for full scans.

use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

use crate::arena::{Arena, Handle};
use crate::error::{Error, Result};

/// A doubly-linked list node.
struct Node<T> {
    value: T,
    ancestor: Option<Handle>,
    successor: Option<Handle>,
}

/// A doubly-linked list.
pub struct LinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<Handle>,
    tail: Option<Handle>,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        LinkedList {
            nodes: Arena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the length of the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `index` addresses an existing element.
    pub fn in_range(&self, index: usize) -> bool {
        index < self.len()
    }

    /// Appends a value as the new tail. O(1).
    pub fn append(&mut self, value: T) {
        let node = self.nodes.insert(Node {
            value,
            ancestor: self.tail,
            successor: None,
        });

        match self.tail {
            Some(tail) => self.nodes[tail].successor = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);

        trace!(len = self.len(), "appended to linked list");
    }

    /// Returns the value at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_range(index)?;
        Ok(&self.nodes[self.node_at(index)].value)
    }

    /// Returns a mutable reference to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_range(index)?;
        let node = self.node_at(index);
        Ok(&mut self.nodes[node].value)
    }

    /// Inserts `value` so that it ends up at `index`, shifting later elements
    /// back by one. `index == len` is an append.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index == self.len() {
            self.append(value);
            return Ok(());
        }
        self.check_range(index)?;

        let current = self.node_at(index);
        let ancestor = self.nodes[current].ancestor;
        let inserted = self.nodes.insert(Node {
            value,
            ancestor,
            successor: Some(current),
        });

        match ancestor {
            Some(ancestor) => self.nodes[ancestor].successor = Some(inserted),
            None => self.head = Some(inserted),
        }
        self.nodes[current].ancestor = Some(inserted);

        trace!(index, len = self.len(), "inserted into linked list");
        Ok(())
    }

    /// Removes and returns the value at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_range(index)?;

        let node = self.node_at(index);
        let value = self.unlink(node);

        trace!(index, len = self.len(), "removed from linked list");
        Ok(value)
    }

    /// Returns the first value, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|head| &self.nodes[head].value)
    }

    /// Returns the last value, if any.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|tail| &self.nodes[tail].value)
    }

    /// Calls `visit` on every value from head to tail.
    pub fn each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visit);
    }

    /// Calls `visit` on every value from tail to head.
    pub fn each_reverse<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().rev().for_each(visit);
    }

    /// Iterates from head to tail; `.rev()` walks the ancestor links instead.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Returns a new list holding the same values in reverse order.
    pub fn reverse(&self) -> LinkedList<T>
    where
        T: Clone,
    {
        let mut reversed = LinkedList::with_capacity(self.len());
        self.each_reverse(|value| reversed.append(value.clone()));
        reversed
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;

        trace!("cleared linked list");
    }

    fn check_range(&self, index: usize) -> Result<()> {
        if self.in_range(index) {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    /// Walks forward from the head. Callers check the range first.
    fn node_at(&self, index: usize) -> Handle {
        let mut current = self.head;
        for _ in 0..index {
            current = current.and_then(|node| self.nodes[node].successor);
        }
        match current {
            Some(node) => node,
            None => unreachable!("index {index} checked against length {}", self.len()),
        }
    }

    fn unlink(&mut self, node: Handle) -> T {
        let Some(Node {
            value,
            ancestor,
            successor,
        }) = self.nodes.remove(node)
        else {
            unreachable!("linked list node {node:?} is not live");
        };

        match ancestor {
            Some(ancestor) => self.nodes[ancestor].successor = successor,
            None => self.head = successor,
        }
        match successor {
            Some(successor) => self.nodes[successor].ancestor = ancestor,
            None => self.tail = ancestor,
        }

        value
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front?];
        self.front = node.successor;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.back?];
        self.back = node.ancestor;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over a [`LinkedList`].
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let head = self.0.head?;
        Some(self.0.unlink(head))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        let tail = self.0.tail?;
        Some(self.0.unlink(tail))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for LinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for LinkedList<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}
