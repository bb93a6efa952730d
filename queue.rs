//! First-in-first-out queue over a singly-linked chain.
//!
//! `front` is where values leave and `back` is where they join. Both are
//! cleared together when the last value is popped, so a drained queue never
//! holds a handle to a removed node.

use std::fmt;

use tracing::trace;

use crate::arena::{Arena, Handle};
use crate::error::{Error, Result};

struct Node<T> {
    value: T,
    successor: Option<Handle>,
}

/// A first-in-first-out queue.
pub struct Queue<T> {
    nodes: Arena<Node<T>>,
    front: Option<Handle>,
    back: Option<Handle>,
}

impl<T> Queue<T> {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Queue {
            nodes: Arena::with_capacity(capacity),
            front: None,
            back: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pushes a value onto the back of the queue. O(1).
    pub fn push(&mut self, value: T) {
        let node = self.nodes.insert(Node {
            value,
            successor: None,
        });

        match self.back {
            Some(back) => self.nodes[back].successor = Some(node),
            None => self.front = Some(node),
        }
        self.back = Some(node);

        trace!(len = self.len(), "pushed onto queue");
    }

    /// Pops the oldest value off the front of the queue. O(1).
    pub fn pop(&mut self) -> Result<T> {
        let front = self.front.ok_or_else(Error::empty)?;
        let Some(Node { value, successor }) = self.nodes.remove(front) else {
            unreachable!("queue front {front:?} is not live");
        };

        self.front = successor;
        if self.front.is_none() {
            self.back = None;
        }

        trace!(len = self.len(), "popped from queue");
        Ok(value)
    }

    /// Returns the oldest value without removing it.
    pub fn peek(&self) -> Result<&T> {
        let front = self.front.ok_or_else(Error::empty)?;
        Ok(&self.nodes[front].value)
    }

    pub fn peek_mut(&mut self) -> Result<&mut T> {
        let front = self.front.ok_or_else(Error::empty)?;
        Ok(&mut self.nodes[front].value)
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.front,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.front = None;
        self.back = None;

        trace!("cleared queue");
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Borrowing iterator over a [`Queue`], front first.
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    current: Option<Handle>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        let node = &nodes[self.current?];
        self.current = node.successor;
        Some(&node.value)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Queue<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Queue<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}
