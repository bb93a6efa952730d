//! Last-in-first-out stack over a chain of parent links.

use std::fmt;

use tracing::trace;

use crate::arena::{Arena, Handle};
use crate::error::{Error, Result};

struct Node<T> {
    value: T,
    parent: Option<Handle>,
}

/// A last-in-first-out stack.
pub struct Stack<T> {
    nodes: Arena<Node<T>>,
    top: Option<Handle>,
}

impl<T> Stack<T> {
    /// Creates a new empty stack.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            nodes: Arena::with_capacity(capacity),
            top: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pushes a value onto the top of the stack. O(1).
    pub fn push(&mut self, value: T) {
        let parent = self.top;
        self.top = Some(self.nodes.insert(Node { value, parent }));

        trace!(len = self.len(), "pushed onto stack");
    }

    /// Pops the most recently pushed value. O(1).
    pub fn pop(&mut self) -> Result<T> {
        let top = self.top.ok_or_else(Error::empty)?;
        let Some(Node { value, parent }) = self.nodes.remove(top) else {
            unreachable!("stack top {top:?} is not live");
        };
        self.top = parent;

        trace!(len = self.len(), "popped from stack");
        Ok(value)
    }

    /// Returns the most recently pushed value without removing it.
    pub fn peek(&self) -> Result<&T> {
        let top = self.top.ok_or_else(Error::empty)?;
        Ok(&self.nodes[top].value)
    }

    pub fn peek_mut(&mut self) -> Result<&mut T> {
        let top = self.top.ok_or_else(Error::empty)?;
        Ok(&mut self.nodes[top].value)
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.top,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.top = None;

        trace!("cleared stack");
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let mut values: Vec<T> = self.iter().cloned().collect();
        values.reverse();
        values.into_iter().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

/// Pushes in iteration order, so the last item ends up on top.
impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Borrowing iterator over a [`Stack`], top first.
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    current: Option<Handle>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        let node = &nodes[self.current?];
        self.current = node.parent;
        Some(&node.value)
    }
}

// Serialized top first; deserializing pushes in reverse to restore the order.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Stack<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Stack<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(values.into_iter().rev().collect())
    }
}
