//! Linear collections: an index-addressable doubly-linked list, a stack and
//! a queue.
//!
//! Every collection keeps its nodes in an [`Arena`](arena::Arena) and links
//! them with handles, so no node is ever shared or reachable from outside
//! its owner. The only failure mode is [`Error::IndexOutOfRange`].
//!
//! ```
//! use linear_collections::LinkedList;
//!
//! let mut list: LinkedList<&str> = ["a", "b"].into_iter().collect();
//! list.insert(1, "X").unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["a", "X", "b"]);
//! assert!(list.get(3).is_err());
//! ```

pub mod arena;
mod error;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use error::{Error, Result};
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
