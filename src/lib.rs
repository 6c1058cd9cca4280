//! Ordered containers built on an AVL tree.
//!
//! [`AvlTree`] is the balanced tree engine. Its nodes link to their parents,
//! so [`Cursor`]s walk forwards and backwards through the items without a
//! stack and stay valid across rotations. [`AvlSet`] stores values directly,
//! [`AvlMap`] stores key-value pairs ordered by key.
//!
//! ```
//! use avl_containers::{AvlMap, AvlSet};
//!
//! let mut set = AvlSet::from([1, 3, 5]);
//! let mut other = AvlSet::from([2, 3, 4]);
//! set.merge(&mut other);
//! assert!(set.iter().eq(&[1, 2, 3, 4, 5]));
//! assert!(other.iter().eq(&[3]));
//!
//! let mut map: AvlMap<&str, u32> = AvlMap::new();
//! *map.get_or_insert_default("apples") += 3;
//! assert_eq!(map.at(&"apples"), Ok(&3));
//! ```

mod error;
pub mod map;
mod order;
pub mod set;
pub mod tree;

pub use error::Error;
pub use map::AvlMap;
pub use order::{ByKey, Identity, Order};
pub use set::AvlSet;
pub use tree::{AvlTree, Cursor, CursorMut};

#[cfg(test)]
mod proptests;
