//! Positions in a tree and the iterators built on them.
//!
//! A cursor references either a node or the one-past-the-end position.
//! Rotations rewire links but never move or reallocate nodes, so a
//! position survives every insertion and every erasure except that of
//! its own node.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr;

use super::{next, prev, AvlTree, Link};
use crate::order::Order;

/// A read-only position in an [`AvlTree`].
pub struct Cursor<'a, T, O> {
    current: Link<T>,
    tree: &'a AvlTree<T, O>,
}

/// A position in an [`AvlTree`] that can insert into and erase from the tree.
pub struct CursorMut<'a, T, O> {
    current: Link<T>,
    tree: &'a mut AvlTree<T, O>,
}

/// An iterator over the items of a tree in ascending order.
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<&'a T>,
}

/// An iterator over mutable items of a tree. Kept crate-private, since
/// changing an item's key would break the ordering.
pub(crate) struct IterMut<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<&'a mut T>,
}

/// An owning iterator over the items of a tree in ascending order.
pub struct IntoIter<T, O> {
    tree: AvlTree<T, O>,
}

impl<'a, T, O> Cursor<'a, T, O> {
    pub(super) fn new(tree: &'a AvlTree<T, O>, current: Link<T>) -> Self {
        Self { current, tree }
    }

    /// Returns the item at the cursor, or `None` at the end.
    pub fn get(&self) -> Option<&'a T> {
        self.current
            .map(|node_ptr| unsafe { &(*node_ptr.as_ptr()).item })
    }

    /// Returns true if the cursor is at the one-past-the-end position.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Moves to the next item, or to the end after the largest item.
    /// Stays put at the end.
    pub fn move_next(&mut self) {
        if let Some(node_ptr) = self.current {
            self.current = unsafe { next(node_ptr) };
        }
    }

    /// Moves to the previous item. From the end this is the largest item.
    /// Stays put at the smallest item.
    pub fn move_prev(&mut self) {
        self.current = step_back(self.current, self.tree.last);
    }

    /// Returns the item after the cursor without moving it.
    pub fn peek_next(&self) -> Option<&'a T> {
        let node_ptr = self.current?;
        unsafe { next(node_ptr).map(|next_ptr| &(*next_ptr.as_ptr()).item) }
    }

    /// Returns the item before the cursor without moving it.
    pub fn peek_prev(&self) -> Option<&'a T> {
        let prev_ptr = match self.current {
            None => self.tree.last?,
            Some(node_ptr) => unsafe { prev(node_ptr)? },
        };
        Some(unsafe { &(*prev_ptr.as_ptr()).item })
    }
}

impl<T, O> Clone for Cursor<'_, T, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, O> Copy for Cursor<'_, T, O> {}

impl<T, O> PartialEq for Cursor<'_, T, O> {
    /// Cursors are equal if they are at the same position of the same tree.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.current == other.current
    }
}

impl<T, O> Eq for Cursor<'_, T, O> {}

impl<T: fmt::Debug, O> fmt::Debug for Cursor<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.get()).finish()
    }
}

impl<'a, T, O> CursorMut<'a, T, O> {
    pub(super) fn new(tree: &'a mut AvlTree<T, O>, current: Link<T>) -> Self {
        Self { current, tree }
    }

    /// Returns the item at the cursor, or `None` at the end.
    pub fn get(&self) -> Option<&T> {
        self.current
            .map(|node_ptr| unsafe { &(*node_ptr.as_ptr()).item })
    }

    pub(crate) fn get_mut(&mut self) -> Option<&mut T> {
        self.current
            .map(|node_ptr| unsafe { &mut (*node_ptr.as_ptr()).item })
    }

    pub(crate) fn into_item_mut(self) -> Option<&'a mut T> {
        self.current
            .map(|node_ptr| unsafe { &mut (*node_ptr.as_ptr()).item })
    }

    /// Returns true if the cursor is at the one-past-the-end position.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Moves to the next item, or to the end after the largest item.
    /// Stays put at the end.
    pub fn move_next(&mut self) {
        if let Some(node_ptr) = self.current {
            self.current = unsafe { next(node_ptr) };
        }
    }

    /// Moves to the previous item. From the end this is the largest item.
    /// Stays put at the smallest item.
    pub fn move_prev(&mut self) {
        self.current = step_back(self.current, self.tree.last);
    }

    /// Returns the item after the cursor without moving it.
    pub fn peek_next(&self) -> Option<&T> {
        self.as_cursor().peek_next()
    }

    /// Returns the item before the cursor without moving it.
    pub fn peek_prev(&self) -> Option<&T> {
        self.as_cursor().peek_prev()
    }

    /// Returns a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T, O> {
        Cursor::new(self.tree, self.current)
    }

    /// Erases the item at the cursor and moves to its successor.
    /// Returns `None` and does nothing at the end.
    pub fn remove_current(&mut self) -> Option<T> {
        let node_ptr = self.current?;
        self.current = unsafe { next(node_ptr) };
        Some(self.tree.erase(node_ptr))
    }
}

impl<'a, T, O: Order<T>> CursorMut<'a, T, O> {
    /// Inserts an item into the tree without moving the cursor.
    /// Returns false if an item with an equal key was already present.
    ///
    /// # Panics
    ///
    /// Panics if the tree already holds [`AvlTree::max_size`] items.
    pub fn insert(&mut self, item: T) -> bool {
        self.tree.insert_or_panic(item).1
    }
}

impl<T: fmt::Debug, O> fmt::Debug for CursorMut<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.get()).finish()
    }
}

fn step_back<T>(current: Link<T>, last: Link<T>) -> Link<T> {
    match current {
        None => last,
        Some(node_ptr) => unsafe { prev(node_ptr) }.or(current),
    }
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(head: Link<T>, tail: Link<T>, len: usize) -> Self {
        Self {
            head,
            tail,
            len,
            _marker: PhantomData,
        }
    }
}

// Auto derived clone seems to have an invalid type bound of T: Clone
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.head, self.tail, self.len)
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let head_ptr = self.head?;
        self.len -= 1;
        self.head = unsafe { next(head_ptr) };
        Some(unsafe { &(*head_ptr.as_ptr()).item })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let tail_ptr = self.tail?;
        self.len -= 1;
        self.tail = unsafe { prev(tail_ptr) };
        Some(unsafe { &(*tail_ptr.as_ptr()).item })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(head: Link<T>, tail: Link<T>, len: usize) -> Self {
        Self {
            head,
            tail,
            len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let head_ptr = self.head?;
        self.len -= 1;
        self.head = unsafe { next(head_ptr) };
        Some(unsafe { &mut (*head_ptr.as_ptr()).item })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let tail_ptr = self.tail?;
        self.len -= 1;
        self.tail = unsafe { prev(tail_ptr) };
        Some(unsafe { &mut (*tail_ptr.as_ptr()).item })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T, O> IntoIter<T, O> {
    pub(super) fn new(tree: AvlTree<T, O>) -> Self {
        Self { tree }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for IntoIter<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tree.iter()).finish()
    }
}

impl<T, O> Iterator for IntoIter<T, O> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<T, O> DoubleEndedIterator for IntoIter<T, O> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.pop_last()
    }
}

impl<T, O> ExactSizeIterator for IntoIter<T, O> {}

impl<T, O> FusedIterator for IntoIter<T, O> {}
