//! An ordered set implemented with an AVL tree.

use std::borrow::Borrow;
use std::fmt;
use std::mem;

use crate::order::Identity;
use crate::tree::{self, AvlTree};

pub use crate::tree::Iter;

/// A position in an [`AvlSet`].
pub type Cursor<'a, T> = tree::Cursor<'a, T, Identity>;

/// A position in an [`AvlSet`] that can insert and erase values.
pub type CursorMut<'a, T> = tree::CursorMut<'a, T, Identity>;

/// An owning iterator over the values of a set.
pub type IntoIter<T> = tree::IntoIter<T, Identity>;

/// An ordered set implemented with an AVL tree.
///
/// ```
/// use avl_containers::AvlSet;
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(1);
/// set.insert(2);
/// assert_eq!(set.get(&1), Some(&1));
/// set.remove(&1);
/// assert!(set.get(&1).is_none());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AvlSet<T> {
    tree: AvlTree<T, Identity>,
}

impl<T: Ord> AvlSet<T> {
    /// Returns a reference to the value in the set that is equal to the given value.
    ///
    /// The value may be any borrowed form of the set's value type, but the ordering
    /// on the borrowed form *must* match the ordering on the value type.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get(value)
    }

    /// Returns true if the set contains a value.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(value)
    }

    /// Returns a cursor at the given value, or at the end if it is absent.
    pub fn find<Q>(&self, value: &Q) -> Cursor<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(value)
    }

    /// Returns a mutable cursor at the given value, or at the end if it is absent.
    /// Use [`CursorMut::remove_current`] to erase the value at that position.
    pub fn find_mut<Q>(&mut self, value: &Q) -> CursorMut<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find_mut(value)
    }

    /// Returns a cursor at the first value not less than the given one.
    pub fn lower_bound<Q>(&self, value: &Q) -> Cursor<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.lower_bound(value)
    }

    /// Returns a cursor at the first value greater than the given one.
    pub fn upper_bound<Q>(&self, value: &Q) -> Cursor<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.upper_bound(value)
    }

    /// Inserts a value into the set.
    /// Returns whether the value was newly inserted; an equal value is never replaced.
    pub fn insert(&mut self, value: T) -> bool {
        self.tree.insert(value).1
    }

    /// Removes a value from the set.
    /// Returns whether the value was previously in the set.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(value).is_some()
    }

    /// Removes a value from the set.
    /// Returns the value if it was previously in the set.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(value)
    }

    /// Moves every value of `other` that is absent from `self` into `self`.
    /// Values already present in `self` are left behind in `other`.
    pub fn merge(&mut self, other: &mut Self) {
        self.tree.merge(&mut other.tree);
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        self.tree.check_consistency()
    }
}

impl<T> AvlSet<T> {
    /// Creates an empty set.
    /// No memory is allocated until the first value is inserted.
    pub const fn new() -> Self {
        Self {
            tree: AvlTree::new(),
        }
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns the theoretical maximum number of elements.
    pub fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    /// Clears the set, deallocating all memory.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Exchanges the contents of two sets.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns the smallest value.
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns the largest value.
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Removes and returns the smallest value.
    pub fn pop_first(&mut self) -> Option<T> {
        self.tree.pop_first()
    }

    /// Removes and returns the largest value.
    pub fn pop_last(&mut self) -> Option<T> {
        self.tree.pop_last()
    }

    /// Gets an iterator over the values of the set in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }

    /// Returns a cursor at the smallest value.
    pub fn begin(&self) -> Cursor<'_, T> {
        self.tree.begin()
    }

    /// Returns a cursor at the one-past-the-end position.
    pub fn end(&self) -> Cursor<'_, T> {
        self.tree.end()
    }

    /// Returns a mutable cursor at the smallest value.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        self.tree.begin_mut()
    }
}

impl<T> Default for AvlSet<T> {
    /// Creates an empty set.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for AvlSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlSet<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<T: Ord> Extend<T> for AvlSet<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.tree.extend(iter);
    }
}

impl<'a, T> Extend<&'a T> for AvlSet<T>
where
    T: Ord + Copy + 'a,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().copied());
    }
}
