//! Ordering capabilities for tree items.
//!
//! A tree never compares its items directly. It projects each item onto a
//! key through an [`Order`] and compares keys with `<` only, so two keys are
//! equal when neither is less than the other.

/// Projects a stored item onto the key it is ordered by.
pub trait Order<T> {
    type Key: Ord + ?Sized;

    fn key(item: &T) -> &Self::Key;
}

/// Orders items by themselves. Used by [`AvlSet`](crate::AvlSet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: Ord> Order<T> for Identity {
    type Key = T;

    #[inline]
    fn key(item: &T) -> &T {
        item
    }
}

/// Orders key-value pairs by their first component. Used by [`AvlMap`](crate::AvlMap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByKey;

impl<K: Ord, V> Order<(K, V)> for ByKey {
    type Key = K;

    #[inline]
    fn key(item: &(K, V)) -> &K {
        &item.0
    }
}
