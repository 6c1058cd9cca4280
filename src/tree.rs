//! The AVL tree engine shared by [`AvlSet`](crate::AvlSet) and [`AvlMap`](crate::AvlMap).

use std::borrow::Borrow;
use std::cmp;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use tracing::trace;

use crate::error::Error;
use crate::order::{Identity, Order};

mod cursor;
pub(crate) use cursor::IterMut;
pub use cursor::{Cursor, CursorMut, IntoIter, Iter};

/// A height-balanced binary search tree of items ordered through `O`.
///
/// Every node keeps a link to its parent, so cursors step through the
/// in-order sequence without a stack. The one-past-the-end position is
/// represented by an empty link; the tree caches its maximum node so a
/// cursor at the end steps back to the last item in constant time.
///
/// ```
/// use avl_containers::AvlTree;
/// let mut tree = AvlTree::<i32>::new();
/// tree.insert(2);
/// tree.insert(1);
/// tree.insert(3);
/// let mut cursor = tree.end();
/// cursor.move_prev();
/// assert_eq!(cursor.get(), Some(&3));
/// ```
pub struct AvlTree<T, O = Identity> {
    root: Link<T>,
    last: Link<T>,
    num_nodes: usize,
    _marker: PhantomData<(Box<Node<T>>, fn() -> O)>,
}

struct Node<T> {
    item: T,
    left: Link<T>,
    right: Link<T>,
    parent: Link<T>,
    height: usize,
}

type NodePtr<T> = NonNull<Node<T>>;
type Link<T> = Option<NodePtr<T>>;
type LinkPtr<T> = NonNull<Link<T>>;

/// Where a new node is to be linked into the tree.
struct InsertPos<T> {
    parent: Link<T>,
    link_ptr: LinkPtr<T>,
    is_last: bool,
}

#[allow(clippy::enum_variant_names)]
enum Direction {
    FromParent,
    FromLeft,
    FromRight,
}

impl<T, O> AvlTree<T, O> {
    /// Creates an empty tree.
    /// No memory is allocated until the first item is inserted.
    pub const fn new() -> Self {
        Self {
            root: None,
            last: None,
            num_nodes: 0,
            _marker: PhantomData,
        }
    }

    /// Returns true if the tree contains no items.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of items in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the theoretical maximum number of items, bounded by the
    /// address space divided by the size of a node.
    pub fn max_size(&self) -> usize {
        isize::MAX as usize / mem::size_of::<Node<T>>()
    }

    /// Returns the number of levels of the tree; zero when empty.
    pub fn height(&self) -> usize {
        height_of(self.root)
    }

    /// Clears the tree, deallocating all nodes.
    pub fn clear(&mut self) {
        self.postorder(|node_ptr| unsafe { drop(Node::destroy(node_ptr)) });
        self.root = None;
        self.last = None;
        self.num_nodes = 0;
    }

    /// Returns the smallest item.
    pub fn first(&self) -> Option<&T> {
        self.first_node().map(|node_ptr| unsafe { &(*node_ptr.as_ptr()).item })
    }

    /// Returns the largest item.
    pub fn last(&self) -> Option<&T> {
        self.last.map(|node_ptr| unsafe { &(*node_ptr.as_ptr()).item })
    }

    /// Removes and returns the smallest item.
    pub fn pop_first(&mut self) -> Option<T> {
        let node_ptr = self.first_node()?;
        Some(self.erase(node_ptr))
    }

    /// Removes and returns the largest item.
    pub fn pop_last(&mut self) -> Option<T> {
        let node_ptr = self.last?;
        Some(self.erase(node_ptr))
    }

    /// Gets an iterator over the items in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.first_node(), self.last, self.num_nodes)
    }

    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.first_node(), self.last, self.num_nodes)
    }

    /// Returns a cursor at the smallest item, or at the end if the tree is empty.
    pub fn begin(&self) -> Cursor<'_, T, O> {
        Cursor::new(self, self.first_node())
    }

    /// Returns a cursor at the one-past-the-end position.
    pub fn end(&self) -> Cursor<'_, T, O> {
        Cursor::new(self, None)
    }

    /// Returns a mutable cursor at the smallest item, or at the end if the tree is empty.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T, O> {
        let first = self.first_node();
        CursorMut::new(self, first)
    }

    /// Returns a mutable cursor at the one-past-the-end position.
    pub fn end_mut(&mut self) -> CursorMut<'_, T, O> {
        CursorMut::new(self, None)
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self)
    where
        O: Order<T>,
    {
        unsafe {
            // Check root link
            if let Some(root_node_ptr) = self.root {
                assert!(root_node_ptr.as_ref().parent.is_none());
            }

            // Check tree nodes
            let mut num_nodes = 0;
            self.preorder(|node_ptr| {
                let node = node_ptr.as_ref();
                let node_key = O::key(&node.item);

                if let Some(left_ptr) = node.left {
                    assert!(left_ptr.as_ref().parent == Some(node_ptr));
                    assert!(O::key(&left_ptr.as_ref().item) < node_key);
                }
                if let Some(right_ptr) = node.right {
                    assert!(right_ptr.as_ref().parent == Some(node_ptr));
                    assert!(node_key < O::key(&right_ptr.as_ref().item));
                }

                let left_height = height_of(node.left);
                let right_height = height_of(node.right);
                assert_eq!(node.height, 1 + cmp::max(left_height, right_height));

                // AVL condition
                assert!(left_height <= right_height + 1);
                assert!(right_height <= left_height + 1);

                num_nodes += 1;
            });
            assert_eq!(num_nodes, self.num_nodes);

            // In-order walk must be strictly ascending and end at the cached maximum
            let mut previous: Link<T> = None;
            let mut current = self.first_node();
            let mut walked = 0;
            while let Some(node_ptr) = current {
                if let Some(previous_ptr) = previous {
                    assert!(O::key(&previous_ptr.as_ref().item) < O::key(&node_ptr.as_ref().item));
                }
                previous = current;
                current = next(node_ptr);
                walked += 1;
            }
            assert_eq!(walked, self.num_nodes);
            assert!(previous == self.last);
        }
    }

    fn first_node(&self) -> Link<T> {
        self.root.map(|root_ptr| unsafe { leftmost(root_ptr) })
    }

    /// Unlinks and deallocates a node, returning its item.
    fn erase(&mut self, node_ptr: NodePtr<T>) -> T {
        self.detach(node_ptr);
        unsafe { Node::destroy(node_ptr) }
    }

    /// Unlinks a node from the tree without deallocating it.
    fn detach(&mut self, node_ptr: NodePtr<T>) {
        debug_assert!(self.num_nodes >= 1);
        if self.last == Some(node_ptr) {
            self.last = unsafe { prev(node_ptr) };
        }
        self.unlink_node(node_ptr);
        self.num_nodes -= 1;
    }

    /// Links a detached node at the given position and restores balance.
    fn attach(&mut self, mut node_ptr: NodePtr<T>, pos: InsertPos<T>) {
        unsafe {
            let node = node_ptr.as_mut();
            node.parent = pos.parent;
            node.left = None;
            node.right = None;
            node.height = 1;
            *pos.link_ptr.as_ptr() = Some(node_ptr);
        }
        self.num_nodes += 1;
        if pos.is_last {
            self.last = Some(node_ptr);
        }
        self.rebalance(pos.parent);
    }

    fn unlink_node(&mut self, node_ptr: NodePtr<T>) {
        unsafe {
            // Check if node to-unlink has right sub tree
            if let Some(mut min_child_ptr) = node_ptr.as_ref().right {
                // Find smallest child node in right sub tree
                let mut min_child_parent_ptr = node_ptr;
                while let Some(left_ptr) = min_child_ptr.as_ref().left {
                    min_child_parent_ptr = min_child_ptr;
                    min_child_ptr = left_ptr;
                }

                // Smallest child node is stem or leaf, unlink from tree
                debug_assert!(min_child_ptr.as_ref().left.is_none());
                if min_child_parent_ptr.as_ref().left == Some(min_child_ptr) {
                    min_child_parent_ptr.as_mut().left = min_child_ptr.as_ref().right;
                } else {
                    min_child_parent_ptr.as_mut().right = min_child_ptr.as_ref().right;
                }
                if let Some(mut right_ptr) = min_child_ptr.as_ref().right {
                    right_ptr.as_mut().parent = min_child_ptr.as_ref().parent;
                }

                // Put smallest child node into the place of the node to-unlink,
                // so that cursors at any other node stay valid.
                min_child_ptr.as_mut().left = node_ptr.as_ref().left;
                if let Some(mut left_ptr) = node_ptr.as_ref().left {
                    left_ptr.as_mut().parent = Some(min_child_ptr);
                }

                min_child_ptr.as_mut().right = node_ptr.as_ref().right;
                if let Some(mut right_ptr) = node_ptr.as_ref().right {
                    right_ptr.as_mut().parent = Some(min_child_ptr);
                }

                min_child_ptr.as_mut().parent = node_ptr.as_ref().parent;
                self.replace_child(node_ptr.as_ref().parent, node_ptr, Some(min_child_ptr));

                // Parent of smallest child node might be out of balance now
                let mut rebalance_from = min_child_parent_ptr;
                if rebalance_from == node_ptr {
                    // Parent is node to-unlink and has been replaced by smallest child
                    rebalance_from = min_child_ptr;
                }
                self.rebalance(Some(rebalance_from));
            } else {
                // Node to-unlink is stem or leaf, unlink from tree.
                if let Some(mut left_ptr) = node_ptr.as_ref().left {
                    left_ptr.as_mut().parent = node_ptr.as_ref().parent;
                }
                let parent = node_ptr.as_ref().parent;
                self.replace_child(parent, node_ptr, node_ptr.as_ref().left);
                self.rebalance(parent);
            }
        }
    }

    /// Makes `new_child` take the place of `old_child` below `parent`,
    /// or become the root if there is no parent.
    unsafe fn replace_child(&mut self, parent: Link<T>, old_child: NodePtr<T>, new_child: Link<T>) {
        match parent {
            None => self.root = new_child,
            Some(mut parent_ptr) => {
                if parent_ptr.as_ref().left == Some(old_child) {
                    parent_ptr.as_mut().left = new_child;
                } else {
                    parent_ptr.as_mut().right = new_child;
                }
            }
        }
    }

    fn rotate_left(&mut self, mut node_ptr: NodePtr<T>) {
        unsafe {
            if let Some(mut right_ptr) = node_ptr.as_ref().right {
                trace!(height = node_ptr.as_ref().height, "rotate left");
                node_ptr.as_mut().right = right_ptr.as_ref().left;
                if let Some(mut right_left_ptr) = right_ptr.as_ref().left {
                    right_left_ptr.as_mut().parent = Some(node_ptr);
                }

                right_ptr.as_mut().parent = node_ptr.as_ref().parent;
                self.replace_child(node_ptr.as_ref().parent, node_ptr, Some(right_ptr));

                right_ptr.as_mut().left = Some(node_ptr);
                node_ptr.as_mut().parent = Some(right_ptr);

                adjust_height(node_ptr);
                adjust_height(right_ptr);
            }
        }
    }

    fn rotate_right(&mut self, mut node_ptr: NodePtr<T>) {
        unsafe {
            if let Some(mut left_ptr) = node_ptr.as_ref().left {
                trace!(height = node_ptr.as_ref().height, "rotate right");
                node_ptr.as_mut().left = left_ptr.as_ref().right;
                if let Some(mut left_right_ptr) = left_ptr.as_ref().right {
                    left_right_ptr.as_mut().parent = Some(node_ptr);
                }

                left_ptr.as_mut().parent = node_ptr.as_ref().parent;
                self.replace_child(node_ptr.as_ref().parent, node_ptr, Some(left_ptr));

                left_ptr.as_mut().right = Some(node_ptr);
                node_ptr.as_mut().parent = Some(left_ptr);

                adjust_height(node_ptr);
                adjust_height(left_ptr);
            }
        }
    }

    /// Rebalances nodes starting from given position up to the root node.
    /// A rotation may leave the height of its subtree changed, so the walk
    /// never stops early.
    fn rebalance(&mut self, start_from: Link<T>) {
        let mut current = start_from;
        while let Some(node_ptr) = current {
            let parent = unsafe { node_ptr.as_ref().parent };
            self.rebalance_node(node_ptr);
            current = parent;
        }
    }

    /// Restores AVL condition (balance) at given node if necessary and adjusts height.
    /// Initial balance must not exceed +2 or -2, which always holds after a single update.
    fn rebalance_node(&mut self, node_ptr: NodePtr<T>) {
        unsafe {
            let left_height = height_of(node_ptr.as_ref().left);
            let right_height = height_of(node_ptr.as_ref().right);
            debug_assert!(left_height <= right_height + 2);
            debug_assert!(right_height <= left_height + 2);
            if left_height > right_height + 1 {
                if let Some(left_ptr) = node_ptr.as_ref().left {
                    // Left-right case
                    if balance(left_ptr) < 0 {
                        self.rotate_left(left_ptr);
                    }
                    self.rotate_right(node_ptr);
                }
            } else if right_height > left_height + 1 {
                if let Some(right_ptr) = node_ptr.as_ref().right {
                    // Right-left case
                    if balance(right_ptr) > 0 {
                        self.rotate_right(right_ptr);
                    }
                    self.rotate_left(node_ptr);
                }
            } else {
                adjust_height(node_ptr);
            }
        }
    }

    #[cfg(any(test, feature = "consistency_check"))]
    fn preorder<F: FnMut(NodePtr<T>)>(&self, f: F) {
        self.traverse(f, |_| {}, |_| {});
    }

    fn postorder<F: FnMut(NodePtr<T>)>(&self, f: F) {
        self.traverse(|_| {}, |_| {}, f);
    }

    fn traverse<Pre, In, Post>(&self, mut preorder: Pre, mut inorder: In, mut postorder: Post)
    where
        Pre: FnMut(NodePtr<T>),
        In: FnMut(NodePtr<T>),
        Post: FnMut(NodePtr<T>),
    {
        if let Some(mut node_ptr) = self.root {
            let mut dir = Direction::FromParent;
            loop {
                match dir {
                    Direction::FromParent => {
                        preorder(node_ptr);
                        if let Some(left_ptr) = unsafe { node_ptr.as_ref().left } {
                            node_ptr = left_ptr;
                        } else {
                            dir = Direction::FromLeft;
                        }
                    }
                    Direction::FromLeft => {
                        inorder(node_ptr);
                        if let Some(right_ptr) = unsafe { node_ptr.as_ref().right } {
                            node_ptr = right_ptr;
                            dir = Direction::FromParent;
                        } else {
                            dir = Direction::FromRight;
                        }
                    }
                    Direction::FromRight => {
                        // Post order traversal is used for node deletion,
                        // so make sure not to use node pointer after postorder call.
                        if let Some(parent_ptr) = unsafe { node_ptr.as_ref().parent } {
                            if Some(node_ptr) == unsafe { parent_ptr.as_ref().left } {
                                dir = Direction::FromLeft;
                            } else {
                                dir = Direction::FromRight;
                            }
                            postorder(node_ptr);
                            node_ptr = parent_ptr;
                        } else {
                            postorder(node_ptr);
                            break;
                        }
                    }
                }
            }
        }
    }
}

impl<T, O: Order<T>> AvlTree<T, O> {
    /// Inserts an item unless an item with an equal key is present.
    ///
    /// Returns a cursor at the item with that key and whether the new item
    /// was inserted. An equal item is never overwritten.
    ///
    /// # Panics
    ///
    /// Panics if the tree already holds [`max_size`](Self::max_size) items.
    pub fn insert(&mut self, item: T) -> (CursorMut<'_, T, O>, bool) {
        let (node_ptr, inserted) = self.insert_or_panic(item);
        (CursorMut::new(self, Some(node_ptr)), inserted)
    }

    /// Inserts an item unless an item with an equal key is present,
    /// failing with [`Error::CapacityExceeded`] instead of allocating
    /// past [`max_size`](Self::max_size).
    pub fn try_insert(&mut self, item: T) -> Result<(CursorMut<'_, T, O>, bool), Error> {
        let (node_ptr, inserted) = self.insert_node(item)?;
        Ok((CursorMut::new(self, Some(node_ptr)), inserted))
    }

    /// Returns a cursor at the item with the given key, or at the end if absent.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, T, O>
    where
        O::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Cursor::new(self, self.find_node(key))
    }

    /// Returns a mutable cursor at the item with the given key, or at the end if absent.
    pub fn find_mut<Q>(&mut self, key: &Q) -> CursorMut<'_, T, O>
    where
        O::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let found = self.find_node(key);
        CursorMut::new(self, found)
    }

    /// Returns a reference to the item with the given key.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        O::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key)
            .map(|node_ptr| unsafe { &(*node_ptr.as_ptr()).item })
    }

    /// Returns true if an item with the given key is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        O::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Returns a cursor at the first item whose key is not less than `key`,
    /// or at the end if there is none.
    pub fn lower_bound<Q>(&self, key: &Q) -> Cursor<'_, T, O>
    where
        O::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Cursor::new(self, self.lower_bound_node(key))
    }

    /// Returns a mutable cursor at the first item whose key is not less than `key`,
    /// or at the end if there is none.
    pub fn lower_bound_mut<Q>(&mut self, key: &Q) -> CursorMut<'_, T, O>
    where
        O::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let found = self.lower_bound_node(key);
        CursorMut::new(self, found)
    }

    /// Returns a cursor at the first item whose key is greater than `key`,
    /// or at the end if there is none.
    pub fn upper_bound<Q>(&self, key: &Q) -> Cursor<'_, T, O>
    where
        O::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Cursor::new(self, self.upper_bound_node(key))
    }

    /// Removes the item with the given key and returns it.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        O::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node_ptr = self.find_node(key)?;
        let item = self.erase(node_ptr);
        debug_assert!(self.find_node(key).is_none());
        Some(item)
    }

    /// Moves every item of `other` whose key is absent from `self` into `self`.
    /// Items with keys already present in `self` stay in `other`.
    ///
    /// Nodes are relinked, not reallocated.
    pub fn merge(&mut self, other: &mut Self) {
        let mut moved = 0usize;
        let mut current = other.first_node();
        while let Some(node_ptr) = current {
            current = unsafe { next(node_ptr) };
            let key = O::key(unsafe { &(*node_ptr.as_ptr()).item });
            if let Ok(pos) = self.find_insert_pos(key) {
                other.detach(node_ptr);
                self.attach(node_ptr, pos);
                moved += 1;
            }
        }
        trace!(moved, left_behind = other.num_nodes, "merged trees");
    }

    fn insert_or_panic(&mut self, item: T) -> (NodePtr<T>, bool) {
        match self.insert_node(item) {
            Ok(inserted) => inserted,
            Err(err) => panic!("{err}"),
        }
    }

    fn insert_node(&mut self, item: T) -> Result<(NodePtr<T>, bool), Error> {
        let pos = match self.find_insert_pos(O::key(&item)) {
            Ok(pos) => pos,
            Err(existing_ptr) => return Ok((existing_ptr, false)),
        };
        if self.num_nodes >= self.max_size() {
            return Err(Error::CapacityExceeded {
                max: self.max_size(),
            });
        }
        let node_ptr = Node::create(pos.parent, item);
        self.attach(node_ptr, pos);
        Ok((node_ptr, true))
    }

    fn find_node<Q>(&self, key: &Q) -> Link<T>
    where
        O::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(node_ptr) = current {
            let node = unsafe { &*node_ptr.as_ptr() };
            let node_key: &Q = O::key(&node.item).borrow();
            current = if key < node_key {
                node.left
            } else if node_key < key {
                node.right
            } else {
                break;
            };
        }
        current
    }

    fn lower_bound_node<Q>(&self, key: &Q) -> Link<T>
    where
        O::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut candidate = None;
        let mut current = self.root;
        while let Some(node_ptr) = current {
            let node = unsafe { &*node_ptr.as_ptr() };
            let node_key: &Q = O::key(&node.item).borrow();
            if node_key < key {
                current = node.right;
            } else {
                candidate = current;
                current = node.left;
            }
        }
        candidate
    }

    fn upper_bound_node<Q>(&self, key: &Q) -> Link<T>
    where
        O::Key: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut candidate = None;
        let mut current = self.root;
        while let Some(node_ptr) = current {
            let node = unsafe { &*node_ptr.as_ptr() };
            let node_key: &Q = O::key(&node.item).borrow();
            if key < node_key {
                candidate = current;
                current = node.left;
            } else {
                current = node.right;
            }
        }
        candidate
    }

    /// Finds the empty link a node with `key` would be linked to,
    /// or the node already holding an equal key.
    fn find_insert_pos(&mut self, key: &O::Key) -> Result<InsertPos<T>, NodePtr<T>> {
        let mut parent: Link<T> = None;
        let mut link_ptr: LinkPtr<T> = NonNull::from(&mut self.root);
        let mut is_last = true;
        unsafe {
            while let Some(mut node_ptr) = *link_ptr.as_ref() {
                let node_key = O::key(&(*node_ptr.as_ptr()).item);
                parent = Some(node_ptr);
                if key < node_key {
                    is_last = false;
                    link_ptr = NonNull::from(&mut node_ptr.as_mut().left);
                } else if node_key < key {
                    link_ptr = NonNull::from(&mut node_ptr.as_mut().right);
                } else {
                    return Err(node_ptr);
                }
            }
        }
        Ok(InsertPos {
            parent,
            link_ptr,
            is_last,
        })
    }
}

impl<T, O> Drop for AvlTree<T, O> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, O> Default for AvlTree<T, O> {
    /// Creates an empty tree.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, O> Clone for AvlTree<T, O> {
    /// Deep-clones every node, preserving shape and heights.
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        if let Some(root_ptr) = self.root {
            let root_copy = unsafe { clone_subtree(root_ptr, None) };
            tree.root = Some(root_copy);
            tree.last = Some(unsafe { rightmost(root_copy) });
            tree.num_nodes = self.num_nodes;
        }
        tree
    }
}

impl<T: PartialEq, O> PartialEq for AvlTree<T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, O> Eq for AvlTree<T, O> {}

impl<T: fmt::Debug, O> fmt::Debug for AvlTree<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, O: Order<T>> FromIterator<T> for AvlTree<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, O: Order<T>> Extend<T> for AvlTree<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert_or_panic(item);
        }
    }
}

impl<T, O: Order<T>, const N: usize> From<[T; N]> for AvlTree<T, O> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T, O> IntoIterator for &'a AvlTree<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, O> IntoIterator for AvlTree<T, O> {
    type Item = T;
    type IntoIter = IntoIter<T, O>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T> Node<T> {
    fn create(parent: Link<T>, item: T) -> NodePtr<T> {
        let boxed = Box::new(Node {
            item,
            parent,
            left: None,
            right: None,
            height: 1,
        });
        unsafe { NodePtr::new_unchecked(Box::into_raw(boxed)) }
    }

    unsafe fn destroy(node_ptr: NodePtr<T>) -> T {
        Box::from_raw(node_ptr.as_ptr()).item
    }
}

fn height_of<T>(link: Link<T>) -> usize {
    match link {
        None => 0,
        Some(node_ptr) => unsafe { node_ptr.as_ref().height },
    }
}

/// Height of the left subtree minus height of the right subtree.
unsafe fn balance<T>(node_ptr: NodePtr<T>) -> isize {
    let node = node_ptr.as_ref();
    height_of(node.left) as isize - height_of(node.right) as isize
}

fn adjust_height<T>(mut node_ptr: NodePtr<T>) {
    unsafe {
        let node = node_ptr.as_mut();
        node.height = 1 + cmp::max(height_of(node.left), height_of(node.right));
    }
}

unsafe fn leftmost<T>(mut node_ptr: NodePtr<T>) -> NodePtr<T> {
    while let Some(left_ptr) = node_ptr.as_ref().left {
        node_ptr = left_ptr;
    }
    node_ptr
}

unsafe fn rightmost<T>(mut node_ptr: NodePtr<T>) -> NodePtr<T> {
    while let Some(right_ptr) = node_ptr.as_ref().right {
        node_ptr = right_ptr;
    }
    node_ptr
}

/// In-order successor; `None` past the largest node.
unsafe fn next<T>(node_ptr: NodePtr<T>) -> Link<T> {
    if let Some(right_ptr) = node_ptr.as_ref().right {
        return Some(leftmost(right_ptr));
    }
    let mut child_ptr = node_ptr;
    let mut parent = child_ptr.as_ref().parent;
    while let Some(parent_ptr) = parent {
        if parent_ptr.as_ref().left == Some(child_ptr) {
            break;
        }
        child_ptr = parent_ptr;
        parent = parent_ptr.as_ref().parent;
    }
    parent
}

/// In-order predecessor; `None` before the smallest node.
unsafe fn prev<T>(node_ptr: NodePtr<T>) -> Link<T> {
    if let Some(left_ptr) = node_ptr.as_ref().left {
        return Some(rightmost(left_ptr));
    }
    let mut child_ptr = node_ptr;
    let mut parent = child_ptr.as_ref().parent;
    while let Some(parent_ptr) = parent {
        if parent_ptr.as_ref().right == Some(child_ptr) {
            break;
        }
        child_ptr = parent_ptr;
        parent = parent_ptr.as_ref().parent;
    }
    parent
}

unsafe fn clone_subtree<T: Clone>(source_ptr: NodePtr<T>, parent: Link<T>) -> NodePtr<T> {
    let source = source_ptr.as_ref();
    let mut node_ptr = Node::create(parent, source.item.clone());
    node_ptr.as_mut().height = source.height;
    if let Some(left_ptr) = source.left {
        node_ptr.as_mut().left = Some(clone_subtree(left_ptr, Some(node_ptr)));
    }
    if let Some(right_ptr) = source.right {
        node_ptr.as_mut().right = Some(clone_subtree(right_ptr, Some(node_ptr)));
    }
    node_ptr
}
