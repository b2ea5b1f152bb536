//! A plain binary tree with no ordering between parents and children.
//!
//! Values are placed in level order: a new value always takes the first free child slot found by
//! a breadth-first walk, left before right. Removal keeps that property by moving the deepest
//! value (the last one in level order) into the removed value's node and dropping the deepest
//! node instead. So the tree is always complete, and the position of a node in level order tells
//! us the path from the root to it.
//!
//! # Examples
//!
//! ```
//! use classic_ds::binary::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//! tree.insert(10);
//! tree.insert(20);
//! tree.insert(30);
//!
//! // Duplicates are fine in here.
//! tree.insert(10);
//! assert_eq!(tree.size(), 4);
//!
//! // The deepest value (the second 10) fills the hole left by 20.
//! assert_eq!(tree.remove(&20), Some(20));
//! assert_eq!(tree.level_order(), [&10, &10, &30]);
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::node::{self, Link, Node, Order};

/// A binary tree filled in level order.
pub struct BinaryTree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        node::drop_iteratively(&mut self.root);
    }
}

impl<T> Clone for BinaryTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: node::clone_link(&self.root),
            size: self.size,
        }
    }
}

impl<T> fmt::Debug for BinaryTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("size", &self.size)
            .field("values", &self.level_order())
            .finish()
    }
}

impl<T> BinaryTree<T> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Generates a tree holding just `value`.
    pub fn with_root(value: T) -> Self {
        Self {
            root: Some(Node::boxed(value)),
            size: 1,
        }
    }

    /// The number of values in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Alias of [`size`][Self::size].
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many nodes are on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        node::drop_iteratively(&mut self.root);
        self.size = 0;
    }

    /// Adds `value` at the first free slot in level order.
    ///
    /// Every insert and remove keeps the tree complete (each level full before the next one
    /// starts), so that slot is always level-order position `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::binary::BinaryTree;
    ///
    /// let mut tree = BinaryTree::with_root(1);
    /// tree.insert(2);
    /// tree.insert(3);
    /// tree.insert(4);
    ///
    /// let two = tree.root().and_then(|n| n.left()).unwrap();
    /// assert_eq!(two.value(), &2);
    /// assert_eq!(two.left().map(|n| *n.value()), Some(4));
    /// ```
    pub fn insert(&mut self, value: T) {
        let size = self.size;
        // Positions `0..size` are all filled, so the parent of position `size` exists.
        let Some(slot) = self.slot_at(size) else {
            unreachable!("no free slot at level-order position {size}");
        };
        *slot = Some(Node::boxed(value));
        self.size += 1;
        trace!(size = self.size, "attached new node");
    }

    /// Feeds every value to `visit` in the given `order`.
    pub fn traverse<'a>(&'a self, order: Order, visit: impl FnMut(&'a T)) {
        node::traverse(self.root(), order, visit);
    }

    /// Left subtree, node, right subtree.
    pub fn in_order(&self) -> Vec<&T> {
        self.collect(Order::InOrder)
    }

    /// Node, left subtree, right subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        self.collect(Order::PreOrder)
    }

    /// Left subtree, right subtree, node.
    pub fn post_order(&self) -> Vec<&T> {
        self.collect(Order::PostOrder)
    }

    /// The values in the order they fill the tree.
    pub fn level_order(&self) -> Vec<&T> {
        self.collect(Order::LevelOrder)
    }

    fn collect(&self, order: Order) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.size);
        self.traverse(order, |value| values.push(value));
        values
    }

    /// The slot holding the node at `position` in level order (counting from 0 at the root).
    ///
    /// Numbering the nodes of a complete tree from 1, the children of node `n` are `2n` and
    /// `2n + 1`. So the bits of `position + 1` after the leading one spell out the path from the
    /// root: 0 for left, 1 for right. Returns `None` if the path runs off the tree before reaching
    /// the slot's parent.
    fn slot_at(&mut self, position: usize) -> Option<&mut Link<T>> {
        let number = position + 1;
        let depth = usize::BITS - 1 - number.leading_zeros();

        let mut link = &mut self.root;
        for shift in (0..depth).rev() {
            let node = link.as_mut()?;
            link = if (number >> shift) & 1 == 0 {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        Some(link)
    }
}

impl<T> BinaryTree<T>
where
    T: PartialEq,
{
    /// Removes one occurrence of `value` and returns it, or returns `None` if it isn't present.
    ///
    /// When `value` occurs more than once, the occurrence that comes last in level order is the
    /// one removed. The deepest node is always the one that gets detached: its value moves into
    /// the removed value's node first (unless that node *is* the deepest one).
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let Some(target) = self.last_position_of(value) else {
            debug!(size = self.size, "value not present, skipping remove");
            return None;
        };

        let deepest_position = self.size - 1;
        let deepest = self.slot_at(deepest_position).and_then(Option::take)?;
        self.size -= 1;
        trace!(size = self.size, "detached deepest node");

        let Node { value: deepest, .. } = *deepest;
        if target == deepest_position {
            return Some(deepest);
        }

        let node = self.slot_at(target).and_then(|slot| slot.as_deref_mut())?;
        Some(std::mem::replace(&mut node.value, deepest))
    }

    /// Finds the first node in level order holding `value`.
    pub fn search(&self, value: &T) -> Option<&Node<T>> {
        node::find_level_order(self.root(), |v| v == value)
    }

    /// Whether `value` is anywhere in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// The level-order position of the last node holding `value`.
    fn last_position_of(&self, value: &T) -> Option<usize> {
        let mut position = 0;
        let mut found = None;
        self.traverse(Order::LevelOrder, |v| {
            if v == value {
                found = Some(position);
            }
            position += 1;
        });
        found
    }
}

impl<T> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
