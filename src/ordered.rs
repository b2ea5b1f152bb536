//! An unbalanced Binary Search Tree storing each distinct value once.
//!
//! Nothing here rebalances, so a tree built from sorted input degrades into a linked list and
//! every operation becomes `O(n)`. In exchange the shape of the tree is fully determined by the
//! sequence of inserts and removes, which makes traversal output reproducible.
//!
//! # Examples
//!
//! ```
//! use classic_ds::ordered::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting a value that is already present does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.size(), 1);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(tree.search(&1).is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::node::{self, Link, Node, Order};

/// A Binary Search Tree. For every node, all the values in its left subtree are less than its own
/// value and all the values in its right subtree are greater.
pub struct OrderedTree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        node::drop_iteratively(&mut self.root);
    }
}

/// Copies every node in place, so the clone has the same shape and takes linear time however
/// skewed the tree is.
impl<T> Clone for OrderedTree<T>
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

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("size", &self.size)
            .field("values", &self.in_order())
            .finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Generates a tree holding just `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::ordered::OrderedTree;
    ///
    /// let tree = OrderedTree::with_root(50);
    ///
    /// assert_eq!(tree.size(), 1);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(50));
    /// ```
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

    /// How many nodes are on the longest path from the root to a leaf. An empty tree has a height
    /// of 0 and a tree with only a root has a height of 1.
    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value())
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        node::drop_iteratively(&mut self.root);
        self.size = 0;
    }

    /// Feeds every value to `visit` in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::{ordered::OrderedTree, Order};
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut sum = 0;
    /// tree.traverse(Order::PostOrder, |v| sum += v);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn traverse<'a>(&'a self, order: Order, visit: impl FnMut(&'a T)) {
        node::traverse(self.root(), order, visit);
    }

    /// The values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        self.collect(Order::InOrder)
    }

    /// Each node before its left subtree and then its right subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        self.collect(Order::PreOrder)
    }

    /// Each node after its left subtree and then its right subtree.
    pub fn post_order(&self) -> Vec<&T> {
        self.collect(Order::PostOrder)
    }

    /// The values level by level, starting at the root.
    pub fn level_order(&self) -> Vec<&T> {
        self.collect(Order::LevelOrder)
    }

    fn collect(&self, order: Order) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.size);
        self.traverse(order, |value| values.push(value));
        values
    }
}

impl<T> OrderedTree<T>
where
    T: Ord,
{
    /// Inserts `value` into the tree. Returns `false`, leaving the tree untouched, if an equal
    /// value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::ordered::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(50));
    /// assert!(tree.insert(30));
    /// assert!(!tree.insert(50));
    ///
    /// assert_eq!(tree.in_order(), [&30, &50]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let slot = Self::locate(&mut self.root, &value);
        if slot.is_some() {
            debug!(size = self.size, "value already present, skipping insert");
            return false;
        }

        *slot = Some(Node::boxed(value));
        self.size += 1;
        trace!(size = self.size, "attached new leaf");
        true
    }

    /// Removes `value` from the tree and returns it. Returns `None`, leaving the tree untouched,
    /// if the value isn't present.
    ///
    /// A node with two children can't be spliced out without breaking the ordering, so its value
    /// is replaced by its in-order successor (the smallest value in its right subtree) and the
    /// successor's node is spliced out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::ordered::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [50, 30, 70, 20, 40].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&30), Some(30));
    /// assert_eq!(tree.remove(&30), None);
    ///
    /// assert_eq!(tree.size(), 4);
    /// assert_eq!(tree.in_order(), [&20, &40, &50, &70]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let slot = Self::locate(&mut self.root, value);
        let Some(mut node) = slot.take() else {
            debug!(size = self.size, "value not present, skipping remove");
            return None;
        };

        // Only look for a successor when there is a left subtree. Without one, the right subtree
        // (if any) can take this node's place directly.
        let successor = if node.left.is_some() {
            Self::take_leftmost(&mut node.right)
        } else {
            None
        };

        let removed = match successor {
            Some(successor) => {
                trace!("promoting in-order successor");
                let removed = mem::replace(&mut node.value, successor.value);
                *slot = Some(node);
                removed
            }
            None => {
                trace!(leaf = node.is_leaf(), "splicing out node");
                let Node { value, left, right } = *node;
                *slot = left.or(right);
                value
            }
        };

        // Even when a successor was moved, only one value left the tree.
        self.size -= 1;
        Some(removed)
    }

    /// Finds the node holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::ordered::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let two = tree.search(&2).unwrap();
    /// assert_eq!(two.left().map(|n| *n.value()), Some(1));
    /// assert_eq!(two.right().map(|n| *n.value()), Some(3));
    ///
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(node.value()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Walks down from `link` and returns the slot holding `value` or, if it isn't there, the
    /// empty slot where it would be attached.
    fn locate<'a>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
        loop {
            let ordering = match link.as_deref() {
                Some(node) => value.cmp(node.value()),
                None => return link,
            };
            link = match (ordering, link) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, link) => return link,
            };
        }
    }

    /// Detaches the leftmost node below `link`, moving its right child (it can't have a left one)
    /// into its slot.
    fn take_leftmost(mut link: &mut Link<T>) -> Option<Box<Node<T>>> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let mut leftmost = link.take()?;
        *link = leftmost.right.take();
        Some(leftmost)
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
