//! The `Node` shared by [`OrderedTree`][crate::ordered::OrderedTree] and
//! [`BinaryTree`][crate::binary::BinaryTree], and the traversals over it.
//!
//! Every `Node` is owned by exactly one slot: either the root slot of its tree or the `left`/
//! `right` slot of its parent. There are no parent pointers, so nothing can alias and no cycles
//! can form. Operations that need a parent re-walk from the root instead.

use std::collections::VecDeque;
use std::fmt;

/// An owning, possibly empty, slot for a `Node`.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single value in a tree along with its (optional) children. Trees hand out shared references
/// to their `Node`s from `search` so callers can inspect the neighbourhood of a value.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Only the direct children's values are printed so that formatting a handle stays cheap no
/// matter how large the subtree below it is.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// The order in which a traversal visits the values of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. For an
    /// [`OrderedTree`][crate::ordered::OrderedTree] this is ascending order.
    InOrder,
    /// The node, then the left subtree, then the right subtree.
    PreOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
    /// Breadth first: the root, then each level from left to right.
    LevelOrder,
}

/// Visits every value below `root` in the given `order`.
///
/// None of the traversals recurse. The trees here are never balanced so their depth can be linear
/// in their size, and an explicit stack keeps that depth off the call stack.
pub(crate) fn traverse<'a, T>(root: Option<&'a Node<T>>, order: Order, visit: impl FnMut(&'a T)) {
    match order {
        Order::InOrder => in_order(root, visit),
        Order::PreOrder => pre_order(root, visit),
        Order::PostOrder => post_order(root, visit),
        Order::LevelOrder => level_order(root, visit),
    }
}

fn in_order<'a, T>(root: Option<&'a Node<T>>, mut visit: impl FnMut(&'a T)) {
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        let Some(node) = stack.pop() else {
            return;
        };
        visit(&node.value);
        current = node.right();
    }
}

fn pre_order<'a, T>(root: Option<&'a Node<T>>, mut visit: impl FnMut(&'a T)) {
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        visit(&node.value);
        // Right goes on first so that left comes off first.
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

fn post_order<'a, T>(root: Option<&'a Node<T>>, mut visit: impl FnMut(&'a T)) {
    // Each entry records whether its children have already been pushed.
    let mut stack: Vec<(&Node<T>, bool)> = root.map(|n| (n, false)).into_iter().collect();
    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            visit(&node.value);
        } else {
            stack.push((node, true));
            stack.extend(node.right().map(|n| (n, false)));
            stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

fn level_order<'a, T>(root: Option<&'a Node<T>>, mut visit: impl FnMut(&'a T)) {
    let mut queue: VecDeque<&Node<T>> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        visit(&node.value);
        queue.extend(node.left());
        queue.extend(node.right());
    }
}

/// Finds the first node in level order that satisfies `predicate`.
pub(crate) fn find_level_order<'a, T>(
    root: Option<&'a Node<T>>,
    mut predicate: impl FnMut(&T) -> bool,
) -> Option<&'a Node<T>> {
    let mut queue: VecDeque<&Node<T>> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        if predicate(&node.value) {
            return Some(node);
        }
        queue.extend(node.left());
        queue.extend(node.right());
    }
    None
}

/// The number of nodes on the longest path from `root` down to a leaf.
pub(crate) fn height<T>(root: Option<&Node<T>>) -> usize {
    let mut height = 0;
    let mut stack: Vec<(&Node<T>, usize)> = root.map(|n| (n, 1)).into_iter().collect();
    while let Some((node, depth)) = stack.pop() {
        height = height.max(depth);
        stack.extend(node.left().map(|n| (n, depth + 1)));
        stack.extend(node.right().map(|n| (n, depth + 1)));
    }
    height
}

/// Copies the subtree behind `link` node for node, children before their parent, so the copy has
/// exactly the same shape.
pub(crate) fn clone_link<T>(link: &Link<T>) -> Link<T>
where
    T: Clone,
{
    enum Step<'a, T> {
        Enter(&'a Node<T>),
        Exit(&'a Node<T>),
    }

    let mut steps: Vec<Step<'_, T>> = link.as_deref().map(Step::Enter).into_iter().collect();
    let mut built: Vec<Box<Node<T>>> = Vec::new();
    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(node) => {
                steps.push(Step::Exit(node));
                steps.extend(node.right().map(Step::Enter));
                steps.extend(node.left().map(Step::Enter));
            }
            Step::Exit(node) => {
                // The right copy finished last so it sits on top.
                let mut copy = Node::boxed(node.value.clone());
                if node.right.is_some() {
                    copy.right = built.pop();
                }
                if node.left.is_some() {
                    copy.left = built.pop();
                }
                built.push(copy);
            }
        }
    }
    built.pop()
}

/// Drops the subtree owned by `link` one node at a time. The derived drop glue for `Box` recurses
/// once per level, which overflows the stack for long chains of nodes.
pub(crate) fn drop_iteratively<T>(link: &mut Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
