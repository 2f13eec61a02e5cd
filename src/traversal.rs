//! Depth-first and breadth-first traversal of a [`TreeNode`].
//!
//! Depth-first traversal reports two events per node through a [`Visitor`]:
//! [`enter`][Visitor::enter] fires in preorder (a node before its left
//! subtree, before its right subtree) and [`leave`][Visitor::leave] fires in
//! postorder (left subtree, right subtree, then the node).
//!
//! There are two interchangeable depth-first strategies. [`Recursive`] is the
//! obvious one. [`Iterative`] keeps its own stack on the heap so it can walk
//! trees deeper than the call stack allows. Both produce exactly the same
//! sequence of events.
//!
//! # Examples
//!
//! ```
//! use algos::traversal::{bfs, dfs_iterative, dfs_recursive, on_enter_leave};
//! use algos::tree::TreeNode;
//!
//! let root: TreeNode = "[1,2,3,4,5,6,7]".parse().unwrap();
//!
//! let mut entered = Vec::new();
//! let mut left = Vec::new();
//! dfs_recursive(
//!     Some(&root),
//!     &mut on_enter_leave(|n| entered.push(n.val), |n| left.push(n.val)),
//! );
//! assert_eq!(entered, vec![1, 2, 4, 5, 3, 6, 7]);
//! assert_eq!(left, vec![4, 5, 2, 6, 7, 3, 1]);
//!
//! let mut visited = Vec::new();
//! bfs(Some(&root), |n| visited.push(n.val));
//! assert_eq!(visited, vec![1, 2, 3, 4, 5, 6, 7]);
//! ```

use std::collections::VecDeque;

use crate::tree::TreeNode;

/// Receives the events of a depth-first traversal.
pub trait Visitor<T> {
    /// Called when the traversal first reaches `node`, before any of its
    /// descendants.
    fn enter(&mut self, node: &TreeNode<T>);

    /// Called once all of `node`'s descendants have been visited. Does
    /// nothing unless overridden.
    fn leave(&mut self, node: &TreeNode<T>) {
        let _ = node;
    }
}

/// A [`Visitor`] that only cares about [`enter`][Visitor::enter].
/// Built with [`on_enter`].
#[derive(Debug)]
pub struct OnEnter<E> {
    on_enter: E,
}

/// A [`Visitor`] made of two closures. Built with [`on_enter_leave`].
#[derive(Debug)]
pub struct OnEnterLeave<E, L> {
    on_enter: E,
    on_leave: L,
}

/// Wraps a closure as a visitor that is only told about entering nodes.
///
/// # Examples
///
/// ```
/// use algos::traversal::{dfs_iterative, on_enter};
/// use algos::tree::TreeNode;
///
/// let root: TreeNode = "[1,2,3]".parse().unwrap();
/// let mut sum = 0;
/// dfs_iterative(Some(&root), &mut on_enter(|n: &TreeNode| sum += n.val));
///
/// assert_eq!(sum, 6);
/// ```
pub fn on_enter<T, E>(on_enter: E) -> OnEnter<E>
where
    E: FnMut(&TreeNode<T>),
{
    OnEnter { on_enter }
}

/// Wraps two closures as a visitor: one for entering nodes and one for
/// leaving them.
pub fn on_enter_leave<T, E, L>(on_enter: E, on_leave: L) -> OnEnterLeave<E, L>
where
    E: FnMut(&TreeNode<T>),
    L: FnMut(&TreeNode<T>),
{
    OnEnterLeave { on_enter, on_leave }
}

impl<T, E> Visitor<T> for OnEnter<E>
where
    E: FnMut(&TreeNode<T>),
{
    fn enter(&mut self, node: &TreeNode<T>) {
        (self.on_enter)(node)
    }
}

impl<T, E, L> Visitor<T> for OnEnterLeave<E, L>
where
    E: FnMut(&TreeNode<T>),
    L: FnMut(&TreeNode<T>),
{
    fn enter(&mut self, node: &TreeNode<T>) {
        (self.on_enter)(node)
    }

    fn leave(&mut self, node: &TreeNode<T>) {
        (self.on_leave)(node)
    }
}

/// A way of walking a tree depth-first. Every implementation must report the
/// same events in the same order as [`dfs_recursive`].
pub trait DepthFirst {
    /// Walks the tree rooted at `root`, reporting to `visitor`. Nothing is
    /// reported for an absent root.
    fn traverse<T, V>(&self, root: Option<&TreeNode<T>>, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized;
}

/// Depth-first traversal on the call stack. See [`dfs_recursive`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Recursive;

/// Depth-first traversal with a heap-allocated stack. See [`dfs_iterative`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Iterative;

impl DepthFirst for Recursive {
    fn traverse<T, V>(&self, root: Option<&TreeNode<T>>, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        dfs_recursive(root, visitor)
    }
}

impl DepthFirst for Iterative {
    fn traverse<T, V>(&self, root: Option<&TreeNode<T>>, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        dfs_iterative(root, visitor)
    }
}

/// Depth-first traversal by recursion. Uses one stack frame per level of the
/// tree, so prefer [`dfs_iterative`] for trees that may be very deep.
pub fn dfs_recursive<T, V>(root: Option<&TreeNode<T>>, visitor: &mut V)
where
    V: Visitor<T> + ?Sized,
{
    if let Some(node) = root {
        visitor.enter(node);
        dfs_recursive(node.left(), visitor);
        dfs_recursive(node.right(), visitor);
        visitor.leave(node);
    }
}

/// Depth-first traversal without recursion. Reports the same events in the
/// same order as [`dfs_recursive`].
///
/// # Examples
///
/// ```
/// use algos::traversal::{dfs_iterative, on_enter_leave};
/// use algos::tree::TreeNode;
///
/// let root: TreeNode = "[1,2,3]".parse().unwrap();
/// let mut events = Vec::new();
/// {
///     let events = std::cell::RefCell::new(&mut events);
///     dfs_iterative(
///         Some(&root),
///         &mut on_enter_leave(
///             |n| events.borrow_mut().push(("enter", n.val)),
///             |n| events.borrow_mut().push(("leave", n.val)),
///         ),
///     );
/// }
///
/// assert_eq!(
///     events,
///     vec![
///         ("enter", 1),
///         ("enter", 2),
///         ("leave", 2),
///         ("enter", 3),
///         ("leave", 3),
///         ("leave", 1),
///     ]
/// );
/// ```
pub fn dfs_iterative<T, V>(root: Option<&TreeNode<T>>, visitor: &mut V)
where
    V: Visitor<T> + ?Sized,
{
    // Each entry records whether its node has been entered yet. Children are
    // pushed right first so the left one is popped first.
    let mut stack: Vec<(&TreeNode<T>, bool)> = root.map(|n| (n, false)).into_iter().collect();

    while let Some((node, entered)) = stack.pop() {
        if entered {
            visitor.leave(node);
            continue;
        }

        visitor.enter(node);
        stack.push((node, true));
        stack.extend(node.right().map(|n| (n, false)));
        stack.extend(node.left().map(|n| (n, false)));
    }
}

/// Breadth-first traversal: visits the tree level by level, left to right.
///
/// # Examples
///
/// ```
/// use algos::traversal::bfs;
/// use algos::tree::TreeNode;
///
/// let root: TreeNode = "[1,2,3,null,null,6]".parse().unwrap();
/// let mut visited = Vec::new();
/// bfs(Some(&root), |n| visited.push(n.val));
///
/// assert_eq!(visited, vec![1, 2, 3, 6]);
/// ```
pub fn bfs<T, F>(root: Option<&TreeNode<T>>, mut on_visit: F)
where
    F: FnMut(&TreeNode<T>),
{
    let mut queue: VecDeque<&TreeNode<T>> = root.into_iter().collect();

    while let Some(node) = queue.pop_front() {
        on_visit(node);
        queue.extend(node.left());
        queue.extend(node.right());
    }
}
