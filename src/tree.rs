//! A plain binary tree and its level-order encoding.
//!
//! Trees are usually written down the way coding-interview sites do it: a
//! breadth-first, left-to-right list of values where `null` marks a missing
//! child. A missing child has no children of its own, so nothing is encoded
//! for them.
//!
//! ```txt
//!       1
//!      / \
//!     2   3        [1, 2, 3, null, null, 6]
//!        /
//!       6
//! ```
//!
//! # Examples
//!
//! ```
//! use algos::tree::{create_tree, TreeNode};
//!
//! let root = create_tree(&[Some(1), Some(2), Some(3), None, None, Some(6)]).unwrap();
//!
//! assert_eq!(root.val, 1);
//! assert!(root.left().unwrap().is_leaf());
//! assert_eq!(root.right().unwrap().left().map(|n| n.val), Some(6));
//!
//! // The same tree, written as text.
//! let parsed: TreeNode = "[1,2,3,null,null,6]".parse().unwrap();
//! assert_eq!(parsed, root);
//! assert_eq!(root.to_string(), "[1,2,3,null,null,6]");
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The token used for an absent child in the text notation.
const NULL_TOKEN: &str = "null";

/// A node of a binary tree. Every node owns its children, so the whole tree
/// is released when the root is dropped.
///
/// A missing child is `None`. This is different from a child holding the
/// default value (e.g. `0`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeNode<T = i32> {
    /// The value stored in this node.
    pub val: T,
    /// The left child, if any.
    pub left: Option<Box<TreeNode<T>>>,
    /// The right child, if any.
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    /// Creates a leaf node holding `val`.
    pub fn new(val: T) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Creates a node holding `val` with the given children.
    ///
    /// # Examples
    ///
    /// ```
    /// use algos::tree::TreeNode;
    ///
    /// let node = TreeNode::with_children(1, Some(TreeNode::new(2)), None);
    ///
    /// assert_eq!(node.left().map(|n| n.val), Some(2));
    /// assert!(node.right().is_none());
    /// ```
    pub fn with_children(val: T, left: Option<TreeNode<T>>, right: Option<TreeNode<T>>) -> Self {
        Self {
            val,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Borrows the left child.
    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    /// Borrows the right child.
    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Encodes the tree rooted at this node in level order. Every absent
    /// child of a present node gets a `None` slot, except that trailing
    /// `None`s are left off.
    ///
    /// This is the inverse of [`create_tree`].
    ///
    /// # Examples
    ///
    /// ```
    /// use algos::tree::{create_tree, TreeNode};
    ///
    /// let root = TreeNode::with_children(1, None, Some(TreeNode::new(2)));
    ///
    /// assert_eq!(root.to_level_order(), vec![Some(1), None, Some(2)]);
    /// assert_eq!(create_tree(&root.to_level_order()), Some(root));
    /// ```
    pub fn to_level_order(&self) -> Vec<Option<T>>
    where
        T: Clone,
    {
        let mut slots = vec![Some(self.val.clone())];
        let mut queue = VecDeque::new();
        queue.push_back(self);

        while let Some(node) = queue.pop_front() {
            for child in &[node.left(), node.right()] {
                match child {
                    Some(child) => {
                        slots.push(Some(child.val.clone()));
                        queue.push_back(*child);
                    }
                    None => slots.push(None),
                }
            }
        }

        while let Some(None) = slots.last() {
            slots.pop();
        }
        slots
    }
}

/// An absent value becomes the default value (`0` for integers).
impl<T> From<Option<T>> for TreeNode<T>
where
    T: Default,
{
    fn from(val: Option<T>) -> Self {
        Self::new(val.unwrap_or_default())
    }
}

impl<T> Drop for TreeNode<T> {
    // Degenerate trees can be as deep as they are long so we unlink the
    // subtrees onto a heap-allocated stack instead of dropping recursively.
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Builds a tree from its level-order encoding.
///
/// Returns `None` if `values` is empty or its first slot is absent. Nodes
/// take their children from the following slots in the order the nodes were
/// created: left first, then right. An absent slot leaves that child empty.
///
/// This never fails. Slots left over once every node has been given its
/// children are ignored.
///
/// # Examples
///
/// ```
/// use algos::tree::create_tree;
///
/// //       1
/// //      / \
/// //     2   3
/// //    / \ / \
/// //   4  5 6  7
/// let root = create_tree(&[1, 2, 3, 4, 5, 6, 7].iter().copied().map(Some).collect::<Vec<_>>())
///     .unwrap();
///
/// assert_eq!(root.left().and_then(|n| n.right()).map(|n| n.val), Some(5));
/// assert_eq!(create_tree::<i32>(&[]), None);
/// assert_eq!(create_tree::<i32>(&[None, Some(1)]), None);
/// ```
pub fn create_tree<T>(values: &[Option<T>]) -> Option<TreeNode<T>>
where
    T: Clone,
{
    let root = values.first()?.clone()?;

    // Nodes in creation order, which is also the order they are handed
    // children in. `children[i]` holds the creation index of node `i`'s kids.
    let mut nodes = vec![Some(TreeNode::new(root))];
    let mut children: Vec<[Option<usize>; 2]> = vec![[None, None]];
    let mut slots = values[1..].iter();
    let mut parent = 0;

    while !slots.as_slice().is_empty() {
        if parent == nodes.len() {
            log::debug!(
                "ignoring {} level-order slot(s) past the last node",
                slots.len()
            );
            break;
        }

        for side in 0..2 {
            if let Some(Some(val)) = slots.next() {
                children[parent][side] = Some(nodes.len());
                nodes.push(Some(TreeNode::new(val.clone())));
                children.push([None, None]);
            }
        }
        parent += 1;
    }

    // A child is always created after its parent so walking backwards
    // finishes every subtree before its parent needs it.
    for index in (0..nodes.len()).rev() {
        let [left, right] = children[index];
        let left = left.and_then(|i| nodes[i].take()).map(Box::new);
        let right = right.and_then(|i| nodes[i].take()).map(Box::new);
        if let Some(node) = nodes[index].as_mut() {
            node.left = left;
            node.right = right;
        }
    }

    nodes.swap_remove(0)
}

/// Renders the tree in the `[1,2,null,3]` notation.
impl<T> fmt::Display for TreeNode<T>
where
    T: fmt::Display + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.to_level_order().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            match slot {
                Some(val) => write!(f, "{}", val)?,
                None => write!(f, "{}", NULL_TOKEN)?,
            }
        }
        write!(f, "]")
    }
}

/// The reasons the `[1,2,null,3]` notation can fail to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseTreeError {
    /// The input wasn't wrapped in square brackets.
    #[error("level-order notation must be enclosed in `[` and `]`")]
    MissingBrackets,
    /// A slot was neither `null` nor a valid value.
    #[error("invalid value `{token}` at position {position}")]
    InvalidValue {
        /// Zero-based slot index of the bad token.
        position: usize,
        /// The offending token, trimmed.
        token: String,
    },
    /// The notation is valid but describes no tree (`[]` or `[null, ...]`).
    #[error("level-order notation describes an empty tree")]
    Empty,
}

/// Parses the `[1,2,null,3]` notation into level-order slots.
///
/// Whitespace around brackets and tokens is ignored. `[]` yields no slots.
///
/// # Examples
///
/// ```
/// use algos::tree::{parse_level_order, ParseTreeError};
///
/// assert_eq!(parse_level_order::<i32>("[1, null, 2]"), Ok(vec![Some(1), None, Some(2)]));
/// assert_eq!(parse_level_order::<i32>("[]"), Ok(vec![]));
/// assert_eq!(parse_level_order::<i32>("1,2"), Err(ParseTreeError::MissingBrackets));
/// ```
pub fn parse_level_order<T>(s: &str) -> Result<Vec<Option<T>>, ParseTreeError>
where
    T: FromStr,
{
    let inner = s
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ParseTreeError::MissingBrackets)?
        .trim();

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(position, token)| {
            if token == NULL_TOKEN {
                return Ok(None);
            }
            token
                .parse()
                .map(Some)
                .map_err(|_| ParseTreeError::InvalidValue {
                    position,
                    token: token.to_owned(),
                })
        })
        .collect()
}

impl<T> FromStr for TreeNode<T>
where
    T: FromStr + Clone,
{
    type Err = ParseTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slots = parse_level_order(s)?;
        create_tree(&slots).ok_or(ParseTreeError::Empty)
    }
}
