//! Unbalanced binary search tree storage.
//!
//! [`OrderedTree`] stores unique elements ordered by [`Ord`]. The shape of the
//! tree is determined solely by insertion history: there are no rotations, so
//! a sorted insertion sequence degenerates into a list and every operation is
//! `O(n)` in the worst case.
//!
//! Structural operations walk the tree with explicit cursors, never
//! recursion. Two traversal orders are exposed:
//!
//! - [`OrderedTree::in_order`] yields elements in ascending order and backs
//!   display and ordering guarantees.
//! - [`OrderedTree::pre_order`] yields root-left-right and backs general
//!   iteration in the map and set layers. For a tree built purely by
//!   sequential inserts this equals insertion order; any removal breaks that
//!   equivalence.

mod iter;

use std::{borrow::Borrow, cmp::Ordering, fmt, mem};

use crate::error::{Result, TreeError};

pub use self::iter::{InOrder, PreOrder};

type Link<T> = Option<Box<TreeNode<T>>>;

#[derive(Debug)]
struct TreeNode<T> {
    element: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> TreeNode<T> {
    const fn leaf(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }
}

/// An unbalanced binary search tree holding unique elements.
///
/// # Examples
/// ```
/// use spanwalk_core::OrderedTree;
///
/// let mut tree = OrderedTree::new();
/// for value in [310, 112, 440, 330, 471] {
///     tree.insert(value)?;
/// }
/// assert_eq!(tree.len(), 5);
/// assert_eq!(tree.to_string(), "112 310 330 440 471");
///
/// let pre_order: Vec<_> = tree.pre_order().copied().collect();
/// assert_eq!(pre_order, vec![310, 112, 440, 330, 471]);
/// # Ok::<(), spanwalk_core::TreeError>(())
/// ```
pub struct OrderedTree<T> {
    root: Link<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<T> OrderedTree<T> {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` when the tree holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the stored elements by walking the tree.
    ///
    /// The count is recomputed on every call.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pre_order().count()
    }

    /// Removes every element, leaving the tree logically empty.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }

    /// Returns the smallest element, or `None` when the tree is empty.
    #[must_use]
    pub fn find_min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.element)
    }

    /// Removes and returns the smallest element.
    ///
    /// The leftmost node is unlinked and its right subtree takes its place.
    ///
    /// # Errors
    /// Returns [`TreeError::NotFound`] when the tree is empty.
    pub fn remove_min(&mut self) -> Result<T> {
        take_min(&mut self.root).ok_or(TreeError::NotFound {
            operation: "remove_min",
        })
    }

    /// Iterates over the elements in ascending order.
    #[must_use]
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref())
    }

    /// Iterates over the elements root first, then the left subtree, then
    /// the right subtree.
    #[must_use]
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root.as_deref())
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Inserts `element`, preserving the search-tree ordering.
    ///
    /// # Errors
    /// Returns [`TreeError::DuplicateKey`] when an element comparing equal to
    /// `element` is already stored. The tree is left unchanged and `element`
    /// is dropped.
    ///
    /// # Examples
    /// ```
    /// use spanwalk_core::{OrderedTree, TreeError};
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(7)?;
    /// assert_eq!(tree.insert(7), Err(TreeError::DuplicateKey));
    /// assert_eq!(tree.len(), 1);
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn insert(&mut self, element: T) -> Result<()> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match element.cmp(&node.element) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(TreeError::DuplicateKey),
            };
        }
        *link = Some(Box::new(TreeNode::leaf(element)));
        Ok(())
    }

    /// Returns the stored element comparing equal to `key`.
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(node.element.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.element),
            };
        }
        None
    }

    /// Returns `true` when an element comparing equal to `key` is stored.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Mutable lookup for containers whose ordering ignores part of the
    /// element. Callers must not change how the element compares.
    pub(crate) fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        locate(&mut self.root, key)
            .and_then(Option::as_mut)
            .map(|node| &mut node.element)
    }

    /// Removes and returns the element comparing equal to `key`.
    ///
    /// Leaf and single-child nodes are spliced out. A node with two children
    /// takes the in-order predecessor (the maximum of its left subtree) as its
    /// new element, and the predecessor node is unlinked from that subtree.
    ///
    /// # Errors
    /// Returns [`TreeError::NotFound`] when no element matches `key`.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        locate(&mut self.root, key)
            .and_then(detach)
            .ok_or(TreeError::NotFound {
                operation: "remove",
            })
    }
}

impl<T: Clone> Clone for OrderedTree<T> {
    /// Copies the tree node by node, keeping its exact shape.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        let mut pending: Vec<(&TreeNode<T>, &mut Link<T>)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            pending.push((root, &mut copy.root));
        }
        while let Some((source, slot)) = pending.pop() {
            let node = slot.insert(Box::new(TreeNode::leaf(source.element.clone())));
            let TreeNode { left, right, .. } = &mut **node;
            if let Some(child) = source.left.as_deref() {
                pending.push((child, left));
            }
            if let Some(child) = source.right.as_deref() {
                pending.push((child, right));
            }
        }
        copy
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, element) in self.in_order().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}

/// Walks from `link` to the link holding the element equal to `key`.
fn locate<'a, T, Q>(mut link: &'a mut Link<T>, key: &Q) -> Option<&'a mut Link<T>>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    loop {
        let ordering = key.cmp(link.as_deref()?.element.borrow());
        link = match ordering {
            Ordering::Equal => return Some(link),
            Ordering::Less => &mut link.as_mut()?.left,
            Ordering::Greater => &mut link.as_mut()?.right,
        };
    }
}

/// Unlinks the node held by `link` and returns its element.
fn detach<T>(link: &mut Link<T>) -> Option<T> {
    let mut node = link.take()?;
    match (node.left.take(), node.right.take()) {
        (None, None) => Some(node.element),
        (Some(child), None) | (None, Some(child)) => {
            *link = Some(child);
            Some(node.element)
        }
        (Some(left), Some(right)) => {
            let mut left = Some(left);
            let predecessor = take_max(&mut left)?;
            let removed = mem::replace(&mut node.element, predecessor);
            node.left = left;
            node.right = Some(right);
            *link = Some(node);
            Some(removed)
        }
    }
}

fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let mut node = link.take()?;
    *link = node.right.take();
    Some(node.element)
}

fn take_max<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.right.is_some() {
        link = &mut link.as_mut()?.right;
    }
    let mut node = link.take()?;
    *link = node.left.take();
    Some(node.element)
}
