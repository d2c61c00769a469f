//! Borrowing traversals over [`super::OrderedTree`].

use std::iter::FusedIterator;

use super::TreeNode;

/// Ascending traversal created by [`super::OrderedTree::in_order`].
#[derive(Clone, Debug)]
pub struct InOrder<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(super) fn new(root: Option<&'a TreeNode<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut node: Option<&'a TreeNode<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        Some(&node.element)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Root-left-right traversal created by [`super::OrderedTree::pre_order`].
#[derive(Clone, Debug)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(super) fn new(root: Option<&'a TreeNode<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.element)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}
