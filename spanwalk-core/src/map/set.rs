//! Membership-only counterpart of [`super::OrderedMap`].

use std::{borrow::Borrow, fmt};

use crate::tree::{InOrder, OrderedTree, PreOrder};

/// An ordered set backed by an unbalanced binary search tree.
///
/// # Examples
/// ```
/// use spanwalk_core::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// assert!(set.add(3));
/// assert!(set.add(1));
/// assert!(!set.add(3));
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 1]);
/// assert_eq!(set.to_string(), "1 3");
/// ```
#[derive(Clone)]
pub struct OrderedSet<K> {
    storage: OrderedTree<K>,
}

impl<K> Default for OrderedSet<K> {
    fn default() -> Self {
        Self {
            storage: OrderedTree::new(),
        }
    }
}

impl<K> OrderedSet<K> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: OrderedTree::new(),
        }
    }

    /// Number of members, recomputed from the backing tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` when the set has no members.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Iterates over members in the backing tree's pre-order.
    #[must_use]
    pub fn iter(&self) -> PreOrder<'_, K> {
        self.storage.pre_order()
    }

    /// Iterates over members in ascending order.
    #[must_use]
    pub fn in_order(&self) -> InOrder<'_, K> {
        self.storage.in_order()
    }
}

impl<K: Ord> OrderedSet<K> {
    /// Adds `key`, returning `true` when it was not already a member.
    pub fn add(&mut self, key: K) -> bool {
        self.storage.insert(key).is_ok()
    }

    /// Returns `true` when `key` is a member.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.storage.contains(key)
    }

    /// Removes `key`, returning `true` when it was a member.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.storage.remove(key).is_ok()
    }
}

impl<K: Ord> FromIterator<K> for OrderedSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.add(key);
        }
        set
    }
}

impl<'a, K> IntoIterator for &'a OrderedSet<K> {
    type Item = &'a K;
    type IntoIter = PreOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug> fmt::Debug for OrderedSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.storage, f)
    }
}

impl<K: fmt::Display> fmt::Display for OrderedSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.storage, f)
    }
}
