//! Key-value and membership containers layered on [`OrderedTree`].
//!
//! Every map entry is a single tree element compared by key alone; the value
//! is an opaque payload that never participates in ordering. Iteration walks
//! the backing tree in pre-order, which matches insertion order only until the
//! first removal. Display output is always ascending.

mod set;

use std::{borrow::Borrow, cmp::Ordering, fmt};

use crate::{
    error::{Result, TreeError},
    tree::{OrderedTree, PreOrder},
};

pub use self::set::OrderedSet;

#[derive(Clone)]
struct MapEntry<K, V> {
    key: K,
    value: V,
}

impl<K: Ord, V> PartialEq for MapEntry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord, V> Eq for MapEntry<K, V> {}

impl<K: Ord, V> PartialOrd for MapEntry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V> Ord for MapEntry<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K, V> Borrow<K> for MapEntry<K, V> {
    fn borrow(&self) -> &K {
        &self.key
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for MapEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.key, self.value)
    }
}

/// An ordered map backed by an unbalanced binary search tree.
///
/// # Examples
/// ```
/// use spanwalk_core::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// assert_eq!(map.put(1, "one"), None);
/// assert_eq!(map.put(10, "ten"), None);
/// assert_eq!(map.put(2, "two"), None);
/// assert_eq!(map.put(2, "deux"), Some("two"));
///
/// assert_eq!(map.get(&2), Some(&"deux"));
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.to_string(), "<1,one> <2,deux> <10,ten>");
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    storage: OrderedTree<MapEntry<K, V>>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            storage: OrderedTree::new(),
        }
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: OrderedTree::new(),
        }
    }

    /// Number of entries, recomputed from the backing tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` when the map holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Iterates over `(key, value)` pairs in the backing tree's pre-order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.storage.pre_order(),
        }
    }

    /// Iterates over keys in the backing tree's pre-order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Collects the values in the backing tree's pre-order.
    ///
    /// Duplicate values are kept; only keys are unique.
    #[must_use]
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, value)| value.clone()).collect()
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Associates `value` with `key`, returning the previously stored value.
    ///
    /// An existing entry is removed and a fresh entry inserted in its place,
    /// so the replaced entry's position in the tree is not preserved.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let previous = self
            .storage
            .remove(&key)
            .ok()
            .map(|entry| entry.value);
        let inserted = self.storage.insert(MapEntry { key, value });
        debug_assert!(inserted.is_ok(), "key was removed before reinsertion");
        previous
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.storage.find(key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.storage.find_mut(key).map(|entry| &mut entry.value)
    }

    /// Returns `true` when an entry exists for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.storage.contains(key)
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.storage.remove(key).ok().map(|entry| entry.value)
    }

    /// Collects the keys into a fresh [`OrderedSet`].
    #[must_use]
    pub fn key_set(&self) -> OrderedSet<K>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }

    /// Bulk merge is not offered by this map.
    ///
    /// # Errors
    /// Always returns [`TreeError::Unsupported`].
    pub fn put_all(&mut self, _other: &Self) -> Result<()> {
        Err(TreeError::Unsupported {
            operation: "put_all",
        })
    }

    /// Value membership queries are not offered by this map.
    ///
    /// # Errors
    /// Always returns [`TreeError::Unsupported`].
    pub fn contains_value(&self, _value: &V) -> Result<bool> {
        Err(TreeError::Unsupported {
            operation: "contains_value",
        })
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.storage
                    .in_order()
                    .map(|entry| (&entry.key, &entry.value)),
            )
            .finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.storage, f)
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over the entries of an [`OrderedMap`].
pub struct Iter<'a, K, V> {
    inner: PreOrder<'a, MapEntry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }
}
