//! Utility functions and traits for [`ProbeMap`]

use crate::ProbeMap;
use std::hash::{BuildHasher, Hash};

/// Extension trait for map implementations that provides additional utility methods
pub trait MapExtensions<K, V> {
    /// Returns the active keys of the table as a Vec
    fn keys(&self) -> Vec<K>;

    /// Returns the active values of the table as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns true if the table holds an active mapping for the given key
    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized;
}

impl<K, V, S> MapExtensions<K, V> for ProbeMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }
}

/// Creates a [`ProbeMap`] from an iterator of key-value pairs, skipping
/// duplicates of already-inserted keys
#[allow(dead_code)]
pub fn from_iter<K, V, I>(iter: I) -> ProbeMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    let iter = iter.into_iter();
    let mut map = ProbeMap::new();

    for (key, value) in iter {
        map.insert(key, value);
    }

    map
}
