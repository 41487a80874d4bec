// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Key-Value Mapping
//!
//! `SmartMap<K, V>` wraps an `FxHashMap<K, V>`. A mapping does not yield
//! single elements by reference the way the other shapes do, so it carries
//! the shared algebra in entry-wise form: every predicate, fold and
//! transform receives the key and the value separately.
//!
//! ## Iteration order
//!
//! `head`, `tail`, `find`, `reduce` and `join` follow the host's iteration
//! order. It is stable for a given insertion history but carries no
//! meaning; callers needing a meaningful order should sort the result of
//! [`SmartMap::iter`].

use crate::{
    collection::cast_one,
    error::{CollectionError, Result},
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{
    collections::hash_map::{self, Entry},
    fmt::{Display, Write},
    hash::Hash,
};

/// A key-value mapping decorated with the entry-wise collection algebra.
///
/// # Examples
///
/// ```rust
/// use smartcoll_collections::prelude::*;
///
/// let scores = SmartMap::from([("a", 1), ("b", 2)]);
/// let swapped = scores.swap().unwrap();
/// assert_eq!(swapped, SmartMap::from([(1, "a"), (2, "b")]));
///
/// let merged = scores.merge_with(&SmartMap::from([("b", 10)]), |x, y| x + y);
/// assert_eq!(merged.get(&"b"), Some(&12));
/// ```
#[derive(Debug, Clone)]
pub struct SmartMap<K, V> {
    inner: FxHashMap<K, V>,
}

impl<K, V> Default for SmartMap<K, V> {
    fn default() -> Self {
        Self {
            inner: FxHashMap::default(),
        }
    }
}

impl<K, V> SmartMap<K, V> {
    /// Creates an empty mapping.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the host map.
    #[inline]
    pub fn as_inner(&self) -> &FxHashMap<K, V> {
        &self.inner
    }

    /// Unwraps the host map.
    #[inline]
    pub fn into_inner(self) -> FxHashMap<K, V> {
        self.inner
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the mapping has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the entries.
    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.inner.iter()
    }

    /// Returns an iterator over the keys.
    #[inline]
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.inner.keys()
    }

    /// Returns an iterator over the values.
    #[inline]
    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.inner.values()
    }

    /// Returns the first entry in iteration order.
    pub fn head(&self) -> Result<(&K, &V)> {
        self.inner
            .iter()
            .next()
            .ok_or(CollectionError::EmptyCollection { operation: "head" })
    }

    /// Returns `true` if some entry holds a value equal to `value`.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.inner.values().any(|v| v == value)
    }

    /// Calls `f` on every entry.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V),
    {
        for (k, v) in &self.inner {
            f(k, v);
        }
    }

    /// Left fold over the entries.
    pub fn reduce<R, F>(&self, initial: R, mut f: F) -> R
    where
        F: FnMut(R, &K, &V) -> R,
    {
        self.inner.iter().fold(initial, |acc, (k, v)| f(acc, k, v))
    }

    /// Returns the value of the first entry matching `predicate`.
    ///
    /// Fails with [`CollectionError::NotFound`] if nothing matches.
    pub fn find<P>(&self, mut predicate: P) -> Result<&V>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.inner
            .iter()
            .find(|(k, v)| predicate(*k, *v))
            .map(|(_, v)| v)
            .ok_or(CollectionError::NotFound)
    }

    /// Counts the entries matching `predicate`.
    pub fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.inner.iter().filter(|(k, v)| predicate(*k, *v)).count()
    }

    /// Returns `true` if any entry matches `predicate`.
    pub fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.inner.iter().any(|(k, v)| predicate(k, v))
    }

    /// Returns `true` if every entry matches `predicate`; vacuously `true`
    /// when empty.
    pub fn forall<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.inner.iter().all(|(k, v)| predicate(k, v))
    }

    /// Renders the entries as `key{kv_delim}value`, separated by
    /// `entry_delim`. An empty mapping joins to the empty string.
    pub fn join(&self, entry_delim: &str, kv_delim: &str) -> String
    where
        K: Display,
        V: Display,
    {
        let mut out = String::new();
        for (i, (k, v)) in self.inner.iter().enumerate() {
            if i > 0 {
                out.push_str(entry_delim);
            }
            // Writing into a `String` cannot fail.
            let _ = write!(out, "{k}{kv_delim}{v}");
        }
        out
    }

    /// Returns a new mapping built from `f` applied to every entry.
    ///
    /// `f` may change both key and value. If two entries map to the same
    /// key, the one visited later wins.
    pub fn transform<K2, V2, F>(&self, mut f: F) -> SmartMap<K2, V2>
    where
        K2: Hash + Eq,
        F: FnMut(&K, &V) -> (K2, V2),
    {
        self.inner.iter().map(|(k, v)| f(k, v)).collect()
    }

    /// Fallible [`transform`](Self::transform); the first error aborts.
    pub fn try_transform<K2, V2, Er, F>(&self, mut f: F) -> Result<SmartMap<K2, V2>>
    where
        K2: Hash + Eq,
        F: FnMut(&K, &V) -> std::result::Result<(K2, V2), Er>,
        CollectionError: From<Er>,
    {
        self.inner
            .iter()
            .map(|(k, v)| f(k, v))
            .collect::<std::result::Result<SmartMap<K2, V2>, Er>>()
            .map_err(CollectionError::from)
    }

    /// Converts every key and value, failing with
    /// [`CollectionError::InvalidCast`] at the first entry that does not
    /// convert.
    pub fn cast_each<K2, V2>(&self) -> Result<SmartMap<K2, V2>>
    where
        K: Clone,
        V: Clone,
        K2: TryFrom<K> + Hash + Eq,
        V2: TryFrom<V>,
    {
        self.inner
            .iter()
            .enumerate()
            .map(|(index, (k, v))| -> Result<(K2, V2)> {
                Ok((cast_one(index, k)?, cast_one(index, v)?))
            })
            .collect()
    }
}

impl<K: Hash + Eq, V> SmartMap<K, V> {
    /// Returns the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    /// Returns the value stored under `key`, or `default` if absent.
    #[inline]
    pub fn get_or(&self, key: &K, default: V) -> V
    where
        V: Clone,
    {
        self.inner.get(key).cloned().unwrap_or(default)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    /// Inserts an entry, returning the value it displaced.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    /// Removes `key`, returning its value.
    #[inline]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    /// Returns the host entry for `key`.
    #[inline]
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        self.inner.entry(key)
    }

    /// Returns a new mapping without the first entry in iteration order.
    ///
    /// Fails with [`CollectionError::UnsupportedOnEmpty`] when empty.
    pub fn tail(&self) -> Result<Self>
    where
        K: Clone,
        V: Clone,
    {
        let mut entries = self.inner.iter();
        if entries.next().is_none() {
            return Err(CollectionError::UnsupportedOnEmpty { operation: "tail" });
        }
        Ok(entries.map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    /// Returns a new mapping with the entries matching `predicate`.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
        K: Clone,
        V: Clone,
    {
        self.inner
            .iter()
            .filter(|(k, v)| predicate(*k, *v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns a new mapping without the entries matching `predicate`.
    pub fn remove_where<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
        K: Clone,
        V: Clone,
    {
        self.filter(|k, v| !predicate(k, v))
    }

    /// Returns a new mapping holding every entry of both mappings.
    ///
    /// For keys present in both, the value is `conflict(ours, theirs)`.
    pub fn merge_with<F>(&self, other: &Self, mut conflict: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&V, &V) -> V,
    {
        let mut merged = self.clone();
        for (k, theirs) in &other.inner {
            match merged.inner.get_mut(k) {
                Some(ours) => *ours = conflict(ours, theirs),
                None => {
                    merged.inner.insert(k.clone(), theirs.clone());
                }
            }
        }
        merged
    }

    /// Replaces the entry at `seek_key` with `(new_key, new_value)` if its
    /// current value equals `seek_value`; otherwise leaves the mapping
    /// unchanged.
    ///
    /// Fails with [`CollectionError::PreconditionViolated`] if `seek_key`
    /// is absent.
    pub fn replace(
        &mut self,
        seek_key: &K,
        seek_value: &V,
        new_key: K,
        new_value: V,
    ) -> Result<&mut Self>
    where
        V: PartialEq,
    {
        let current = self.inner.get(seek_key).ok_or_else(|| {
            tracing::debug!(target: "smartcoll::collections", "replace with absent seek key");
            CollectionError::PreconditionViolated {
                reason: "seek key is absent",
            }
        })?;

        if current == seek_value {
            self.inner.remove(seek_key);
            self.inner.insert(new_key, new_value);
        }
        Ok(self)
    }

    /// Returns `true` if no two keys share a value.
    pub fn is_bijective(&self) -> bool
    where
        V: Hash + Eq,
    {
        let distinct: FxHashSet<&V> = self.inner.values().collect();
        distinct.len() == self.inner.len()
    }

    /// Returns a new mapping with keys and values exchanged.
    ///
    /// Fails with [`CollectionError::PreconditionViolated`] if the mapping
    /// is not bijective, since entries would be lost.
    pub fn swap(&self) -> Result<SmartMap<V, K>>
    where
        K: Clone,
        V: Hash + Eq + Clone,
    {
        if !self.is_bijective() {
            tracing::debug!(
                target: "smartcoll::collections",
                entries = self.inner.len(),
                "swap rejected: mapping is not bijective"
            );
            return Err(CollectionError::PreconditionViolated {
                reason: "swap requires a bijective mapping",
            });
        }
        Ok(self
            .inner
            .iter()
            .map(|(k, v)| (v.clone(), k.clone()))
            .collect())
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for SmartMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: Hash + Eq, V: Eq> Eq for SmartMap<K, V> {}

impl<K: Hash + Eq, V> From<FxHashMap<K, V>> for SmartMap<K, V> {
    #[inline]
    fn from(inner: FxHashMap<K, V>) -> Self {
        Self { inner }
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for SmartMap<K, V> {
    #[inline]
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for SmartMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for SmartMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<K, V> IntoIterator for SmartMap<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a SmartMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<K: Display, V: Display> Display for SmartMap<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.join(", ", ": "))
    }
}
