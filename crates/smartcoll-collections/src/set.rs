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

//! # Sets
//!
//! Two set shapes share the same algebra through [`SmartSetOps`]:
//!
//! - [`SmartSet`] is backed by an `FxHashSet` and iterates in the hasher's
//!   order, which is deterministic for a given insertion history but not
//!   meaningful.
//! - [`SmartSortedSet`] is backed by a `BTreeSet` and iterates in ascending
//!   order, so folds and joins over it are stable.
//!
//! `union`, `intersection` and `difference` mutate the receiver. The
//! subset/superset queries never do; they work on a throwaway copy.

use crate::{
    collection::{cast_all, try_map_all, SmartCollection},
    error::{CollectionError, Result},
};
use rustc_hash::FxHashSet;
use std::{collections::BTreeSet, hash::Hash};

/// Set algebra shared by every set shape.
///
/// # Examples
///
/// ```rust
/// use smartcoll_collections::prelude::*;
///
/// let mut a = SmartSortedSet::from([1, 2, 3]);
/// a.union(&SmartSortedSet::from([3, 4]));
/// assert_eq!(a, SmartSortedSet::from([1, 2, 3, 4]));
/// assert!(SmartSortedSet::from([2, 4]).is_proper_subset_of(&a));
/// ```
pub trait SmartSetOps: SmartCollection + Clone + PartialEq {
    /// Adds every element of `other` to the receiver.
    fn union(&mut self, other: &Self) -> &mut Self
    where
        Self::Item: Clone,
    {
        let before = self.len();
        self.add_all_return(other.elements().cloned());
        tracing::trace!(
            target: "smartcoll::collections",
            before,
            after = self.len(),
            "set union"
        );
        self
    }

    /// Keeps only the elements also present in `other`.
    fn intersection(&mut self, other: &Self) -> &mut Self
    where
        Self::Item: PartialEq,
    {
        let before = self.len();
        self.retain_items(|e| other.contains(e));
        tracing::trace!(
            target: "smartcoll::collections",
            before,
            after = self.len(),
            "set intersection"
        );
        self
    }

    /// Removes every element present in `other`.
    fn difference(&mut self, other: &Self) -> &mut Self
    where
        Self::Item: PartialEq,
    {
        let before = self.len();
        self.retain_items(|e| !other.contains(e));
        tracing::trace!(
            target: "smartcoll::collections",
            before,
            after = self.len(),
            "set difference"
        );
        self
    }

    /// Returns `true` if every element of the receiver is in `other`.
    fn is_subset_of(&self, other: &Self) -> bool
    where
        Self::Item: PartialEq,
    {
        let mut rest = self.clone();
        rest.difference(other);
        rest.is_empty()
    }

    /// Returns `true` if the receiver is a subset of `other` and the two
    /// differ.
    fn is_proper_subset_of(&self, other: &Self) -> bool
    where
        Self::Item: PartialEq,
    {
        self.is_subset_of(other) && self != other
    }

    /// Returns `true` if every element of `other` is in the receiver.
    fn is_superset_of(&self, other: &Self) -> bool
    where
        Self::Item: PartialEq,
    {
        other.is_subset_of(self)
    }

    /// Returns `true` if the receiver is a superset of `other` and the two
    /// differ.
    fn is_proper_superset_of(&self, other: &Self) -> bool
    where
        Self::Item: PartialEq,
    {
        other.is_proper_subset_of(self)
    }
}

/// An unordered, hash-backed set.
#[derive(Debug, Clone)]
pub struct SmartSet<E> {
    inner: FxHashSet<E>,
}

impl<E> Default for SmartSet<E> {
    fn default() -> Self {
        Self {
            inner: FxHashSet::default(),
        }
    }
}

impl<E: Hash + Eq> PartialEq for SmartSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<E: Hash + Eq> Eq for SmartSet<E> {}

impl<E> SmartSet<E> {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the host set.
    #[inline]
    pub fn as_inner(&self) -> &FxHashSet<E> {
        &self.inner
    }

    /// Unwraps the host set.
    #[inline]
    pub fn into_inner(self) -> FxHashSet<E> {
        self.inner
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, E> {
        self.inner.iter()
    }
}

impl<E: Hash + Eq> SmartSet<E> {
    /// Returns a new set with `f` applied to every element. Elements that
    /// map to the same value collapse into one.
    pub fn transform<R, F>(&self, f: F) -> SmartSet<R>
    where
        R: Hash + Eq,
        F: FnMut(&E) -> R,
    {
        SmartSet {
            inner: self.inner.iter().map(f).collect(),
        }
    }

    /// Fallible [`transform`](Self::transform); the first error aborts.
    pub fn try_transform<R, Er, F>(&self, f: F) -> Result<SmartSet<R>>
    where
        R: Hash + Eq,
        F: FnMut(&E) -> std::result::Result<R, Er>,
        CollectionError: From<Er>,
    {
        Ok(try_map_all(self.inner.iter(), f)?.into_iter().collect())
    }

    /// Converts every element to `T`, failing with
    /// [`CollectionError::InvalidCast`] if any element does not convert.
    pub fn cast_each<T>(&self) -> Result<SmartSet<T>>
    where
        E: Clone,
        T: TryFrom<E> + Hash + Eq,
    {
        Ok(cast_all(self.inner.iter())?.into_iter().collect())
    }
}

impl<E: Hash + Eq> SmartCollection for SmartSet<E> {
    type Item = E;

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &E> {
        self.inner.iter()
    }

    #[inline]
    fn from_items<I: IntoIterator<Item = E>>(items: I) -> Self {
        Self {
            inner: items.into_iter().collect(),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn insert_item(&mut self, item: E) -> bool {
        self.inner.insert(item)
    }

    #[inline]
    fn retain_items<F: FnMut(&E) -> bool>(&mut self, keep: F) {
        self.inner.retain(keep);
    }

    #[inline]
    fn contains(&self, item: &E) -> bool
    where
        E: PartialEq,
    {
        self.inner.contains(item)
    }
}

impl<E: Hash + Eq + Clone> SmartSetOps for SmartSet<E> {}

impl<E: Hash + Eq> From<FxHashSet<E>> for SmartSet<E> {
    #[inline]
    fn from(inner: FxHashSet<E>) -> Self {
        Self { inner }
    }
}

impl<E: Hash + Eq> From<Vec<E>> for SmartSet<E> {
    #[inline]
    fn from(items: Vec<E>) -> Self {
        items.into_iter().collect()
    }
}

impl<E: Hash + Eq, const N: usize> From<[E; N]> for SmartSet<E> {
    #[inline]
    fn from(items: [E; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<E: Hash + Eq> FromIterator<E> for SmartSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<E: Hash + Eq> Extend<E> for SmartSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<E> IntoIterator for SmartSet<E> {
    type Item = E;
    type IntoIter = std::collections::hash_set::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a SmartSet<E> {
    type Item = &'a E;
    type IntoIter = std::collections::hash_set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<E: Hash + Eq + std::fmt::Display> std::fmt::Display for SmartSet<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.join(", "))
    }
}

/// An ordered set iterating in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SmartSortedSet<E> {
    inner: BTreeSet<E>,
}

impl<E> Default for SmartSortedSet<E> {
    fn default() -> Self {
        Self {
            inner: BTreeSet::new(),
        }
    }
}

impl<E> SmartSortedSet<E> {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the host set.
    #[inline]
    pub fn as_inner(&self) -> &BTreeSet<E> {
        &self.inner
    }

    /// Unwraps the host set.
    #[inline]
    pub fn into_inner(self) -> BTreeSet<E> {
        self.inner
    }

    /// Returns an iterator over the elements in ascending order.
    #[inline]
    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, E> {
        self.inner.iter()
    }
}

impl<E: Ord> SmartSortedSet<E> {
    /// Returns the smallest element.
    #[inline]
    pub fn first(&self) -> Result<&E> {
        self.inner
            .first()
            .ok_or(CollectionError::EmptyCollection { operation: "first" })
    }

    /// Returns the largest element.
    #[inline]
    pub fn last(&self) -> Result<&E> {
        self.inner
            .last()
            .ok_or(CollectionError::EmptyCollection { operation: "last" })
    }

    /// Returns a new set with `f` applied to every element.
    pub fn transform<R, F>(&self, f: F) -> SmartSortedSet<R>
    where
        R: Ord,
        F: FnMut(&E) -> R,
    {
        SmartSortedSet {
            inner: self.inner.iter().map(f).collect(),
        }
    }

    /// Fallible [`transform`](Self::transform); the first error aborts.
    pub fn try_transform<R, Er, F>(&self, f: F) -> Result<SmartSortedSet<R>>
    where
        R: Ord,
        F: FnMut(&E) -> std::result::Result<R, Er>,
        CollectionError: From<Er>,
    {
        Ok(try_map_all(self.inner.iter(), f)?.into_iter().collect())
    }

    /// Converts every element to `T`; see [`SmartSet::cast_each`].
    pub fn cast_each<T>(&self) -> Result<SmartSortedSet<T>>
    where
        E: Clone,
        T: TryFrom<E> + Ord,
    {
        Ok(cast_all(self.inner.iter())?.into_iter().collect())
    }
}

impl<E: Ord> SmartCollection for SmartSortedSet<E> {
    type Item = E;

    #[inline]
    fn elements(&self) -> impl Iterator<Item = &E> {
        self.inner.iter()
    }

    #[inline]
    fn from_items<I: IntoIterator<Item = E>>(items: I) -> Self {
        Self {
            inner: items.into_iter().collect(),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn insert_item(&mut self, item: E) -> bool {
        self.inner.insert(item)
    }

    #[inline]
    fn retain_items<F: FnMut(&E) -> bool>(&mut self, keep: F) {
        self.inner.retain(keep);
    }

    #[inline]
    fn contains(&self, item: &E) -> bool
    where
        E: PartialEq,
    {
        self.inner.contains(item)
    }
}

impl<E: Ord + Clone> SmartSetOps for SmartSortedSet<E> {}

impl<E> From<BTreeSet<E>> for SmartSortedSet<E> {
    #[inline]
    fn from(inner: BTreeSet<E>) -> Self {
        Self { inner }
    }
}

impl<E: Ord> From<Vec<E>> for SmartSortedSet<E> {
    #[inline]
    fn from(items: Vec<E>) -> Self {
        items.into_iter().collect()
    }
}

impl<E: Ord, const N: usize> From<[E; N]> for SmartSortedSet<E> {
    #[inline]
    fn from(items: [E; N]) -> Self {
        Self {
            inner: BTreeSet::from(items),
        }
    }
}

impl<E: Ord> FromIterator<E> for SmartSortedSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<E: Ord> Extend<E> for SmartSortedSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<E> IntoIterator for SmartSortedSet<E> {
    type Item = E;
    type IntoIter = std::collections::btree_set::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a SmartSortedSet<E> {
    type Item = &'a E;
    type IntoIter = std::collections::btree_set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<E: Ord + std::fmt::Display> std::fmt::Display for SmartSortedSet<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.join(", "))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mutual_subsets_are_equal(
            a in proptest::collection::vec(0u8..20, 0..15),
            b in proptest::collection::vec(0u8..20, 0..15),
        ) {
            let a = SmartSet::from(a);
            let b = SmartSet::from(b);
            prop_assert_eq!(a.is_subset_of(&b) && b.is_subset_of(&a), a == b);
        }

        #[test]
        fn union_is_superset_of_argument(
            a in proptest::collection::vec(any::<i16>(), 0..20),
            b in proptest::collection::vec(any::<i16>(), 0..20),
        ) {
            let mut a = SmartSortedSet::from(a);
            let b = SmartSortedSet::from(b);
            a.union(&b);
            prop_assert!(a.is_superset_of(&b));
        }

        #[test]
        fn difference_and_intersection_partition(
            a in proptest::collection::vec(0u8..30, 0..20),
            b in proptest::collection::vec(0u8..30, 0..20),
        ) {
            let a = SmartSet::from(a);
            let b = SmartSet::from(b);
            let mut inside = a.clone();
            inside.intersection(&b);
            let mut outside = a.clone();
            outside.difference(&b);
            prop_assert_eq!(inside.len() + outside.len(), a.len());
            inside.union(&outside);
            prop_assert_eq!(inside, a);
        }
    }
}
