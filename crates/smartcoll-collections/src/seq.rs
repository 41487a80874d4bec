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

//! # Ordered Sequence
//!
//! `SmartSeq<E>` wraps a `Vec<E>` and keeps insertion order through every
//! operation except the ones that reorder by definition (`reverse`).
//!
//! Positional operations clamp instead of failing: `take(n)` and `drop(n)`
//! treat `n > len` as `len`, and `tail` of an empty sequence is empty.
//! Only `head` and `last` require an element.

use crate::{
    collection::{cast_all, try_map_all, SmartCollection},
    error::{CollectionError, Result},
    map::SmartMap,
};
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// An ordered sequence decorated with the collection algebra.
///
/// # Examples
///
/// ```rust
/// use smartcoll_collections::prelude::*;
///
/// let seq = SmartSeq::from([1, 2, 3, 4]);
/// assert_eq!(seq.take(2), SmartSeq::from([1, 2]));
/// assert_eq!(seq.drop_while(|x| *x < 3), SmartSeq::from([3, 4]));
/// assert_eq!(seq.transform(|x| x * 10).join("-"), "10-20-30-40");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SmartSeq<E> {
    inner: Vec<E>,
}

impl<E> Default for SmartSeq<E> {
    fn default() -> Self {
        Self { inner: Vec::new() }
    }
}

impl<E> SmartSeq<E> {
    /// Creates an empty sequence.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        &self.inner
    }

    /// Returns the host vector.
    #[inline]
    pub fn as_inner(&self) -> &Vec<E> {
        &self.inner
    }

    /// Unwraps the host vector.
    #[inline]
    pub fn into_inner(self) -> Vec<E> {
        self.inner
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.inner.iter()
    }

    /// Appends an element.
    #[inline]
    pub fn push(&mut self, elem: E) {
        self.inner.push(elem);
    }

    /// Returns the element at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&E> {
        self.inner.get(index)
    }

    /// Returns the element at `index`, or `default` if `index` is out of
    /// bounds.
    #[inline]
    pub fn get_or(&self, index: usize, default: E) -> E
    where
        E: Clone,
    {
        self.inner.get(index).cloned().unwrap_or(default)
    }

    /// Returns the first element.
    #[inline]
    pub fn head(&self) -> Result<&E> {
        self.inner
            .first()
            .ok_or(CollectionError::EmptyCollection { operation: "head" })
    }

    /// Returns the last element.
    #[inline]
    pub fn last(&self) -> Result<&E> {
        self.inner
            .last()
            .ok_or(CollectionError::EmptyCollection { operation: "last" })
    }

    /// Returns a new sequence holding the positions `0..len`.
    pub fn indices(&self) -> SmartSeq<usize> {
        SmartSeq {
            inner: (0..self.inner.len()).collect(),
        }
    }

    /// Returns a new sequence with `f` applied to every element.
    pub fn transform<R, F>(&self, f: F) -> SmartSeq<R>
    where
        F: FnMut(&E) -> R,
    {
        SmartSeq {
            inner: self.inner.iter().map(f).collect(),
        }
    }

    /// Returns a new sequence with `f` applied to every element, or the
    /// first error `f` produced.
    pub fn try_transform<R, Er, F>(&self, f: F) -> Result<SmartSeq<R>>
    where
        F: FnMut(&E) -> std::result::Result<R, Er>,
        CollectionError: From<Er>,
    {
        Ok(SmartSeq {
            inner: try_map_all(self.inner.iter(), f)?,
        })
    }

    /// Converts every element to `T`.
    ///
    /// Fails with [`CollectionError::InvalidCast`] at the first element
    /// that does not convert; no partial result is returned.
    pub fn cast_each<T>(&self) -> Result<SmartSeq<T>>
    where
        E: Clone,
        T: TryFrom<E>,
    {
        Ok(SmartSeq {
            inner: cast_all(self.inner.iter())?,
        })
    }

    /// Returns a new sequence with the order reversed.
    pub fn reverse(&self) -> Self
    where
        E: Clone,
    {
        Self {
            inner: self.inner.iter().rev().cloned().collect(),
        }
    }

    /// Returns a new sequence without the first element.
    pub fn tail(&self) -> Self
    where
        E: Clone,
    {
        self.drop(1)
    }

    /// Returns a new sequence with the first `n` elements.
    pub fn take(&self, n: usize) -> Self
    where
        E: Clone,
    {
        let n = n.min(self.inner.len());
        Self {
            inner: self.inner[..n].to_vec(),
        }
    }

    /// Returns a new sequence without the first `n` elements.
    pub fn drop(&self, n: usize) -> Self
    where
        E: Clone,
    {
        let n = n.min(self.inner.len());
        Self {
            inner: self.inner[n..].to_vec(),
        }
    }

    /// Returns the longest prefix whose elements all match `predicate`.
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&E) -> bool,
        E: Clone,
    {
        self.take(self.prefix_len(predicate))
    }

    /// Returns everything after the longest prefix matching `predicate`.
    pub fn drop_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&E) -> bool,
        E: Clone,
    {
        self.drop(self.prefix_len(predicate))
    }

    #[inline]
    fn prefix_len<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&E) -> bool,
    {
        self.inner
            .iter()
            .position(|e| !predicate(e))
            .unwrap_or(self.inner.len())
    }

    /// Pairs elements positionally with `other` into a mapping.
    ///
    /// `other` may be any iterable, including another `SmartSeq` by value
    /// or by reference. The result is truncated to the shorter input;
    /// surplus elements of the longer one are dropped. If the receiver
    /// repeats an element, the later pair wins.
    pub fn zip_with<I>(&self, other: I) -> SmartMap<E, I::Item>
    where
        E: Hash + Eq + Clone,
        I: IntoIterator,
    {
        self.inner
            .iter()
            .cloned()
            .zip(other)
            .collect()
    }

    /// Removes repeated elements in place, keeping the first occurrence of
    /// each.
    pub fn remove_duplicates(&mut self) -> &mut Self
    where
        E: Hash + Eq + Clone,
    {
        let before = self.inner.len();
        let mut seen = FxHashSet::default();
        self.inner.retain(|e| seen.insert(e.clone()));
        tracing::trace!(
            target: "smartcoll::collections",
            removed = before - self.inner.len(),
            "removed duplicates"
        );
        self
    }

    /// Inserts `elem` between every pair of adjacent elements, in place.
    ///
    /// Sequences with fewer than two elements are left unchanged.
    pub fn intersperse(&mut self, elem: E) -> &mut Self
    where
        E: Clone,
    {
        if self.inner.len() < 2 {
            return self;
        }
        let old = std::mem::take(&mut self.inner);
        let mut out = Vec::with_capacity(old.len() * 2 - 1);
        for (i, e) in old.into_iter().enumerate() {
            if i > 0 {
                out.push(elem.clone());
            }
            out.push(e);
        }
        self.inner = out;
        self
    }

    /// Counts how often each distinct element occurs.
    pub fn occurrence_count_map(&self) -> SmartMap<E, usize>
    where
        E: Hash + Eq + Clone,
    {
        let mut counts = SmartMap::new();
        for e in &self.inner {
            *counts.entry(e.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl<E> SmartCollection for SmartSeq<E> {
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
        self.inner.push(item);
        true
    }

    #[inline]
    fn retain_items<F: FnMut(&E) -> bool>(&mut self, keep: F) {
        self.inner.retain(keep);
    }
}

/// An element of a nested sequence: either a plain value or another
/// sequence of nested elements.
///
/// Nesting is owned, so a sequence can never contain itself and
/// [`SmartSeq::flatten`] always terminates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A plain value.
    Item(T),
    /// A nested sequence.
    Seq(SmartSeq<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wraps a plain value.
    #[inline]
    pub fn item(value: T) -> Self {
        Nested::Item(value)
    }

    /// Wraps a nested sequence.
    #[inline]
    pub fn seq<I: IntoIterator<Item = Nested<T>>>(items: I) -> Self {
        Nested::Seq(items.into_iter().collect())
    }
}

impl<T: Clone> SmartSeq<Nested<T>> {
    /// Recursively expands nested sequences into one flat sequence,
    /// depth-first and in order.
    pub fn flatten(&self) -> SmartSeq<T> {
        fn walk<T: Clone>(items: &[Nested<T>], out: &mut Vec<T>) {
            for item in items {
                match item {
                    Nested::Item(v) => out.push(v.clone()),
                    Nested::Seq(s) => walk(&s.inner, out),
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.inner, &mut out);
        SmartSeq { inner: out }
    }
}

impl<E> From<Vec<E>> for SmartSeq<E> {
    #[inline]
    fn from(inner: Vec<E>) -> Self {
        Self { inner }
    }
}

impl<E: Clone> From<&[E]> for SmartSeq<E> {
    #[inline]
    fn from(items: &[E]) -> Self {
        Self {
            inner: items.to_vec(),
        }
    }
}

impl<E, const N: usize> From<[E; N]> for SmartSeq<E> {
    #[inline]
    fn from(items: [E; N]) -> Self {
        Self {
            inner: Vec::from(items),
        }
    }
}

impl<E> FromIterator<E> for SmartSeq<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for SmartSeq<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<E> IntoIterator for SmartSeq<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a SmartSeq<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<E: std::fmt::Display> std::fmt::Display for SmartSeq<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.join(", "))
    }
}
