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

//! # FIFO Queue
//!
//! `SmartQueue<E>` wraps a `VecDeque<E>`. Elements enter at the back and
//! leave from the front. The failing accessors (`remove`, `element`) and
//! the absent-returning ones (`poll`, `peek`) mirror each other.

use crate::{
    collection::{cast_all, try_map_all, SmartCollection},
    error::{CollectionError, Result},
};
use std::collections::VecDeque;

/// A first-in first-out queue decorated with the collection algebra.
///
/// # Examples
///
/// ```rust
/// use smartcoll_collections::prelude::*;
///
/// let mut queue = SmartQueue::new();
/// queue.offer_return(1).offer_return(2);
/// assert_eq!(queue.poll(), Some(1));
/// assert_eq!(queue, SmartQueue::from([2]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SmartQueue<E> {
    inner: VecDeque<E>,
}

impl<E> Default for SmartQueue<E> {
    fn default() -> Self {
        Self {
            inner: VecDeque::new(),
        }
    }
}

impl<E> SmartQueue<E> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the host deque.
    #[inline]
    pub fn as_inner(&self) -> &VecDeque<E> {
        &self.inner
    }

    /// Unwraps the host deque.
    #[inline]
    pub fn into_inner(self) -> VecDeque<E> {
        self.inner
    }

    /// Returns an iterator from front to back.
    #[inline]
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, E> {
        self.inner.iter()
    }

    /// Appends `elem` at the back. Always accepted.
    #[inline]
    pub fn offer(&mut self, elem: E) -> bool {
        self.inner.push_back(elem);
        true
    }

    /// Appends `elem` at the back and returns the queue.
    #[inline]
    pub fn offer_return(&mut self, elem: E) -> &mut Self {
        self.inner.push_back(elem);
        self
    }

    /// Removes and returns the front element.
    #[inline]
    pub fn remove(&mut self) -> Result<E> {
        self.inner
            .pop_front()
            .ok_or(CollectionError::EmptyCollection { operation: "remove" })
    }

    /// Returns the front element without removing it.
    #[inline]
    pub fn element(&self) -> Result<&E> {
        self.inner
            .front()
            .ok_or(CollectionError::EmptyCollection { operation: "element" })
    }

    /// Removes and returns the front element, or `None` if empty.
    #[inline]
    pub fn poll(&mut self) -> Option<E> {
        self.inner.pop_front()
    }

    /// Returns the front element, or `None` if empty.
    #[inline]
    pub fn peek(&self) -> Option<&E> {
        self.inner.front()
    }

    /// Returns a new queue with `f` applied to every element, front to back.
    pub fn transform<R, F>(&self, f: F) -> SmartQueue<R>
    where
        F: FnMut(&E) -> R,
    {
        SmartQueue {
            inner: self.inner.iter().map(f).collect(),
        }
    }

    /// Fallible [`transform`](Self::transform); the first error aborts.
    pub fn try_transform<R, Er, F>(&self, f: F) -> Result<SmartQueue<R>>
    where
        F: FnMut(&E) -> std::result::Result<R, Er>,
        CollectionError: From<Er>,
    {
        Ok(SmartQueue {
            inner: try_map_all(self.inner.iter(), f)?.into(),
        })
    }

    /// Converts every element to `T`, failing with
    /// [`CollectionError::InvalidCast`] if any element does not convert.
    pub fn cast_each<T>(&self) -> Result<SmartQueue<T>>
    where
        E: Clone,
        T: TryFrom<E>,
    {
        Ok(SmartQueue {
            inner: cast_all(self.inner.iter())?.into(),
        })
    }
}

impl<E> SmartCollection for SmartQueue<E> {
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
        self.offer(item)
    }

    #[inline]
    fn retain_items<F: FnMut(&E) -> bool>(&mut self, keep: F) {
        self.inner.retain(keep);
    }
}

impl<E> From<VecDeque<E>> for SmartQueue<E> {
    #[inline]
    fn from(inner: VecDeque<E>) -> Self {
        Self { inner }
    }
}

impl<E> From<Vec<E>> for SmartQueue<E> {
    #[inline]
    fn from(items: Vec<E>) -> Self {
        Self {
            inner: items.into(),
        }
    }
}

impl<E, const N: usize> From<[E; N]> for SmartQueue<E> {
    #[inline]
    fn from(items: [E; N]) -> Self {
        Self {
            inner: VecDeque::from(items),
        }
    }
}

impl<E> FromIterator<E> for SmartQueue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for SmartQueue<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<E> IntoIterator for SmartQueue<E> {
    type Item = E;
    type IntoIter = std::collections::vec_deque::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a SmartQueue<E> {
    type Item = &'a E;
    type IntoIter = std::collections::vec_deque::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<E: std::fmt::Display> std::fmt::Display for SmartQueue<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.join(", "))
    }
}
