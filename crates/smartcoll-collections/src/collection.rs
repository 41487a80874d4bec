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

//! # Shared Collection Algebra
//!
//! `SmartCollection` is the capability set every element-based shape
//! (`SmartSeq`, `SmartSet`, `SmartSortedSet`, `SmartQueue`) shares. A shape
//! implements five primitives once (iterate, rebuild, length, insert,
//! retain) and receives the whole algebra on top of them.
//!
//! ## New instance vs. in place
//!
//! The two contracts are kept apart by the receiver type:
//!
//! - `&self` operations (`filter`, `remove_where`, the shapes' `transform`,
//!   ...) allocate a fresh collection and never touch the receiver.
//! - `&mut self` operations (`add_return`, `replace_where`, set `union`,
//!   queue `offer_return`, ...) mutate the receiver and return it as
//!   `&mut Self` for chaining.
//!
//! ## Iteration order
//!
//! `reduce`, `find` and `join` visit elements in the host's iteration
//! order. That order is insertion order for sequences and queues, ascending
//! for sorted sets, and unspecified (though deterministic for a given
//! history) for hash sets.

use crate::error::{CollectionError, Result};
use crate::map::SmartMap;
use num_traits::{One, Zero};
use smartcoll_core::{arithmetic, Numeric};
use std::fmt::{Display, Write};
use std::hash::Hash;

/// The capability set shared by all element-based collection shapes.
pub trait SmartCollection: Sized {
    /// The element type.
    type Item;

    /// Iterates the elements by reference in the host's iteration order.
    fn elements(&self) -> impl Iterator<Item = &Self::Item>;

    /// Builds a fresh collection of the same shape from `items`.
    fn from_items<I: IntoIterator<Item = Self::Item>>(items: I) -> Self;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Inserts one element, returning `false` if the shape rejected it as a
    /// duplicate.
    fn insert_item(&mut self, item: Self::Item) -> bool;

    /// Keeps only the elements for which `keep` returns `true`.
    fn retain_items<F: FnMut(&Self::Item) -> bool>(&mut self, keep: F);

    /// Returns `true` if the collection has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if an element equal to `item` is present.
    #[inline]
    fn contains(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.elements().any(|e| e == item)
    }

    /// Returns a new collection with the elements matching `predicate`.
    fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        Self::from_items(self.elements().filter(|e| predicate(e)).cloned())
    }

    /// Returns a new collection without the elements matching `predicate`.
    fn remove_where<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        self.filter(|e| !predicate(e))
    }

    /// Left fold over the elements.
    #[inline]
    fn reduce<R, F>(&self, initial: R, f: F) -> R
    where
        F: FnMut(R, &Self::Item) -> R,
    {
        self.elements().fold(initial, f)
    }

    /// Left fold that stops at the first error.
    #[inline]
    fn try_reduce<R, E, F>(&self, initial: R, f: F) -> std::result::Result<R, E>
    where
        F: FnMut(R, &Self::Item) -> std::result::Result<R, E>,
    {
        self.elements().try_fold(initial, f)
    }

    /// Returns the first element matching `predicate`.
    ///
    /// Fails with [`CollectionError::NotFound`] if nothing matches.
    fn find<P>(&self, mut predicate: P) -> Result<&Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements()
            .find(|e| predicate(e))
            .ok_or(CollectionError::NotFound)
    }

    /// Counts the elements matching `predicate`.
    fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().filter(|e| predicate(e)).count()
    }

    /// Returns `true` if any element matches `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().any(|e| predicate(e))
    }

    /// Returns `true` if every element matches `predicate`; vacuously
    /// `true` for an empty collection.
    fn forall<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().all(|e| predicate(e))
    }

    /// Concatenates the elements' `Display` output, separated by
    /// `delimiter`.
    ///
    /// An empty collection joins to the empty string.
    fn join(&self, delimiter: &str) -> String
    where
        Self::Item: Display,
    {
        let mut out = String::new();
        for (i, e) in self.elements().enumerate() {
            if i > 0 {
                out.push_str(delimiter);
            }
            // Writing into a `String` cannot fail.
            let _ = write!(out, "{e}");
        }
        out
    }

    /// Copies the elements into a `Vec` in iteration order.
    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.elements().cloned().collect()
    }

    /// Inserts `item` in place and returns the receiver.
    fn add_return(&mut self, item: Self::Item) -> &mut Self {
        self.insert_item(item);
        self
    }

    /// Inserts every item in place and returns the receiver.
    fn add_all_return<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = Self::Item>,
    {
        for item in items {
            self.insert_item(item);
        }
        self
    }

    /// Removes the first element equal to `item` in place and returns the
    /// receiver.
    fn remove_return(&mut self, item: &Self::Item) -> &mut Self
    where
        Self::Item: PartialEq,
    {
        let mut removed = false;
        self.retain_items(|e| {
            if !removed && e == item {
                removed = true;
                false
            } else {
                true
            }
        });
        self
    }

    /// Removes every element equal to one of `items` in place and returns
    /// the receiver.
    fn remove_all_return<'a, I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: PartialEq + 'a,
    {
        let doomed: Vec<&Self::Item> = items.into_iter().collect();
        self.retain_items(|e| !doomed.iter().any(|d| *d == e));
        self
    }

    /// Keeps only elements equal to one of `items` in place and returns the
    /// receiver.
    fn retain_all_return<'a, I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: PartialEq + 'a,
    {
        let kept: Vec<&Self::Item> = items.into_iter().collect();
        self.retain_items(|e| kept.iter().any(|k| *k == e));
        self
    }

    /// Replaces every element equal to `seek` with `replacement` in place.
    fn replace(&mut self, seek: &Self::Item, replacement: Self::Item) -> &mut Self
    where
        Self::Item: PartialEq + Clone,
    {
        self.replace_where(|e| e == seek, replacement)
    }

    /// Replaces every element matching `predicate` with `replacement` in
    /// place, keeping the position of each replaced element in ordered
    /// shapes.
    fn replace_where<P>(&mut self, mut predicate: P, replacement: Self::Item) -> &mut Self
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        let replaced: Vec<Self::Item> = self
            .elements()
            .map(|e| {
                if predicate(e) {
                    replacement.clone()
                } else {
                    e.clone()
                }
            })
            .collect();
        *self = Self::from_items(replaced);
        self
    }

    /// Replaces every element that is a key of `replacements` with the
    /// mapped value, in place.
    fn replace_all(&mut self, replacements: &SmartMap<Self::Item, Self::Item>) -> &mut Self
    where
        Self::Item: Hash + Eq + Clone,
    {
        let replaced: Vec<Self::Item> = self
            .elements()
            .map(|e| replacements.get(e).unwrap_or(e).clone())
            .collect();
        *self = Self::from_items(replaced);
        self
    }
}

/// Applies `f` to every element, failing as a whole on the first error.
pub(crate) fn try_map_all<'a, E, R, Er, I, F>(items: I, f: F) -> Result<Vec<R>>
where
    E: 'a,
    I: Iterator<Item = &'a E>,
    F: FnMut(&'a E) -> std::result::Result<R, Er>,
    CollectionError: From<Er>,
{
    items.map(f).collect::<std::result::Result<Vec<R>, Er>>().map_err(CollectionError::from)
}

/// Converts every element with `TryFrom`, failing with
/// [`CollectionError::InvalidCast`] at the first non-conforming element.
pub(crate) fn cast_all<'a, E, T, I>(items: I) -> Result<Vec<T>>
where
    E: Clone + 'a,
    T: TryFrom<E>,
    I: Iterator<Item = &'a E>,
{
    items
        .enumerate()
        .map(|(index, e)| cast_one(index, e))
        .collect()
}

/// Converts a single element found at `index` in iteration order.
pub(crate) fn cast_one<E, T>(index: usize, elem: &E) -> Result<T>
where
    E: Clone,
    T: TryFrom<E>,
{
    T::try_from(elem.clone()).map_err(|_| {
        let err = CollectionError::InvalidCast {
            index,
            from: std::any::type_name::<E>(),
            to: std::any::type_name::<T>(),
        };
        tracing::debug!(target: "smartcoll::collections", %err, "cast rejected");
        err
    })
}

/// Numeric helpers for any collection of [`Numeric`] elements.
///
/// Every helper delegates to the arithmetic dispatcher, so fixed-width
/// elements wrap, floats follow IEEE 754 and arbitrary-precision elements
/// stay exact.
pub trait NumericCollection: SmartCollection
where
    Self::Item: Numeric,
{
    /// Sums the elements; zero for an empty collection.
    fn sum(&self) -> Result<Self::Item> {
        Ok(self.try_reduce(<Self::Item as Zero>::zero(), |acc, e| {
            arithmetic::add(&acc, e)
        })?)
    }

    /// Multiplies the elements; one for an empty collection.
    fn product(&self) -> Result<Self::Item> {
        Ok(self.try_reduce(<Self::Item as One>::one(), |acc, e| {
            arithmetic::mul(&acc, e)
        })?)
    }

    /// Returns the smallest element.
    fn min_value(&self) -> Result<Self::Item> {
        let mut it = self.elements();
        let first = it
            .next()
            .ok_or(CollectionError::EmptyCollection {
                operation: "min_value",
            })?
            .clone();
        Ok(it.try_fold(first, |acc, e| arithmetic::min(&acc, e))?)
    }

    /// Returns the largest element.
    fn max_value(&self) -> Result<Self::Item> {
        let mut it = self.elements();
        let first = it
            .next()
            .ok_or(CollectionError::EmptyCollection {
                operation: "max_value",
            })?
            .clone();
        Ok(it.try_fold(first, |acc, e| arithmetic::max(&acc, e))?)
    }

    /// Returns a new collection with `by` added to every element.
    fn increment_each(&self, by: &Self::Item) -> Result<Self> {
        let items = try_map_all(self.elements(), |e| arithmetic::add(e, by))?;
        Ok(Self::from_items(items))
    }

    /// Returns a new collection with `by` subtracted from every element.
    fn decrement_each(&self, by: &Self::Item) -> Result<Self> {
        let items = try_map_all(self.elements(), |e| arithmetic::sub(e, by))?;
        Ok(Self::from_items(items))
    }
}

impl<C> NumericCollection for C
where
    C: SmartCollection,
    C::Item: Numeric,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::SmartQueue;
    use crate::seq::SmartSeq;
    use smartcoll_core::{ArithmeticError, BigInt, Decimal, NumericKind};

    #[test]
    fn test_filter_and_remove_where_leave_receiver_untouched() {
        let seq = SmartSeq::from([1, 2, 3, 4, 5]);
        assert_eq!(seq.filter(|x| x % 2 == 0), SmartSeq::from([2, 4]));
        assert_eq!(seq.remove_where(|x| x % 2 == 0), SmartSeq::from([1, 3, 5]));
        assert_eq!(seq, SmartSeq::from([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_reduce_is_a_left_fold() {
        let seq = SmartSeq::from(["a", "b", "c"]);
        let folded = seq.reduce(String::from(">"), |acc, s| format!("({acc}{s})"));
        assert_eq!(folded, "(((>a)b)c)");
    }

    #[test]
    fn test_find_returns_first_match_or_not_found() {
        let queue = SmartQueue::from([5, 8, 10, 12]);
        assert_eq!(queue.find(|x| *x > 7), Ok(&8));
        assert_eq!(queue.find(|x| *x > 100), Err(CollectionError::NotFound));
    }

    #[test]
    fn test_quantifiers() {
        let seq = SmartSeq::from([2, 4, 7]);
        assert_eq!(seq.count(|x| x % 2 == 0), 2);
        assert!(seq.exists(|x| *x == 7));
        assert!(!seq.forall(|x| x % 2 == 0));

        let empty: SmartSeq<i32> = SmartSeq::new();
        assert!(empty.forall(|_| false));
        assert!(!empty.exists(|_| true));
        assert_eq!(empty.count(|_| true), 0);
    }

    #[test]
    fn test_join_and_empty_join() {
        assert_eq!(SmartSeq::from([1, 2, 3]).join(", "), "1, 2, 3");
        assert_eq!(SmartSeq::from([1]).join(", "), "1");
        assert_eq!(SmartSeq::<i32>::new().join(", "), "");
    }

    #[test]
    fn test_in_place_mutators_chain() {
        let mut seq = SmartSeq::from([1, 2, 3, 2]);
        seq.add_return(4)
            .remove_return(&2)
            .add_all_return([5, 6])
            .remove_all_return(&[6, 1]);
        assert_eq!(seq, SmartSeq::from([3, 2, 4, 5]));

        seq.retain_all_return(&[2, 5, 9]);
        assert_eq!(seq, SmartSeq::from([2, 5]));
    }

    #[test]
    fn test_replace_keeps_positions() {
        let mut seq = SmartSeq::from([1, 2, 1, 3]);
        seq.replace(&1, 9);
        assert_eq!(seq, SmartSeq::from([9, 2, 9, 3]));

        seq.replace_where(|x| *x > 2, 0);
        assert_eq!(seq, SmartSeq::from([0, 2, 0, 0]));
    }

    #[test]
    fn test_replace_all_with_mapping() {
        let mut queue = SmartQueue::from(["a", "b", "c"]);
        let replacements = SmartMap::from([("a", "x"), ("c", "z")]);
        queue.replace_all(&replacements);
        assert_eq!(queue, SmartQueue::from(["x", "b", "z"]));
    }

    #[test]
    fn test_numeric_helpers() {
        let seq = SmartSeq::from([3i32, -1, 4]);
        assert_eq!(seq.sum(), Ok(6));
        assert_eq!(seq.product(), Ok(-12));
        assert_eq!(seq.min_value(), Ok(-1));
        assert_eq!(seq.max_value(), Ok(4));
        assert_eq!(seq.increment_each(&1), Ok(SmartSeq::from([4, 0, 5])));
        assert_eq!(seq.decrement_each(&1), Ok(SmartSeq::from([2, -2, 3])));
    }

    #[test]
    fn test_min_max_value_fold_with_shared_strategies() {
        use smartcoll_core::arithmetic::operation::{BinaryOperation, MAXIMUM, MINIMUM};

        let floats = SmartSeq::from([2.0f64, f64::NAN, 1.0]);
        let expected_max = MAXIMUM
            .apply(&2.0, &f64::NAN)
            .and_then(|acc| MAXIMUM.apply(&acc, &1.0));
        assert_eq!(floats.max_value(), Ok(expected_max.unwrap()));
        assert_eq!(floats.max_value(), Ok(1.0));

        let decimals = SmartSeq::from([Decimal::new(15, 1), Decimal::new(-5, 0)]);
        assert_eq!(
            decimals.min_value(),
            Ok(MINIMUM.apply(&Decimal::new(15, 1), &Decimal::new(-5, 0)).unwrap())
        );
    }

    #[test]
    fn test_numeric_helpers_on_empty() {
        let empty: SmartSeq<i64> = SmartSeq::new();
        assert_eq!(empty.sum(), Ok(0));
        assert_eq!(empty.product(), Ok(1));
        assert_eq!(
            empty.min_value(),
            Err(CollectionError::EmptyCollection {
                operation: "min_value"
            })
        );
    }

    #[test]
    fn test_numeric_helpers_keep_representation_semantics() {
        let bytes = SmartSeq::from([100i8, 100]);
        assert_eq!(bytes.sum(), Ok(-56));

        let bigs = SmartSeq::from([BigInt::from(i64::MAX), BigInt::from(i64::MAX)]);
        assert_eq!(bigs.sum().unwrap().to_string(), "18446744073709551614");

        let decimals = SmartSeq::from([Decimal::MAX, Decimal::ONE]);
        assert_eq!(
            decimals.sum(),
            Err(CollectionError::Arithmetic(ArithmeticError::Overflow {
                operation: "add",
                kind: NumericKind::Decimal
            }))
        );
    }
}
