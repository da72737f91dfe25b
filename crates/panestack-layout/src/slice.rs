//! Ordered sub-views over a stack.
//!
//! [`OrderedSlice`] restricts a stack to the elements on one side of a
//! handle and presents them nearest-first: the view before a handle walks
//! backwards towards index 0, the view after it walks forwards towards the
//! end. Views borrow the stack mutably, so size writes made while walking
//! are visible to later reads without any copying.
//!
//! # Failure Modes
//!
//! Constructing a view from a start index outside `[-1, n]` panics; that is
//! a caller bug, not a runtime condition. A start index already past the
//! relevant end produces an empty view.

use std::iter::FusedIterator;
use std::slice;

/// Traversal order of an [`OrderedSlice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Ascending stack indices.
    Forwards,
    /// Descending stack indices.
    Backwards,
}

/// A mutable, order-aware view of a contiguous run of stack elements.
///
/// Index 0 of the view is always the element nearest the handle.
#[derive(Debug)]
pub struct OrderedSlice<'a, T> {
    items: &'a mut [T],
    order: Order,
}

impl<'a, T> OrderedSlice<'a, T> {
    /// Build a view over `items` starting at `start` in the given order.
    ///
    /// Forwards views cover `start..n`; backwards views cover `0..=start`
    /// walked from `start` down to 0.
    ///
    /// # Panics
    ///
    /// Panics if `start` is outside `[-1, n]`.
    pub fn new(items: &'a mut [T], start: isize, order: Order) -> Self {
        let len = items.len();
        assert!(
            (-1..=len as isize).contains(&start),
            "ordered slice start {start} outside [-1, {len}]"
        );
        let items = match order {
            Order::Forwards => {
                let from = start.max(0) as usize;
                &mut items[from..]
            }
            Order::Backwards => {
                let to = ((start + 1) as usize).min(len);
                &mut items[..to]
            }
        };
        Self { items, order }
    }

    /// Elements from `start` to the end, walked forwards.
    pub fn forwards(items: &'a mut [T], start: isize) -> Self {
        Self::new(items, start, Order::Forwards)
    }

    /// Elements from `last` back to the first, walked backwards.
    pub fn backwards(items: &'a mut [T], last: isize) -> Self {
        Self::new(items, last, Order::Backwards)
    }

    /// Number of elements in the view.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the view holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Traversal order of the view.
    #[inline]
    #[must_use]
    pub const fn order(&self) -> Order {
        self.order
    }

    fn physical(&self, index: usize) -> Option<usize> {
        if index >= self.items.len() {
            return None;
        }
        Some(match self.order {
            Order::Forwards => index,
            Order::Backwards => self.items.len() - 1 - index,
        })
    }

    /// Element at `index` in traversal order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let physical = self.physical(index)?;
        self.items.get(physical)
    }

    /// Mutable element at `index` in traversal order.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let physical = self.physical(index)?;
        self.items.get_mut(physical)
    }

    /// The element nearest the handle.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Iterate in traversal order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter(),
            order: self.order,
        }
    }

    /// Iterate mutably in traversal order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.items.iter_mut(),
            order: self.order,
        }
    }
}

/// Iterator over an [`OrderedSlice`].
#[derive(Debug)]
pub struct Iter<'s, T> {
    inner: slice::Iter<'s, T>,
    order: Order,
}

impl<'s, T> Iterator for Iter<'s, T> {
    type Item = &'s T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            Order::Forwards => self.inner.next(),
            Order::Backwards => self.inner.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.order {
            Order::Forwards => self.inner.next_back(),
            Order::Backwards => self.inner.next(),
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over an [`OrderedSlice`].
#[derive(Debug)]
pub struct IterMut<'s, T> {
    inner: slice::IterMut<'s, T>,
    order: Order,
}

impl<'s, T> Iterator for IterMut<'s, T> {
    type Item = &'s mut T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            Order::Forwards => self.inner.next(),
            Order::Backwards => self.inner.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.order {
            Order::Forwards => self.inner.next_back(),
            Order::Backwards => self.inner.next(),
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
