//! Generic traversal helpers for sequence-like containers.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::slice;

use crate::error::Error;

/// A container that can produce its elements front to back.
///
/// Implementors only supply [`produce`] and, when they know it, a
/// [`length_hint`]. Everything else is provided on top of those two.
///
/// # Examples
///
/// ```
/// use ringdeque::SequenceProducer;
///
/// let v = vec!["a", "b", "c"];
/// assert_eq!(v.find(|s, _, _| s.starts_with('b')), Some(&"b"));
/// assert_eq!(v.index_of(&"c"), Some(2));
/// assert_eq!(v.to_array(), Ok(vec!["a", "b", "c"]));
/// ```
///
/// [`produce`]: #tymethod.produce
/// [`length_hint`]: #method.length_hint
pub trait SequenceProducer {
    /// The element type.
    type Item;

    /// Forward iterator returned by `produce`.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Starts a fresh front-to-back traversal.
    fn produce(&self) -> Self::Iter<'_>;

    /// Number of elements, when the container knows it.
    #[inline]
    fn length_hint(&self) -> Option<usize> {
        None
    }

    /// Returns the first element for which `predicate(element, index, self)`
    /// holds.
    fn find<F>(&self, predicate: F) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item, usize, &Self) -> bool,
    {
        scan(self, predicate).map(|(_, element)| element)
    }

    /// Returns the position of the first element for which `predicate`
    /// holds.
    fn find_index<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, usize, &Self) -> bool,
    {
        scan(self, predicate).map(|(index, _)| index)
    }

    /// Returns the position of the first element equal to `element`.
    fn index_of(&self, element: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.find_index(|candidate, _, _| candidate == element)
    }

    /// Calls `callback(element, index, self)` for every element in order.
    fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&Self::Item, usize, &Self),
    {
        scan(self, |element, index, seq| {
            callback(element, index, seq);
            false
        });
    }

    /// Copies every element into a `Vec`, front to back.
    ///
    /// Fails with `Error::CannotDetermineLength` when the container gives no
    /// `length_hint`.
    fn to_array(&self) -> Result<Vec<Self::Item>, Error>
    where
        Self::Item: Clone,
    {
        let len = self.length_hint().ok_or(Error::CannotDetermineLength)?;
        let mut array = Vec::with_capacity(len);
        self.for_each(|element, _, _| array.push(element.clone()));
        Ok(array)
    }

    /// Returns the element at `index` by walking the sequence.
    ///
    /// This is `O(n)`; containers with random access override it.
    fn element_at(&self, index: usize) -> Option<&Self::Item> {
        self.find(|_, i, _| i == index)
    }
}

fn scan<'a, S, F>(seq: &'a S, mut predicate: F) -> Option<(usize, &'a S::Item)>
where
    S: SequenceProducer + ?Sized,
    F: FnMut(&S::Item, usize, &S) -> bool,
{
    seq.produce()
        .enumerate()
        .find(|&(index, element)| predicate(element, index, seq))
}

impl<T> SequenceProducer for [T] {
    type Item = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

    #[inline]
    fn produce(&self) -> Self::Iter<'_> {
        self.iter()
    }

    #[inline]
    fn length_hint(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> SequenceProducer for Vec<T> {
    type Item = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

    #[inline]
    fn produce(&self) -> Self::Iter<'_> {
        self.iter()
    }

    #[inline]
    fn length_hint(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> SequenceProducer for VecDeque<T> {
    type Item = T;
    type Iter<'a> = alloc::collections::vec_deque::Iter<'a, T> where Self: 'a;

    #[inline]
    fn produce(&self) -> Self::Iter<'_> {
        self.iter()
    }

    #[inline]
    fn length_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}
