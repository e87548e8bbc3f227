use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use super::*;
use crate::sequence::SequenceProducer;

impl<T> PartialEq for RingBuffer<T>
    where T: PartialEq
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for RingBuffer<T> where T: Eq {}

impl<T> PartialOrd for RingBuffer<T>
    where T: PartialOrd
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T> Ord for RingBuffer<T>
    where T: Ord
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Hash for RingBuffer<T>
    where T: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        self.get(index)
            .unwrap_or_else(|| {
                panic!("index out of bounds: the len is {} but the index is {}",
                       len,
                       index)
            })
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        self.get_mut(index)
            .unwrap_or_else(|| {
                panic!("index out of bounds: the len is {} but the index is {}",
                       len,
                       index)
            })
    }
}

/// A full buffer holding the vector's elements; its capacity is the
/// vector's length.
impl<T> From<Vec<T>> for RingBuffer<T> {
    fn from(vec: Vec<T>) -> Self {
        let len = vec.len();
        RingBuffer {
            xs: vec.into_iter().map(Some).collect(),
            start: 0,
            len,
        }
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Extend the `RingBuffer` with an iterator.
///
/// Every element is pushed onto the back, evicting from the front once the
/// buffer is full.
impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &elt in iter {
            self.push_back(elt);
        }
    }
}

impl<T> fmt::Debug for RingBuffer<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> SequenceProducer for RingBuffer<T> {
    type Item = T;
    type Iter<'a> = Iter<'a, T> where Self: 'a;

    #[inline]
    fn produce(&self) -> Self::Iter<'_> {
        self.iter()
    }

    #[inline]
    fn length_hint(&self) -> Option<usize> {
        Some(self.len())
    }

    /// `O(1)` lookup through the wraparound offset.
    #[inline]
    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}
