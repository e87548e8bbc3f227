use alloc::vec::Vec;
use core::iter;
use core::mem;
use core::slice;

use log::trace;

use crate::error::Error;
use crate::utils::{wrap_add, wrap_sub};

mod iterator_impls;
mod trait_impls;

/// A fixed capacity ring buffer that overwrites when full.
///
/// The capacity is chosen at construction and never changes. Pushing onto a
/// full buffer evicts an element from the opposite end: `push` drops the
/// oldest (front) element, `unshift` drops the newest (back) one.
///
/// The "default" usage of this type as a bounded history is to use `push` to
/// add to the back and `shift` to take from the front. `extend` pushes onto
/// the back in this manner, and iterating over `RingBuffer` goes front to
/// back.
///
/// # Examples
///
/// ```
/// use ringdeque::RingBuffer;
///
/// let mut history = RingBuffer::new(3);
/// for n in 1..=4 {
///     history.push(n);
/// }
/// assert_eq!(history.iter().collect::<Vec<_>>(), vec![&2, &3, &4]);
///
/// history.unshift(9);
/// assert_eq!(history.iter().collect::<Vec<_>>(), vec![&9, &2, &3]);
/// ```
#[derive(Clone)]
pub struct RingBuffer<T> {
    xs: Vec<Option<T>>,
    start: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty `RingBuffer` holding at most `capacity` elements.
    ///
    /// All slots are allocated up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let buffer: RingBuffer<u32> = RingBuffer::new(8);
    /// assert_eq!(buffer.capacity(), 8);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        RingBuffer {
            xs: iter::repeat_with(|| None).take(capacity).collect(),
            start: 0,
            len: 0,
        }
    }

    /// Creates an empty `RingBuffer` from any integer capacity.
    ///
    /// Fails with `Error::InvalidCapacity` if `capacity` is negative, does
    /// not fit in a `usize`, or needs more slots than can be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, RingBuffer};
    ///
    /// let buffer = RingBuffer::<u8>::try_new(4i64).unwrap();
    /// assert_eq!(buffer.capacity(), 4);
    ///
    /// assert_eq!(RingBuffer::<u8>::try_new(-1).err(), Some(Error::InvalidCapacity));
    /// assert_eq!(RingBuffer::<u64>::try_new(u64::MAX).err(), Some(Error::InvalidCapacity));
    /// ```
    pub fn try_new<C: TryInto<usize>>(capacity: C) -> Result<Self, Error> {
        let capacity = capacity.try_into().map_err(|_| Error::InvalidCapacity)?;
        Self::try_with_slots(capacity)
    }

    fn try_with_slots(capacity: usize) -> Result<Self, Error> {
        let mut xs = Vec::new();
        xs.try_reserve_exact(capacity).map_err(|_| Error::InvalidCapacity)?;
        xs.extend(iter::repeat_with(|| None).take(capacity));
        Ok(RingBuffer {
            xs,
            start: 0,
            len: 0,
        })
    }

    /// Creates a `RingBuffer` and pushes `initial` into it in order.
    ///
    /// When `initial` holds more than `capacity` elements only the last
    /// `capacity` of them are kept, oldest first. Every element is pushed,
    /// so the result never depends on the iterator's `size_hint`. Use
    /// `from_vec_with_capacity` to skip the discarded prefix of a `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let buffer = RingBuffer::from_iter_with_capacity(2, vec![10, 20, 30]);
    /// assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![&20, &30]);
    ///
    /// let odd = RingBuffer::from_iter_with_capacity(2, (1..8).filter(|n| n % 2 == 1));
    /// assert_eq!(odd.iter().collect::<Vec<_>>(), vec![&5, &7]);
    /// ```
    pub fn from_iter_with_capacity<I>(capacity: usize, initial: I) -> Self
        where I: IntoIterator<Item = T>
    {
        let mut buffer = Self::new(capacity);
        buffer.extend(initial);
        buffer
    }

    /// Creates a `RingBuffer` holding the last `capacity` elements of `vec`.
    ///
    /// The discarded prefix is dropped in one pass instead of being pushed
    /// and evicted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let buffer = RingBuffer::from_vec_with_capacity(2, vec![10, 20, 30]);
    /// assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![&20, &30]);
    /// assert_eq!(buffer.capacity(), 2);
    /// ```
    pub fn from_vec_with_capacity(capacity: usize, mut vec: Vec<T>) -> Self {
        let mut buffer = Self::new(capacity);
        let len = vec.len();
        if len > capacity {
            trace!("keeping the last {} of {} initial elements", capacity, len);
            vec.drain(..len - capacity);
        }
        buffer.extend(vec);
        buffer
    }

    /// Fallible form of `from_iter_with_capacity`, see `try_new`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, RingBuffer};
    ///
    /// let buffer = RingBuffer::try_from_iter(3u8, "abcd".chars()).unwrap();
    /// assert_eq!(buffer.iter().collect::<String>(), "bcd");
    ///
    /// assert!(RingBuffer::try_from_iter(-3, "abcd".chars()).is_err());
    /// ```
    pub fn try_from_iter<C, I>(capacity: C, initial: I) -> Result<Self, Error>
        where C: TryInto<usize>,
              I: IntoIterator<Item = T>
    {
        let capacity = capacity.try_into().map_err(|_| Error::InvalidCapacity)?;
        let mut buffer = Self::try_with_slots(capacity)?;
        buffer.extend(initial);
        Ok(buffer)
    }

    /// Returns the maximum number of elements the buffer holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.xs.len()
    }

    /// Returns the number of elements in the `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut v = RingBuffer::new(4);
    /// assert_eq!(v.len(), 0);
    /// v.push(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of `len`.
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the next `push` or `unshift` will evict an element.
    ///
    /// A zero-capacity buffer is always full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Maps a logical index (0 is the front) to its slot in the backing
    /// storage.
    ///
    /// The result is `(index + start) % capacity`, or 0 for a zero-capacity
    /// buffer. `index` is not checked against `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(3);
    /// buffer.extend(vec![1, 2, 3, 4]);
    /// // 1 was evicted from slot 0, so the front now lives in slot 1
    /// assert_eq!(buffer.get_index(0), 1);
    /// assert_eq!(buffer.get_index(2), 0);
    /// ```
    #[inline]
    pub fn get_index(&self, index: usize) -> usize {
        wrap_add(self.start, index, self.capacity())
    }

    /// Removes every element, keeping the allocated slots.
    ///
    /// This is `O(len)`: each occupied slot is vacated so its element is
    /// dropped right away. Only resetting the indices is constant time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut v = RingBuffer::new(4);
    /// v.push(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// assert_eq!(v.capacity(), 4);
    /// ```
    pub fn clear(&mut self) {
        let (first, second) = self.as_mut_slots();
        for slot in first.iter_mut().chain(second) {
            *slot = None;
        }
        self.start = 0;
        self.len = 0;
    }

    /// Appends an element to the back and returns the new length.
    ///
    /// A full buffer first evicts its front element.
    ///
    /// # Examples
    ///
    /// ```text
    /// [_, _, _] <-(+)- 1 => [1, _, _] -> 1
    /// [1, _, _] <-(+)- 2 => [1, 2, _] -> 2
    /// [1, 2, _] <-(+)- 3 => [1, 2, 3] -> 3
    /// [1, 2, 3] <-(+)- 4 => [2, 3, 4] -> 3
    /// ```
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(2);
    /// assert_eq!(buffer.push(1), 1);
    /// assert_eq!(buffer.push(2), 2);
    /// assert_eq!(buffer.push(3), 2);
    /// assert_eq!(buffer.front(), Some(&2));
    /// ```
    #[inline]
    pub fn push(&mut self, element: T) -> usize {
        self.push_back(element);
        self.len
    }

    /// Appends an element to the back.
    ///
    /// Returns `None` if the buffer still had room, or `Some(existing)` where
    /// `existing` is the front element that was evicted. A zero-capacity
    /// buffer hands `element` straight back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(3);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// buffer.push_back(3);
    /// let overflow = buffer.push_back(4);
    ///
    /// assert_eq!(buffer.back(), Some(&4));
    /// assert_eq!(overflow, Some(1));
    /// ```
    pub fn push_back(&mut self, element: T) -> Option<T> {
        if self.capacity() == 0 {
            trace!("zero capacity, discarding pushed element");
            return Some(element);
        }
        let existing = if self.is_full() {
            trace!("buffer full at {} elements, evicting front", self.len);
            self.shift()
        } else {
            None
        };
        let index = self.get_index(self.len);
        debug_assert!(self.xs[index].is_none());
        self.xs[index] = Some(element);
        self.len += 1;
        existing
    }

    /// Removes the back element and returns it, or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(3);
    /// assert_eq!(buffer.pop(), None);
    /// buffer.push(1);
    /// buffer.push(3);
    /// assert_eq!(buffer.pop(), Some(3));
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        let index = self.get_index(self.len);
        self.xs[index].take()
    }

    /// Prepends an element to the front and returns the new length.
    ///
    /// A full buffer first evicts its back element.
    ///
    /// # Examples
    ///
    /// ```text
    /// 1 -(+)-> [_, _, _] => [1, _, _] -> 1
    /// 2 -(+)-> [1, _, _] => [2, 1, _] -> 2
    /// 3 -(+)-> [2, 1, _] => [3, 2, 1] -> 3
    /// 4 -(+)-> [3, 2, 1] => [4, 3, 2] -> 3
    /// ```
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(2);
    /// assert_eq!(buffer.unshift(1), 1);
    /// assert_eq!(buffer.unshift(2), 2);
    /// assert_eq!(buffer.unshift(3), 2);
    /// assert_eq!(buffer.back(), Some(&2));
    /// ```
    #[inline]
    pub fn unshift(&mut self, element: T) -> usize {
        self.push_front(element);
        self.len
    }

    /// Prepends an element to the front.
    ///
    /// Returns `None` if the buffer still had room, or `Some(existing)` where
    /// `existing` is the back element that was evicted. A zero-capacity
    /// buffer hands `element` straight back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(2);
    /// buffer.push_front(1);
    /// buffer.push_front(2);
    /// let overflow = buffer.push_front(3);
    ///
    /// assert_eq!(buffer.front(), Some(&3));
    /// assert_eq!(overflow, Some(1));
    /// ```
    pub fn push_front(&mut self, element: T) -> Option<T> {
        if self.capacity() == 0 {
            trace!("zero capacity, discarding unshifted element");
            return Some(element);
        }
        let existing = if self.is_full() {
            trace!("buffer full at {} elements, evicting back", self.len);
            self.pop()
        } else {
            None
        };
        self.start = wrap_sub(self.start, 1, self.capacity());
        debug_assert!(self.xs[self.start].is_none());
        self.xs[self.start] = Some(element);
        self.len += 1;
        existing
    }

    /// Removes the front element and returns it, or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(3);
    /// buffer.push(1);
    /// buffer.push(2);
    ///
    /// assert_eq!(buffer.shift(), Some(1));
    /// assert_eq!(buffer.shift(), Some(2));
    /// assert_eq!(buffer.shift(), None);
    /// ```
    pub fn shift(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let index = self.start;
        self.start = wrap_add(self.start, 1, self.capacity());
        self.len -= 1;
        self.xs[index].take()
    }

    /// Retrieves an element by logical index, 0 being the front.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(4);
    /// buffer.push(3);
    /// buffer.push(4);
    /// buffer.push(5);
    /// assert_eq!(buffer.get(1), Some(&4));
    /// assert_eq!(buffer.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.xs[self.get_index(index)].as_ref()
        } else {
            None
        }
    }

    /// Retrieves an element mutably by logical index, 0 being the front.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let idx = self.get_index(index);
            self.xs[idx].as_mut()
        } else {
            None
        }
    }

    /// Like `get`, but reports a missing element as an error.
    ///
    /// Fails with `Error::IndexOutOfRange` when `index >= len()`, which
    /// includes every index of an empty buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, RingBuffer};
    ///
    /// let mut buffer = RingBuffer::new(2);
    /// assert_eq!(buffer.get_element_at(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    ///
    /// buffer.push('a');
    /// assert_eq!(buffer.get_element_at(0), Ok(&'a'));
    /// ```
    pub fn get_element_at(&self, index: usize) -> Result<&T, Error> {
        self.get(index).ok_or(Error::IndexOutOfRange { index, len: self.len })
    }

    /// Overwrites the element at `index` and returns the previous one.
    ///
    /// Fails with `Error::IndexOutOfRange` when `index >= len()`; the buffer
    /// is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(2);
    /// assert!(buffer.set_element_at(0, 'x').is_err());
    ///
    /// buffer.push('a');
    /// assert_eq!(buffer.set_element_at(0, 'b'), Ok('a'));
    /// assert_eq!(buffer[0], 'b');
    /// ```
    pub fn set_element_at(&mut self, index: usize, element: T) -> Result<T, Error> {
        let len = self.len;
        let slot = self.get_mut(index).ok_or(Error::IndexOutOfRange { index, len })?;
        Ok(mem::replace(slot, element))
    }

    /// Provides a reference to the front element, or `None` if the buffer is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// buffer is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Provides a reference to the back element, or `None` if the buffer is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// buffer is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(last) => self.get_mut(last),
            None => None,
        }
    }

    /// Returns `true` if the buffer contains an element equal to `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(3);
    /// buffer.push(0);
    /// buffer.push(1);
    ///
    /// assert_eq!(buffer.contains(&1), true);
    /// assert_eq!(buffer.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
        where T: PartialEq
    {
        self.iter().any(|e| e == x)
    }

    /// Returns a front-to-back iterator.
    ///
    /// Every call starts again from the current front.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(3);
    /// buffer.push(5);
    /// buffer.push(3);
    /// buffer.push(4);
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = buffer.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        let (first, second) = self.as_slots();
        Iter {
            first: first.iter(),
            second: second.iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingBuffer;
    ///
    /// let mut buffer = RingBuffer::new(3);
    /// buffer.push(5);
    /// buffer.push(3);
    /// buffer.push(4);
    /// for num in buffer.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![&3, &1, &2]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (first, second) = self.as_mut_slots();
        IterMut {
            first: first.iter_mut(),
            second: second.iter_mut(),
        }
    }

    /// The occupied slots in logical order, split where they wrap around the
    /// end of the storage.
    fn as_slots(&self) -> (&[Option<T>], &[Option<T>]) {
        let end = self.start + self.len;
        if end <= self.capacity() {
            (&self.xs[self.start..end], Default::default())
        } else {
            let wrapped = end - self.capacity();
            let (before, after) = self.xs.split_at(self.start);
            (after, &before[..wrapped])
        }
    }

    fn as_mut_slots(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        let start = self.start;
        let end = start + self.len;
        if end <= self.capacity() {
            (&mut self.xs[start..end], Default::default())
        } else {
            let wrapped = end - self.capacity();
            let (before, after) = self.xs.split_at_mut(start);
            (after, &mut before[..wrapped])
        }
    }
}

/// `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    first: slice::Iter<'a, Option<T>>,
    second: slice::Iter<'a, Option<T>>,
}

/// `RingBuffer` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    first: slice::IterMut<'a, Option<T>>,
    second: slice::IterMut<'a, Option<T>>,
}

/// By-value `RingBuffer` iterator
pub struct IntoIter<T> {
    inner: RingBuffer<T>,
}
