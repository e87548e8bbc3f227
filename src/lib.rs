//! A fixed capacity ring buffer that overwrites its oldest elements when full.
//!
//! `RingBuffer` has `O(1)` pushes and removals at both ends and `O(1)`
//! indexing like a vector. Its capacity is chosen once, at construction;
//! pushing onto a full buffer evicts from the opposite end instead of
//! growing. The contained elements are not required to be copyable.
//!
//! The crate also provides [`SequenceProducer`], a small trait giving any
//! sequence-like container `find`, `find_index`, `index_of`, `for_each` and
//! `to_array` once it can produce its elements in order.
//!
//! # Feature Flags
//! The **ringdeque** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd. Without it the crate is `no_std` and only needs `alloc`.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringdeque = "0.1"
//! ```
//!
//! To use it in a `#![no_std]` crate:
//!
//! ```toml
//! [dependencies]
//! ringdeque = { version = "0.1", default-features = false }
//! ```
//!
//! # Capacity
//!
//! Pushing to the **back** of a buffer that **has already reached its
//! capacity** overwrites existing elements from the **front**. Pushing to the
//! **front** overwrites from the **back**. A zero-capacity buffer accepts
//! every push and keeps nothing.
//!
//! # Examples
//! ```
//! use ringdeque::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(3);
//! assert_eq!(buffer.capacity(), 3);
//! assert_eq!(buffer.len(), 0);
//!
//! buffer.push(1);
//! buffer.push(2);
//! assert_eq!(buffer.len(), 2);
//!
//! assert_eq!(buffer.shift(), Some(1));
//! assert_eq!(buffer.shift(), Some(2));
//! assert_eq!(buffer.shift(), None);
//! ```
//!
//! # Overwrite
//! ```
//! use ringdeque::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(3);
//! buffer.extend(0..5);
//! assert_eq!(format!("{:?}", buffer), "[2, 3, 4]");
//!
//! buffer.unshift(9);
//! assert_eq!(format!("{:?}", buffer), "[9, 2, 3]");
//! ```
//!
//! # Index
//! ```
//! use ringdeque::RingBuffer;
//!
//! let mut buffer = RingBuffer::from_iter_with_capacity(2, vec![10, 20, 30]);
//! buffer[0] += 1;
//! assert_eq!(buffer[0], 21);
//! assert_eq!(buffer.get_element_at(1), Ok(&30));
//! assert!(buffer.get_element_at(2).is_err());
//! ```
//!
//! # Sequence helpers
//! ```
//! use ringdeque::{RingBuffer, SequenceProducer};
//!
//! let mut buffer = RingBuffer::new(5);
//! buffer.extend(vec!['a', 'b', 'c']);
//!
//! assert_eq!(buffer.find(|c, _, _| *c > 'a'), Some(&'b'));
//! assert_eq!(buffer.index_of(&'c'), Some(2));
//! assert_eq!(buffer.to_array(), Ok(vec!['a', 'b', 'c']));
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#![deny(missing_docs)]

extern crate alloc;

pub mod error;
mod ringbuffer;
mod sequence;
mod utils;

pub use error::Error;
pub use ringbuffer::{IntoIter, Iter, IterMut, RingBuffer};
pub use sequence::SequenceProducer;
