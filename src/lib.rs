//! A growable bit set with word-packed storage and fast bulk operations.
//!
//! This crate provides [`BitVector`], a set of non-negative integers stored
//! one bit per index in a vector of 64-bit words. Storage grows on demand
//! (geometrically, so filling a vector bit by bit stays amortized O(1)) and
//! all set algebra runs a whole word at a time.
//!
//! # Features
//!
//! - **Bit access**: set, clear, assign, flip and test individual bits
//! - **Set operations** (union, intersection, difference, symmetric
//!   difference), in place or into a new vector, plus counting variants that
//!   never allocate
//! - **Iteration** over set bits in either direction, restartable from any
//!   index
//! - **Checked API** for signed indices and fallible allocation
//! - **Serialization support** via serde or rkyv (optional)
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use fastbitset::BitVector;
//!
//! let mut b1 = BitVector::new();
//! let mut b2 = BitVector::new();
//! for i in 0..1024 {
//!     b1.set(3 * i + 5);
//!     b2.set(6 * i + 5);
//! }
//!
//! // Union into a new vector
//! let union = b1.union(&b2);
//!
//! // Union in place
//! let mut copy = b1.clone();
//! copy.union_with(&b2);
//! assert_eq!(copy, union);
//!
//! // Walk the set bits
//! let mut next = union.next_set_bit(0);
//! let mut count = 0;
//! while let Some(i) = next {
//!     count += 1;
//!     next = union.next_set_bit(i + 1);
//! }
//! assert_eq!(count, union.cardinality());
//! ```
//!
//! # Performance
//!
//! - Getting, setting and clearing a bit is O(1) (amortized when growing)
//! - Set operations and [`cardinality`](BitVector::cardinality) are O(n) in
//!   the number of words
//! - Clearing a bit beyond the current capacity never allocates

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod bitvector;
mod error;
mod iter;
mod set_ops;
pub mod storage;
mod traits;

#[cfg(feature = "rkyv")]
pub mod rkyv;

#[cfg(feature = "rkyv")]
pub use self::rkyv::{ArchivedBitVector, BitVectorResolver};

#[cfg(feature = "serde")]
pub mod serde;

pub use bitvector::BitVector;
pub use error::{Error, Result};
pub use iter::{BitIter, IntoIter, Iter};
pub use storage::{BitVectorBuilder, WORD_BITS};
