//! `BitVector` struct and core implementation.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    error::{Result, bit_index},
    iter::{Iter, scan_forward},
    storage::{self, Growth, WORD_BITS, bitpos, rtrim0},
};

/// A growable set of non-negative integers stored as packed 64-bit words.
///
/// # Capacity Model
///
/// The logical bit-length of a `BitVector` is its number of words times 64;
/// there is no separate length field. Every bit at or beyond
/// [`capacity`](Self::capacity) reads as unset, and writing a set bit past
/// the end grows the store geometrically so a run of increasing
/// [`set`](Self::set) calls stays amortized O(1).
///
/// Two vectors with different word counts are still compared and combined as
/// if the shorter one were zero-extended.
///
/// # Examples
///
/// ```
/// use fastbitset::BitVector;
///
/// let mut bits = BitVector::new();
/// bits.set(10);
/// bits.set(100);
///
/// assert!(bits.get(10));
/// assert!(bits.get(100));
/// assert!(!bits.get(50));
/// assert_eq!(bits.cardinality(), 2);
/// ```
pub struct BitVector {
    pub(crate) words: Vec<u64>,
}

impl BitVector {
    /// Creates a new empty bit vector.
    ///
    /// No memory is allocated until the first bit is set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let bits = BitVector::new();
    /// assert_eq!(bits.capacity(), 0);
    /// assert!(bits.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Creates an empty bit vector able to hold at least `bits` bits without
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let bits = BitVector::with_capacity(1000);
    /// assert!(bits.capacity() >= 1000);
    /// assert!(bits.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: alloc::vec![0; bits.div_ceil(WORD_BITS)],
        }
    }

    /// Returns the number of bits the vector currently spans.
    ///
    /// This is always a multiple of 64.
    #[must_use]
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Returns the number of words in the backing store.
    #[must_use]
    #[inline(always)]
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    /// Get the storage as a slice
    #[must_use]
    #[inline(always)]
    pub fn as_slice(&self) -> &[u64] {
        &self.words
    }

    /// Get the storage as a mutable slice.
    ///
    /// The slice length is fixed, so this can change bits but never the
    /// capacity.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [u64] {
        &mut self.words
    }

    /// Returns the backing words without trailing zero words.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut bits = BitVector::with_capacity(512);
    /// bits.set(0);
    /// bits.set(64);
    /// assert_eq!(bits.as_slice_rtrim(), &[1, 1]);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_slice_rtrim(&self) -> &[u64] {
        rtrim0(&self.words)
    }

    /// Reserves room for at least `additional` more bits beyond the current
    /// capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut bits = BitVector::new();
    /// bits.reserve(300);
    /// assert!(bits.capacity() >= 300);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        let bits = self.capacity().saturating_add(additional);
        storage::grow(&mut self.words, bits.div_ceil(WORD_BITS), Growth::Geometric);
    }

    /// Fallible counterpart of [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the store
    /// cannot be grown. The vector is unchanged in that case.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let bits = self.capacity().saturating_add(additional);
        storage::try_grow(&mut self.words, bits.div_ceil(WORD_BITS), Growth::Geometric)?;
        Ok(())
    }

    /// Clones the vector, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the copy
    /// cannot be allocated.
    pub fn try_clone(&self) -> Result<Self> {
        let src = self.as_slice_rtrim();
        let mut words = Vec::new();
        words.try_reserve_exact(src.len())?;
        words.extend_from_slice(src);
        Ok(Self { words })
    }

    /// Returns the value of the bit at the given index.
    ///
    /// Returns `false` if the index is beyond the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut bits = BitVector::new();
    /// bits.set(42);
    ///
    /// assert!(bits.get(42));
    /// assert!(!bits.get(43));
    /// assert!(!bits.get(1_000_000));
    /// ```
    #[must_use]
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        let (idx, bp) = bitpos(i);
        self.words.get(idx).is_some_and(|word| (word >> bp) & 1 != 0)
    }

    /// Sets the bit at the given index, growing the store if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut bits = BitVector::new();
    /// bits.set(1_000_000);
    /// assert!(bits.get(1_000_000));
    /// assert_eq!(bits.cardinality(), 1);
    /// ```
    #[inline(always)]
    pub fn set(&mut self, i: usize) {
        let _ = self.assign_generic(i, True);
    }

    /// Clears the bit at the given index.
    ///
    /// Clearing a bit beyond the capacity is a no-op and never allocates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut bits = BitVector::new();
    /// bits.set(5);
    /// bits.clear(5);
    /// assert!(!bits.get(5));
    ///
    /// let cap = bits.capacity();
    /// bits.clear(10_000);
    /// assert_eq!(bits.capacity(), cap);
    /// ```
    #[inline(always)]
    pub fn clear(&mut self, i: usize) {
        let _ = self.assign_generic(i, False);
    }

    /// Sets the bit at the given index to `v` and returns its previous value.
    ///
    /// Assigning `false` beyond the capacity does not grow the store.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut bits = BitVector::new();
    ///
    /// assert_eq!(bits.assign(10, true), false);
    /// assert_eq!(bits.assign(10, false), true);
    /// assert_eq!(bits.assign(10, true), false);
    /// ```
    pub fn assign(&mut self, i: usize, v: bool) -> bool {
        self.assign_generic(i, v)
    }

    #[inline(always)]
    fn assign_generic(&mut self, i: usize, v: impl ToBool) -> bool {
        let (idx, bp) = bitpos(i);
        if idx >= self.words.len() {
            if !v.to_bool() {
                return false;
            }
            storage::grow(&mut self.words, idx + 1, Growth::Geometric);
        }

        let word = &mut self.words[idx];
        let mask = 1 << bp;
        let prev = *word;
        if v.to_bool() {
            *word = prev | mask;
        } else {
            *word = prev & !mask;
        }
        (prev & mask) != 0
    }

    /// Sets a bit, returning `true` if it was previously unset.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut bits = BitVector::new();
    ///
    /// assert!(bits.insert(10)); // First insertion
    /// assert!(!bits.insert(10)); // Already set
    /// ```
    #[inline(always)]
    pub fn insert(&mut self, i: usize) -> bool {
        !self.assign_generic(i, True)
    }

    /// Clears a bit, returning `true` if it was previously set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut bits = BitVector::new();
    /// bits.set(10);
    ///
    /// assert!(bits.remove(10));
    /// assert!(!bits.remove(10));
    /// ```
    #[inline(always)]
    pub fn remove(&mut self, i: usize) -> bool {
        self.assign_generic(i, False)
    }

    /// Toggles the bit at the given index and returns its previous value.
    ///
    /// Flipping an unset bit past the capacity grows the store.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut bits = BitVector::new();
    /// assert!(!bits.flip(5));
    /// assert!(bits.get(5));
    /// assert!(bits.flip(5));
    /// assert!(!bits.get(5));
    /// ```
    pub fn flip(&mut self, i: usize) -> bool {
        let prev = self.get(i);
        self.assign_generic(i, !prev)
    }

    /// Checked counterpart of [`get`](Self::get) accepting any integer index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
    /// index is negative or does not fit in `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::{BitVector, Error};
    /// let mut bits = BitVector::new();
    /// bits.try_set(3i64)?;
    /// assert_eq!(bits.try_get(3i64), Ok(true));
    /// assert!(matches!(bits.try_get(-1i64), Err(Error::InvalidArgument(_))));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_get<I>(&self, index: I) -> Result<bool>
    where
        I: TryInto<usize> + Copy + fmt::Display,
    {
        Ok(self.get(bit_index(index)?))
    }

    /// Checked counterpart of [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) for a
    /// negative index and [`Error::OutOfMemory`](crate::Error::OutOfMemory) if
    /// the store cannot grow. The vector is unchanged on error.
    pub fn try_set<I>(&mut self, index: I) -> Result<()>
    where
        I: TryInto<usize> + Copy + fmt::Display,
    {
        self.try_assign(index, true).map(|_| ())
    }

    /// Checked counterpart of [`clear`](Self::clear).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) for a
    /// negative index.
    pub fn try_clear<I>(&mut self, index: I) -> Result<()>
    where
        I: TryInto<usize> + Copy + fmt::Display,
    {
        self.clear(bit_index(index)?);
        Ok(())
    }

    /// Checked counterpart of [`assign`](Self::assign).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) for a
    /// negative index and [`Error::OutOfMemory`](crate::Error::OutOfMemory) if
    /// the store cannot grow. The vector is unchanged on error.
    pub fn try_assign<I>(&mut self, index: I, v: bool) -> Result<bool>
    where
        I: TryInto<usize> + Copy + fmt::Display,
    {
        let i = bit_index(index)?;
        if v {
            let (idx, _) = bitpos(i);
            storage::try_grow(&mut self.words, idx + 1, Growth::Geometric)?;
        }
        Ok(self.assign_generic(i, v))
    }

    /// Checked counterpart of [`next_set_bit`](Self::next_set_bit).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `from` is negative.
    pub fn try_next_set_bit<I>(&self, from: I) -> Result<Option<usize>>
    where
        I: TryInto<usize> + Copy + fmt::Display,
    {
        Ok(self.next_set_bit(bit_index(from)?))
    }

    /// Returns the number of set bits.
    ///
    /// Time complexity: O(n) where n is the number of words.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let bits: BitVector = [5, 10, 15].into_iter().collect();
    /// assert_eq!(bits.cardinality(), 3);
    /// ```
    #[must_use]
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Alias for [`cardinality`](Self::cardinality).
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.cardinality()
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns the smallest set bit, or [`None`] if the vector is empty.
    #[must_use]
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.next_set_bit(0)
    }

    /// Returns the largest set bit, or [`None`] if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let bits: BitVector = [10, 5, 20].into_iter().collect();
    /// assert_eq!(bits.first(), Some(5));
    /// assert_eq!(bits.last(), Some(20));
    /// ```
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        let slice = self.as_slice_rtrim();
        let (&hi, _) = slice.split_last()?;
        Some((slice.len() - 1) * WORD_BITS + (63 - hi.leading_zeros() as usize))
    }

    /// Returns the index of the next set bit at or after `from`.
    ///
    /// Returns [`None`] if there is none. Because the starting point is
    /// explicit, a scan can be resumed from any position.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let bits: BitVector = [5, 10, 15].into_iter().collect();
    ///
    /// assert_eq!(bits.next_set_bit(0), Some(5));
    /// assert_eq!(bits.next_set_bit(6), Some(10));
    /// assert_eq!(bits.next_set_bit(11), Some(15));
    /// assert_eq!(bits.next_set_bit(16), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        scan_forward(&self.words, from)
    }

    /// Returns an iterator over the set bits in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let bits: BitVector = [20, 10].into_iter().collect();
    ///
    /// let mut iter = bits.iter();
    /// assert_eq!(iter.next(), Some(10));
    /// assert_eq!(iter.next(), Some(20));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        self.iter_from(0)
    }

    /// Returns an iterator over the set bits at or after `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let bits: BitVector = [1, 64, 130].into_iter().collect();
    /// assert_eq!(bits.iter_from(2).collect::<Vec<_>>(), vec![64, 130]);
    /// ```
    #[must_use]
    pub fn iter_from(&self, start: usize) -> Iter<'_> {
        let words = self.as_slice_rtrim();
        let end = words.len() * WORD_BITS;
        Iter::new(words, start.min(end), end)
    }

    /// Collects the set bits into a vector in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let bits: BitVector = [10, 1, 2].into_iter().collect();
    /// assert_eq!(bits.to_vec(), vec![1, 2, 10]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.cardinality());
        out.extend(self.iter());
        out
    }

    /// Returns `true` if both vectors hold the same set of bits.
    ///
    /// Trailing zero words on either side are ignored, so vectors with
    /// different capacities can be equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastbitset::BitVector;
    ///
    /// let a = BitVector::from(&[1u64, 2, 0, 0]);
    /// assert!(a.equals(&[1u64, 2]));
    /// assert!(!a.equals(&[1u64, 2, 3]));
    /// ```
    #[must_use]
    pub fn equals(&self, other: impl AsRef<[u64]>) -> bool {
        let a = self.as_slice();
        let b = other.as_ref();
        let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
        let (head, rem) = long.split_at(short.len());

        head == short && rem.iter().all(|&w| w == 0)
    }

    /// Drops trailing zero words and releases unused memory.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut bits = BitVector::new();
    /// bits.set(300);
    /// bits.clear(300);
    /// bits.set(3);
    ///
    /// bits.shrink_to_fit();
    /// assert_eq!(bits.word_len(), 1);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        let len = self.as_slice_rtrim().len();
        if len < self.words.len() {
            log::trace!("shrinking bit vector storage from {} to {len} words", self.words.len());
        }
        self.words.truncate(len);
        self.words.shrink_to_fit();
    }

    /// Removes every bit and releases the backing store.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut bits = BitVector::new();
    /// bits.set(100);
    /// bits.reset();
    /// assert!(bits.is_empty());
    /// assert_eq!(bits.capacity(), 0);
    /// ```
    pub fn reset(&mut self) {
        self.words = Vec::new();
    }
}

trait ToBool: Copy {
    fn to_bool(self) -> bool;
}

#[derive(Clone, Copy)]
struct True;
#[derive(Clone, Copy)]
struct False;

impl ToBool for True {
    #[inline(always)]
    fn to_bool(self) -> bool {
        true
    }
}

impl ToBool for False {
    #[inline(always)]
    fn to_bool(self) -> bool {
        false
    }
}

impl ToBool for bool {
    #[inline(always)]
    fn to_bool(self) -> bool {
        self
    }
}
