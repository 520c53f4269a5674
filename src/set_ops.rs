//! Implementations of set operations for `BitVector`.
//!
//! Every operation works word by word. The shorter operand is treated as if
//! it were zero-extended, so operands of any length can be mixed.

use crate::{
    BitVector,
    error::Result,
    storage::{self, Growth, rtrim0},
};

/// Population count of `op(a[i], b[i])` over the zero-extended operands.
#[inline]
fn count_with(a: &[u64], b: &[u64], op: impl Fn(u64, u64) -> u64) -> usize {
    let common = a.len().min(b.len());
    let (a_head, a_tail) = a.split_at(common);
    let (b_head, b_tail) = b.split_at(common);

    let head: usize = a_head
        .iter()
        .zip(b_head)
        .map(|(&x, &y)| op(x, y).count_ones() as usize)
        .sum();
    let tail: usize = a_tail
        .iter()
        .map(|&x| op(x, 0))
        .chain(b_tail.iter().map(|&y| op(0, y)))
        .map(|w| w.count_ones() as usize)
        .sum();
    head + tail
}

impl BitVector {
    /// Performs a bitwise OR with another bit vector, in place.
    ///
    /// This sets each bit in `self` to `self[i] | other[i]`. If `other` has
    /// set bits beyond the end of `self`, `self` is grown to hold them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut a = BitVector::new();
    /// let mut b = BitVector::new();
    ///
    /// a.set(10);
    /// b.set(2000);
    ///
    /// a.union_with(&b);
    /// assert!(a.get(10));
    /// assert!(a.get(2000));
    /// ```
    pub fn union_with(&mut self, other: impl AsRef<[u64]>) {
        let other = rtrim0(other.as_ref());
        storage::grow(&mut self.words, other.len(), Growth::Exact);
        for (dst, src) in self.words.iter_mut().zip(other) {
            *dst |= *src;
        }
    }

    /// Fallible counterpart of [`union_with`](Self::union_with).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if `self`
    /// cannot grow to hold `other`. `self` is unchanged in that case.
    pub fn try_union_with(&mut self, other: impl AsRef<[u64]>) -> Result<()> {
        let other = rtrim0(other.as_ref());
        storage::try_grow(&mut self.words, other.len(), Growth::Exact)?;
        for (dst, src) in self.words.iter_mut().zip(other) {
            *dst |= *src;
        }
        Ok(())
    }

    /// Creates a new bit vector that is the union of `self` and `other`.
    ///
    /// This is exactly a clone of `self` followed by
    /// [`union_with`](Self::union_with). Neither input is modified.
    ///
    /// Time complexity: O(n) where n is the max number of words in either
    /// operand.
    #[must_use]
    pub fn union(&self, other: impl AsRef<[u64]>) -> Self {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Performs a bitwise AND with another bit vector, in place.
    ///
    /// The store never grows. Words past the end of `other` become zero but
    /// are kept, so the capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut a: BitVector = [10, 20].into_iter().collect();
    /// let b: BitVector = [10].into_iter().collect();
    ///
    /// a.intersection_with(&b);
    /// assert!(a.get(10));
    /// assert!(!a.get(20));
    /// ```
    pub fn intersection_with(&mut self, other: impl AsRef<[u64]>) {
        let other = other.as_ref();
        let len = self.words.len().min(other.len());
        let (head, tail) = self.words.split_at_mut(len);
        for (dst, src) in head.iter_mut().zip(other) {
            *dst &= *src;
        }
        tail.fill(0);
    }

    /// Creates a new bit vector that is the intersection of `self` and
    /// `other`.
    ///
    /// Time complexity: O(n) where n is the number of words in `self`.
    #[must_use]
    pub fn intersection(&self, other: impl AsRef<[u64]>) -> Self {
        let mut result = self.clone();
        result.intersection_with(other);
        result
    }

    /// Removes every bit of `other` from `self`, in place.
    ///
    /// The store never grows. Words beyond the end of `other` are unchanged
    /// as they represent indices not in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut a: BitVector = [1, 2, 300].into_iter().collect();
    /// let b: BitVector = [2].into_iter().collect();
    ///
    /// a.difference_with(&b);
    /// assert_eq!(a.to_vec(), vec![1, 300]);
    /// ```
    pub fn difference_with(&mut self, other: impl AsRef<[u64]>) {
        for (dst, src) in self.words.iter_mut().zip(other.as_ref()) {
            *dst &= !*src;
        }
    }

    /// Creates a new bit vector holding the bits of `self` not in `other`.
    ///
    /// Time complexity: O(n) where n is the number of words in `self`.
    #[must_use]
    pub fn difference(&self, other: impl AsRef<[u64]>) -> Self {
        let mut result = self.clone();
        result.difference_with(other);
        result
    }

    /// Stores `self - other` into `other`, leaving `self` untouched.
    ///
    /// This is the mirror image of [`difference_with`](Self::difference_with)
    /// for callers that want to recycle the subtrahend's allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let a: BitVector = [1, 2, 300].into_iter().collect();
    /// let mut b: BitVector = [2, 5].into_iter().collect();
    ///
    /// a.difference_into(&mut b);
    /// assert_eq!(b.to_vec(), vec![1, 300]);
    /// assert_eq!(a.to_vec(), vec![1, 2, 300]);
    /// ```
    pub fn difference_into(&self, other: &mut Self) {
        let src = self.as_slice_rtrim();
        storage::grow(&mut other.words, src.len(), Growth::Exact);
        let (head, tail) = other.words.split_at_mut(src.len());
        for (dst, &a) in head.iter_mut().zip(src) {
            *dst = a & !*dst;
        }
        tail.fill(0);
    }

    /// Performs a bitwise XOR with another bit vector, in place.
    ///
    /// Grows `self` like [`union_with`](Self::union_with) when `other` has
    /// set bits beyond the end of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let mut a: BitVector = [1, 2].into_iter().collect();
    /// let b: BitVector = [2, 500].into_iter().collect();
    ///
    /// a.symmetric_difference_with(&b);
    /// assert_eq!(a.to_vec(), vec![1, 500]);
    /// ```
    pub fn symmetric_difference_with(&mut self, other: impl AsRef<[u64]>) {
        let other = rtrim0(other.as_ref());
        storage::grow(&mut self.words, other.len(), Growth::Exact);
        for (dst, src) in self.words.iter_mut().zip(other) {
            *dst ^= *src;
        }
    }

    /// Fallible counterpart of
    /// [`symmetric_difference_with`](Self::symmetric_difference_with).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if `self`
    /// cannot grow. `self` is unchanged in that case.
    pub fn try_symmetric_difference_with(&mut self, other: impl AsRef<[u64]>) -> Result<()> {
        let other = rtrim0(other.as_ref());
        storage::try_grow(&mut self.words, other.len(), Growth::Exact)?;
        for (dst, src) in self.words.iter_mut().zip(other) {
            *dst ^= *src;
        }
        Ok(())
    }

    /// Creates a new bit vector holding the bits set in exactly one of
    /// `self` and `other`.
    ///
    /// Time complexity: O(n) where n is the max number of words in either
    /// operand.
    #[must_use]
    pub fn symmetric_difference(&self, other: impl AsRef<[u64]>) -> Self {
        let mut result = self.clone();
        result.symmetric_difference_with(other);
        result
    }

    /// Returns the cardinality of the union without building it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let a: BitVector = [1, 2, 3].into_iter().collect();
    /// let b: BitVector = [3, 4, 1000].into_iter().collect();
    ///
    /// assert_eq!(a.union_count(&b), 5);
    /// assert_eq!(a.intersection_count(&b), 1);
    /// assert_eq!(a.difference_count(&b), 2);
    /// assert_eq!(a.symmetric_difference_count(&b), 4);
    /// ```
    #[must_use]
    pub fn union_count(&self, other: impl AsRef<[u64]>) -> usize {
        count_with(self.as_slice(), other.as_ref(), |a, b| a | b)
    }

    /// Returns the cardinality of the intersection without building it.
    #[must_use]
    pub fn intersection_count(&self, other: impl AsRef<[u64]>) -> usize {
        count_with(self.as_slice(), other.as_ref(), |a, b| a & b)
    }

    /// Returns the cardinality of the difference without building it.
    #[must_use]
    pub fn difference_count(&self, other: impl AsRef<[u64]>) -> usize {
        count_with(self.as_slice(), other.as_ref(), |a, b| a & !b)
    }

    /// Returns the cardinality of the symmetric difference without building
    /// it.
    #[must_use]
    pub fn symmetric_difference_count(&self, other: impl AsRef<[u64]>) -> usize {
        count_with(self.as_slice(), other.as_ref(), |a, b| a ^ b)
    }

    /// Returns `true` if the two sets share at least one element.
    #[must_use]
    pub fn intersects(&self, other: impl AsRef<[u64]>) -> bool {
        self.words
            .iter()
            .zip(other.as_ref())
            .any(|(&a, &b)| a & b != 0)
    }

    /// Returns `true` if the two sets have no element in common.
    ///
    /// Time complexity: O(n) where n is the min number of words in either
    /// operand.
    #[must_use]
    pub fn is_disjoint(&self, other: impl AsRef<[u64]>) -> bool {
        !self.intersects(other)
    }

    /// Checks if every element of `self` is also in `other`.
    ///
    /// Time complexity: O(n) where n is the number of words in `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastbitset::BitVector;
    /// let small: BitVector = [1, 2].into_iter().collect();
    /// let big: BitVector = [1, 2, 3].into_iter().collect();
    /// assert!(small.is_subset(&big));
    /// assert!(big.is_superset(&small));
    /// assert!(!big.is_subset(&small));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: impl AsRef<[u64]>) -> bool {
        let other = other.as_ref();
        self.words
            .iter()
            .enumerate()
            .all(|(i, &word)| word & !other.get(i).copied().unwrap_or(0) == 0)
    }

    /// Checks if every element of `other` is also in `self`.
    ///
    /// Time complexity: O(n) where n is the number of words in `other`.
    #[must_use]
    pub fn is_superset(&self, other: impl AsRef<[u64]>) -> bool {
        other
            .as_ref()
            .iter()
            .enumerate()
            .all(|(i, &word)| word & !self.words.get(i).copied().unwrap_or(0) == 0)
    }
}
