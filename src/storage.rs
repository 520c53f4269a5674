//! Backing store management for the bit vector.
//!
//! The store is a plain `Vec<u64>` whose length (not its allocation) defines
//! the logical bit-length of the vector. Every word past the highest touched
//! index is zero, so bulk operations can run over whole words without
//! masking.

use alloc::{collections::TryReserveError, vec::Vec};

use crate::BitVector;

/// Number of bits packed into one storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Smallest number of words allocated when an empty vector first grows.
pub(crate) const MIN_WORDS: usize = 4;

/// Convert bit index to (word index, bit position within word)
#[inline(always)]
pub(crate) const fn bitpos(idx: usize) -> (usize, usize) {
    (idx >> 6, idx & 63)
}

/// Removes trailing zero words from a slice.
#[inline(always)]
pub(crate) const fn rtrim0(mut slice: &[u64]) -> &[u64] {
    while let [rest @ .., 0] = slice {
        slice = rest;
    }
    slice
}

/// How the store is extended when more words are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Growth {
    /// At least double the current length. Used for single-bit writes so a
    /// run of increasing `set` calls costs amortized O(1).
    Geometric,
    /// Grow to exactly the requested length. Used by bulk operations, which
    /// already know the final size up front.
    Exact,
}

impl Growth {
    #[inline(always)]
    fn target(self, current: usize, required: usize) -> usize {
        match self {
            Self::Geometric => required.max(current.saturating_mul(2)).max(MIN_WORDS),
            Self::Exact => required,
        }
    }
}

/// Extends `words` so that it holds at least `required` words.
///
/// New words are zero. Existing words are never modified.
#[inline]
pub(crate) fn grow(words: &mut Vec<u64>, required: usize, growth: Growth) {
    if required <= words.len() {
        return;
    }
    grow_cold(words, required, growth);
}

#[cold]
fn grow_cold(words: &mut Vec<u64>, required: usize, growth: Growth) {
    let new_len = growth.target(words.len(), required);
    log::trace!("growing bit vector storage from {} to {new_len} words", words.len());
    words.reserve_exact(new_len - words.len());
    words.resize(new_len, 0);
}

/// Fallible counterpart of [`grow`].
///
/// On failure `words` is left untouched. A geometric request that cannot be
/// satisfied is retried once with the exact length before giving up.
pub(crate) fn try_grow(
    words: &mut Vec<u64>,
    required: usize,
    growth: Growth,
) -> Result<(), TryReserveError> {
    if required <= words.len() {
        return Ok(());
    }

    let len = words.len();
    let new_len = growth.target(len, required);
    let reserved = words
        .try_reserve_exact(new_len - len)
        .map(|()| new_len)
        .or_else(|err| {
            if new_len == required {
                return Err(err);
            }
            words.try_reserve_exact(required - len).map(|()| required)
        });

    match reserved {
        Ok(new_len) => {
            log::trace!("growing bit vector storage from {len} to {new_len} words");
            words.resize(new_len, 0);
            Ok(())
        }
        Err(err) => {
            log::debug!("failed to grow bit vector storage to {required} words: {err}");
            Err(err)
        }
    }
}

/// A builder for efficiently constructing bit vectors from raw word data.
///
/// Word `n` covers bit indices `n * 64 .. (n + 1) * 64`, least significant
/// bit first.
///
/// # Examples
///
/// ```
/// use fastbitset::BitVectorBuilder;
///
/// let mut builder = BitVectorBuilder::with_capacity(2);
/// builder.push(0b1010); // bits 1 and 3
/// builder.push(0b0001); // bit 64
/// let bits = builder.finalize();
///
/// assert!(bits.get(1));
/// assert!(bits.get(3));
/// assert!(bits.get(64));
/// assert!(!bits.get(0));
/// ```
#[derive(Debug, Default, Clone)]
pub struct BitVectorBuilder {
    words: Vec<u64>,
}

impl BitVectorBuilder {
    /// Creates a new builder with room for `words` words.
    #[must_use]
    pub fn with_capacity(words: usize) -> Self {
        Self {
            words: Vec::with_capacity(words),
        }
    }

    /// Returns a mutable slice of the words currently in the builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastbitset::BitVectorBuilder;
    ///
    /// let mut builder = BitVectorBuilder::with_capacity(1);
    /// builder.push(0xFFFF);
    /// builder.as_mut_slice()[0] |= 0xFF_0000;
    /// assert_eq!(builder.finalize().cardinality(), 24);
    /// ```
    pub fn as_mut_slice(&mut self) -> &mut [u64] {
        self.words.as_mut_slice()
    }

    /// Appends a 64-bit word to the builder.
    pub fn push(&mut self, word: u64) {
        self.words.push(word);
    }

    /// Extends the builder with a slice of words.
    pub fn extend_from_slice(&mut self, slice: &[u64]) {
        self.words.extend_from_slice(slice);
    }

    /// Consumes the builder and returns the constructed bit vector.
    ///
    /// Trailing zero words are dropped so the result is as compact as the
    /// data allows.
    #[must_use]
    pub fn finalize(mut self) -> BitVector {
        let len = rtrim0(&self.words).len();
        self.words.truncate(len);
        BitVector { words: self.words }
    }
}

impl Extend<u64> for BitVectorBuilder {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}

impl From<BitVectorBuilder> for BitVector {
    fn from(builder: BitVectorBuilder) -> Self {
        builder.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_bitpos() {
        assert_eq!(bitpos(0), (0, 0));
        assert_eq!(bitpos(63), (0, 63));
        assert_eq!(bitpos(64), (1, 0));
        assert_eq!(bitpos(200), (3, 8));
    }

    #[test]
    fn test_rtrim0() {
        assert_eq!(rtrim0(&[]), &[] as &[u64]);
        assert_eq!(rtrim0(&[0, 0]), &[] as &[u64]);
        assert_eq!(rtrim0(&[1, 0, 2, 0, 0]), &[1, 0, 2]);
    }

    #[test]
    fn test_geometric_growth_doubles() {
        let mut words = Vec::new();
        grow(&mut words, 1, Growth::Geometric);
        assert_eq!(words.len(), MIN_WORDS);

        grow(&mut words, MIN_WORDS + 1, Growth::Geometric);
        assert_eq!(words.len(), MIN_WORDS * 2);

        // A large jump goes straight to the requested size
        grow(&mut words, 1000, Growth::Geometric);
        assert_eq!(words.len(), 1000);
        assert!(words.iter().all(|&w| w == 0));
    }

    #[test]
    fn test_exact_growth() {
        let mut words = vec![7];
        grow(&mut words, 3, Growth::Exact);
        assert_eq!(words, vec![7, 0, 0]);
    }

    #[test]
    fn test_grow_never_shrinks() {
        let mut words = vec![1, 2, 3];
        grow(&mut words, 2, Growth::Geometric);
        assert_eq!(words, vec![1, 2, 3]);
    }

    #[test]
    fn test_try_grow_failure_leaves_words_untouched() {
        let mut words = vec![1, 2];
        let err = try_grow(&mut words, usize::MAX / 8, Growth::Exact);
        assert!(err.is_err());
        assert_eq!(words, vec![1, 2]);
    }

    #[test]
    fn test_try_grow_success() {
        let mut words = vec![5];
        try_grow(&mut words, 2, Growth::Geometric).unwrap();
        assert_eq!(words.len(), MIN_WORDS);
        assert_eq!(words[0], 5);
    }

    #[test]
    fn test_builder_trims_trailing_zeros() {
        let mut builder = BitVectorBuilder::with_capacity(4);
        builder.extend_from_slice(&[1, 0]);
        builder.extend([0, 0]);
        let bits = builder.finalize();
        assert_eq!(bits.word_len(), 1);
        assert!(bits.get(0));
    }
}
