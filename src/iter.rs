//! Iterator implementations for `BitVector`.

use core::{
    borrow::Borrow,
    cell::Cell,
    iter::{FromIterator, FusedIterator},
};

use crate::{
    BitVector,
    storage::{WORD_BITS, bitpos},
};

/// An iterator over the indices of set bits in a [`BitVector`].
///
/// This struct is created by the [`iter`](BitVector::iter) and
/// [`iter_from`](BitVector::iter_from) methods. It yields indices in
/// ascending order.
pub type Iter<'a> = BitIter<&'a [u64]>;

/// An owning iterator over the indices of set bits in a [`BitVector`].
///
/// This struct is created by the [`IntoIterator`] implementation for
/// [`BitVector`].
pub type IntoIter = BitIter<BitVector>;

/// Returns the first set bit at or after `from` in `words`.
#[inline]
pub(crate) fn scan_forward(words: &[u64], from: usize) -> Option<usize> {
    let (wi, bi) = bitpos(from);
    let first = *words.get(wi)? & (!0u64 << bi);
    if first != 0 {
        return Some(wi * WORD_BITS + first.trailing_zeros() as usize);
    }

    words[wi + 1..]
        .iter()
        .position(|&w| w != 0)
        .map(|off| {
            let wi = wi + 1 + off;
            wi * WORD_BITS + words[wi].trailing_zeros() as usize
        })
}

/// An iterator over the indices of set bits in a bit vector.
///
/// The iterator covers the half-open bit range `pos..rpos` and is
/// double-ended. Whole zero words are skipped at once. The remaining count is
/// computed on the first call to [`len`](ExactSizeIterator::len) or
/// `size_hint` and kept up to date from then on.
///
/// The generic parameter `S` allows this iterator to work with both borrowed
/// and owned storage.
///
/// # Examples
///
/// ```
/// use fastbitset::BitVector;
/// let bits: BitVector = [5, 10, 15].into_iter().collect();
///
/// let indices: Vec<_> = bits.iter().collect();
/// assert_eq!(indices, vec![5, 10, 15]);
///
/// let rev_indices: Vec<_> = bits.iter().rev().collect();
/// assert_eq!(rev_indices, vec![15, 10, 5]);
/// ```
#[derive(Clone)]
pub struct BitIter<S: Borrow<[u64]>> {
    pub(crate) words: S,
    pub(crate) pos: usize,  // next bit to inspect (forward)
    pub(crate) rpos: usize, // one past the last bit to inspect (reverse)
    remaining: Cell<Option<usize>>,
}

impl<S: Borrow<[u64]>> BitIter<S> {
    #[inline]
    pub(crate) fn new(words: S, pos: usize, rpos: usize) -> Self {
        Self {
            words,
            pos,
            rpos,
            remaining: Cell::new(None),
        }
    }

    #[inline]
    fn yielded(&mut self) {
        if let Some(n) = self.remaining.get_mut() {
            *n -= 1;
        }
    }

    #[inline]
    fn exhaust(&mut self, at: usize) {
        self.pos = at;
        self.rpos = at;
        self.remaining.set(Some(0));
    }

    fn count_remaining(&self) -> usize {
        let (wmin, bmin) = bitpos(self.pos);
        let (wmax, bmax) = bitpos(self.rpos);
        self.words
            .borrow()
            .iter()
            .enumerate()
            .skip(wmin)
            .take(wmax - wmin + 1)
            .map(|(wi, &w)| {
                let mut w = w;
                if wi == wmin {
                    w &= !0u64 << bmin;
                }
                if wi == wmax {
                    // bmax == 0 excludes the whole word
                    w &= (1u64 << bmax) - 1;
                }
                w.count_ones() as usize
            })
            .sum()
    }
}

impl<S: Borrow<[u64]>> Iterator for BitIter<S> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.rpos {
            return None;
        }

        match scan_forward(self.words.borrow(), self.pos) {
            Some(found) if found < self.rpos => {
                self.pos = found + 1;
                self.yielded();
                Some(found)
            }
            _ => {
                self.exhaust(self.rpos);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<S: Borrow<[u64]>> ExactSizeIterator for BitIter<S> {
    fn len(&self) -> usize {
        if self.pos >= self.rpos {
            return 0;
        }
        if let Some(n) = self.remaining.get() {
            return n;
        }

        let n = self.count_remaining();
        self.remaining.set(Some(n));
        n
    }
}

impl<S: Borrow<[u64]>> FusedIterator for BitIter<S> {}

impl<S: Borrow<[u64]>> DoubleEndedIterator for BitIter<S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.rpos > self.pos {
            let slice = self.words.borrow();
            let (wi, bi) = bitpos(self.rpos - 1);
            if wi >= slice.len() {
                self.rpos = slice.len() * WORD_BITS;
                continue;
            }

            // Only bits up to and including `bi`
            let mask = if bi == 63 { !0u64 } else { (1u64 << (bi + 1)) - 1 };
            let masked = slice[wi] & mask;
            if masked == 0 {
                self.rpos = wi * WORD_BITS;
                continue;
            }

            let result = wi * WORD_BITS + (63 - masked.leading_zeros() as usize);
            if result < self.pos {
                break;
            }
            self.rpos = result;
            self.yielded();
            return Some(result);
        }

        self.exhaust(self.pos);
        None
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type IntoIter = Iter<'a>;
    type Item = usize;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for BitVector {
    type IntoIter = IntoIter;
    type Item = usize;

    fn into_iter(self) -> Self::IntoIter {
        let rpos = self.as_slice_rtrim().len() * WORD_BITS;
        IntoIter::new(self, 0, rpos)
    }
}

impl FromIterator<usize> for BitVector {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bits = Self::new();
        bits.extend(iter);
        bits
    }
}

impl Extend<usize> for BitVector {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for bit in iter {
            self.set(bit);
        }
    }
}

impl<'a> Extend<&'a usize> for BitVector {
    fn extend<I: IntoIterator<Item = &'a usize>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
