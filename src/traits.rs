//! Trait implementations for `BitVector`.

use alloc::vec::Vec;
use core::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign},
};

use crate::BitVector;

impl Default for BitVector {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BitVector {
    /// Deep-copies the set bits into a fresh, independent store.
    ///
    /// Trailing zero words are not copied.
    fn clone(&self) -> Self {
        Self::from(self.as_slice_rtrim())
    }

    /// Reuses the allocation of `self` when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.words.clear();
        self.words.extend_from_slice(source.as_slice_rtrim());
    }
}

impl From<BitVector> for Vec<u64> {
    fn from(bits: BitVector) -> Self {
        bits.words
    }
}

impl From<Vec<u64>> for BitVector {
    fn from(words: Vec<u64>) -> Self {
        Self { words }
    }
}

impl From<&[u64]> for BitVector {
    fn from(slice: &[u64]) -> Self {
        Self {
            words: slice.to_vec(),
        }
    }
}

impl<const N: usize> From<&[u64; N]> for BitVector {
    fn from(slice: &[u64; N]) -> Self {
        Self::from(&slice[..])
    }
}

impl Borrow<[u64]> for BitVector {
    fn borrow(&self) -> &[u64] {
        self.as_slice()
    }
}

impl AsRef<[u64]> for BitVector {
    fn as_ref(&self) -> &[u64] {
        self.as_slice()
    }
}

impl fmt::Display for BitVector {
    /// Formats the set bits as `{1,2,10}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastbitset::BitVector;
    /// let bits: BitVector = [1, 2, 100, 10000].into_iter().collect();
    /// assert_eq!(bits.to_string(), "{1,2,100,10000}");
    /// assert_eq!(BitVector::new().to_string(), "{}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (n, bit) in self.iter().enumerate() {
            if n > 0 {
                f.write_str(",")?;
            }
            write!(f, "{bit}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for BitVector {}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice_rtrim().hash(state);
    }
}

// ============================================================================
// Bitwise Operator Implementations
// ============================================================================

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:ident, $op_with:ident) => {
        impl $trait for &BitVector {
            type Output = BitVector;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                self.$op(rhs)
            }
        }

        impl $trait for BitVector {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: Self) -> Self::Output {
                self.$op_with(&rhs);
                self
            }
        }

        impl $assign_trait<&Self> for BitVector {
            #[inline]
            fn $assign_method(&mut self, rhs: &Self) {
                self.$op_with(rhs);
            }
        }

        impl $assign_trait for BitVector {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.$op_with(&rhs);
            }
        }
    };
}

impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, union, union_with);
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, intersection, intersection_with);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, symmetric_difference, symmetric_difference_with);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, difference, difference_with);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, vec};

    fn bits(indices: &[usize]) -> BitVector {
        indices.iter().copied().collect()
    }

    #[test]
    fn test_eq_ignores_trailing_zero_words() {
        let a = BitVector::from(vec![5u64]);
        let b = BitVector::from(vec![5u64, 0, 0, 0]);
        assert_eq!(a, b);
        assert_ne!(a, BitVector::from(vec![5u64, 1]));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_hash_agrees_with_eq() {
        use std::collections::hash_map::DefaultHasher;

        let hash = |b: &BitVector| {
            let mut h = DefaultHasher::new();
            b.hash(&mut h);
            h.finish()
        };
        let a = BitVector::from(vec![5u64]);
        let b = BitVector::from(vec![5u64, 0, 0]);
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn test_clone_from_reuses_storage() {
        let src = bits(&[1, 64]);
        let mut dst = BitVector::with_capacity(4096);
        dst.set(4000);
        dst.clone_from(&src);
        assert_eq!(dst, src);
        assert!(!dst.get(4000));
        assert_eq!(dst.word_len(), 2);
    }

    #[test]
    fn test_operators() {
        let a = bits(&[1, 2, 3]);
        let b = bits(&[3, 4]);

        assert_eq!(&a | &b, bits(&[1, 2, 3, 4]));
        assert_eq!(&a & &b, bits(&[3]));
        assert_eq!(&a ^ &b, bits(&[1, 2, 4]));
        assert_eq!(&a - &b, bits(&[1, 2]));
        assert_eq!(a.clone() | b.clone(), bits(&[1, 2, 3, 4]));

        let mut c = a.clone();
        c |= &b;
        c -= bits(&[1]);
        c &= &bits(&[2, 4, 9]);
        c ^= bits(&[9]);
        assert_eq!(c, bits(&[2, 4, 9]));
    }

    #[test]
    fn test_debug_and_display() {
        let b = bits(&[1, 2, 10]);
        assert_eq!(format!("{b:?}"), "{1, 2, 10}");
        assert_eq!(format!("{b}"), "{1,2,10}");
    }
}
