//! Serde implementations for `BitVector`.
//!
//! The default impls encode the trimmed backing words as a sequence of
//! `u64`. The submodules are meant for `#[serde(with = "...")]` and offer
//! alternative encodings.

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::{BitVector, BitVectorBuilder};

/// Upper bound on words reserved up front from an untrusted length hint.
const MAX_PREALLOC_WORDS: usize = 4096;

/// Serde implementation serializing the bit vector as a sequence of u64 words.
pub mod words {
    use super::*;

    /// Serialize the bit vector as a sequence of u64 words.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(b: &BitVector, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        b.as_slice_rtrim().serialize(serializer)
    }

    /// Deserialize the bit vector from a sequence of u64 words.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a sequence of unsigned integers.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitVector, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WordsVisitor;

        impl<'de> Visitor<'de> for WordsVisitor {
            type Value = BitVector;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a sequence of u64 words")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let hint = seq.size_hint().unwrap_or(0).min(MAX_PREALLOC_WORDS);
                let mut builder = BitVectorBuilder::with_capacity(hint);
                while let Some(word) = seq.next_element::<u64>()? {
                    builder.push(word);
                }
                Ok(builder.finalize())
            }
        }

        deserializer.deserialize_seq(WordsVisitor)
    }
}

/// Serialize and deserialize a [`BitVector`] as a strictly increasing
/// sequence of set indices.
pub mod sorted_set {
    use super::*;

    /// Serialize the set bits in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails to serialize the sequence.
    pub fn serialize<S>(b: &BitVector, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut ser = serializer.serialize_seq(Some(b.cardinality()))?;
        for i in b {
            ser.serialize_element(&i)?;
        }
        ser.end()
    }

    /// Deserialize a [`BitVector`] from a strictly increasing sequence of
    /// indices.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is not strictly increasing, if an
    /// index is too large to allocate storage for, or if deserialization
    /// fails.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitVector, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SortedSetVisitor;

        impl<'de> Visitor<'de> for SortedSetVisitor {
            type Value = BitVector;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a sorted sequence of integers")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut b = BitVector::new();
                let mut last = None;
                while let Some(bit) = seq.next_element::<usize>()? {
                    if let Some(last) = last
                        && last >= bit
                    {
                        return Err(de::Error::invalid_value(
                            de::Unexpected::Unsigned(bit as u64),
                            &"sorted sequence",
                        ));
                    }
                    last = Some(bit);
                    b.try_set(bit).map_err(de::Error::custom)?;
                }
                Ok(b)
            }
        }

        deserializer.deserialize_seq(SortedSetVisitor)
    }
}

/// Serialize a [`BitVector`] as a sequence of set indices and accept them in
/// any order, duplicates included, when deserializing.
pub mod unordered_set {
    use super::*;

    /// Serialize the set bits (in ascending order).
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails to serialize the sequence.
    pub fn serialize<S>(b: &BitVector, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        sorted_set::serialize(b, serializer)
    }

    /// Deserialize a [`BitVector`] from indices in any order.
    ///
    /// # Errors
    ///
    /// Returns an error if an index is too large to allocate storage for, or
    /// if deserialization fails.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitVector, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UnorderedSetVisitor;

        impl<'de> Visitor<'de> for UnorderedSetVisitor {
            type Value = BitVector;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a sequence of integers")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut b = BitVector::new();
                while let Some(bit) = seq.next_element::<usize>()? {
                    b.try_set(bit).map_err(de::Error::custom)?;
                }
                Ok(b)
            }
        }

        deserializer.deserialize_seq(UnorderedSetVisitor)
    }
}

impl Serialize for BitVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        words::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for BitVector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        words::deserialize(deserializer)
    }
}
