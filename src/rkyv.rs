//! Rkyv implementation for `BitVector`.
//!
//! A bit vector archives as the vector of its trimmed words, so the archived
//! form of two equal bit vectors is byte-for-byte identical.

use rkyv::{
    Archive, Deserialize, Serialize,
    rancor::Fallible,
    ser::{Allocator, Writer},
    vec::ArchivedVec,
};

use crate::{BitVector, BitVectorBuilder};

/// The archived version of [`BitVector`].
pub type ArchivedBitVector = ArchivedVec<<u64 as rkyv::Archive>::Archived>;

/// The resolver for [`BitVector`].
pub type BitVectorResolver = rkyv::vec::VecResolver;

impl Archive for BitVector {
    type Archived = ArchivedBitVector;
    type Resolver = BitVectorResolver;

    fn resolve(&self, resolver: Self::Resolver, out: rkyv::Place<Self::Archived>) {
        ArchivedVec::resolve_from_slice(self.as_slice_rtrim(), resolver, out);
    }
}

impl<S: Fallible + Allocator + Writer + ?Sized> Serialize<S> for BitVector {
    #[inline]
    fn serialize(&self, serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        ArchivedVec::<_>::serialize_from_slice(self.as_slice_rtrim(), serializer)
    }
}

impl<D: Fallible + ?Sized> Deserialize<BitVector, D> for ArchivedBitVector {
    #[inline]
    fn deserialize(&self, _deserializer: &mut D) -> Result<BitVector, D::Error> {
        let slice = self.as_slice();
        let mut builder = BitVectorBuilder::with_capacity(slice.len());
        builder.extend(slice.iter().map(|w| w.to_native()));
        Ok(builder.finalize())
    }
}
