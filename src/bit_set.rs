use crate::alphabet::{position_of, symbol_for};
use crate::freeze::FreezeFlag;
use crate::repr::{EnumSetMarker, EnumSetRepr};
use crate::width::{Byte, Int, Long, Scalar, Short, Width};
use crate::{EnumSetError, Freezable, Variant};
use alloc::string::String;
use core::fmt::{Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
#[cfg(feature = "serde-1")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A set of variants of `V` stored as one bit per ordinal in a single scalar
///
/// `W` selects the scalar, see [`ByteEnumSet`], [`ShortEnumSet`], [`IntEnumSet`]
/// and [`LongEnumSet`]. The raw bitmap is available through [`bitmap`](Self::bitmap)
/// for storage or transfer.
///
/// ```
/// use enum_bitset::ShortEnumSet;
///
/// enum_bitset::enum_variants! {
///     enum Letter { A, B, C }
/// }
///
/// let mut set = ShortEnumSet::<Letter>::new();
/// assert!(set.add(Letter::A).unwrap());
/// assert!(set.add(Letter::C).unwrap());
/// assert_eq!(set.bitmap(), 0b101);
/// assert_eq!(set.as_string_map(), "02");
/// assert_eq!(set.iter().collect::<Vec<_>>(), [Letter::A, Letter::C]);
/// ```
pub struct EnumBitSet<V, W: Width> {
    bitmap: W::Bits,
    frozen: FreezeFlag,
    _variants: PhantomData<V>,
}

/// [`EnumBitSet`] of up to 7 variants, stored in a `u8`
pub type ByteEnumSet<V> = EnumBitSet<V, Byte>;

/// [`EnumBitSet`] of up to 15 variants, stored in a `u16`
pub type ShortEnumSet<V> = EnumBitSet<V, Short>;

/// [`EnumBitSet`] of up to 31 variants, stored in a `u32`
pub type IntEnumSet<V> = EnumBitSet<V, Int>;

/// [`EnumBitSet`] of up to 63 variants, stored in a `u64`
pub type LongEnumSet<V> = EnumBitSet<V, Long>;

impl<V: Variant, W: Width> Default for EnumBitSet<V, W> {
    fn default() -> Self {
        Self::from_bitmap(W::Bits::ZERO)
    }
}

/// Clones are never frozen
impl<V, W: Width> Clone for EnumBitSet<V, W> {
    fn clone(&self) -> Self {
        EnumBitSet {
            bitmap: self.bitmap,
            frozen: FreezeFlag::default(),
            _variants: PhantomData,
        }
    }
}

impl<V, W: Width> PartialEq for EnumBitSet<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.bitmap == other.bitmap
    }
}

impl<V, W: Width> Eq for EnumBitSet<V, W> {}

impl<V, W: Width> Hash for EnumBitSet<V, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.bitmap.fold())
    }
}

impl<V: Variant, W: Width> Debug for EnumBitSet<V, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<V: Variant, W: Width> EnumBitSet<V, W> {
    /// Maximum number of variants this set type can hold
    pub const MAX_TOKENS: u32 = W::MAX_TOKENS;

    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from a raw bitmap
    ///
    /// The bitmap is not validated. Bits above the declared variant count are
    /// kept and counted by [`len`](Self::len), but never yielded by iteration.
    /// The reserved top bit is not rendered by [`as_string_map`](Self::as_string_map),
    /// so it does not survive the string map.
    pub fn from_bitmap(bitmap: W::Bits) -> Self {
        EnumBitSet {
            bitmap,
            frozen: FreezeFlag::default(),
            _variants: PhantomData,
        }
    }

    /// Creates the set of every declared variant
    pub fn full() -> Self {
        Self::from_bitmap(Self::full_set_bitmap())
    }

    /// Creates a set holding `variants`
    pub fn try_from_variants<I: IntoIterator<Item = V>>(variants: I) -> Result<Self, EnumSetError> {
        let mut res = Self::new();
        res.assign(variants)?;
        Ok(res)
    }

    #[inline]
    pub fn bitmap(&self) -> W::Bits {
        self.bitmap
    }

    /// Number of ordinals which can be stored, bounded by both the width and
    /// the declared variant count
    #[inline]
    fn limit() -> usize {
        usize::min(W::MAX_TOKENS as usize, V::count())
    }

    fn type_name() -> &'static str {
        core::any::type_name::<Self>()
    }

    fn checked_bit(v: V) -> Result<W::Bits, EnumSetError> {
        let ordinal = v.ordinal();
        let limit = Self::limit();
        if ordinal >= limit {
            return Err(EnumSetError::OrdinalOutOfRange {
                variant: v.name(),
                ordinal,
                limit,
            });
        }
        Ok(W::Bits::bit(ordinal as u32))
    }

    /// Returns the bitmap with every declared variant set
    pub fn full_set_bitmap() -> W::Bits {
        W::Bits::low_mask(Self::limit() as u32)
    }

    /// Builds a bitmap from arbitrary variants without creating a set
    ///
    /// Only the width is checked, not the declared variant count.
    pub fn bitmap_of<I: IntoIterator<Item = V>>(variants: I) -> Result<W::Bits, EnumSetError> {
        variants.into_iter().try_fold(W::Bits::ZERO, |acc, v| {
            let ordinal = v.ordinal();
            if ordinal >= W::MAX_TOKENS as usize {
                return Err(EnumSetError::OrdinalOutOfRange {
                    variant: v.name(),
                    ordinal,
                    limit: W::MAX_TOKENS as usize,
                });
            }
            Ok(acc | W::Bits::bit(ordinal as u32))
        })
    }

    /// Returns `true` if `v` is a member, out of range variants are never members
    pub fn contains(&self, v: V) -> bool {
        let ordinal = v.ordinal();
        ordinal < W::MAX_TOKENS as usize
            && self.bitmap & W::Bits::bit(ordinal as u32) != W::Bits::ZERO
    }

    /// Adds `v` to the set, returning `true` if it wasn't already a member
    ///
    /// Adding a member which is already present succeeds even on a frozen set.
    pub fn add(&mut self, v: V) -> Result<bool, EnumSetError> {
        let b = Self::checked_bit(v)?;
        if self.bitmap & b != W::Bits::ZERO {
            return Ok(false);
        }
        self.frozen.verify_not_frozen(Self::type_name())?;
        self.bitmap |= b;
        Ok(true)
    }

    /// Removes `v` from the set, returning `true` if it was a member
    pub fn remove(&mut self, v: V) -> Result<bool, EnumSetError> {
        let b = Self::checked_bit(v)?;
        if self.bitmap & b == W::Bits::ZERO {
            return Ok(false);
        }
        self.frozen.verify_not_frozen(Self::type_name())?;
        self.bitmap &= !b;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<(), EnumSetError> {
        if self.bitmap != W::Bits::ZERO {
            self.frozen.verify_not_frozen(Self::type_name())?;
            self.bitmap = W::Bits::ZERO;
        }
        Ok(())
    }

    /// Replaces the contents with `variants`
    ///
    /// Not atomic: on error the variants before the failing one have been added.
    pub fn assign<I: IntoIterator<Item = V>>(&mut self, variants: I) -> Result<(), EnumSetError> {
        self.clear()?;
        for v in variants {
            self.add(v)?;
        }
        Ok(())
    }

    /// Number of members
    #[inline]
    pub fn len(&self) -> usize {
        self.bitmap.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bitmap == W::Bits::ZERO
    }

    /// Adds every member of `other` (bitwise or)
    pub fn unify_with(&mut self, other: &Self) -> Result<(), EnumSetError> {
        self.frozen.verify_not_frozen(Self::type_name())?;
        self.bitmap |= other.bitmap;
        Ok(())
    }

    /// Keeps only the members also in `other` (bitwise and)
    pub fn intersect_with(&mut self, other: &Self) -> Result<(), EnumSetError> {
        self.frozen.verify_not_frozen(Self::type_name())?;
        self.bitmap &= other.bitmap;
        Ok(())
    }

    /// Removes every member of `other`
    pub fn exclude(&mut self, other: &Self) -> Result<(), EnumSetError> {
        self.frozen.verify_not_frozen(Self::type_name())?;
        self.bitmap &= !other.bitmap;
        Ok(())
    }

    /// Keeps the variants in exactly one of `self` and `other` (bitwise xor)
    pub fn exactly_one_of(&mut self, other: &Self) -> Result<(), EnumSetError> {
        self.frozen.verify_not_frozen(Self::type_name())?;
        self.bitmap ^= other.bitmap;
        Ok(())
    }

    /// Negates the set within the declared variants
    pub fn complement(&mut self) -> Result<(), EnumSetError> {
        self.frozen.verify_not_frozen(Self::type_name())?;
        self.bitmap = !self.bitmap & Self::full_set_bitmap();
        Ok(())
    }

    /// Iterate over the members of `self` in ascending ordinal order
    pub fn iter(&self) -> Iter<V, W> {
        Iter {
            remaining: self.bitmap & Self::full_set_bitmap(),
            _variants: PhantomData,
        }
    }

    /// Renders one [standard alphabet](crate::alphabet) symbol per set bit, in
    /// ascending bit order
    pub fn as_string_map(&self) -> String {
        (0..W::MAX_TOKENS)
            .filter(|&pos| self.bitmap & W::Bits::bit(pos) != W::Bits::ZERO)
            .filter_map(symbol_for)
            .collect()
    }

    /// Parses the output of [`as_string_map`](Self::as_string_map) into a raw bitmap
    ///
    /// ```
    /// use enum_bitset::{ByteEnumSet, EnumSetError};
    ///
    /// enum_bitset::enum_variants! {
    ///     enum Bit { Zero, One }
    /// }
    ///
    /// assert_eq!(ByteEnumSet::<Bit>::bitmap_from_string_map("10"), Ok(0b11));
    /// assert_eq!(
    ///     ByteEnumSet::<Bit>::bitmap_from_string_map("7"),
    ///     Err(EnumSetError::InvalidToken('7'))
    /// );
    /// ```
    pub fn bitmap_from_string_map(s: &str) -> Result<W::Bits, EnumSetError> {
        s.chars().try_fold(W::Bits::ZERO, |acc, c| match position_of(c) {
            Some(pos) if pos < W::MAX_TOKENS => Ok(acc | W::Bits::bit(pos)),
            _ => Err(EnumSetError::InvalidToken(c)),
        })
    }

    pub fn from_string_map(s: &str) -> Result<Self, EnumSetError> {
        Self::bitmap_from_string_map(s).map(Self::from_bitmap)
    }
}

impl<V: Variant, W: Width> Freezable for EnumBitSet<V, W> {
    fn freeze(&mut self) {
        self.frozen.set(Self::type_name())
    }

    fn is_frozen(&self) -> bool {
        self.frozen.is_set()
    }
}

impl<V: Variant, W: Width> EnumSetMarker for EnumBitSet<V, W> {
    fn repr(&self) -> EnumSetRepr<'_> {
        W::repr(self.bitmap)
    }
}

impl<'a, V: Variant, W: Width> IntoIterator for &'a EnumBitSet<V, W> {
    type Item = V;
    type IntoIter = Iter<V, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of an [`EnumBitSet`]
///
/// It holds its own copy of the bitmap, so the set is never borrowed.
pub struct Iter<V, W: Width> {
    remaining: W::Bits,
    _variants: PhantomData<fn() -> V>,
}

impl<V: Variant, W: Width> Iter<V, W> {
    /// Like [`Iterator::next`], but reports exhaustion as an error
    pub fn try_next(&mut self) -> Result<V, EnumSetError> {
        self.next().ok_or(EnumSetError::EndOfSequence)
    }

    /// Members cannot be removed while iterating, this always fails
    pub fn remove(&mut self) -> Result<(), EnumSetError> {
        Err(EnumSetError::UnsupportedRemoval)
    }
}

impl<V: Variant, W: Width> Iterator for Iter<V, W> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        if self.remaining == W::Bits::ZERO {
            return None;
        }
        let pos = self.remaining.trailing_zeros();
        self.remaining &= !W::Bits::bit(pos);
        V::from_ordinal(pos as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.count_ones() as usize;
        (len, Some(len))
    }
}

impl<V: Variant, W: Width> ExactSizeIterator for Iter<V, W> {}

impl<V: Variant, W: Width> FusedIterator for Iter<V, W> {}

impl<V, W: Width> Clone for Iter<V, W> {
    fn clone(&self) -> Self {
        Iter {
            remaining: self.remaining,
            _variants: PhantomData,
        }
    }
}

#[cfg(feature = "serde-1")]
impl<V: Variant, W: Width> Serialize for EnumBitSet<V, W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.repr().serialize(serializer)
    }
}

#[cfg(feature = "serde-1")]
impl<'de, V: Variant, W: Width> Deserialize<'de> for EnumBitSet<V, W> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        W::deserialize_bits(deserializer).map(Self::from_bitmap)
    }
}

#[cfg(test)]
crate::enum_variants! {
    enum Abc { A, B, C }
}

#[cfg(test)]
crate::enum_variants! {
    enum Hex {
        H0, H1, H2, H3, H4, H5, H6, H7, H8, H9, H10, H11, H12, H13, H14, H15,
    }
}

#[cfg(test)]
crate::enum_variants! {
    enum Wide {
        W0, W1, W2, W3, W4, W5, W6, W7, W8, W9, W10, W11, W12, W13, W14, W15,
        W16, W17, W18, W19, W20, W21, W22, W23, W24, W25, W26, W27, W28, W29, W30, W31,
        W32, W33, W34, W35, W36, W37, W38, W39, W40, W41, W42, W43, W44, W45, W46, W47,
        W48, W49, W50, W51, W52, W53, W54, W55, W56, W57, W58, W59, W60, W61, W62,
    }
}

#[test]
fn test_add_remove() {
    let mut s = ShortEnumSet::<Abc>::new();
    assert!(s.is_empty());
    assert_eq!(s.add(Abc::A), Ok(true));
    assert_eq!(s.add(Abc::C), Ok(true));
    assert_eq!(s.bitmap(), 5);
    assert_eq!(s.as_string_map(), "02");
    assert_eq!(s.len(), 2);
    assert!(s.contains(Abc::A));
    assert!(!s.contains(Abc::B));
    assert_eq!(s.remove(Abc::A), Ok(true));
    assert_eq!(s.bitmap(), 4);
    assert_eq!(s.len(), 1);
    assert_eq!(s.remove(Abc::A), Ok(false));
}

#[test]
fn test_add_idempotent() {
    let mut s = ByteEnumSet::<Abc>::new();
    assert_eq!(s.add(Abc::B), Ok(true));
    let once = s.clone();
    assert_eq!(s.add(Abc::B), Ok(false));
    assert_eq!(s, once);
    assert_eq!(s.len(), 1);
}

#[test]
fn test_out_of_range() {
    let mut s = ShortEnumSet::<Hex>::new();
    assert_eq!(s.add(Hex::H14), Ok(true));
    assert_eq!(
        s.add(Hex::H15),
        Err(EnumSetError::OrdinalOutOfRange {
            variant: "H15",
            ordinal: 15,
            limit: 15
        })
    );
    assert!(matches!(
        s.remove(Hex::H15),
        Err(EnumSetError::OrdinalOutOfRange { ordinal: 15, .. })
    ));
    assert!(!s.contains(Hex::H15));
    assert_eq!(ShortEnumSet::<Hex>::full().len(), 15);

    let mut b = ByteEnumSet::<Hex>::new();
    assert!(b.add(Hex::H6).is_ok());
    assert!(b.add(Hex::H7).is_err());
}

#[test]
fn test_freeze() {
    let mut s = IntEnumSet::<Abc>::try_from_variants([Abc::A]).unwrap();
    s.freeze();
    s.freeze();
    assert!(s.is_frozen());
    // no-ops are allowed
    assert_eq!(s.add(Abc::A), Ok(false));
    assert_eq!(s.remove(Abc::B), Ok(false));
    assert!(matches!(s.add(Abc::B), Err(EnumSetError::Frozen { .. })));
    assert!(matches!(s.remove(Abc::A), Err(EnumSetError::Frozen { .. })));
    assert!(matches!(s.clear(), Err(EnumSetError::Frozen { .. })));
    let other = IntEnumSet::<Abc>::new();
    assert!(s.unify_with(&other).is_err());
    assert!(s.intersect_with(&other).is_err());
    assert!(s.exclude(&other).is_err());
    assert!(s.exactly_one_of(&other).is_err());
    assert!(s.complement().is_err());
    assert_eq!(s.bitmap(), 1);

    let mut copy = s.clone();
    assert!(!copy.is_frozen());
    assert_eq!(copy, s);
    assert_eq!(copy.add(Abc::C), Ok(true));

    let mut empty = IntEnumSet::<Abc>::new();
    empty.freeze();
    assert_eq!(empty.clear(), Ok(()));
}

#[test]
fn test_complement() {
    let mut s = LongEnumSet::<Abc>::try_from_variants([Abc::B]).unwrap();
    s.complement().unwrap();
    assert_eq!(s.bitmap(), 0b101);
    s.complement().unwrap();
    assert_eq!(s.bitmap(), 0b010);

    let mut w = LongEnumSet::<Wide>::new();
    w.complement().unwrap();
    assert_eq!(w.bitmap(), u64::MAX >> 1);
    assert_eq!(w.len(), 63);
    assert_eq!(w.iter().last(), Some(Wide::W62));
}

#[test]
fn test_iter() {
    let s = IntEnumSet::<Hex>::try_from_variants([Hex::H9, Hex::H0, Hex::H15, Hex::H3]).unwrap();
    let mut it = s.iter();
    assert_eq!(it.len(), 4);
    assert_eq!(it.remove(), Err(EnumSetError::UnsupportedRemoval));
    assert_eq!(it.try_next(), Ok(Hex::H0));
    assert_eq!(it.next(), Some(Hex::H3));
    assert_eq!(it.next(), Some(Hex::H9));
    assert_eq!(it.next(), Some(Hex::H15));
    assert_eq!(it.next(), None);
    assert_eq!(it.try_next(), Err(EnumSetError::EndOfSequence));
    // the set itself is left untouched
    assert_eq!(s.len(), 4);
    assert_eq!((&s).into_iter().count(), 4);
}

#[test]
fn test_raw_bitmap() {
    // bits above the declared variants are kept, but never iterated
    let s = ByteEnumSet::<Abc>::from_bitmap(0b1001_0010);
    assert_eq!(s.len(), 3);
    assert_eq!(s.iter().collect::<alloc::vec::Vec<_>>(), [Abc::B]);
    assert_eq!(s.as_string_map(), "14");
    assert_eq!(format!("{:?}", s), "{B}");
}

#[test]
fn test_assign_partial_failure() {
    let mut s = ShortEnumSet::<Hex>::from_bitmap(0b1000);
    assert!(matches!(
        s.assign([Hex::H1, Hex::H15, Hex::H2]),
        Err(EnumSetError::OrdinalOutOfRange { ordinal: 15, .. })
    ));
    // cleared, then filled up to the failing variant
    assert_eq!(s.bitmap(), 0b10);
}

#[test]
fn test_reserved_bit_string_map() {
    let s = ByteEnumSet::<Abc>::from_bitmap(0x81);
    assert_eq!(s.as_string_map(), "0");
    assert_eq!(ByteEnumSet::<Abc>::from_string_map("0"), Ok(ByteEnumSet::from_bitmap(1)));
}

#[test]
fn test_bitmap_of() {
    assert_eq!(ShortEnumSet::<Abc>::bitmap_of([Abc::C, Abc::A]), Ok(5));
    assert_eq!(ShortEnumSet::<Abc>::bitmap_of([]), Ok(0));
    assert!(ByteEnumSet::<Hex>::bitmap_of([Hex::H1, Hex::H8]).is_err());
    assert_eq!(ShortEnumSet::<Hex>::full_set_bitmap(), 0x7fff);
    assert_eq!(ShortEnumSet::<Abc>::full_set_bitmap(), 0b111);
}

#[test]
fn test_string_map() {
    let s = LongEnumSet::<Wide>::try_from_variants([Wide::W62, Wide::W10, Wide::W61, Wide::W1]).unwrap();
    assert_eq!(s.as_string_map(), "1Az_");
    assert_eq!(LongEnumSet::<Wide>::from_string_map("1Az_"), Ok(s));
    assert_eq!(
        ShortEnumSet::<Hex>::from_string_map("0F"),
        Err(EnumSetError::InvalidToken('F'))
    );
    assert_eq!(
        ShortEnumSet::<Hex>::from_string_map("0-"),
        Err(EnumSetError::InvalidToken('-'))
    );
    assert_eq!(ShortEnumSet::<Hex>::from_string_map(""), Ok(ShortEnumSet::new()));
}

#[test]
fn test_hash() {
    use core::hash::BuildHasher;
    use std::collections::hash_map::RandomState;

    let state = RandomState::new();
    let mut a = IntEnumSet::<Abc>::from_bitmap(3);
    let b = IntEnumSet::<Abc>::from_bitmap(3);
    a.freeze();
    assert_eq!(a, b);
    assert_eq!(state.hash_one(&a), state.hash_one(&b));
}

#[test]
fn test_repr() {
    assert_eq!(ByteEnumSet::<Abc>::from_bitmap(1).repr(), EnumSetRepr::Byte(1));
    assert_eq!(ShortEnumSet::<Abc>::from_bitmap(2).repr(), EnumSetRepr::Short(2));
    assert_eq!(IntEnumSet::<Abc>::from_bitmap(3).repr(), EnumSetRepr::Int(3));
    assert_eq!(LongEnumSet::<Abc>::from_bitmap(4).repr(), EnumSetRepr::Long(4));
}

#[cfg(all(test, feature = "serde-1"))]
#[test]
fn test_serde() {
    let s = ShortEnumSet::<Abc>::try_from_variants([Abc::A, Abc::C]).unwrap();
    assert_eq!(serde_json::to_string(&s).unwrap(), "5");
    let back: ShortEnumSet<Abc> = serde_json::from_str("5").unwrap();
    assert_eq!(back, s);
    assert!(serde_json::from_str::<ByteEnumSet<Abc>>("300").is_err());
}

#[cfg(all(test, feature = "serde-1"))]
#[test]
fn test_serde_binary() {
    fn round_trip<W: Width>(bytes: usize) {
        let s = EnumBitSet::<Abc, W>::try_from_variants([Abc::A, Abc::C]).unwrap();
        let encoded = bincode::serialize(&s).unwrap();
        assert_eq!(encoded.len(), bytes);
        let back: EnumBitSet<Abc, W> = bincode::deserialize(&encoded).unwrap();
        assert_eq!(back, s);
    }
    round_trip::<Byte>(1);
    round_trip::<Short>(2);
    round_trip::<Int>(4);
    round_trip::<Long>(8);
}

#[cfg(test)]
mod proptests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    fn set(bitmap: u32) -> IntEnumSet<Hex> {
        IntEnumSet::from_bitmap(bitmap & IntEnumSet::<Hex>::full_set_bitmap())
    }

    proptest! {
        #[test]
        fn algebra_truth_table(a in any::<u32>(), b in any::<u32>()) {
            let (a, b) = (set(a), set(b));
            let mut or = a.clone();
            or.unify_with(&b).unwrap();
            let mut and = a.clone();
            and.intersect_with(&b).unwrap();
            let mut and_not = a.clone();
            and_not.exclude(&b).unwrap();
            let mut xor = a.clone();
            xor.exactly_one_of(&b).unwrap();
            for &x in Hex::VARIANTS {
                prop_assert_eq!(or.contains(x), a.contains(x) || b.contains(x));
                prop_assert_eq!(and.contains(x), a.contains(x) && b.contains(x));
                prop_assert_eq!(and_not.contains(x), a.contains(x) && !b.contains(x));
                prop_assert_eq!(xor.contains(x), a.contains(x) != b.contains(x));
            }
        }

        #[test]
        fn double_complement(a in any::<u32>()) {
            let a = set(a);
            let mut c = a.clone();
            c.complement().unwrap();
            prop_assert_eq!(c.len() + a.len(), Hex::count());
            c.complement().unwrap();
            prop_assert_eq!(c, a);
        }

        #[test]
        fn string_map_round_trip(bitmap in any::<u64>()) {
            let s = LongEnumSet::<Wide>::from_bitmap(bitmap >> 1);
            prop_assert_eq!(LongEnumSet::<Wide>::from_string_map(&s.as_string_map()), Ok(s.clone()));
            prop_assert_eq!(s.as_string_map().len(), s.len());
        }

        #[test]
        fn add_grows_by_one(ordinals in prop::collection::vec(0usize..16, 0..32)) {
            let mut s = ShortEnumSet::<Hex>::new();
            for o in ordinals {
                let v = Hex::VARIANTS[o];
                let before = s.len();
                match s.add(v) {
                    Ok(true) => prop_assert_eq!(s.len(), before + 1),
                    Ok(false) => prop_assert_eq!(s.len(), before),
                    Err(_) => prop_assert_eq!(o, 15),
                }
                prop_assert_eq!(s.contains(v), o < 15);
            }
        }

        #[test]
        fn iter_is_ascending(a in any::<u32>()) {
            let a = set(a);
            let ordinals: Vec<_> = a.iter().map(Variant::ordinal).collect();
            prop_assert_eq!(ordinals.len(), a.len());
            prop_assert!(ordinals.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
