use crate::repr::EnumSetRepr;
use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// An unsigned integer used as the backing store of an [`EnumBitSet`](crate::EnumBitSet)
pub trait Scalar:
    Copy
    + Eq
    + Hash
    + Debug
    + Default
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
{
    const ZERO: Self;

    /// `1 << pos`, `pos` must be less than the bit width
    fn bit(pos: u32) -> Self;

    /// The lowest `len` bits set, `len` must not exceed the bit width
    fn low_mask(len: u32) -> Self;

    fn count_ones(self) -> u32;

    fn trailing_zeros(self) -> u32;

    /// Folds the value to 32 bits for hashing
    fn fold(self) -> u32;
}

macro_rules! impl_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn bit(pos: u32) -> Self {
                    1 << pos
                }

                #[inline]
                fn low_mask(len: u32) -> Self {
                    <$ty>::MAX.checked_shr(<$ty>::BITS - len).unwrap_or(0)
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$ty>::trailing_zeros(self)
                }

                #[inline]
                fn fold(self) -> u32 {
                    let x = self as u64;
                    (x ^ (x >> 32)) as u32
                }
            }
        )*
    };
}

impl_scalar!(u8, u16, u32, u64);

/// The width of a fixed width enum set
///
/// One bit of the scalar is reserved, so that the bitmap is never negative once
/// reinterpreted as a signed integer by a consumer.
pub trait Width: Copy + Eq + Debug + Default + 'static {
    type Bits: Scalar;

    /// Maximum number of variants the set can hold
    const MAX_TOKENS: u32;

    /// Tags a bitmap of this width for serializers
    fn repr(bits: Self::Bits) -> EnumSetRepr<'static>;

    /// Reads a bitmap written through [`repr`](Self::repr), at the same width
    #[cfg(feature = "serde-1")]
    fn deserialize_bits<'de, D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self::Bits, D::Error>;
}

macro_rules! width {
    ($(#[$meta:meta])* $name:ident, $bits:ty, $max:expr, $tag:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
        pub struct $name;

        impl Width for $name {
            type Bits = $bits;

            const MAX_TOKENS: u32 = $max;

            #[inline]
            fn repr(bits: $bits) -> EnumSetRepr<'static> {
                EnumSetRepr::$tag(bits)
            }

            #[cfg(feature = "serde-1")]
            #[inline]
            fn deserialize_bits<'de, D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<$bits, D::Error> {
                <$bits as serde::Deserialize>::deserialize(deserializer)
            }
        }
    };
}

width!(
    /// 7 variants in a `u8`
    Byte, u8, 7, Byte
);
width!(
    /// 15 variants in a `u16`
    Short, u16, 15, Short
);
width!(
    /// 31 variants in a `u32`
    Int, u32, 31, Int
);
width!(
    /// 63 variants in a `u64`
    Long, u64, 63, Long
);

#[test]
fn test_low_mask() {
    assert_eq!(<u8 as Scalar>::low_mask(0), 0);
    assert_eq!(<u8 as Scalar>::low_mask(3), 0b111);
    assert_eq!(<u8 as Scalar>::low_mask(7), 0x7f);
    assert_eq!(<u8 as Scalar>::low_mask(8), 0xff);
    assert_eq!(<u64 as Scalar>::low_mask(63), u64::MAX >> 1);
    assert_eq!(<u64 as Scalar>::low_mask(64), u64::MAX);
}

#[test]
fn test_fold() {
    assert_eq!(Scalar::fold(0x1234u16), 0x1234);
    assert_eq!(Scalar::fold(0x0000_0001_0000_0003u64), 2);
    assert_eq!(Scalar::fold(u64::MAX), 0);
}
