//! Integer storage for flag values.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not};

/// Unsigned integer type that backs a [`Bitfield`](crate::Bitfield).
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`, and with the
/// `wide` feature for `primitive_types::U256` and `primitive_types::U512`.
/// The storage width is the limit on how many distinct bits a flag set can
/// declare.
pub trait Bits:
    Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + Default
    + Send
    + Sync
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + 'static
{
    /// All bits clear.
    const ZERO: Self;

    /// Only the lowest bit set.
    const ONE: Self;

    /// Storage width in bits.
    const BITS: u32;

    /// Truncating conversion from `u128`.
    fn from_u128(value: u128) -> Self;

    /// Conversion from `i128`.
    ///
    /// Negative values sign-extend, so `-1` becomes all ones.
    fn from_i128(value: i128) -> Self;

    /// Divides by a small radix, returning quotient and remainder.
    fn div_rem(self, radix: u32) -> (Self, u32);

    /// Computes `self * mul + add`, wrapping at the storage width.
    fn wrapping_mul_add(self, mul: u32, add: u32) -> Self;

    /// Nearest `f64`. Precision is lost above 2^53.
    fn to_f64(self) -> f64;

    /// Returns true if no bits are set.
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// `1` for `true`, `0` for `false`.
    #[inline]
    fn from_bool(value: bool) -> Self {
        if value { Self::ONE } else { Self::ZERO }
    }
}

macro_rules! impl_bits {
    ($($ty:ty),*) => {
        $(
            impl Bits for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn from_u128(value: u128) -> Self {
                    value as $ty
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $ty
                }

                #[inline]
                fn div_rem(self, radix: u32) -> (Self, u32) {
                    let radix = radix as $ty;
                    (self / radix, (self % radix) as u32)
                }

                #[inline]
                fn wrapping_mul_add(self, mul: u32, add: u32) -> Self {
                    // truncating casts agree with arithmetic mod 2^BITS
                    self.wrapping_mul(mul as $ty).wrapping_add(add as $ty)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_bits!(u8, u16, u32, u64, u128, usize);

#[cfg(feature = "wide")]
macro_rules! impl_wide_bits {
    ($($ty:ident: $limbs:literal),*) => {
        $(
            impl Bits for primitive_types::$ty {
                const ZERO: Self = primitive_types::$ty([0; $limbs]);
                const ONE: Self = {
                    let mut limbs = [0; $limbs];
                    limbs[0] = 1;
                    primitive_types::$ty(limbs)
                };
                const BITS: u32 = 64 * $limbs;

                #[inline]
                fn from_u128(value: u128) -> Self {
                    Self::from(value)
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    if value < 0 {
                        // !value is non-negative; complementing restores the sign bits
                        !Self::from((!value) as u128)
                    } else {
                        Self::from(value as u128)
                    }
                }

                #[inline]
                fn div_rem(self, radix: u32) -> (Self, u32) {
                    let (quotient, remainder) = self.div_mod(Self::from(radix));
                    (quotient, remainder.low_u32())
                }

                #[inline]
                fn wrapping_mul_add(self, mul: u32, add: u32) -> Self {
                    let (product, _) = self.overflowing_mul(Self::from(mul));
                    product.overflowing_add(Self::from(add)).0
                }

                fn to_f64(self) -> f64 {
                    // 2^64
                    const LIMB: f64 = 18_446_744_073_709_551_616.0;
                    self.0
                        .iter()
                        .rev()
                        .fold(0.0, |acc, &limb| acc * LIMB + limb as f64)
                }
            }
        )*
    };
}

#[cfg(feature = "wide")]
impl_wide_bits!(U256: 4, U512: 8);
