//! Set-algebra operators for [`Bitfield`].
//!
//! | operator | method |
//! |----------|--------|
//! | `a \| b` | [`union`](Bitfield::union) |
//! | `a & b` | [`intersection`](Bitfield::intersection) |
//! | `a ^ b` | [`symmetric_difference`](Bitfield::symmetric_difference) |
//! | `a - b` | [`difference`](Bitfield::difference) |
//! | `!a` | [`complement`](Bitfield::complement) |
//!
//! The compound assignment forms update in place and, like `add` and
//! `remove`, do nothing on a frozen bitfield.

use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign,
};

use crate::bitfield::Bitfield;
use crate::flags::Flags;
use crate::resolve::IntoBits;

impl<F: Flags, T: IntoBits<F>> BitOr<T> for Bitfield<F> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: T) -> Self {
        self.union(rhs)
    }
}

impl<F: Flags, T: IntoBits<F>> BitAnd<T> for Bitfield<F> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: T) -> Self {
        self.intersection(rhs)
    }
}

impl<F: Flags, T: IntoBits<F>> BitXor<T> for Bitfield<F> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: T) -> Self {
        self.symmetric_difference(rhs)
    }
}

impl<F: Flags, T: IntoBits<F>> Sub<T> for Bitfield<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        self.difference(rhs)
    }
}

impl<F: Flags> Not for Bitfield<F> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.complement()
    }
}

impl<F: Flags, T: IntoBits<F>> BitOrAssign<T> for Bitfield<F> {
    #[inline]
    fn bitor_assign(&mut self, rhs: T) {
        self.add(rhs);
    }
}

impl<F: Flags, T: IntoBits<F>> SubAssign<T> for Bitfield<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        self.remove(rhs);
    }
}

impl<F: Flags, T: IntoBits<F>> BitAndAssign<T> for Bitfield<F> {
    #[inline]
    fn bitand_assign(&mut self, rhs: T) {
        let kept = self.intersection(rhs);
        self.replace(kept.bits());
    }
}

impl<F: Flags, T: IntoBits<F>> BitXorAssign<T> for Bitfield<F> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: T) {
        let toggled = self.symmetric_difference(rhs);
        self.replace(toggled.bits());
    }
}
