//! Type-level flag definitions.

use crate::bits::Bits;

/// A named set of flags shared by every [`Bitfield`](crate::Bitfield) of
/// this type.
///
/// Derive this on a fieldless `#[repr(u8)]` / `#[repr(u16)]` / etc enum, or
/// implement it by hand (required for `wide` storage):
///
/// ```
/// use nexus_flags::{Bitfield, Flags};
///
/// #[derive(Flags, Clone, Copy)]
/// #[repr(u8)]
/// pub enum Permission {
///     Read = 1,
///     Write = 2,
///     Execute = 4,
/// }
///
/// assert_eq!(Permission::mask(), 0b111);
/// assert_eq!(Permission::lookup("Write"), Some(2));
///
/// let p = Bitfield::<Permission>::from_bits(Permission::Read);
/// assert!(p.has("Read"));
/// ```
///
/// Values are conventionally single bits, but nothing here relies on it:
/// two names may share a value and a value may span several bits.
pub trait Flags: 'static {
    /// Integer storage for values of this flag set.
    type Bits: Bits;

    /// Declared flags in declaration order.
    const FLAGS: &'static [(&'static str, Self::Bits)];

    /// Initial value for [`Bitfield::new`](crate::Bitfield::new).
    const DEFAULT: Self::Bits = <Self::Bits as Bits>::ZERO;

    /// OR of every declared value.
    #[inline]
    fn mask() -> Self::Bits {
        Self::FLAGS
            .iter()
            .fold(<Self::Bits as Bits>::ZERO, |mask, &(_, value)| mask | value)
    }

    /// Largest declared value, 0 if nothing is declared.
    #[inline]
    fn max_bit() -> Self::Bits {
        Self::FLAGS
            .iter()
            .map(|&(_, value)| value)
            .max()
            .unwrap_or(<Self::Bits as Bits>::ZERO)
    }

    /// Value declared for `name`.
    ///
    /// If a name is declared twice the first declaration wins.
    #[inline]
    fn lookup(name: &str) -> Option<Self::Bits> {
        Self::FLAGS
            .iter()
            .find(|(declared, _)| *declared == name)
            .map(|&(_, value)| value)
    }
}
