//! Normalization of caller input into flag storage.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::bitfield::Bitfield;
use crate::bits::Bits;
use crate::flags::Flags;

/// Anything that can be resolved to a set of bits of flag set `F`.
///
/// Resolution never fails; input that names nothing resolves to zero.
///
/// | input | resolves to |
/// |-------|-------------|
/// | `()`, `None` | 0 |
/// | `bool` | 1 or 0, masked |
/// | integers | the value masked to `F::mask()`; negative values are two's complement |
/// | `&str`, `String` | the declared value for that name, or 0 if unknown |
/// | slices, arrays, `Vec` | OR of every element |
/// | [`Bitfield`] with the same storage | its value as-is |
/// | a derived flag enum variant | the variant's value |
/// | [`Input`] | per variant |
pub trait IntoBits<F: Flags> {
    /// Resolves to storage bits.
    fn resolve(&self) -> F::Bits;
}

impl<F: Flags, T: IntoBits<F> + ?Sized> IntoBits<F> for &T {
    #[inline]
    fn resolve(&self) -> F::Bits {
        (**self).resolve()
    }
}

impl<F: Flags, T: IntoBits<F> + ?Sized> IntoBits<F> for Box<T> {
    #[inline]
    fn resolve(&self) -> F::Bits {
        (**self).resolve()
    }
}

impl<F: Flags> IntoBits<F> for () {
    #[inline]
    fn resolve(&self) -> F::Bits {
        <F::Bits as Bits>::ZERO
    }
}

impl<F: Flags, T: IntoBits<F>> IntoBits<F> for Option<T> {
    #[inline]
    fn resolve(&self) -> F::Bits {
        match self {
            Some(bits) => bits.resolve(),
            None => <F::Bits as Bits>::ZERO,
        }
    }
}

impl<F: Flags> IntoBits<F> for bool {
    #[inline]
    fn resolve(&self) -> F::Bits {
        <F::Bits as Bits>::from_bool(*self) & F::mask()
    }
}

impl<F: Flags> IntoBits<F> for str {
    #[inline]
    fn resolve(&self) -> F::Bits {
        resolve_name::<F>(self)
    }
}

impl<F: Flags> IntoBits<F> for String {
    #[inline]
    fn resolve(&self) -> F::Bits {
        resolve_name::<F>(self)
    }
}

impl<F: Flags> IntoBits<F> for Cow<'_, str> {
    #[inline]
    fn resolve(&self) -> F::Bits {
        resolve_name::<F>(self)
    }
}

impl<F: Flags, T: IntoBits<F>> IntoBits<F> for [T] {
    #[inline]
    fn resolve(&self) -> F::Bits {
        resolve_all::<F, T>(self)
    }
}

impl<F: Flags, T: IntoBits<F>, const N: usize> IntoBits<F> for [T; N] {
    #[inline]
    fn resolve(&self) -> F::Bits {
        resolve_all::<F, T>(self)
    }
}

impl<F: Flags, T: IntoBits<F>> IntoBits<F> for Vec<T> {
    #[inline]
    fn resolve(&self) -> F::Bits {
        resolve_all::<F, T>(self)
    }
}

/// A bitfield of any flag set with the same storage is trusted as-is.
impl<F: Flags, G: Flags<Bits = F::Bits>> IntoBits<F> for Bitfield<G> {
    #[inline]
    fn resolve(&self) -> F::Bits {
        self.bits()
    }
}

macro_rules! impl_into_bits_unsigned {
    ($($ty:ty),*) => {
        $(
            impl<F: Flags> IntoBits<F> for $ty {
                #[inline]
                fn resolve(&self) -> F::Bits {
                    <F::Bits as Bits>::from_u128(*self as u128) & F::mask()
                }
            }
        )*
    };
}

macro_rules! impl_into_bits_signed {
    ($($ty:ty),*) => {
        $(
            impl<F: Flags> IntoBits<F> for $ty {
                #[inline]
                fn resolve(&self) -> F::Bits {
                    <F::Bits as Bits>::from_i128(*self as i128) & F::mask()
                }
            }
        )*
    };
}

impl_into_bits_unsigned!(u8, u16, u32, u64, u128, usize);
impl_into_bits_signed!(i8, i16, i32, i64, i128, isize);

#[cfg(feature = "wide")]
impl<F: Flags<Bits = primitive_types::U256>> IntoBits<F> for primitive_types::U256 {
    #[inline]
    fn resolve(&self) -> F::Bits {
        *self & F::mask()
    }
}

#[cfg(feature = "wide")]
impl<F: Flags<Bits = primitive_types::U512>> IntoBits<F> for primitive_types::U512 {
    #[inline]
    fn resolve(&self) -> F::Bits {
        *self & F::mask()
    }
}

fn resolve_name<F: Flags>(name: &str) -> F::Bits {
    match F::lookup(name) {
        Some(bits) => bits,
        None => {
            log::trace!("unknown flag name {name:?} resolves to no bits");
            <F::Bits as Bits>::ZERO
        }
    }
}

fn resolve_all<F: Flags, T: IntoBits<F>>(items: &[T]) -> F::Bits {
    items
        .iter()
        .fold(<F::Bits as Bits>::ZERO, |acc, item| acc | item.resolve())
}

/// Dynamically shaped input, for callers whose bits are not known until
/// runtime (mixed lists, decoded documents).
///
/// ```
/// use nexus_flags::{Bitfield, Flags, Input};
///
/// #[derive(Flags, Clone, Copy)]
/// #[repr(u8)]
/// enum Perm {
///     Read = 1,
///     Write = 2,
///     Execute = 4,
/// }
///
/// let input: Input<'_, u8> =
///     Input::List(vec![Input::from("Read"), Input::Int(4), Input::Other]);
/// assert_eq!(Bitfield::<Perm>::from_bits(input).bits(), 0b101);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a, B> {
    /// No bits.
    Empty,
    /// `1` if true, `0` if false.
    Bool(bool),
    /// Integer bits, masked. Negative values are two's complement.
    Int(i128),
    /// Storage bits taken as-is, like a bitfield value.
    Raw(B),
    /// A flag name.
    Name(Cow<'a, str>),
    /// OR of every element.
    List(Vec<Input<'a, B>>),
    /// Unsupported shape, resolves to no bits.
    Other,
}

impl<F: Flags> IntoBits<F> for Input<'_, F::Bits> {
    fn resolve(&self) -> F::Bits {
        match self {
            Input::Empty | Input::Other => <F::Bits as Bits>::ZERO,
            Input::Bool(value) => IntoBits::<F>::resolve(value),
            Input::Int(value) => IntoBits::<F>::resolve(value),
            Input::Raw(bits) => *bits,
            Input::Name(name) => resolve_name::<F>(name),
            Input::List(items) => resolve_all::<F, Self>(items),
        }
    }
}

impl<B> Default for Input<'_, B> {
    fn default() -> Self {
        Input::Empty
    }
}

impl<B> From<bool> for Input<'_, B> {
    fn from(value: bool) -> Self {
        Input::Bool(value)
    }
}

impl<B> From<i128> for Input<'_, B> {
    fn from(value: i128) -> Self {
        Input::Int(value)
    }
}

impl<B> From<i32> for Input<'_, B> {
    fn from(value: i32) -> Self {
        Input::Int(value.into())
    }
}

impl<B> From<i64> for Input<'_, B> {
    fn from(value: i64) -> Self {
        Input::Int(value.into())
    }
}

impl<B> From<u64> for Input<'_, B> {
    fn from(value: u64) -> Self {
        Input::Int(value.into())
    }
}

impl<'a, B> From<&'a str> for Input<'a, B> {
    fn from(name: &'a str) -> Self {
        Input::Name(Cow::Borrowed(name))
    }
}

impl<B> From<String> for Input<'_, B> {
    fn from(name: String) -> Self {
        Input::Name(Cow::Owned(name))
    }
}

impl<'a, B> From<Vec<Input<'a, B>>> for Input<'a, B> {
    fn from(items: Vec<Input<'a, B>>) -> Self {
        Input::List(items)
    }
}
