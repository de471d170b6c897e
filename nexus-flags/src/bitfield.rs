//! The bitfield value type.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::str::FromStr;

use crate::bits::Bits;
use crate::error::ParseBitsError;
use crate::flags::Flags;
use crate::iter::{Entries, Iter, Keys, Values};
use crate::radix;
use crate::resolve::IntoBits;

/// A set of flags from `F`, stored as an integer within `F::mask()`.
///
/// Every operation that takes bits accepts anything implementing
/// [`IntoBits`]: names, integers, lists, other bitfields, and so on.
///
/// Mutating operations (`add`, `remove`, `invert` and the compound
/// assignment operators) change the value in place and become permanent
/// no-ops once the bitfield is [frozen](Bitfield::freeze). Every other
/// operation leaves the receiver alone and returns a new, unfrozen bitfield.
///
/// # Example
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
///     Admin = 8,
/// }
///
/// let mut perms = Bitfield::<Permission>::from_bits(["Write", "Read"]);
/// assert_eq!(perms.to_array(), ["Read", "Write"]);
///
/// perms.add(Permission::Execute).remove("Write");
/// assert_eq!(perms.bits(), 0b101);
/// assert!(perms.equals(["Read", "Execute"]));
///
/// let missing = perms.missing();
/// assert_eq!(missing.to_array(), ["Write", "Admin"]);
///
/// perms.freeze();
/// perms.add("Admin");
/// assert!(!perms.has("Admin"));
/// ```
pub struct Bitfield<F: Flags> {
    value: F::Bits,
    frozen: bool,
    _flags: PhantomData<fn() -> F>,
}

impl<F: Flags> Bitfield<F> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Bitfield holding the flag set's default bits.
    #[inline]
    pub fn new() -> Self {
        Self::from_raw(F::DEFAULT & F::mask())
    }

    /// Bitfield holding `bits`, masked.
    #[inline]
    pub fn from_bits(bits: impl IntoBits<F>) -> Self {
        Self::from_raw(bits.resolve() & F::mask())
    }

    /// Bitfield with no flags set.
    #[inline]
    pub fn empty() -> Self {
        Self::from_raw(<F::Bits as Bits>::ZERO)
    }

    /// Bitfield with every declared flag set.
    #[inline]
    pub fn all() -> Self {
        Self::from_raw(F::mask())
    }

    /// Caller guarantees `value` is within mask.
    #[inline]
    fn from_raw(value: F::Bits) -> Self {
        Self {
            value,
            frozen: false,
            _flags: PhantomData,
        }
    }

    // =========================================================================
    // Definition
    // =========================================================================

    /// OR of every declared value.
    #[inline]
    pub fn mask() -> F::Bits {
        F::mask()
    }

    /// Largest declared value.
    #[inline]
    pub fn max_bit() -> F::Bits {
        F::max_bit()
    }

    /// The declared flags, in declaration order.
    #[inline]
    pub fn flags(&self) -> &'static [(&'static str, F::Bits)] {
        F::FLAGS
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Sets `bits`. No-op when frozen.
    pub fn add(&mut self, bits: impl IntoBits<F>) -> &mut Self {
        if !self.frozen {
            self.value = (self.value | bits.resolve()) & F::mask();
        }
        self
    }

    /// Clears `bits`. No-op when frozen.
    pub fn remove(&mut self, bits: impl IntoBits<F>) -> &mut Self {
        if !self.frozen {
            self.value = self.value & !bits.resolve() & F::mask();
        }
        self
    }

    /// Flips every declared bit. No-op when frozen.
    pub fn invert(&mut self) -> &mut Self {
        if !self.frozen {
            self.value = !self.value & F::mask();
        }
        self
    }

    /// Overwrites the value. No-op when frozen; caller guarantees `value`
    /// is within mask.
    pub(crate) fn replace(&mut self, value: F::Bits) {
        if !self.frozen {
            self.value = value;
        }
    }

    /// Freezes the bitfield permanently and returns it as a shared borrow.
    ///
    /// Afterwards `add`, `remove`, `invert`, the compound assignment
    /// operators and `extend` leave the value untouched. Freezing twice is
    /// the same as freezing once.
    pub fn freeze(&mut self) -> &Self {
        if !self.frozen {
            log::trace!("freezing bitfield {:?}", self.value);
            self.frozen = true;
        }
        self
    }

    /// Returns true once [`freeze`](Bitfield::freeze) has been called.
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    // =========================================================================
    // Derivation
    // =========================================================================

    /// New bitfield with `bits` also set.
    #[inline]
    pub fn with(&self, bits: impl IntoBits<F>) -> Self {
        Self::from_raw((self.value | bits.resolve()) & F::mask())
    }

    /// Alias of [`with`](Bitfield::with).
    #[inline]
    pub fn union(&self, bits: impl IntoBits<F>) -> Self {
        self.with(bits)
    }

    /// New bitfield with `bits` cleared.
    #[inline]
    pub fn without(&self, bits: impl IntoBits<F>) -> Self {
        Self::from_raw(self.value & !bits.resolve() & F::mask())
    }

    /// New bitfield holding the declared bits this one lacks.
    #[inline]
    pub fn missing(&self) -> Self {
        Self::from_raw(!self.value & F::mask())
    }

    /// Alias of [`missing`](Bitfield::missing).
    #[inline]
    pub fn complement(&self) -> Self {
        self.missing()
    }

    /// New bitfield holding the bits present here and in `bits`.
    #[inline]
    pub fn intersection(&self, bits: impl IntoBits<F>) -> Self {
        Self::from_raw(self.value & bits.resolve() & F::mask())
    }

    /// New bitfield holding the bits present here but not in `bits`.
    #[inline]
    pub fn difference(&self, bits: impl IntoBits<F>) -> Self {
        Self::from_raw(self.value & !bits.resolve() & F::mask())
    }

    /// New bitfield holding the bits present in exactly one of the two.
    #[inline]
    pub fn symmetric_difference(&self, bits: impl IntoBits<F>) -> Self {
        Self::from_raw((self.value ^ bits.resolve()) & F::mask())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns true if any bit of `bits` is set.
    ///
    /// A multi-flag query matches when any single one of the flags is set.
    #[inline]
    pub fn has(&self, bits: impl IntoBits<F>) -> bool {
        !(self.value & bits.resolve()).is_zero()
    }

    /// Same as [`has`](Bitfield::has).
    #[inline]
    pub fn any(&self, bits: impl IntoBits<F>) -> bool {
        self.has(bits)
    }

    /// Returns true if the value is exactly `bits`.
    #[inline]
    pub fn equals(&self, bits: impl IntoBits<F>) -> bool {
        self.value == bits.resolve()
    }

    /// Raw storage value.
    #[inline]
    pub fn bits(&self) -> F::Bits {
        self.value
    }

    /// Returns true if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns true if every declared bit is set.
    #[inline]
    pub fn is_all(&self) -> bool {
        self.value == F::mask()
    }

    /// Number of present flags, aliases counted separately.
    #[inline]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    // =========================================================================
    // Enumeration
    // =========================================================================

    /// Names of present flags, ascending by declared value.
    #[inline]
    pub fn iter(&self) -> Iter<F> {
        Iter::new(self.value)
    }

    /// Present flag names, ascending by declared value.
    pub fn to_array(&self) -> Vec<&'static str> {
        self.iter().collect()
    }

    /// Every declared `(name, value)` pair, ascending by value.
    #[inline]
    pub fn entries(&self) -> Entries<F> {
        Entries::new()
    }

    /// Every declared name, ascending by value.
    #[inline]
    pub fn keys(&self) -> Keys<F> {
        Keys::new()
    }

    /// Every declared value, ascending.
    #[inline]
    pub fn values(&self) -> Values<F> {
        Values::new()
    }

    /// Maps every declared name to whether it is present.
    pub fn to_object(&self) -> BTreeMap<&'static str, bool> {
        F::FLAGS
            .iter()
            .map(|&(name, _)| (name, self.has(name)))
            .collect()
    }

    /// First present flag, ascending, matching `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&'static str) -> bool) -> Option<&'static str> {
        self.iter().find(|&name| predicate(name))
    }

    /// Position in [`entries`](Bitfield::entries) of the first declared flag
    /// matching `predicate`.
    ///
    /// Unlike [`find`](Bitfield::find), every declared flag is tested,
    /// present or not, and the index counts absent flags too.
    pub fn find_index(&self, mut predicate: impl FnMut(&'static str) -> bool) -> Option<usize> {
        self.keys().position(|name| predicate(name))
    }

    /// Calls `f` with each present flag, ascending.
    pub fn for_each(&self, f: impl FnMut(&'static str)) {
        self.iter().for_each(f);
    }

    /// Collects `f` applied to each present flag, ascending.
    pub fn map<T>(&self, f: impl FnMut(&'static str) -> T) -> Vec<T> {
        self.iter().map(f).collect()
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Value in `radix`, lowercase digits, no prefix.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in `2..=36`.
    pub fn to_string_radix(&self, radix: u32) -> String {
        radix::format(self.value, radix)
    }

    /// Base-10 value, the form used when embedding in structured documents.
    pub fn to_json(&self) -> String {
        radix::format(self.value, 10)
    }

    /// Value as `f64`. Precision is lost above 2^53.
    #[inline]
    pub fn to_number(&self) -> f64 {
        self.value.to_f64()
    }

    /// Parses `text` in `radix`, masking the result.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in `2..=36`.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, ParseBitsError> {
        let value: F::Bits = radix::parse(text, radix)?;
        Ok(Self::from_raw(value & F::mask()))
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<F: Flags> Default for Bitfield<F> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Flags> Clone for Bitfield<F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Flags> Copy for Bitfield<F> {}

/// Compares values only; frozen and unfrozen bitfields with the same bits
/// are equal.
impl<F: Flags> PartialEq for Bitfield<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<F: Flags> Eq for Bitfield<F> {}

impl<F: Flags> Hash for Bitfield<F> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<F: Flags> fmt::Debug for Bitfield<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bitfield(")?;
        let mut names = self.iter();
        match names.next() {
            Some(first) => {
                f.write_str(first)?;
                for name in names {
                    write!(f, " | {name}")?;
                }
            }
            None => f.write_str("empty")?,
        }
        if self.frozen {
            f.write_str(", frozen")?;
        }
        f.write_str(")")
    }
}

impl<F: Flags> fmt::Display for Bitfield<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_string_radix(10))
    }
}

impl<F: Flags> fmt::Binary for Bitfield<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.to_string_radix(2))
    }
}

impl<F: Flags> fmt::Octal for Bitfield<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0o", &self.to_string_radix(8))
    }
}

impl<F: Flags> fmt::LowerHex for Bitfield<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_string_radix(16))
    }
}

impl<F: Flags> fmt::UpperHex for Bitfield<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_string_radix(16).to_ascii_uppercase())
    }
}

impl<F: Flags> FromStr for Bitfield<F> {
    type Err = ParseBitsError;

    /// Parses base-10 text, masking the result.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(text, 10)
    }
}

impl<'a, F: Flags> IntoIterator for &'a Bitfield<F> {
    type Item = &'static str;
    type IntoIter = Iter<F>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<F: Flags> IntoIterator for Bitfield<F> {
    type Item = &'static str;
    type IntoIter = Iter<F>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<F: Flags, T: IntoBits<F>> FromIterator<T> for Bitfield<F> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bitfield = Self::empty();
        bitfield.extend(iter);
        bitfield
    }
}

/// Adds every item. No-op when frozen.
impl<F: Flags, T: IntoBits<F>> Extend<T> for Bitfield<F> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if self.frozen {
            return;
        }
        for bits in iter {
            self.add(bits);
        }
    }
}
