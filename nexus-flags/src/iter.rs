//! Iteration over declared and present flags.
//!
//! Every iterator here walks the declared flags in ascending order of value,
//! ties broken by declaration order. The order is sorted once when the
//! iterator is created, so a full walk costs `O(n log n)`.

use alloc::vec::{self, Vec};
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::bits::Bits;
use crate::flags::Flags;

/// Indices into `F::FLAGS`, ascending by value. The sort is stable, so equal
/// values keep declaration order.
fn ascending<F: Flags>() -> Vec<usize> {
    let mut order: Vec<usize> = (0..F::FLAGS.len()).collect();
    order.sort_by_key(|&index| F::FLAGS[index].1);
    order
}

/// All declared `(name, value)` pairs, ascending by value.
///
/// Created by [`Bitfield::entries`](crate::Bitfield::entries).
pub struct Entries<F: Flags> {
    order: vec::IntoIter<usize>,
    _flags: PhantomData<fn() -> F>,
}

impl<F: Flags> Entries<F> {
    pub(crate) fn new() -> Self {
        Self {
            order: ascending::<F>().into_iter(),
            _flags: PhantomData,
        }
    }
}

impl<F: Flags> Iterator for Entries<F> {
    type Item = (&'static str, F::Bits);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.order.next().map(|index| F::FLAGS[index])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<F: Flags> DoubleEndedIterator for Entries<F> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.order.next_back().map(|index| F::FLAGS[index])
    }
}

impl<F: Flags> ExactSizeIterator for Entries<F> {}
impl<F: Flags> FusedIterator for Entries<F> {}

impl<F: Flags> Clone for Entries<F> {
    fn clone(&self) -> Self {
        Self {
            order: self.order.clone(),
            _flags: PhantomData,
        }
    }
}

impl<F: Flags> fmt::Debug for Entries<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// All declared names, ascending by value.
///
/// Created by [`Bitfield::keys`](crate::Bitfield::keys).
pub struct Keys<F: Flags> {
    entries: Entries<F>,
}

impl<F: Flags> Keys<F> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Entries::new(),
        }
    }
}

impl<F: Flags> Iterator for Keys<F> {
    type Item = &'static str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(name, _)| name)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<F: Flags> ExactSizeIterator for Keys<F> {}
impl<F: Flags> FusedIterator for Keys<F> {}

impl<F: Flags> Clone for Keys<F> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

/// All declared values, ascending.
///
/// Created by [`Bitfield::values`](crate::Bitfield::values).
pub struct Values<F: Flags> {
    entries: Entries<F>,
}

impl<F: Flags> Values<F> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Entries::new(),
        }
    }
}

impl<F: Flags> Iterator for Values<F> {
    type Item = F::Bits;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(_, value)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<F: Flags> ExactSizeIterator for Values<F> {}
impl<F: Flags> FusedIterator for Values<F> {}

impl<F: Flags> Clone for Values<F> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

/// Names of the flags present in a bitfield, ascending by value.
///
/// A flag is present when `value & declared != 0`. A flag declared as `0`
/// is therefore never present, even though it can read as a flag that is
/// always on; the bitwise test is what every query here uses.
///
/// Created by [`Bitfield::iter`](crate::Bitfield::iter).
pub struct Iter<F: Flags> {
    entries: Entries<F>,
    value: F::Bits,
}

impl<F: Flags> Iter<F> {
    pub(crate) fn new(value: F::Bits) -> Self {
        Self {
            entries: Entries::new(),
            value,
        }
    }
}

impl<F: Flags> Iterator for Iter<F> {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value;
        self.entries
            .by_ref()
            .find(|&(_, declared)| !(value & declared).is_zero())
            .map(|(name, _)| name)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.entries.size_hint().1)
    }
}

impl<F: Flags> FusedIterator for Iter<F> {}

impl<F: Flags> Clone for Iter<F> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            value: self.value,
        }
    }
}

impl<F: Flags> fmt::Debug for Iter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shuffled;

    impl Flags for Shuffled {
        type Bits = u16;
        const FLAGS: &'static [(&'static str, u16)] = &[
            ("High", 0x100),
            ("Low", 0x1),
            ("AliasLow", 0x1),
            ("Mid", 0x10),
        ];
    }

    struct Nothing;

    impl Flags for Nothing {
        type Bits = u8;
        const FLAGS: &'static [(&'static str, u8)] = &[];
    }

    #[test]
    fn entries_ascending_ties_in_declaration_order() {
        let entries: Vec<_> = Entries::<Shuffled>::new().collect();
        assert_eq!(
            entries,
            [("Low", 0x1), ("AliasLow", 0x1), ("Mid", 0x10), ("High", 0x100)]
        );
    }

    #[test]
    fn entries_exact_size() {
        let mut entries = Entries::<Shuffled>::new();
        assert_eq!(entries.len(), 4);
        entries.next();
        assert_eq!(entries.len(), 3);
        entries.by_ref().for_each(drop);
        assert_eq!(entries.len(), 0);
        assert_eq!(entries.next(), None);
    }

    #[test]
    fn entries_restartable_by_clone() {
        let mut entries = Entries::<Shuffled>::new();
        entries.next();
        let rest: Vec<_> = entries.clone().map(|(name, _)| name).collect();
        assert_eq!(rest, ["AliasLow", "Mid", "High"]);
        assert_eq!(entries.next(), Some(("AliasLow", 0x1)));
    }

    #[test]
    fn keys_and_values() {
        assert_eq!(
            Keys::<Shuffled>::new().collect::<Vec<_>>(),
            ["Low", "AliasLow", "Mid", "High"]
        );
        assert_eq!(
            Values::<Shuffled>::new().collect::<Vec<_>>(),
            [0x1, 0x1, 0x10, 0x100]
        );
    }

    #[test]
    fn present_flags_include_aliases() {
        let present: Vec<_> = Iter::<Shuffled>::new(0x101).collect();
        assert_eq!(present, ["Low", "AliasLow", "High"]);
    }

    #[test]
    fn present_flags_empty_value() {
        assert_eq!(Iter::<Shuffled>::new(0).next(), None);
    }

    /// 128 single-bit flags declared highest first.
    struct Descending;

    const fn descending() -> [(&'static str, u128); 128] {
        let mut flags = [("", 0u128); 128];
        let mut i = 0;
        while i < 128 {
            flags[i] = ("bit", 1u128 << (127 - i));
            i += 1;
        }
        flags
    }

    const DESCENDING: [(&'static str, u128); 128] = descending();

    impl Flags for Descending {
        type Bits = u128;
        const FLAGS: &'static [(&'static str, u128)] = &DESCENDING;
    }

    #[test]
    fn large_set_walks_ascending() {
        let values: Vec<u128> = Values::<Descending>::new().collect();
        let expected: Vec<u128> = (0..128).map(|shift| 1u128 << shift).collect();
        assert_eq!(values, expected);
        assert_eq!(Iter::<Descending>::new(u128::MAX).count(), 128);
        assert_eq!(Iter::<Descending>::new(1 << 64).count(), 1);
    }

    #[test]
    fn entries_reverse() {
        let last = Entries::<Shuffled>::new().next_back();
        assert_eq!(last, Some(("High", 0x100)));
    }

    #[test]
    fn empty_definition() {
        assert_eq!(Entries::<Nothing>::new().next(), None);
        assert_eq!(Iter::<Nothing>::new(0xFF).next(), None);
    }
}
