//! Flag sets wider than 128 bits.

#![cfg(feature = "wide")]

use nexus_flags::{Bitfield, Flags};
use primitive_types::U256;

const fn bit(n: usize) -> U256 {
    let mut limbs = [0u64; 4];
    limbs[n / 64] = 1 << (n % 64);
    U256(limbs)
}

pub struct Channels;

impl Flags for Channels {
    type Bits = U256;
    const FLAGS: &'static [(&'static str, U256)] = &[
        ("Zero", bit(0)),
        ("SixtyFour", bit(64)),
        ("Top", bit(255)),
        ("Mid", bit(130)),
    ];
}

type C = Bitfield<Channels>;

#[test]
fn mask_spans_limbs() {
    assert_eq!(Channels::mask(), bit(0) | bit(64) | bit(130) | bit(255));
    assert_eq!(Channels::max_bit(), bit(255));
}

#[test]
fn names_and_order() {
    let b = C::from_bits(["Top", "Zero", "Mid"]);
    assert_eq!(b.to_array(), ["Zero", "Mid", "Top"]);
    assert_eq!(b.missing().to_array(), ["SixtyFour"]);
}

#[test]
fn numeric_input_masked() {
    assert_eq!(C::from_bits(U256::MAX), C::all());
    assert_eq!(C::from_bits(-1i32), C::all());
    assert_eq!(C::from_bits(3u8).to_array(), ["Zero"]);
}

#[test]
fn complement_stays_within_mask() {
    let b = C::from_bits("SixtyFour");
    let m = b.complement();
    assert_eq!(m.bits() & !Channels::mask(), U256::zero());
    assert_eq!(m.complement(), b);
}

#[test]
fn text_forms() {
    let b = C::from_bits("SixtyFour");
    assert_eq!(b.to_json(), "18446744073709551616");
    assert_eq!(b.to_string_radix(16), "10000000000000000");
    assert_eq!(C::from_str_radix("10000000000000000", 16), Ok(b));

    let top = C::from_bits("Top");
    assert_eq!(top.to_string_radix(2).len(), 256);
}

#[test]
fn to_number_is_lossy() {
    let b = C::from_bits(["Top", "Zero"]);
    assert_eq!(b.to_number(), 2f64.powi(255));
}
