//! Serde support.
//!
//! A bitfield serializes as its base-10 string, the same text as
//! [`Bitfield::to_json`]. Deserialization accepts that string or a plain
//! integer; either way the value is masked.

use core::fmt;
use core::marker::PhantomData;

use ::serde::de::{self, Deserialize, Deserializer, Visitor};
use ::serde::ser::{Serialize, Serializer};

use crate::bitfield::Bitfield;
use crate::flags::Flags;

impl<F: Flags> Serialize for Bitfield<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_json())
    }
}

impl<'de, F: Flags> Deserialize<'de> for Bitfield<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BitfieldVisitor(PhantomData))
    }
}

struct BitfieldVisitor<F>(PhantomData<fn() -> F>);

impl<F: Flags> Visitor<'_> for BitfieldVisitor<F> {
    type Value = Bitfield<F>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a base-10 string or a non-negative integer")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Self::Value, E> {
        text.parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(text), &self))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Bitfield::from_bits(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Self::Value, E> {
        Ok(Bitfield::from_bits(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        if value < 0 {
            return Err(E::invalid_value(de::Unexpected::Signed(value), &self));
        }
        Ok(Bitfield::from_bits(value))
    }
}
