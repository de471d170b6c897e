//! Serde round trips.

#![cfg(feature = "serde")]

use nexus_flags::{Bitfield, Flags};

#[derive(Flags, Clone, Copy)]
#[repr(u8)]
pub enum Permission {
    Read = 1,
    Write = 2,
    Execute = 4,
    Admin = 8,
}

type Perms = Bitfield<Permission>;

#[test]
fn serializes_as_decimal_string() {
    let b = Perms::from_bits(["Read", "Admin"]);
    assert_eq!(serde_json::to_string(&b).unwrap(), r#""9""#);
    assert_eq!(serde_json::to_string(&Perms::empty()).unwrap(), r#""0""#);
}

#[test]
fn deserializes_string() {
    let b: Perms = serde_json::from_str(r#""6""#).unwrap();
    assert_eq!(b.to_array(), ["Write", "Execute"]);
}

#[test]
fn deserializes_integer_masked() {
    let b: Perms = serde_json::from_str("255").unwrap();
    assert!(b.is_all());
}

#[test]
fn string_and_integer_wider_than_storage_agree() {
    let from_int: Perms = serde_json::from_str("257").unwrap();
    let from_text: Perms = serde_json::from_str(r#""257""#).unwrap();
    assert_eq!(from_int, from_text);
    assert_eq!(from_text.to_array(), ["Read"]);
}

#[test]
fn rejects_garbage() {
    assert!(serde_json::from_str::<Perms>(r#""Read""#).is_err());
    assert!(serde_json::from_str::<Perms>("-1").is_err());
    assert!(serde_json::from_str::<Perms>("[1]").is_err());
}

#[test]
fn embedded_in_document() {
    let doc = serde_json::json!({ "perms": Perms::from_bits("Write") });
    assert_eq!(doc.to_string(), r#"{"perms":"2"}"#);
}
