//! Typed bitfields over a named set of flags.
//!
//! `nexus-flags` tracks which flags of a fixed, named flag set are present,
//! as an integer confined to the set's mask. Flags can be addressed by name,
//! by enum variant, by raw integer, or by another bitfield, and combined with
//! the usual set algebra - common for permission sets, capability masks, and
//! feature toggles carried over the wire as a single number.
//!
//! # Example
//!
//! ```
//! use nexus_flags::{Bitfield, Flags};
//!
//! // Define flag set
//! #[derive(Flags, Clone, Copy)]
//! #[repr(u8)]
//! pub enum Permission {
//!     Read = 1,
//!     Write = 2,
//!     Execute = 4,
//!     Admin = 8,
//! }
//!
//! // Build
//! let mut perms = Bitfield::<Permission>::from_bits(["Write", "Read"]);
//! perms.add(Permission::Execute);
//!
//! // Query
//! assert!(perms.has("Write"));
//! assert!(!perms.has(Permission::Admin));
//! assert_eq!(perms.to_array(), ["Read", "Write", "Execute"]);
//!
//! // Derive
//! let readonly = perms.intersection("Read");
//! assert_eq!(readonly.to_json(), "1");
//! assert_eq!(perms.missing().to_array(), ["Admin"]);
//! ```
//!
//! # Features
//!
//! - `derive` (default): `#[derive(Flags)]` for fieldless enums.
//! - `wide`: 256 and 512 bit storage via `primitive-types`.
//! - `serde`: `Serialize` / `Deserialize` as a base-10 string.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod bitfield;
mod bits;
mod error;
mod flags;
mod iter;
mod ops;
mod radix;
mod resolve;
#[cfg(feature = "serde")]
mod serde_impl;

pub use bitfield::Bitfield;
pub use bits::Bits;
pub use error::{ParseBitsError, ParseErrorKind};
pub use flags::Flags;
pub use iter::{Entries, Iter, Keys, Values};
pub use resolve::{Input, IntoBits};

#[cfg(feature = "derive")]
pub use nexus_flags_derive::Flags;
