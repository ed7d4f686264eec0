//! # DSL Status Core - Broadcast Decode Pipeline
//!
//! Decodes the encrypted UDP status broadcasts that DrayTek Vigor DSL modems
//! emit on port 4944. A broadcast is a fixed 116-byte datagram: a 4-byte
//! plaintext protocol signature followed by 112 bytes of AES-128-CBC
//! ciphertext whose key and IV are both derived from the modem's MAC address.
//!
//! ## Components
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `keys` | MAC address parsing, SHA-1 based key/IV derivation |
//! | `cipher` | AES-128-CBC decryption/encryption of the message body |
//! | `wire` | Wire constants, signature check, big-endian field layout |
//! | `record` | `DslStatus` record, `DslType` discriminant validation |
//! | `decoder` | Full datagram pipeline composing the above |
//!
//! ## Pipeline
//!
//! ```text
//! datagram ──length gate──► signature check ──► CBC decrypt ──► parse ──► validate
//!                │                 │                                          │
//!                └──── discard ────┴────────────── discard ◄─────────────────┘
//! ```
//!
//! Every stage is a pure function over caller-supplied buffers; the crate
//! performs no I/O and never logs. Rejected datagrams surface as typed
//! [`DecodeError`] values the receive loop can discard and move past.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cipher;
pub mod decoder;
pub mod errors;
pub mod keys;
pub mod record;
pub mod wire;

// Re-exports
pub use decoder::{decode_datagram, encode_datagram};
pub use errors::{AddressParseError, DecodeError};
pub use keys::{derive_key, HardwareAddress, KeyMaterial};
pub use record::{DslStatus, DslType};
pub use wire::{BODY_LEN, DATAGRAM_LEN, SIGNATURE_BYTES};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
