//! Decode error types.

use thiserror::Error;

/// Reasons a received datagram is discarded by the decode pipeline.
///
/// None of these are fatal: the receive loop simply waits for the next
/// datagram. A wrong decryption key can never fail the cipher itself, it
/// only produces garbage that the discriminant check rejects.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The datagram is not the fixed status-message length.
    #[error("Unexpected datagram length: expected {expected} bytes, got {actual}")]
    BadLength {
        /// Required datagram length in bytes
        expected: usize,
        /// Received datagram length in bytes
        actual: usize,
    },

    /// The first four bytes are not the protocol signature. The datagram is
    /// foreign traffic or noise sharing the port.
    #[error("Incorrect protocol signature bytes")]
    ProtocolMismatch,

    /// The decrypted discriminant is neither ADSL (1) nor VDSL (6). Most
    /// likely the decryption key does not match the sending modem.
    #[error("Implausible DSL type {0}, check the decryption key")]
    UnknownDslType(u32),
}

/// Failure to parse a human-readable hardware address string.
///
/// Fatal at startup: a listener cannot derive a decryption key without a
/// valid MAC address.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressParseError {
    /// The string did not split into exactly six octet groups.
    #[error("Expected 6 colon or hyphen separated octets, got {0}")]
    WrongGroupCount(usize),

    /// An octet group was not two hexadecimal digits.
    #[error("Invalid octet {0:?}")]
    InvalidOctet(String),
}
