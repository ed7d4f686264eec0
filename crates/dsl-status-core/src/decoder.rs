//! # Datagram Pipeline
//!
//! Composes the decode stages for one received datagram:
//!
//! ```text
//! length gate → signature check → CBC decrypt → layout parse → type check
//! ```
//!
//! Every rejection is recoverable; the receive loop discards the datagram
//! and waits for the next one. Nothing in here performs I/O or allocates
//! beyond the fixed body buffer.

use crate::cipher;
use crate::errors::DecodeError;
use crate::keys::KeyMaterial;
use crate::record::{DslStatus, DslType};
use crate::wire::{self, BODY_LEN, DATAGRAM_LEN, SIGNATURE_BYTES, SIGNATURE_LEN};

/// Decode and validate one received datagram.
///
/// The length gate runs first: buffers that are not exactly 116 bytes are
/// rejected before any signature or cipher work. A successful decode yields
/// the validated line type together with the full record.
///
/// # Errors
///
/// - [`DecodeError::BadLength`] if the buffer is not 116 bytes.
/// - [`DecodeError::ProtocolMismatch`] if the signature prefix is wrong.
/// - [`DecodeError::UnknownDslType`] if the decrypted discriminant is
///   implausible, which usually means the key does not match the sender.
pub fn decode_datagram(
    key_iv: &KeyMaterial,
    datagram: &[u8],
) -> Result<(DslType, DslStatus), DecodeError> {
    let datagram: &[u8; DATAGRAM_LEN] =
        datagram.try_into().map_err(|_| DecodeError::BadLength {
            expected: DATAGRAM_LEN,
            actual: datagram.len(),
        })?;

    wire::validate_signature(datagram)?;

    let mut body = [0u8; BODY_LEN];
    body.copy_from_slice(&datagram[SIGNATURE_LEN..]);
    cipher::decrypt_body(&mut body, key_iv);

    let status = wire::parse_body(&body);
    let dsl_type = status.validate()?;

    Ok((dsl_type, status))
}

/// Build a complete broadcast datagram from a status record.
///
/// The inverse of [`decode_datagram`]: encodes the record, encrypts the
/// body under the given key/IV and prepends the protocol signature. Used by
/// spoofing tools and end-to-end tests; a real modem is the only other
/// producer of these datagrams.
pub fn encode_datagram(key_iv: &KeyMaterial, status: &DslStatus) -> [u8; DATAGRAM_LEN] {
    let mut body = wire::encode_body(status);
    cipher::encrypt_body(&mut body, key_iv);

    let mut datagram = [0u8; DATAGRAM_LEN];
    datagram[..SIGNATURE_LEN].copy_from_slice(&SIGNATURE_BYTES);
    datagram[SIGNATURE_LEN..].copy_from_slice(&body);
    datagram
}
