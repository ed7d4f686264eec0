//! # Wire Layout
//!
//! Byte-level contract of a status datagram and the explicit field-by-field
//! decode of the decrypted body.
//!
//! ## Datagram (116 bytes)
//!
//! | Offset | Length | Content |
//! |--------|--------|---------|
//! | 0 | 4 | plaintext signature `20 52 05 20` |
//! | 4 | 112 | AES-128-CBC ciphertext |
//!
//! ## Decrypted body (112 bytes, offsets relative to body start)
//!
//! Twelve big-endian u32 fields at offsets 0..48, then three fixed-width
//! text fields: firmware version (48..68), running mode (68..86) and state
//! (86..112).
//!
//! All multi-byte integers are network byte order regardless of host
//! endianness; decoding never reinterprets raw memory.

use crate::errors::DecodeError;
use crate::record::DslStatus;

/// Total datagram length. Anything else is not a status message.
pub const DATAGRAM_LEN: usize = 116;

/// Length of the plaintext signature prefix.
pub const SIGNATURE_LEN: usize = 4;

/// Length of the encrypted message body.
pub const BODY_LEN: usize = DATAGRAM_LEN - SIGNATURE_LEN;

/// The fixed marker identifying a datagram as a DSL status broadcast.
pub const SIGNATURE_BYTES: [u8; SIGNATURE_LEN] = [0x20, 0x52, 0x05, 0x20];

/// Body offset of the line-type discriminant (the 7th u32 field).
pub const DSL_TYPE_OFFSET: usize = 24;

const FIRMWARE_OFFSET: usize = 48;
const RUNNING_MODE_OFFSET: usize = 68;
const STATE_OFFSET: usize = 86;

/// Check the datagram's signature prefix.
///
/// Must pass before any cipher work is spent on the datagram; traffic from
/// other protocols sharing the port fails here.
pub fn validate_signature(datagram: &[u8; DATAGRAM_LEN]) -> Result<(), DecodeError> {
    if datagram[..SIGNATURE_LEN] == SIGNATURE_BYTES {
        Ok(())
    } else {
        Err(DecodeError::ProtocolMismatch)
    }
}

fn be_u32(body: &[u8; BODY_LEN], offset: usize) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&body[offset..offset + 4]);
    u32::from_be_bytes(raw)
}

fn bytes_at<const N: usize>(body: &[u8; BODY_LEN], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&body[offset..offset + N]);
    out
}

/// Decode a decrypted body into a status record.
///
/// Pure and total: any 112 bytes produce a record. Whether the record is
/// trustworthy is decided afterwards by [`DslStatus::validate`].
pub fn parse_body(body: &[u8; BODY_LEN]) -> DslStatus {
    DslStatus {
        dsl_upload_speed: be_u32(body, 0),
        dsl_download_speed: be_u32(body, 4),
        adsl_tx_cells: be_u32(body, 8),
        adsl_rx_cells: be_u32(body, 12),
        adsl_tx_crc_errors: be_u32(body, 16),
        adsl_rx_crc_errors: be_u32(body, 20),
        dsl_type: be_u32(body, DSL_TYPE_OFFSET),
        timestamp: be_u32(body, 28),
        vdsl_snr_upload: be_u32(body, 32),
        vdsl_snr_download: be_u32(body, 36),
        adsl_loop_att: be_u32(body, 40),
        adsl_snr_margin: be_u32(body, 44),
        modem_firmware_version: bytes_at(body, FIRMWARE_OFFSET),
        running_mode: bytes_at(body, RUNNING_MODE_OFFSET),
        state: bytes_at(body, STATE_OFFSET),
    }
}

/// Encode a status record back into plaintext body bytes.
///
/// The inverse of [`parse_body`], used by broadcast spoofing tools and
/// round-trip tests.
pub fn encode_body(status: &DslStatus) -> [u8; BODY_LEN] {
    let mut body = [0u8; BODY_LEN];
    let integers = [
        status.dsl_upload_speed,
        status.dsl_download_speed,
        status.adsl_tx_cells,
        status.adsl_rx_cells,
        status.adsl_tx_crc_errors,
        status.adsl_rx_crc_errors,
        status.dsl_type,
        status.timestamp,
        status.vdsl_snr_upload,
        status.vdsl_snr_download,
        status.adsl_loop_att,
        status.adsl_snr_margin,
    ];
    for (index, value) in integers.into_iter().enumerate() {
        body[index * 4..index * 4 + 4].copy_from_slice(&value.to_be_bytes());
    }
    body[FIRMWARE_OFFSET..RUNNING_MODE_OFFSET].copy_from_slice(&status.modem_firmware_version);
    body[RUNNING_MODE_OFFSET..STATE_OFFSET].copy_from_slice(&status.running_mode);
    body[STATE_OFFSET..].copy_from_slice(&status.state);
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DslType;

    #[test]
    fn test_layout_accounts_for_every_byte() {
        assert_eq!(SIGNATURE_LEN + BODY_LEN, DATAGRAM_LEN);
        assert_eq!(STATE_OFFSET + 26, BODY_LEN);
    }

    #[test]
    fn test_signature_accepted() {
        let mut datagram = [0u8; DATAGRAM_LEN];
        datagram[..4].copy_from_slice(&SIGNATURE_BYTES);
        assert!(validate_signature(&datagram).is_ok());
    }

    #[test]
    fn test_signature_rejected_on_any_byte_mismatch() {
        for position in 0..SIGNATURE_LEN {
            let mut datagram = [0u8; DATAGRAM_LEN];
            datagram[..4].copy_from_slice(&SIGNATURE_BYTES);
            datagram[position] ^= 0x01;
            assert_eq!(
                validate_signature(&datagram),
                Err(DecodeError::ProtocolMismatch)
            );
        }
    }

    #[test]
    fn test_discriminant_decoded_big_endian() {
        // 00 00 00 01 at offset 24 is ADSL on every host.
        let mut body = [0u8; BODY_LEN];
        body[DSL_TYPE_OFFSET + 3] = 0x01;
        let status = parse_body(&body);
        assert_eq!(status.dsl_type, 1);
        assert_eq!(status.validate(), Ok(DslType::Adsl));
    }

    #[test]
    fn test_integer_fields_decoded_at_fixed_offsets() {
        let mut body = [0u8; BODY_LEN];
        body[0..4].copy_from_slice(&19_978_000u32.to_be_bytes());
        body[4..8].copy_from_slice(&73_821_000u32.to_be_bytes());
        body[28..32].copy_from_slice(&0xDEAD_BEEFu32.to_be_bytes());

        let status = parse_body(&body);
        assert_eq!(status.dsl_upload_speed, 19_978_000);
        assert_eq!(status.dsl_download_speed, 73_821_000);
        assert_eq!(status.timestamp, 0xDEAD_BEEF);
    }

    #[test]
    fn test_text_fields_taken_verbatim() {
        let mut body = [0u8; BODY_LEN];
        body[STATE_OFFSET..STATE_OFFSET + 8].copy_from_slice(b"SHOWTIME");
        let status = parse_body(&body);
        assert_eq!(&status.state[..8], b"SHOWTIME");
        assert_eq!(status.state(), "SHOWTIME");
    }

    #[test]
    fn test_parse_encode_round_trip() {
        let mut body = [0u8; BODY_LEN];
        for (index, byte) in body.iter_mut().enumerate() {
            *byte = index as u8;
        }
        assert_eq!(encode_body(&parse_body(&body)), body);
    }
}
