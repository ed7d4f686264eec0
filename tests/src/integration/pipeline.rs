//! # End-to-End Pipeline Tests
//!
//! Runs complete datagrams through the decode pipeline:
//!
//! ```text
//! datagram → length gate → signature check → CBC decrypt → parse → validate
//! ```
//!
//! ## Test Categories
//!
//! 1. **Known-Answer**: A captured broadcast from a real Vigor modem must
//!    decode to its published field values.
//! 2. **Gates**: Wrong lengths and foreign signatures are rejected before
//!    cryptographic work.
//! 3. **Key Mismatch**: Decrypting with the wrong modem's key must fail the
//!    discriminant check, not crash.

#[cfg(test)]
mod tests {
    use dsl_status_core::{
        decode_datagram, derive_key, encode_datagram, DecodeError, DslStatus, DslType,
        HardwareAddress, DATAGRAM_LEN,
    };
    use rand::RngCore;

    /// A complete captured broadcast from a modem with MAC
    /// `aa:bb:cc:dd:ee:ff`: 4 signature bytes + 112 bytes of ciphertext.
    const CAPTURED_DATAGRAM: &str = "2052052030e2584e6d7f105167f7a0f4db1e921e1375577792f52fe5\
        ed4f14e17722d021d3770aa9af3e591441a9ef02514c4e278ef5701a5ede036b232f94bd54e3b8fe4515\
        cb163d78a8b2f40dd980f2f4841f6c9679b6bf4f94263824175b2f75bf6a51f9c2fb029590f95f39ca2d\
        9efc7e4b";

    fn captured_datagram() -> Vec<u8> {
        hex::decode(CAPTURED_DATAGRAM).unwrap()
    }

    fn modem_mac() -> HardwareAddress {
        "aa:bb:cc:dd:ee:ff".parse().unwrap()
    }

    fn sample_status(dsl_type: u32) -> DslStatus {
        let mut status = DslStatus {
            dsl_upload_speed: 19_978_000,
            dsl_download_speed: 73_821_000,
            adsl_tx_cells: 2925,
            adsl_rx_cells: 0,
            adsl_tx_crc_errors: 12,
            adsl_rx_crc_errors: 7,
            dsl_type,
            timestamp: 0x6032_C888,
            vdsl_snr_upload: 3,
            vdsl_snr_download: 3,
            adsl_loop_att: 14,
            adsl_snr_margin: 6,
            modem_firmware_version: [0; 20],
            running_mode: [0; 18],
            state: [0; 26],
        };
        status.modem_firmware_version[..12].copy_from_slice(b"12-3-2-3-0-5");
        status.running_mode[..3].copy_from_slice(b"17A");
        status.state[..8].copy_from_slice(b"SHOWTIME");
        status
    }

    // =========================================================================
    // Known-answer vector
    // =========================================================================

    #[test]
    fn test_captured_broadcast_decodes_to_published_values() {
        let key = derive_key(&modem_mac());
        let (dsl_type, status) = decode_datagram(&key, &captured_datagram()).unwrap();

        assert_eq!(dsl_type, DslType::Vdsl);
        assert_eq!(status.dsl_upload_speed, 19_978_000);
        assert_eq!(status.dsl_download_speed, 73_821_000);
        assert_eq!(status.adsl_tx_cells, 2925);
        assert_eq!(status.adsl_rx_cells, 0);
        assert_eq!(status.dsl_type, 6);
        assert_eq!(status.timestamp, 0);
        assert_eq!(status.vdsl_snr_upload, 3);
        assert_eq!(status.vdsl_snr_download, 3);
        assert_eq!(status.firmware_version(), "12-3-2-3-0-5");
        assert_eq!(status.running_mode(), "17A");
        assert_eq!(status.state(), "SHOWTIME");
    }

    #[test]
    fn test_captured_broadcast_key_matches_derivation() {
        // SHA-1(aa bb cc dd ee ff) = 1bac77b2...; the key is its first five
        // bytes as uppercase hex, zero padded.
        let key = derive_key(&modem_mac());
        assert_eq!(&key.as_bytes()[..10], b"1BAC77B2C9");
    }

    // =========================================================================
    // Gates
    // =========================================================================

    #[test]
    fn test_truncated_capture_fails_length_gate() {
        let key = derive_key(&modem_mac());
        let datagram = captured_datagram();
        assert_eq!(
            decode_datagram(&key, &datagram[..DATAGRAM_LEN - 1]),
            Err(DecodeError::BadLength {
                expected: DATAGRAM_LEN,
                actual: DATAGRAM_LEN - 1,
            })
        );
    }

    #[test]
    fn test_foreign_traffic_of_right_length_fails_signature_gate() {
        let key = derive_key(&modem_mac());
        let mut noise = vec![0u8; DATAGRAM_LEN];
        rand::thread_rng().fill_bytes(&mut noise);
        noise[0] = 0x00; // guarantee the marker cannot match
        assert_eq!(
            decode_datagram(&key, &noise),
            Err(DecodeError::ProtocolMismatch)
        );
    }

    // =========================================================================
    // Key mismatch
    // =========================================================================

    #[test]
    fn test_captured_broadcast_rejected_under_wrong_key() {
        let wrong = derive_key(&"00:11:22:33:44:55".parse().unwrap());
        match decode_datagram(&wrong, &captured_datagram()) {
            Err(DecodeError::UnknownDslType(value)) => {
                assert!(value != 1 && value != 6);
            }
            other => panic!("expected discriminant rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_spoofed_adsl_broadcast_round_trips() {
        let key = derive_key(&modem_mac());
        let status = sample_status(1);
        let (dsl_type, decoded) = decode_datagram(&key, &encode_datagram(&key, &status)).unwrap();
        assert_eq!(dsl_type, DslType::Adsl);
        assert_eq!(decoded, status);
    }

    #[test]
    fn test_spoofed_broadcast_with_bogus_type_rejected() {
        let key = derive_key(&modem_mac());
        let datagram = encode_datagram(&key, &sample_status(42));
        assert_eq!(
            decode_datagram(&key, &datagram),
            Err(DecodeError::UnknownDslType(42))
        );
    }
}
