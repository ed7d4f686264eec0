//! # Decoded Status Record
//!
//! The structured form of a decrypted 112-byte message body, plus the
//! discriminant validation that decides whether a decryption is trustworthy.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

use crate::errors::DecodeError;

/// The DSL line technology a status message reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DslType {
    /// Asymmetric DSL, wire discriminant 1.
    Adsl,
    /// Very-high-bitrate DSL, wire discriminant 6.
    Vdsl,
}

impl DslType {
    /// Map a wire discriminant to a line type.
    ///
    /// Only 1 and 6 are valid; everything else means the body was decrypted
    /// with the wrong key or corrupted in transit.
    pub fn from_wire(value: u32) -> Option<Self> {
        match value {
            1 => Some(Self::Adsl),
            6 => Some(Self::Vdsl),
            _ => None,
        }
    }

    /// The wire discriminant for this line type.
    pub fn as_wire(self) -> u32 {
        match self {
            Self::Adsl => 1,
            Self::Vdsl => 6,
        }
    }
}

impl fmt::Display for DslType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adsl => f.write_str("ADSL"),
            Self::Vdsl => f.write_str("VDSL"),
        }
    }
}

/// A decoded DSL status record.
///
/// Field names and widths follow the modem's fixed wire layout. Integer
/// fields are stored host-order after big-endian decode; the three text
/// fields are kept as raw fixed-width byte arrays because the device does
/// not guarantee NUL termination within the allotted width. Use the
/// accessor methods for a trimmed, printable view.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DslStatus {
    /// Upstream sync rate in bits per second.
    pub dsl_upload_speed: u32,
    /// Downstream sync rate in bits per second.
    pub dsl_download_speed: u32,
    /// ATM cells transmitted (ADSL lines).
    pub adsl_tx_cells: u32,
    /// ATM cells received (ADSL lines).
    pub adsl_rx_cells: u32,
    /// CRC errors on transmit (ADSL lines).
    pub adsl_tx_crc_errors: u32,
    /// CRC errors on receive (ADSL lines).
    pub adsl_rx_crc_errors: u32,
    /// Line-type discriminant as found on the wire (1 = ADSL, 6 = VDSL).
    pub dsl_type: u32,
    /// Opaque device-defined timestamp. The epoch is unspecified by the
    /// protocol; do not assume POSIX time.
    pub timestamp: u32,
    /// Upstream signal-to-noise ratio (VDSL lines).
    pub vdsl_snr_upload: u32,
    /// Downstream signal-to-noise ratio (VDSL lines).
    pub vdsl_snr_download: u32,
    /// Loop attenuation (ADSL lines).
    pub adsl_loop_att: u32,
    /// SNR margin (ADSL lines).
    pub adsl_snr_margin: u32,
    /// Modem firmware version, raw fixed-width bytes.
    #[serde_as(as = "Bytes")]
    pub modem_firmware_version: [u8; 20],
    /// Running mode (VDSL profile or ADSL mode), raw fixed-width bytes.
    #[serde_as(as = "Bytes")]
    pub running_mode: [u8; 18],
    /// Line state (e.g. `SHOWTIME`), raw fixed-width bytes.
    #[serde_as(as = "Bytes")]
    pub state: [u8; 26],
}

/// Truncate a fixed-width field at its first NUL byte.
fn trim_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

impl DslStatus {
    /// Validate the discriminant and return the line type.
    ///
    /// This is the primary defense against a mismatched decryption key:
    /// the cipher layer cannot detect garbage plaintext on its own.
    pub fn validate(&self) -> Result<DslType, DecodeError> {
        DslType::from_wire(self.dsl_type).ok_or(DecodeError::UnknownDslType(self.dsl_type))
    }

    /// Firmware version, NUL-trimmed and lossily decoded.
    pub fn firmware_version(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(trim_nul(&self.modem_firmware_version))
    }

    /// Running mode, NUL-trimmed and lossily decoded.
    pub fn running_mode(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(trim_nul(&self.running_mode))
    }

    /// Line state, NUL-trimmed and lossily decoded.
    pub fn state(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(trim_nul(&self.state))
    }
}
