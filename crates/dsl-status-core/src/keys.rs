//! # Key Derivation
//!
//! DrayTek modems derive the broadcast encryption key from their own MAC
//! address: the first 5 bytes of the SHA-1 digest of the 6 raw address
//! bytes, rendered as 10 uppercase ASCII hex characters, padded with 6 zero
//! bytes to the 16 bytes AES-128 requires. The same 16-byte value doubles as
//! the CBC initialization vector.
//!
//! Only 40 bits of digest entropy survive into the key; that is a property
//! of the device protocol, replicated here for interoperability.

use std::fmt;
use std::str::FromStr;

use sha1::{Digest, Sha1};
use zeroize::Zeroize;

use crate::errors::AddressParseError;

/// Length of a link-layer hardware address in bytes.
pub const HW_ADDR_LEN: usize = 6;

/// Length of the derived AES-128 key/IV in bytes.
pub const KEY_LEN: usize = 16;

/// Number of digest bytes that contribute to the key.
const DIGEST_PREFIX_LEN: usize = 5;

/// The 6-byte link-layer address of the modem whose broadcasts are decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HardwareAddress([u8; HW_ADDR_LEN]);

impl HardwareAddress {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; HW_ADDR_LEN]) -> Self {
        Self(bytes)
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; HW_ADDR_LEN] {
        &self.0
    }
}

impl FromStr for HardwareAddress {
    type Err = AddressParseError;

    /// Parse the colon or hyphen delimited form, e.g. `aa:bb:cc:dd:ee:ff`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups: Vec<&str> = s.split([':', '-']).collect();
        if groups.len() != HW_ADDR_LEN {
            return Err(AddressParseError::WrongGroupCount(groups.len()));
        }

        let mut bytes = [0u8; HW_ADDR_LEN];
        for (byte, group) in bytes.iter_mut().zip(&groups) {
            if group.len() != 2 {
                return Err(AddressParseError::InvalidOctet((*group).to_string()));
            }
            *byte = u8::from_str_radix(group, 16)
                .map_err(|_| AddressParseError::InvalidOctet((*group).to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for HardwareAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Derived key material, used as both the AES-128 key and the CBC IV.
#[derive(Clone, PartialEq, Eq, Zeroize)]
#[zeroize(drop)]
pub struct KeyMaterial([u8; KEY_LEN]);

impl KeyMaterial {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for KeyMaterial {
    // Key bytes stay out of Debug output; log them deliberately or not at all.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial(..)")
    }
}

/// Derive the key/IV for a modem's broadcasts from its hardware address.
///
/// Deterministic and total: the same address always yields the same 16
/// bytes, and no input can fail.
pub fn derive_key(mac: &HardwareAddress) -> KeyMaterial {
    let digest = Sha1::digest(mac.as_bytes());

    // 5 digest bytes become 10 uppercase hex characters; the remaining 6
    // key bytes stay zero.
    let mut key = [0u8; KEY_LEN];
    let hex = hex::encode_upper(&digest[..DIGEST_PREFIX_LEN]);
    key[..DIGEST_PREFIX_LEN * 2].copy_from_slice(hex.as_bytes());

    KeyMaterial(key)
}
