//! # Message Body Cipher
//!
//! AES-128-CBC over the 112-byte message body, exactly 7 full blocks, no
//! padding. The protocol uses the derived 16-byte value as both the key and
//! the IV; that coupling is part of the device's wire format and must be
//! reproduced byte-for-byte to interoperate.
//!
//! Decryption has no failure path: a wrong key still decrypts mechanically
//! and produces garbage plaintext, which the discriminant check in
//! [`crate::record`] is responsible for catching. No authentication tag
//! exists in this protocol.

use aes::cipher::{generic_array::GenericArray, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::keys::KeyMaterial;
use crate::wire::BODY_LEN;

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;

/// AES block length in bytes. The body is exactly 7 blocks.
pub const BLOCK_LEN: usize = 16;

/// Decrypt a message body in place.
pub fn decrypt_body(body: &mut [u8; BODY_LEN], key_iv: &KeyMaterial) {
    let mut cipher = Aes128CbcDec::new(key_iv.as_bytes().into(), key_iv.as_bytes().into());
    for block in body.chunks_exact_mut(BLOCK_LEN) {
        cipher.decrypt_block_mut(GenericArray::from_mut_slice(block));
    }
}

/// Encrypt a message body in place.
///
/// The inverse of [`decrypt_body`], used by broadcast spoofing tools and
/// round-trip tests.
pub fn encrypt_body(body: &mut [u8; BODY_LEN], key_iv: &KeyMaterial) {
    let mut cipher = Aes128CbcEnc::new(key_iv.as_bytes().into(), key_iv.as_bytes().into());
    for block in body.chunks_exact_mut(BLOCK_LEN) {
        cipher.encrypt_block_mut(GenericArray::from_mut_slice(block));
    }
}
