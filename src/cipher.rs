//! AES-256-GCM encryption and decryption of self-contained envelopes.
//!
//! This module is intentionally free of any key management, nonce policy,
//! or transport concerns. It provides the low-level seal/open operations on
//! in-memory buffers and nothing else.
//!
//! # Envelope format
//!
//! ```text
//! byte[N]   ciphertext   (N = plaintext length; N may be 0)
//! byte[16]  authentication tag
//! ```
//!
//! The tag covers both the ciphertext and the associated data, so an
//! envelope is only as portable as the (key, nonce, associated data) triple
//! used to produce it.
//!
//! **Nonce reuse under the same key is catastrophic** — it breaks both
//! confidentiality and authentication. Nonce uniqueness is the caller's
//! obligation; this module neither generates nor records nonces.

use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes256Gcm, Nonce,
};
use tracing::{trace, warn};

use crate::error::CipherError;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an AES-GCM nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the GCM authentication tag. Always 16.
pub const TAG_LEN: usize = 16;

/// Capability set of an authenticated cipher: seal plaintext into an
/// envelope, open an envelope back into plaintext.
///
/// Implementations must be stateless and reentrant — every call is an
/// independent one-shot transformation, safe to run concurrently. The
/// default backend is [`Aes256GcmCipher`]; alternative AEAD backends
/// (hardware-accelerated, externally audited) can be substituted without
/// affecting callers.
pub trait AuthenticatedCipher {
    /// Encrypt `plaintext`, returning `ciphertext || tag`.
    ///
    /// The associated data is authenticated but not encrypted; it must be
    /// presented unchanged at decryption time. Both `plaintext` and
    /// `associated_data` may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeySize`] or
    /// [`CipherError::InvalidNonceSize`] when `key` or `nonce` have an
    /// unsupported length.
    fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        nonce: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>, CipherError>;

    /// Decrypt an envelope produced by [`AuthenticatedCipher::encrypt`],
    /// returning the recovered plaintext only if the tag verifies.
    ///
    /// All-or-nothing: on any failure no plaintext bytes are returned, not
    /// even partially.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidEnvelope`] when `envelope` is shorter
    /// than [`TAG_LEN`], [`CipherError::AuthenticationFailed`] when tag
    /// verification rejects it (tampered data or mismatched key, nonce, or
    /// associated data), and the same size errors as encryption.
    fn decrypt(
        &self,
        envelope: &[u8],
        key: &[u8],
        nonce: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>, CipherError>;
}

/// AES-256-GCM backend over the RustCrypto `aes-gcm` implementation.
///
/// A fresh cipher instance is built per call and dropped before returning;
/// the expanded key schedule is zeroed on drop. Tag comparison happens
/// inside the primitive in constant time — this crate never compares tag
/// bytes itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes256GcmCipher;

impl AuthenticatedCipher for Aes256GcmCipher {
    fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        nonce: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>, CipherError> {
        let cipher = build_cipher(key)?;
        check_nonce(nonce)?;

        // The aead postfix-tag convention is exactly the envelope layout:
        // ciphertext first, 16-byte tag appended.
        let envelope = cipher
            .encrypt(
                Nonce::from_slice(nonce),
                Payload {
                    msg: plaintext,
                    aad: associated_data,
                },
            )
            .map_err(|_| CipherError::AeadFailure)?;

        trace!(
            plaintext_len = plaintext.len(),
            aad_len = associated_data.len(),
            envelope_len = envelope.len(),
            "sealed envelope"
        );
        Ok(envelope)
    }

    fn decrypt(
        &self,
        envelope: &[u8],
        key: &[u8],
        nonce: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>, CipherError> {
        if envelope.len() < TAG_LEN {
            return Err(CipherError::InvalidEnvelope {
                len: envelope.len(),
            });
        }
        let cipher = build_cipher(key)?;
        check_nonce(nonce)?;

        let plaintext = cipher
            .decrypt(
                Nonce::from_slice(nonce),
                Payload {
                    msg: envelope,
                    aad: associated_data,
                },
            )
            .map_err(|_| {
                warn!(envelope_len = envelope.len(), "tag verification failed");
                CipherError::AuthenticationFailed
            })?;

        trace!(
            envelope_len = envelope.len(),
            plaintext_len = plaintext.len(),
            "opened envelope"
        );
        Ok(plaintext)
    }
}

/// Encrypt `plaintext` with AES-256-GCM, returning `ciphertext || tag`.
///
/// Convenience wrapper around [`Aes256GcmCipher`]; see
/// [`AuthenticatedCipher::encrypt`].
pub fn encrypt(
    plaintext: &[u8],
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>, CipherError> {
    Aes256GcmCipher.encrypt(plaintext, key, nonce, associated_data)
}

/// Decrypt an AES-256-GCM envelope back to plaintext.
///
/// Convenience wrapper around [`Aes256GcmCipher`]; see
/// [`AuthenticatedCipher::decrypt`].
pub fn decrypt(
    envelope: &[u8],
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>, CipherError> {
    Aes256GcmCipher.decrypt(envelope, key, nonce, associated_data)
}

fn build_cipher(key: &[u8]) -> Result<Aes256Gcm, CipherError> {
    if key.len() != KEY_LEN {
        return Err(CipherError::InvalidKeySize { len: key.len() });
    }
    Aes256Gcm::new_from_slice(key).map_err(|_| CipherError::InvalidKeySize { len: key.len() })
}

fn check_nonce(nonce: &[u8]) -> Result<(), CipherError> {
    if nonce.len() != NONCE_LEN {
        return Err(CipherError::InvalidNonceSize { len: nonce.len() });
    }
    Ok(())
}
