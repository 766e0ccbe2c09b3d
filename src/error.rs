//! Error type surfaced by both cipher operations.

use thiserror::Error;

use crate::cipher::{KEY_LEN, NONCE_LEN, TAG_LEN};

/// Errors produced by the cipher layer.
///
/// Every failure is reported synchronously to the caller; there are no
/// retries and no partial output. In particular, a failed decryption never
/// exposes any plaintext bytes.
#[derive(Debug, Error)]
pub enum CipherError {
    /// The key is the wrong length (must be [`KEY_LEN`] bytes).
    #[error("invalid key size: expected {KEY_LEN} bytes, got {len}")]
    InvalidKeySize {
        /// Length of the rejected key.
        len: usize,
    },

    /// The nonce is the wrong length (must be [`NONCE_LEN`] bytes).
    #[error("invalid nonce size: expected {NONCE_LEN} bytes, got {len}")]
    InvalidNonceSize {
        /// Length of the rejected nonce.
        len: usize,
    },

    /// The envelope is too short to contain the authentication tag.
    #[error("invalid envelope: {len} bytes is shorter than the {TAG_LEN}-byte tag")]
    InvalidEnvelope {
        /// Length of the rejected envelope.
        len: usize,
    },

    /// Tag verification rejected the envelope.
    ///
    /// Raised when the ciphertext, tag, key, nonce, or associated data do
    /// not match those used at encryption time. The message is deliberately
    /// uniform — it reveals nothing about where verification diverged.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The underlying AEAD primitive reported an error during encryption.
    /// Unreachable once key and nonce lengths have been validated.
    #[error("aead operation failed")]
    AeadFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_expected_sizes() {
        let e = CipherError::InvalidKeySize { len: 16 };
        assert_eq!(e.to_string(), "invalid key size: expected 32 bytes, got 16");

        let e = CipherError::InvalidNonceSize { len: 8 };
        assert_eq!(e.to_string(), "invalid nonce size: expected 12 bytes, got 8");

        let e = CipherError::InvalidEnvelope { len: 3 };
        assert_eq!(
            e.to_string(),
            "invalid envelope: 3 bytes is shorter than the 16-byte tag"
        );
    }

    #[test]
    fn authentication_failure_message_is_uniform() {
        // No position, no length, no hint of which input mismatched.
        assert_eq!(
            CipherError::AuthenticationFailed.to_string(),
            "authentication failed"
        );
    }
}
