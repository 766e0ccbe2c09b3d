//! `aead-envelope` — AES-256-GCM authenticated encryption envelopes.
//!
//! Two operations over borrowed byte buffers:
//!
//! - [`encrypt`] seals plaintext into `ciphertext || tag` (the tag is
//!   always 16 bytes, so the envelope is exactly `plaintext.len() + 16`
//!   bytes).
//! - [`decrypt`] opens an envelope, returning the plaintext only when the
//!   authentication tag verifies against the same key, nonce, and
//!   associated data used to seal it.
//!
//! Both are pure, stateless, and reentrant; the AEAD primitive itself is
//! delegated to the RustCrypto [`aes-gcm`](https://docs.rs/aes-gcm) crate.
//! Key handling, nonce uniqueness, storage, and transport are entirely the
//! caller's responsibility.
//!
//! ```
//! use aead_envelope::{decrypt, encrypt};
//!
//! let key = [0x42u8; 32];
//! let nonce = [0x24u8; 12]; // must be unique per key — caller's obligation
//! let envelope = encrypt(b"Hello, AES-GCM!", &key, &nonce, b"header")?;
//! assert_eq!(envelope.len(), 15 + 16);
//! let plaintext = decrypt(&envelope, &key, &nonce, b"header")?;
//! assert_eq!(plaintext, b"Hello, AES-GCM!");
//! # Ok::<(), aead_envelope::CipherError>(())
//! ```

pub mod cipher;
pub mod error;

pub use cipher::{
    decrypt, encrypt, Aes256GcmCipher, AuthenticatedCipher, KEY_LEN, NONCE_LEN, TAG_LEN,
};
pub use error::CipherError;
