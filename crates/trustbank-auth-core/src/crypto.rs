//! Token encryption at rest
//!
//! Issued bearer tokens are encrypted with AES-256-GCM before they are
//! handed to the session registry. Revocation acts on the stored record,
//! never on the token value, so no production flow decrypts; `decrypt`
//! exists for key verification and tests.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::AuthError;

/// Length of the GCM nonce prefixed to every ciphertext
const NONCE_LENGTH: usize = 12;

/// Symmetric cipher for tokens headed to persistence
#[derive(Clone)]
pub struct TokenCipher {
    cipher: Aes256Gcm,
}

impl TokenCipher {
    /// Required key length in bytes
    pub const KEY_LENGTH: usize = 32;

    /// Create a cipher from raw key bytes
    ///
    /// Fails with `AuthError::Encryption` when the key is not exactly
    /// 32 bytes; callers treat this as a fatal startup condition.
    pub fn new(key: impl AsRef<[u8]>) -> Result<Self, AuthError> {
        let key = key.as_ref();
        let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| {
            AuthError::Encryption(format!(
                "encryption key must be exactly {} bytes, got {}",
                Self::KEY_LENGTH,
                key.len()
            ))
        })?;
        Ok(Self { cipher })
    }

    /// Encrypt a plaintext token
    ///
    /// Output is base64 of `nonce || ciphertext` with a fresh random
    /// nonce, so the same token encrypts differently every call; only
    /// the key is stable.
    pub fn encrypt(&self, plain_token: &str) -> Result<String, AuthError> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plain_token.as_bytes())
            .map_err(|_| AuthError::Encryption("token encryption failed".to_string()))?;

        let mut out = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);
        Ok(STANDARD.encode(out))
    }

    /// Decrypt a ciphertext produced by [`TokenCipher::encrypt`]
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, AuthError> {
        let raw = STANDARD
            .decode(ciphertext)
            .map_err(|_| AuthError::Encryption("ciphertext is not valid base64".to_string()))?;

        if raw.len() < NONCE_LENGTH {
            return Err(AuthError::Encryption("ciphertext too short".to_string()));
        }

        let (nonce, body) = raw.split_at(NONCE_LENGTH);
        let plain = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), body)
            .map_err(|_| AuthError::Encryption("token decryption failed".to_string()))?;

        String::from_utf8(plain)
            .map_err(|_| AuthError::Encryption("decrypted token is not UTF-8".to_string()))
    }
}

impl std::fmt::Debug for TokenCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCipher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_key_length() {
        assert!(matches!(
            TokenCipher::new([1u8; 16]),
            Err(AuthError::Encryption(_))
        ));
        assert!(matches!(
            TokenCipher::new(b""),
            Err(AuthError::Encryption(_))
        ));
        assert!(TokenCipher::new([1u8; 32]).is_ok());
    }

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let cipher = TokenCipher::new([42u8; 32]).unwrap();
        let token = "eyJhbGciOiJIUzI1NiJ9.payload.signature";
        let ciphertext = cipher.encrypt(token).unwrap();
        assert_ne!(ciphertext, token);
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), token);
    }

    #[test]
    fn test_fresh_nonce_per_encryption() {
        let cipher = TokenCipher::new([42u8; 32]).unwrap();
        let a = cipher.encrypt("same token").unwrap();
        let b = cipher.encrypt("same token").unwrap();
        assert_ne!(a, b);
        assert_eq!(cipher.decrypt(&a).unwrap(), "same token");
        assert_eq!(cipher.decrypt(&b).unwrap(), "same token");
    }

    #[test]
    fn test_wrong_key_fails_decrypt() {
        let cipher = TokenCipher::new([1u8; 32]).unwrap();
        let other = TokenCipher::new([2u8; 32]).unwrap();
        let ciphertext = cipher.encrypt("secret token").unwrap();
        assert!(matches!(
            other.decrypt(&ciphertext),
            Err(AuthError::Encryption(_))
        ));
    }

    #[test]
    fn test_garbage_inputs_do_not_panic() {
        let cipher = TokenCipher::new([1u8; 32]).unwrap();
        assert!(cipher.decrypt("!!not-base64!!").is_err());
        assert!(cipher.decrypt("").is_err());
        assert!(cipher.decrypt("AAAA").is_err()); // shorter than a nonce
    }
}
