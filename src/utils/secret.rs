//! Secret storage helpers.
//!
//! AES-256-GCM encryption for sensitive values persisted in the settings
//! file (the remembered login password), Base64-encoded for storage.

use aes_gcm::{
    Aes256Gcm,
    aead::{Aead, AeadCore, KeyInit, Nonce, OsRng},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::error::Error;

type Result<T, E = Error> = std::result::Result<T, E>;

/// Master encryption key for the AES-256-GCM cipher.
///
/// WARNING: In production, this should be stored securely (e.g., keychain,
/// env var) rather than hardcoded in the binary.
const MASTER_KEY: &[u8; 32] = b"MediVisionAdminSecretKey2026!Med";

/// Encrypt a plaintext string with AES-256-GCM.
///
/// Each call generates a fresh 96-bit nonce; the output Base64 string
/// contains `[nonce (12 bytes)][ciphertext]`.
pub fn encrypt(plain_text: &str) -> Result<String> {
    let cipher = Aes256Gcm::new(MASTER_KEY.into());
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plain_text.as_bytes())
        .map_err(|e| Error::Invalid {
            message: format!("Encryption failed: {e}"),
        })?;

    let mut combined = nonce.to_vec();
    combined.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(combined))
}

/// Decrypt a Base64 string produced by [`encrypt`].
pub fn decrypt(cipher_text: &str) -> Result<String> {
    let data = BASE64.decode(cipher_text).map_err(|e| Error::Invalid {
        message: format!("Base64 decode failed: {e}"),
    })?;

    // Nonce is 12 bytes
    if data.len() < 12 {
        return Err(Error::Invalid {
            message: "Ciphertext too short".to_string(),
        });
    }

    let cipher = Aes256Gcm::new(MASTER_KEY.into());
    let nonce = Nonce::<Aes256Gcm>::from_slice(&data[0..12]);
    let ciphertext = &data[12..];

    let plaintext_bytes = cipher.decrypt(nonce, ciphertext).map_err(|e| Error::Invalid {
        message: format!("Decryption failed: {e}"),
    })?;

    String::from_utf8(plaintext_bytes).map_err(|e| Error::Invalid {
        message: format!("UTF-8 decode failed: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt() {
        let original = "admin_password_123";
        let encrypted = encrypt(original).expect("Encryption failed");
        let decrypted = decrypt(&encrypted).expect("Decryption failed");
        assert_eq!(original, decrypted);
    }

    #[test]
    fn test_encrypt_produces_different_ciphertext() {
        let original = "test";
        let encrypted1 = encrypt(original).expect("Encryption failed");
        let encrypted2 = encrypt(original).expect("Encryption failed");
        // Random nonce per call
        assert_ne!(encrypted1, encrypted2);
    }

    #[test]
    fn test_decrypt_invalid_base64() {
        assert!(decrypt("not_valid_base64!!!").is_err());
    }

    #[test]
    fn test_decrypt_too_short() {
        assert!(decrypt("AQIDBA==").is_err());
    }
}
