//! Payload-Verschluesselung (GCM-Modus)
//!
//! Verschluesselt Nachrichten-Payloads unter dem per SHA-256 abgeleiteten
//! Schluessel. Der Legacy-CTR-Modus hat absichtlich keinen
//! Verschluesselungs-Pfad: er existiert nur zum Lesen alter Ciphertexte.
//!
//! ## Format
//! ```text
//! [ciphertext + auth_tag(16)]
//! ```

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce as AesNonce,
};

use crate::error::{CryptoError, CryptoResult};
use crate::symmetric::derive::derive_gcm_key;
use crate::types::Nonce96;

/// Verschluesselt einen Payload mit AES-256-GCM
///
/// # Parameter
/// - `plaintext`: Rohe Nachrichten-Bytes
/// - `material`: Rohes Schluesselmaterial vom PKG (beliebige Laenge)
/// - `nonce`: 96-Bit-Nonce, vom Aufrufer gestellt und pro Schluessel
///   einmalig; Wiederverwendung bricht die Vertraulichkeit
pub fn encrypt_gcm(plaintext: &[u8], material: &[u8], nonce: &Nonce96) -> CryptoResult<Vec<u8>> {
    let key_bytes = derive_gcm_key(material);

    let key = Key::<Aes256Gcm>::from_slice(&key_bytes);
    let cipher = Aes256Gcm::new(key);
    let aes_nonce = AesNonce::from_slice(nonce.as_bytes());

    cipher
        .encrypt(aes_nonce, plaintext)
        .map_err(|e| CryptoError::Verschluesselung(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
