//! Payload-Entschluesselung (GCM- und Legacy-CTR-Modus)
//!
//! GCM verifiziert den Auth-Tag und schlaegt bei Manipulation sauber fehl.
//! Der Legacy-CTR-Pfad entschluesselt nur; Integritaet muss der Aufrufer
//! vor dem Aufruf selbst pruefen (externe MAC).

use aes::Aes256;
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce as AesNonce,
};
use ctr::cipher::{KeyIvInit, StreamCipher};

use crate::error::{CryptoError, CryptoResult};
use crate::symmetric::derive::{derive_gcm_key, legacy_raw_key};
use crate::types::{CounterBlock, Nonce96};

/// AES-256-CTR mit 64-Bit Big-Endian-Zaehler im 128-Bit-Block
type Aes256Ctr64 = ctr::Ctr64BE<Aes256>;

/// Entschluesselt einen GCM-Payload
///
/// Verifiziert den Auth-Tag; jede Manipulation an Ciphertext oder Tag
/// fuehrt zu `CryptoError::Entschluesselung`, nie zu verstuemmeltem
/// Klartext.
pub fn decrypt_gcm(ciphertext: &[u8], material: &[u8], nonce: &Nonce96) -> CryptoResult<Vec<u8>> {
    let key_bytes = derive_gcm_key(material);

    let key = Key::<Aes256Gcm>::from_slice(&key_bytes);
    let cipher = Aes256Gcm::new(key);
    let aes_nonce = AesNonce::from_slice(nonce.as_bytes());

    cipher
        .decrypt(aes_nonce, ciphertext)
        .map_err(|e| CryptoError::Entschluesselung(e.to_string()))
}

/// Entschluesselt einen Legacy-Ciphertext im CTR-Modus
///
/// Das Material wird roh als AES-256-Schluessel verwendet (exakt 32
/// Bytes), ohne die SHA-256-Ableitung des GCM-Pfads. Es findet KEINE
/// Integritaetspruefung statt; Aufrufer, die Integritaet brauchen,
/// muessen ihre MAC vor diesem Aufruf verifizieren. Reine Funktion:
/// gleiche Eingaben liefern immer gleiche Ausgabe-Bytes.
pub fn decrypt_ctr_legacy(
    ciphertext: &[u8],
    material: &[u8],
    zaehler: &CounterBlock,
) -> CryptoResult<Vec<u8>> {
    let key_bytes = legacy_raw_key(material)?;

    let mut cipher = Aes256Ctr64::new(&key_bytes.into(), zaehler.as_bytes().into());
    let mut klartext = ciphertext.to_vec();
    cipher.apply_keystream(&mut klartext);
    Ok(klartext)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
