//! # siegelpost-crypto
//!
//! Symmetrische Versiegelungs-Schicht fuer Siegelpost.
//!
//! Schuetzt Nachrichten-Payloads mit Schluesselmaterial, das der PKG nach
//! erfolgreichem Attribut-Nachweis herausgibt. Zwei Konstruktionen:
//!
//! - **GCM** (modern): AES-256-GCM ueber einen per SHA-256 abgeleiteten
//!   Schluessel. Authentizitaet steckt im Ciphertext (Auth-Tag).
//! - **CTR-Legacy** (nur Entschluesselung): AES-256-CTR mit dem rohen
//!   Schluesselmaterial, ohne eigene Integritaetspruefung. Existiert
//!   ausschliesslich zum Lesen frueher ausgestellter Ciphertexte.
//!
//! ## Module
//! - `symmetric` - Ableitung, Ver- und Entschluesselung
//! - `types` - Nonce-, Zaehlerblock- und Schluessel-Container
//! - `error` - Fehlertypen

pub mod error;
pub mod symmetric;
pub mod types;

// Bequeme Re-Exports
pub use error::{CryptoError, CryptoResult};
pub use symmetric::{
    decrypt_ctr_legacy, decrypt_gcm, derive_gcm_key, encrypt_gcm, legacy_raw_key,
};
pub use types::{CounterBlock, Nonce96, SecretBytes};
