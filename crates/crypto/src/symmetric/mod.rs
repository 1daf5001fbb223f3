//! Symmetrische Versiegelung
//!
//! ## Ablauf
//! 1. Der PKG gibt nach Attribut-Nachweis rohes Schluesselmaterial heraus
//! 2. GCM-Modus: SHA-256 ueber das Material liefert den AES-256-Schluessel
//! 3. Legacy-CTR-Modus: das Material ist selbst der AES-256-Schluessel
//! 4. Ver-/Entschluesselung unter einer vom Aufrufer gestellten Nonce
//!
//! Die beiden Ableitungspfade sind absichtlich verschieden und duerfen
//! nicht zusammengelegt werden: der Legacy-Pfad muss frueher ausgestellte
//! Ciphertexte byte-genau weiterlesen koennen.

pub mod decrypt;
pub mod derive;
pub mod encrypt;

pub use decrypt::{decrypt_ctr_legacy, decrypt_gcm};
pub use derive::{derive_gcm_key, legacy_raw_key};
pub use encrypt::encrypt_gcm;
