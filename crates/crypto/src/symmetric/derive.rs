//! Schluessel-Ableitung aus PKG-Material
//!
//! Zwei nicht austauschbare Pfade:
//! - GCM: SHA-256-Digest des Materials (Laengen-Normalisierung auf 32
//!   Bytes plus milde Domain-Trennung)
//! - Legacy-CTR: das rohe Material selbst, ohne Hashing

use sha2::{Digest, Sha256};

use crate::error::{CryptoError, CryptoResult};

/// Laenge des abgeleiteten AES-256-Schluessels in Bytes
pub const SCHLUESSEL_LAENGE: usize = 32;

/// Leitet den GCM-Schluessel aus rohem PKG-Material ab
///
/// Das Material wird nie direkt als Cipher-Schluessel verwendet, sondern
/// immer erst durch SHA-256 auf die benoetigte Laenge gebracht.
pub fn derive_gcm_key(material: &[u8]) -> [u8; SCHLUESSEL_LAENGE] {
    let digest = Sha256::digest(material);
    let mut key = [0u8; SCHLUESSEL_LAENGE];
    key.copy_from_slice(&digest);
    key
}

/// Gibt das rohe Material als Legacy-Schluessel zurueck
///
/// Keine Ableitung: fruehere Ciphertexte wurden direkt unter dem
/// Materialschluessel erzeugt. Das Material muss exakt 32 Bytes lang sein.
pub fn legacy_raw_key(material: &[u8]) -> CryptoResult<[u8; SCHLUESSEL_LAENGE]> {
    let key: [u8; SCHLUESSEL_LAENGE] =
        material
            .try_into()
            .map_err(|_| CryptoError::UngueltigeSchluesselLaenge {
                erwartet: SCHLUESSEL_LAENGE,
                erhalten: material.len(),
            })?;
    Ok(key)
}
