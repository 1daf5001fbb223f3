//! Gemeinsame Typen der Versiegelungs-Schicht

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{CryptoError, CryptoResult};

/// Sicherer Schluessel-Container (wird beim Drop genullt)
///
/// Haelt vom PKG ausgegebenes Schluesselmaterial. Wird pro Abruf erzeugt,
/// fuer genau eine Ableitung verwendet und verworfen; niemals geloggt.
#[derive(Clone)]
pub struct SecretBytes(pub Vec<u8>);

impl Drop for SecretBytes {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretBytes([REDACTED] {} bytes)", self.0.len())
    }
}

impl SecretBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 96-Bit-Nonce fuer den GCM-Modus
///
/// Wird vom Aufrufer gestellt. Die Wiederverwendung einer Nonce unter
/// demselben Schluessel bricht die Vertraulichkeit; dieser Vertrag liegt
/// beim Aufrufer und wird hier nicht geprueft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce96 {
    pub bytes: [u8; 12],
}

impl Nonce96 {
    /// Erstellt eine frische Zufalls-Nonce (OsRng)
    pub fn zufaellig() -> Self {
        let mut bytes = [0u8; 12];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Erstellt eine Nonce aus rohen Bytes (muss genau 12 Bytes lang sein)
    pub fn aus_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let bytes: [u8; 12] = bytes.try_into().map_err(|_| CryptoError::UngueltigeNonce {
            erwartet: 12,
            erhalten: bytes.len(),
        })?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.bytes
    }
}

/// 128-Bit-Zaehlerblock fuer den Legacy-CTR-Modus
///
/// Entspricht dem Initial-Zaehler frueher ausgestellter Ciphertexte:
/// volle 16 Bytes, von denen die unteren 8 als Big-Endian-Zaehler laufen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterBlock {
    pub bytes: [u8; 16],
}

impl CounterBlock {
    /// Erstellt einen Zaehlerblock aus rohen Bytes (genau 16 Bytes)
    pub fn aus_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let bytes: [u8; 16] = bytes.try_into().map_err(|_| CryptoError::UngueltigeNonce {
            erwartet: 16,
            erhalten: bytes.len(),
        })?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }
}
