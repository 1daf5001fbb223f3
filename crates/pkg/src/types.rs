//! Wire-Typen der PKG- und Auth-Endpunkte
//!
//! Feldnamen folgen dem Wire-Format des Dienstes (camelCase via serde-
//! rename). Der Schluessel aus `SchluesselAntwort` wird byte-genau
//! uebernommen, nicht dekodiert.

use serde::{Deserialize, Serialize};
use siegelpost_core::Attribut;
use siegelpost_crypto::SecretBytes;

use crate::error::{PkgError, PkgResult};

/// Erwarteter Session-Status fuer erfolgreiche Schluessel-Ausgabe
pub const STATUS_DONE: &str = "DONE";

/// Erwarteter Nachweis-Status fuer erfolgreiche Schluessel-Ausgabe
pub const PROOF_VALID: &str = "VALID";

/// Anfrage-Body fuer `POST /v2/request/start`
///
/// `con` ist die Konjunktion der nachzuweisenden Attribute; `validity`
/// eine optionale Gueltigkeitsdauer der Session in Sekunden.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchluesselAnfrage {
    pub con: Vec<Attribut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity: Option<u64>,
}

/// Server-seitiger Session-Zeiger
///
/// `u` kommt opak/relativ vom Dienst und muss vor der Anzeige auf dem
/// Empfaenger-Geraet gegen die Disclosure-Frontend-Basis umgeschrieben
/// werden. Lebt nur fuer die Dauer einer Operation, wird nie persistiert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionZeiger {
    pub u: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irmaqr: Option<String>,
}

/// Antwort auf `POST /v2/request/start` und `POST /api/sign`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStartAntwort {
    #[serde(rename = "sessionPtr")]
    pub session_ptr: SessionZeiger,
    pub token: String,
}

/// Antwort auf `GET /v2/request/key/{zeitstempel}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchluesselAntwort {
    pub status: String,
    #[serde(default, rename = "proofStatus")]
    pub proof_status: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

impl SchluesselAntwort {
    /// Prueft die Erfolgs-Sentinels und gibt das Schluesselmaterial heraus
    ///
    /// Material gibt es NUR bei `status == "DONE"` und
    /// `proofStatus == "VALID"`; jede andere Kombination (auch fehlende
    /// Felder) ist ein harter Fehler. Es wird nie ein Teil-Schluessel
    /// zurueckgegeben.
    pub fn material(self) -> PkgResult<SecretBytes> {
        if self.status != STATUS_DONE {
            return Err(PkgError::UngueltigeAntwort(format!(
                "Session nicht erfolgreich abgeschlossen (Status '{}', Nachweis '{}')",
                self.status,
                self.proof_status.as_deref().unwrap_or("fehlt"),
            )));
        }
        match self.proof_status.as_deref() {
            Some(PROOF_VALID) => match self.key {
                Some(key) => Ok(SecretBytes::new(key.into_bytes())),
                None => Err(PkgError::UngueltigeAntwort(
                    "key-Feld fehlt trotz DONE/VALID".into(),
                )),
            },
            Some(nachweis) => Err(PkgError::ProofUngueltig {
                status: self.status.clone(),
                nachweis: nachweis.to_string(),
            }),
            None => Err(PkgError::UngueltigeAntwort(
                "proofStatus-Feld fehlt".into(),
            )),
        }
    }
}

/// Antwort des oeffentlichen PKG-Parameters (`GET {pkg_basis}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OeffentlicherSchluesselAntwort {
    pub public_key: String,
}

/// Anfrage-Body fuer `POST /api/sign`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignierAnfrage {
    pub hash: String,
    pub attributes: Vec<String>,
}
