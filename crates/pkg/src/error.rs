//! Fehlertypen fuer den PKG-Client
//!
//! Jede Stufe schlaegt geschlossen fehl: kein Aufruf gibt bei einem Fehler
//! Platzhalter- oder Teil-Schluesselmaterial zurueck.

use thiserror::Error;

/// Alle moeglichen Fehler im PKG-Client
#[derive(Debug, Error)]
pub enum PkgError {
    // --- Session-Start ---
    #[error("Session-Start fehlgeschlagen: {0}")]
    SessionStart(String),

    #[error("Identitaet enthaelt keine Attribute")]
    LeereAttribute,

    // --- Session-Verlauf ---
    #[error("Session abgelaufen oder abgebrochen")]
    SessionAbgelaufen,

    /// Terminal: der Empfaenger konnte das Attribut nicht nachweisen.
    /// Darf nie automatisch wiederholt werden.
    #[error("Attribut-Nachweis ungueltig (Status '{status}', Nachweis '{nachweis}')")]
    ProofUngueltig { status: String, nachweis: String },

    // --- Schluessel-Abruf ---
    #[error("Schluessel-Abruf fehlgeschlagen: {0}")]
    SchluesselAbruf(String),

    // --- Signierung ---
    #[error("Signierung fehlgeschlagen: {0}")]
    Signierung(String),

    // --- Transport & Antworten ---
    #[error("Ungueltige Antwort vom Dienst: {0}")]
    UngueltigeAntwort(String),

    #[error("Transportfehler: {0}")]
    Transport(#[from] reqwest::Error),

    // --- Intern ---
    #[error("Interner Fehler: {0}")]
    Intern(String),
}

impl PkgError {
    /// Gibt `true` zurueck wenn der Fehler terminal ist und nicht
    /// automatisch wiederholt werden darf
    pub fn ist_terminal(&self) -> bool {
        matches!(
            self,
            Self::ProofUngueltig { .. } | Self::SessionAbgelaufen | Self::LeereAttribute
        )
    }
}

/// Result-Alias fuer den PKG-Client
pub type PkgResult<T> = Result<T, PkgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proof_ungueltig_ist_terminal() {
        let e = PkgError::ProofUngueltig {
            status: "DONE".into(),
            nachweis: "INVALID".into(),
        };
        assert!(e.ist_terminal());
    }

    #[test]
    fn transportfehler_ist_nicht_terminal() {
        let e = PkgError::SchluesselAbruf("HTTP 502".into());
        assert!(!e.ist_terminal());
    }

    #[test]
    fn fehler_anzeige() {
        let e = PkgError::ProofUngueltig {
            status: "DONE".into(),
            nachweis: "INVALID".into(),
        };
        assert!(e.to_string().contains("DONE"));
        assert!(e.to_string().contains("INVALID"));
    }
}
