//! # siegelpost-pkg
//!
//! PKG-Protokoll-Client fuer Siegelpost.
//!
//! Wandelt eine Identitaet (Attribut + Zeitstempel) ueber einen entfernten
//! Session-Handshake in nutzbares Schluesselmaterial um. Der Ablauf ist
//! eine explizite Zwei-Phasen-Maschine mit eigenem Handle:
//!
//! 1. `session_starten` - Disclosure-Session beim PKG anlegen; der
//!    zurueckgegebene Session-Zeiger wird auf das Disclosure-Frontend
//!    umgeschrieben und dem Empfaenger-Geraet gezeigt (Link/QR)
//! 2. `ergebnis_abwarten` - auf den Abschluss des Attribut-Nachweises
//!    warten (begrenzt durch das maximale Session-Alter)
//! 3. `schluessel_abrufen` - die signierte Assertion gegen
//!    Schluesselmaterial zum gegebenen Zeitstempel eintauschen
//!
//! Jeder Aufruf ist unabhaengig; es gibt keinen Cache, keinen geteilten
//! Zustand und keine internen Wiederholungen.
//!
//! ## Module
//! - `session` - [`KeyEscrowClient`] und das Session-Handle
//! - `sign` - [`SignatureClient`] fuer entfernte Signier-Sessions
//! - `config` - [`PkgConfig`] mit Endpunkt-Basen und Fristen
//! - `types` - Wire-Typen der PKG- und Auth-Endpunkte
//! - `error` - Fehlertypen

pub mod config;
pub mod error;
pub mod session;
pub mod sign;
pub mod types;

// Bequeme Re-Exports
pub use config::PkgConfig;
pub use error::{PkgError, PkgResult};
pub use session::{KeyEscrowClient, SessionHandle, SessionPhase};
pub use sign::SignatureClient;
pub use types::{
    OeffentlicherSchluesselAntwort, SchluesselAnfrage, SchluesselAntwort, SessionStartAntwort,
    SessionZeiger, SignierAnfrage, PROOF_VALID, STATUS_DONE,
};
