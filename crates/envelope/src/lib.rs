//! # siegelpost-envelope
//!
//! Umschlag-Fassade fuer Siegelpost.
//!
//! Komponiert den PKG-Client und die Versiegelungs-Schicht zu den zwei
//! oeffentlichen Operationen: Schluesselmaterial fuer eine Identitaet
//! abrufen und Payloads damit ver- bzw. entsiegeln. Jede Stufe gibt
//! Fehler unveraendert nach oben; es gibt keine Wiederholungen und
//! keinen geteilten Zustand.

pub mod error;
pub mod umschlag;

// Bequeme Re-Exports
pub use error::{UmschlagError, UmschlagResult};
pub use umschlag::Umschlag;

pub use siegelpost_core::{Attribut, Identitaet, EMAIL_ATTRIBUT};
pub use siegelpost_crypto::{CounterBlock, Nonce96, SecretBytes};
pub use siegelpost_pkg::PkgConfig;
