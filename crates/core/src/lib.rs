//! # siegelpost-core
//!
//! Gemeinsame Typen fuer Siegelpost.
//!
//! Dieses Crate stellt die fundamentalen Bausteine bereit, die von den
//! anderen Siegelpost-Crates gemeinsam genutzt werden: die Identitaet
//! (Attribut + Zeitstempel), an die Schluesselmaterial gebunden wird, und
//! die bekannten Attribut-Bezeichner des Disclosure-Systems.

pub mod attribute;
pub mod types;

// Re-Exporte fuer bequemen Zugriff
pub use attribute::EMAIL_ATTRIBUT;
pub use types::{Attribut, Identitaet};
