//! Fehlertypen der Umschlag-Fassade

use thiserror::Error;

/// Fehler der Umschlag-Fassade
///
/// Buendelt die Fehler der beiden Schichten; die urspruengliche Ursache
/// bleibt unveraendert erhalten.
#[derive(Debug, Error)]
pub enum UmschlagError {
    #[error(transparent)]
    Pkg(#[from] siegelpost_pkg::PkgError),

    #[error(transparent)]
    Krypto(#[from] siegelpost_crypto::CryptoError),
}

/// Result-Alias fuer die Umschlag-Fassade
pub type UmschlagResult<T> = Result<T, UmschlagError>;
