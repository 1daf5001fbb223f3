//! PKG-Client-Konfiguration
//!
//! Kann aus einer TOML-Datei geladen werden. Alle Felder haben
//! Standardwerte, sodass der Client ohne Konfigurationsdatei gegen die
//! Produktions-Endpunkte laeuft.

use serde::{Deserialize, Serialize};

/// Konfiguration des PKG-Clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PkgConfig {
    /// Basis-URL des PKG-Dienstes (Session-Start, JWT, Schluessel)
    pub pkg_basis_url: String,
    /// Basis-URL des Disclosure-Frontends; Session-Zeiger werden gegen
    /// diese Basis umgeschrieben, Signier-Endpunkte liegen darunter
    pub auth_basis_url: String,
    /// Maximales Session-Alter in Sekunden; danach schlaegt das Warten
    /// auf den Attribut-Nachweis fehl statt ewig zu haengen
    pub session_max_alter_sekunden: u64,
    /// Abstand zwischen zwei Ergebnis-Abfragen in Millisekunden
    pub poll_intervall_ms: u64,
    /// Timeout einzelner HTTP-Anfragen in Sekunden
    pub anfrage_timeout_sekunden: u64,
}

impl Default for PkgConfig {
    fn default() -> Self {
        Self {
            pkg_basis_url: "https://stable.irmaseal-pkg.ihub.ru.nl".into(),
            auth_basis_url: "https://ihub.ru.nl/irma/1".into(),
            session_max_alter_sekunden: 300,
            poll_intervall_ms: 500,
            anfrage_timeout_sekunden: 10,
        }
    }
}

impl PkgConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &str) -> anyhow::Result<Self> {
        match std::fs::read_to_string(pfad) {
            Ok(inhalt) => {
                let config: Self = toml::from_str(&inhalt)
                    .map_err(|e| anyhow::anyhow!("Konfigurationsfehler in '{pfad}': {e}"))?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    pfad = pfad,
                    "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
                );
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!(
                "Konfigurationsdatei '{pfad}' nicht lesbar: {e}"
            )),
        }
    }

    /// URL fuer den Session-Start
    pub fn start_url(&self) -> String {
        format!("{}/v2/request/start", self.pkg_basis())
    }

    /// URL fuer den Abruf der signierten Assertion einer Session
    pub fn jwt_url(&self, token: &str) -> String {
        format!("{}/v2/request/jwt/{token}", self.pkg_basis())
    }

    /// URL fuer den Schluessel-Abruf zum gegebenen Zeitstempel
    pub fn schluessel_url(&self, zeitstempel: u64) -> String {
        format!("{}/v2/request/key/{zeitstempel}", self.pkg_basis())
    }

    /// URL des oeffentlichen PKG-Parameters
    pub fn parameter_url(&self) -> String {
        self.pkg_basis().to_string()
    }

    /// Schreibt den opaken Session-Zeiger auf das Disclosure-Frontend um
    pub fn disclosure_url(&self, zeiger: &str) -> String {
        format!("{}/{zeiger}", self.auth_basis())
    }

    /// URL fuer den Start einer Signier-Session
    pub fn sign_url(&self) -> String {
        format!("{}/api/sign", self.auth_basis())
    }

    /// URL fuer den Abruf des Signier-Ergebnisses
    pub fn sign_ergebnis_url(&self, token: &str) -> String {
        format!("{}/api/sign_result?session={token}", self.auth_basis())
    }

    /// URL fuer die Signatur-Pruefung
    pub fn verify_url(&self) -> String {
        format!("{}/api/verify", self.auth_basis())
    }

    fn pkg_basis(&self) -> &str {
        self.pkg_basis_url.trim_end_matches('/')
    }

    fn auth_basis(&self) -> &str {
        self.auth_basis_url.trim_end_matches('/')
    }
}
