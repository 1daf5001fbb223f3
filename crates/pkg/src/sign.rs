//! Entfernte Signier-Sessions
//!
//! Unabhaengige Faehigkeit neben dem Schluessel-Abruf: fuer einen
//! Nachrichten-Hash wird eine Signier-Session gestartet; nach Abschluss
//! kommt ein opakes Signatur-Token zurueck. Dieser Client validiert die
//! Signatur nicht lokal.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::StatusCode;
use siegelpost_core::EMAIL_ATTRIBUT;

use crate::config::PkgConfig;
use crate::error::{PkgError, PkgResult};
use crate::types::{SessionStartAntwort, SignierAnfrage};

/// Client fuer entfernte Signier-Sessions
pub struct SignatureClient {
    config: PkgConfig,
    client: reqwest::Client,
}

impl SignatureClient {
    /// Erstellt einen neuen Client mit der gegebenen Konfiguration
    pub fn neu(config: PkgConfig) -> PkgResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.anfrage_timeout_sekunden))
            .build()
            .map_err(|e| PkgError::Intern(format!("HTTP-Client-Aufbau: {e}")))?;
        Ok(Self { config, client })
    }

    /// Startet eine Signier-Session fuer den Hash und wartet auf das Ergebnis
    ///
    /// Die Session ist an das E-Mail-Attribut gebunden und durch das
    /// maximale Session-Alter begrenzt. Das Ergebnis ist der rohe
    /// Antwort-Body als opakes Signatur-Token.
    pub async fn signieren(&self, hash: &str) -> PkgResult<String> {
        let anfrage = SignierAnfrage {
            hash: hash.to_string(),
            attributes: vec![EMAIL_ATTRIBUT.to_string()],
        };

        let antwort = self
            .client
            .post(self.config.sign_url())
            .json(&anfrage)
            .send()
            .await?;

        if !antwort.status().is_success() {
            return Err(PkgError::Signierung(format!("HTTP {}", antwort.status())));
        }

        let start: SessionStartAntwort = antwort
            .json()
            .await
            .map_err(|e| PkgError::UngueltigeAntwort(format!("Signier-Start: {e}")))?;

        tracing::debug!(token = %start.token, "Signier-Session gestartet");
        self.ergebnis_abwarten(&start.token).await
    }

    /// Prueft eine Signatur beim Auth-Dienst und gibt die offengelegten
    /// Attribute zurueck
    pub async fn signatur_pruefen(&self, signatur: &str) -> PkgResult<HashMap<String, String>> {
        let antwort = self
            .client
            .post(self.config.verify_url())
            .header("Content-Type", "application/json")
            .body(signatur.to_string())
            .send()
            .await?;

        if !antwort.status().is_success() {
            return Err(PkgError::Signierung(format!(
                "Signatur-Pruefung: HTTP {}",
                antwort.status()
            )));
        }

        antwort
            .json()
            .await
            .map_err(|e| PkgError::UngueltigeAntwort(format!("Pruef-Antwort: {e}")))
    }

    /// Fragt das Signier-Ergebnis ab, bis es vorliegt oder die Frist ablaeuft
    async fn ergebnis_abwarten(&self, token: &str) -> PkgResult<String> {
        let intervall = Duration::from_millis(self.config.poll_intervall_ms);
        let frist = tokio::time::Instant::now()
            + Duration::from_secs(self.config.session_max_alter_sekunden);

        loop {
            let antwort = self
                .client
                .get(self.config.sign_ergebnis_url(token))
                .send()
                .await?;

            match antwort.status() {
                status if status.is_success() => {
                    let signatur = antwort
                        .text()
                        .await
                        .map_err(|e| PkgError::UngueltigeAntwort(format!("Signatur: {e}")))?;
                    if !signatur.is_empty() {
                        tracing::debug!(token = %token, "Signier-Session abgeschlossen");
                        return Ok(signatur);
                    }
                    // Leerer Body: Session noch offen
                }
                StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                    // Session noch offen
                }
                status => {
                    return Err(PkgError::Signierung(format!(
                        "Ergebnis-Endpunkt: HTTP {status}"
                    )));
                }
            }

            if tokio::time::Instant::now() + intervall >= frist {
                tracing::debug!(token = %token, "Maximales Session-Alter erreicht");
                return Err(PkgError::SessionAbgelaufen);
            }
            tokio::time::sleep(intervall).await;
        }
    }
}
