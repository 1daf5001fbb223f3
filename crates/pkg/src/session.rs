//! Disclosure-Session-Maschine und Schluessel-Abruf
//!
//! Treibt den Zwei-Phasen-Handshake mit dem PKG: Session anlegen, auf den
//! Attribut-Nachweis warten, Assertion gegen Schluesselmaterial tauschen.
//! Innerhalb eines Abrufs sind die drei Phasen strikt sequenziell;
//! zwischen Abrufen gibt es keinerlei Ordnung oder geteilten Zustand.

use std::time::Duration;

use reqwest::StatusCode;
use siegelpost_core::Identitaet;
use siegelpost_crypto::SecretBytes;

use crate::config::PkgConfig;
use crate::error::{PkgError, PkgResult};
use crate::types::{
    OeffentlicherSchluesselAntwort, SchluesselAnfrage, SchluesselAntwort, SessionStartAntwort,
    SessionZeiger,
};

/// Phase einer Disclosure-Session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Session beim PKG angelegt, Zeiger umgeschrieben
    Gestartet,
    /// Warten auf den Abschluss des Attribut-Nachweises
    WartetAufNachweis,
    /// Signierte Assertion liegt vor
    Abgeschlossen,
    /// Terminal fehlgeschlagen (abgelaufen, abgebrochen, ungueltig)
    Fehlgeschlagen,
}

/// Handle einer laufenden Disclosure-Session
///
/// Wird von [`KeyEscrowClient::session_starten`] ausgegeben und zwischen
/// den Phasen weitergereicht. Lebt fuer genau eine Schluessel-Operation
/// und wird danach verworfen.
#[derive(Debug)]
pub struct SessionHandle {
    zeiger: SessionZeiger,
    token: String,
    phase: SessionPhase,
}

impl SessionHandle {
    /// URL, die dem Empfaenger-Geraet gezeigt wird (Link/QR)
    ///
    /// Bereits gegen die Disclosure-Frontend-Basis umgeschrieben.
    pub fn session_url(&self) -> &str {
        &self.zeiger.u
    }

    /// Server-gewaehlter Session-Token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Aktuelle Phase der Session
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }
}

/// Client fuer Schluessel-Abruf ueber Disclosure-Sessions beim PKG
///
/// Zustandslos ueber Aufrufe hinweg: jede Operation ist unabhaengig und
/// darf nebenlaeufig zu anderen laufen. Wiederholungen sind Sache des
/// Aufrufers; dieser Client wiederholt nichts automatisch.
pub struct KeyEscrowClient {
    config: PkgConfig,
    client: reqwest::Client,
}

impl KeyEscrowClient {
    /// Erstellt einen neuen Client mit der gegebenen Konfiguration
    pub fn neu(config: PkgConfig) -> PkgResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.anfrage_timeout_sekunden))
            .build()
            .map_err(|e| PkgError::Intern(format!("HTTP-Client-Aufbau: {e}")))?;
        Ok(Self { config, client })
    }

    /// Legt eine Disclosure-Session fuer die Identitaet an
    ///
    /// Der zurueckgegebene Handle traegt den bereits umgeschriebenen
    /// Session-Zeiger fuer das Empfaenger-Geraet. Die Identitaet muss
    /// mindestens ein Attribut enthalten.
    pub async fn session_starten(&self, identitaet: &Identitaet) -> PkgResult<SessionHandle> {
        if !identitaet.hat_attribute() {
            return Err(PkgError::LeereAttribute);
        }

        let anfrage = SchluesselAnfrage {
            con: identitaet.attribute.clone(),
            validity: None,
        };

        let antwort = self
            .client
            .post(self.config.start_url())
            .json(&anfrage)
            .send()
            .await?;

        if !antwort.status().is_success() {
            return Err(PkgError::SessionStart(format!("HTTP {}", antwort.status())));
        }

        let start: SessionStartAntwort = antwort
            .json()
            .await
            .map_err(|e| PkgError::UngueltigeAntwort(format!("Start-Antwort: {e}")))?;

        let mut zeiger = start.session_ptr;
        zeiger.u = self.config.disclosure_url(&zeiger.u);

        tracing::debug!(token = %start.token, "Disclosure-Session gestartet");

        Ok(SessionHandle {
            zeiger,
            token: start.token,
            phase: SessionPhase::Gestartet,
        })
    }

    /// Wartet auf den Abschluss des Attribut-Nachweises
    ///
    /// Fragt den Ergebnis-Endpunkt im konfigurierten Intervall ab, bis die
    /// signierte Assertion vorliegt oder das maximale Session-Alter
    /// erreicht ist. 400/404 bedeuten "Session noch offen"; jede andere
    /// Fehlerantwort bricht hart ab.
    pub async fn ergebnis_abwarten(&self, handle: &mut SessionHandle) -> PkgResult<String> {
        handle.phase = SessionPhase::WartetAufNachweis;

        let intervall = Duration::from_millis(self.config.poll_intervall_ms);
        let frist = tokio::time::Instant::now()
            + Duration::from_secs(self.config.session_max_alter_sekunden);

        loop {
            let antwort = self
                .client
                .get(self.config.jwt_url(&handle.token))
                .send()
                .await?;

            match antwort.status() {
                status if status.is_success() => {
                    let assertion = antwort
                        .text()
                        .await
                        .map_err(|e| PkgError::UngueltigeAntwort(format!("Assertion: {e}")))?;
                    if !assertion.is_empty() {
                        handle.phase = SessionPhase::Abgeschlossen;
                        tracing::debug!(token = %handle.token, "Attribut-Nachweis abgeschlossen");
                        return Ok(assertion);
                    }
                    // Leerer Body: Session noch offen
                }
                StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                    // Session noch offen
                }
                status => {
                    handle.phase = SessionPhase::Fehlgeschlagen;
                    return Err(PkgError::UngueltigeAntwort(format!(
                        "Ergebnis-Endpunkt: HTTP {status}"
                    )));
                }
            }

            if tokio::time::Instant::now() + intervall >= frist {
                handle.phase = SessionPhase::Fehlgeschlagen;
                tracing::debug!(token = %handle.token, "Maximales Session-Alter erreicht");
                return Err(PkgError::SessionAbgelaufen);
            }
            tokio::time::sleep(intervall).await;
        }
    }

    /// Tauscht die signierte Assertion gegen Schluesselmaterial
    ///
    /// Material gibt es nur bei exakt `status == DONE` und
    /// `proofStatus == VALID`; alles andere schlaegt geschlossen fehl.
    pub async fn schluessel_abrufen(
        &self,
        assertion: &str,
        zeitstempel: u64,
    ) -> PkgResult<SecretBytes> {
        let antwort = self
            .client
            .get(self.config.schluessel_url(zeitstempel))
            .header("Authorization", format!("Bearer {assertion}"))
            .send()
            .await?;

        if !antwort.status().is_success() {
            return Err(PkgError::SchluesselAbruf(format!(
                "HTTP {}",
                antwort.status()
            )));
        }

        let antwort: SchluesselAntwort = antwort
            .json()
            .await
            .map_err(|e| PkgError::UngueltigeAntwort(format!("Schluessel-Antwort: {e}")))?;

        antwort.material()
    }

    /// Ruft den oeffentlichen Parameter des PKG ab
    ///
    /// Sender brauchen ihn zur Verkapselung gegen den Master-Schluessel.
    pub async fn oeffentlicher_schluessel(&self) -> PkgResult<String> {
        let antwort = self.client.get(self.config.parameter_url()).send().await?;

        if !antwort.status().is_success() {
            return Err(PkgError::UngueltigeAntwort(format!(
                "Parameter-Endpunkt: HTTP {}",
                antwort.status()
            )));
        }

        let parameter: OeffentlicherSchluesselAntwort = antwort
            .json()
            .await
            .map_err(|e| PkgError::UngueltigeAntwort(format!("Parameter-Antwort: {e}")))?;

        Ok(parameter.public_key)
    }
}
