//! Umschlag-Fassade
//!
//! Reine Komposition: der Schluessel-Abruf laeuft durch die drei Phasen
//! des PKG-Clients, die Versiegelung delegiert an die Krypto-Schicht.

use siegelpost_core::Identitaet;
use siegelpost_crypto::{
    decrypt_ctr_legacy, decrypt_gcm, encrypt_gcm, CounterBlock, Nonce96, SecretBytes,
};
use siegelpost_pkg::{KeyEscrowClient, PkgConfig};

use crate::error::UmschlagResult;

/// Fassade ueber PKG-Client und Versiegelungs-Schicht
pub struct Umschlag {
    schluessel_client: KeyEscrowClient,
}

impl Umschlag {
    /// Erstellt eine neue Fassade mit der gegebenen Konfiguration
    pub fn neu(config: PkgConfig) -> UmschlagResult<Self> {
        Ok(Self {
            schluessel_client: KeyEscrowClient::neu(config)?,
        })
    }

    /// Ruft Schluesselmaterial fuer die Identitaet ab
    ///
    /// Session starten, Attribut-Nachweis abwarten, Assertion gegen
    /// Material zum Zeitstempel der Identitaet tauschen. Schlaegt eine
    /// Stufe fehl, bricht der Abruf mit dem urspruenglichen Fehler ab;
    /// es wird nichts wiederholt und nie Teil-Material zurueckgegeben.
    pub async fn schluessel_abrufen(&self, identitaet: &Identitaet) -> UmschlagResult<SecretBytes> {
        let mut handle = self.schluessel_client.session_starten(identitaet).await?;
        let assertion = self.schluessel_client.ergebnis_abwarten(&mut handle).await?;
        let material = self
            .schluessel_client
            .schluessel_abrufen(&assertion, identitaet.zeitstempel)
            .await?;

        tracing::debug!(zeitstempel = identitaet.zeitstempel, "Schluesselmaterial abgerufen");
        Ok(material)
    }

    /// Versiegelt einen Payload (GCM-Modus)
    pub fn versiegeln(
        &self,
        klartext: &[u8],
        material: &SecretBytes,
        nonce: &Nonce96,
    ) -> UmschlagResult<Vec<u8>> {
        Ok(encrypt_gcm(klartext, material.as_bytes(), nonce)?)
    }

    /// Entsiegelt einen Payload (GCM-Modus)
    pub fn entsiegeln(
        &self,
        geheimtext: &[u8],
        material: &SecretBytes,
        nonce: &Nonce96,
    ) -> UmschlagResult<Vec<u8>> {
        Ok(decrypt_gcm(geheimtext, material.as_bytes(), nonce)?)
    }

    /// Entsiegelt einen frueher ausgestellten Legacy-Payload (CTR-Modus)
    ///
    /// Keine interne Integritaetspruefung; siehe den Vertrag der
    /// Krypto-Schicht.
    pub fn entsiegeln_legacy(
        &self,
        geheimtext: &[u8],
        material: &SecretBytes,
        zaehler: &CounterBlock,
    ) -> UmschlagResult<Vec<u8>> {
        Ok(decrypt_ctr_legacy(geheimtext, material.as_bytes(), zaehler)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siegelpost_pkg::PkgConfig;

    fn umschlag() -> Umschlag {
        Umschlag::neu(PkgConfig::default()).expect("Fassade-Aufbau fehlgeschlagen")
    }

    #[test]
    fn versiegeln_und_entsiegeln_roundtrip() {
        let u = umschlag();
        let material = SecretBytes::new(b"deadbeef".to_vec());
        let nonce = Nonce96::zufaellig();

        let ct = u.versiegeln(b"Vertrauliche Post", &material, &nonce).unwrap();
        let klartext = u.entsiegeln(&ct, &material, &nonce).unwrap();
        assert_eq!(klartext, b"Vertrauliche Post");
    }

    #[test]
    fn entsiegeln_mit_falschem_material_schlaegt_fehl() {
        let u = umschlag();
        let nonce = Nonce96::zufaellig();
        let ct = u
            .versiegeln(b"geheim", &SecretBytes::new(b"a".to_vec()), &nonce)
            .unwrap();

        let result = u.entsiegeln(&ct, &SecretBytes::new(b"b".to_vec()), &nonce);
        assert!(result.is_err());
    }

    #[test]
    fn legacy_entsiegeln_ist_deterministisch() {
        let u = umschlag();
        let material = SecretBytes::new(vec![3u8; 32]);
        let zaehler = CounterBlock::aus_bytes(&[0u8; 16]).unwrap();

        let a = u.entsiegeln_legacy(&[1, 2, 3, 4], &material, &zaehler).unwrap();
        let b = u.entsiegeln_legacy(&[1, 2, 3, 4], &material, &zaehler).unwrap();
        assert_eq!(a, b);
    }
}
