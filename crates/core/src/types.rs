//! Identitaets-Typen fuer Siegelpost
//!
//! Eine `Identitaet` bindet Schluesselmaterial an eine Attribut-Behauptung
//! (z.B. eine E-Mail-Adresse) plus einen Zeitstempel. Der PKG gibt fuer
//! identische (Attribut, Zeitstempel)-Paare identisches Material heraus;
//! dieser Client setzt das voraus, erzwingt es aber nicht.

use serde::{Deserialize, Serialize};

/// Eine einzelne Attribut-Behauptung
///
/// `typ` ist der Bezeichner im Disclosure-System (siehe [`crate::attribute`]),
/// `wert` der behauptete Wert (z.B. die E-Mail-Adresse). Ein fehlender Wert
/// bedeutet: beliebiger Wert dieses Attributs genuegt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribut {
    #[serde(rename = "type")]
    pub typ: String,
    #[serde(rename = "value", skip_serializing_if = "Option::is_none")]
    pub wert: Option<String>,
}

impl Attribut {
    /// Erstellt ein Attribut mit konkretem Wert
    pub fn neu(typ: impl Into<String>, wert: impl Into<String>) -> Self {
        Self {
            typ: typ.into(),
            wert: Some(wert.into()),
        }
    }

    /// Erstellt ein Attribut ohne Wertbindung (beliebiger Wert genuegt)
    pub fn ohne_wert(typ: impl Into<String>) -> Self {
        Self {
            typ: typ.into(),
            wert: None,
        }
    }
}

/// Identitaet, an die abgerufenes Schluesselmaterial gebunden ist
///
/// Unveraenderlich nach Konstruktion; wird pro Abruf erzeugt, einmal
/// verwendet und verworfen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identitaet {
    /// Attribute, die der Empfaenger im Disclosure-Flow nachweisen muss
    pub attribute: Vec<Attribut>,
    /// Gueltigkeitszeitpunkt des abgeleiteten Schluessels (Unix-Sekunden)
    pub zeitstempel: u64,
}

impl Identitaet {
    /// Erstellt eine Identitaet aus einem einzelnen Attribut
    pub fn neu(attribut: Attribut, zeitstempel: u64) -> Self {
        Self {
            attribute: vec![attribut],
            zeitstempel,
        }
    }

    /// Erstellt eine E-Mail-Identitaet mit dem Standard-Bezeichner
    pub fn email(adresse: impl Into<String>, zeitstempel: u64) -> Self {
        Self::neu(Attribut::neu(crate::attribute::EMAIL_ATTRIBUT, adresse), zeitstempel)
    }

    /// Gibt `true` zurueck wenn mindestens ein Attribut vorhanden ist
    pub fn hat_attribute(&self) -> bool {
        !self.attribute.is_empty()
    }
}
