//! Bekannte Attribut-Bezeichner des Disclosure-Systems

/// Bezeichner des E-Mail-Attributs im pbdf-Schema
///
/// Wird fuer Schluessel-Anfragen und Signier-Sessions verwendet, die an
/// eine E-Mail-Adresse gebunden sind.
pub const EMAIL_ATTRIBUT: &str = "pbdf.sidn-pbdf.email.email";
