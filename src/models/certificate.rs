//! Parsed certificate record

use serde::{Deserialize, Serialize};

/// The reporting-relevant fields of one decoded X.509 certificate.
///
/// Built once by [`crate::certificate::parse_certificate`] and never
/// modified afterwards. Serialized field names are the export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Feed entry the certificate came from
    #[serde(rename = "url")]
    pub source_url: String,
    /// Subject organisations joined with ", "
    pub organization: String,
    #[serde(rename = "commonName")]
    pub common_name: String,
    #[serde(rename = "san")]
    pub subject_alt_names: Vec<String>,
    /// Postal code, street, province and country joined with spaces
    pub address: String,
    /// Issuer common name
    #[serde(rename = "issuer")]
    pub issuer_common_name: String,
    /// Decimal serial number
    #[serde(rename = "serialNumber")]
    pub serial_number: String,
    #[serde(rename = "notBefore")]
    pub not_before: String,
    #[serde(rename = "notAfter")]
    pub not_after: String,
    #[serde(rename = "keyUsage")]
    pub key_usage: Vec<String>,
    #[serde(rename = "signatureAlgorithm")]
    pub signature_algorithm: String,
    pub version: u32,
}
