//! Deduplicated findings across parsed certificates

use crate::models::Certificate;
use std::collections::BTreeSet;

/// Findings of one run.
///
/// Each set is ordered lexicographically, so reports are stable no matter
/// what order certificates arrived in. Values are compared exactly, with no
/// case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedReport {
    /// Every parsed certificate, in feed order
    pub certificates: Vec<Certificate>,
    pub organizations: BTreeSet<String>,
    pub addresses: BTreeSet<String>,
    /// Subject common names
    pub domains: BTreeSet<String>,
    /// SANs that are not also a common name
    pub alternative_names: BTreeSet<String>,
}

impl AggregatedReport {
    pub fn from_certificates(certificates: Vec<Certificate>) -> Self {
        let mut organizations = BTreeSet::new();
        let mut addresses = BTreeSet::new();
        let mut domains = BTreeSet::new();
        let mut alternative_names = BTreeSet::new();

        for cert in &certificates {
            if !cert.organization.is_empty() {
                organizations.insert(cert.organization.clone());
            }
            if !cert.address.is_empty() {
                addresses.insert(cert.address.clone());
            }
            if !cert.common_name.is_empty() {
                domains.insert(cert.common_name.clone());
            }
            alternative_names.extend(cert.subject_alt_names.iter().cloned());
        }

        alternative_names.retain(|name| !domains.contains(name));

        Self {
            certificates,
            organizations,
            addresses,
            domains,
            alternative_names,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }
}
