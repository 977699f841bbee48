use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Manifest record for a single genotyping array.
///
/// Records are value objects: built once, registered with an
/// [`ArrayCatalogue`](crate::catalog::store::ArrayCatalogue), and never
/// mutated afterwards. The catalogue owns each record under its name key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayRecord {
    /// Array name, unique within a catalogue (e.g. "GSA_v3")
    pub array_name: String,

    /// Advertised probe count. Informational only: vendors quote marketing
    /// numbers, so this may differ from `snp_ids.len()`.
    #[serde(default)]
    pub snp_count: usize,

    /// SNP identifiers present on the array manifest
    #[serde(default)]
    pub snp_ids: HashSet<String>,
}

impl ArrayRecord {
    pub fn new(array_name: impl Into<String>) -> Self {
        Self {
            array_name: array_name.into(),
            snp_count: 0,
            snp_ids: HashSet::new(),
        }
    }

    /// Set the advertised probe count independently of the SNP set.
    #[must_use]
    pub fn with_snp_count(mut self, snp_count: usize) -> Self {
        self.snp_count = snp_count;
        self
    }

    /// Set the SNP membership set. Also sets `snp_count` to the set size;
    /// apply `with_snp_count` afterwards to override with a vendor figure.
    #[must_use]
    pub fn with_snps<I, S>(mut self, snps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.snp_ids = snps.into_iter().map(Into::into).collect();
        self.snp_count = self.snp_ids.len();
        self
    }

    /// Check whether a SNP is present on this array.
    pub fn contains(&self, snp_id: &str) -> bool {
        self.snp_ids.contains(snp_id)
    }
}
