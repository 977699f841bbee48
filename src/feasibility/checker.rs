use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::catalog::store::ArrayCatalogue;
use crate::feasibility::report::{FeasibilityReport, SnpCoverage};

/// Checks target SNP availability against a catalogue of registered arrays.
///
/// Borrows the catalogue for its lifetime; registration happens before
/// checking.
pub struct FeasibilityChecker<'a> {
    catalogue: &'a ArrayCatalogue,
}

impl<'a> FeasibilityChecker<'a> {
    pub fn new(catalogue: &'a ArrayCatalogue) -> Self {
        Self { catalogue }
    }

    /// Assess feasibility for a batch of target SNPs.
    ///
    /// Targets are processed in input order and duplicates are counted
    /// individually: each occurrence contributes its own coverage entry and
    /// its own increment to the per-array hit counts. Each target triggers a
    /// full catalogue scan, so cost is O(targets × arrays).
    pub fn check<S: AsRef<str>>(&self, target_snps: &[S]) -> FeasibilityReport {
        let array_names = self.catalogue.array_names();

        // Every registered array appears in the summary, hit or not
        let mut array_hit_count: BTreeMap<String, usize> =
            array_names.iter().map(|name| (name.clone(), 0)).collect();

        let mut available_count = 0;
        let mut unavailable_snps = Vec::new();
        let mut coverage_details = Vec::with_capacity(target_snps.len());

        for snp_id in target_snps {
            let snp_id = snp_id.as_ref();
            let present_on = self.catalogue.find_arrays_containing(snp_id);
            let missing_from: Vec<String> = array_names
                .iter()
                .filter(|name| !present_on.contains(name))
                .cloned()
                .collect();

            let coverage = SnpCoverage {
                snp_id: snp_id.to_string(),
                present_on,
                missing_from,
            };

            if coverage.is_available() {
                available_count += 1;
                for array in &coverage.present_on {
                    if let Some(count) = array_hit_count.get_mut(array) {
                        *count += 1;
                    }
                }
            } else {
                unavailable_snps.push(snp_id.to_string());
            }

            coverage_details.push(coverage);
        }

        debug!(
            targets = target_snps.len(),
            arrays = array_names.len(),
            available = available_count,
            "feasibility check complete"
        );

        FeasibilityReport {
            target_snps: target_snps.len(),
            available_count,
            unavailable_snps,
            coverage_details,
            array_summary: array_hit_count,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Intersection of the target SNPs with a specific array's manifest.
    ///
    /// Targets are deduplicated by set semantics. An unregistered array name
    /// yields an empty set, not an error.
    pub fn check_overlap<S: AsRef<str>>(
        &self,
        target_snps: &[S],
        array_name: &str,
    ) -> HashSet<String> {
        let Some(record) = self.catalogue.get_array(array_name) else {
            return HashSet::new();
        };
        let mut overlap = HashSet::new();
        for snp_id in target_snps {
            let snp_id = snp_id.as_ref();
            if record.contains(snp_id) {
                overlap.insert(snp_id.to_string());
            }
        }
        overlap
    }
}
