use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::estimate::hwe::{hwe_carriers, hwe_homozygotes};

/// Default cohort size when an estimate does not supply one
pub const DEFAULT_COHORT_SIZE: u64 = 50_000;

/// Estimated recall study yield for a single SNP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecallEstimate {
    pub snp_id: String,

    /// Alternate allele frequency used for the estimate
    pub allele_frequency: f64,

    /// Cohort size the counts are scaled to
    pub cohort_size: u64,

    /// Expected heterozygous + homozygous-alt individuals, truncated
    pub expected_carriers: i64,

    /// Expected homozygous-alt individuals, truncated
    pub expected_homozygotes: i64,

    /// Arrays the SNP is measurable on. Caller-supplied, typically from a
    /// feasibility report; not computed here.
    pub arrays_available: Vec<String>,
}

/// Estimates recall study yield from allele frequencies.
///
/// Applies Hardy-Weinberg equilibrium to predict carrier and homozygote
/// counts in a cohort. Stateless apart from the default cohort size fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct RecallEstimator {
    default_cohort_size: u64,
}

impl Default for RecallEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_COHORT_SIZE)
    }
}

impl RecallEstimator {
    pub fn new(default_cohort_size: u64) -> Self {
        Self {
            default_cohort_size,
        }
    }

    /// Estimate yield for a single SNP.
    ///
    /// `cohort_size: None` means use the estimator's default; `Some(0)` is
    /// honored as an explicit zero-person cohort. `allele_frequency` is not
    /// range-checked (see [`hwe_carriers`]).
    pub fn estimate(
        &self,
        snp_id: impl Into<String>,
        allele_frequency: f64,
        cohort_size: Option<u64>,
        arrays_available: Vec<String>,
    ) -> RecallEstimate {
        let n = cohort_size.unwrap_or(self.default_cohort_size);
        RecallEstimate {
            snp_id: snp_id.into(),
            allele_frequency,
            cohort_size: n,
            expected_carriers: hwe_carriers(allele_frequency, n),
            expected_homozygotes: hwe_homozygotes(allele_frequency, n),
            arrays_available,
        }
    }

    /// Estimate yield for multiple SNPs with one shared cohort size.
    ///
    /// Sequential; results come back in the map's (sorted) iteration order.
    pub fn estimate_batch(
        &self,
        snp_frequencies: &BTreeMap<String, f64>,
        cohort_size: Option<u64>,
    ) -> Vec<RecallEstimate> {
        snp_frequencies
            .iter()
            .map(|(snp_id, &freq)| self.estimate(snp_id.clone(), freq, cohort_size, Vec::new()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_single() {
        let est = RecallEstimator::new(50_000);
        let result = est.estimate("rs429358", 0.15, None, Vec::new());
        assert_eq!(result.snp_id, "rs429358");
        assert_eq!(result.cohort_size, 50_000);
        assert!(result.expected_carriers > 0);
        assert!(result.expected_homozygotes > 0);
    }

    #[test]
    fn test_estimate_custom_cohort() {
        let est = RecallEstimator::default();
        let result = est.estimate("rs123", 0.05, Some(1000), Vec::new());
        assert_eq!(result.cohort_size, 1000);
    }

    #[test]
    fn test_zero_cohort_is_explicit_not_default() {
        let est = RecallEstimator::default();
        let result = est.estimate("rs123", 0.5, Some(0), Vec::new());
        assert_eq!(result.cohort_size, 0);
        assert_eq!(result.expected_carriers, 0);
        assert_eq!(result.expected_homozygotes, 0);
    }

    #[test]
    fn test_estimate_carries_array_list() {
        let est = RecallEstimator::default();
        let result = est.estimate(
            "rs429358",
            0.15,
            None,
            vec!["GSA_v3".to_string(), "Axiom_UKB".to_string()],
        );
        assert_eq!(result.arrays_available, vec!["GSA_v3", "Axiom_UKB"]);
    }

    #[test]
    fn test_estimate_batch_matches_single_calls() {
        let est = RecallEstimator::default();
        let frequencies = BTreeMap::from([
            ("rs1".to_string(), 0.1),
            ("rs2".to_string(), 0.2),
        ]);
        let results = est.estimate_batch(&frequencies, Some(10_000));
        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(result.cohort_size, 10_000);
            let single = est.estimate(
                result.snp_id.clone(),
                result.allele_frequency,
                Some(10_000),
                Vec::new(),
            );
            assert_eq!(*result, single);
        }
        // BTreeMap iteration is sorted by SNP id
        assert_eq!(results[0].snp_id, "rs1");
        assert_eq!(results[1].snp_id, "rs2");
    }

    #[test]
    fn test_rare_variant() {
        let est = RecallEstimator::new(100_000);
        let result = est.estimate("rs_rare", 0.001, None, Vec::new());
        assert!(result.expected_homozygotes < result.expected_carriers);
    }
}
