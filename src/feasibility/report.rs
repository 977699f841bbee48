use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coverage summary for a single target SNP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnpCoverage {
    pub snp_id: String,

    /// Arrays whose manifest contains this SNP, sorted
    pub present_on: Vec<String>,

    /// Registered arrays missing this SNP, sorted
    pub missing_from: Vec<String>,
}

impl SnpCoverage {
    /// A SNP is available if at least one registered array carries it
    pub fn is_available(&self) -> bool {
        !self.present_on.is_empty()
    }

    /// Fraction of registered arrays carrying this SNP.
    ///
    /// 0.0 when no arrays are registered at all, rather than dividing by
    /// zero.
    pub fn coverage_fraction(&self) -> f64 {
        let total = self.present_on.len() + self.missing_from.len();
        if total == 0 {
            return 0.0;
        }
        count_to_f64(self.present_on.len()) / count_to_f64(total)
    }
}

/// Feasibility assessment for a batch of target SNPs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeasibilityReport {
    /// Number of target SNPs assessed (duplicates counted individually)
    pub target_snps: usize,

    /// How many targets are present on at least one array
    pub available_count: usize,

    /// Targets absent from every array, in input order
    pub unavailable_snps: Vec<String>,

    /// Per-SNP coverage, in input order
    pub coverage_details: Vec<SnpCoverage>,

    /// Per-array hit counts over the target batch. Every registered array
    /// appears, including those with zero hits.
    pub array_summary: BTreeMap<String, usize>,

    /// RFC 3339 timestamp of when the report was produced
    pub generated_at: String,
}

impl FeasibilityReport {
    /// Fraction of targets available on at least one array.
    ///
    /// 0.0 for an empty target batch.
    pub fn feasibility_rate(&self) -> f64 {
        if self.target_snps == 0 {
            return 0.0;
        }
        count_to_f64(self.available_count) / count_to_f64(self.target_snps)
    }

    /// Export the report as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Safely convert usize to f64 for rate calculations.
///
/// Target batches and array counts are far inside the f64 mantissa range, so
/// the precision loss the lint guards against cannot occur here.
#[inline]
pub(crate) fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}
