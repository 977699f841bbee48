//! # snp-feasibility
//!
//! A library for assessing whether target SNPs can be measured on genotyping
//! arrays, and for sizing recall-by-genotype studies.
//!
//! Before committing to a recall study, two questions need answering: are the
//! target markers actually on the arrays the cohort was genotyped with, and
//! will enough carriers turn up in a cohort of the planned size?
//! `snp-feasibility` answers both from array manifests and population allele
//! frequencies.
//!
//! ## Components
//!
//! - **[`ArrayCatalogue`]**: registry of array manifests with SNP membership
//!   queries
//! - **[`FeasibilityChecker`]**: per-SNP presence/absence across all
//!   registered arrays, rolled up into a [`FeasibilityReport`]
//! - **[`RecallEstimator`]**: expected carrier and homozygote counts under
//!   Hardy-Weinberg equilibrium
//!
//! ## Example
//!
//! ```rust
//! use snp_feasibility::{
//!     ArrayCatalogue, ArrayRecord, FeasibilityChecker, RecallEstimator,
//! };
//!
//! // Register arrays (or load manifests from disk with `load_manifest`)
//! let catalogue = ArrayCatalogue::with_arrays(vec![
//!     ArrayRecord::new("GSA_v3").with_snps(["rs429358", "rs7412"]),
//!     ArrayRecord::new("Axiom_UKB").with_snps(["rs429358"]),
//! ]);
//!
//! // Which targets are measurable at all?
//! let checker = FeasibilityChecker::new(&catalogue);
//! let report = checker.check(&["rs429358", "rs7412", "rs999999"]);
//! assert_eq!(report.available_count, 2);
//!
//! // How many carriers would a 10k cohort yield?
//! let estimator = RecallEstimator::new(10_000);
//! let estimate = estimator.estimate(
//!     "rs429358",
//!     0.1,
//!     None,
//!     catalogue.find_arrays_containing("rs429358"),
//! );
//! assert_eq!(estimate.expected_carriers, 1900);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: array manifest storage and membership lookups
//! - [`feasibility`]: target panel checking and report types
//! - [`estimate`]: Hardy-Weinberg yield estimation
//! - [`parsing`]: delimited manifest ingestion

pub mod catalog;
pub mod estimate;
pub mod feasibility;
pub mod parsing;

// Re-export commonly used types for convenience
pub use catalog::record::ArrayRecord;
pub use catalog::store::ArrayCatalogue;
pub use estimate::estimator::{RecallEstimate, RecallEstimator, DEFAULT_COHORT_SIZE};
pub use estimate::hwe::{hwe_carriers, hwe_homozygotes};
pub use feasibility::checker::FeasibilityChecker;
pub use feasibility::report::{FeasibilityReport, SnpCoverage};
pub use parsing::manifest::{ManifestError, ManifestOptions, MissingColumnPolicy};
