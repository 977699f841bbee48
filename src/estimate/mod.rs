//! Recall study yield estimation.
//!
//! Converts a SNP's population allele frequency into expected carrier and
//! homozygote counts for a cohort, under Hardy-Weinberg equilibrium. Used to
//! judge whether a recall-by-genotype study would find enough participants.
//!
//! ## Example
//!
//! ```rust
//! use snp_feasibility::RecallEstimator;
//!
//! let estimator = RecallEstimator::new(10_000);
//! let estimate = estimator.estimate("rs429358", 0.1, None, Vec::new());
//!
//! assert_eq!(estimate.expected_carriers, 1900);
//! assert_eq!(estimate.expected_homozygotes, 100);
//! ```

pub mod estimator;
pub mod hwe;
