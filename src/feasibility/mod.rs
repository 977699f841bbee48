//! Feasibility checking for target SNP panels.
//!
//! Given a catalogue of registered arrays and a list of target SNPs, the
//! checker partitions the arrays into present/absent per SNP and rolls the
//! results up into a [`FeasibilityReport`](report::FeasibilityReport): how
//! many targets are measurable at all, which are not, and how many targets
//! each array covers.
//!
//! ## Example
//!
//! ```rust
//! use snp_feasibility::{ArrayCatalogue, ArrayRecord, FeasibilityChecker};
//!
//! let catalogue = ArrayCatalogue::with_arrays(vec![
//!     ArrayRecord::new("GSA_v3").with_snps(["rs429358", "rs7412"]),
//! ]);
//!
//! let checker = FeasibilityChecker::new(&catalogue);
//! let report = checker.check(&["rs429358", "rs999999"]);
//!
//! assert_eq!(report.available_count, 1);
//! assert_eq!(report.unavailable_snps, vec!["rs999999"]);
//! assert!((report.feasibility_rate() - 0.5).abs() < 1e-9);
//! ```

pub mod checker;
pub mod report;
