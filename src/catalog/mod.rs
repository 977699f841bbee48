//! Genotyping array catalogue storage and lookups.
//!
//! The catalogue holds one manifest record per registered array and answers
//! SNP membership queries across all of them. Records come either from
//! explicit construction or from loading a delimited manifest file.
//!
//! ## Example
//!
//! ```rust
//! use snp_feasibility::{ArrayCatalogue, ArrayRecord};
//!
//! let mut catalogue = ArrayCatalogue::new();
//! catalogue.register(
//!     ArrayRecord::new("GSA_v3")
//!         .with_snps(["rs429358", "rs7412"])
//!         .with_snp_count(650_000),
//! );
//!
//! assert_eq!(catalogue.find_arrays_containing("rs7412"), vec!["GSA_v3"]);
//! assert_eq!(catalogue.total_unique_snps(), 2);
//! ```
//!
//! ## Loading manifests
//!
//! ```rust,no_run
//! use snp_feasibility::ArrayCatalogue;
//! use std::path::Path;
//!
//! let mut catalogue = ArrayCatalogue::new();
//! let record = catalogue
//!     .load_manifest("GSA_v3", Path::new("gsa_v3_manifest.csv"))
//!     .unwrap();
//! println!("{} SNPs loaded", record.snp_count);
//! ```

pub mod record;
pub mod store;
