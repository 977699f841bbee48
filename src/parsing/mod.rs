//! Manifest ingestion for genotyping arrays.
//!
//! Array vendors publish manifests as delimited text with a header row; one
//! column carries SNP identifiers and the rest (chromosome, position, strand,
//! probe sequences) are irrelevant here and ignored. Only the identifier
//! column is read; there is no schema validation beyond its presence.
//!
//! ## Example
//!
//! ```rust,no_run
//! use snp_feasibility::parsing::manifest::{read_manifest, ManifestOptions};
//! use std::path::Path;
//!
//! // Default: CSV with a "snp_id" column
//! let snps = read_manifest(Path::new("manifest.csv"), &ManifestOptions::default()).unwrap();
//!
//! // Illumina-style TSV keyed on "Name"
//! let options = ManifestOptions::default()
//!     .with_snp_column("Name")
//!     .with_delimiter(b'\t');
//! let snps = read_manifest(Path::new("manifest.tsv"), &options).unwrap();
//! ```

pub mod manifest;
