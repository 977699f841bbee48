use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    Csv(#[from] csv::Error),

    #[error("Manifest is missing the '{column}' column")]
    MissingColumn { column: String },
}

/// Default header naming the SNP identifier column
pub const DEFAULT_SNP_COLUMN: &str = "snp_id";

/// What to do when the SNP identifier column is absent from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingColumnPolicy {
    /// Load the array with an empty SNP set. Vendor manifests are
    /// inconsistent about header naming, so loading stays permissive by
    /// default; a warning is logged so the empty record is not silent.
    #[default]
    Ignore,
    /// Return [`ManifestError::MissingColumn`] instead.
    Fail,
}

/// Options controlling manifest ingestion
#[derive(Debug, Clone)]
pub struct ManifestOptions {
    /// Header of the column holding SNP identifiers
    pub snp_column: String,
    /// Field delimiter (`b','` for CSV manifests, `b'\t'` for TSV)
    pub delimiter: u8,
    /// Behavior when `snp_column` is not in the header
    pub missing_column: MissingColumnPolicy,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            snp_column: DEFAULT_SNP_COLUMN.to_string(),
            delimiter: b',',
            missing_column: MissingColumnPolicy::default(),
        }
    }
}

impl ManifestOptions {
    /// Options reading SNP identifiers from a differently-named column.
    #[must_use]
    pub fn with_snp_column(mut self, snp_column: impl Into<String>) -> Self {
        self.snp_column = snp_column.into();
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_missing_column(mut self, policy: MissingColumnPolicy) -> Self {
        self.missing_column = policy;
        self
    }
}

/// Read the SNP identifier set from a delimited manifest file.
///
/// The manifest must carry a header row; values in the configured SNP column
/// are trimmed, blanks dropped, and the remainder deduplicated. All other
/// columns are ignored.
///
/// # Errors
///
/// Returns `ManifestError::Io` if the file cannot be opened,
/// `ManifestError::Csv` on malformed delimited content, or
/// `ManifestError::MissingColumn` when the column is absent and the policy
/// is [`MissingColumnPolicy::Fail`].
pub fn read_manifest(path: &Path, options: &ManifestOptions) -> Result<HashSet<String>, ManifestError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?;
    let Some(column_index) = headers
        .iter()
        .position(|h| h.trim() == options.snp_column)
    else {
        return match options.missing_column {
            MissingColumnPolicy::Ignore => {
                warn!(
                    manifest = %path.display(),
                    column = %options.snp_column,
                    "SNP column not found in manifest header; loading empty SNP set"
                );
                Ok(HashSet::new())
            }
            MissingColumnPolicy::Fail => Err(ManifestError::MissingColumn {
                column: options.snp_column.clone(),
            }),
        };
    };

    let mut snps = HashSet::new();
    for record in reader.records() {
        let record = record?;
        // Short rows simply lack the field; treated the same as a blank value
        if let Some(value) = record.get(column_index) {
            let value = value.trim();
            if !value.is_empty() {
                snps.insert(value.to_string());
            }
        }
    }

    Ok(snps)
}
