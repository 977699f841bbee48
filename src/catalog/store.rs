use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::info;

use crate::catalog::record::ArrayRecord;
use crate::parsing::manifest::{read_manifest, ManifestError, ManifestOptions};

/// Catalogue of genotyping array manifests.
///
/// Holds one [`ArrayRecord`] per array name and answers SNP membership
/// queries across every registered array. Re-registering a name overwrites
/// the previous record; there is no removal.
#[derive(Debug, Default)]
pub struct ArrayCatalogue {
    arrays: HashMap<String, ArrayRecord>,
}

impl ArrayCatalogue {
    /// Create an empty catalogue
    pub fn new() -> Self {
        Self {
            arrays: HashMap::new(),
        }
    }

    /// Create a catalogue pre-loaded with records
    pub fn with_arrays(arrays: Vec<ArrayRecord>) -> Self {
        let mut catalogue = Self::new();
        for record in arrays {
            catalogue.register(record);
        }
        catalogue
    }

    /// Register an array, overwriting any record with the same name
    pub fn register(&mut self, record: ArrayRecord) {
        self.arrays.insert(record.array_name.clone(), record);
    }

    /// Load an array manifest from a delimited file and register it.
    ///
    /// Uses default [`ManifestOptions`]: CSV with a `snp_id` column, a
    /// missing column tolerated as an empty SNP set.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] if the file cannot be read or parsed.
    pub fn load_manifest(
        &mut self,
        array_name: impl Into<String>,
        path: &Path,
    ) -> Result<&ArrayRecord, ManifestError> {
        self.load_manifest_with(array_name, path, &ManifestOptions::default())
    }

    /// Load an array manifest with explicit ingestion options.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] if the file cannot be read or parsed, or if
    /// the SNP column is absent under
    /// [`MissingColumnPolicy::Fail`](crate::parsing::manifest::MissingColumnPolicy::Fail).
    pub fn load_manifest_with(
        &mut self,
        array_name: impl Into<String>,
        path: &Path,
        options: &ManifestOptions,
    ) -> Result<&ArrayRecord, ManifestError> {
        let array_name = array_name.into();
        let snps = read_manifest(path, options)?;

        info!(
            array = %array_name,
            manifest = %path.display(),
            snps = snps.len(),
            "loaded array manifest"
        );

        let record = ArrayRecord::new(array_name.clone()).with_snps(snps);
        self.arrays.insert(array_name.clone(), record);
        // Just inserted under this key
        Ok(&self.arrays[&array_name])
    }

    /// Get an array record by name
    pub fn get_array(&self, name: &str) -> Option<&ArrayRecord> {
        self.arrays.get(name)
    }

    /// All registered array names, lexicographically sorted.
    ///
    /// Returns a fresh snapshot each call; holding the list does not track
    /// later registrations.
    pub fn array_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.arrays.keys().cloned().collect();
        names.sort();
        names
    }

    /// Names of all arrays whose manifest contains the given SNP, sorted
    /// for deterministic output.
    pub fn find_arrays_containing(&self, snp_id: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .arrays
            .values()
            .filter(|record| record.contains(snp_id))
            .map(|record| record.array_name.clone())
            .collect();
        names.sort();
        names
    }

    /// Count of unique SNPs across all registered arrays.
    ///
    /// Recomputed on every call; the union is not cached.
    pub fn total_unique_snps(&self) -> usize {
        let mut union: HashSet<&str> = HashSet::new();
        for record in self.arrays.values() {
            union.extend(record.snp_ids.iter().map(String::as_str));
        }
        union.len()
    }

    /// Number of registered arrays
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Check if the catalogue has no arrays
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn make_catalogue() -> ArrayCatalogue {
        ArrayCatalogue::with_arrays(vec![
            ArrayRecord::new("GSA_v3")
                .with_snps(["rs429358", "rs7412", "rs1234"])
                .with_snp_count(650_000),
            ArrayRecord::new("Axiom_UKB")
                .with_snps(["rs429358", "rs5678"])
                .with_snp_count(800_000),
        ])
    }

    #[test]
    fn test_register_and_lookup() {
        let cat = make_catalogue();
        assert_eq!(cat.array_names(), vec!["Axiom_UKB", "GSA_v3"]);
        assert_eq!(cat.get_array("GSA_v3").unwrap().snp_count, 650_000);
        assert!(cat.get_array("NonExistent").is_none());
    }

    #[test]
    fn test_register_overwrites() {
        let mut cat = make_catalogue();
        cat.register(ArrayRecord::new("GSA_v3").with_snps(["rs9999"]));
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.get_array("GSA_v3").unwrap().snp_count, 1);
    }

    #[test]
    fn test_find_arrays_containing() {
        let cat = make_catalogue();
        // Sorted regardless of registration order
        assert_eq!(
            cat.find_arrays_containing("rs429358"),
            vec!["Axiom_UKB", "GSA_v3"]
        );
        assert_eq!(cat.find_arrays_containing("rs7412"), vec!["GSA_v3"]);
        assert!(cat.find_arrays_containing("rs999999").is_empty());
    }

    #[test]
    fn test_membership_agrees_with_lookup() {
        let cat = make_catalogue();
        for name in cat.array_names() {
            let record = cat.get_array(&name).unwrap();
            for snp in &record.snp_ids {
                assert!(cat.find_arrays_containing(snp).contains(&name));
            }
        }
    }

    #[test]
    fn test_total_unique_snps() {
        let mut cat = make_catalogue();
        // rs429358, rs7412, rs1234, rs5678
        assert_eq!(cat.total_unique_snps(), 4);

        // A duplicate SNP on a third array does not grow the union
        cat.register(ArrayRecord::new("Third").with_snps(["rs7412"]));
        assert_eq!(cat.total_unique_snps(), 4);
    }

    #[test]
    fn test_load_manifest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"snp_id,chr,pos\nrs111,1,100\nrs222,2,200\n")
            .unwrap();

        let mut cat = ArrayCatalogue::new();
        let record = cat.load_manifest("TestArray", file.path()).unwrap();
        assert_eq!(record.snp_count, 2);
        assert!(record.contains("rs111"));
        assert!(record.contains("rs222"));
        assert_eq!(cat.array_names(), vec!["TestArray"]);
    }

    #[test]
    fn test_array_names_is_a_snapshot() {
        let mut cat = make_catalogue();
        let names = cat.array_names();
        cat.register(ArrayRecord::new("Zzz"));
        assert_eq!(names.len(), 2);
        assert_eq!(cat.array_names().len(), 3);
    }
}
