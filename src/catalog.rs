use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;

/// The `fileType` tag NCBI uses for genomic nucleotide FASTA files in a
/// dataset catalog. Everything else in the catalog is ignored.
pub const GENOMIC_FASTA: &str = "GENOMIC_NUCLEOTIDE_FASTA";

/// The parsed `dataset_catalog.json` manifest shipped inside an NCBI dataset
/// archive. Only the fields needed to locate sequence files are kept; unknown
/// fields are skipped during deserialization.
#[derive(Deserialize, Debug)]
pub struct Catalog {
    pub assemblies: Vec<Assembly>,
}

#[derive(Deserialize, Debug)]
pub struct Assembly {
    pub files: Vec<CatalogFile>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    pub file_path: String,
    pub file_type: String,
}

impl Catalog {
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).context("Could not parse dataset catalog")
    }

    /// Returns the paths of all genomic FASTA files, in document order:
    /// assemblies in order, files within each assembly in order.
    pub fn genomic_fasta_paths(&self) -> Vec<&str> {
        self.assemblies
            .iter()
            .flat_map(|assembly| &assembly.files)
            .filter(|file| file.file_type == GENOMIC_FASTA)
            .map(|file| file.file_path.as_str())
            .collect()
    }
}
