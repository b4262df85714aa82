use crate::catalog::Catalog;
use crate::record::{RecordSet, SequenceRecord};
use anyhow::{Context, Result};
use needletail::parser::FastaReader;
use needletail::FastxReader;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Directory inside the archive holding the catalog and all data files.
const DATA_DIR: &str = "ncbi_dataset/data";
const CATALOG_NAME: &str = "dataset_catalog.json";

/// Loads every genomic FASTA record from an NCBI dataset archive.
///
/// The archive's `dataset_catalog.json` decides which entries are parsed;
/// entries with a non-genomic `fileType` are never opened. Any missing entry
/// or malformed content is an error.
pub fn load(archive: &Path) -> Result<RecordSet> {
    let file = File::open(archive)
        .with_context(|| format!("Unable to open archive {}", archive.display()))?;

    from_reader(file).with_context(|| format!("Could not load dataset {}", archive.display()))
}

fn from_reader(reader: impl Read + Seek) -> Result<RecordSet> {
    let mut archive = ZipArchive::new(reader).context("Not a valid zip archive")?;

    let catalog_path = format!("{DATA_DIR}/{CATALOG_NAME}");
    let catalog = {
        let entry = archive
            .by_name(&catalog_path)
            .with_context(|| format!("Archive has no {catalog_path} entry"))?;
        Catalog::from_reader(entry)?
    };

    let paths = catalog.genomic_fasta_paths();
    info!("Catalog lists {} genomic FASTA file(s)", paths.len());

    let mut records = Vec::new();
    for path in paths {
        let entry_path = format!("{DATA_DIR}/{path}");
        let mut entry = archive
            .by_name(&entry_path)
            .with_context(|| format!("Entry {entry_path} is missing from the archive"))?;

        let mut contents = Vec::new();
        entry
            .read_to_end(&mut contents)
            .with_context(|| format!("Could not read {entry_path}"))?;

        let count = read_fasta(Cursor::new(contents), &mut records)
            .with_context(|| format!("Could not parse {entry_path}"))?;
        info!("{entry_path}: {count} record(s)");
    }

    info!("Loaded {} record(s) in total", records.len());
    Ok(RecordSet::new(records))
}

/// Appends every record of one FASTA stream to `records`, in parse order, and
/// returns how many were read. The identifier is the first
/// whitespace-delimited token of the header, as in NCBI conventions.
fn read_fasta(reader: impl Read + Send, records: &mut Vec<SequenceRecord>) -> Result<usize> {
    let mut fasta_reader = FastaReader::new(reader);
    let mut count = 0;

    while let Some(r) = fasta_reader.next() {
        let rec = r?;

        let header = String::from_utf8(rec.id().to_vec())?;
        let id = header
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();

        records.push(SequenceRecord {
            id,
            seq: rec.seq().to_vec(),
        });
        count += 1;
    }

    Ok(count)
}
