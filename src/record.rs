/// A single parsed FASTA record.
///
/// # Fields
///
/// * `id` - The record identifier: the first whitespace-delimited token of the
///   FASTA header line, without the leading `>`.
/// * `seq` - The nucleotide sequence with line breaks removed. Case is kept
///   exactly as it appears in the source file.
#[derive(Debug, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

/// The full set of records loaded from an archive, in discovery order: catalog
/// entries in document order, records within each file in parse order. Built
/// once at startup and only read afterwards.
///
/// Identifiers are not required to be unique; `find` returns the first match.
#[derive(Debug)]
pub struct RecordSet {
    records: Vec<SequenceRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<SequenceRecord>) -> Self {
        RecordSet { records }
    }

    /// Looks up a record by exact, case-sensitive identifier equality. When
    /// several records share an identifier, the earliest one wins.
    pub fn find(&self, id: &str) -> Option<&SequenceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, seq: &[u8]) -> SequenceRecord {
        SequenceRecord {
            id: id.to_string(),
            seq: seq.to_vec(),
        }
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let set = RecordSet::new(vec![record("seq1", b"ACGT"), record("SEQ1", b"GGGG")]);

        assert_eq!(set.find("seq1").unwrap().seq, b"ACGT");
        assert_eq!(set.find("SEQ1").unwrap().seq, b"GGGG");
        assert!(set.find("seq").is_none());
        assert!(set.find("seq1 ").is_none());
    }

    #[test]
    fn find_returns_first_match_on_duplicate_ids() {
        let set = RecordSet::new(vec![
            record("dup", b"AAAA"),
            record("dup", b"GGGG"),
            record("other", b"CCCC"),
        ]);

        assert_eq!(set.find("dup").unwrap().seq, b"AAAA");
    }

    #[test]
    fn empty_set_finds_nothing() {
        let set = RecordSet::new(vec![]);
        assert!(set.is_empty());
        assert!(set.find("seq1").is_none());
    }
}
