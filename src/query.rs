use crate::gc::gc_content;
use crate::record::RecordSet;
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

const PROMPT: &str = "ID: ";

/// Runs the interactive query loop against the loaded records.
///
/// Each iteration prompts for an identifier on `output`, reads one line from
/// `input`, and looks it up with exact string equality. A hit prints the
/// GC-content to two decimal places and ends the loop; a miss reports
/// `ID not found` on stderr and prompts again. There is no retry limit.
///
/// # Errors
///
/// Returns an error if `input` is exhausted before a known identifier is
/// entered, or if the matched record has an empty sequence.
pub fn run(records: &RecordSet, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Could not read from standard input")?;
        if read == 0 {
            bail!("unexpected end of input");
        }

        let id = line.trim_end_matches(['\r', '\n']);
        match records.find(id) {
            Some(record) => {
                let gc = gc_content(record)?;
                writeln!(output, "GC Content: {gc:.2}")?;
                return Ok(());
            }
            None => eprintln!("ID not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SequenceRecord;
    use std::io::Cursor;

    fn records() -> RecordSet {
        RecordSet::new(vec![
            SequenceRecord {
                id: "seq1".to_string(),
                seq: b"GGCCAATT".to_vec(),
            },
            SequenceRecord {
                id: "seq2".to_string(),
                seq: b"ACGT".to_vec(),
            },
        ])
    }

    fn run_with_input(input: &str) -> Result<String> {
        let mut output = Vec::new();
        let result = run(&records(), &mut Cursor::new(input), &mut output);
        result.map(|_| String::from_utf8(output).unwrap())
    }

    #[test]
    fn known_id_prints_gc_and_terminates() {
        let output = run_with_input("seq1\n").unwrap();
        assert_eq!(output, "ID: GC Content: 50.00\n");
    }

    #[test]
    fn unknown_id_reprompts_until_a_match() {
        let output = run_with_input("nope\nalso nope\nseq1\n").unwrap();
        assert_eq!(output, "ID: ID: ID: GC Content: 50.00\n");
    }

    #[test]
    fn input_is_trimmed_of_line_endings_only() {
        let output = run_with_input("seq2\r\n").unwrap();
        assert_eq!(output, "ID: GC Content: 50.00\n");
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let err = run_with_input("nope\n").unwrap_err();
        assert!(err.to_string().contains("unexpected end of input"));
    }
}
