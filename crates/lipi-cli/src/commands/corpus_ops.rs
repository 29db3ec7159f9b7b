//! Batch transliteration into a JSONL corpus of `{id, input, telugu, ts}`.

use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process;

use lipi_core::{transliterate_with, SymbolTable};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::CliError;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// One saved transliteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRecord {
    pub id: usize,
    pub input: String,
    pub telugu: String,
    pub ts: String,
}

/// Current local time (UTC if the offset is unknown) as RFC 3339 with
/// whole seconds.
pub fn timestamp_now() -> Result<String, CliError> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_timestamp(now)
}

pub fn format_timestamp(at: OffsetDateTime) -> Result<String, CliError> {
    let at = at.replace_nanosecond(0).unwrap_or(at);
    Ok(at.format(&Rfc3339)?)
}

/// Non-empty lines that are not `#` comments, trimmed.
pub fn read_inputs(path: &Path) -> Result<Vec<String>, CliError> {
    let file = fs::File::open(path)?;
    let mut inputs = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('#') {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}

pub fn build_records(table: &SymbolTable, inputs: &[String], ts: &str) -> Vec<CorpusRecord> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| CorpusRecord {
            id: i + 1,
            input: input.clone(),
            telugu: transliterate_with(table, input),
            ts: ts.to_string(),
        })
        .collect()
}

pub fn write_jsonl(path: &Path, records: &[CorpusRecord]) -> Result<(), CliError> {
    let mut w = BufWriter::new(fs::File::create(path)?);
    for record in records {
        serde_json::to_writer(&mut w, record)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn corpus_cmd(table: &SymbolTable, input_file: &str, output_file: &str) {
    let inputs = die!(
        read_inputs(Path::new(input_file)),
        "Failed to read {input_file}: {}"
    );
    let ts = die!(timestamp_now(), "Error: {}");
    let records = build_records(table, &inputs, &ts);
    die!(
        write_jsonl(Path::new(output_file), &records),
        "Failed to write {output_file}: {}"
    );
    eprintln!("Wrote {} records to {}", records.len(), output_file);
}
