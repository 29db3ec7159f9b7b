use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process;

use lipi_core::{transliterate_with, SymbolTable};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    pub input: String,
    pub expected: String,
    pub category: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub status: AccuracyStatus,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct AccuracyReport {
    pub results: Vec<AccuracyResult>,
    pub summary: AccuracySummary,
}

pub fn load_corpus(path: &Path) -> Result<AccuracyCorpus, CliError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Run every case (optionally only one category) against `table`.
pub fn run_accuracy(
    table: &SymbolTable,
    corpus: &AccuracyCorpus,
    category: Option<&str>,
) -> Result<AccuracyReport, CliError> {
    let cases: Vec<&AccuracyCase> = corpus
        .cases
        .iter()
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .collect();
    if cases.is_empty() {
        return Err(CliError::NoCases);
    }

    let results: Vec<AccuracyResult> = cases
        .iter()
        .map(|case| {
            let (actual, status) = if case.skip {
                (String::new(), AccuracyStatus::Skip)
            } else {
                let actual = transliterate_with(table, &case.input);
                let status = if actual == case.expected {
                    AccuracyStatus::Pass
                } else {
                    AccuracyStatus::Fail
                };
                (actual, status)
            };
            AccuracyResult {
                input: case.input.clone(),
                expected: case.expected.clone(),
                actual,
                status,
                category: case.category.clone(),
                note: case.note.clone(),
            }
        })
        .collect();

    let count = |s: AccuracyStatus| results.iter().filter(|r| r.status == s).count();
    let (pass, fail, skip) = (
        count(AccuracyStatus::Pass),
        count(AccuracyStatus::Fail),
        count(AccuracyStatus::Skip),
    );
    let tested = results.len() - skip;
    let rate = if tested > 0 {
        pass as f64 / tested as f64 * 100.0
    } else {
        0.0
    };
    let summary = AccuracySummary {
        total: results.len(),
        pass,
        fail,
        skip,
        pass_rate: format!("{:.1}%", rate),
    };

    Ok(AccuracyReport { results, summary })
}

pub fn format_report(report: &AccuracyReport, verbose: bool) -> String {
    let mut out = String::new();

    // Group by category
    let mut grouped: BTreeMap<&str, Vec<&AccuracyResult>> = BTreeMap::new();
    for r in &report.results {
        grouped.entry(r.category.as_str()).or_default().push(r);
    }

    for (cat, group) in &grouped {
        out.push_str(&format!("\n=== {} ({} cases) ===\n", cat, group.len()));
        for r in group {
            match r.status {
                AccuracyStatus::Pass => {
                    if verbose {
                        out.push_str(&format!("  \u{2713} {} \u{2192} {}\n", r.input, r.expected));
                    }
                }
                AccuracyStatus::Fail => {
                    out.push_str(&format!(
                        "  \u{2717} {} \u{2192} {} (got: {})\n",
                        r.input, r.expected, r.actual
                    ));
                }
                AccuracyStatus::Skip => {
                    let reason = r.note.as_deref().unwrap_or("known failure");
                    out.push_str(&format!("  - {} [skip: {}]\n", r.input, reason));
                }
            }
        }
    }

    let s = &report.summary;
    out.push_str("\n=== Summary ===\n");
    out.push_str(&format!("  Total:     {}\n", s.total));
    out.push_str(&format!("  Pass:      {:>3}\n", s.pass));
    out.push_str(&format!("  Fail:      {:>3}\n", s.fail));
    out.push_str(&format!("  Skip:      {:>3}\n", s.skip));
    out.push_str(&format!(
        "  Pass rate: {} ({}/{})\n",
        s.pass_rate,
        s.pass,
        s.total - s.skip
    ));
    out
}

pub fn accuracy_cmd(
    table: &SymbolTable,
    corpus_file: &str,
    category: Option<&str>,
    verbose: bool,
    json: bool,
) {
    let corpus = die!(
        load_corpus(Path::new(corpus_file)),
        "Failed to load corpus {corpus_file}: {}"
    );
    let report = die!(run_accuracy(table, &corpus, category), "Error: {}");

    if json {
        let out = die!(
            serde_json::to_string_pretty(&report),
            "JSON serialization failed: {}"
        );
        println!("{out}");
    } else {
        print!("{}", format_report(&report, verbose));
    }

    if report.summary.fail > 0 {
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = r#"
[[cases]]
input = "kka"
expected = "క్క"
category = "gemination"

[[cases]]
input = "nka"
expected = "న్క"
category = "cluster"

[[cases]]
input = "dda"
expected = "ద్ద"
category = "gemination"
note = "dd is its own table entry"

[[cases]]
input = "dda"
expected = "ద్ద"
category = "gemination"
skip = true
note = "longest match wins"
"#;

    fn corpus() -> AccuracyCorpus {
        toml::from_str(CORPUS).unwrap()
    }

    #[test]
    fn run_counts_pass_fail_skip() {
        let report = run_accuracy(&SymbolTable::default(), &corpus(), None).unwrap();
        let s = &report.summary;
        assert_eq!((s.total, s.pass, s.fail, s.skip), (4, 2, 1, 1));
        assert_eq!(s.pass_rate, "66.7%");
        assert_eq!(report.results[2].actual, "ద");
        assert_eq!(report.results[2].status, AccuracyStatus::Fail);
    }

    #[test]
    fn run_filters_by_category() {
        let report = run_accuracy(&SymbolTable::default(), &corpus(), Some("cluster")).unwrap();
        assert_eq!(report.summary.total, 1);
        assert_eq!(report.summary.pass, 1);
    }

    #[test]
    fn run_unknown_category_is_error() {
        let err = run_accuracy(&SymbolTable::default(), &corpus(), Some("nope")).unwrap_err();
        assert!(matches!(err, CliError::NoCases));
    }

    #[test]
    fn format_report_lists_failures_and_skips() {
        let report = run_accuracy(&SymbolTable::default(), &corpus(), None).unwrap();
        let text = format_report(&report, false);

        assert!(text.contains("=== cluster (1 cases) ==="));
        assert!(text.contains("\u{2717} dda \u{2192} ద్ద (got: ద)"));
        assert!(text.contains("- dda [skip: longest match wins]"));
        assert!(!text.contains("\u{2713} nka"));
        assert!(format_report(&report, true).contains("\u{2713} nka \u{2192} న్క"));
        assert!(text.contains("Pass rate: 66.7% (2/3)"));
    }

    #[test]
    fn report_serializes_status_lowercase() {
        let report = run_accuracy(&SymbolTable::default(), &corpus(), None).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"status\":\"pass\""));
        assert!(json.contains("\"status\":\"skip\""));
    }

    #[test]
    fn load_corpus_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.toml");
        fs::write(&path, CORPUS).unwrap();
        assert_eq!(load_corpus(&path).unwrap().cases.len(), 4);
    }

    #[test]
    fn bundled_corpus_passes() {
        let corpus: AccuracyCorpus =
            toml::from_str(include_str!("../../../../data/accuracy.toml")).unwrap();
        let report = run_accuracy(&SymbolTable::default(), &corpus, None).unwrap();
        let failures: Vec<&AccuracyResult> = report
            .results
            .iter()
            .filter(|r| r.status == AccuracyStatus::Fail)
            .collect();
        assert!(failures.is_empty(), "{failures:?}");
    }
}
