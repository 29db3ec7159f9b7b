use serde::Serialize;

use crate::convert::{segments_with, SegmentKind};
use crate::table::SymbolTable;
use crate::unicode::{ends_with_virama, is_latin};

/// Full diagnostic result for a single input.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub output: String,
    pub segments: Vec<ExplainSegment>,
    /// Latin letters copied through because no table entry starts with them.
    pub unmapped_letters: usize,
}

/// A segment for diagnostic display.
#[derive(Debug, Serialize)]
pub struct ExplainSegment {
    pub start: usize,
    pub end: usize,
    pub source: String,
    pub kind: SegmentKind,
    pub output: String,
}

/// Segment `input` and capture how each span was rendered.
pub fn explain(table: &SymbolTable, input: &str) -> ExplainResult {
    let segments: Vec<ExplainSegment> = segments_with(table, input)
        .into_iter()
        .map(|s| ExplainSegment {
            start: s.start,
            end: s.end,
            source: s.source(input).to_string(),
            kind: s.kind,
            output: s.output,
        })
        .collect();

    let unmapped_letters = segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Passthrough)
        .filter(|s| s.source.chars().all(is_latin))
        .count();
    let output = segments.iter().map(|s| s.output.as_str()).collect();

    ExplainResult {
        input: input.to_string(),
        output,
        segments,
        unmapped_letters,
    }
}

fn kind_label(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Passthrough => "pass",
        SegmentKind::IndependentVowel => "vowel",
        SegmentKind::Syllable => "syllable",
        SegmentKind::Geminate => "geminate",
        SegmentKind::Cluster => "cluster",
        SegmentKind::HalfLetter => "half",
    }
}

/// Format an ExplainResult as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    use unicode_width::UnicodeWidthStr;
    let mut out = String::new();

    out.push_str(&format!(
        "=== \"{}\" -> \"{}\" ({} segments) ===\n",
        result.input,
        result.output,
        result.segments.len(),
    ));

    for (i, seg) in result.segments.iter().enumerate() {
        let pad_width = 8;
        let source = seg.source.escape_debug().to_string();
        let display_width = UnicodeWidthStr::width(source.as_str());
        let padded = if display_width < pad_width {
            format!("{}{}", source, " ".repeat(pad_width - display_width))
        } else {
            source
        };
        let tail = if seg.kind == SegmentKind::HalfLetter && ends_with_virama(&seg.output) {
            "  (no vowel)"
        } else {
            ""
        };
        out.push_str(&format!(
            "  seg[{}]: [{},{}] {} {:<9} -> {}{}\n",
            i,
            seg.start,
            seg.end,
            padded,
            kind_label(seg.kind),
            seg.output.escape_debug(),
            tail,
        ));
    }

    if result.unmapped_letters > 0 {
        out.push_str(&format!(
            "\n  {} unmapped letter(s) passed through\n",
            result.unmapped_letters
        ));
    }

    out
}
