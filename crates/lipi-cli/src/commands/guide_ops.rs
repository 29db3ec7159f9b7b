//! Phonetic cheat-sheet. Every row is rendered through the engine, so the
//! guide always agrees with the active table.

use lipi_core::{transliterate_with, SymbolTable};
use unicode_width::UnicodeWidthStr;

/// (section, roman input, note)
const GUIDE: &[(&str, &str, &str)] = &[
    ("Vowels", "a", ""),
    ("Vowels", "aa", ""),
    ("Vowels", "i", ""),
    ("Vowels", "ii", "same as ee"),
    ("Vowels", "ee", "same as ii"),
    ("Vowels", "u", ""),
    ("Vowels", "uu", ""),
    ("Vowels", "e", ""),
    ("Vowels", "eh", "long e"),
    ("Vowels", "ai", ""),
    ("Vowels", "o", ""),
    ("Vowels", "oo", "long o"),
    ("Vowels", "au", ""),
    ("Consonants", "ka", ""),
    ("Consonants", "kha", ""),
    ("Consonants", "ga", ""),
    ("Consonants", "gha", ""),
    ("Consonants", "gna", ""),
    ("Consonants", "nya", ""),
    ("Consonants", "cha", "also c"),
    ("Consonants", "chha", ""),
    ("Consonants", "ja", ""),
    ("Consonants", "jha", ""),
    ("Consonants", "ta", ""),
    ("Consonants", "tha", ""),
    ("Consonants", "ttha", ""),
    ("Consonants", "da", ""),
    ("Consonants", "Da", "retroflex"),
    ("Consonants", "dda", ""),
    ("Consonants", "dha", ""),
    ("Consonants", "Dha", "retroflex"),
    ("Consonants", "na", ""),
    ("Consonants", "pa", ""),
    ("Consonants", "pha", ""),
    ("Consonants", "ba", ""),
    ("Consonants", "bha", ""),
    ("Consonants", "ma", ""),
    ("Consonants", "ya", ""),
    ("Consonants", "ra", ""),
    ("Consonants", "la", ""),
    ("Consonants", "va", "also w"),
    ("Consonants", "sa", ""),
    ("Consonants", "sha", ""),
    ("Consonants", "ssa", ""),
    ("Consonants", "ha", ""),
    ("Consonants", "xa", ""),
    ("Rules", "kaa", "consonant + vowel sign"),
    ("Rules", "n", "no vowel: half-letter"),
    ("Rules", "kka", "doubled consonant"),
    ("Rules", "tta", "doubled consonant"),
    ("Rules", "nka", "two consonants + vowel"),
    ("Rules", "ka eka", "space starts a new word"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideRow {
    pub section: &'static str,
    pub roman: &'static str,
    pub telugu: String,
    pub note: &'static str,
}

pub fn guide_rows(table: &SymbolTable) -> Vec<GuideRow> {
    GUIDE
        .iter()
        .map(|&(section, roman, note)| GuideRow {
            section,
            roman,
            telugu: transliterate_with(table, roman),
            note,
        })
        .collect()
}

pub fn format_guide(rows: &[GuideRow]) -> String {
    let roman_width = rows.iter().map(|r| r.roman.len()).max().unwrap_or(0);
    let telugu_width = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.telugu.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let mut section = "";
    for row in rows {
        if row.section != section {
            if !section.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("=== {} ===\n", row.section));
            section = row.section;
        }
        let width = UnicodeWidthStr::width(row.telugu.as_str());
        let pad = " ".repeat(telugu_width.saturating_sub(width));
        let line = format!(
            "  {:<roman_width$}  {}{}  {}",
            row.roman, row.telugu, pad, row.note
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn guide_cmd(table: &SymbolTable) {
    print!("{}", format_guide(&guide_rows(table)));
}
