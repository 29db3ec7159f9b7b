//! Romanized text to Telugu script.
//!
//! The input is scanned left to right. At each position the longest
//! independent vowel is tried first, then the longest consonant, which may
//! combine with a following consonant and vowel (conjunct), with a following
//! vowel (syllable), or stand alone with a virama (half-letter). Anything
//! else is copied through unchanged, so every input has an output.

#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::table::SymbolTable;

/// How a span of input was rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Copied unchanged: whitespace, punctuation, digits, unknown letters.
    Passthrough,
    /// A vowel not attached to a consonant.
    IndependentVowel,
    /// Consonant plus vowel sign (empty for the inherent vowel).
    Syllable,
    /// The same consonant twice, then a vowel.
    Geminate,
    /// Two different consonants, then a vowel.
    Cluster,
    /// Consonant with no following vowel, killed with a virama.
    HalfLetter,
}

/// One rendered span of the input. `start..end` are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: usize,
    pub end: usize,
    pub output: String,
}

impl Segment {
    /// The slice of `input` this segment consumed.
    pub fn source<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }
}

/// A committed decision at one cursor position. Entries index into the
/// table's vowel and consonant lists; `end` is the new cursor.
#[derive(Debug, Clone, Copy)]
enum Step {
    Passthrough {
        end: usize,
    },
    IndependentVowel {
        vowel: usize,
        end: usize,
    },
    Syllable {
        consonant: usize,
        vowel: usize,
        end: usize,
    },
    Conjunct {
        first: usize,
        second: usize,
        vowel: usize,
        end: usize,
    },
    HalfLetter {
        consonant: usize,
        end: usize,
    },
}

impl Step {
    fn end(&self) -> usize {
        match *self {
            Step::Passthrough { end }
            | Step::IndependentVowel { end, .. }
            | Step::Syllable { end, .. }
            | Step::Conjunct { end, .. }
            | Step::HalfLetter { end, .. } => end,
        }
    }

    fn kind(&self) -> SegmentKind {
        match *self {
            Step::Passthrough { .. } => SegmentKind::Passthrough,
            Step::IndependentVowel { .. } => SegmentKind::IndependentVowel,
            Step::Syllable { .. } => SegmentKind::Syllable,
            // Entry indices are unique per token.
            Step::Conjunct { first, second, .. } if first == second => SegmentKind::Geminate,
            Step::Conjunct { .. } => SegmentKind::Cluster,
            Step::HalfLetter { .. } => SegmentKind::HalfLetter,
        }
    }

    fn render(&self, table: &SymbolTable, source: &str, out: &mut String) {
        let vowels = table.vowels();
        let consonants = table.consonants();
        match *self {
            Step::Passthrough { .. } => out.push_str(source),
            Step::IndependentVowel { vowel, .. } => out.push_str(&vowels[vowel].independent),
            Step::Syllable {
                consonant, vowel, ..
            } => {
                out.push_str(&consonants[consonant].glyph);
                out.push_str(&vowels[vowel].sign);
            }
            Step::Conjunct {
                first,
                second,
                vowel,
                ..
            } => {
                out.push_str(&consonants[first].glyph);
                out.push_str(table.virama());
                out.push_str(&consonants[second].glyph);
                out.push_str(&vowels[vowel].sign);
            }
            Step::HalfLetter { consonant, .. } => {
                out.push_str(&consonants[consonant].glyph);
                out.push_str(table.virama());
            }
        }
    }
}

/// Decide what to emit for the character `ch` starting at byte offset `i`.
///
/// Lookahead only peeks; nothing is consumed until the returned step.
fn next_step(table: &SymbolTable, input: &str, i: usize, ch: char) -> Step {
    let single = Step::Passthrough {
        end: i + ch.len_utf8(),
    };
    if ch.is_whitespace() || !ch.is_alphanumeric() {
        return single;
    }

    let vowels = table.vowel_vocab();
    let consonants = table.consonant_vocab();

    if let Some(v) = vowels.match_at(input, i) {
        return Step::IndependentVowel {
            vowel: v.entry,
            end: i + v.len,
        };
    }

    let Some(c1) = consonants.match_at(input, i) else {
        return single;
    };
    let next = i + c1.len;

    if let Some(c2) = consonants.match_at(input, next) {
        let after = next + c2.len;
        if let Some(v2) = vowels.match_at(input, after) {
            return Step::Conjunct {
                first: c1.entry,
                second: c2.entry,
                vowel: v2.entry,
                end: after + v2.len,
            };
        }
    }

    match vowels.match_at(input, next) {
        Some(v1) => Step::Syllable {
            consonant: c1.entry,
            vowel: v1.entry,
            end: next + v1.len,
        },
        None => Step::HalfLetter {
            consonant: c1.entry,
            end: next,
        },
    }
}

/// Iterate committed steps over the whole input with their start offsets.
fn steps<'a>(
    table: &'a SymbolTable,
    input: &'a str,
) -> impl Iterator<Item = (usize, Step)> + 'a {
    let mut i = 0;
    std::iter::from_fn(move || {
        let ch = input.get(i..)?.chars().next()?;
        let step = next_step(table, input, i, ch);
        let start = i;
        i = step.end();
        Some((start, step))
    })
}

/// Transliterate with the global symbol table.
pub fn transliterate(input: &str) -> String {
    transliterate_with(SymbolTable::global(), input)
}

/// Transliterate `input` using `table`.
pub fn transliterate_with(table: &SymbolTable, input: &str) -> String {
    let _span = debug_span!("transliterate", input_len = input.len()).entered();
    let mut out = String::with_capacity(input.len() * 3);
    for (start, step) in steps(table, input) {
        step.render(table, &input[start..step.end()], &mut out);
    }
    debug!(output_len = out.len());
    out
}

/// Segment with the global symbol table.
pub fn segments(input: &str) -> Vec<Segment> {
    segments_with(SymbolTable::global(), input)
}

/// Split `input` into rendered segments. The segments tile the input and
/// their outputs concatenate to [`transliterate_with`].
pub fn segments_with(table: &SymbolTable, input: &str) -> Vec<Segment> {
    let _span = debug_span!("segments", input_len = input.len()).entered();
    let segments: Vec<Segment> = steps(table, input)
        .map(|(start, step)| {
            let end = step.end();
            let mut output = String::new();
            step.render(table, &input[start..end], &mut output);
            Segment {
                kind: step.kind(),
                start,
                end,
                output,
            }
        })
        .collect();
    debug!(segment_count = segments.len());
    segments
}
