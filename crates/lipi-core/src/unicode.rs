//! Character-level Unicode classification for Telugu text.

/// The virama (halant) U+0C4D.
pub const VIRAMA: char = '\u{0C4D}';

/// Check the full Telugu block (U+0C00..U+0C7F). Includes a few unassigned
/// codepoints, which never come out of the engine.
pub fn is_telugu(c: char) -> bool {
    ('\u{0C00}'..='\u{0C7F}').contains(&c)
}

/// Independent vowels అ..ఔ (U+0C05..U+0C14) plus the vocalic ౠ/ౡ.
pub fn is_independent_vowel(c: char) -> bool {
    ('\u{0C05}'..='\u{0C14}').contains(&c) || matches!(c, '\u{0C60}' | '\u{0C61}')
}

/// Consonants క..హ (U+0C15..U+0C39) and the historic ౘ..ౚ.
pub fn is_consonant(c: char) -> bool {
    ('\u{0C15}'..='\u{0C39}').contains(&c) || ('\u{0C58}'..='\u{0C5A}').contains(&c)
}

/// Dependent vowel signs ా..ౌ (U+0C3E..U+0C4C) and the vocalic ౢ/ౣ.
pub fn is_vowel_sign(c: char) -> bool {
    ('\u{0C3E}'..='\u{0C4C}').contains(&c) || matches!(c, '\u{0C62}' | '\u{0C63}')
}

pub fn is_virama(c: char) -> bool {
    c == VIRAMA
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// True when the last character is a virama, i.e. the text ends in a
/// half-letter.
pub fn ends_with_virama(s: &str) -> bool {
    s.chars().next_back().is_some_and(is_virama)
}
