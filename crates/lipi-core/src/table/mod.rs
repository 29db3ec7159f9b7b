//! Romanized-token to Telugu glyph tables.
//!
//! The default table is embedded from `default_table.toml`. A custom table
//! can be registered with [`SymbolTable::init_custom`] before the first
//! [`SymbolTable::global`] call.

mod config;

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

use crate::matcher::Vocabulary;

pub use config::{parse_table_toml, TableConfigError};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_table.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// A vowel token with both of its renderings.
///
/// Independent and dependent forms share one key so the two can never
/// disagree about which tokens exist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VowelEntry {
    pub token: String,
    /// Full glyph used when the vowel stands alone.
    pub independent: String,
    /// Sign attached to a preceding consonant. Empty for the inherent vowel.
    #[serde(default)]
    pub sign: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConsonantEntry {
    pub token: String,
    pub glyph: String,
}

/// Immutable symbol tables plus their longest-first vocabularies.
#[derive(Debug)]
pub struct SymbolTable {
    vowels: Vec<VowelEntry>,
    consonants: Vec<ConsonantEntry>,
    virama: String,
    vowel_vocab: Vocabulary,
    consonant_vocab: Vocabulary,
}

impl SymbolTable {
    /// Build a table from already-validated entries.
    pub(crate) fn new(
        vowels: Vec<VowelEntry>,
        consonants: Vec<ConsonantEntry>,
        virama: String,
    ) -> Self {
        let vowel_vocab = Vocabulary::new(vowels.iter().map(|v| v.token.as_str()));
        let consonant_vocab = Vocabulary::new(consonants.iter().map(|c| c.token.as_str()));
        Self {
            vowels,
            consonants,
            virama,
            vowel_vocab,
            consonant_vocab,
        }
    }

    /// Parse a table from TOML text. See [`parse_table_toml`].
    pub fn from_toml(toml_str: &str) -> Result<Self, TableConfigError> {
        parse_table_toml(toml_str)
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableConfigError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static SymbolTable {
        static INSTANCE: OnceLock<SymbolTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let custom = CUSTOM_TOML.get();
            let toml_str = custom.map(|s| s.as_str()).unwrap_or(DEFAULT_TOML);
            let table = parse_table_toml(toml_str).expect("symbol table TOML must be valid");
            debug!(
                custom = custom.is_some(),
                vowels = table.vowels.len(),
                consonants = table.consonants.len(),
                "symbol table initialized"
            );
            table
        })
    }

    pub fn vowels(&self) -> &[VowelEntry] {
        &self.vowels
    }

    pub fn consonants(&self) -> &[ConsonantEntry] {
        &self.consonants
    }

    pub fn virama(&self) -> &str {
        &self.virama
    }

    pub(crate) fn vowel_vocab(&self) -> &Vocabulary {
        &self.vowel_vocab
    }

    pub(crate) fn consonant_vocab(&self) -> &Vocabulary {
        &self.consonant_vocab
    }

    pub fn vowel(&self, token: &str) -> Option<&VowelEntry> {
        self.vowels.iter().find(|v| v.token == token)
    }

    pub fn consonant(&self, token: &str) -> Option<&ConsonantEntry> {
        self.consonants.iter().find(|c| c.token == token)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        parse_table_toml(DEFAULT_TOML).expect("embedded symbol table must be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vowel_pair(t: &SymbolTable, token: &str) -> (String, String) {
        let v = t.vowel(token).unwrap();
        (v.independent.clone(), v.sign.clone())
    }

    #[test]
    fn test_vowel_table_matches_canonical() {
        let t = SymbolTable::global();
        let expected = [
            ("a", "అ", ""),
            ("aa", "ఆ", "ా"),
            ("i", "ఇ", "ి"),
            ("ii", "ఈ", "ీ"),
            ("ee", "ఈ", "ీ"),
            ("u", "ఉ", "ు"),
            ("uu", "ఊ", "ూ"),
            ("e", "ఎ", "ె"),
            ("eh", "ఏ", "ే"),
            ("ai", "ఐ", "ై"),
            ("o", "ఒ", "ొ"),
            ("oo", "ఓ", "ో"),
            ("au", "ఔ", "ౌ"),
        ];
        assert_eq!(t.vowels().len(), expected.len());
        for (token, independent, sign) in expected {
            assert_eq!(
                vowel_pair(t, token),
                (independent.to_string(), sign.to_string()),
                "mapping mismatch for vowel={token}"
            );
        }
    }

    #[test]
    fn test_consonant_table_matches_canonical() {
        let t = SymbolTable::global();
        let expected = [
            ("k", "క"),
            ("kh", "ఖ"),
            ("g", "గ"),
            ("gh", "ఘ"),
            ("ny", "ఞ"),
            ("gn", "ఙ"),
            ("c", "చ"),
            ("ch", "చ"),
            ("chh", "ఛ"),
            ("j", "జ"),
            ("jh", "ఝ"),
            ("sh", "శ"),
            ("ss", "ష"),
            ("tth", "త"),
            ("t", "ట"),
            ("th", "థ"),
            ("dd", "ద"),
            ("d", "డ"),
            ("Dh", "ఢ"),
            ("D", "డ"),
            ("dh", "ధ"),
            ("n", "న"),
            ("m", "మ"),
            ("p", "ప"),
            ("ph", "ఫ"),
            ("b", "బ"),
            ("bh", "భ"),
            ("y", "య"),
            ("r", "ర"),
            ("l", "ల"),
            ("v", "వ"),
            ("w", "వ"),
            ("s", "స"),
            ("h", "హ"),
            ("x", "క్ష"),
        ];
        assert_eq!(t.consonants().len(), expected.len());
        for (token, glyph) in expected {
            assert_eq!(
                t.consonant(token).map(|c| c.glyph.as_str()),
                Some(glyph),
                "mapping mismatch for consonant={token}"
            );
        }
    }

    #[test]
    fn test_virama() {
        assert_eq!(SymbolTable::global().virama(), "\u{0C4D}");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let t = SymbolTable::global();
        assert_eq!(t.consonant("Dh").unwrap().glyph, "ఢ");
        assert_eq!(t.consonant("dh").unwrap().glyph, "ధ");
        assert!(t.consonant("K").is_none());
        assert!(t.vowel("A").is_none());
    }

    #[test]
    fn test_default_equals_global_when_not_customized() {
        let d = SymbolTable::default();
        let g = SymbolTable::global();
        assert_eq!(d.vowels(), g.vowels());
        assert_eq!(d.consonants(), g.consonants());
    }

    #[test]
    fn test_init_custom_rejects_invalid() {
        let err = SymbolTable::init_custom("virama = \"\"".to_string()).unwrap_err();
        assert!(matches!(err, TableConfigError::Parse(_)));
    }
}
