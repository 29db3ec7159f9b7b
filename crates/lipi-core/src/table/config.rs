use std::collections::HashSet;

use serde::Deserialize;

use super::{ConsonantEntry, SymbolTable, VowelEntry};

#[derive(Deserialize)]
struct TableConfig {
    virama: String,
    vowels: Vec<VowelEntry>,
    consonants: Vec<ConsonantEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[{table}]] table is empty")]
    Empty { table: &'static str },
    #[error("virama is empty")]
    EmptyVirama,
    #[error("empty key in [[{table}]]")]
    EmptyKey { table: &'static str },
    #[error("non-ASCII key in [[{table}]]: {key}")]
    NonAsciiKey { table: &'static str, key: String },
    #[error("key in [[{table}]] must start with a letter or digit: {key}")]
    UnreachableKey { table: &'static str, key: String },
    #[error("duplicate key in [[{table}]]: {key}")]
    DuplicateKey { table: &'static str, key: String },
    #[error("empty value for key in [[{table}]]: {key}")]
    EmptyValue { table: &'static str, key: String },
    #[error("symbol table already initialized")]
    AlreadyInitialized,
}

/// Parse and validate TOML text into a [`SymbolTable`].
pub fn parse_table_toml(toml_str: &str) -> Result<SymbolTable, TableConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if config.virama.is_empty() {
        return Err(TableConfigError::EmptyVirama);
    }

    validate_keys("vowels", config.vowels.iter().map(|v| v.token.as_str()))?;
    validate_keys(
        "consonants",
        config.consonants.iter().map(|c| c.token.as_str()),
    )?;

    // Vowel signs may be empty (inherent vowel); the independent form may not.
    for v in &config.vowels {
        if v.independent.is_empty() {
            return Err(TableConfigError::EmptyValue {
                table: "vowels",
                key: v.token.clone(),
            });
        }
    }
    for c in &config.consonants {
        if c.glyph.is_empty() {
            return Err(TableConfigError::EmptyValue {
                table: "consonants",
                key: c.token.clone(),
            });
        }
    }

    Ok(SymbolTable::new(
        config.vowels,
        config.consonants,
        config.virama,
    ))
}

fn validate_keys<'a>(
    table: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), TableConfigError> {
    let mut seen = HashSet::new();
    for key in keys {
        let Some(first) = key.chars().next() else {
            return Err(TableConfigError::EmptyKey { table });
        };
        if !key.is_ascii() {
            return Err(TableConfigError::NonAsciiKey {
                table,
                key: key.to_string(),
            });
        }
        // Non-alphanumeric input is passed through before any lookup.
        if !first.is_ascii_alphanumeric() {
            return Err(TableConfigError::UnreachableKey {
                table,
                key: key.to_string(),
            });
        }
        if !seen.insert(key) {
            return Err(TableConfigError::DuplicateKey {
                table,
                key: key.to_string(),
            });
        }
    }
    if seen.is_empty() {
        return Err(TableConfigError::Empty { table });
    }
    Ok(())
}
