//! Greedy longest-prefix token matching.

/// Candidate tokens ordered longest first.
///
/// Equal-length tokens keep their declaration order. Each candidate
/// remembers the index of the table entry it came from.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    candidates: Vec<(String, usize)>,
}

/// A token recognized at some offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMatch {
    /// Index of the matched entry in its table.
    pub entry: usize,
    /// Byte length of the matched token.
    pub len: usize,
}

impl Vocabulary {
    pub fn new<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        let mut candidates: Vec<(String, usize)> = tokens
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect();
        // sort_by_key is stable
        candidates.sort_by_key(|(t, _)| std::cmp::Reverse(t.len()));
        Self { candidates }
    }

    /// Find the longest candidate that is a prefix of `input[offset..]`.
    ///
    /// Offsets at or past the end, or inside a multi-byte character, match
    /// nothing.
    pub fn match_at(&self, input: &str, offset: usize) -> Option<TokenMatch> {
        let rest = input.get(offset..)?;
        if rest.is_empty() {
            return None;
        }
        self.candidates
            .iter()
            .find(|(t, _)| rest.starts_with(t.as_str()))
            .map(|(t, entry)| TokenMatch {
                entry: *entry,
                len: t.len(),
            })
    }

    /// Tokens in match order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|(t, _)| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SymbolTable;

    fn token_at<'a>(
        vocab: &Vocabulary,
        keys: &[&'a str],
        input: &str,
        offset: usize,
    ) -> Option<&'a str> {
        vocab.match_at(input, offset).map(|m| keys[m.entry])
    }

    #[test]
    fn test_longest_first_order() {
        let vocab = Vocabulary::new(["c", "ch", "chh", "k"]);
        let order: Vec<&str> = vocab.tokens().collect();
        assert_eq!(order, vec!["chh", "ch", "c", "k"]);
    }

    #[test]
    fn test_ties_keep_declaration_order() {
        let vocab = Vocabulary::new(["b", "aa", "a", "ee", "c"]);
        let order: Vec<&str> = vocab.tokens().collect();
        assert_eq!(order, vec!["aa", "ee", "b", "a", "c"]);
    }

    #[test]
    fn test_prefers_longest_match() {
        let keys = ["c", "ch", "chh"];
        let vocab = Vocabulary::new(keys);
        assert_eq!(token_at(&vocab, &keys, "chha", 0), Some("chh"));
        assert_eq!(token_at(&vocab, &keys, "cha", 0), Some("ch"));
        assert_eq!(token_at(&vocab, &keys, "ca", 0), Some("c"));
    }

    #[test]
    fn test_match_at_offset() {
        let keys = ["k", "a"];
        let vocab = Vocabulary::new(keys);
        let m = vocab.match_at("xka", 1).unwrap();
        assert_eq!(m, TokenMatch { entry: 0, len: 1 });
        assert_eq!(token_at(&vocab, &keys, "xka", 2), Some("a"));
    }

    #[test]
    fn test_no_match() {
        let vocab = Vocabulary::new(["k"]);
        assert_eq!(vocab.match_at("z", 0), None);
        assert_eq!(vocab.match_at("", 0), None);
    }

    #[test]
    fn test_offset_at_end_or_beyond() {
        let vocab = Vocabulary::new(["k"]);
        assert_eq!(vocab.match_at("k", 1), None);
        assert_eq!(vocab.match_at("k", 5), None);
    }

    #[test]
    fn test_offset_inside_multibyte_char() {
        let vocab = Vocabulary::new(["k"]);
        // "క" is three bytes
        assert_eq!(vocab.match_at("కk", 1), None);
        assert!(vocab.match_at("కk", 3).is_some());
    }

    #[test]
    fn test_case_sensitive() {
        let keys = ["d", "D", "Dh", "dh"];
        let vocab = Vocabulary::new(keys);
        assert_eq!(token_at(&vocab, &keys, "Dha", 0), Some("Dh"));
        assert_eq!(token_at(&vocab, &keys, "dha", 0), Some("dh"));
        assert_eq!(token_at(&vocab, &keys, "Da", 0), Some("D"));
        assert_eq!(token_at(&vocab, &keys, "K", 0), None);
    }

    #[test]
    fn test_default_vowel_vocab() {
        let table = SymbolTable::global();
        let vocab = table.vowel_vocab();
        let m = vocab.match_at("ai", 0).unwrap();
        assert_eq!(table.vowels()[m.entry].token, "ai");
        assert_eq!(vocab.len(), 13);
        assert!(vocab.tokens().take(8).all(|t| t.len() == 2));
    }

    #[test]
    fn test_default_consonant_vocab() {
        let table = SymbolTable::global();
        let vocab = table.consonant_vocab();
        let first: Vec<&str> = vocab.tokens().take(2).collect();
        assert_eq!(first, vec!["chh", "tth"]);
        let m = vocab.match_at("tthi", 0).unwrap();
        assert_eq!(table.consonants()[m.entry].token, "tth");
    }
}
