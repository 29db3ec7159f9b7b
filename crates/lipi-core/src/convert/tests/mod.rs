
use super::*;

pub(super) fn t(input: &str) -> String {
    transliterate(input)
}
