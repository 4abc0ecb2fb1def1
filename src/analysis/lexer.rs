// src/analysis/lexer.rs
//! Splits preprocessed source into word and operator tokens.

use crate::vocab::{self, OPERATOR_WINDOW};

/// Ordered tokens produced by one [`tokenize`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<String>,
}

impl TokenStream {
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

/// Tokenizes `text`.
///
/// Words (a letter or `_` followed by letters, digits, `_`) and vocabulary
/// operators are emitted. Plain decimal numbers (digits and dots) are scanned
/// and dropped. Whitespace and unrecognised characters are skipped.
///
/// Hex, exponent and suffixed literals get no special treatment: `0x1F` is a
/// dropped `0` followed by the word `x1F`.
#[must_use]
pub fn tokenize(text: &str) -> TokenStream {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens: Vec<String> = Vec::new();
    let mut i = 0;

    while let Some(&c) = chars.get(i) {
        if c.is_whitespace() {
            i += 1;
        } else if is_word_start(c) {
            let end = scan_while(&chars, i, is_word_char);
            tokens.push(chars[i..end].iter().collect());
            i = end;
        } else if c.is_ascii_digit() {
            i = scan_while(&chars, i, |ch| ch.is_ascii_digit() || ch == '.');
        } else if let Some(op) = match_operator(&chars, i) {
            i += op.chars().count();
            tokens.push(op.to_string());
        } else {
            i += 1;
        }
    }

    TokenStream { tokens }
}

fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns the index one past the run of chars matching `pred` starting at `start`.
fn scan_while(chars: &[char], start: usize, pred: impl Fn(char) -> bool) -> usize {
    chars[start..]
        .iter()
        .position(|&c| !pred(c))
        .map_or(chars.len(), |offset| start + offset)
}

/// Longest-match operator lookup, trying the widest window first.
///
/// Every vocabulary operator is ASCII, so the window is packed into a stack
/// buffer and any non-ASCII char rules that width out.
fn match_operator(chars: &[char], start: usize) -> Option<&'static str> {
    (1..=OPERATOR_WINDOW).rev().find_map(|width| {
        let window = chars.get(start..start + width)?;
        let mut bytes = [0u8; OPERATOR_WINDOW];
        for (slot, &c) in bytes.iter_mut().zip(window) {
            *slot = u8::try_from(c).ok().filter(u8::is_ascii)?;
        }
        let candidate = std::str::from_utf8(&bytes[..width]).ok()?;
        vocab::operator_index(candidate).and_then(|idx| vocab::OPERATORS.get(idx).copied())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(text: &str) -> Vec<String> {
        tokenize(text).tokens().to_vec()
    }

    #[test]
    fn test_scan_while_stops_at_mismatch() {
        let chars: Vec<char> = "abc1 x".chars().collect();
        assert_eq!(scan_while(&chars, 0, is_word_char), 4);
        assert_eq!(scan_while(&chars, 5, is_word_char), 6);
    }

    #[test]
    fn test_longest_match_prefers_three_chars() {
        let chars: Vec<char> = ">>>=".chars().collect();
        assert_eq!(match_operator(&chars, 0), Some(">>>"));
        assert_eq!(match_operator(&chars, 3), Some("="));
    }

    #[test]
    fn test_non_ascii_neighbour_falls_back_to_shorter_window() {
        let chars: Vec<char> = "=é=".chars().collect();
        assert_eq!(match_operator(&chars, 0), Some("="));
        assert_eq!(match_operator(&chars, 1), None);
        assert_eq!(lex("a=ß"), vec!["a", "=", "ß"]);
        assert_eq!(lex("x → y"), vec!["x", "y"]);
    }

    #[test]
    fn test_unknown_operator_char() {
        let chars: Vec<char> = "#".chars().collect();
        assert_eq!(match_operator(&chars, 0), None);
    }

    #[test]
    fn test_numbers_are_dropped() {
        assert_eq!(lex("x = 3.14;"), vec!["x", "=", ";"]);
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(lex("int größe;"), vec!["int", "größe", ";"]);
    }
}
