// src/analysis/preprocess.rs
//! Comment and literal stripping.
//!
//! Runs before lexing so that comment text and literal contents never reach
//! the feature extractors. Comments are replaced by whitespace rather than
//! deleted, which keeps adjacent tokens apart and preserves line structure.
//! Literals keep their delimiting quotes, so `"hello"` becomes `""`.
//!
//! Neither pass can fail. An unterminated comment or literal simply runs to the
//! end of the input.

/// Scanner state for the comment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    LineComment,
    BlockComment,
    StringLiteral,
    CharLiteral,
}

impl State {
    fn closing_quote(self) -> Option<char> {
        match self {
            Self::StringLiteral => Some('"'),
            Self::CharLiteral => Some('\''),
            _ => None,
        }
    }
}

/// Strips comments, then blanks literal bodies.
#[must_use]
pub fn process(source: &str) -> String {
    strip_literal_bodies(&strip_comments(source))
}

/// Replaces `//` and `/* */` comments with whitespace.
///
/// Comment markers inside string and character literals are left alone.
/// Newlines inside block comments are kept.
#[must_use]
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut state = State::Normal;

    while let Some(c) = chars.next() {
        state = match state {
            State::Normal => match c {
                '"' => {
                    out.push(c);
                    State::StringLiteral
                }
                '\'' => {
                    out.push(c);
                    State::CharLiteral
                }
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    out.push(' ');
                    State::LineComment
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    out.push(' ');
                    State::BlockComment
                }
                _ => {
                    out.push(c);
                    State::Normal
                }
            },
            State::LineComment => {
                if c == '\n' {
                    out.push('\n');
                    State::Normal
                } else {
                    State::LineComment
                }
            }
            State::BlockComment => {
                if c == '\n' {
                    out.push('\n');
                    State::BlockComment
                } else if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    State::Normal
                } else {
                    State::BlockComment
                }
            }
            State::StringLiteral | State::CharLiteral => {
                out.push(c);
                if c == '\\' {
                    // Escapes pass through unexamined.
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                    state
                } else if state.closing_quote() == Some(c) {
                    State::Normal
                } else {
                    state
                }
            }
        };
    }

    out
}

/// Drops everything between matching `"` or `'` delimiters.
///
/// Only the quotes survive. A backslash consumes the character after it, so
/// an escaped quote does not close the literal. An unterminated literal loses
/// its body and gets no closing quote.
///
/// String and char literals are handled in one pass keyed on the opening
/// quote, not in two separate passes: the `"` in `'"'` never opens a string
/// literal, so code after it is kept.
#[must_use]
pub fn strip_literal_bodies(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars();

    while let Some(c) = chars.next() {
        out.push(c);
        if c != '"' && c != '\'' {
            continue;
        }
        while let Some(body) = chars.next() {
            if body == c {
                out.push(c);
                break;
            }
            if body == '\\' {
                chars.next();
            }
        }
    }

    out
}
