//! Phrase structure recognition.
//!
//! Rules are tried in order:
//! 1. empty or whitespace → `EmptyInput`
//! 2. leading "not " (any number of times) → negation of the remainder
//! 3. the whole phrase, as written or with its article stripped, names a
//!    concept → single
//! 4. " and " or "," → conjunction
//! 5. first " of " → modifier ("X") and head ("Y")
//! 6. exactly two words → attribute and noun
//! 7. anything else → single
//!
//! Keyword matching is ASCII case-insensitive; component text keeps the
//! caller's spelling.

use crate::error::{EngineError, EngineResult};

/// Articles removed from the start of a component.
const ARTICLES: &[&str] = &["the ", "a ", "an "];

/// A phrase broken into its structural parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedPhrase {
    /// `depth` leading "not "s; `rest` is still to be composed.
    Negation { depth: usize, rest: String },
    Single(String),
    Conjunction(Vec<String>),
    ModifierHead { modifier: String, head: String },
    AttributeNoun { attribute: String, noun: String },
}

/// Remove one leading article ("the", "a", "an").
pub fn strip_articles(text: &str) -> &str {
    let text = text.trim();
    let lower = text.to_ascii_lowercase();
    for article in ARTICLES {
        if lower.starts_with(article) {
            return text[article.len()..].trim_start();
        }
    }
    text
}

/// Whether `text` starts with `prefix`, ignoring ASCII case.
fn starts_with_ci(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Split `text` on `separator`, matching ASCII case-insensitively.
fn split_ci<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let lower = text.to_ascii_lowercase();
    let mut parts = Vec::new();
    let mut start = 0;
    while let Some(offset) = lower[start..].find(separator) {
        parts.push(&text[start..start + offset]);
        start += offset + separator.len();
    }
    parts.push(&text[start..]);
    parts
}

/// Recognize the structure of `phrase`.
///
/// `resolves` answers whether a name is a known concept; it is consulted
/// only for the whole phrase, as written and without its article.
///
/// # Errors
/// - `EngineError::EmptyInput` for an empty phrase or an empty list
pub fn parse<F>(phrase: &str, resolves: F) -> EngineResult<ParsedPhrase>
where
    F: Fn(&str) -> bool,
{
    let trimmed = phrase.trim();
    if trimmed.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let mut depth = 0;
    let mut rest = trimmed;
    while starts_with_ci(rest, "not ") {
        depth += 1;
        rest = rest[4..].trim_start();
    }
    if depth > 0 {
        return Ok(ParsedPhrase::Negation {
            depth,
            rest: rest.to_string(),
        });
    }

    if resolves(trimmed) {
        return Ok(ParsedPhrase::Single(trimmed.to_string()));
    }
    let body = strip_articles(trimmed);
    if body != trimmed && resolves(body) {
        return Ok(ParsedPhrase::Single(body.to_string()));
    }

    let lower = body.to_ascii_lowercase();

    if lower.contains(" and ") || body.contains(',') {
        return conjunction(body);
    }

    if let Some(idx) = lower.find(" of ") {
        let modifier = strip_articles(&body[..idx]);
        let head = strip_articles(&body[idx + 4..]);
        if !modifier.is_empty() && !head.is_empty() {
            return Ok(ParsedPhrase::ModifierHead {
                modifier: modifier.to_string(),
                head: head.to_string(),
            });
        }
    }

    let words: Vec<&str> = body.split_whitespace().collect();
    if let [attribute, noun] = words.as_slice() {
        return Ok(ParsedPhrase::AttributeNoun {
            attribute: attribute.to_string(),
            noun: noun.to_string(),
        });
    }

    Ok(ParsedPhrase::Single(body.to_string()))
}

fn conjunction(body: &str) -> EngineResult<ParsedPhrase> {
    let mut parts: Vec<String> = Vec::new();
    for piece in body.split(',') {
        let piece = piece.trim();
        // "X, Y, and Z"
        let piece = if starts_with_ci(piece, "and ") {
            &piece[4..]
        } else {
            piece
        };
        for part in split_ci(piece, " and ") {
            let part = strip_articles(part);
            if !part.is_empty() {
                parts.push(part.to_string());
            }
        }
    }

    match parts.len() {
        0 => Err(EngineError::EmptyInput),
        1 => Ok(ParsedPhrase::Single(parts.remove(0))),
        _ => Ok(ParsedPhrase::Conjunction(parts)),
    }
}
