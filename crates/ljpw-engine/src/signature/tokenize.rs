//! Text tokenization shared by every evidence layer.
//!
//! Tokens are lowercase runs of alphanumeric characters. Apostrophes inside a
//! word are dropped ("lord's" → "lords"); every other character separates
//! tokens.

use serde::Serialize;

/// Function words that carry no axis evidence on their own.
///
/// They still participate in phrase matching ("kingdom of god") but are
/// excluded from content-token counts.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "in", "into", "is",
    "it", "its", "of", "on", "or", "so", "that", "the", "their", "this", "to", "was", "were",
    "with",
];

/// Whether `token` (already lowercase) is a stopword.
#[inline]
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Text split into lowercase tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenizedText {
    tokens: Vec<String>,
    content: usize,
}

impl TokenizedText {
    /// Tokenize `text`.
    ///
    /// # Example
    ///
    /// ```
    /// use ljpw_engine::signature::TokenizedText;
    ///
    /// let text = TokenizedText::new("The Kingdom of God!");
    /// assert_eq!(text.tokens(), &["the", "kingdom", "of", "god"]);
    /// assert_eq!(text.content_count(), 2);
    /// ```
    pub fn new(text: &str) -> Self {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for ch in text.chars() {
            if ch.is_alphanumeric() {
                current.extend(ch.to_lowercase());
            } else if ch == '\'' || ch == '\u{2019}' {
                // In-word apostrophe: skip without splitting.
                continue;
            } else if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }

        let content = tokens.iter().filter(|t| !is_stopword(t)).count();
        Self { tokens, content }
    }

    /// All tokens in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens that are not stopwords, in order.
    pub fn content_tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !is_stopword(t))
    }

    /// Number of content tokens.
    #[inline]
    pub fn content_count(&self) -> usize {
        self.content
    }

    /// Number of tokens, stopwords included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens `start..start + n` joined with `_`, the normalized key form.
    pub fn window_key(&self, start: usize, n: usize) -> Option<String> {
        let end = start.checked_add(n)?;
        if n == 0 || end > self.tokens.len() {
            return None;
        }
        Some(self.tokens[start..end].join("_"))
    }
}

impl From<&str> for TokenizedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
