use regex::Regex;

use super::SearchError;

/// Build the search expression for a key.
///
/// The key must be preceded by start-of-line, whitespace or a quote, and
/// followed by end-of-line, whitespace, a comma or a quote. Everything in the
/// key itself is matched literally.
pub fn key_pattern(key: &str) -> String {
    format!(r#"(?m)(?:^|[\s'"]){}(?:$|[\s,'"])"#, regex::escape(key))
}

/// A compiled [`key_pattern`].
#[derive(Debug, Clone)]
pub struct KeyPattern {
    regex: Regex,
}

impl KeyPattern {
    pub fn new(key: &str) -> Result<Self, SearchError> {
        let regex =
            Regex::new(&key_pattern(key)).map_err(|e| SearchError::Pattern(e.to_string()))?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}
