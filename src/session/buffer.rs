//! Reconstruction of the reply text from discrete streamed tokens.

/// Tokens that attach to the preceding word without a space.
pub const JOIN_PUNCTUATION: [char; 4] = [',', '.', '!', '?'];

/// Accumulated reply for the current turn.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResponseBuffer {
    text: String,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one token using the detokenization rule:
    /// - the first token is taken as-is (no leading space);
    /// - a lone `,` `.` `!` or `?` hugs the preceding text;
    /// - anything else is separated by a single space.
    pub fn push_token(&mut self, token: &str) {
        if !self.text.is_empty() && !is_join_punctuation(token) {
            self.text.push(' ');
        }
        self.text.push_str(token);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// True when `token` is exactly one joining punctuation character.
pub fn is_join_punctuation(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => JOIN_PUNCTUATION.contains(&c),
        _ => false,
    }
}
