//! Class token list
//!
//! Space-separated class tokens attached to an element.

/// Ordered set of class tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Create empty token list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from space-separated string
    pub fn from_string(s: &str) -> Self {
        let mut list = Self::new();
        for token in s.split_whitespace() {
            list.add(token);
        }
        list
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check if token exists
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add a token. Returns `true` if the list changed.
    pub fn add(&mut self, token: &str) -> bool {
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove a token. Returns `true` if the list changed.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        before != self.tokens.len()
    }

    /// Get value as string
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
