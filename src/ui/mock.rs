//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.

use super::UserInterface;

/// Captures every message by kind.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    pairs: Vec<(String, String)>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain messages, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Success messages, in order.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Warning messages, in order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Error messages, in order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Value printed for `key`, if any.
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.pairs.push((key.to_string(), value.to_string()));
    }
}
