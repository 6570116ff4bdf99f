//! Terminal rendering of form feedback.

use std::collections::HashMap;

use colored::Colorize;

use super::surface::{Feedback, FormSurface, Tone};

/// Surface that prints feedback as it is appended.
///
/// Printed lines cannot be taken back, so the surface keeps the latest
/// feedback per field and prints each new message once.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    values: HashMap<String, String>,
    feedback: HashMap<String, Feedback>,
    borders: HashMap<String, Tone>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store what the user typed into a field.
    pub fn set_value(&mut self, field: &str, value: String) {
        self.values.insert(field.to_string(), value);
    }

    /// Latest feedback under a field
    pub fn feedback(&self, field: &str) -> Option<&Feedback> {
        self.feedback.get(field)
    }

    /// Latest border tone of a field
    pub fn border(&self, field: &str) -> Option<Tone> {
        self.borders.get(field).copied()
    }
}

impl FormSurface for TerminalSurface {
    fn value(&self, field: &str) -> Option<String> {
        self.values.get(field).cloned()
    }

    fn clear_feedback(&mut self, field: &str) {
        self.feedback.remove(field);
    }

    fn append_feedback(&mut self, field: &str, feedback: Feedback) {
        let line = match feedback.tone {
            Tone::Success => format!("  ✔ {}", feedback.message).green(),
            Tone::Error => format!("  ✘ {}", feedback.message).red(),
        };
        println!("{}", line);
        self.feedback.insert(field.to_string(), feedback);
    }

    fn set_border(&mut self, field: &str, tone: Tone) {
        self.borders.insert(field.to_string(), tone);
    }
}
