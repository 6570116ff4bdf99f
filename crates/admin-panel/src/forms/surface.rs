//! Rendering surface for form fields.
//!
//! A surface owns the live field values and the feedback shown under each
//! field. Bindings only read values and write feedback through this trait.

use std::collections::BTreeMap;

/// Visual tone of a feedback message and field border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    /// CSS-style color name
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Success => "green",
            Tone::Error => "red",
        }
    }
}

/// A message rendered under a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub tone: Tone,
    pub message: String,
}

/// Where form values live and feedback is drawn.
pub trait FormSurface {
    /// Live value of a field, `None` when the field does not exist
    fn value(&self, field: &str) -> Option<String>;

    /// Remove every feedback message under a field
    fn clear_feedback(&mut self, field: &str);

    /// Append a feedback message under a field
    fn append_feedback(&mut self, field: &str, feedback: Feedback);

    /// Recolor a field's border
    fn set_border(&mut self, field: &str, tone: Tone);
}

/// State of one field on a [`MemorySurface`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldNode {
    pub value: String,
    pub border: Option<Tone>,
    pub feedback: Vec<Feedback>,
}

/// In-memory surface, for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    fields: BTreeMap<String, FieldNode>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with an initial value.
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.set_value(name, value);
        self
    }

    /// Type into a field, creating it when missing.
    pub fn set_value(&mut self, name: &str, value: &str) {
        self.fields.entry(name.to_string()).or_default().value = value.to_string();
    }

    pub fn field(&self, name: &str) -> Option<&FieldNode> {
        self.fields.get(name)
    }

    /// Feedback currently shown under a field
    pub fn feedback(&self, name: &str) -> &[Feedback] {
        self.fields
            .get(name)
            .map(|node| node.feedback.as_slice())
            .unwrap_or(&[])
    }
}

impl FormSurface for MemorySurface {
    fn value(&self, field: &str) -> Option<String> {
        self.fields.get(field).map(|node| node.value.clone())
    }

    fn clear_feedback(&mut self, field: &str) {
        if let Some(node) = self.fields.get_mut(field) {
            node.feedback.clear();
        }
    }

    fn append_feedback(&mut self, field: &str, feedback: Feedback) {
        if let Some(node) = self.fields.get_mut(field) {
            node.feedback.push(feedback);
        }
    }

    fn set_border(&mut self, field: &str, tone: Tone) {
        if let Some(node) = self.fields.get_mut(field) {
            node.border = Some(tone);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_colors() {
        assert_eq!(Tone::Success.color(), "green");
        assert_eq!(Tone::Error.color(), "red");
    }

    #[test]
    fn test_missing_field_is_ignored() {
        let mut surface = MemorySurface::new();
        surface.append_feedback(
            "ghost",
            Feedback {
                tone: Tone::Error,
                message: "x".to_string(),
            },
        );
        assert!(surface.feedback("ghost").is_empty());
        assert_eq!(surface.value("ghost"), None);
    }

    #[test]
    fn test_append_accumulates_until_cleared() {
        let mut surface = MemorySurface::new().with_field("id", "123");
        let feedback = Feedback {
            tone: Tone::Success,
            message: "ok".to_string(),
        };
        surface.append_feedback("id", feedback.clone());
        surface.append_feedback("id", feedback);
        assert_eq!(surface.feedback("id").len(), 2);

        surface.clear_feedback("id");
        assert!(surface.feedback("id").is_empty());
    }
}
