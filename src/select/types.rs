//! Core value types shared by the select component.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One selectable entry.
///
/// Options are supplied by the host and never modified by the widget. The
/// `value` identifies the option and must be unique within one widget; the
/// `label` is what the user sees.
///
/// # Examples
///
/// ```rust
/// use bubbletea_select::select::SelectOption;
///
/// let opt = SelectOption::new("data-curation", "Data curation")
///     .with_description("Managing and organizing data.");
/// assert_eq!(opt.value, "data-curation");
/// assert_eq!(opt.description.as_deref(), Some("Managing and organizing data."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Identifier reported through the change callback.
    pub value: String,
    /// Text shown in the trigger and the option row.
    pub label: String,
    /// Secondary text, shown beneath the label in extended mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SelectOption {
    /// Creates an option without a description.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Payload delivered to the change callback.
///
/// The variant follows the widget's mode, never the size of the selection:
/// a single-select widget always reports `Single`, a multi-select widget
/// always reports `Multiple` (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// The newly selected value, or `None` after clearing.
    Single(Option<String>),
    /// Every selected value in selection order.
    Multiple(Vec<String>),
}

impl SelectionChange {
    /// The selected values as a slice-like vector regardless of mode.
    pub fn values(&self) -> Vec<&str> {
        match self {
            SelectionChange::Single(v) => v.iter().map(String::as_str).collect(),
            SelectionChange::Multiple(vs) => vs.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for SelectionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionChange::Single(Some(v)) => write!(f, "{v:?}"),
            SelectionChange::Single(None) => write!(f, "null"),
            SelectionChange::Multiple(vs) => write!(f, "{vs:?}"),
        }
    }
}

/// Callback invoked synchronously on every committed selection change.
pub type OnChange = Box<dyn FnMut(SelectionChange) + Send>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_deserializes_without_description() {
        let opt: SelectOption =
            serde_json::from_str(r#"{"value":"a","label":"Alpha"}"#).expect("valid json");
        assert_eq!(opt, SelectOption::new("a", "Alpha"));
    }

    #[test]
    fn test_change_display_matches_console_output() {
        assert_eq!(SelectionChange::Single(None).to_string(), "null");
        assert_eq!(
            SelectionChange::Single(Some("a".into())).to_string(),
            "\"a\""
        );
        assert_eq!(
            SelectionChange::Multiple(vec!["a".into(), "b".into()]).to_string(),
            "[\"a\", \"b\"]"
        );
    }

    #[test]
    fn test_change_values() {
        assert!(SelectionChange::Single(None).values().is_empty());
        assert_eq!(
            SelectionChange::Multiple(vec!["x".into()]).values(),
            vec!["x"]
        );
    }
}
