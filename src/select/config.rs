//! Construction-time configuration for the select component.
//!
//! [`Config`] carries every behavioral setting of a widget. It is read once by
//! [`Model::new`](super::Model::new) and never changes afterwards. Field names
//! deserialize from camelCase so a configuration can be written in the same
//! shape as a web component's props:
//!
//! ```rust
//! use bubbletea_select::select::Config;
//!
//! let config = Config::from_json(r#"{
//!     "options": [
//!         { "value": "data-curation", "label": "Data curation" },
//!         { "value": "formal-analysis", "label": "Formal analysis" }
//!     ],
//!     "isMultiple": true,
//!     "maxSelections": 3,
//!     "placeholder": "Select roles..."
//! }"#).unwrap();
//!
//! assert!(config.is_multiple);
//! assert_eq!(config.max_selections, Some(3));
//! assert!(!config.is_clearable);
//! ```

use super::types::SelectOption;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

/// Placeholder shown when nothing is selected and none was configured.
pub const DEFAULT_PLACEHOLDER: &str = "Select...";

/// Width in terminal cells used when none was configured.
pub const DEFAULT_WIDTH: usize = 40;

/// A named part of the rendered widget that can carry a custom style token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleRegion {
    /// The whole widget.
    Container,
    /// The trigger row(s).
    Input,
    /// The option panel.
    Dropdown,
    /// Each option row.
    Option,
    /// Each chip in multi-select mode.
    SelectedItem,
}

/// Style tokens keyed by render region.
///
/// Tokens are opaque to the widget's behavior. The terminal renderer reads a
/// token as a color (`"#7D56F4"`, `"212"`) for the region it is attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CustomStyles(BTreeMap<StyleRegion, String>);

impl CustomStyles {
    /// Creates an empty set of tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `token` to `region`, replacing any previous token.
    pub fn with(mut self, region: StyleRegion, token: impl Into<String>) -> Self {
        self.0.insert(region, token.into());
        self
    }

    /// The token for `region`, unchanged.
    pub fn get(&self, region: StyleRegion) -> Option<&str> {
        self.0.get(&region).map(String::as_str)
    }

    /// Iterates regions and tokens in region order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleRegion, &str)> {
        self.0.iter().map(|(r, t)| (*r, t.as_str()))
    }

    /// Whether no token is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Behavioral configuration of one select widget.
///
/// Every field has a default, so a configuration is usually built from
/// [`Config::new`] and the builder methods.
///
/// # Examples
///
/// ```rust
/// use bubbletea_select::select::{Config, SelectOption};
///
/// let config = Config::new(vec![
///     SelectOption::new("a", "Alpha"),
///     SelectOption::new("b", "Beta"),
/// ])
/// .multiple(true)
/// .max_selections(1)
/// .clearable(true);
///
/// assert_eq!(config.placeholder, "Select...");
/// assert_eq!(config.max_selections, Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Options in presentation order.
    pub options: Vec<SelectOption>,
    /// Show each option's description beneath its label.
    pub extended: bool,
    /// Initial selection. An empty string counts as no default.
    pub default_value: Option<String>,
    /// Allow more than one selected value.
    pub is_multiple: bool,
    /// Start with the option panel open.
    pub is_open: bool,
    /// Show a clear-all control while something is selected.
    pub is_clearable: bool,
    /// Upper bound on selected values in multi-select mode.
    pub max_selections: Option<usize>,
    /// Text shown while nothing is selected.
    pub placeholder: String,
    /// Suppress all interaction.
    pub disabled: bool,
    /// Per-region style tokens.
    pub custom_styles: CustomStyles,
    /// Width of the widget in terminal cells.
    pub width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            extended: false,
            default_value: None,
            is_multiple: false,
            is_open: false,
            is_clearable: false,
            max_selections: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            disabled: false,
            custom_styles: CustomStyles::default(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl Config {
    /// Creates a configuration with the given options and all defaults.
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Parses a JSON configuration and checks that option values are unique.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the document is not valid JSON
    /// for this shape, and [`Error::DuplicateValue`] when two options share a
    /// value.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that option values are unique.
    ///
    /// The default value is not checked against the options.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for opt in &self.options {
            if !seen.insert(opt.value.as_str()) {
                return Err(Error::DuplicateValue(opt.value.clone()));
            }
        }
        Ok(())
    }

    /// Enables description rows.
    pub fn extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    /// Sets the initial selection.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Switches between single- and multi-select.
    pub fn multiple(mut self, is_multiple: bool) -> Self {
        self.is_multiple = is_multiple;
        self
    }

    /// Starts with the panel open.
    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    /// Shows the clear-all control.
    pub fn clearable(mut self, is_clearable: bool) -> Self {
        self.is_clearable = is_clearable;
        self
    }

    /// Caps the number of selected values in multi-select mode.
    pub fn max_selections(mut self, max: usize) -> Self {
        self.max_selections = Some(max);
        self
    }

    /// Sets the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Disables the widget.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the per-region style tokens.
    pub fn custom_styles(mut self, styles: CustomStyles) -> Self {
        self.custom_styles = styles;
        self
    }

    /// Sets the width in terminal cells.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// The initial selection, with an empty default treated as absent.
    pub(super) fn initial_value(&self) -> Option<&str> {
        self.default_value.as_deref().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.options.is_empty());
        assert!(!config.extended);
        assert!(!config.is_multiple);
        assert!(!config.is_open);
        assert!(!config.is_clearable);
        assert!(!config.disabled);
        assert_eq!(config.max_selections, None);
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert!(config.custom_styles.is_empty());
    }

    #[test]
    fn test_from_json_reads_camel_case_props() {
        let config = Config::from_json(
            r##"{
                "options": [
                    {"value": "a", "label": "Alpha", "description": "first"}
                ],
                "extended": true,
                "defaultValue": "a",
                "isClearable": true,
                "isOpen": true,
                "customStyles": {"selectedItem": "#ff0000", "dropdown": "240"}
            }"##,
        )
        .expect("valid config");

        assert!(config.extended);
        assert!(config.is_clearable);
        assert!(config.is_open);
        assert_eq!(config.default_value.as_deref(), Some("a"));
        assert_eq!(
            config.custom_styles.get(StyleRegion::SelectedItem),
            Some("#ff0000")
        );
        assert_eq!(config.custom_styles.get(StyleRegion::Dropdown), Some("240"));
        assert_eq!(config.custom_styles.get(StyleRegion::Input), None);
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_from_json_rejects_duplicate_values() {
        let err = Config::from_json(
            r#"{"options": [{"value": "a", "label": "A"}, {"value": "a", "label": "B"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateValue(ref v) if v == "a"));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = Config::from_json(r#"{"options": 3}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_unknown_default_is_accepted() {
        let config = Config::new(vec![SelectOption::new("a", "A")]).default_value("zzz");
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_value(), Some("zzz"));
    }

    #[test]
    fn test_empty_default_counts_as_none() {
        let config = Config::default().default_value("");
        assert_eq!(config.initial_value(), None);
    }
}
