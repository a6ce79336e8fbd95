//! Styles for the select component.
//!
//! Defaults use `AdaptiveColor` so the widget reads well on light and dark
//! terminals. [`SelectStyles::with_custom`] layers the per-region tokens of a
//! [`CustomStyles`] on top, reading each token as a color.

use super::config::{CustomStyles, StyleRegion};
use lipgloss_extras::prelude::*;

fn subdued() -> AdaptiveColor {
    AdaptiveColor {
        Light: "#9B9B9B",
        Dark: "#5C5C5C",
    }
}

/// Every style the select component renders with.
#[derive(Debug, Clone)]
pub struct SelectStyles {
    /// The selected label in single-select mode.
    pub value: Style,
    /// Placeholder text.
    pub placeholder: Style,
    /// Chip label in multi-select mode.
    pub chip: Style,
    /// Chip remove button.
    pub chip_remove: Style,
    /// Clear-all button.
    pub clear: Style,
    /// Open/closed indicator.
    pub indicator: Style,
    /// Unselected option label.
    pub option: Style,
    /// Selected option label.
    pub option_selected: Style,
    /// Option description.
    pub description: Style,
    /// Checkbox in multi-select mode.
    pub checkbox: Style,
    /// Keyboard highlight marker.
    pub cursor: Style,
    /// Everything while disabled.
    pub disabled: Style,
}

impl Default for SelectStyles {
    fn default() -> Self {
        Self {
            value: Style::new().foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#DDDDDD",
            }),
            placeholder: Style::new().foreground(subdued()),
            chip: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1A1A1A",
                    Dark: "#FFFDF5",
                })
                .background(AdaptiveColor {
                    Light: "#E5E5E5",
                    Dark: "#3C3C3C",
                }),
            chip_remove: Style::new().foreground(AdaptiveColor {
                Light: "#6B6B6B",
                Dark: "#A0A0A0",
            }),
            clear: Style::new().foreground(AdaptiveColor {
                Light: "#6B6B6B",
                Dark: "#A0A0A0",
            }),
            indicator: Style::new().foreground(subdued()),
            option: Style::new().foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#DDDDDD",
            }),
            option_selected: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1D4ED8",
                    Dark: "#93C5FD",
                })
                .bold(true),
            description: Style::new().foreground(AdaptiveColor {
                Light: "#6B6B6B",
                Dark: "#8A8A8A",
            }),
            checkbox: Style::new().foreground(AdaptiveColor {
                Light: "#1D4ED8",
                Dark: "#93C5FD",
            }),
            cursor: Style::new().foreground(Color::from("#EE6FF8")),
            disabled: Style::new().foreground(subdued()).faint(true),
        }
    }
}

impl SelectStyles {
    /// Applies custom tokens as foreground colors.
    ///
    /// | Region | Styles |
    /// |---|---|
    /// | `container` | indicator, clear button |
    /// | `input` | value, placeholder |
    /// | `dropdown` | option, description, checkbox |
    /// | `option` | option (after `dropdown`) |
    /// | `selectedItem` | chip, chip remove button |
    pub fn with_custom(mut self, custom: &CustomStyles) -> Self {
        for (region, token) in custom.iter() {
            let color = Color::from(token);
            match region {
                StyleRegion::Container => {
                    self.indicator = self.indicator.foreground(color.clone());
                    self.clear = self.clear.foreground(color);
                }
                StyleRegion::Input => {
                    self.value = self.value.foreground(color.clone());
                    self.placeholder = self.placeholder.foreground(color);
                }
                StyleRegion::Dropdown => {
                    self.option = self.option.foreground(color.clone());
                    self.description = self.description.foreground(color.clone());
                    self.checkbox = self.checkbox.foreground(color);
                }
                StyleRegion::Option => {
                    self.option = self.option.foreground(color);
                }
                StyleRegion::SelectedItem => {
                    self.chip = self.chip.foreground(color.clone());
                    self.chip_remove = self.chip_remove.foreground(color);
                }
            }
        }
        self
    }
}
