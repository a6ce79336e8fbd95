//! View rendering for the select component.
//!
//! Rendering follows the geometry computed by [`Layout`], so every clickable
//! cell in the output is where `update` expects it.

use super::a11y::{AccessibilityTree, OptionNode, Role, TriggerNode};
use super::layout::{truncate, Layout, GUTTER};
use super::Model;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

const REMOVE: &str = "×";
const OPEN: &str = "▴";
const CLOSED: &str = "▾";
const CURSOR: &str = "> ";
const CHECKED: &str = "[x] ";
const UNCHECKED: &str = "[ ] ";

impl Model {
    /// Renders the widget.
    ///
    /// The trigger comes first: the placeholder, the selected label, or one
    /// chip per selected value, followed by the clear-all button (when shown)
    /// and the open indicator. While open, one row per option follows, plus a
    /// description row per option in extended mode.
    pub fn view(&self) -> String {
        let layout = self.layout();
        let mut lines = self.view_trigger(&layout);
        if self.is_open() {
            lines.extend(self.view_options(&layout));
        }
        lines.join("\n")
    }

    fn style_or_disabled(&self, style: &Style) -> Style {
        if self.config.disabled {
            self.styles.disabled.clone()
        } else {
            style.clone()
        }
    }

    fn view_trigger(&self, layout: &Layout) -> Vec<String> {
        let rows = layout.trigger_rows();
        let mut lines = vec![String::new(); rows];
        let mut used = vec![0usize; rows];

        if self.config.is_multiple && !self.selection.is_empty() {
            let chip_style = self.style_or_disabled(&self.styles.chip);
            let remove_style = self.style_or_disabled(&self.styles.chip_remove);
            for chip in layout.chips() {
                let line = &mut lines[chip.row];
                line.push_str(&" ".repeat(chip.col - used[chip.row]));
                line.push_str(&chip_style.clone().render(&format!("{} ", chip.label)));
                line.push_str(&remove_style.clone().render(REMOVE));
                used[chip.row] = chip.col + chip.width();
            }
        } else {
            let (text, style) = if self.selection.is_empty() {
                (self.config.placeholder.as_str(), &self.styles.placeholder)
            } else {
                let label = self
                    .selection
                    .first()
                    .and_then(|v| self.label_of(v))
                    .unwrap_or("");
                (label, &self.styles.value)
            };
            let text = truncate(text, layout.content_width());
            if !text.is_empty() {
                lines[0].push_str(&self.style_or_disabled(style).render(&text));
            }
            used[0] = text.width();
        }

        for (row, line) in lines.iter_mut().enumerate() {
            line.push_str(&" ".repeat(layout.content_width().saturating_sub(used[row])));
            if row == 0 {
                let clear = if layout.clear_col().is_some() {
                    self.style_or_disabled(&self.styles.clear).render(REMOVE)
                } else {
                    " ".to_string()
                };
                let indicator = if self.is_open() { OPEN } else { CLOSED };
                line.push(' ');
                line.push_str(&clear);
                line.push(' ');
                line.push_str(&self.style_or_disabled(&self.styles.indicator).render(indicator));
            } else {
                line.push_str(&" ".repeat(GUTTER));
            }
        }
        lines
    }

    fn view_options(&self, layout: &Layout) -> Vec<String> {
        let mut lines = Vec::new();
        let prefix_width = CURSOR.width()
            + if self.config.is_multiple {
                CHECKED.width()
            } else {
                0
            };
        let text_width = layout.width().saturating_sub(prefix_width);

        for (i, opt) in self.config.options.iter().enumerate() {
            let selected = self.selection.contains(&opt.value);
            let mut line = String::new();

            if self.focus && i == self.highlight {
                line.push_str(&self.styles.cursor.clone().render(CURSOR));
            } else {
                line.push_str(&" ".repeat(CURSOR.width()));
            }
            if self.config.is_multiple {
                let mark = if selected { CHECKED } else { UNCHECKED };
                line.push_str(&self.styles.checkbox.clone().render(mark));
            }

            let label_style = if selected {
                &self.styles.option_selected
            } else {
                &self.styles.option
            };
            let label = truncate(&opt.label, text_width);
            if !label.is_empty() {
                line.push_str(&label_style.clone().render(&label));
            }
            lines.push(line);

            if let Some(desc) = opt.description.as_deref().filter(|_| self.shows_description(opt)) {
                let desc = truncate(desc, text_width);
                let mut line = " ".repeat(prefix_width);
                if !desc.is_empty() {
                    line.push_str(&self.styles.description.clone().render(&desc));
                }
                lines.push(line);
            }
        }
        lines
    }

    /// The text shown on the trigger, without styling.
    pub fn trigger_text(&self) -> String {
        if self.selection.is_empty() {
            self.config.placeholder.clone()
        } else if self.config.is_multiple {
            self.selected_labels().join(", ")
        } else {
            self.selected_labels().first().copied().unwrap_or("").to_string()
        }
    }

    /// Roles and states of the rendered widget.
    pub fn accessibility(&self) -> AccessibilityTree {
        let listbox = self.is_open().then(|| {
            self.config
                .options
                .iter()
                .map(|opt| OptionNode {
                    role: Role::Option,
                    value: opt.value.clone(),
                    label: opt.label.clone(),
                    selected: self.selection.contains(&opt.value),
                })
                .collect()
        });
        AccessibilityTree {
            trigger: TriggerNode {
                role: Role::Combobox,
                has_popup: Role::Listbox,
                expanded: self.is_open(),
                disabled: self.config.disabled,
                text: self.trigger_text(),
            },
            listbox,
        }
    }
}
