//! Accessibility tree of a select widget.
//!
//! Screen readers in a terminal have nothing like ARIA to inspect, so the
//! widget exposes the same information as plain data: the trigger is a
//! combobox with a listbox popup, and each rendered row is an option with a
//! selected flag.

use std::fmt;

/// Role of an accessible node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Expandable single-choice control (the trigger).
    Combobox,
    /// The option panel.
    Listbox,
    /// One option row.
    Option,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Combobox => "combobox",
            Role::Listbox => "listbox",
            Role::Option => "option",
        };
        f.write_str(name)
    }
}

/// The trigger node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerNode {
    /// Always [`Role::Combobox`].
    pub role: Role,
    /// Role of the popup it controls, always [`Role::Listbox`].
    pub has_popup: Role,
    /// Whether the popup is currently shown.
    pub expanded: bool,
    /// Whether the control accepts input.
    pub disabled: bool,
    /// The text currently shown on the trigger.
    pub text: String,
}

/// One option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionNode {
    /// Always [`Role::Option`].
    pub role: Role,
    /// Option value.
    pub value: String,
    /// Option label.
    pub label: String,
    /// Whether the option is selected.
    pub selected: bool,
}

/// Accessible view of the whole widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityTree {
    /// The trigger.
    pub trigger: TriggerNode,
    /// The listbox rows, present only while the panel is rendered.
    pub listbox: Option<Vec<OptionNode>>,
}

impl AccessibilityTree {
    /// The listbox role, if the panel is rendered.
    pub fn listbox_role(&self) -> Option<Role> {
        self.listbox.as_ref().map(|_| Role::Listbox)
    }

    /// Values of the rows reporting `selected`.
    pub fn selected_values(&self) -> Vec<&str> {
        self.listbox
            .iter()
            .flatten()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect()
    }
}
