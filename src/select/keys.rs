//! Key bindings for the select component.
//!
//! Keys are only handled while the widget is focused and enabled.
//!
//! - **Open / choose**: `enter` or `space` opens a closed panel, or selects the
//!   highlighted option of an open one
//! - **Move highlight**: `↑` / `↓`
//! - **Close**: `esc`
//! - **Clear all**: `delete` (clearable widgets only)
//! - **Remove last**: `backspace` removes the most recent chip (multi-select)

use crate::key;

/// Key bindings for the select component.
#[derive(Debug, Clone)]
pub struct SelectKeyMap {
    /// Opens the panel, or selects the highlighted option while open.
    pub choose: key::Binding,
    /// Moves the highlight up.
    pub up: key::Binding,
    /// Moves the highlight down.
    pub down: key::Binding,
    /// Closes the panel.
    pub close: key::Binding,
    /// Clears the selection.
    pub clear: key::Binding,
    /// Removes the most recently selected value.
    pub remove_last: key::Binding,
}

impl Default for SelectKeyMap {
    fn default() -> Self {
        Self {
            choose: key::new_binding(vec![
                key::with_keys_str(&["enter", "space"]),
                key::with_help("enter", "select"),
            ]),
            up: key::new_binding(vec![
                key::with_keys_str(&["up"]),
                key::with_help("↑", "up"),
            ]),
            down: key::new_binding(vec![
                key::with_keys_str(&["down"]),
                key::with_help("↓", "down"),
            ]),
            close: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "close"),
            ]),
            clear: key::new_binding(vec![
                key::with_keys_str(&["delete"]),
                key::with_help("del", "clear"),
            ]),
            remove_last: key::new_binding(vec![
                key::with_keys_str(&["backspace"]),
                key::with_help("⌫", "remove last"),
            ]),
        }
    }
}

impl key::KeyMap for SelectKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.choose, &self.up, &self.down, &self.close]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.up, &self.down, &self.choose, &self.close],
            vec![&self.clear, &self.remove_last],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyMap;
    use bubbletea_rs::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_default_bindings() {
        let km = SelectKeyMap::default();
        let space = KeyMsg {
            key: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
        };
        let enter = KeyMsg {
            key: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
        };
        assert!(km.choose.matches(&space));
        assert!(km.choose.matches(&enter));
        assert!(!km.close.matches(&enter));
        assert_eq!(km.clear.help().desc, "clear");
    }

    #[test]
    fn test_help_groups() {
        let km = SelectKeyMap::default();
        assert_eq!(km.short_help().len(), 4);
        assert_eq!(km.full_help().len(), 2);
    }
}
