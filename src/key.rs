//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more key presses under a single action together
//! with the help text shown for it. Components expose their bindings through a
//! struct implementing [`KeyMap`], which lets a host build contextual help.
//!
//! ```rust
//! use bubbletea_select::key::{self, Binding};
//! use crossterm::event::KeyCode;
//!
//! let confirm = Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm");
//! let close = key::new_binding(vec![
//!     key::with_keys_str(&["esc"]),
//!     key::with_help("esc", "close"),
//! ]);
//! assert_eq!(confirm.help().key, "enter");
//! assert_eq!(close.keys().len(), 1);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must accompany it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Required modifiers. `NONE` matches presses without ctrl or alt.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Parses a key description such as `"enter"`, `"space"`, `"ctrl+c"` or `"x"`.
    ///
    /// Returns `None` for descriptions that do not name a known key.
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = s;
        loop {
            if let Some(r) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("shift+") {
                modifiers |= KeyModifiers::SHIFT;
                rest = r;
            } else {
                break;
            }
        }

        let code = match rest {
            "enter" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "space" | " " => KeyCode::Char(' '),
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };
        Some(Self { code, modifiers })
    }

    fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        let significant = KeyModifiers::CONTROL | KeyModifiers::ALT;
        (msg.modifiers & significant) == (self.modifiers & significant)
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"↑/↓"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key codes or `(code, modifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// An option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Adds keys given by their string descriptions. Unknown descriptions are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    Box::new(move |b: &mut Binding| b.keys.extend(parsed))
}

/// Sets the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Reports whether `msg` triggers any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Implemented by key map structs so hosts can render help for them.
pub trait KeyMap {
    /// Bindings for a compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(KeyPress::parse("enter"), Some(KeyCode::Enter.into()));
        assert_eq!(KeyPress::parse("space"), Some(KeyCode::Char(' ').into()));
        assert_eq!(KeyPress::parse("x"), Some(KeyCode::Char('x').into()));
        assert_eq!(
            KeyPress::parse("ctrl+c"),
            Some((KeyCode::Char('c'), KeyModifiers::CONTROL).into())
        );
        assert_eq!(KeyPress::parse("hyper"), None);
    }

    #[test]
    fn test_binding_matches_ignores_shift() {
        let b = new_binding(vec![with_keys_str(&["down"]), with_help("↓", "down")]);
        assert!(b.matches(&key(KeyCode::Down, KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Down, KeyModifiers::SHIFT)));
        assert!(!b.matches(&key(KeyCode::Down, KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Up, KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]);
        assert!(b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));

        let d = new_binding(vec![with_keys_str(&["esc"]), with_disabled()]);
        assert!(!d.enabled());
    }

    #[test]
    fn test_matches_any() {
        let a = Binding::new(vec![KeyCode::Esc]);
        let b = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        let msg = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches(&msg, &[&a, &b]));
        assert!(!matches(&msg, &[&a]));
    }
}
