#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-select/")]

//! # bubbletea-select
//!
//! A dropdown select component for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The component follows the Elm Architecture: it owns its state, consumes
//! messages in `update()`, and renders in `view()`. It supports:
//!
//! - **Single and multi-select** with a change callback per committed change
//! - **Selection cap** for multi-select
//! - **Chips** with per-value remove buttons and an optional clear-all button
//! - **Extended rows** showing a description beneath each label
//! - **Mouse and keyboard** input, with close-on-outside-press
//! - **Disabled** mode
//! - **Accessibility data**: combobox / listbox / option roles and states
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_select::prelude::*;
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     document: Document,
//!     roles: Select,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let document = Document::new();
//!         let config = SelectConfig::new(vec![
//!             SelectOption::new("data-curation", "Data curation"),
//!             SelectOption::new("formal-analysis", "Formal analysis"),
//!         ])
//!         .multiple(true)
//!         .clearable(true);
//!
//!         let mut roles = Select::new(config, |change| log::info!("{change}"));
//!         roles.mount(&document);
//!         let cmd = roles.focus();
//!         (Self { document, roles }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.roles.update(&msg);
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         self.roles.view()
//!     }
//! }
//! ```
//!
//! Mouse events must be forwarded as [`select::PointerMsg`] or as raw
//! `crossterm::event::MouseEvent` values; key events arrive as
//! `bubbletea_rs::KeyMsg`.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and installs
//! no logger. Rejected additions and outside dismissals are logged at `debug`,
//! committed changes at `trace`.

pub mod error;
pub mod key;
pub mod select;

use bubbletea_rs::Cmd;

/// Focus management shared by interactive components.
///
/// A focused component handles key messages; a blurred one ignores them.
/// Pointer input does not depend on focus.
///
/// ```rust
/// use bubbletea_select::prelude::*;
///
/// let mut select = Select::new(SelectConfig::default(), |_| {});
/// assert!(!select.focused());
///
/// select.focus();
/// assert!(select.focused());
///
/// select.blur();
/// assert!(!select.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for the runtime to execute.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

pub use error::{Error, Result};
pub use key::{
    matches, new_binding, with_disabled, with_help, with_keys_str, Binding, Help as KeyHelp,
    KeyMap, KeyPress,
};
pub use select::{
    AccessibilityTree, Config as SelectConfig, CustomStyles, Document, Listener,
    Model as Select, PointerMsg, SelectKeyMap, SelectOption, SelectStyles, SelectionChange,
    StyleRegion,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_select::prelude::*;
///
/// let config = SelectConfig::new(vec![SelectOption::new("a", "Alpha")]);
/// let select = Select::new(config, |_change: SelectionChange| {});
/// assert_eq!(select.options().len(), 1);
/// ```
pub mod prelude {
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::select::{
        AccessibilityTree, Config as SelectConfig, CustomStyles, Document, Model as Select,
        PointerMsg, Role, SelectKeyMap, SelectOption, SelectStyles, SelectionChange,
        StyleRegion,
    };
    pub use crate::Component;
}
