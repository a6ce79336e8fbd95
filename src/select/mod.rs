//! Dropdown select component with single and multi-select modes.
//!
//! The widget renders a trigger showing the current selection (or a
//! placeholder) and, while open, a panel listing every option. Selection
//! changes are reported to a host callback as a [`SelectionChange`].
//!
//! ## Modes
//!
//! - **Single**: clicking an option makes it the selection and closes the panel.
//!   The callback receives `Single(Some(value))`, or `Single(None)` after
//!   clearing.
//! - **Multiple**: clicking an option toggles it; the panel stays open. Each
//!   selected value shows as a chip with its own remove button. The callback
//!   receives every selected value in selection order. With a cap set,
//!   clicks that would exceed it are ignored.
//!
//! ## Open state
//!
//! ```text
//!            trigger click                 trigger click
//!   Closed ----------------> Open ----------------------> Closed
//!     ^                       |  single-mode select /
//!     +-----------------------+  outside press / esc
//! ```
//!
//! A disabled widget stays closed and ignores all input.
//!
//! ## Outside presses
//!
//! Presses outside the widget close it only while it is mounted on a
//! [`pointer::Document`]. The subscription is a guard released on unmount or
//! drop.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_select::select::{self, pointer::{Document, PointerMsg}, Config, SelectOption};
//! use bubbletea_rs::Msg;
//!
//! let document = Document::new();
//! let config = Config::new(vec![
//!     SelectOption::new("data-curation", "Data curation"),
//!     SelectOption::new("funding-acquisition", "Funding acquisition"),
//! ])
//! .default_value("data-curation");
//!
//! let mut widget = select::new(config, |change| println!("{change}"));
//! widget.mount(&document);
//! widget.set_position(0, 0);
//!
//! // Open, then click the second option row (row 2: trigger is row 0).
//! widget.update(&(Box::new(PointerMsg::click(1, 0)) as Msg));
//! assert!(widget.is_open());
//! widget.update(&(Box::new(PointerMsg::click(3, 2)) as Msg));
//!
//! assert_eq!(widget.selected_values(), ["funding-acquisition"]);
//! assert!(!widget.is_open());
//! ```

pub mod a11y;
pub mod config;
pub mod keys;
pub mod layout;
pub mod pointer;
pub mod selection;
pub mod style;

mod model;
mod rendering;
mod types;


pub use a11y::{AccessibilityTree, OptionNode, Role, TriggerNode};
pub use config::{Config, CustomStyles, StyleRegion, DEFAULT_PLACEHOLDER, DEFAULT_WIDTH};
pub use keys::SelectKeyMap;
pub use layout::{Layout, Rect, Target};
pub use model::Model;
pub use pointer::{Document, Listener, PointerKind, PointerMsg};
pub use selection::{Selection, Toggle};
pub use style::SelectStyles;
pub use types::{OnChange, SelectOption, SelectionChange};

/// Creates a select widget. Shorthand for [`Model::new`].
pub fn new<F>(config: Config, on_change: F) -> Model
where
    F: FnMut(SelectionChange) + Send + 'static,
{
    Model::new(config, on_change)
}
