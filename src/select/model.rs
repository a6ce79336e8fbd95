//! The select widget model: state, operations and message handling.

use super::config::Config;
use super::keys::SelectKeyMap;
use super::layout::{Layout, Rect, Target};
use super::pointer::{Document, Listener, PointerMsg};
use super::selection::{Selection, Toggle};
use super::style::SelectStyles;
use super::types::{OnChange, SelectOption, SelectionChange};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::MouseEvent;
use std::fmt;

/// A dropdown select widget.
///
/// The model owns its selection and open state. Every committed change to
/// the selection is reported synchronously through the `on_change` callback
/// given to [`Model::new`]; rejected actions change nothing and report
/// nothing.
///
/// Interaction arrives either through [`Model::update`] (pointer and key
/// messages, the usual path inside a bubbletea program) or through the
/// operation methods, which return whether anything changed.
///
/// # Examples
///
/// ```rust
/// use bubbletea_select::select::{Config, Model, SelectOption, SelectionChange};
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let config = Config::new(vec![
///     SelectOption::new("a", "Alpha"),
///     SelectOption::new("b", "Beta"),
/// ])
/// .multiple(true);
///
/// let mut select = Model::new(config, move |change| sink.lock().unwrap().push(change));
/// select.select_option("b");
/// select.select_option("a");
///
/// assert_eq!(select.selected_values(), ["b", "a"]);
/// assert_eq!(
///     seen.lock().unwrap().last(),
///     Some(&SelectionChange::Multiple(vec!["b".into(), "a".into()]))
/// );
/// ```
pub struct Model {
    pub(super) config: Config,
    pub(super) selection: Selection,
    pub(super) open: bool,
    pub(super) focus: bool,
    /// Index of the keyboard-highlighted option.
    pub(super) highlight: usize,
    pub(super) width: usize,
    pub(super) x: u16,
    pub(super) y: u16,
    pub(super) styles: SelectStyles,
    pub(super) keymap: SelectKeyMap,
    on_change: OnChange,
    listener: Option<Listener>,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("config", &self.config)
            .field("selection", &self.selection)
            .field("open", &self.open)
            .field("focus", &self.focus)
            .field("highlight", &self.highlight)
            .field("position", &(self.x, self.y))
            .field("mounted", &self.is_mounted())
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Creates a widget from its configuration and change callback.
    ///
    /// The selection starts with the configured default value, if any, and
    /// the panel starts open only when configured so and not disabled.
    pub fn new<F>(config: Config, on_change: F) -> Self
    where
        F: FnMut(SelectionChange) + Send + 'static,
    {
        let selection = Selection::from_default(config.initial_value());
        let open = config.is_open && !config.disabled;
        let styles = SelectStyles::default().with_custom(&config.custom_styles);
        let mut model = Self {
            width: config.width,
            config,
            selection,
            open,
            focus: false,
            highlight: 0,
            x: 0,
            y: 0,
            styles,
            keymap: SelectKeyMap::default(),
            on_change: Box::new(on_change),
            listener: None,
        };
        model.reset_highlight();
        model
    }

    /// Replaces the styles. Custom style tokens from the configuration are
    /// applied on top.
    pub fn with_styles(mut self, styles: SelectStyles) -> Self {
        self.styles = styles.with_custom(&self.config.custom_styles);
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: SelectKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Subscribes to outside interactions reported through `document`.
    ///
    /// A previous subscription is released first. The subscription is
    /// released again by [`Model::unmount`] or when the model is dropped.
    pub fn mount(&mut self, document: &Document) {
        self.listener = Some(document.listen());
    }

    /// Releases the outside-interaction subscription.
    pub fn unmount(&mut self) {
        self.listener = None;
    }

    /// Whether the widget holds a live outside-interaction subscription.
    pub fn is_mounted(&self) -> bool {
        self.listener.as_ref().is_some_and(Listener::is_active)
    }

    /// Places the widget's top-left cell on the screen.
    pub fn set_position(&mut self, x: u16, y: u16) {
        self.x = x;
        self.y = y;
    }

    /// The widget's top-left cell.
    pub fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// Sets the width in cells.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// The configuration the widget was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The options in presentation order.
    pub fn options(&self) -> &[SelectOption] {
        &self.config.options
    }

    /// The selected values in selection order.
    pub fn selected_values(&self) -> &[String] {
        self.selection.values()
    }

    /// Labels of the selected values. A value without a matching option
    /// yields an empty label.
    pub fn selected_labels(&self) -> Vec<&str> {
        self.selection
            .values()
            .iter()
            .map(|v| self.label_of(v).unwrap_or(""))
            .collect()
    }

    /// Whether the option panel is shown. Always false while disabled.
    pub fn is_open(&self) -> bool {
        self.open && !self.config.disabled
    }

    /// Whether the widget allows several selected values.
    pub fn is_multiple(&self) -> bool {
        self.config.is_multiple
    }

    /// Whether interaction is suppressed.
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Index of the keyboard-highlighted option.
    pub fn highlighted(&self) -> usize {
        self.highlight
    }

    /// Whether the clear-all button is shown.
    pub fn shows_clear(&self) -> bool {
        self.config.is_clearable && !self.selection.is_empty()
    }

    /// Geometry of the widget in its current state.
    pub fn layout(&self) -> Layout {
        let chip_labels = if self.config.is_multiple {
            self.selected_labels()
        } else {
            Vec::new()
        };
        let option_heights: Vec<usize> = if self.is_open() {
            self.config
                .options
                .iter()
                .map(|o| if self.shows_description(o) { 2 } else { 1 })
                .collect()
        } else {
            Vec::new()
        };
        Layout::new(self.width, &chip_labels, self.shows_clear(), &option_heights)
    }

    /// The cells the widget covers on screen.
    pub fn bounds(&self) -> Rect {
        self.layout().bounds(self.x, self.y)
    }

    /// Flips the panel between open and closed.
    ///
    /// Returns false, changing nothing, while disabled.
    pub fn toggle_open(&mut self) -> bool {
        if self.config.disabled {
            return false;
        }
        self.open = !self.open;
        if self.open {
            self.reset_highlight();
        }
        true
    }

    /// Selects or toggles the option with `value`, as a click on its row does.
    ///
    /// In single-select mode the value replaces the selection and the panel
    /// closes. In multi-select mode a selected value is removed, otherwise it
    /// is appended if the cap allows. Returns false when nothing changed: the
    /// widget is disabled, no option has this value, or the cap is reached.
    pub fn select_option(&mut self, value: &str) -> bool {
        if self.config.disabled {
            return false;
        }
        let Some(index) = self.config.options.iter().position(|o| o.value == value) else {
            return false;
        };
        self.highlight = index;

        if !self.config.is_multiple {
            self.selection.replace(value);
            self.open = false;
            self.emit();
            return true;
        }

        match self.selection.toggle(value, self.config.max_selections) {
            Toggle::Rejected => {
                log::debug!(
                    "select: '{value}' not added, {} of {:?} selected",
                    self.selection.len(),
                    self.config.max_selections
                );
                false
            }
            Toggle::Added | Toggle::Removed => {
                self.emit();
                true
            }
        }
    }

    /// Removes one selected value, as its chip's remove button does.
    ///
    /// Only applies in multi-select mode. Returns false when nothing changed.
    pub fn remove_selected(&mut self, value: &str) -> bool {
        if self.config.disabled || !self.config.is_multiple {
            return false;
        }
        if !self.selection.remove(value) {
            return false;
        }
        self.emit();
        true
    }

    /// Empties the selection and reports it, whatever its previous size.
    ///
    /// Returns false, changing nothing, while disabled.
    pub fn clear_all(&mut self) -> bool {
        if self.config.disabled {
            return false;
        }
        self.selection.clear();
        self.emit();
        true
    }

    /// Closes the panel. Returns whether it was open.
    pub fn dismiss(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Handles a message.
    ///
    /// Accepts [`PointerMsg`], `crossterm::event::MouseEvent`, and
    /// `bubbletea_rs::KeyMsg` (only while focused). Other messages are
    /// ignored.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(pointer) = msg.downcast_ref::<PointerMsg>() {
            self.handle_pointer(*pointer);
        } else if let Some(event) = msg.downcast_ref::<MouseEvent>() {
            self.handle_pointer(PointerMsg::from(*event));
        } else if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }
    }

    fn handle_pointer(&mut self, pointer: PointerMsg) {
        if self.config.disabled {
            return;
        }
        if !self.bounds().contains(pointer.column, pointer.row) {
            if pointer.is_press() && self.is_mounted() && self.dismiss() {
                log::debug!(
                    "select: press at ({}, {}) outside widget, closing",
                    pointer.column,
                    pointer.row
                );
            }
            return;
        }
        if !pointer.is_primary_press() {
            return;
        }

        let col = usize::from(pointer.column - self.x);
        let row = usize::from(pointer.row - self.y);
        match self.layout().hit(col, row) {
            Some(Target::Trigger) => {
                self.toggle_open();
            }
            Some(Target::RemoveChip(i)) => {
                if let Some(value) = self.selection.values().get(i).cloned() {
                    self.remove_selected(&value);
                }
            }
            Some(Target::ClearAll) => {
                self.clear_all();
            }
            Some(Target::Option(i)) => {
                if let Some(value) = self.config.options.get(i).map(|o| o.value.clone()) {
                    self.select_option(&value);
                }
            }
            None => {}
        }
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) {
        if !self.focus || self.config.disabled {
            return;
        }

        if self.keymap.clear.matches(key_msg) {
            if self.shows_clear() {
                self.clear_all();
            }
        } else if self.keymap.remove_last.matches(key_msg) {
            if let Some(last) = self.selection.last().map(str::to_string) {
                self.remove_selected(&last);
            }
        } else if !self.open {
            if self.keymap.choose.matches(key_msg) {
                self.toggle_open();
            }
        } else if self.keymap.up.matches(key_msg) {
            self.highlight = self.highlight.saturating_sub(1);
        } else if self.keymap.down.matches(key_msg) {
            let last = self.config.options.len().saturating_sub(1);
            self.highlight = (self.highlight + 1).min(last);
        } else if self.keymap.close.matches(key_msg) {
            self.dismiss();
        } else if self.keymap.choose.matches(key_msg) {
            if let Some(value) = self
                .config
                .options
                .get(self.highlight)
                .map(|o| o.value.clone())
            {
                self.select_option(&value);
            }
        }
    }

    pub(super) fn label_of(&self, value: &str) -> Option<&str> {
        self.config
            .options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    pub(super) fn shows_description(&self, option: &SelectOption) -> bool {
        self.config.extended && option.description.is_some()
    }

    fn reset_highlight(&mut self) {
        self.highlight = self
            .selection
            .first()
            .and_then(|v| self.config.options.iter().position(|o| o.value == v))
            .unwrap_or(0);
    }

    fn emit(&mut self) {
        let change = if self.config.is_multiple {
            SelectionChange::Multiple(self.selection.values().to_vec())
        } else {
            SelectionChange::Single(self.selection.first().map(str::to_string))
        };
        log::trace!("select: change {change}");
        (self.on_change)(change);
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
