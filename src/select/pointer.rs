//! Pointer messages and the document-level listener registry.
//!
//! A terminal has no DOM, so "the document" is whatever owns the screen: the
//! host application. The host creates one [`Document`] and forwards every
//! mouse event it receives to its widgets. A widget only reacts to presses
//! outside its own bounds while it holds a live [`Listener`] from that
//! document, which mirrors a page-level `mousedown` subscription.
//!
//! A `Listener` is a guard: it deregisters itself when dropped, so a widget
//! that is unmounted, re-mounted, or dropped for any reason never leaves a
//! stale registration behind.
//!
//! ```rust
//! use bubbletea_select::select::pointer::Document;
//!
//! let document = Document::new();
//! {
//!     let listener = document.listen();
//!     assert!(listener.is_active());
//!     assert_eq!(document.listener_count(), 1);
//! }
//! assert_eq!(document.listener_count(), 0);
//! ```

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// What happened at a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// A button was pressed.
    Down(MouseButton),
    /// A button was released.
    Up(MouseButton),
    /// The pointer moved or dragged.
    Moved,
    /// A wheel event.
    Scroll,
}

/// A pointer event in absolute terminal cell coordinates.
///
/// Send these to [`Model::update`](super::Model::update) as a `Msg`. A raw
/// `crossterm::event::MouseEvent` is accepted as well and converted with the
/// `From` impl below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerMsg {
    /// Column, zero based.
    pub column: u16,
    /// Row, zero based.
    pub row: u16,
    /// The event kind.
    pub kind: PointerKind,
}

impl PointerMsg {
    /// A primary-button press at `(column, row)`.
    pub fn click(column: u16, row: u16) -> Self {
        Self {
            column,
            row,
            kind: PointerKind::Down(MouseButton::Left),
        }
    }

    /// Whether any button was pressed.
    pub fn is_press(&self) -> bool {
        matches!(self.kind, PointerKind::Down(_))
    }

    /// Whether the primary button was pressed.
    pub fn is_primary_press(&self) -> bool {
        self.kind == PointerKind::Down(MouseButton::Left)
    }
}

impl From<MouseEvent> for PointerMsg {
    fn from(event: MouseEvent) -> Self {
        let kind = match event.kind {
            MouseEventKind::Down(button) => PointerKind::Down(button),
            MouseEventKind::Up(button) => PointerKind::Up(button),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => PointerKind::Moved,
            MouseEventKind::ScrollDown
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => PointerKind::Scroll,
        };
        Self {
            column: event.column,
            row: event.row,
            kind,
        }
    }
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    live: BTreeSet<u64>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Host-owned registry of outside-interaction listeners.
///
/// Cloning a `Document` yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct Document {
    registry: Arc<Mutex<Registry>>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new listener. It stays registered until the guard is dropped.
    pub fn listen(&self) -> Listener {
        let mut reg = lock(&self.registry);
        let id = reg.next_id;
        reg.next_id += 1;
        reg.live.insert(id);
        log::trace!("pointer listener {id} registered");
        Listener {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        lock(&self.registry).live.len()
    }
}

/// Registration of one widget in a [`Document`].
#[derive(Debug)]
pub struct Listener {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Listener {
    /// Whether the registration is still live. False once the document is gone.
    pub fn is_active(&self) -> bool {
        match self.registry.upgrade() {
            Some(reg) => {
                let live = lock(&reg).live.contains(&self.id);
                live
            }
            None => false,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(reg) = self.registry.upgrade() {
            lock(&reg).live.remove(&self.id);
            log::trace!("pointer listener {} released", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_from_mouse_event() {
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        };
        let msg = PointerMsg::from(event);
        assert_eq!(msg.column, 4);
        assert_eq!(msg.row, 9);
        assert!(msg.is_press());
        assert!(!msg.is_primary_press());

        let scroll = PointerMsg::from(MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(scroll.kind, PointerKind::Scroll);
        assert!(!scroll.is_press());
    }

    #[test]
    fn test_listeners_are_independent() {
        let document = Document::new();
        let a = document.listen();
        let b = document.listen();
        assert_eq!(document.listener_count(), 2);
        drop(a);
        assert_eq!(document.listener_count(), 1);
        assert!(b.is_active());
    }

    #[test]
    fn test_listener_outliving_document() {
        let document = Document::new();
        let listener = document.listen();
        drop(document);
        assert!(!listener.is_active());
        drop(listener);
    }

    #[test]
    fn test_listener_released_on_unwind() {
        let document = Document::new();
        let handle = document.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _listener = handle.listen();
            panic!("widget torn down");
        }));
        assert!(result.is_err());
        assert_eq!(document.listener_count(), 0);
    }
}
