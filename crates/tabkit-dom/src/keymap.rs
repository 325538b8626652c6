//! Keyboard mapping
//!
//! Pure `orientation x physical key -> logical event` resolution. The
//! machine only ever sees logical direction, so a horizontal and a vertical
//! tablist share every transition; only this table differs. Off-axis arrows
//! resolve to `None` and should fall through to the host's default handling.

use serde::{Deserialize, Serialize};
use tabkit_machine::{Orientation, TabEvent};

/// Physical keys a tablist reacts to, named after DOM `KeyboardEvent.key`
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Enter,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` string. Unrecognized keys are not
    /// the tablist's business and return `None`.
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "Home" => Some(Key::Home),
            "End" => Some(Key::End),
            "Enter" => Some(Key::Enter),
            _ => None,
        }
    }
}

/// Resolve a key press against the tablist orientation.
///
/// Right/Down mean "next" and Left/Up mean "previous" in horizontal and
/// vertical mode respectively; Home, End and Enter are axis-independent.
pub fn resolve_key(orientation: Orientation, key: Key) -> Option<TabEvent> {
    match (orientation, key) {
        (Orientation::Horizontal, Key::ArrowRight) => Some(TabEvent::ArrowNext),
        (Orientation::Horizontal, Key::ArrowLeft) => Some(TabEvent::ArrowPrev),
        (Orientation::Vertical, Key::ArrowDown) => Some(TabEvent::ArrowNext),
        (Orientation::Vertical, Key::ArrowUp) => Some(TabEvent::ArrowPrev),
        (_, Key::Home) => Some(TabEvent::Home),
        (_, Key::End) => Some(TabEvent::End),
        (_, Key::Enter) => Some(TabEvent::Enter),
        _ => None,
    }
}
