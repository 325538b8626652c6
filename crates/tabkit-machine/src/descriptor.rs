//! Tab descriptors and shared value types
//!
//! A `TabDescriptor` is the machine's entire view of one tab: its identity
//! (`value`, unique within a tablist) and whether it can be focused or
//! selected. The owning view creates and destroys descriptors; the machine
//! only reads the ordered sequence it is handed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabDescriptor {
    /// Identity within the tablist. Uniqueness is a caller precondition;
    /// duplicate values make navigation behavior undefined.
    pub value: String,
    /// Disabled tabs are skipped by navigation and cannot be selected.
    #[serde(default)]
    pub disabled: bool,
}

impl TabDescriptor {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            disabled: false,
        }
    }

    pub fn disabled(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            disabled: true,
        }
    }
}

/// Tablist axis. Decides which physical arrow keys map to next/previous;
/// it never changes the underlying tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Horizontal
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("Unknown orientation: {0}")]
pub struct ParseOrientationError(String);

impl std::str::FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(ParseOrientationError(s.to_string())),
        }
    }
}

/// Bounding rect of the selected tab, in the tablist's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
