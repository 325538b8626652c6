//! Framework adapter seam
//!
//! One target framework implements `PropEmitter` once; every widget part is
//! emitted through it. Elements and buttons are the only two shapes the
//! tabs anatomy needs (panels, tablist and indicator are plain elements,
//! tab triggers are buttons).

use serde::Serialize;

use crate::attrs::{IndicatorStyle, TabAttrs, TabPanelAttrs, TablistAttrs};

pub trait PropEmitter {
    type Output;

    fn emit_element<A: Serialize>(&self, attrs: &A) -> Self::Output;
    fn emit_button(&self, attrs: &TabAttrs) -> Self::Output;
}

/// Reference emitter producing plain JSON attribute maps. Useful for tests
/// and for hosts that apply attributes generically.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter;

impl JsonEmitter {
    pub fn tablist(&self, attrs: &TablistAttrs) -> serde_json::Value {
        self.emit_element(attrs)
    }

    pub fn panel(&self, attrs: &TabPanelAttrs) -> serde_json::Value {
        self.emit_element(attrs)
    }

    pub fn indicator(&self, style: &IndicatorStyle) -> serde_json::Value {
        self.emit_element(style)
    }
}

impl PropEmitter for JsonEmitter {
    type Output = serde_json::Value;

    fn emit_element<A: Serialize>(&self, attrs: &A) -> Self::Output {
        serde_json::to_value(attrs).unwrap_or_else(|err| {
            tracing::error!(%err, "Attribute bundle failed to serialize");
            serde_json::Value::Null
        })
    }

    fn emit_button(&self, attrs: &TabAttrs) -> Self::Output {
        self.emit_element(attrs)
    }
}
