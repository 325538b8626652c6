//! tabkit
//!
//! Headless, accessible tabs widget core. The state machine owns selection,
//! roving keyboard focus and indicator geometry; the DOM layer derives ids,
//! maps keys to logical events, and emits ARIA attribute bundles. The
//! [`Tabs`] facade wires both together for one widget instance.

mod error;
mod tabs;

pub use error::CoreError;
pub use tabs::Tabs;

// Re-export the machine core
pub use tabkit_machine::{
    IndicatorTracker, MachineConfig, MachineError, NavigationOrder, Orientation, Rect,
    TabDescriptor, TabEvent, TabsMachine,
};

// Re-export the DOM binding contract
pub use tabkit_dom::{
    indicator_style, panel_attrs, resolve_key, should_clear_focus, tab_attrs, tablist_attrs,
    IndicatorStyle, JsonEmitter, Key, Platform, PropEmitter, TabAttrs, TabPanelAttrs,
    TablistAttrs,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
