//! tabkit DOM binding contract
//!
//! Everything the view layer needs to render an accessible tablist from a
//! machine snapshot, with no browser types anywhere: deterministic id
//! derivation, a pure key-to-event mapping, typed ARIA attribute bundles,
//! and the polymorphic emitter seam a framework adapter implements once.

mod attrs;
mod emitter;
mod focus;
mod ids;
mod keymap;
mod platform;

pub use attrs::{
    indicator_style, panel_attrs, tab_attrs, tablist_attrs, IndicatorStyle, TabAttrs,
    TabPanelAttrs, TablistAttrs,
};
pub use emitter::{JsonEmitter, PropEmitter};
pub use focus::should_clear_focus;
pub use ids::{panel_id, tab_id, tablist_id};
pub use keymap::{resolve_key, Key};
pub use platform::Platform;
