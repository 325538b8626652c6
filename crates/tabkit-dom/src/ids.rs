//! DOM id derivation
//!
//! Deterministic, collision-free within one tablist as long as tab values
//! are unique (a caller precondition). Stability across calls matters:
//! `aria-controls` and `aria-labelledby` cross-references are derived
//! independently on both ends and must agree on every render.

/// Id of the tablist container element.
pub fn tablist_id(uid: &str) -> String {
    format!("tabs-{uid}-tablist")
}

/// Id of the tab trigger element for `value`.
pub fn tab_id(uid: &str, value: &str) -> String {
    format!("tabs-{uid}-tab-{value}")
}

/// Id of the tab panel element for `value`.
pub fn panel_id(uid: &str, value: &str) -> String {
    format!("tabs-{uid}-tabpanel-{value}")
}
