//! Blur filtering
//!
//! A tab's blur handler must only dispatch `TabBlur` when focus leaves the
//! tablist entirely. When focus hops between tabs, the blur is superseded
//! by the next tab's focus event and dispatching it would make focus flicker
//! to `None` in between.

/// Decide whether a blur should clear focus, given the `role` attribute of
/// the element focus moved to (`None` when focus left the document).
///
/// This mirrors the role-based check used in practice: a related target
/// with `role="tab"` suppresses the clear. The check is by role, not by
/// tablist subtree membership, so a focusable `role="tab"` element in an
/// unrelated tablist also suppresses it; see the tests for this known edge
/// case.
pub fn should_clear_focus(related_role: Option<&str>) -> bool {
    related_role != Some("tab")
}
