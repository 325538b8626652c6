//! ARIA attribute bundles
//!
//! Typed snapshots of everything the view layer sets on each part of the
//! widget. Serde field names match the DOM attributes, so serializing a
//! bundle yields the exact attribute map a renderer applies.

use serde::Serialize;
use tabkit_machine::{Rect, TabsMachine};

use crate::ids;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablistAttrs {
    #[serde(rename = "data-part")]
    pub part: &'static str,
    pub id: String,
    pub role: &'static str,
    #[serde(rename = "aria-orientation")]
    pub orientation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabAttrs {
    #[serde(rename = "data-part")]
    pub part: &'static str,
    pub id: String,
    pub role: &'static str,
    #[serde(rename = "type")]
    pub button_type: &'static str,
    pub disabled: bool,
    #[serde(rename = "data-value")]
    pub value: String,
    #[serde(rename = "aria-selected")]
    pub selected: bool,
    #[serde(rename = "aria-controls")]
    pub controls: String,
    #[serde(rename = "data-ownedby")]
    pub owned_by: String,
    /// Roving tabindex: 0 for the selected tab, -1 for the rest.
    #[serde(rename = "tabindex")]
    pub tab_index: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabPanelAttrs {
    #[serde(rename = "data-part")]
    pub part: &'static str,
    pub id: String,
    pub role: &'static str,
    #[serde(rename = "aria-labelledby")]
    pub labelled_by: String,
    #[serde(rename = "data-ownedby")]
    pub owned_by: String,
    pub hidden: bool,
    #[serde(rename = "tabindex")]
    pub tab_index: i32,
}

/// Style contract for the selection indicator. The zero duration before the
/// first measurement keeps the indicator from visibly sliding in from the
/// origin on first paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorStyle {
    pub position: &'static str,
    #[serde(rename = "will-change")]
    pub will_change: &'static str,
    #[serde(rename = "transition-property")]
    pub transition_property: &'static str,
    #[serde(rename = "transition-duration")]
    pub transition_duration: String,
    #[serde(flatten)]
    pub rect: Option<Rect>,
}

pub fn tablist_attrs(machine: &TabsMachine) -> TablistAttrs {
    TablistAttrs {
        part: "tablist",
        id: ids::tablist_id(machine.id()),
        role: "tablist",
        orientation: machine.orientation().as_str(),
    }
}

pub fn tab_attrs(machine: &TabsMachine, value: &str, disabled: bool) -> TabAttrs {
    let selected = machine.is_selected(value);
    TabAttrs {
        part: "tab",
        id: ids::tab_id(machine.id(), value),
        role: "tab",
        button_type: "button",
        disabled,
        value: value.to_string(),
        selected,
        controls: ids::panel_id(machine.id(), value),
        owned_by: ids::tablist_id(machine.id()),
        tab_index: if selected { 0 } else { -1 },
    }
}

pub fn panel_attrs(machine: &TabsMachine, value: &str) -> TabPanelAttrs {
    TabPanelAttrs {
        part: "tabpanel",
        id: ids::panel_id(machine.id(), value),
        role: "tabpanel",
        labelled_by: ids::tab_id(machine.id(), value),
        owned_by: ids::tablist_id(machine.id()),
        hidden: !machine.is_selected(value),
        tab_index: 0,
    }
}

pub fn indicator_style(machine: &TabsMachine) -> IndicatorStyle {
    let tracker = machine.indicator();
    IndicatorStyle {
        position: "absolute",
        will_change: "left, right, top, bottom, width, height",
        transition_property: "left, right, top, bottom, width, height",
        transition_duration: format!("{}ms", tracker.transition_duration().as_millis()),
        rect: tracker.rect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabkit_machine::{MachineConfig, Orientation, Rect, TabDescriptor, TabEvent};

    fn machine() -> TabsMachine {
        TabsMachine::new(MachineConfig {
            id: Some("t1".to_string()),
            tabs: vec![
                TabDescriptor::new("general"),
                TabDescriptor::disabled("billing"),
            ],
            value: Some("general".to_string()),
            orientation: Orientation::Horizontal,
        })
        .unwrap()
    }

    #[test]
    fn test_tablist_attrs() {
        let attrs = tablist_attrs(&machine());
        assert_eq!(attrs.id, "tabs-t1-tablist");
        assert_eq!(attrs.role, "tablist");
        assert_eq!(attrs.orientation, "horizontal");
    }

    #[test]
    fn test_roving_tabindex_and_cross_references() {
        let m = machine();
        let selected = tab_attrs(&m, "general", false);
        let other = tab_attrs(&m, "billing", true);
        let panel = panel_attrs(&m, "general");

        assert_eq!(selected.tab_index, 0);
        assert!(selected.selected);
        assert_eq!(other.tab_index, -1);
        assert!(other.disabled);

        // aria-controls and aria-labelledby must agree end to end.
        assert_eq!(selected.controls, panel.id);
        assert_eq!(panel.labelled_by, selected.id);
        assert!(!panel.hidden);
        assert!(panel_attrs(&m, "billing").hidden);
    }

    #[test]
    fn test_indicator_duration_gated_on_first_measurement() {
        let mut m = machine();

        let style = indicator_style(&m);
        assert_eq!(style.transition_duration, "0ms");
        assert!(style.rect.is_none());

        let value = m.take_measure_request().unwrap();
        m.set_indicator_rect(&value, Rect::new(0.0, 0.0, 40.0, 24.0));

        let style = indicator_style(&m);
        assert_eq!(style.transition_duration, "200ms");
        assert_eq!(style.rect, Some(Rect::new(0.0, 0.0, 40.0, 24.0)));

        // Duration stays fixed on every later selection change.
        m.send(TabEvent::SetValue {
            value: "general".to_string(),
        });
        assert_eq!(indicator_style(&m).transition_duration, "200ms");
    }
}
