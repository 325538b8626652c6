//! Per-widget coordination
//!
//! One `Tabs` instance per rendered tablist: it owns the machine and the
//! platform capabilities and exposes the whole connect surface the view
//! layer renders from. All host callbacks (key presses, clicks, focus and
//! blur, layout reads) funnel through here, serialized by `&mut self`, so
//! user input and programmatic updates share one last-dispatch-wins order.

use tabkit_dom::{
    indicator_style, panel_attrs, resolve_key, should_clear_focus, tab_attrs, tablist_attrs,
    IndicatorStyle, Key, Platform, TabAttrs, TabPanelAttrs, TablistAttrs,
};
use tabkit_machine::{MachineConfig, Orientation, Rect, TabDescriptor, TabEvent, TabsMachine};

use crate::Result;

pub struct Tabs {
    machine: TabsMachine,
    platform: Platform,
}

impl Tabs {
    pub fn new(config: MachineConfig) -> Result<Self> {
        Self::with_platform(config, Platform::default())
    }

    pub fn with_platform(config: MachineConfig, platform: Platform) -> Result<Self> {
        let machine = TabsMachine::new(config)?;
        tracing::debug!(machine_id = %machine.id(), "Initialized tabs widget");
        Ok(Self { machine, platform })
    }

    /// Build from a JSON-encoded [`MachineConfig`], for hosts that hand the
    /// configuration across a language boundary.
    pub fn from_json_config(json: &str) -> Result<Self> {
        let config: MachineConfig = serde_json::from_str(json)?;
        Self::new(config)
    }

    pub fn machine(&self) -> &TabsMachine {
        &self.machine
    }

    pub fn value(&self) -> Option<&str> {
        self.machine.value()
    }

    pub fn focused_value(&self) -> Option<&str> {
        self.machine.focused_value()
    }

    pub fn orientation(&self) -> Orientation {
        self.machine.orientation()
    }

    pub fn send(&mut self, event: TabEvent) {
        self.machine.send(event);
    }

    /// Programmatic selection, equivalent to dispatching `SET_VALUE`.
    pub fn set_value(&mut self, value: &str) {
        self.machine.send(TabEvent::SetValue {
            value: value.to_string(),
        });
    }

    /// Replace the descriptor sequence after the view re-renders.
    pub fn set_tabs(&mut self, tabs: Vec<TabDescriptor>) {
        self.machine.set_tabs(tabs);
    }

    /// Handle a key press on the tablist. Returns true when the key was
    /// consumed, in which case the host should suppress its default
    /// behavior.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match resolve_key(self.machine.orientation(), key) {
            Some(event) => {
                self.machine.send(event);
                true
            }
            None => false,
        }
    }

    /// Handle a pointer click on the tab for `value`. Returns true when the
    /// host must also force-focus the clicked element, for platforms whose
    /// buttons do not take focus on click. Clicks on unselectable tabs are
    /// ignored and never ask for focus.
    pub fn handle_click(&mut self, value: &str) -> bool {
        let selectable = self
            .machine
            .tabs()
            .iter()
            .any(|t| t.value == value && !t.disabled);
        if !selectable {
            return false;
        }

        self.machine.send(TabEvent::TabClick {
            value: value.to_string(),
        });
        self.platform.force_focus_on_click
    }

    /// Handle focus landing on the tab for `value`.
    pub fn handle_focus(&mut self, value: &str) {
        self.machine.send(TabEvent::TabFocus {
            value: value.to_string(),
        });
    }

    /// Handle a blur, given the `role` attribute of the element focus moved
    /// to. Blurs superseded by a sibling tab's focus are filtered out here
    /// and never reach the machine.
    pub fn handle_blur(&mut self, related_role: Option<&str>) {
        if should_clear_focus(related_role) {
            self.machine.send(TabEvent::TabBlur);
        }
    }

    /// Selected value awaiting an indicator measurement, drained by the
    /// host after the render that reflects the new selection.
    pub fn take_measure_request(&mut self) -> Option<String> {
        self.machine.take_measure_request()
    }

    /// Report a measured tab rect; stale reports are discarded.
    pub fn set_indicator_rect(&mut self, value: &str, rect: Rect) {
        self.machine.set_indicator_rect(value, rect);
    }

    // Connect surface

    pub fn tablist_attrs(&self) -> TablistAttrs {
        tablist_attrs(&self.machine)
    }

    pub fn tab_attrs(&self, value: &str) -> TabAttrs {
        let disabled = self
            .machine
            .tabs()
            .iter()
            .any(|t| t.value == value && t.disabled);
        tab_attrs(&self.machine, value, disabled)
    }

    pub fn panel_attrs(&self, value: &str) -> TabPanelAttrs {
        panel_attrs(&self.machine, value)
    }

    pub fn indicator_style(&self) -> IndicatorStyle {
        indicator_style(&self.machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MachineConfig {
        MachineConfig {
            id: Some("t1".to_string()),
            tabs: vec![
                TabDescriptor::new("a"),
                TabDescriptor::disabled("b"),
                TabDescriptor::new("c"),
            ],
            value: Some("a".to_string()),
            orientation: Orientation::Horizontal,
        }
    }

    #[test]
    fn test_keyboard_flow_end_to_end() {
        let mut tabs = Tabs::new(config()).unwrap();
        tabs.handle_focus("a");

        assert!(tabs.handle_key(Key::ArrowRight));
        assert_eq!(tabs.focused_value(), Some("c"));
        assert_eq!(tabs.value(), Some("a"));

        assert!(tabs.handle_key(Key::Enter));
        assert_eq!(tabs.value(), Some("c"));

        // Off-axis arrow falls through to the host.
        assert!(!tabs.handle_key(Key::ArrowDown));
        assert_eq!(tabs.focused_value(), Some("c"));
    }

    #[test]
    fn test_click_honors_platform_quirk() {
        let quirky = Platform {
            force_focus_on_click: true,
        };
        let mut tabs = Tabs::with_platform(config(), quirky).unwrap();

        assert!(tabs.handle_click("c"));
        assert_eq!(tabs.value(), Some("c"));
        assert_eq!(tabs.focused_value(), Some("c"));

        // Disabled target: ignored, no focus request.
        assert!(!tabs.handle_click("b"));
        assert_eq!(tabs.value(), Some("c"));

        let mut tabs = Tabs::new(config()).unwrap();
        assert!(!tabs.handle_click("c"));
    }

    #[test]
    fn test_blur_filtering() {
        let mut tabs = Tabs::new(config()).unwrap();
        tabs.handle_focus("a");

        // Focus hopping to a sibling tab never clears focus.
        tabs.handle_blur(Some("tab"));
        assert_eq!(tabs.focused_value(), Some("a"));

        tabs.handle_blur(Some("textbox"));
        assert_eq!(tabs.focused_value(), None);
    }

    #[test]
    fn test_json_config_round_trip() {
        let tabs = Tabs::from_json_config(
            r#"{
                "id": "t9",
                "tabs": [{"value": "x"}, {"value": "y", "disabled": true}],
                "value": "x",
                "orientation": "vertical"
            }"#,
        )
        .unwrap();

        assert_eq!(tabs.value(), Some("x"));
        assert_eq!(tabs.orientation(), Orientation::Vertical);
        assert_eq!(tabs.tablist_attrs().id, "tabs-t9-tablist");
        assert!(tabs.tab_attrs("y").disabled);

        assert!(Tabs::from_json_config("{not json").is_err());
        assert!(Tabs::from_json_config(r#"{"tabs": [], "value": "x"}"#).is_err());
    }

    #[test]
    fn test_connect_surface_reflects_state() {
        let mut tabs = Tabs::new(config()).unwrap();

        assert_eq!(tabs.indicator_style().transition_duration, "0ms");
        let value = tabs.take_measure_request().unwrap();
        tabs.set_indicator_rect(&value, Rect::new(0.0, 0.0, 40.0, 24.0));
        assert_eq!(tabs.indicator_style().transition_duration, "200ms");

        tabs.set_value("c");
        assert!(tabs.tab_attrs("c").selected);
        assert_eq!(tabs.tab_attrs("c").tab_index, 0);
        assert_eq!(tabs.tab_attrs("a").tab_index, -1);
        assert!(tabs.panel_attrs("a").hidden);
        assert!(!tabs.panel_attrs("c").hidden);
    }
}
