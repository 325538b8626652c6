//! Interaction state machine
//!
//! Single composite state: selection, roving keyboard focus, orientation,
//! and indicator bookkeeping. The widget has no macro-states; it is always
//! idle and reacts to one dispatched event at a time, to completion.
//!
//! Arrow/Home/End events move focus only (manual-activation roving
//! tabindex); `Enter` commits focus into selection, `TabClick` and
//! `SetValue` do both at once. Events naming a disabled or absent value are
//! silently ignored rather than rejected: keyboard and DOM races (a tab
//! removed between render and keypress) are expected and must not crash the
//! widget.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::descriptor::{Orientation, Rect, TabDescriptor};
use crate::error::MachineError;
use crate::indicator::IndicatorTracker;
use crate::order::NavigationOrder;
use crate::Result;

/// Logical machine events. Physical arrow keys are resolved against the
/// orientation before they get here, so the machine never sees key names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TabEvent {
    /// Move focus to the circular successor of the focused (or selected) tab.
    ArrowNext,
    /// Move focus to the circular predecessor.
    ArrowPrev,
    /// Focus the first enabled tab.
    Home,
    /// Focus the last enabled tab.
    End,
    /// Commit the focused tab into the selection.
    Enter,
    /// Pointer click: focuses and selects in one transition.
    TabClick { value: String },
    /// Focus landed on a tab (tab key or programmatic focus).
    TabFocus { value: String },
    /// Focus left the tablist entirely. The binding layer must not dispatch
    /// this for blurs whose related target is another tab in the same list.
    TabBlur,
    /// External/programmatic selection.
    SetValue { value: String },
}

/// Initial machine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Tablist uid used for DOM id derivation. Generated when absent.
    pub id: Option<String>,
    /// Ordered tab descriptors as rendered.
    pub tabs: Vec<TabDescriptor>,
    /// Initially selected value, if any.
    pub value: Option<String>,
    #[serde(default)]
    pub orientation: Orientation,
}

#[derive(Debug)]
pub struct TabsMachine {
    id: String,
    tabs: Vec<TabDescriptor>,
    value: Option<String>,
    focused_value: Option<String>,
    orientation: Orientation,
    indicator: IndicatorTracker,
    /// Selected value awaiting an indicator measurement, if any.
    pending_measure: Option<String>,
}

impl TabsMachine {
    /// Build a machine from its configuration.
    ///
    /// Fails if the initial value names an absent or disabled descriptor;
    /// after construction the invariant is maintained by ignoring invalid
    /// events. Descriptor-value uniqueness is a caller precondition and is
    /// not checked.
    pub fn new(config: MachineConfig) -> Result<Self> {
        if let Some(value) = &config.value {
            match config.tabs.iter().find(|t| &t.value == value) {
                None => return Err(MachineError::UnknownValue(value.clone())),
                Some(t) if t.disabled => {
                    return Err(MachineError::DisabledValue(value.clone()))
                }
                Some(_) => {}
            }
        }

        Ok(Self {
            id: config
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            tabs: config.tabs,
            pending_measure: config.value.clone(),
            value: config.value,
            focused_value: None,
            orientation: config.orientation,
            indicator: IndicatorTracker::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn focused_value(&self) -> Option<&str> {
        self.focused_value.as_deref()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    pub fn indicator(&self) -> &IndicatorTracker {
        &self.indicator
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.value.as_deref() == Some(value)
    }

    /// Replace the descriptor sequence after the view re-renders.
    ///
    /// Selection or focus naming a value that is no longer selectable is
    /// cleared, keeping both pointing at present, enabled descriptors.
    pub fn set_tabs(&mut self, tabs: Vec<TabDescriptor>) {
        self.tabs = tabs;
        let order = NavigationOrder::new(&self.tabs);
        if let Some(value) = &self.value {
            if !order.is_selectable(value) {
                tracing::debug!(machine_id = %self.id, value = %value, "Selected tab removed");
                self.value = None;
            }
        }
        if let Some(focused) = &self.focused_value {
            if !order.is_selectable(focused) {
                self.focused_value = None;
            }
        }
    }

    /// Dispatch one event. Synchronous; the transition completes before the
    /// call returns, and invalid events are no-ops.
    pub fn send(&mut self, event: TabEvent) {
        match event {
            TabEvent::ArrowNext => self.move_focus(true),
            TabEvent::ArrowPrev => self.move_focus(false),
            TabEvent::Home => {
                if let Some(first) = NavigationOrder::new(&self.tabs).first() {
                    self.focused_value = Some(first.to_string());
                }
            }
            TabEvent::End => {
                if let Some(last) = NavigationOrder::new(&self.tabs).last() {
                    self.focused_value = Some(last.to_string());
                }
            }
            TabEvent::Enter => {
                if let Some(focused) = self.focused_value.clone() {
                    self.commit(focused);
                }
            }
            TabEvent::TabClick { value } => {
                if NavigationOrder::new(&self.tabs).is_selectable(&value) {
                    self.focused_value = Some(value.clone());
                    self.commit(value);
                } else {
                    tracing::trace!(machine_id = %self.id, value = %value, "Ignoring click on unselectable tab");
                }
            }
            TabEvent::TabFocus { value } => {
                if NavigationOrder::new(&self.tabs).is_selectable(&value) {
                    self.focused_value = Some(value);
                }
            }
            TabEvent::TabBlur => {
                self.focused_value = None;
            }
            TabEvent::SetValue { value } => {
                if NavigationOrder::new(&self.tabs).is_selectable(&value) {
                    self.focused_value = Some(value.clone());
                    self.commit(value);
                } else {
                    tracing::trace!(machine_id = %self.id, value = %value, "Ignoring SET_VALUE for unselectable tab");
                }
            }
        }
    }

    /// Selected value awaiting a layout read, if one is pending. The host
    /// drains this after the render reflecting the new selection, measures
    /// the tab, and reports back via [`set_indicator_rect`].
    ///
    /// [`set_indicator_rect`]: TabsMachine::set_indicator_rect
    pub fn take_measure_request(&mut self) -> Option<String> {
        self.pending_measure.take()
    }

    /// Record a measured rect for `value`. Reports for a value that is no
    /// longer selected are stale and silently discarded.
    pub fn set_indicator_rect(&mut self, value: &str, rect: Rect) {
        if self.value.as_deref() == Some(value) {
            self.indicator.record(rect);
        } else {
            tracing::trace!(machine_id = %self.id, value = %value, "Discarding stale indicator measurement");
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let Some(base) = self.focused_value.as_deref().or(self.value.as_deref()) else {
            tracing::trace!(machine_id = %self.id, "Ignoring arrow with no focused or selected tab");
            return;
        };

        let order = NavigationOrder::new(&self.tabs);
        if !order.is_selectable(base) {
            return;
        }

        let target = if forward {
            order.next(base)
        } else {
            order.prev(base)
        };
        self.focused_value = Some(target.to_string());
    }

    /// Change the selection and mark the indicator dirty. Focus is managed
    /// by the caller; selecting an already-selected value is a no-op.
    fn commit(&mut self, value: String) {
        if self.value.as_deref() == Some(value.as_str()) {
            return;
        }

        tracing::debug!(
            machine_id = %self.id,
            from = self.value.as_deref().unwrap_or("-"),
            to = %value,
            "Selection changed"
        );

        self.pending_measure = Some(value.clone());
        self.value = Some(value);
    }
}
