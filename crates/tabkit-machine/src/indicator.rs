//! Indicator geometry tracker
//!
//! Remembers the last measured bounding rect of the selected tab. The
//! `has_measured` flag flips on the first successful measurement and never
//! resets: before it, the indicator renders with a zero transition duration
//! so it does not slide in from the origin on first paint.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::descriptor::Rect;

/// Transition duration once the indicator has been placed at least once.
const MEASURED_TRANSITION: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorTracker {
    rect: Option<Rect>,
    has_measured: bool,
}

impl IndicatorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful measurement of the selected tab.
    pub fn record(&mut self, rect: Rect) {
        self.rect = Some(rect);
        self.has_measured = true;
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn has_measured(&self) -> bool {
        self.has_measured
    }

    /// Transition duration the binding layer should apply on the next
    /// render: zero until the first measurement, fixed thereafter.
    pub fn transition_duration(&self) -> Duration {
        if self.has_measured {
            MEASURED_TRANSITION
        } else {
            Duration::ZERO
        }
    }
}
