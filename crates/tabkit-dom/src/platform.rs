//! Platform quirks
//!
//! Injected capability flags instead of ambient user-agent sniffing, so the
//! core stays platform-detection-free and tests can exercise both paths.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Some browsers (notably Safari) do not focus buttons on pointer
    /// click. When set, the host must focus the clicked tab element before
    /// dispatching `TabClick`, or the roving tabindex and the machine's
    /// focus state drift apart.
    pub force_focus_on_click: bool,
}

impl Platform {
    /// Conservative default for hosts that cannot detect the browser.
    pub fn web_default() -> Self {
        Self {
            force_focus_on_click: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert!(!Platform::default().force_focus_on_click);
        assert_eq!(Platform::default(), Platform::web_default());
    }
}
