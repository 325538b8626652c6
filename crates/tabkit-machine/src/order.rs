//! Navigation order
//!
//! Circular next/previous over the rendered tab sequence, skipping disabled
//! descriptors. Deliberately orientation-agnostic: the machine decides which
//! arrow key means "next", this component only walks the linear order.

use crate::descriptor::TabDescriptor;

pub struct NavigationOrder<'a> {
    tabs: &'a [TabDescriptor],
}

impl<'a> NavigationOrder<'a> {
    pub fn new(tabs: &'a [TabDescriptor]) -> Self {
        Self { tabs }
    }

    /// Circular successor of `current`, skipping disabled tabs.
    ///
    /// If no other tab is selectable (including the all-disabled case),
    /// returns `current` unchanged.
    pub fn next<'b>(&'b self, current: &'b str) -> &'b str
    where
        'a: 'b,
    {
        let Some(pos) = self.position(current) else {
            return self.first().unwrap_or(current);
        };

        let len = self.tabs.len();
        (pos + 1..len)
            .chain(0..=pos)
            .map(|i| &self.tabs[i])
            .find(|t| !t.disabled)
            .map(|t| t.value.as_str())
            .unwrap_or(current)
    }

    /// Circular predecessor of `current`, skipping disabled tabs.
    pub fn prev<'b>(&'b self, current: &'b str) -> &'b str
    where
        'a: 'b,
    {
        let Some(pos) = self.position(current) else {
            return self.last().unwrap_or(current);
        };

        let len = self.tabs.len();
        (0..pos)
            .rev()
            .chain((pos..len).rev())
            .map(|i| &self.tabs[i])
            .find(|t| !t.disabled)
            .map(|t| t.value.as_str())
            .unwrap_or(current)
    }

    /// First selectable value (Home target). `None` when every tab is disabled.
    pub fn first(&self) -> Option<&'a str> {
        self.tabs
            .iter()
            .find(|t| !t.disabled)
            .map(|t| t.value.as_str())
    }

    /// Last selectable value (End target).
    pub fn last(&self) -> Option<&'a str> {
        self.tabs
            .iter()
            .rev()
            .find(|t| !t.disabled)
            .map(|t| t.value.as_str())
    }

    /// Whether `value` names a present, enabled descriptor.
    pub fn is_selectable(&self, value: &str) -> bool {
        self.tabs.iter().any(|t| t.value == value && !t.disabled)
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.value == value)
    }
}
