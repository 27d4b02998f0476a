// SPDX-License-Identifier: MPL-2.0
//! Tabs sharing the main content region.

use std::fmt;

/// One of the fixed content panels of the main window.
///
/// The discriminant is the tab's position in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TabId {
    Start = 0,
    Player = 1,
    Playlist = 2,
    Television = 3,
}

impl TabId {
    /// Label shown in the navigation bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TabId::Start => "Start",
            TabId::Player => "Playback",
            TabId::Playlist => "Playlist",
            TabId::Television => "Television",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered set of tabs configured for this build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<TabId>,
}

impl TabSet {
    /// Start, Playback and Playlist, plus Television when the `television`
    /// feature is compiled in.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(cfg!(feature = "television"))
    }

    /// Builds the tab set with or without the Television tab.
    #[must_use]
    pub fn new(with_television: bool) -> Self {
        let mut tabs = vec![TabId::Start, TabId::Player, TabId::Playlist];
        if with_television {
            tabs.push(TabId::Television);
        }
        Self { tabs }
    }

    #[must_use]
    pub fn contains(&self, tab: TabId) -> bool {
        self.tabs.contains(&tab)
    }

    /// Resolves a navigation bar position within this set.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<TabId> {
        self.tabs.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TabId> + '_ {
        self.tabs.iter().copied()
    }
}

impl Default for TabSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn television_is_optional() {
        let without = TabSet::new(false);
        assert_eq!(without.len(), 3);
        assert!(!without.contains(TabId::Television));
        assert_eq!(without.get(3), None);

        let with = TabSet::new(true);
        assert_eq!(with.get(3), Some(TabId::Television));
    }

    #[test]
    fn tabs_keep_navigation_order() {
        let order: Vec<_> = TabSet::new(true).iter().collect();
        assert_eq!(
            order,
            vec![
                TabId::Start,
                TabId::Player,
                TabId::Playlist,
                TabId::Television
            ]
        );
    }
}
