// SPDX-License-Identifier: MPL-2.0
//! Visible playlist stand-in.

use crate::shell::{CloseDecision, CloseGuard};
use url::Url;

/// Ordered queue of URLs shown in the playlist tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    entries: Vec<Url>,
    current: Option<usize>,
}

impl Playlist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `urls`. With `play_first`, the first appended entry becomes
    /// current and is returned.
    pub fn append(&mut self, urls: Vec<Url>, play_first: bool) -> Option<Url> {
        let first_index = self.entries.len();
        let first = urls.first().cloned();
        self.entries.extend(urls);

        if play_first && first.is_some() {
            self.current = Some(first_index);
            first
        } else {
            None
        }
    }

    /// Makes the entry at `index` current.
    pub fn play(&mut self, index: usize) -> Option<Url> {
        let url = self.entries.get(index)?.clone();
        self.current = Some(index);
        Some(url)
    }

    #[must_use]
    pub fn entries(&self) -> &[Url] {
        &self.entries
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CloseGuard for Playlist {
    fn name(&self) -> &str {
        "playlist"
    }

    fn may_close(&mut self) -> CloseDecision {
        log::debug!("playlist holds {} entries at close", self.entries.len());
        CloseDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(path: &str) -> Url {
        Url::parse(&format!("file://{path}")).expect("valid url")
    }

    #[test]
    fn append_and_play_selects_first_new_entry() {
        let mut playlist = Playlist::new();
        playlist.append(vec![url("/a.ogg")], false);

        let playing = playlist.append(vec![url("/b.ogg"), url("/c.ogg")], true);

        assert_eq!(playing, Some(url("/b.ogg")));
        assert_eq!(playlist.current_index(), Some(1));
        assert_eq!(playlist.entries().len(), 3);
    }

    #[test]
    fn append_nothing_keeps_current() {
        let mut playlist = Playlist::new();
        playlist.append(vec![url("/a.ogg")], true);
        assert_eq!(playlist.append(Vec::new(), true), None);
        assert_eq!(playlist.current_index(), Some(0));
    }

    #[test]
    fn play_out_of_range_changes_nothing() {
        let mut playlist = Playlist::new();
        playlist.append(vec![url("/a.ogg"), url("/b.ogg")], false);

        assert_eq!(playlist.play(1), Some(url("/b.ogg")));
        assert_eq!(playlist.play(5), None);
        assert_eq!(playlist.current_index(), Some(1));
    }

    #[test]
    fn playlist_never_blocks_close() {
        let mut playlist = Playlist::new();
        assert_eq!(playlist.may_close(), CloseDecision::Allow);
    }
}
