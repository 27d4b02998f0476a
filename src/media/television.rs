// SPDX-License-Identifier: MPL-2.0
//! Television tab stand-in.
//!
//! Tuning is out of scope; this keeps the channel bookkeeping the shell
//! needs and blocks closing the window while a recording runs.

use crate::shell::{CloseDecision, CloseGuard};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Television {
    current_channel: Option<String>,
    last_channel: Option<String>,
    recording: bool,
    dump_enabled: bool,
}

impl Television {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tunes to `channel` (a name or a number) and returns it. Blank names
    /// are ignored.
    pub fn play_channel(&mut self, channel: &str) -> Option<String> {
        let channel = channel.trim();
        if channel.is_empty() {
            log::warn!("ignoring empty channel name");
            return None;
        }
        let channel = channel.to_string();
        self.current_channel = Some(channel.clone());
        self.last_channel = Some(channel.clone());
        Some(channel)
    }

    /// Tunes to the most recently played channel, if any.
    pub fn play_last_channel(&mut self) -> Option<String> {
        let last = self.last_channel.clone()?;
        self.current_channel = Some(last.clone());
        Some(last)
    }

    #[must_use]
    pub fn current_channel(&self) -> Option<&str> {
        self.current_channel.as_deref()
    }

    /// Seeds the channel used by [`Television::play_last_channel`].
    pub fn set_last_channel(&mut self, channel: Option<String>) {
        self.last_channel = channel;
    }

    #[must_use]
    pub fn last_channel(&self) -> Option<&str> {
        self.last_channel.as_deref()
    }

    /// Starts or stops recording the current channel.
    pub fn toggle_recording(&mut self) {
        if self.recording {
            self.recording = false;
        } else if self.current_channel.is_some() {
            self.recording = true;
        }
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Enables dumping of raw transport data for debugging.
    pub fn enable_dump(&mut self) {
        log::info!("television data dump enabled");
        self.dump_enabled = true;
    }

    #[must_use]
    pub fn is_dump_enabled(&self) -> bool {
        self.dump_enabled
    }
}

impl CloseGuard for Television {
    fn name(&self) -> &str {
        "television"
    }

    fn may_close(&mut self) -> CloseDecision {
        if self.recording {
            CloseDecision::Veto
        } else {
            CloseDecision::Allow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_channel_follows_played_channel() {
        let mut tv = Television::new();
        assert_eq!(tv.play_last_channel(), None);

        tv.play_channel(" 7 ");
        assert_eq!(tv.play_last_channel().as_deref(), Some("7"));
    }

    #[test]
    fn blank_channel_is_ignored() {
        let mut tv = Television::new();
        tv.play_channel("Arte");

        assert_eq!(tv.play_channel("   "), None);
        assert_eq!(tv.current_channel(), Some("Arte"));
        assert_eq!(tv.last_channel(), Some("Arte"));
    }

    #[test]
    fn recording_needs_a_channel() {
        let mut tv = Television::new();
        tv.toggle_recording();
        assert!(!tv.is_recording());

        tv.play_channel("Das Erste");
        tv.toggle_recording();
        assert!(tv.is_recording());
    }

    #[test]
    fn running_recording_vetoes_close() {
        let mut tv = Television::new();
        tv.play_channel("Das Erste");
        tv.toggle_recording();
        assert_eq!(tv.may_close(), CloseDecision::Veto);

        tv.toggle_recording();
        assert_eq!(tv.may_close(), CloseDecision::Allow);
    }
}
