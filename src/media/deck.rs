// SPDX-License-Identifier: MPL-2.0
//! Playback collaborators bundled for the shell.
//!
//! The deck routes "play this" requests to the session, playlist and
//! television stand-ins and selects the matching tab on the controller.

use super::playlist::Playlist;
use super::session::{DiscKind, PlaybackRequest, Session};
use super::television::Television;
use crate::config::MAX_RECENT_URLS;
use crate::shell::{CloseGuard, DisplayController, Effect, TabId};
use url::Url;

#[derive(Debug, Clone, Default)]
pub struct Deck {
    session: Session,
    playlist: Playlist,
    television: Television,
    recent_urls: Vec<String>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a deck seeded with recent URLs from a previous session.
    #[must_use]
    pub fn with_recent(recent_urls: Vec<String>) -> Self {
        let mut recent_urls = recent_urls;
        recent_urls.truncate(MAX_RECENT_URLS);
        Self {
            recent_urls,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[must_use]
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    #[must_use]
    pub fn television(&self) -> &Television {
        &self.television
    }

    pub fn television_mut(&mut self) -> &mut Television {
        &mut self.television
    }

    /// Recently opened URLs, most recent first.
    #[must_use]
    pub fn recent_urls(&self) -> &[String] {
        &self.recent_urls
    }

    /// Opens a single URL. The player tab is brought forward unless the
    /// playlist is the selected tab.
    pub fn open_url(&mut self, controller: &mut DisplayController, url: Url) -> Vec<Effect> {
        let effects = if controller.current_tab() == TabId::Playlist {
            Vec::new()
        } else {
            controller.activate_tab(TabId::Player)
        };

        self.remember_url(&url);
        if let Some(first) = self.playlist.append(vec![url], true) {
            self.session.play(PlaybackRequest::Url(first));
        }
        effects
    }

    /// Opens several URLs at once. Two or more go to the playlist tab.
    pub fn open_urls(&mut self, controller: &mut DisplayController, urls: Vec<Url>) -> Vec<Effect> {
        match urls.len() {
            0 => Vec::new(),
            1 => {
                let mut urls = urls;
                match urls.pop() {
                    Some(url) => self.open_url(controller, url),
                    None => Vec::new(),
                }
            }
            count => {
                log::debug!("appending {count} entries to the playlist");
                let effects = controller.activate_tab(TabId::Playlist);
                if let Some(first) = self.playlist.append(urls, true) {
                    self.session.play(PlaybackRequest::Url(first));
                }
                effects
            }
        }
    }

    /// Plays a playlist entry in place.
    pub fn play_entry(&mut self, index: usize) {
        match self.playlist.play(index) {
            Some(url) => self.session.play(PlaybackRequest::Url(url)),
            None => log::warn!("playlist entry {index} does not exist"),
        }
    }

    pub fn play_disc(
        &mut self,
        controller: &mut DisplayController,
        kind: DiscKind,
        device: Option<String>,
    ) -> Vec<Effect> {
        let effects = controller.activate_tab(TabId::Player);
        self.session.play(PlaybackRequest::Disc { kind, device });
        effects
    }

    pub fn play_channel(&mut self, controller: &mut DisplayController, channel: &str) -> Vec<Effect> {
        let Some(channel) = self.television.play_channel(channel) else {
            return Vec::new();
        };
        let effects = Self::activate_television(controller);
        self.session.play(PlaybackRequest::Channel(channel));
        effects
    }

    pub fn play_last_channel(&mut self, controller: &mut DisplayController) -> Vec<Effect> {
        let effects = Self::activate_television(controller);
        match self.television.play_last_channel() {
            Some(channel) => self.session.play(PlaybackRequest::Channel(channel)),
            None => log::info!("no channel has been played yet"),
        }
        effects
    }

    /// Collaborators asked before the main window closes.
    pub fn close_guards(&mut self) -> [&mut dyn CloseGuard; 2] {
        [&mut self.playlist, &mut self.television]
    }

    fn activate_television(controller: &mut DisplayController) -> Vec<Effect> {
        if controller.tabs().contains(TabId::Television) {
            controller.activate_tab(TabId::Television)
        } else {
            log::warn!("television support is not available");
            Vec::new()
        }
    }

    fn remember_url(&mut self, url: &Url) {
        let url = url.to_string();
        self.recent_urls.retain(|existing| *existing != url);
        self.recent_urls.insert(0, url);
        self.recent_urls.truncate(MAX_RECENT_URLS);
    }
}
