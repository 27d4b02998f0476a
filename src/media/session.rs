// SPDX-License-Identifier: MPL-2.0
//! Playback session stand-in.
//!
//! Records what the player was last asked to play. Decoding and rendering
//! live outside this crate; the session only keeps enough to drive the
//! window caption and the control bar.

use std::fmt;
use url::Url;

/// Optical disc formats the player can be pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscKind {
    AudioCd,
    VideoCd,
    Dvd,
}

impl fmt::Display for DiscKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DiscKind::AudioCd => "Audio CD",
            DiscKind::VideoCd => "Video CD",
            DiscKind::Dvd => "DVD",
        })
    }
}

/// A request handed to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackRequest {
    Url(Url),
    Disc {
        kind: DiscKind,
        device: Option<String>,
    },
    Channel(String),
}

impl PlaybackRequest {
    /// Short human-readable title.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            PlaybackRequest::Url(url) => url_title(url),
            PlaybackRequest::Disc {
                kind,
                device: Some(device),
            } => format!("{kind} ({device})"),
            PlaybackRequest::Disc { kind, device: None } => kind.to_string(),
            PlaybackRequest::Channel(name) => name.clone(),
        }
    }
}

fn url_title(url: &Url) -> String {
    if let Some(name) = url
        .to_file_path()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
    {
        return name;
    }

    url.path_segments()
        .and_then(|segments| segments.last())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| url.to_string())
}

/// What the player is doing right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current: Option<PlaybackRequest>,
    paused: bool,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, request: PlaybackRequest) {
        log::info!("playing {}", request.title());
        self.current = Some(request);
        self.paused = false;
    }

    #[must_use]
    pub fn current(&self) -> Option<&PlaybackRequest> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Toggles pause; does nothing while idle.
    pub fn toggle_pause(&mut self) {
        if self.current.is_some() {
            self.paused = !self.paused;
        }
    }

    pub fn stop(&mut self) {
        self.current = None;
        self.paused = false;
    }

    /// Caption shown in the window title.
    #[must_use]
    pub fn caption(&self) -> Option<String> {
        self.current.as_ref().map(PlaybackRequest::title)
    }
}
