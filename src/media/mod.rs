// SPDX-License-Identifier: MPL-2.0
//! Playback collaborators of the shell.
//!
//! Decoding is handled elsewhere; these types record playback requests and
//! the visible queue so the shell has something to drive.

pub mod deck;
pub mod playlist;
pub mod session;
pub mod television;

pub use deck::Deck;
pub use playlist::Playlist;
pub use session::{DiscKind, PlaybackRequest, Session};
pub use television::Television;

use std::path::Path;
use url::Url;

/// Resolves a launch argument or dialog entry to a URL.
///
/// Anything with a scheme is taken as a URL. Everything else is treated as
/// a local path, made absolute against the working directory. Returns
/// `None` for entries that cannot be expressed as a URL.
#[must_use]
pub fn resolve_url(argument: &str) -> Option<Url> {
    let argument = argument.trim();
    if argument.is_empty() {
        return None;
    }

    // Single-letter schemes are Windows drive letters.
    if let Ok(url) = Url::parse(argument) {
        if url.scheme().len() > 1 {
            return Some(url);
        }
    }

    path_to_url(Path::new(argument))
}

/// Converts a local path to a `file://` URL.
#[must_use]
pub fn path_to_url(path: &Path) -> Option<Url> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(path)
    };
    Url::from_file_path(absolute).ok()
}
