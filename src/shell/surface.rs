// SPDX-License-Identifier: MPL-2.0
//! Ownership of the shared rendering surface.
//!
//! There is one video surface and several tabs that can host it (the
//! player, the playlist preview, the television view). The lease records
//! which tab hosts it; a transfer is the only way to move it.

use super::tab::TabId;

/// A completed ownership transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub from: TabId,
    pub to: TabId,
}

/// Single-owner lease on the shared rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceLease {
    owner: TabId,
}

impl SurfaceLease {
    #[must_use]
    pub fn new(owner: TabId) -> Self {
        Self { owner }
    }

    #[must_use]
    pub fn owner(&self) -> TabId {
        self.owner
    }

    /// Moves the surface to `tab`. Returns `None` when `tab` already owns it.
    pub fn transfer_to(&mut self, tab: TabId) -> Option<Transfer> {
        if self.owner == tab {
            return None;
        }
        let transfer = Transfer {
            from: self.owner,
            to: tab,
        };
        self.owner = tab;
        Some(transfer)
    }
}

impl Default for SurfaceLease {
    fn default() -> Self {
        Self::new(TabId::Player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_moves_owner() {
        let mut lease = SurfaceLease::default();
        let transfer = lease.transfer_to(TabId::Playlist);
        assert_eq!(
            transfer,
            Some(Transfer {
                from: TabId::Player,
                to: TabId::Playlist
            })
        );
        assert_eq!(lease.owner(), TabId::Playlist);
    }

    #[test]
    fn transfer_to_current_owner_is_noop() {
        let mut lease = SurfaceLease::default();
        assert_eq!(lease.transfer_to(TabId::Player), None);
        assert_eq!(lease.owner(), TabId::Player);
    }
}
