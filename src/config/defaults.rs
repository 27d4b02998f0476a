// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and window constants.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Recent**: Recently opened URL list
//! - **Timing**: Polling interval of the idle cursor timer

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 620.0;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

// ==========================================================================
// Recent URL Defaults
// ==========================================================================

/// Maximum number of entries kept in the recent URL list.
pub const MAX_RECENT_URLS: usize = 10;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Interval at which an armed idle timer is polled (in milliseconds).
pub const IDLE_POLL_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
    assert!(MAX_RECENT_URLS > 0);
    assert!(IDLE_POLL_INTERVAL_MS > 0);
};
