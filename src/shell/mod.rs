// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent core of the main window.
//!
//! Everything in here is plain state: the app layer feeds it input and
//! applies the [`Effect`]s it returns.

pub mod chrome;
pub mod close;
pub mod controller;
pub mod idle_timer;
pub mod mode;
pub mod surface;
pub mod tab;

pub use chrome::{ChromeState, ToolBarArea, CONTROL_BAR_REVEAL_ZONE};
pub use close::{CloseDecision, CloseGuard, CloseOutcome};
pub use controller::{DisplayController, Effect, InputEvent, Key};
pub use idle_timer::{IdleTimer, CURSOR_HIDE_DELAY};
pub use mode::DisplayMode;
pub use surface::SurfaceLease;
pub use tab::{TabId, TabSet};
