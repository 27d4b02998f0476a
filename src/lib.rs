// SPDX-License-Identifier: MPL-2.0
//! `media_deck` is the main window shell of a desktop media player built
//! with the Iced GUI framework.
//!
//! The heart of the crate is [`shell::DisplayController`], a toolkit-free
//! state machine for display modes, tab selection, chrome auto-hiding and
//! close vetoes. The [`app`] module wires it to an Iced window.

pub mod app;
pub mod config;
pub mod error;
pub mod launch;
pub mod media;
pub mod shell;
pub mod ui;
