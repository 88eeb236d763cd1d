//! Top-level application state.
//!
//! Owns the X11 overview window and drives a single-threaded loop: poll X
//! events, dispatch clicks, repaint on expose, and repaint thumbnails when
//! the refresh interval elapses.

mod core;
mod event_handler;
mod init;
mod polling;
mod render;
mod shutdown;
mod types;

pub use core::OverviewApp;
