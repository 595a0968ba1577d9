//! UI primitives for the Enczil CLI.
//!
//! This module provides:
//! - **Context**: Output mode and terminal detection (TTY, width, color, unicode)
//! - **Theme**: Badge tokens, color styles, spinner frames
//! - **Render**: Badges, key-value lines, hints, receipts
//! - **Progress**: Spinner shown while a worker thread runs
//! - **Format**: String utilities (byte sizes, truncation)

mod context;
pub mod format;
pub mod progress;
pub mod render;
pub mod theme;

pub use context::{OutputMode, UiContext};
pub use theme::Badge;

pub use render::{badge, hint, kv, receipt};

pub use progress::run_with_spinner;

pub use format::{format_bytes, truncate};
