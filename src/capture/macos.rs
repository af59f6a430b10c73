//! macOS screen capture
//!
//! Uses the native `screencapture` command that ships with the OS, so there
//! is nothing to install. `-x` suppresses the capture sound.

use std::path::Path;

use crate::config;
use crate::error::Result;

/// Capture l'écran entier vers `path` via `screencapture -x`
/// Captures the whole screen to `path` through `screencapture -x`
pub fn capture_full(path: &Path) -> Result<()> {
    super::run_tool(config::TOOL_SCREENCAPTURE, &["-x"], path, "ships with macOS")
}
