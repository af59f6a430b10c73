//! Configuration constants shared across all platforms
//!
//! These values control the polling cadence and the external capture tools.

/// Default polling interval for --watch mode (in seconds)
/// Intervalle de sondage par défaut pour le mode --watch (en secondes)
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 2;

/// File name of the intermediate screenshot inside the temp directory
pub const SCREENSHOT_FILE_NAME: &str = "screenshot.png";

// =============================================================================
// Environment variables used for desktop environment detection (Linux)
// Variables d'environnement pour la détection de l'environnement de bureau
// =============================================================================

/// Primary desktop environment hint, e.g. "ubuntu:GNOME" or "KDE"
#[cfg(target_os = "linux")]
pub const ENV_XDG_CURRENT_DESKTOP: &str = "XDG_CURRENT_DESKTOP";

/// Set by the sway compositor; its presence alone identifies sway
#[cfg(target_os = "linux")]
pub const ENV_SWAYSOCK: &str = "SWAYSOCK";

/// Legacy session hint, checked when XDG_CURRENT_DESKTOP is absent
#[cfg(target_os = "linux")]
pub const ENV_DESKTOP_SESSION: &str = "DESKTOP_SESSION";

// =============================================================================
// External screen-capture tools
// Outils externes de capture d'écran
// =============================================================================

/// GNOME desktop screenshot tool
#[cfg(target_os = "linux")]
pub const TOOL_GNOME_SCREENSHOT: &str = "gnome-screenshot";

/// KDE screenshot utility
#[cfg(target_os = "linux")]
pub const TOOL_SPECTACLE: &str = "spectacle";

/// Wayland screenshot tool used under sway
#[cfg(target_os = "linux")]
pub const TOOL_GRIM: &str = "grim";

/// Generic X11 fallback screenshot tool
#[cfg(target_os = "linux")]
pub const TOOL_SCROT: &str = "scrot";

/// macOS native capture command (ships with the OS)
#[cfg(target_os = "macos")]
pub const TOOL_SCREENCAPTURE: &str = "screencapture";
