// =============================================================================
// error.rs - Typed errors for the picking pipeline
// error.rs - Erreurs typées pour le pipeline d'échantillonnage
// =============================================================================

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Erreurs pouvant survenir entre la lecture du curseur et l'échantillon final
/// Errors that can occur between reading the cursor and the final sample
#[derive(Error, Debug)]
pub enum PickError {
    /// Connexion au serveur d'affichage impossible
    /// Could not connect to the display server
    #[error("could not connect to the display server: {0}")]
    Connection(#[from] enigo::NewConError),

    /// Lecture de la position du curseur impossible
    /// Could not read the cursor position
    #[error("could not read the cursor position: {0}")]
    Pointer(#[from] enigo::InputError),

    /// L'outil de capture n'est pas installé
    /// The capture tool is not installed
    #[error("screenshot tool `{tool}` was not found; install it first ({hint})")]
    BackendMissing {
        tool: &'static str,
        hint: &'static str,
    },

    /// L'outil de capture a échoué
    /// The capture tool failed
    #[error("screenshot tool `{tool}` failed with {status}: {stderr}")]
    CaptureFailed {
        tool: &'static str,
        status: ExitStatus,
        stderr: String,
    },

    /// L'outil a réussi mais n'a rien écrit
    /// The tool succeeded but wrote nothing
    #[error("screenshot tool `{tool}` exited successfully but wrote no image to {path}")]
    EmptyCapture {
        tool: &'static str,
        path: PathBuf,
    },

    /// Le curseur est hors de l'image capturée (écran secondaire, etc.)
    /// The cursor is outside the captured image (secondary monitor, etc.)
    #[error("cursor position ({x}, {y}) is outside the captured image ({width}x{height})")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// Décodage de la capture impossible
    /// Could not decode the capture
    #[error("could not decode the screenshot: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Aucun backend de capture pour cette plateforme
    /// No capture backend for this platform
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    #[error("no screen-capture backend is available on this platform")]
    UnsupportedPlatform,
}

pub type Result<T> = std::result::Result<T, PickError>;
