// =============================================================================
// picker.rs - The sampling pipeline: cursor -> capture -> pixel
// picker.rs - Le pipeline d'échantillonnage: curseur -> capture -> pixel
// =============================================================================

use std::path::PathBuf;
use std::thread::sleep;
use std::time::Duration;

use tempfile::TempDir;

use crate::capture;
use crate::common::PickedColor;
use crate::config;
use crate::cursor::CursorTracker;
use crate::error::{PickError, Result};
use crate::sample;

/// Pipeline d'échantillonnage de couleur sous le curseur
/// Color sampling pipeline under the cursor
pub struct Picker {
    tracker: CursorTracker,

    /// Répertoire temporaire de la capture, supprimé au drop
    /// Temp directory holding the capture, removed on drop
    _temp: Option<TempDir>,

    /// Chemin du fichier de capture / Capture file path
    shot_path: PathBuf,
}

impl Picker {
    /// Prépare le tracker et le fichier de capture
    /// Prepares the tracker and the capture file
    ///
    /// # Arguments
    /// * `keep` - Chemin où conserver la capture; sinon un répertoire temporaire
    /// * `keep` - Path where the capture is kept; otherwise a temp directory
    pub fn new(keep: Option<PathBuf>) -> Result<Self> {
        let tracker = CursorTracker::new()?;
        let (temp, shot_path) = match keep {
            Some(path) => (None, path),
            None => {
                let dir = tempfile::tempdir()?;
                let path = dir.path().join(config::SCREENSHOT_FILE_NAME);
                (Some(dir), path)
            }
        };
        Ok(Self {
            tracker,
            _temp: temp,
            shot_path,
        })
    }

    /// Échantillonne une fois la couleur sous le curseur
    /// Samples the color under the cursor once
    pub fn pick_once(&self) -> Result<PickedColor> {
        // Position du curseur d'abord, pour capturer l'écran le plus tôt possible après
        // Cursor position first, so the capture happens as soon after as possible
        let (x, y) = self.tracker.position()?;
        tracing::debug!(x, y, "cursor position");

        capture::capture_full(&self.shot_path)?;

        let (dw, dh) = self.tracker.display_size()?;
        let logical = (dw.max(0) as u32, dh.max(0) as u32);
        let rgb = sample::sample_pixel(&self.shot_path, x, y, logical)?;

        Ok(PickedColor::new(x, y, rgb))
    }

    /// Échantillonne en boucle jusqu'à interruption (Ctrl+C)
    /// Samples in a loop until interrupted (Ctrl+C)
    ///
    /// Les erreurs transitoires sont journalisées et la boucle continue;
    /// un outil de capture absent arrête la boucle.
    /// Transient errors are logged and the loop continues; a missing capture
    /// tool stops the loop.
    pub fn watch<F: FnMut(&PickedColor)>(&self, interval: Duration, mut emit: F) -> Result<()> {
        loop {
            match self.pick_once() {
                Ok(sample) => emit(&sample),
                // Un outil absent ne reviendra pas tout seul
                // A missing tool will not come back on its own
                Err(e @ PickError::BackendMissing { .. }) => return Err(e),
                Err(e) => tracing::warn!("sampling failed: {e}"),
            }
            sleep(interval);
        }
    }
}
