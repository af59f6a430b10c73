// =============================================================================
// cursor.rs - Mouse position tracking
// cursor.rs - Suivi de la position de la souris
// =============================================================================

use enigo::{Enigo, Mouse, Settings};

use crate::error::Result;

/// Suivi du curseur via la bibliothèque native enigo
/// Cursor tracking through the native enigo library
pub struct CursorTracker {
    enigo: Enigo,
}

impl CursorTracker {
    /// Ouvre la connexion au serveur d'affichage
    /// Opens the connection to the display server
    pub fn new() -> Result<Self> {
        let enigo = Enigo::new(&Settings::default())?;
        Ok(Self { enigo })
    }

    /// Position globale actuelle du curseur (pixels écran, origine en haut à gauche)
    /// Current global cursor position (screen pixels, top-left origin)
    pub fn position(&self) -> Result<(i32, i32)> {
        Ok(self.enigo.location()?)
    }

    /// Taille logique de l'écran principal
    /// Logical size of the main display
    ///
    /// Used to detect HiDPI captures larger than the logical coordinate space.
    pub fn display_size(&self) -> Result<(i32, i32)> {
        Ok(self.enigo.main_display()?)
    }
}
