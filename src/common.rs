//! =============================================================================
//! COMMON.RS - Types et fonctions partagés
//! COMMON.RS - Shared types and functions
//! =============================================================================
//!
//! Ce module contient les types de couleur utilisés par tous les modules.
//! This module contains the color types used by every module.

use serde::Serialize;

// =============================================================================
// TYPES DE COULEUR
// COLOR TYPES
// =============================================================================

/// Une couleur RGB 8 bits par canal
/// An RGB color, 8 bits per channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb {
    /// Composante rouge (0-255) / Red component (0-255)
    pub r: u8,

    /// Composante verte (0-255) / Green component (0-255)
    pub g: u8,

    /// Composante bleue (0-255) / Blue component (0-255)
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formate la couleur en chaîne hexadécimale "#RRGGBB"
    /// Formats the color as a "#RRGGBB" hex string
    #[inline]
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Calcule la luminance relative de la couleur
    /// Calculates the relative luminance of the color
    ///
    /// Utilise la formule standard ITU-R BT.601:
    /// Uses the standard ITU-R BT.601 formula:
    /// Y = 0.299 * R + 0.587 * G + 0.114 * B
    ///
    /// # Returns
    /// Luminance entre 0.0 (noir) et 255.0 (blanc)
    /// Luminance between 0.0 (black) and 255.0 (white)
    #[inline]
    pub fn luminance(&self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    /// Détermine si la couleur est sombre (luminance sous le point médian)
    /// Determines if the color is dark (luminance below the midpoint)
    #[inline]
    pub fn is_dark(&self) -> bool {
        self.luminance() <= 128.0
    }
}

// =============================================================================
// RÉSULTAT D'ÉCHANTILLONNAGE
// SAMPLE RESULT
// =============================================================================

/// Une couleur échantillonnée sous le curseur
/// A color sampled under the cursor
#[derive(Clone, Debug, Serialize)]
pub struct PickedColor {
    /// Position X du curseur (pixels écran) / Cursor X position (screen pixels)
    pub x: i32,

    /// Position Y du curseur (pixels écran) / Cursor Y position (screen pixels)
    pub y: i32,

    /// La couleur échantillonnée / The sampled color
    pub rgb: Rgb,

    /// La couleur au format hexadécimal / The color in hexadecimal format
    pub hex: String,

    /// Si la couleur est sombre / If the color is dark
    pub is_dark: bool,
}

impl PickedColor {
    pub fn new(x: i32, y: i32, rgb: Rgb) -> Self {
        Self {
            x,
            y,
            hex: rgb.hex(),
            is_dark: rgb.is_dark(),
            rgb,
        }
    }
}

// =============================================================================
// FONCTIONS DE FORMATAGE
// FORMATTING FUNCTIONS
// =============================================================================

/// Formate un échantillon avec un préfixe (Foreground/Background)
/// Formats a sample with a prefix (Foreground/Background)
///
/// # Arguments
/// * `label` - Préfixe ("Foreground" ou "Background") / Prefix
/// * `sample` - L'échantillon à formater / The sample to format
///
/// # Returns
/// Chaîne au format "Label: RGB(r, g, b) | HEX: #RRGGBB"
/// String in "Label: RGB(r, g, b) | HEX: #RRGGBB" format
pub fn format_sample_line(label: &str, sample: &PickedColor) -> String {
    format!(
        "{}: RGB({}, {}, {}) | HEX: {}",
        label, sample.rgb.r, sample.rgb.g, sample.rgb.b, sample.hex
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance() {
        // Noir / Black
        assert!((Rgb::new(0, 0, 0).luminance() - 0.0).abs() < 0.001);
        // Blanc / White
        assert!((Rgb::new(255, 255, 255).luminance() - 255.0).abs() < 0.001);
        // Rouge pur / Pure red
        assert!((Rgb::new(255, 0, 0).luminance() - 76.245).abs() < 0.001);
    }

    #[test]
    fn test_is_dark() {
        // Noir -> sombre / Black -> dark
        assert!(Rgb::new(0, 0, 0).is_dark());
        // Blanc -> clair / White -> light
        assert!(!Rgb::new(255, 255, 255).is_dark());
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(Rgb::new(255, 0, 128).hex(), "#FF0080");
        assert_eq!(Rgb::new(0, 0, 0).hex(), "#000000");
    }

    #[test]
    fn test_format_sample_line() {
        let sample = PickedColor::new(10, 20, Rgb::new(255, 0, 0));
        assert_eq!(
            format_sample_line("Foreground", &sample),
            "Foreground: RGB(255, 0, 0) | HEX: #FF0000"
        );
        let sample = PickedColor::new(0, 0, Rgb::new(0, 255, 0));
        assert_eq!(
            format_sample_line("Background", &sample),
            "Background: RGB(0, 255, 0) | HEX: #00FF00"
        );
    }

    #[test]
    fn test_picked_color_json() {
        let sample = PickedColor::new(5, 7, Rgb::new(18, 52, 86));
        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(json["x"], 5);
        assert_eq!(json["y"], 7);
        assert_eq!(json["hex"], "#123456");
        assert_eq!(json["rgb"]["g"], 52);
        assert_eq!(json["is_dark"], true);
    }
}
