// =============================================================================
// sample.rs - Pixel sampling from the captured screenshot
// sample.rs - Échantillonnage de pixel depuis la capture d'écran
// =============================================================================

use std::path::Path;

use crate::common::Rgb;
use crate::error::{PickError, Result};

/// Lit la couleur du pixel `(x, y)` dans l'image capturée
/// Reads the color of pixel `(x, y)` in the captured image
///
/// # Arguments
/// * `path` - Chemin de la capture PNG / Path of the PNG capture
/// * `x`, `y` - Position du curseur (pixels logiques) / Cursor position (logical pixels)
/// * `logical` - Taille logique de l'écran principal / Logical size of the main display
pub fn sample_pixel(path: &Path, x: i32, y: i32, logical: (u32, u32)) -> Result<Rgb> {
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();

    // Sur écran HiDPI la capture peut être un multiple entier de l'espace logique
    // On HiDPI screens the capture can be an integer multiple of the logical space
    let factor = scale_factor((width, height), logical);
    if factor > 1 {
        tracing::debug!(factor, "HiDPI capture detected, scaling cursor coordinates");
    }

    // Coordonnées négatives: curseur sur un écran secondaire à gauche/au-dessus
    // Negative coordinates: cursor on a secondary monitor left of/above the primary
    if x < 0 || y < 0 {
        return Err(PickError::OutOfBounds { x, y, width, height });
    }

    let px = (x as u32).saturating_mul(factor);
    let py = (y as u32).saturating_mul(factor);
    if px >= width || py >= height {
        return Err(PickError::OutOfBounds { x, y, width, height });
    }

    let pixel = img.get_pixel(px, py);
    Ok(Rgb::new(pixel[0], pixel[1], pixel[2]))
}

/// Facteur d'échelle entre la capture et l'espace logique
/// Scale factor between the capture and the logical space
///
/// Retourne 1 sauf si la capture est exactement un multiple entier identique
/// sur les deux axes.
/// Returns 1 unless the capture is exactly the same integer multiple on both
/// axes.
fn scale_factor(capture: (u32, u32), logical: (u32, u32)) -> u32 {
    let (cw, ch) = capture;
    let (lw, lh) = logical;
    if lw == 0 || lh == 0 || cw % lw != 0 || ch % lh != 0 {
        return 1;
    }
    let fx = cw / lw;
    let fy = ch / lh;
    if fx == fy && fx >= 1 {
        fx
    } else {
        1
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    /// Écrit une image 4x4 bleue avec un pixel rouge en (1, 2)
    /// Writes a blue 4x4 image with one red pixel at (1, 2)
    fn write_test_image(path: &Path) {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        img.put_pixel(1, 2, Rgba([255, 0, 0, 255]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_sample_pixel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        write_test_image(&path);

        assert_eq!(sample_pixel(&path, 1, 2, (4, 4)).unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(sample_pixel(&path, 0, 0, (4, 4)).unwrap(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_sample_out_of_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        write_test_image(&path);

        assert!(matches!(
            sample_pixel(&path, 9, 0, (4, 4)),
            Err(PickError::OutOfBounds { x: 9, width: 4, .. })
        ));
        assert!(matches!(
            sample_pixel(&path, -1, 0, (4, 4)),
            Err(PickError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_sample_hidpi_scaling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");

        // Capture 8x8 pour un écran logique 4x4 -> facteur 2
        // 8x8 capture for a 4x4 logical display -> factor 2
        let mut img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255]));
        img.put_pixel(2, 4, Rgba([255, 0, 0, 255]));
        img.save(&path).unwrap();

        assert_eq!(sample_pixel(&path, 1, 2, (4, 4)).unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_scale_factor() {
        // Retina 2x
        assert_eq!(scale_factor((3840, 2160), (1920, 1080)), 2);
        // 1:1
        assert_eq!(scale_factor((1920, 1080), (1920, 1080)), 1);
        // Pas un multiple entier / Not an integer multiple
        assert_eq!(scale_factor((2560, 1080), (1920, 1080)), 1);
        // Facteurs différents par axe / Different factors per axis
        assert_eq!(scale_factor((3840, 1080), (1920, 1080)), 1);
        // Taille logique inconnue / Unknown logical size
        assert_eq!(scale_factor((1920, 1080), (0, 0)), 1);
    }
}
