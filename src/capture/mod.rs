// =============================================================================
// capture/mod.rs - Screen capture module
// capture/mod.rs - Module de capture d'écran
// =============================================================================

use std::path::Path;
use std::process::Command;

use crate::error::{PickError, Result};

/// Implémentation Linux (sélection du backend selon l'environnement de bureau)
/// Linux implementation (backend selection based on the desktop environment)
#[cfg(target_os = "linux")]
pub mod linux;

/// Implémentation macOS
/// macOS implementation
#[cfg(target_os = "macos")]
pub mod macos;

// =============================================================================
// FONCTION PUBLIQUE
// PUBLIC FUNCTION
// =============================================================================

/// Capture l'écran entier vers un fichier PNG selon la plateforme
/// Captures the whole screen to a PNG file based on the platform
///
/// # Arguments
/// * `path` - Chemin du fichier de sortie / Output file path
pub fn capture_full(path: &Path) -> Result<()> {
    #[cfg(target_os = "linux")]
    {
        linux::capture_full(path)
    }

    #[cfg(target_os = "macos")]
    {
        macos::capture_full(path)
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        let _ = path;
        Err(PickError::UnsupportedPlatform)
    }
}

// =============================================================================
// INVOCATION DE L'OUTIL EXTERNE
// EXTERNAL TOOL INVOCATION
// =============================================================================

/// Exécute l'outil de capture et vérifie qu'il a bien écrit une image
/// Runs the capture tool and verifies that it actually wrote an image
///
/// Le chemin de sortie est toujours passé en dernier argument.
/// The output path is always passed as the last argument.
pub(crate) fn run_tool(
    tool: &'static str,
    args: &[&str],
    path: &Path,
    hint: &'static str,
) -> Result<()> {
    tracing::debug!(tool, path = %path.display(), "invoking screenshot tool");

    let output = Command::new(tool)
        .args(args)
        .arg(path)
        .output()
        .map_err(|e| match e.kind() {
            // Outil absent du PATH / Tool missing from PATH
            std::io::ErrorKind::NotFound => PickError::BackendMissing { tool, hint },
            _ => PickError::Io(e),
        })?;

    if !output.status.success() {
        return Err(PickError::CaptureFailed {
            tool,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    // Certains outils sortent avec succès sans rien écrire (capture annulée)
    // Some tools exit successfully without writing anything (cancelled capture)
    let written = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    if written == 0 {
        return Err(PickError::EmptyCapture {
            tool,
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        let err = run_tool("definitely-not-a-real-tool", &[], &path, "no such package");
        assert!(matches!(err, Err(PickError::BackendMissing { tool, .. }) if tool == "definitely-not-a-real-tool"));
    }

    #[test]
    fn test_failing_tool() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        // `false` ignores its arguments and exits with 1
        let err = run_tool("false", &[], &path, "coreutils");
        assert!(matches!(err, Err(PickError::CaptureFailed { tool, .. }) if tool == "false"));
    }

    #[test]
    fn test_tool_that_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        // `true` exits with 0 but never writes the file
        let err = run_tool("true", &[], &path, "coreutils");
        assert!(matches!(err, Err(PickError::EmptyCapture { .. })));
    }

    #[test]
    fn test_tool_that_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.png");
        std::fs::write(&src, b"not really a png, but not empty").unwrap();
        let path = dir.path().join("shot.png");
        // `cp <src> <path>` stands in for a well-behaved capture tool
        let src_arg = src.to_string_lossy().into_owned();
        run_tool("cp", &[src_arg.as_str()], &path, "coreutils").unwrap();
        assert!(path.exists());
    }
}
