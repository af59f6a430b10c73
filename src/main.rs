//! =============================================================================
//! Color Picker - Application principale
//! Color Picker - Main application
//! =============================================================================
//!
//! Cette application lit la position du curseur, capture l'écran via un outil
//! externe propre à la plateforme et affiche la couleur du pixel sous le
//! curseur (RGB et hexadécimal).
//!
//! This application reads the cursor position, captures the screen through a
//! platform-specific external tool and reports the color of the pixel under
//! the cursor (RGB and hex).
//!
//! # Fonctionnalités / Features
//! - Sélection automatique de l'outil de capture selon l'environnement de
//!   bureau / Automatic capture-tool selection based on the desktop environment
//! - Mode --watch: échantillonnage continu / Continuous sampling
//! - Sortie --json pour les scripts / --json output for scripting
//!
//! # Contrôles / Controls
//! - Ctrl+C: quitter le mode --watch / Exit --watch mode

// =============================================================================
// MODULES
// =============================================================================

/// Capture d'écran par plateforme / Per-platform screen capture
mod capture;

/// Types de couleur partagés / Shared color types
mod common;

/// Configuration partagée (constantes)
/// Shared configuration (constants)
mod config;

/// Suivi de la position de la souris / Mouse position tracking
mod cursor;

/// Erreurs typées / Typed errors
mod error;

/// Initialisation du logging / Logging initialization
mod logger;

/// Pipeline curseur -> capture -> pixel / Cursor -> capture -> pixel pipeline
mod picker;

/// Échantillonnage de pixel / Pixel sampling
mod sample;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use common::PickedColor;
use picker::Picker;

// =============================================================================
// LIGNE DE COMMANDE
// COMMAND LINE
// =============================================================================

/// Reports the color of the pixel under the mouse cursor
#[derive(Parser, Debug)]
#[command(name = "color-picker", version)]
struct Cli {
    /// Label the sample as Background instead of Foreground
    #[arg(long)]
    bg: bool,

    /// Keep sampling every --interval seconds until interrupted
    #[arg(long)]
    watch: bool,

    /// Polling interval in seconds for --watch mode
    #[arg(long, default_value_t = config::DEFAULT_POLL_INTERVAL_SECS)]
    interval: u64,

    /// Emit each sample as a JSON object instead of the human-readable line
    #[arg(long)]
    json: bool,

    /// Keep the screenshot at the given path instead of a temp directory
    #[arg(long, value_name = "PATH")]
    keep: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

// =============================================================================
// SORTIE
// OUTPUT
// =============================================================================

/// Échantillon étiqueté pour la sortie JSON
/// Labeled sample for the JSON output
#[derive(Serialize)]
struct LabeledSample<'a> {
    label: &'a str,
    #[serde(flatten)]
    sample: &'a PickedColor,
}

/// Rend un échantillon en ligne lisible ou en JSON
/// Renders a sample as a human-readable line or as JSON
fn render_sample(label: &str, sample: &PickedColor, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(&LabeledSample { label, sample })?)
    } else {
        Ok(common::format_sample_line(label, sample))
    }
}

// =============================================================================
// POINT D'ENTRÉE
// ENTRY POINT
// =============================================================================

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    // Seuls Linux et macOS ont un backend de capture
    // Only Linux and macOS have a capture backend
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        eprintln!("Plateforme non supportée / Unsupported platform");
        std::process::exit(1);
    }

    // Par défaut l'échantillon est le premier plan, --bg pour l'arrière-plan
    // The sample is the foreground by default, --bg for the background
    let label = if cli.bg { "Background" } else { "Foreground" };

    let picker = Picker::new(cli.keep.clone()).context("could not initialize the picker")?;

    if cli.watch {
        tracing::info!(interval = cli.interval, "watching the cursor, Ctrl+C to stop");
        picker.watch(Duration::from_secs(cli.interval), |sample| {
            match render_sample(label, sample, cli.json) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::error!("could not render sample: {e}"),
            }
        })?;
    } else {
        let sample = picker.pick_once()?;
        println!("{}", render_sample(label, &sample, cli.json)?);
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
