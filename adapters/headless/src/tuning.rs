use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use flappy_core::tuning::Tuning;
use serde::Deserialize;

const SUPPORTED_MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct TuningManifest {
    version: u32,
    #[serde(flatten)]
    tuning: Tuning,
}

/// Loads a tuning manifest from disk.
pub fn load_tuning(path: impl AsRef<Path>) -> Result<Tuning> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read tuning manifest {}", path.display()))?;
    parse_tuning(&contents).with_context(|| format!("invalid tuning manifest {}", path.display()))
}

/// Parses a tuning manifest. Omitted sections and keys keep their defaults.
pub fn parse_tuning(contents: &str) -> Result<Tuning> {
    let manifest: TuningManifest =
        toml::from_str(contents).context("failed to parse tuning manifest toml contents")?;
    if manifest.version != SUPPORTED_MANIFEST_VERSION {
        bail!(
            "unsupported tuning manifest version {} (expected {SUPPORTED_MANIFEST_VERSION})",
            manifest.version
        );
    }

    let tuning = manifest.tuning;
    let pipes = &tuning.pipes;
    if pipes.min_gap_size > pipes.max_gap_size {
        bail!(
            "pipe gap size range is inverted: {} > {}",
            pipes.min_gap_size,
            pipes.max_gap_size
        );
    }
    if pipes.min_gap_y > pipes.max_gap_y {
        bail!(
            "pipe gap position range is inverted: {} > {}",
            pipes.min_gap_y,
            pipes.max_gap_y
        );
    }
    if tuning.physics.terminal_velocity <= 0.0 {
        bail!("terminal velocity must be positive");
    }

    Ok(tuning)
}
