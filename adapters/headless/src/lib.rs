#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Headless adapters for the Flappy simulation.
//!
//! These implement the stage and audio contracts without a window or sound
//! device. Tests and tooling use them to observe exactly which notifications
//! the simulation emits. The crate also loads tuning manifests from TOML.

mod audio;
mod stage;
mod tuning;

pub use audio::RecordingAudio;
pub use stage::{RecordingStage, DEFAULT_SCREEN};
pub use tuning::{load_tuning, parse_tuning};
