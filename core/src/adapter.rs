use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Entity, EntityId};

/// Size of the drawable area in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenDimensions {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl ScreenDimensions {
    /// Creates a new dimension pair.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Failure reported by an external adapter.
///
/// The simulation never retries a failed notification; it logs and moves on.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The stage could not present an entity.
    #[error("stage failed to update `{id}`: {reason}")]
    Update {
        /// Entity that failed to render.
        id: EntityId,
        /// Adapter-provided description.
        reason: String,
    },
    /// The stage could not tear down an entity's renderer.
    #[error("stage failed to remove `{id}`: {reason}")]
    Remove {
        /// Entity whose renderer survived.
        id: EntityId,
        /// Adapter-provided description.
        reason: String,
    },
    /// The audio backend rejected a request.
    #[error("audio failed for `{sound}`: {reason}")]
    Audio {
        /// Sound that was requested.
        sound: Sound,
        /// Adapter-provided description.
        reason: String,
    },
}

/// Rendering-side collaborator that mirrors entity state on screen.
pub trait StageAdapter {
    /// Creates or refreshes the renderer for `entity`, dispatching on its kind.
    fn update(&mut self, entity: &Entity) -> Result<(), AdapterError>;

    /// Tears down the renderer associated with `id`.
    fn remove_entity(&mut self, id: &EntityId) -> Result<(), AdapterError>;

    /// Current drawable area, used to convert reference-space tuning values.
    fn screen_dimensions(&self) -> ScreenDimensions;
}

/// Named sound effects triggered by gameplay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    /// Wing flap.
    Wing,
    /// Point scored.
    Point,
    /// Bird struck an obstacle.
    Hit,
}

impl Sound {
    /// Asset key used by audio backends.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wing => "wing",
            Self::Point => "point",
            Self::Hit => "hit",
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Audio collaborator. Only [`AudioAdapter::play_sound`] is driven by the simulation;
/// the remaining methods belong to whoever owns the adapter.
pub trait AudioAdapter {
    /// Registers the asset backing `sound` so it can be played without delay.
    fn preload_sound(&mut self, sound: Sound, path: &str) -> Result<(), AdapterError>;

    /// Starts playback of `sound`.
    fn play_sound(&mut self, sound: Sound) -> Result<(), AdapterError>;

    /// Stops playback of `sound` if it is running.
    fn stop_sound(&mut self, sound: Sound) -> Result<(), AdapterError>;

    /// Sets the playback volume of `sound` in the range `0.0..=1.0`.
    fn set_volume(&mut self, sound: Sound, volume: f32) -> Result<(), AdapterError>;
}
