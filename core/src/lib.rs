#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Flappy simulation.
//!
//! This crate defines the message surface that connects the engine, pure
//! systems and external adapters. Drivers dispatch [`Event`] values onto the
//! engine's bus, systems inspect an immutable [`GameState`] snapshot for each
//! event and respond exclusively with [`Command`] batches, and the engine
//! folds those commands into the next state while notifying the
//! [`StageAdapter`].

mod adapter;
mod entity;
mod state;
pub mod tuning;
mod vector;

pub use adapter::{AdapterError, AudioAdapter, ScreenDimensions, Sound, StageAdapter};
pub use entity::{
    Alignment, Background, Bird, Entity, EntityId, EntityKind, Ground, Pipe, Scene, Score,
};
pub use state::{GameState, PipeGenerationState};
pub use vector::Vector;

use serde::{Deserialize, Serialize};

/// Events consumed by systems. Each call to the engine's `tick` processes one
/// generation of them in dispatch order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Synthesised once per tick after every externally dispatched event.
    Tick {
        /// Elapsed time in frames (1.0 is one frame at 60fps).
        delta_time: f32,
    },
    /// Raw pointer press from the input boundary.
    MouseClick {
        /// Horizontal screen coordinate.
        x: f32,
        /// Vertical screen coordinate.
        y: f32,
    },
    /// Raw key press from the input boundary.
    KeyDown {
        /// Key value as reported by the platform.
        key: String,
    },
    /// Spawns a live bird at rest.
    CreateBird {
        /// Identifier of the new bird.
        id: EntityId,
        /// Initial centre in screen pixels.
        position: Vector,
    },
    /// Gives a live bird an upward impulse.
    BirdFlap {
        /// Bird to flap.
        id: EntityId,
    },
    /// Marks a bird as dead.
    KillBird {
        /// Bird to kill.
        id: EntityId,
    },
    /// Deletes a bird.
    RemoveBird {
        /// Bird to remove.
        id: EntityId,
    },
    /// Notification that a live bird struck a pipe.
    BirdCollision {
        /// Bird that collided.
        id: EntityId,
    },
    /// Notification that a dead bird rests on the ground.
    BirdLand {
        /// Bird that landed.
        id: EntityId,
    },
    /// Builds a top/bottom pipe pair sharing an x coordinate and gap centre.
    CreatePipe {
        /// Identifier of the upper pipe.
        top_id: EntityId,
        /// Identifier of the lower pipe.
        bottom_id: EntityId,
        /// Left edge of both pipes in screen pixels.
        x: f32,
        /// Gap centre in reference pixels.
        gap_y: f32,
        /// Gap height in reference pixels; a tuned default applies when absent.
        gap_size: Option<f32>,
    },
    /// Deletes a single pipe.
    RemovePipe {
        /// Pipe to remove.
        id: EntityId,
    },
    /// Creates a score display.
    CreateScore {
        /// Identifier of the new score.
        id: EntityId,
        /// Initial points.
        value: u32,
        /// Anchor in screen pixels.
        position: Vector,
        /// Gap between digits.
        spacing: f32,
        /// Digit alignment.
        alignment: Alignment,
    },
    /// Sets a score back to zero.
    ResetScore {
        /// Score to reset.
        id: EntityId,
    },
    /// Adds one point to a score.
    IncrementScore {
        /// Score to increment.
        id: EntityId,
    },
    /// Deletes a score.
    RemoveScore {
        /// Score to remove.
        id: EntityId,
    },
    /// Creates the backdrop marker.
    CreateBackground {
        /// Identifier of the backdrop.
        id: EntityId,
    },
    /// Deletes the backdrop marker.
    RemoveBackground {
        /// Backdrop to remove.
        id: EntityId,
    },
    /// Creates the floor marker.
    CreateGround {
        /// Identifier of the floor.
        id: EntityId,
    },
    /// Deletes the floor marker.
    RemoveGround {
        /// Floor to remove.
        id: EntityId,
    },
    /// Creates a decorative scene marker.
    CreateScene {
        /// Identifier of the scene.
        id: EntityId,
    },
    /// Deletes a decorative scene marker.
    RemoveScene {
        /// Scene to remove.
        id: EntityId,
    },
}

/// State transforms produced by systems and applied in order by the engine.
///
/// Applying a command may notify the stage adapter or enqueue a follow-up
/// event; the follow-up is only seen by systems on the next tick.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Inserts or replaces an entity and refreshes its renderer.
    Insert(Entity),
    /// Deletes an entity and tears down its renderer.
    Remove(EntityId),
    /// Replaces the automatic pipe generator bookkeeping.
    SetPipeGeneration(Option<PipeGenerationState>),
    /// Enqueues an event for the next generation.
    Dispatch(Event),
}

/// Pure reaction to a single event.
///
/// Implementations read the snapshot they are handed and push commands into
/// `out`; they never touch engine state directly.
pub trait System {
    /// Inspects `event` against `state` and appends the resulting commands.
    fn handle(
        &mut self,
        state: &GameState,
        event: &Event,
        screen: ScreenDimensions,
        out: &mut Vec<Command>,
    );
}
