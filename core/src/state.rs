use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Bird, Entity, EntityId, Pipe, Score};

/// Bookkeeping for automatic pipe spawning, carried inside the game state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipeGenerationState {
    /// Suffix for the next generated pair's identifiers.
    pub counter: u32,
    /// Scroll-adjusted x coordinate of the most recently spawned pair.
    pub last_pipe_x: f32,
    /// Screen width captured when generation was enabled.
    pub screen_width: f32,
}

impl PipeGenerationState {
    /// Creates generator state that spawns relative to `initial_x`.
    #[must_use]
    pub const fn new(initial_x: f32, screen_width: f32) -> Self {
        Self {
            counter: 0,
            last_pipe_x: initial_x,
            screen_width,
        }
    }
}

/// Immutable snapshot of the simulation.
///
/// Mutating helpers consume the snapshot and return the next one, so a state
/// handed to a system can never change underneath it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    entities: BTreeMap<EntityId, Entity>,
    pipe_generation: Option<PipeGenerationState>,
}

impl GameState {
    /// Creates an empty state without automatic pipe generation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state with the entity inserted, replacing any entity sharing its id.
    #[must_use]
    pub fn with_entity(mut self, entity: Entity) -> Self {
        let _ = self.entities.insert(entity.id().clone(), entity);
        self
    }

    /// Returns the state without the entity and the entity that was removed, if any.
    #[must_use]
    pub fn without_entity(mut self, id: &EntityId) -> (Self, Option<Entity>) {
        let removed = self.entities.remove(id);
        (self, removed)
    }

    /// Returns the state with the generator bookkeeping replaced.
    #[must_use]
    pub fn with_pipe_generation(mut self, generation: Option<PipeGenerationState>) -> Self {
        self.pipe_generation = generation;
        self
    }

    /// Generator bookkeeping, present only while automatic spawning is enabled.
    #[must_use]
    pub const fn pipe_generation(&self) -> Option<&PipeGenerationState> {
        self.pipe_generation.as_ref()
    }

    /// Looks up an entity of any kind.
    #[must_use]
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Looks up a bird, ignoring entities of other kinds.
    #[must_use]
    pub fn bird(&self, id: &str) -> Option<&Bird> {
        self.entity(id).and_then(Entity::as_bird)
    }

    /// Looks up a pipe, ignoring entities of other kinds.
    #[must_use]
    pub fn pipe(&self, id: &str) -> Option<&Pipe> {
        self.entity(id).and_then(Entity::as_pipe)
    }

    /// Looks up a score, ignoring entities of other kinds.
    #[must_use]
    pub fn score(&self, id: &str) -> Option<&Score> {
        self.entity(id).and_then(Entity::as_score)
    }

    /// Iterates all entities in identifier order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Iterates all birds in identifier order.
    pub fn birds(&self) -> impl Iterator<Item = &Bird> {
        self.entities.values().filter_map(Entity::as_bird)
    }

    /// Iterates all pipes in identifier order.
    pub fn pipes(&self) -> impl Iterator<Item = &Pipe> {
        self.entities.values().filter_map(Entity::as_pipe)
    }

    /// Number of entities in the state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Reports whether the state holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
