use std::collections::HashSet;

use flappy_core::{AdapterError, Entity, EntityId, ScreenDimensions, StageAdapter};

/// Screen used when no dimensions are supplied: the reference resolution.
pub const DEFAULT_SCREEN: ScreenDimensions = ScreenDimensions::new(288.0, 512.0);

/// Stage adapter that keeps a log of every notification instead of drawing.
///
/// Entities listed through [`RecordingStage::failing_on`] make `update` and
/// `remove_entity` fail, which exercises the engine's error isolation.
#[derive(Clone, Debug)]
pub struct RecordingStage {
    dimensions: ScreenDimensions,
    updates: Vec<Entity>,
    removals: Vec<EntityId>,
    failing: HashSet<EntityId>,
    failures: usize,
}

impl Default for RecordingStage {
    fn default() -> Self {
        Self::new(DEFAULT_SCREEN)
    }
}

impl RecordingStage {
    /// Creates a stage reporting the given screen size.
    #[must_use]
    pub fn new(dimensions: ScreenDimensions) -> Self {
        Self {
            dimensions,
            updates: Vec::new(),
            removals: Vec::new(),
            failing: HashSet::new(),
            failures: 0,
        }
    }

    /// Makes every notification about `id` fail.
    #[must_use]
    pub fn failing_on(mut self, id: &str) -> Self {
        let _ = self.failing.insert(EntityId::from(id));
        self
    }

    /// Changes the reported screen size.
    pub fn resize(&mut self, dimensions: ScreenDimensions) {
        self.dimensions = dimensions;
    }

    /// Entities passed to `update`, oldest first.
    #[must_use]
    pub fn updates(&self) -> &[Entity] {
        &self.updates
    }

    /// Updates recorded for a single entity, oldest first.
    pub fn updates_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.updates
            .iter()
            .filter(move |entity| entity.id().as_str() == id)
    }

    /// Identifiers passed to `remove_entity`, oldest first.
    #[must_use]
    pub fn removals(&self) -> &[EntityId] {
        &self.removals
    }

    /// Number of notifications that were rejected.
    #[must_use]
    pub const fn failures(&self) -> usize {
        self.failures
    }
}

impl StageAdapter for RecordingStage {
    fn update(&mut self, entity: &Entity) -> Result<(), AdapterError> {
        if self.failing.contains(entity.id()) {
            self.failures += 1;
            return Err(AdapterError::Update {
                id: entity.id().clone(),
                reason: String::from("renderer unavailable"),
            });
        }
        log::debug!("update {} `{}`", entity.kind().name(), entity.id());
        self.updates.push(entity.clone());
        Ok(())
    }

    fn remove_entity(&mut self, id: &EntityId) -> Result<(), AdapterError> {
        if self.failing.contains(id) {
            self.failures += 1;
            return Err(AdapterError::Remove {
                id: id.clone(),
                reason: String::from("renderer unavailable"),
            });
        }
        log::debug!("remove `{id}`");
        self.removals.push(id.clone());
        Ok(())
    }

    fn screen_dimensions(&self) -> ScreenDimensions {
        self.dimensions
    }
}
