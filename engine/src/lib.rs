#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative simulation state and the tick loop that folds it forward.

mod bus;

pub use bus::EventBus;

use flappy_core::{Command, Event, GameState, StageAdapter, System};

/// Owns the current state, the registered systems and the event bus.
///
/// Each [`Engine::tick`] processes exactly one generation: everything
/// dispatched since the previous tick plus a synthetic [`Event::Tick`].
pub struct Engine<S> {
    state: GameState,
    systems: Vec<Box<dyn System>>,
    bus: EventBus,
    stage: S,
    generation: u64,
}

impl<S: StageAdapter> Engine<S> {
    /// Creates an engine that runs `systems` in the given order.
    #[must_use]
    pub fn new(state: GameState, systems: Vec<Box<dyn System>>, stage: S) -> Self {
        Self {
            state,
            systems,
            bus: EventBus::new(),
            stage,
            generation: 0,
        }
    }

    /// Queues an event for the next tick. Nothing is processed immediately.
    pub fn dispatch(&mut self, event: Event) {
        self.bus.dispatch(event);
    }

    /// Advances the simulation by `delta_time` frames.
    ///
    /// Events are handled in FIFO order. For each event every system sees the
    /// state left by the previous event's commands, and the commands of all
    /// systems are applied before the next event is considered. Events
    /// enqueued while commands run wait for the following tick.
    pub fn tick(&mut self, delta_time: f32) {
        debug_assert!(delta_time.is_finite(), "delta time must be finite");

        self.bus.dispatch(Event::Tick { delta_time });
        let events = self.bus.flush();
        log::trace!(
            "generation {} processing {} events",
            self.generation,
            events.len()
        );

        let mut commands = Vec::new();
        for event in &events {
            let screen = self.stage.screen_dimensions();
            for system in &mut self.systems {
                system.handle(&self.state, event, screen, &mut commands);
            }

            let mut state = std::mem::take(&mut self.state);
            for command in commands.drain(..) {
                state = apply(state, command, &mut self.bus, &mut self.stage);
            }
            self.state = state;
        }

        self.generation = self.generation.saturating_add(1);
    }

    /// Returns a snapshot of the current state.
    ///
    /// The snapshot is an independent value; changing it has no effect on the engine.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state.clone()
    }

    /// Events queued for the next tick.
    pub fn pending_events(&self) -> impl Iterator<Item = &Event> {
        self.bus.pending()
    }

    /// Number of completed ticks.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Read access to the stage adapter.
    #[must_use]
    pub const fn stage(&self) -> &S {
        &self.stage
    }

    /// Mutable access to the stage adapter, e.g. to resize the screen.
    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }
}

/// Applies a single command, returning the next state.
///
/// Stage notifications happen as part of the application so the renderer
/// tracks every intermediate state, not only the final one of a tick. Adapter
/// failures are logged and otherwise ignored.
#[must_use]
pub fn apply<S>(state: GameState, command: Command, bus: &mut EventBus, stage: &mut S) -> GameState
where
    S: StageAdapter + ?Sized,
{
    match command {
        Command::Insert(entity) => {
            if let Err(error) = stage.update(&entity) {
                log::warn!("{error}");
            }
            state.with_entity(entity)
        }
        Command::Remove(id) => {
            let (state, removed) = state.without_entity(&id);
            if removed.is_some() {
                if let Err(error) = stage.remove_entity(&id) {
                    log::warn!("{error}");
                }
            } else {
                log::debug!("ignoring removal of unknown entity `{id}`");
            }
            state
        }
        Command::SetPipeGeneration(generation) => state.with_pipe_generation(generation),
        Command::Dispatch(event) => {
            bus.dispatch(event);
            state
        }
    }
}
