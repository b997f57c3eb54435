#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Translates raw player input into bird flaps.
//!
//! Flaps are dispatched onto the bus rather than applied directly, so a
//! click handled during one tick moves the bird during the next.

use flappy_core::{Command, EntityId, Event, GameState, ScreenDimensions, System};

/// Configuration parameters required to construct the input system.
#[derive(Clone, Debug)]
pub struct Config {
    bird_id: EntityId,
    flap_key: Option<String>,
}

impl Config {
    /// Controls `bird_id`; every click and every key press flaps.
    #[must_use]
    pub fn new(bird_id: impl Into<EntityId>) -> Self {
        Self {
            bird_id: bird_id.into(),
            flap_key: None,
        }
    }

    /// Restricts keyboard flaps to a single key value, e.g. `" "`.
    #[must_use]
    pub fn with_flap_key(mut self, key: impl Into<String>) -> Self {
        self.flap_key = Some(key.into());
        self
    }
}

/// Pure system that maps clicks and key presses onto the controlled bird.
#[derive(Clone, Debug)]
pub struct Input {
    bird_id: EntityId,
    flap_key: Option<String>,
}

impl Input {
    /// Creates an input system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            bird_id: config.bird_id,
            flap_key: config.flap_key,
        }
    }

    fn accepts(&self, key: &str) -> bool {
        self.flap_key.as_deref().map_or(true, |flap| flap == key)
    }
}

impl System for Input {
    fn handle(
        &mut self,
        state: &GameState,
        event: &Event,
        _screen: ScreenDimensions,
        out: &mut Vec<Command>,
    ) {
        let pressed = match event {
            Event::MouseClick { .. } => true,
            Event::KeyDown { key } => self.accepts(key),
            _ => false,
        };
        if !pressed {
            return;
        }

        let alive = state
            .bird(self.bird_id.as_str())
            .is_some_and(|bird| bird.is_alive);
        if alive {
            out.push(Command::Dispatch(Event::BirdFlap {
                id: self.bird_id.clone(),
            }));
        }
    }
}
