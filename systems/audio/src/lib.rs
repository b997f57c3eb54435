#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Sound effects triggered by gameplay events.
//!
//! Unlike the other systems this one performs its side effect directly: it
//! asks the audio adapter to play a sound and never emits commands.

use flappy_core::{AudioAdapter, Command, Event, GameState, ScreenDimensions, Sound, System};

/// Maps an event onto the sound effect it triggers, if any.
#[must_use]
pub fn sound_for(event: &Event) -> Option<Sound> {
    match event {
        Event::BirdFlap { .. } => Some(Sound::Wing),
        Event::IncrementScore { .. } => Some(Sound::Point),
        Event::BirdCollision { .. } => Some(Sound::Hit),
        _ => None,
    }
}

/// System that forwards gameplay events to an audio adapter.
#[derive(Debug)]
pub struct Audio<A> {
    adapter: A,
}

impl<A: AudioAdapter> Audio<A> {
    /// Creates an audio system that plays through `adapter`.
    #[must_use]
    pub const fn new(adapter: A) -> Self {
        Self { adapter }
    }
}

impl<A: AudioAdapter> System for Audio<A> {
    fn handle(
        &mut self,
        _state: &GameState,
        event: &Event,
        _screen: ScreenDimensions,
        _out: &mut Vec<Command>,
    ) {
        let Some(sound) = sound_for(event) else {
            return;
        };
        if let Err(error) = self.adapter.play_sound(sound) {
            log::warn!("{error}");
        }
    }
}
