#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Score bookkeeping.

use flappy_core::{
    tuning::SCORE_INCREMENT, Command, Entity, Event, GameState, ScreenDimensions, Score, System,
};

/// Pure system that creates, resets, increments and removes score displays.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scoring;

impl Scoring {
    /// Creates the score system.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl System for Scoring {
    fn handle(
        &mut self,
        state: &GameState,
        event: &Event,
        _screen: ScreenDimensions,
        out: &mut Vec<Command>,
    ) {
        match event {
            Event::CreateScore {
                id,
                value,
                position,
                spacing,
                alignment,
            } => out.push(Command::Insert(Entity::Score(Score {
                id: id.clone(),
                value: *value,
                position: *position,
                spacing: *spacing,
                alignment: *alignment,
            }))),
            Event::ResetScore { id } => {
                if let Some(score) = state.score(id.as_str()) {
                    out.push(Command::Insert(Entity::Score(Score {
                        value: 0,
                        ..score.clone()
                    })));
                }
            }
            Event::IncrementScore { id } => {
                if let Some(score) = state.score(id.as_str()) {
                    out.push(Command::Insert(Entity::Score(Score {
                        value: score.value.saturating_add(SCORE_INCREMENT),
                        ..score.clone()
                    })));
                }
            }
            Event::RemoveScore { id } => {
                if state.score(id.as_str()).is_some() {
                    out.push(Command::Remove(id.clone()));
                }
            }
            _ => {}
        }
    }
}
