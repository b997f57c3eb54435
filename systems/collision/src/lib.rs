#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Collision detection between birds, pipes and the ground.
//!
//! The system never mutates state. It reports what it sees by dispatching
//! notifications that other systems consume on the following tick.

use flappy_core::{
    tuning::{ground_line, CollisionTuning},
    Bird, Command, Event, GameState, Pipe, ScreenDimensions, System,
};

const GROUND_TOLERANCE: f32 = 1e-3;

/// Axis-aligned box in screen pixels, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Reports whether the two boxes share any interior area.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Pure system that turns overlaps into collision and landing notifications.
#[derive(Clone, Copy, Debug, Default)]
pub struct Collision {
    tuning: CollisionTuning,
}

impl Collision {
    /// Creates a collision system with the supplied hit box dimensions.
    #[must_use]
    pub const fn new(tuning: CollisionTuning) -> Self {
        Self { tuning }
    }

    /// Hit box of a bird, centred on its position.
    #[must_use]
    pub fn bird_bounds(&self, bird: &Bird) -> Rect {
        Rect {
            x: bird.position.x - self.tuning.bird_width / 2.0,
            y: bird.position.y - self.tuning.bird_height / 2.0,
            width: self.tuning.bird_width,
            height: self.tuning.bird_height,
        }
    }

    /// Hit box of a pipe. Top pipes hang from their gap edge upwards.
    #[must_use]
    pub fn pipe_bounds(&self, pipe: &Pipe) -> Rect {
        let y = if pipe.is_top {
            pipe.position.y - pipe.height
        } else {
            pipe.position.y
        };
        Rect {
            x: pipe.position.x,
            y,
            width: self.tuning.pipe_width,
            height: pipe.height,
        }
    }
}

impl System for Collision {
    fn handle(
        &mut self,
        state: &GameState,
        event: &Event,
        screen: ScreenDimensions,
        out: &mut Vec<Command>,
    ) {
        if !matches!(event, Event::Tick { .. }) {
            return;
        }

        let ground = ground_line(screen.height);
        for bird in state.birds() {
            let bounds = self.bird_bounds(bird);
            if bird.is_alive {
                let hit = state
                    .pipes()
                    .any(|pipe| bounds.overlaps(&self.pipe_bounds(pipe)));
                if hit {
                    log::debug!("bird `{}` struck a pipe", bird.id);
                    out.push(Command::Dispatch(Event::BirdCollision {
                        id: bird.id.clone(),
                    }));
                    out.push(Command::Dispatch(Event::KillBird {
                        id: bird.id.clone(),
                    }));
                }
            } else if bounds.bottom() >= ground - GROUND_TOLERANCE {
                out.push(Command::Dispatch(Event::BirdLand {
                    id: bird.id.clone(),
                }));
            }
        }
    }
}
