#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pipe lifecycle: pair construction, scrolling, pass detection, culling and
//! seeded automatic generation.

use flappy_core::{
    tuning::{reference_scale, PipeTuning},
    Command, Entity, EntityId, Event, GameState, Pipe, PipeGenerationState, ScreenDimensions,
    System, Vector,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the pipe system.
#[derive(Clone, Debug)]
pub struct Config {
    tuning: PipeTuning,
    bird_id: EntityId,
    score_id: Option<EntityId>,
}

impl Config {
    /// Creates a configuration that detects passes by `bird_id`.
    #[must_use]
    pub fn new(tuning: PipeTuning, bird_id: impl Into<EntityId>) -> Self {
        Self {
            tuning,
            bird_id: bird_id.into(),
            score_id: None,
        }
    }

    /// Awards a point to `score_id` whenever a pipe pair is passed.
    #[must_use]
    pub fn with_score(mut self, score_id: impl Into<EntityId>) -> Self {
        self.score_id = Some(score_id.into());
        self
    }
}

/// Pure system that owns every pipe entity and the automatic generator.
#[derive(Debug)]
pub struct Pipes {
    tuning: PipeTuning,
    bird_id: EntityId,
    score_id: Option<EntityId>,
    rng: ChaCha8Rng,
}

impl Pipes {
    /// Creates a pipe system; the generator is seeded from the tuning.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.tuning.seed),
            tuning: config.tuning,
            bird_id: config.bird_id,
            score_id: config.score_id,
        }
    }

    /// Builds the top and bottom pipe of a pair in screen coordinates.
    ///
    /// `gap_y` and `gap_size` are reference-space values; the stored `gap_y`
    /// is the gap centre after scaling.
    #[must_use]
    pub fn build_pair(
        &self,
        top_id: EntityId,
        bottom_id: EntityId,
        x: f32,
        gap_y: f32,
        gap_size: Option<f32>,
        screen: ScreenDimensions,
    ) -> (Pipe, Pipe) {
        let scale = reference_scale(screen.height);
        let centre = gap_y * scale;
        let half_gap = gap_size.unwrap_or(self.tuning.default_gap_size) * scale / 2.0;
        let gap_top = centre - half_gap;
        let gap_bottom = centre + half_gap;

        let top = Pipe {
            id: top_id,
            position: Vector::new(x, gap_top),
            height: gap_top.max(0.0),
            is_top: true,
            gap_y: centre,
            passed: false,
        };
        let bottom = Pipe {
            id: bottom_id,
            position: Vector::new(x, gap_bottom),
            height: (screen.height - gap_bottom).max(0.0),
            is_top: false,
            gap_y: centre,
            passed: false,
        };
        (top, bottom)
    }

    fn advance(&self, state: &GameState, delta_time: f32, out: &mut Vec<Command>) {
        let bird = state.bird(self.bird_id.as_str());

        for pipe in state.pipes() {
            let right_edge = pipe.position.x + self.tuning.width;
            if right_edge < 0.0 {
                out.push(Command::Remove(pipe.id.clone()));
                continue;
            }

            let newly_passed =
                !pipe.passed && bird.is_some_and(|bird| bird.position.x > right_edge);
            // Dead birds still drift past pipes but earn nothing.
            let scoring = bird.is_some_and(|bird| bird.is_alive);
            if newly_passed && pipe.is_top && scoring {
                if let Some(score_id) = &self.score_id {
                    out.push(Command::Dispatch(Event::IncrementScore {
                        id: score_id.clone(),
                    }));
                }
            }

            out.push(Command::Insert(Entity::Pipe(Pipe {
                position: pipe
                    .position
                    .with_x(pipe.position.x - self.tuning.scroll_speed * delta_time),
                passed: pipe.passed || newly_passed,
                ..pipe.clone()
            })));
        }
    }

    fn generate(
        &mut self,
        generation: &PipeGenerationState,
        delta_time: f32,
        screen: ScreenDimensions,
        out: &mut Vec<Command>,
    ) {
        let mut next = PipeGenerationState {
            last_pipe_x: generation.last_pipe_x - self.tuning.scroll_speed * delta_time,
            ..*generation
        };

        if next.last_pipe_x - next.screen_width < self.tuning.spacing {
            let x = next.last_pipe_x + self.tuning.spacing;
            let gap_size = self
                .rng
                .gen_range(self.tuning.min_gap_size..=self.tuning.max_gap_size);
            let gap_y = self
                .rng
                .gen_range(self.tuning.min_gap_y..=self.tuning.max_gap_y);
            let (top, bottom) = self.build_pair(
                EntityId::new(format!("pipe-top-{}", next.counter)),
                EntityId::new(format!("pipe-bottom-{}", next.counter)),
                x,
                gap_y,
                Some(gap_size),
                screen,
            );
            log::debug!(
                "spawning pipe pair {} at x={x} gap_y={gap_y} gap_size={gap_size}",
                next.counter
            );

            out.push(Command::Insert(Entity::Pipe(top)));
            out.push(Command::Insert(Entity::Pipe(bottom)));
            next.last_pipe_x = x;
            next.counter = next.counter.wrapping_add(1);
        }

        out.push(Command::SetPipeGeneration(Some(next)));
    }
}

impl System for Pipes {
    fn handle(
        &mut self,
        state: &GameState,
        event: &Event,
        screen: ScreenDimensions,
        out: &mut Vec<Command>,
    ) {
        match event {
            Event::CreatePipe {
                top_id,
                bottom_id,
                x,
                gap_y,
                gap_size,
            } => {
                let (top, bottom) = self.build_pair(
                    top_id.clone(),
                    bottom_id.clone(),
                    *x,
                    *gap_y,
                    *gap_size,
                    screen,
                );
                out.push(Command::Insert(Entity::Pipe(top)));
                out.push(Command::Insert(Entity::Pipe(bottom)));
            }
            Event::RemovePipe { id } => {
                if state.pipe(id.as_str()).is_some() {
                    out.push(Command::Remove(id.clone()));
                }
            }
            Event::Tick { delta_time } => {
                self.advance(state, *delta_time, out);
                if let Some(generation) = state.pipe_generation() {
                    self.generate(generation, *delta_time, screen, out);
                }
            }
            _ => {}
        }
    }
}
