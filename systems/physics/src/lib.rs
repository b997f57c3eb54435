#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Bird physics: gravity, flap impulses, tilt and ground contact.

use flappy_core::{
    tuning::{ground_line, PhysicsTuning},
    Bird, Command, Entity, Event, GameState, ScreenDimensions, System,
};

/// Pure system that owns the bird lifecycle and integrates bird motion.
#[derive(Clone, Copy, Debug, Default)]
pub struct Physics {
    tuning: PhysicsTuning,
}

impl Physics {
    /// Creates a physics system with the supplied tuning.
    #[must_use]
    pub const fn new(tuning: PhysicsTuning) -> Self {
        Self { tuning }
    }

    /// Largest y coordinate a bird centre may reach before resting on the ground.
    #[must_use]
    pub fn floor(&self, screen: ScreenDimensions) -> f32 {
        ground_line(screen.height) - self.tuning.collision_height / 2.0
    }

    fn integrate(&self, bird: &Bird, delta_time: f32, floor: f32) -> Bird {
        let tuning = &self.tuning;
        let mut velocity_y =
            (bird.velocity.y + tuning.gravity * delta_time).min(tuning.terminal_velocity);
        let mut position = bird.position + bird.velocity.with_y(velocity_y) * delta_time;

        if position.y >= floor {
            position = position.with_y(floor);
            velocity_y = 0.0;
        }

        Bird {
            position,
            velocity: bird.velocity.with_y(velocity_y),
            rotation: self.tilt(velocity_y),
            ..bird.clone()
        }
    }

    fn tilt(&self, velocity_y: f32) -> f32 {
        if velocity_y < 0.0 {
            self.tuning.max_rotation_up
        } else {
            let ratio = (velocity_y / self.tuning.terminal_velocity).min(1.0);
            ratio * self.tuning.max_rotation_down
        }
    }
}

impl System for Physics {
    fn handle(
        &mut self,
        state: &GameState,
        event: &Event,
        screen: ScreenDimensions,
        out: &mut Vec<Command>,
    ) {
        match event {
            Event::CreateBird { id, position } => {
                out.push(Command::Insert(Entity::Bird(Bird::new(id.clone(), *position))));
            }
            Event::BirdFlap { id } => {
                let Some(bird) = state.bird(id.as_str()) else {
                    return;
                };
                if !bird.is_alive {
                    return;
                }
                out.push(Command::Insert(Entity::Bird(Bird {
                    velocity: bird.velocity.with_y(self.tuning.flap_velocity),
                    animation_frame: bird.next_animation_frame(),
                    ..bird.clone()
                })));
            }
            Event::Tick { delta_time } => {
                let floor = self.floor(screen);
                for bird in state.birds() {
                    let next = self.integrate(bird, *delta_time, floor);
                    out.push(Command::Insert(Entity::Bird(next)));
                }
            }
            Event::KillBird { id } => {
                let Some(bird) = state.bird(id.as_str()) else {
                    return;
                };
                if !bird.is_alive {
                    return;
                }
                out.push(Command::Insert(Entity::Bird(Bird {
                    is_alive: false,
                    ..bird.clone()
                })));
            }
            Event::RemoveBird { id } => {
                if state.bird(id.as_str()).is_some() {
                    out.push(Command::Remove(id.clone()));
                }
            }
            _ => {}
        }
    }
}
