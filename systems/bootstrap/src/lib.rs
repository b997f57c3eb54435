#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Assembles a playable session: systems in their canonical order, the
//! initial state and the opening script.

use flappy_core::{
    tuning::Tuning, Alignment, AudioAdapter, EntityId, Event, GameState, PipeGenerationState,
    ScreenDimensions, Sound, StageAdapter, System, Vector,
};
use flappy_engine::Engine;
use flappy_system_audio::Audio;
use flappy_system_collision::Collision;
use flappy_system_input::{self as input, Input};
use flappy_system_physics::Physics;
use flappy_system_pipes::{self as pipes, Pipes};
use flappy_system_scenery::{Backdrop, Floor, Scenes};
use flappy_system_score::Scoring;

/// Identifier of the player-controlled bird.
pub const BIRD_ID: &str = "bird";
/// Identifier of the score display.
pub const SCORE_ID: &str = "score";
/// Identifier of the backdrop.
pub const BACKGROUND_ID: &str = "background";
/// Identifier of the floor.
pub const GROUND_ID: &str = "ground";

/// Distance behind the right screen edge at which pipe generation starts.
pub const INITIAL_PIPE_OFFSET: f32 = 600.0;
/// Vertical position of the score display.
pub const SCORE_Y: f32 = 100.0;
/// Gap between score digits.
pub const SCORE_SPACING: f32 = 4.0;

/// Sound assets preloaded on launch.
pub const SOUND_ASSETS: [(Sound, &str); 3] = [
    (Sound::Wing, "assets/soundEffects/wing.ogg"),
    (Sound::Point, "assets/soundEffects/point.ogg"),
    (Sound::Hit, "assets/soundEffects/hit.ogg"),
];

/// Builds engines wired for a standard session.
#[derive(Clone, Debug, Default)]
pub struct Bootstrap {
    tuning: Tuning,
    flap_key: Option<String>,
}

impl Bootstrap {
    /// Creates a bootstrapper using the supplied tuning.
    #[must_use]
    pub fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            flap_key: None,
        }
    }

    /// Restricts keyboard flaps to a single key.
    #[must_use]
    pub fn with_flap_key(mut self, key: impl Into<String>) -> Self {
        self.flap_key = Some(key.into());
        self
    }

    /// Systems in registration order.
    #[must_use]
    pub fn systems<A>(&self, audio: A) -> Vec<Box<dyn System>>
    where
        A: AudioAdapter + 'static,
    {
        let mut input_config = input::Config::new(BIRD_ID);
        if let Some(key) = &self.flap_key {
            input_config = input_config.with_flap_key(key.clone());
        }

        vec![
            Box::new(Backdrop),
            Box::new(Floor),
            Box::new(Scenes),
            Box::new(Pipes::new(
                pipes::Config::new(self.tuning.pipes, BIRD_ID).with_score(SCORE_ID),
            )),
            Box::new(Scoring::new()),
            Box::new(Physics::new(self.tuning.physics)),
            Box::new(Collision::new(self.tuning.collision)),
            Box::new(Input::new(input_config)),
            Box::new(Audio::new(audio)),
        ]
    }

    /// State the session starts from: no entities, pipe generation enabled.
    #[must_use]
    pub fn initial_state(&self, screen: ScreenDimensions) -> GameState {
        GameState::new().with_pipe_generation(Some(PipeGenerationState::new(
            screen.width - INITIAL_PIPE_OFFSET,
            screen.width,
        )))
    }

    /// Events that populate the opening scene.
    #[must_use]
    pub fn opening_events(&self, screen: ScreenDimensions) -> Vec<Event> {
        vec![
            Event::CreateBackground {
                id: EntityId::from(BACKGROUND_ID),
            },
            Event::CreateGround {
                id: EntityId::from(GROUND_ID),
            },
            Event::CreateScore {
                id: EntityId::from(SCORE_ID),
                value: 0,
                position: Vector::new(screen.width / 2.0, SCORE_Y),
                spacing: SCORE_SPACING,
                alignment: Alignment::Center,
            },
            Event::CreateBird {
                id: EntityId::from(BIRD_ID),
                position: Vector::new(screen.width / 4.0, screen.height / 2.0),
            },
        ]
    }

    /// Preloads sounds, builds the engine and queues the opening script.
    ///
    /// Nothing is simulated until the first tick.
    pub fn launch<S, A>(&self, stage: S, mut audio: A) -> Engine<S>
    where
        S: StageAdapter,
        A: AudioAdapter + 'static,
    {
        for (sound, path) in SOUND_ASSETS {
            if let Err(error) = audio.preload_sound(sound, path) {
                log::warn!("{error}");
            }
        }

        let screen = stage.screen_dimensions();
        log::debug!(
            "launching session on a {}x{} screen",
            screen.width,
            screen.height
        );
        let mut engine = Engine::new(self.initial_state(screen), self.systems(audio), stage);
        for event in self.opening_events(screen) {
            engine.dispatch(event);
        }
        engine
    }
}
