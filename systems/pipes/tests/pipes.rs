use flappy_core::{
    tuning::PipeTuning, Bird, Entity, EntityId, Event, GameState, PipeGenerationState,
    ScreenDimensions, System, Vector,
};
use flappy_engine::Engine;
use flappy_headless::RecordingStage;
use flappy_system_pipes::{Config, Pipes};

fn config() -> Config {
    Config::new(PipeTuning::default(), "bird")
}

fn engine_with(state: GameState, pipes: Pipes) -> Engine<RecordingStage> {
    let systems: Vec<Box<dyn System>> = vec![Box::new(pipes)];
    Engine::new(state, systems, RecordingStage::default())
}

fn bird_at(id: &str, x: f32) -> Entity {
    Entity::Bird(Bird::new(EntityId::from(id), Vector::new(x, 200.0)))
}

fn create_pair(engine: &mut Engine<RecordingStage>, x: f32) {
    engine.dispatch(Event::CreatePipe {
        top_id: EntityId::from("top"),
        bottom_id: EntityId::from("bottom"),
        x,
        gap_y: 200.0,
        gap_size: Some(140.0),
    });
}

#[test]
fn create_pipe_builds_a_pair_sharing_gap() {
    let mut engine = engine_with(GameState::new(), Pipes::new(config()));
    create_pair(&mut engine, 200.0);
    engine.tick(0.0);

    let state = engine.state();
    let top = state.pipe("top").expect("top pipe");
    let bottom = state.pipe("bottom").expect("bottom pipe");
    assert!(top.is_top);
    assert!(!bottom.is_top);
    assert_eq!(top.position.x, 200.0);
    assert_eq!(bottom.position.x, 200.0);
    assert_eq!(top.gap_y, 200.0);
    assert_eq!(bottom.gap_y, 200.0);
}

#[test]
fn pipes_scroll_left_each_tick() {
    let mut engine = engine_with(GameState::new(), Pipes::new(config()));
    create_pair(&mut engine, 200.0);
    engine.tick(0.0);
    engine.tick(1.5);

    let state = engine.state();
    assert_eq!(state.pipe("top").expect("top").position.x, 197.0);
    assert_eq!(state.pipe("bottom").expect("bottom").position.x, 197.0);
}

#[test]
fn off_screen_pipes_are_culled() {
    let mut engine = engine_with(GameState::new(), Pipes::new(config()));
    create_pair(&mut engine, -60.0);
    engine.tick(0.0);

    let state = engine.state();
    assert_eq!(state.pipes().count(), 0);
    assert_eq!(
        engine.stage().removals(),
        &[EntityId::from("bottom"), EntityId::from("top")]
    );
}

#[test]
fn passing_a_pair_awards_one_point_once() {
    let state = GameState::new().with_entity(bird_at("bird", 100.0));
    let pipes = Pipes::new(config().with_score("score"));
    let mut engine = engine_with(state, pipes);
    create_pair(&mut engine, 20.0);
    engine.tick(0.0);

    let state = engine.state();
    assert!(state.pipe("top").expect("top").passed);
    assert!(state.pipe("bottom").expect("bottom").passed);
    let pending: Vec<_> = engine.pending_events().cloned().collect();
    assert_eq!(
        pending,
        vec![Event::IncrementScore {
            id: EntityId::from("score"),
        }]
    );

    engine.tick(1.0);
    assert_eq!(engine.pending_events().count(), 0);
}

#[test]
fn passing_without_score_only_marks_pipes() {
    let state = GameState::new().with_entity(bird_at("bird", 100.0));
    let mut engine = engine_with(state, Pipes::new(config()));
    create_pair(&mut engine, 20.0);
    engine.tick(0.0);

    assert!(engine.state().pipe("top").expect("top").passed);
    assert_eq!(engine.pending_events().count(), 0);
}

#[test]
fn remove_pipe_ignores_unknown_ids() {
    let mut engine = engine_with(GameState::new(), Pipes::new(config()));
    create_pair(&mut engine, 200.0);
    engine.tick(0.0);

    engine.dispatch(Event::RemovePipe {
        id: EntityId::from("ghost"),
    });
    engine.dispatch(Event::RemovePipe {
        id: EntityId::from("top"),
    });
    engine.tick(0.0);

    let state = engine.state();
    assert!(state.pipe("top").is_none());
    assert!(state.pipe("bottom").is_some());
    assert_eq!(engine.stage().removals(), &[EntityId::from("top")]);
}

#[test]
fn generator_spawns_numbered_pairs_at_spacing() {
    let state = GameState::new().with_pipe_generation(Some(PipeGenerationState::new(0.0, 288.0)));
    let mut engine = engine_with(state, Pipes::new(config()));

    engine.tick(1.0);
    let state = engine.state();
    let top = state.pipe("pipe-top-0").expect("first top pipe");
    assert_eq!(top.position.x, 198.0);
    assert!(state.pipe("pipe-bottom-0").is_some());
    let generation = state.pipe_generation().expect("generation state");
    assert_eq!(generation.counter, 1);
    assert_eq!(generation.last_pipe_x, 198.0);

    engine.tick(1.0);
    let state = engine.state();
    assert_eq!(state.pipe("pipe-top-0").expect("scrolled").position.x, 196.0);
    assert_eq!(state.pipe("pipe-top-1").expect("second").position.x, 396.0);
    assert_eq!(state.pipe_generation().expect("generation").counter, 2);
}

#[test]
fn generator_waits_while_pipes_are_queued_off_screen() {
    let state =
        GameState::new().with_pipe_generation(Some(PipeGenerationState::new(600.0, 288.0)));
    let mut engine = engine_with(state, Pipes::new(config()));

    engine.tick(1.0);
    let state = engine.state();
    assert_eq!(state.pipes().count(), 0);
    let generation = state.pipe_generation().expect("generation state");
    assert_eq!(generation.counter, 0);
    assert_eq!(generation.last_pipe_x, 598.0);
}

#[test]
fn generated_gaps_stay_within_tuned_ranges() {
    let state =
        GameState::new().with_pipe_generation(Some(PipeGenerationState::new(-2000.0, 288.0)));
    let mut engine = engine_with(state, Pipes::new(config()));
    for _ in 0..10 {
        engine.tick(0.0);
    }

    let state = engine.state();
    for pipe in state.pipes() {
        assert!((120.0..=280.0).contains(&pipe.gap_y), "gap {}", pipe.gap_y);
    }
    assert!(state.pipes().count() > 0);
}

#[test]
fn passes_follow_the_configured_bird() {
    let state = GameState::new()
        .with_entity(bird_at("bird", 10.0))
        .with_entity(bird_at("another", 100.0));
    let mut engine = engine_with(state, Pipes::new(config().with_score("score")));
    create_pair(&mut engine, 20.0);
    engine.tick(0.0);

    assert!(!engine.state().pipe("top").expect("top").passed);
    assert_eq!(engine.pending_events().count(), 0);

    let state = GameState::new()
        .with_entity(bird_at("another", 10.0))
        .with_entity(bird_at("bird", 100.0));
    let mut engine = engine_with(state, Pipes::new(config().with_score("score")));
    create_pair(&mut engine, 20.0);
    engine.tick(0.0);

    assert!(engine.state().pipe("top").expect("top").passed);
    assert_eq!(engine.pending_events().count(), 1);
}

#[test]
fn new_pairs_scale_with_the_current_screen_height() {
    let mut engine = engine_with(GameState::new(), Pipes::new(config()));
    engine.stage_mut().resize(ScreenDimensions::new(400.0, 1024.0));
    create_pair(&mut engine, 200.0);
    engine.tick(0.0);

    let state = engine.state();
    let top = state.pipe("top").expect("top pipe");
    let bottom = state.pipe("bottom").expect("bottom pipe");
    assert_eq!(top.gap_y, 400.0);
    assert_eq!(top.position.y, 260.0);
    assert_eq!(top.height, 260.0);
    assert_eq!(bottom.position.y, 540.0);
    assert_eq!(bottom.height, 484.0);
}
