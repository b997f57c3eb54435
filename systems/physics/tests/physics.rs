use flappy_core::{EntityId, Event, GameState, ScreenDimensions, System, Vector};
use flappy_engine::Engine;
use flappy_headless::RecordingStage;
use flappy_system_physics::Physics;

const GROUND_REST: f32 = 391.0;
const TERMINAL_VELOCITY: f32 = 1.0;

fn engine() -> Engine<RecordingStage> {
    let systems: Vec<Box<dyn System>> = vec![Box::new(Physics::default())];
    Engine::new(GameState::new(), systems, RecordingStage::default())
}

fn spawn(engine: &mut Engine<RecordingStage>, x: f32, y: f32) {
    engine.dispatch(Event::CreateBird {
        id: EntityId::from("bird"),
        position: Vector::new(x, y),
    });
}

#[test]
fn bird_falls_under_gravity_on_first_tick() {
    let mut engine = engine();
    spawn(&mut engine, 100.0, 200.0);
    engine.tick(30.0);

    let state = engine.state();
    let bird = state.bird("bird").expect("bird exists");
    assert!(bird.is_alive);
    assert_eq!(bird.velocity.y, 1.0);
    assert!((bird.position.y - 230.0).abs() < 1e-4);
    assert_eq!(bird.position.x, 100.0);
}

#[test]
fn falling_bird_never_rises_without_flap() {
    let mut engine = engine();
    spawn(&mut engine, 50.0, 50.0);

    let mut previous = f32::MIN;
    for _ in 0..600 {
        engine.tick(1.0);
        let y = engine.state().bird("bird").expect("bird").position.y;
        assert!(y >= previous, "bird rose from {previous} to {y}");
        assert!(y <= GROUND_REST + 1e-4, "bird sank below ground: {y}");
        previous = y;
    }
    assert!((previous - GROUND_REST).abs() < 1e-4);
}

#[test]
fn fall_speed_builds_up_to_terminal_velocity_and_holds() {
    let mut engine = engine();
    spawn(&mut engine, 100.0, 10.0);

    let mut previous = f32::MIN;
    let mut reached_terminal = false;
    for _ in 0..200 {
        engine.tick(1.0);
        let bird = engine.state().bird("bird").expect("bird").clone();
        assert!(bird.position.y < GROUND_REST, "bird touched the ground");

        let velocity = bird.velocity.y;
        assert!(velocity >= previous, "fall speed dropped from {previous} to {velocity}");
        assert!(velocity <= TERMINAL_VELOCITY);
        if reached_terminal {
            assert_eq!(velocity, TERMINAL_VELOCITY);
        }
        reached_terminal |= velocity == TERMINAL_VELOCITY;
        previous = velocity;
    }
    assert!(reached_terminal);
}

#[test]
fn ground_follows_the_current_screen_height() {
    let mut engine = engine();
    spawn(&mut engine, 100.0, 200.0);
    engine.tick(0.0);

    engine.stage_mut().resize(ScreenDimensions::new(400.0, 1024.0));
    for _ in 0..2000 {
        engine.tick(1.0);
    }

    let y = engine.state().bird("bird").expect("bird").position.y;
    assert!((y - 791.0).abs() < 1e-4, "bird rests at {y}");
}

#[test]
fn flap_sets_upward_velocity_and_advances_animation() {
    let mut engine = engine();
    spawn(&mut engine, 100.0, 200.0);
    engine.tick(0.0);

    engine.dispatch(Event::BirdFlap {
        id: EntityId::from("bird"),
    });
    engine.tick(1.0);

    let state = engine.state();
    let bird = state.bird("bird").expect("bird");
    assert!((bird.velocity.y - (-2.92)).abs() < 1e-4);
    assert!(bird.position.y < 200.0);
    assert_eq!(bird.animation_frame, 1);
    assert!(bird.rotation < 0.0);
}

#[test]
fn dead_bird_ignores_flaps_but_keeps_falling() {
    let mut engine = engine();
    spawn(&mut engine, 100.0, 200.0);
    engine.dispatch(Event::KillBird {
        id: EntityId::from("bird"),
    });
    engine.tick(0.0);
    assert!(!engine.state().bird("bird").expect("bird").is_alive);

    engine.dispatch(Event::BirdFlap {
        id: EntityId::from("bird"),
    });
    engine.tick(10.0);

    let state = engine.state();
    let bird = state.bird("bird").expect("bird");
    assert_eq!(bird.animation_frame, 0);
    assert!(bird.velocity.y > 0.0);
    assert!(bird.position.y > 200.0);
}

#[test]
fn events_for_unknown_birds_are_no_ops() {
    let mut engine = engine();
    engine.tick(0.0);
    let before = engine.state();

    for event in [
        Event::BirdFlap {
            id: EntityId::from("ghost"),
        },
        Event::KillBird {
            id: EntityId::from("ghost"),
        },
        Event::RemoveBird {
            id: EntityId::from("ghost"),
        },
    ] {
        engine.dispatch(event);
    }
    engine.tick(1.0);

    assert_eq!(engine.state(), before);
    assert!(engine.stage().removals().is_empty());
}

#[test]
fn remove_bird_deletes_it_and_notifies_stage() {
    let mut engine = engine();
    spawn(&mut engine, 100.0, 200.0);
    engine.tick(0.0);

    engine.dispatch(Event::RemoveBird {
        id: EntityId::from("bird"),
    });
    engine.tick(1.0);

    assert!(engine.state().bird("bird").is_none());
    assert_eq!(engine.stage().removals(), &[EntityId::from("bird")]);
}
