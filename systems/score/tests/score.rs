use flappy_core::{Alignment, EntityId, Event, GameState, System, Vector};
use flappy_engine::Engine;
use flappy_headless::RecordingStage;
use flappy_system_score::Scoring;

fn engine() -> Engine<RecordingStage> {
    let systems: Vec<Box<dyn System>> = vec![Box::new(Scoring::new())];
    Engine::new(GameState::new(), systems, RecordingStage::default())
}

fn create(engine: &mut Engine<RecordingStage>, value: u32) {
    engine.dispatch(Event::CreateScore {
        id: EntityId::from("s"),
        value,
        position: Vector::new(144.0, 100.0),
        spacing: 4.0,
        alignment: Alignment::Center,
    });
}

fn increment(engine: &mut Engine<RecordingStage>) {
    engine.dispatch(Event::IncrementScore {
        id: EntityId::from("s"),
    });
}

fn value(engine: &Engine<RecordingStage>) -> u32 {
    engine.state().score("s").expect("score exists").value
}

#[test]
fn increment_after_create_in_the_same_tick() {
    let mut engine = engine();
    create(&mut engine, 0);
    increment(&mut engine);
    engine.tick(1.0);

    assert_eq!(value(&engine), 1);
}

#[test]
fn increments_are_monotonic_until_reset() {
    let mut engine = engine();
    create(&mut engine, 0);
    engine.tick(1.0);

    let mut previous = value(&engine);
    for _ in 0..5 {
        increment(&mut engine);
        engine.tick(1.0);
        let current = value(&engine);
        assert_eq!(current, previous + 1);
        previous = current;
    }

    engine.dispatch(Event::ResetScore {
        id: EntityId::from("s"),
    });
    engine.tick(1.0);
    assert_eq!(value(&engine), 0);
}

#[test]
fn increment_saturates() {
    let mut engine = engine();
    create(&mut engine, u32::MAX);
    increment(&mut engine);
    engine.tick(1.0);

    assert_eq!(value(&engine), u32::MAX);
}

#[test]
fn create_keeps_display_properties() {
    let mut engine = engine();
    create(&mut engine, 7);
    engine.tick(1.0);

    let state = engine.state();
    let score = state.score("s").expect("score");
    assert_eq!(score.value, 7);
    assert_eq!(score.position, Vector::new(144.0, 100.0));
    assert_eq!(score.spacing, 4.0);
    assert_eq!(score.alignment, Alignment::Center);
    assert_eq!(engine.stage().updates_for("s").count(), 1);
}

#[test]
fn unknown_scores_are_ignored() {
    let mut engine = engine();
    for event in [
        Event::ResetScore {
            id: EntityId::from("ghost"),
        },
        Event::IncrementScore {
            id: EntityId::from("ghost"),
        },
        Event::RemoveScore {
            id: EntityId::from("ghost"),
        },
    ] {
        engine.dispatch(event);
    }
    engine.tick(1.0);

    assert!(engine.state().is_empty());
    assert!(engine.stage().updates().is_empty());
    assert!(engine.stage().removals().is_empty());
}

#[test]
fn remove_score_deletes_it() {
    let mut engine = engine();
    create(&mut engine, 3);
    engine.tick(1.0);

    engine.dispatch(Event::RemoveScore {
        id: EntityId::from("s"),
    });
    engine.tick(1.0);

    assert!(engine.state().score("s").is_none());
    assert_eq!(engine.stage().removals(), &[EntityId::from("s")]);
}
