#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Lifecycle of the static scenery markers: background, ground and scene.
//!
//! None of these entities carry state beyond their identity, so each system
//! only inserts the marker on creation and deletes it on removal. A removal
//! naming an entity of another kind is ignored.

use flappy_core::{
    Background, Command, Entity, EntityId, EntityKind, Event, GameState, Ground, Scene,
    ScreenDimensions, System,
};

fn remove_if_kind(state: &GameState, id: &EntityId, kind: EntityKind, out: &mut Vec<Command>) {
    if state.entity(id.as_str()).map(Entity::kind) == Some(kind) {
        out.push(Command::Remove(id.clone()));
    }
}

/// Owns the backdrop marker.
#[derive(Clone, Copy, Debug, Default)]
pub struct Backdrop;

impl System for Backdrop {
    fn handle(
        &mut self,
        state: &GameState,
        event: &Event,
        _screen: ScreenDimensions,
        out: &mut Vec<Command>,
    ) {
        match event {
            Event::CreateBackground { id } => {
                out.push(Command::Insert(Entity::Background(Background {
                    id: id.clone(),
                })));
            }
            Event::RemoveBackground { id } => {
                remove_if_kind(state, id, EntityKind::Background, out);
            }
            _ => {}
        }
    }
}

/// Owns the floor marker.
#[derive(Clone, Copy, Debug, Default)]
pub struct Floor;

impl System for Floor {
    fn handle(
        &mut self,
        state: &GameState,
        event: &Event,
        _screen: ScreenDimensions,
        out: &mut Vec<Command>,
    ) {
        match event {
            Event::CreateGround { id } => {
                out.push(Command::Insert(Entity::Ground(Ground { id: id.clone() })));
            }
            Event::RemoveGround { id } => remove_if_kind(state, id, EntityKind::Ground, out),
            _ => {}
        }
    }
}

/// Owns decorative scene markers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scenes;

impl System for Scenes {
    fn handle(
        &mut self,
        state: &GameState,
        event: &Event,
        _screen: ScreenDimensions,
        out: &mut Vec<Command>,
    ) {
        match event {
            Event::CreateScene { id } => {
                out.push(Command::Insert(Entity::Scene(Scene { id: id.clone() })));
            }
            Event::RemoveScene { id } => remove_if_kind(state, id, EntityKind::Scene, out),
            _ => {}
        }
    }
}
