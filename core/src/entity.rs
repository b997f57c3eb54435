use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

use crate::{tuning::BIRD_ANIMATION_FRAMES, Vector};

/// Caller-chosen identifier that is unique within a [`crate::GameState`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrows the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Discriminant of the closed [`Entity`] variant set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Player-controlled bird.
    Bird,
    /// Single obstacle pipe.
    Pipe,
    /// Score display.
    Score,
    /// Backdrop marker.
    Background,
    /// Floor marker.
    Ground,
    /// Decorative scene marker.
    Scene,
}

impl EntityKind {
    /// Lower-case name used by renderers to pick a drawing strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bird => "bird",
            Self::Pipe => "pipe",
            Self::Score => "score",
            Self::Background => "background",
            Self::Ground => "ground",
            Self::Scene => "scene",
        }
    }
}

/// Immutable game object. Systems narrow on the variant before reading fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Entity {
    /// Player-controlled bird.
    Bird(Bird),
    /// Single obstacle pipe.
    Pipe(Pipe),
    /// Score display.
    Score(Score),
    /// Backdrop marker.
    Background(Background),
    /// Floor marker.
    Ground(Ground),
    /// Decorative scene marker.
    Scene(Scene),
}

impl Entity {
    /// Identifier of the wrapped record.
    #[must_use]
    pub fn id(&self) -> &EntityId {
        match self {
            Self::Bird(bird) => &bird.id,
            Self::Pipe(pipe) => &pipe.id,
            Self::Score(score) => &score.id,
            Self::Background(background) => &background.id,
            Self::Ground(ground) => &ground.id,
            Self::Scene(scene) => &scene.id,
        }
    }

    /// Discriminant of the wrapped record.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Bird(_) => EntityKind::Bird,
            Self::Pipe(_) => EntityKind::Pipe,
            Self::Score(_) => EntityKind::Score,
            Self::Background(_) => EntityKind::Background,
            Self::Ground(_) => EntityKind::Ground,
            Self::Scene(_) => EntityKind::Scene,
        }
    }

    /// Returns the bird record when this entity is a bird.
    #[must_use]
    pub const fn as_bird(&self) -> Option<&Bird> {
        match self {
            Self::Bird(bird) => Some(bird),
            _ => None,
        }
    }

    /// Returns the pipe record when this entity is a pipe.
    #[must_use]
    pub const fn as_pipe(&self) -> Option<&Pipe> {
        match self {
            Self::Pipe(pipe) => Some(pipe),
            _ => None,
        }
    }

    /// Returns the score record when this entity is a score.
    #[must_use]
    pub const fn as_score(&self) -> Option<&Score> {
        match self {
            Self::Score(score) => Some(score),
            _ => None,
        }
    }
}

/// Player-controlled bird.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Unique identifier.
    pub id: EntityId,
    /// Centre of the bird in screen pixels.
    pub position: Vector,
    /// Velocity in pixels per frame.
    pub velocity: Vector,
    /// Tilt in radians; negative is nose-up.
    pub rotation: f32,
    /// Cleared once by a kill, never set again.
    pub is_alive: bool,
    /// Index into the wing animation cycle.
    pub animation_frame: u32,
}

impl Bird {
    /// Creates a live bird at rest.
    #[must_use]
    pub fn new(id: EntityId, position: Vector) -> Self {
        Self {
            id,
            position,
            velocity: Vector::ZERO,
            rotation: 0.0,
            is_alive: true,
            animation_frame: 0,
        }
    }

    /// Animation frame that follows the current one.
    #[must_use]
    pub const fn next_animation_frame(&self) -> u32 {
        (self.animation_frame + 1) % BIRD_ANIMATION_FRAMES
    }
}

/// One half of a pipe pair.
///
/// Top pipes are anchored at their bottom edge and extend up to the top of
/// the screen; bottom pipes are anchored at their top edge and extend down.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Unique identifier.
    pub id: EntityId,
    /// Left edge and gap-side edge in screen pixels.
    pub position: Vector,
    /// Visible length in screen pixels.
    pub height: f32,
    /// Whether this pipe hangs from the top of the screen.
    pub is_top: bool,
    /// Gap centre shared by both pipes of the pair, in screen pixels.
    pub gap_y: f32,
    /// Set once the bird has cleared the pipe; never reverts.
    pub passed: bool,
}

/// Horizontal alignment of score digits around the score position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    /// Digits start at the position.
    Left,
    /// Digits are centred on the position.
    #[default]
    Center,
    /// Digits end at the position.
    Right,
}

/// Numeric score display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Unique identifier.
    pub id: EntityId,
    /// Current points.
    pub value: u32,
    /// Anchor in screen pixels.
    pub position: Vector,
    /// Gap between digit sprites.
    pub spacing: f32,
    /// Digit alignment around `position`.
    pub alignment: Alignment,
}

/// Backdrop marker; carries no data beyond its identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    /// Unique identifier.
    pub id: EntityId,
}

/// Floor marker; carries no data beyond its identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ground {
    /// Unique identifier.
    pub id: EntityId,
}

/// Decorative scene marker; carries no data beyond its identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique identifier.
    pub id: EntityId,
}
