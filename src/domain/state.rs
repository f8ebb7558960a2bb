// Domain-level actor state, static course geometry and snapshot types.

use serde::Deserialize;

/// The single controllable actor. Positive `velocity` points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorState {
    pub x: f32,
    pub y: f32,
    /// Accumulated degrees; never wrapped.
    pub rotation: f32,
    pub velocity: f32,
    /// Airborne jumps used since the last landing.
    pub jump_count: u32,
}

impl From<SpawnPose> for ActorState {
    fn from(pose: SpawnPose) -> Self {
        Self {
            x: pose.x,
            y: pose.y,
            rotation: pose.rotation,
            velocity: 0.0,
            jump_count: 0,
        }
    }
}

/// Read-only projection handed to the presentation layer every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorSnapshot {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

impl From<&ActorState> for ActorSnapshot {
    fn from(state: &ActorState) -> Self {
        Self {
            x: state.x,
            y: state.y,
            rotation: state.rotation,
        }
    }
}

/// Initial pose the actor is created with at session start.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpawnPose {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

impl Default for SpawnPose {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 200.0,
            rotation: 0.0,
        }
    }
}

/// Floating platform. Only the top edge (`y`) is a landing surface.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Static level geometry: the ground line plus platforms in priority order.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub ground_y: f32,
    pub platforms: Vec<Platform>,
}
