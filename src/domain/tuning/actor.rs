use serde::Deserialize;

/// Axis-aligned actor bounds; `x`/`y` of the actor is its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hitbox {
    pub width: f32,
    pub height: f32,
}

/// Velocity assigned when the actor lands on the ground plane.
///
/// Platform landings always zero the velocity. One variant of the game kept
/// gravity's per-tick increment on ground landings instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundLandingVelocity {
    #[default]
    Zero,
    Gravity,
}

/// Gameplay tuning for the actor. Units are pixels and pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActorTuning {
    /// Added to the vertical velocity every tick.
    pub gravity: f32,

    pub hitbox: Hitbox,

    /// Horizontal displacement for "right"/"left".
    pub move_step: f32,

    /// Horizontal displacement for "dash".
    pub dash_step: f32,

    /// Upward speed set by a jump.
    pub jump_impulse: f32,

    /// Jumps allowed between landings.
    pub max_jumps: u32,

    pub crouch_step: f32,
    pub down_step: f32,

    /// Ground landing policy. Left unset, the command profile decides.
    pub ground_landing: Option<GroundLandingVelocity>,
}

impl ActorTuning {
    /// Velocity after a landing on the ground plane.
    pub fn ground_landing_velocity(&self) -> f32 {
        match self.ground_landing.unwrap_or_default() {
            GroundLandingVelocity::Zero => 0.0,
            GroundLandingVelocity::Gravity => self.gravity,
        }
    }
}

impl Default for ActorTuning {
    fn default() -> Self {
        Self {
            gravity: 5.0,
            hitbox: Hitbox {
                width: 50.0,
                height: 50.0,
            },
            move_step: 50.0,
            dash_step: 100.0,
            jump_impulse: 30.0,
            max_jumps: 2,
            crouch_step: 20.0,
            down_step: 50.0,
            ground_landing: None,
        }
    }
}
