use super::collision::{self, Landing, Surface};
use crate::domain::state::{ActorState, Course};
use crate::domain::tuning::ActorTuning;

/// Result of one physics tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub state: ActorState,
    pub landing: Option<Landing>,
}

/// Advances the actor by one fixed tick.
///
/// Gravity is added to the candidate velocity before landing checks. On a
/// landing the actor is snapped onto the surface and its jump budget refills.
pub fn tick_actor(state: &ActorState, tuning: &ActorTuning, course: &Course) -> TickOutcome {
    let candidate_y = state.y + state.velocity;
    let candidate_velocity = state.velocity + tuning.gravity;

    let landing = collision::resolve(state.x, state.y, candidate_y, tuning.hitbox, course);

    let next = match landing {
        Some(landing) => ActorState {
            y: landing.surface_y - tuning.hitbox.height,
            velocity: match landing.surface {
                Surface::Platform(_) => 0.0,
                Surface::Ground => tuning.ground_landing_velocity(),
            },
            jump_count: 0,
            ..*state
        },
        None => ActorState {
            y: candidate_y,
            velocity: candidate_velocity,
            ..*state
        },
    };

    TickOutcome {
        state: next,
        landing,
    }
}
