use crate::domain::state::ActorState;
use crate::domain::tuning::{Action, ActorTuning, CommandMap};

/// Degrees added by one spin.
pub const SPIN_DEGREES: f32 = 360.0;

/// What a token did to the actor, for logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Applied {
    Moved { dx: f32 },
    Jumped { jump_count: u32 },
    /// Jump budget already spent; state unchanged.
    JumpRefused,
    Lowered { dy: f32 },
    Spun,
    /// Empty or unbound token; state unchanged.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommandOutcome {
    pub state: ActorState,
    pub applied: Applied,
}

/// Applies one command token to the actor.
///
/// Total over all tokens: anything the map does not bind is a no-op.
pub fn interpret(
    token: &str,
    state: &ActorState,
    tuning: &ActorTuning,
    commands: &CommandMap,
) -> CommandOutcome {
    let Some(action) = commands.lookup(token) else {
        return CommandOutcome {
            state: *state,
            applied: Applied::Ignored,
        };
    };

    let mut next = *state;
    let applied = match action {
        Action::Right => shift_x(&mut next, tuning.move_step),
        Action::Left => shift_x(&mut next, -tuning.move_step),
        Action::Dash => shift_x(&mut next, tuning.dash_step),
        Action::Jump => {
            if next.jump_count < tuning.max_jumps {
                next.jump_count += 1;
                next.velocity = -tuning.jump_impulse;
                Applied::Jumped {
                    jump_count: next.jump_count,
                }
            } else {
                Applied::JumpRefused
            }
        }
        Action::Crouch => lower(&mut next, tuning.crouch_step),
        Action::Down => lower(&mut next, tuning.down_step),
        Action::Spin => {
            next.rotation += SPIN_DEGREES;
            Applied::Spun
        }
    };

    CommandOutcome {
        state: next,
        applied,
    }
}

fn shift_x(state: &mut ActorState, dx: f32) -> Applied {
    state.x += dx;
    Applied::Moved { dx }
}

fn lower(state: &mut ActorState, dy: f32) -> Applied {
    state.y += dy;
    Applied::Lowered { dy }
}
