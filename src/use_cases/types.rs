// Use-case level inputs/outputs for the world task.

use crate::domain::ActorSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// One already-classified command token from a command source.
    Command { token: String },
    /// Starts or stops command delivery. Never touches the actor.
    SetListening { listening: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Listening,
}

impl SessionState {
    pub fn from_listening(listening: bool) -> Self {
        if listening {
            SessionState::Listening
        } else {
            SessionState::Idle
        }
    }

    pub fn is_listening(self) -> bool {
        matches!(self, SessionState::Listening)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorldUpdate {
    pub tick: u64,
    pub actor: ActorSnapshot,
}
