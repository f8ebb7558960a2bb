// Use cases layer: the world task and the session that wires it up.

pub mod game;
pub mod session;
pub mod types;

pub use session::{SessionHandle, SessionSettings};
pub use types::{GameEvent, SessionState, WorldUpdate};
