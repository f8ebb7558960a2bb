// Gameplay tuning kept apart from runtime/server configuration.

pub mod actor;
pub mod commands;
pub mod course;

pub use actor::{ActorTuning, GroundLandingVelocity, Hitbox};
pub use commands::{Action, CommandMap, CommandProfile};
