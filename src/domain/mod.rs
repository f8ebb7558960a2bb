// Domain layer: actor state and the pure simulation rules.

pub mod errors;
pub mod state;
pub mod systems;
pub mod tuning;
pub mod world;

pub use errors::ConfigError;
pub use state::{ActorSnapshot, ActorState, Course, Platform, SpawnPose};
pub use world::World;
