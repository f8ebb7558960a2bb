// The simulation aggregate: one actor on one course.

use super::errors::ConfigError;
use super::state::{ActorSnapshot, ActorState, Course, SpawnPose};
use super::systems::collision::Landing;
use super::systems::commands::{self, Applied};
use super::systems::physics;
use super::tuning::{ActorTuning, CommandMap};

/// Owns the actor state and the immutable rules it is simulated under.
///
/// Every method that mutates is one complete transition; callers serialise
/// access (the world task owns the only instance).
#[derive(Debug, Clone)]
pub struct World {
    actor: ActorState,
    course: Course,
    tuning: ActorTuning,
    commands: CommandMap,
    tick: u64,
}

impl World {
    pub fn new(
        course: Course,
        tuning: ActorTuning,
        commands: CommandMap,
        spawn: SpawnPose,
    ) -> Result<Self, ConfigError> {
        validate(&course, &tuning, &spawn)?;
        Ok(Self {
            actor: ActorState::from(spawn),
            course,
            tuning,
            commands,
            tick: 0,
        })
    }

    pub fn apply_command(&mut self, token: &str) -> Applied {
        let outcome = commands::interpret(token, &self.actor, &self.tuning, &self.commands);
        self.actor = outcome.state;
        outcome.applied
    }

    /// Runs one physics tick and returns the landing, if any.
    pub fn step(&mut self) -> Option<Landing> {
        let outcome = physics::tick_actor(&self.actor, &self.tuning, &self.course);
        self.actor = outcome.state;
        self.tick += 1;
        outcome.landing
    }

    pub fn actor(&self) -> &ActorState {
        &self.actor
    }

    pub fn snapshot(&self) -> ActorSnapshot {
        ActorSnapshot::from(&self.actor)
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn tuning(&self) -> &ActorTuning {
        &self.tuning
    }
}

impl Default for World {
    fn default() -> Self {
        Self {
            actor: ActorState::from(SpawnPose::default()),
            course: Course::default(),
            tuning: ActorTuning::default(),
            commands: CommandMap::default(),
            tick: 0,
        }
    }
}

fn validate(course: &Course, tuning: &ActorTuning, spawn: &SpawnPose) -> Result<(), ConfigError> {
    if !course.ground_y.is_finite() {
        return Err(ConfigError::InvalidGround);
    }

    let hitbox = tuning.hitbox;
    if !(hitbox.width.is_finite() && hitbox.height.is_finite())
        || hitbox.width <= 0.0
        || hitbox.height <= 0.0
    {
        return Err(ConfigError::InvalidHitbox);
    }

    let steps = [
        ("gravity", tuning.gravity),
        ("move_step", tuning.move_step),
        ("dash_step", tuning.dash_step),
        ("jump_impulse", tuning.jump_impulse),
        ("crouch_step", tuning.crouch_step),
        ("down_step", tuning.down_step),
    ];
    if let Some((field, _)) = steps.into_iter().find(|(_, value)| !value.is_finite()) {
        return Err(ConfigError::InvalidTuning(field));
    }

    for (index, platform) in course.platforms.iter().enumerate() {
        let finite = [platform.x, platform.y, platform.width, platform.height]
            .iter()
            .all(|value| value.is_finite());
        if !finite || platform.width < 0.0 || platform.height < 0.0 {
            return Err(ConfigError::InvalidPlatform { index });
        }
    }

    if !(spawn.x.is_finite() && spawn.y.is_finite() && spawn.rotation.is_finite()) {
        return Err(ConfigError::InvalidSpawn);
    }

    Ok(())
}
