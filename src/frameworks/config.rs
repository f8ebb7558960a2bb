use crate::domain::tuning::{Action, ActorTuning, CommandMap, CommandProfile};
use crate::domain::{ConfigError, Course, Platform, SpawnPose, World};
use crate::use_cases::SessionSettings;
use serde::Deserialize;
use std::{
    collections::HashMap,
    env,
    path::{Path, PathBuf},
    time::Duration,
};

// Runtime/server constants (not gameplay tuning).

pub fn http_port() -> u16 {
    env::var("OCHI_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

pub fn config_path() -> Option<PathBuf> {
    env::var_os("OCHI_CONFIG_PATH")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub const INPUT_CHANNEL_CAPACITY: usize = 1024;
pub const WORLD_BROADCAST_CAPACITY: usize = 128;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Course section of the game config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CourseConfig {
    pub ground_y: f32,
    /// Listed in landing priority order.
    pub platforms: Vec<Platform>,
}

impl Default for CourseConfig {
    fn default() -> Self {
        let course = Course::default();
        Self {
            ground_y: course.ground_y,
            platforms: course.platforms,
        }
    }
}

/// Gameplay configuration loaded from TOML; every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub tuning: ActorTuning,
    pub profile: CommandProfile,
    /// Extra token bindings layered over the profile's table.
    pub commands: HashMap<String, Action>,
    pub course: CourseConfig,
    pub spawn: SpawnPose,
    pub tick_interval_ms: u64,
    pub start_listening: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tuning: ActorTuning::default(),
            profile: CommandProfile::default(),
            commands: HashMap::new(),
            course: CourseConfig::default(),
            spawn: SpawnPose::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            start_listening: false,
        }
    }
}

impl GameConfig {
    /// Tuning with the profile's ground landing applied when the file leaves it unset.
    pub fn effective_tuning(&self) -> ActorTuning {
        let mut tuning = self.tuning;
        if tuning.ground_landing.is_none() {
            tuning.ground_landing = Some(self.profile.ground_landing());
        }
        tuning
    }

    pub fn command_map(&self) -> CommandMap {
        CommandMap::from_profile(self.profile).with_overrides(self.commands.clone())
    }

    pub fn build_world(&self) -> Result<World, ConfigError> {
        let course = Course {
            ground_y: self.course.ground_y,
            platforms: self.course.platforms.clone(),
        };
        World::new(
            course,
            self.effective_tuning(),
            self.command_map(),
            self.spawn,
        )
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            input_channel_capacity: INPUT_CHANNEL_CAPACITY,
            world_broadcast_capacity: WORLD_BROADCAST_CAPACITY,
            tick_interval: self.tick_interval(),
            start_listening: self.start_listening,
        }
    }

    /// Rejects any config the simulation cannot start from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        self.build_world().map(|_| ())
    }
}

pub fn parse_game_config(raw: &str) -> Result<GameConfig, ConfigError> {
    let config: GameConfig =
        toml::from_str(raw).map_err(|e| ConfigError::Malformed(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Loads the game config; no path means built-in defaults.
pub fn load_game_config(path: Option<&Path>) -> Result<GameConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };

    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_game_config(&raw)
}
