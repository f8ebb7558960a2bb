use std::fmt;

// Startup configuration errors. All of them are fatal: the simulation does
// not start without a usable ground plane, hitbox and platform table.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Unreadable { path: String, reason: String },
    Malformed(String),
    InvalidGround,
    InvalidHitbox,
    InvalidTuning(&'static str),
    InvalidPlatform { index: usize },
    InvalidSpawn,
    ZeroTickInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Unreadable { path, reason } => {
                write!(f, "cannot read config {path}: {reason}")
            }
            ConfigError::Malformed(reason) => write!(f, "malformed config: {reason}"),
            ConfigError::InvalidGround => write!(f, "ground_y must be finite"),
            ConfigError::InvalidHitbox => {
                write!(f, "hitbox width and height must be finite and positive")
            }
            ConfigError::InvalidTuning(field) => write!(f, "tuning value {field} must be finite"),
            ConfigError::InvalidPlatform { index } => write!(
                f,
                "platform {index} must have finite coordinates and non-negative size"
            ),
            ConfigError::InvalidSpawn => write!(f, "spawn pose must be finite"),
            ConfigError::ZeroTickInterval => write!(f, "tick interval must be non-zero"),
        }
    }
}

impl std::error::Error for ConfigError {}
