// Token bindings for the command interpreter.
//
// Two variants of the game bound different words to crouch and spin and
// disagreed on the ground landing velocity. Both are kept as named profiles.

use super::actor::GroundLandingVelocity;
use serde::Deserialize;
use std::collections::HashMap;

/// State delta a recognised token maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Right,
    Left,
    Dash,
    Jump,
    Crouch,
    Down,
    Spin,
}

/// Named token map preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandProfile {
    /// Union of both variants.
    #[default]
    Combined,
    /// "crouch" and "six"; ground landings zero the velocity.
    Crouch,
    /// "down", "spin" and "rotate"; ground landings keep gravity's increment.
    Down,
}

const COMMON_BINDINGS: [(&str, Action); 5] = [
    ("right", Action::Right),
    ("go", Action::Right),
    ("left", Action::Left),
    ("dash", Action::Dash),
    ("up", Action::Jump),
];

const CROUCH_BINDINGS: [(&str, Action); 2] = [("crouch", Action::Crouch), ("six", Action::Spin)];

const DOWN_BINDINGS: [(&str, Action); 3] = [
    ("down", Action::Down),
    ("spin", Action::Spin),
    ("rotate", Action::Spin),
];

impl CommandProfile {
    pub fn ground_landing(self) -> GroundLandingVelocity {
        match self {
            CommandProfile::Combined | CommandProfile::Crouch => GroundLandingVelocity::Zero,
            CommandProfile::Down => GroundLandingVelocity::Gravity,
        }
    }

    fn bindings(self) -> Vec<(&'static str, Action)> {
        let mut bindings = COMMON_BINDINGS.to_vec();
        match self {
            CommandProfile::Combined => {
                bindings.extend(CROUCH_BINDINGS);
                bindings.extend(DOWN_BINDINGS);
            }
            CommandProfile::Crouch => bindings.extend(CROUCH_BINDINGS),
            CommandProfile::Down => bindings.extend(DOWN_BINDINGS),
        }
        bindings
    }
}

/// Exact-match lookup from command token to action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMap {
    bindings: HashMap<String, Action>,
}

impl CommandMap {
    pub fn from_profile(profile: CommandProfile) -> Self {
        let bindings = profile
            .bindings()
            .into_iter()
            .map(|(token, action)| (token.to_string(), action))
            .collect();
        Self { bindings }
    }

    /// Adds or replaces bindings on top of the current map.
    pub fn with_overrides(mut self, overrides: HashMap<String, Action>) -> Self {
        self.bindings.extend(overrides);
        self
    }

    pub fn lookup(&self, token: &str) -> Option<Action> {
        self.bindings.get(token).copied()
    }
}

impl Default for CommandMap {
    fn default() -> Self {
        Self::from_profile(CommandProfile::default())
    }
}
