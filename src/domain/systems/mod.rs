// Pure per-transition rules: landing detection, vertical integration and
// command interpretation.

pub mod collision;
pub mod commands;
pub mod physics;
