// Wire protocol DTOs and conversions for public server messages.

use crate::domain::tuning::Hitbox;
use crate::domain::{ActorSnapshot, Course, Platform};
use crate::use_cases::{SessionState, WorldUpdate};
use serde::{Deserialize, Serialize};

/// Upper x bound (exclusive) of the first background zone.
pub const FIRST_ZONE_END: f32 = 300.0;
/// Upper x bound (exclusive) of the second background zone.
pub const SECOND_ZONE_END: f32 = 600.0;

/// Messages the server sends to connected clients over the WebSocket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    // Static course geometry, sent once when a client connects.
    Course(CourseDto),
    // Actor snapshot for a given tick.
    WorldUpdate(WorldUpdateDto),
    // Listening state transitions.
    SessionState(SessionStateDto),
}

/// Messages the client sends to the server over the WebSocket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    // A recognized command token.
    Command(CommandDto),
    StartListening,
    StopListening,
}

/// Single best, already-thresholded token from the command source.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandDto {
    #[serde(default)]
    pub word: String,
}

/// Reply to an accepted HTTP command.
///
/// `listening` is the session state when the command was queued; an idle
/// session drops the command instead of applying it.
#[derive(Debug, Clone, Serialize)]
pub struct CommandAcceptedDto {
    pub listening: bool,
}

/// Body for toggling command delivery over HTTP.
#[derive(Debug, Clone, Deserialize)]
pub struct ListeningDto {
    pub listening: bool,
}

/// Cosmetic background zone, derived from x alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Transfagarasan,
    Balea,
    Apuseni,
}

impl Zone {
    pub fn from_x(x: f32) -> Self {
        if x < FIRST_ZONE_END {
            Zone::Transfagarasan
        } else if x < SECOND_ZONE_END {
            Zone::Balea
        } else {
            Zone::Apuseni
        }
    }
}

/// Actor pose for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ActorDto {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub zone: Zone,
}

impl From<&ActorSnapshot> for ActorDto {
    fn from(actor: &ActorSnapshot) -> Self {
        Self {
            x: actor.x,
            y: actor.y,
            rotation: actor.rotation,
            zone: Zone::from_x(actor.x),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformDto {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&Platform> for PlatformDto {
    fn from(platform: &Platform) -> Self {
        Self {
            x: platform.x,
            y: platform.y,
            width: platform.width,
            height: platform.height,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HitboxDto {
    pub width: f32,
    pub height: f32,
}

/// Geometry the physics runs against, so clients draw what the actor lands on.
#[derive(Debug, Clone, Serialize)]
pub struct CourseDto {
    pub ground_y: f32,
    /// Landing priority order.
    pub platforms: Vec<PlatformDto>,
    pub hitbox: HitboxDto,
}

impl CourseDto {
    pub fn new(course: &Course, hitbox: Hitbox) -> Self {
        Self {
            ground_y: course.ground_y,
            platforms: course.platforms.iter().map(PlatformDto::from).collect(),
            hitbox: HitboxDto {
                width: hitbox.width,
                height: hitbox.height,
            },
        }
    }
}

/// Snapshot of the world sent to clients on each tick.
#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdateDto {
    pub tick: u64,
    pub actor: ActorDto,
}

impl From<WorldUpdate> for WorldUpdateDto {
    fn from(update: WorldUpdate) -> Self {
        Self {
            tick: update.tick,
            actor: ActorDto::from(&update.actor),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub enum SessionStateDto {
    Idle,
    Listening,
}

impl From<SessionState> for SessionStateDto {
    fn from(state: SessionState) -> Self {
        match state {
            SessionState::Idle => SessionStateDto::Idle,
            SessionState::Listening => SessionStateDto::Listening,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn when_x_crosses_zone_bounds_then_zone_changes_at_exact_thresholds() {
        assert_eq!(Zone::from_x(-50.0), Zone::Transfagarasan);
        assert_eq!(Zone::from_x(299.9), Zone::Transfagarasan);
        assert_eq!(Zone::from_x(300.0), Zone::Balea);
        assert_eq!(Zone::from_x(599.0), Zone::Balea);
        assert_eq!(Zone::from_x(600.0), Zone::Apuseni);
    }

    #[test]
    fn when_world_update_is_serialized_then_it_is_tagged_with_zone() {
        let msg = ServerMessage::WorldUpdate(WorldUpdateDto::from(WorldUpdate {
            tick: 7,
            actor: ActorSnapshot {
                x: 350.0,
                y: 265.0,
                rotation: 720.0,
            },
        }));

        let value = serde_json::to_value(&msg).expect("message should serialize");

        assert_eq!(
            value,
            json!({
                "type": "WorldUpdate",
                "data": {
                    "tick": 7,
                    "actor": { "x": 350.0, "y": 265.0, "rotation": 720.0, "zone": "balea" }
                }
            })
        );
    }

    #[test]
    fn when_client_sends_command_then_word_is_parsed() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"Command","data":{"word":"up"}}"#)
                .expect("command should parse");

        assert!(matches!(msg, ClientMessage::Command(CommandDto { word }) if word == "up"));
    }

    #[test]
    fn when_client_sends_listening_toggle_then_unit_variant_is_parsed() {
        let start: ClientMessage =
            serde_json::from_str(r#"{"type":"StartListening"}"#).expect("toggle should parse");
        let stop: ClientMessage =
            serde_json::from_str(r#"{"type":"StopListening"}"#).expect("toggle should parse");

        assert!(matches!(start, ClientMessage::StartListening));
        assert!(matches!(stop, ClientMessage::StopListening));
    }

    #[test]
    fn when_course_is_serialized_then_platforms_keep_table_order() {
        let course = Course {
            ground_y: 400.0,
            platforms: vec![
                Platform::new(10.0, 300.0, 80.0, 10.0),
                Platform::new(0.0, 200.0, 40.0, 5.0),
            ],
        };
        let hitbox = Hitbox {
            width: 50.0,
            height: 50.0,
        };

        let value = serde_json::to_value(ServerMessage::Course(CourseDto::new(&course, hitbox)))
            .expect("message should serialize");

        assert_eq!(
            value,
            json!({
                "type": "Course",
                "data": {
                    "ground_y": 400.0,
                    "platforms": [
                        { "x": 10.0, "y": 300.0, "width": 80.0, "height": 10.0 },
                        { "x": 0.0, "y": 200.0, "width": 40.0, "height": 5.0 }
                    ],
                    "hitbox": { "width": 50.0, "height": 50.0 }
                }
            })
        );
    }
}
