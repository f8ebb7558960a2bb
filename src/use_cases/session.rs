// Session orchestration: channel wiring and lifecycle for the world task.

use super::game::{WorldOutputs, world_task};
use super::types::{GameEvent, SessionState, WorldUpdate};
use crate::domain::tuning::Hitbox;
use crate::domain::{ActorState, Course, World};
use axum::extract::ws::Utf8Bytes;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify, broadcast, mpsc, watch};
use tokio::task::JoinHandle;

/// Runtime settings for spawning a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Capacity for inbound command events.
    pub input_channel_capacity: usize,
    /// Capacity for broadcast world updates.
    pub world_broadcast_capacity: usize,
    /// Fixed physics tick period.
    pub tick_interval: Duration,
    /// Whether commands are delivered before any StartListening request.
    pub start_listening: bool,
}

/// Channels into and out of a running world task.
#[derive(Clone)]
pub struct SessionHandle {
    /// Sender for command events into the world task.
    pub input_tx: mpsc::Sender<GameEvent>,
    /// Broadcast sender for raw world updates.
    pub world_tx: broadcast::Sender<WorldUpdate>,
    /// Watch sender holding the latest raw world update.
    pub latest_tx: watch::Sender<WorldUpdate>,
    /// Broadcast sender for serialized world updates.
    pub world_bytes_tx: broadcast::Sender<Utf8Bytes>,
    /// Watch sender holding the latest serialized world update.
    pub world_latest_tx: watch::Sender<Utf8Bytes>,
    /// Watch sender for the listening state.
    pub session_state_tx: watch::Sender<SessionState>,
    // Fixed for the session's lifetime; clients draw from the same table
    // the physics lands on.
    course: Arc<Course>,
    hitbox: Hitbox,
    shutdown: Arc<Notify>,
    task: Arc<Mutex<Option<JoinHandle<ActorState>>>>,
}

impl SessionHandle {
    /// Spawns the world task for `world` and returns its handle.
    pub fn spawn(settings: &SessionSettings, world: World) -> Self {
        let (input_tx, input_rx) = mpsc::channel::<GameEvent>(settings.input_channel_capacity);
        let (world_tx, _world_rx) =
            broadcast::channel::<WorldUpdate>(settings.world_broadcast_capacity);
        let (latest_tx, _latest_rx) = watch::channel(WorldUpdate {
            tick: world.tick(),
            actor: world.snapshot(),
        });
        let (world_bytes_tx, _world_bytes_rx) =
            broadcast::channel::<Utf8Bytes>(settings.world_broadcast_capacity);
        let (world_latest_tx, _world_latest_rx) = watch::channel::<Utf8Bytes>(Utf8Bytes::from(""));
        let (session_state_tx, _session_state_rx) =
            watch::channel(SessionState::from_listening(settings.start_listening));
        let shutdown = Arc::new(Notify::new());
        let course = Arc::new(world.course().clone());
        let hitbox = world.tuning().hitbox;

        let task = tokio::spawn(world_task(
            world,
            input_rx,
            WorldOutputs {
                world_tx: world_tx.clone(),
                latest_tx: latest_tx.clone(),
                session_state_tx: session_state_tx.clone(),
            },
            settings.tick_interval,
            shutdown.clone(),
        ));

        Self {
            input_tx,
            world_tx,
            latest_tx,
            world_bytes_tx,
            world_latest_tx,
            session_state_tx,
            course,
            hitbox,
            shutdown,
            task: Arc::new(Mutex::new(Some(task))),
        }
    }

    /// Latest snapshot published by the world task.
    pub fn latest(&self) -> WorldUpdate {
        self.latest_tx.borrow().clone()
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn hitbox(&self) -> Hitbox {
        self.hitbox
    }

    /// Stops the physics loop and returns the final actor state.
    ///
    /// Returns `None` if the session was already stopped or the task died.
    pub async fn stop(&self) -> Option<ActorState> {
        let task = self.task.lock().await.take()?;
        self.shutdown.notify_one();
        task.await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(start_listening: bool) -> SessionSettings {
        SessionSettings {
            input_channel_capacity: 16,
            world_broadcast_capacity: 16,
            tick_interval: Duration::from_millis(50),
            start_listening,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn when_session_spawns_then_latest_starts_at_spawn_pose() {
        let session = SessionHandle::spawn(&settings(false), World::default());

        let latest = session.latest();

        assert_eq!(latest.actor.x, 0.0);
        assert_eq!(latest.actor.rotation, 0.0);
        assert_eq!(*session.session_state_tx.borrow(), SessionState::Idle);
        assert_eq!(session.course().platforms.len(), 7);
        assert_eq!(session.hitbox().width, 50.0);
        session.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn when_session_is_stopped_twice_then_second_stop_returns_none() {
        let session = SessionHandle::spawn(&settings(true), World::default());
        session
            .input_tx
            .send(GameEvent::Command {
                token: "dash".to_string(),
            })
            .await
            .expect("session should accept commands");
        tokio::time::sleep(Duration::from_millis(200)).await;

        let first = session.stop().await;
        let second = session.stop().await;

        assert_eq!(first.map(|actor| actor.x), Some(100.0));
        assert_eq!(second, None);
    }

    #[tokio::test(start_paused = true)]
    async fn when_ticks_advance_then_latest_tracks_the_world() {
        let session = SessionHandle::spawn(&settings(true), World::default());

        tokio::time::sleep(Duration::from_millis(500)).await;

        let latest = session.latest();
        assert!(latest.tick >= 10);
        assert_eq!(latest.actor.y, 265.0);
        session.stop().await;
    }
}
