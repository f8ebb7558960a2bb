use super::types::{GameEvent, SessionState, WorldUpdate};
use crate::domain::systems::collision::Surface;
use crate::domain::systems::commands::Applied;
use crate::domain::{ActorState, World};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tracing::{debug, info};

/// Channels the world task publishes on.
#[derive(Clone)]
pub struct WorldOutputs {
    /// Every tick's snapshot, for streaming consumers.
    pub world_tx: broadcast::Sender<WorldUpdate>,
    /// Most recent snapshot, for polling consumers.
    pub latest_tx: watch::Sender<WorldUpdate>,
    pub session_state_tx: watch::Sender<SessionState>,
}

/// Owns the world and applies one transition at a time.
///
/// Two producers feed this task: the fixed-period physics interval and the
/// command queue. `select!` interleaves them without ever splitting a
/// transition. Returns the last actor state when `shutdown` fires; the state
/// is never reset on the way out.
pub async fn world_task(
    mut world: World,
    mut input_rx: mpsc::Receiver<GameEvent>,
    outputs: WorldOutputs,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
) -> ActorState {
    let mut interval = tokio::time::interval(tick_interval);
    let mut inputs_open = true;

    info!(
        tick_ms = tick_interval.as_millis() as u64,
        platforms = world.course().platforms.len(),
        "world task started"
    );

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            _ = interval.tick() => {
                step_world(&mut world, &outputs);
            }
            event = input_rx.recv(), if inputs_open => {
                match event {
                    Some(event) => handle_event(&mut world, event, &outputs.session_state_tx),
                    None => {
                        // Physics keeps running without a command source.
                        inputs_open = false;
                        debug!("command queue closed");
                    }
                }
            }
        }
    }

    let actor = *world.actor();
    info!(
        tick = world.tick(),
        x = actor.x,
        y = actor.y,
        "world task stopped"
    );
    actor
}

fn step_world(world: &mut World, outputs: &WorldOutputs) {
    if let Some(landing) = world.step() {
        match landing.surface {
            Surface::Platform(index) => {
                debug!(tick = world.tick(), platform = index, "landed on platform")
            }
            Surface::Ground => debug!(tick = world.tick(), "landed on ground"),
        }
    }

    let update = WorldUpdate {
        tick: world.tick(),
        actor: world.snapshot(),
    };
    // No subscribers is fine; the presentation layer may not be connected yet.
    let _ = outputs.world_tx.send(update.clone());
    outputs.latest_tx.send_replace(update);
}

fn handle_event(
    world: &mut World,
    event: GameEvent,
    session_state_tx: &watch::Sender<SessionState>,
) {
    match event {
        GameEvent::Command { token } => {
            if !session_state_tx.borrow().is_listening() {
                debug!(%token, "not listening; command dropped");
                return;
            }

            match world.apply_command(&token) {
                Applied::Ignored => debug!(%token, "unrecognized command ignored"),
                Applied::JumpRefused => debug!(%token, "jump budget exhausted"),
                applied => info!(%token, ?applied, "command applied"),
            }
        }
        GameEvent::SetListening { listening } => {
            let next = SessionState::from_listening(listening);
            let changed = session_state_tx.send_if_modified(|state| {
                if *state == next {
                    false
                } else {
                    *state = next;
                    true
                }
            });
            if changed {
                info!(listening, "listening state changed");
            }
        }
    }
}
