use crate::interface_adapters::protocol::{
    ClientMessage, CourseDto, ServerMessage, WorldUpdateDto,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{GameEvent, SessionHandle, SessionState, WorldUpdate};

use axum::{
    Error,
    extract::{
        State,
        ws::{CloseFrame, Message, Utf8Bytes, WebSocket, WebSocketUpgrade, close_code},
    },
    response::IntoResponse,
};
use futures::SinkExt;
use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};
use tokio::sync::watch::Receiver;
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{Instrument, debug, error, info, info_span, warn};

#[derive(Debug)]
enum NetError {
    // Categorizes connection lifecycle failures so callers can decide policy.
    #[allow(dead_code)]
    Ws(axum::Error),
    #[allow(dead_code)]
    Serialization(serde_json::Error),
    InputClosed,
    WorldUpdatesClosed,
    SessionStateClosed,
}

impl From<axum::Error> for NetError {
    fn from(e: axum::Error) -> Self {
        NetError::Ws(e)
    }
}

const LOG_THROTTLE: Duration = Duration::from_secs(2);
const MAX_INVALID_JSON: u32 = 10;
// Recognizer labels are single short words; anything longer is noise.
const MAX_TOKEN_LEN: usize = 64;

fn next_conn_id() -> u64 {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed)
}

pub async fn world_update_serializer(
    mut world_rx: broadcast::Receiver<WorldUpdate>,
    world_bytes_tx: broadcast::Sender<Utf8Bytes>,
    world_latest_tx: watch::Sender<Utf8Bytes>,
) {
    // Serialize each world update once and broadcast the shared bytes.
    loop {
        match world_rx.recv().await {
            Ok(update) => {
                let msg = ServerMessage::WorldUpdate(WorldUpdateDto::from(update));
                let txt = match serde_json::to_string(&msg) {
                    Ok(txt) => txt,
                    Err(e) => {
                        error!(error = ?e, "failed to serialize world update");
                        continue;
                    }
                };

                let bytes = Utf8Bytes::from(txt);
                // Store the latest bytes for lag recovery and late joiners.
                world_latest_tx.send_replace(bytes.clone());
                let _ = world_bytes_tx.send(bytes);
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(
                    missed = n,
                    "world serializer lagged; skipping to latest update"
                );
            }
            Err(broadcast::error::RecvError::Closed) => {
                info!("world updates channel closed; serializer exiting");
                break;
            }
        }
    }
}

pub fn spawn_session_serializer(session: &SessionHandle) {
    tokio::spawn(world_update_serializer(
        session.world_tx.subscribe(),
        session.world_bytes_tx.clone(),
        session.world_latest_tx.clone(),
    ));
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let session = state.session.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, session))
}

async fn handle_socket(socket: WebSocket, session: SessionHandle) {
    let conn_id = next_conn_id();
    serve_connection(socket, session, conn_id)
        .instrument(info_span!("conn", conn_id))
        .await
}

async fn serve_connection(mut socket: WebSocket, session: SessionHandle, conn_id: u64) {
    let mut ctx = match bootstrap_connection(&mut socket, &session, conn_id).await {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!(error = ?e, "failed to bootstrap connection");
            let _ = socket.close().await;
            return;
        }
    };

    info!("client connected");

    if let Err(e) = run_client_loop(&mut socket, &mut ctx).await {
        warn!(error = ?e, "client loop exited with error");
    }
}

async fn send_message(socket: &mut WebSocket, msg: &ServerMessage) -> Result<usize, NetError> {
    let txt = serde_json::to_string(msg).map_err(NetError::Serialization)?;
    let bytes = txt.len();
    socket
        .send(Message::Text(txt.into()))
        .await
        .map_err(NetError::Ws)?;
    Ok(bytes)
}

struct ConnCtx {
    pub conn_id: u64,
    pub input_tx: mpsc::Sender<GameEvent>,
    pub world_bytes_rx: broadcast::Receiver<Utf8Bytes>,
    pub world_latest_rx: watch::Receiver<Utf8Bytes>,
    pub session_state_rx: watch::Receiver<SessionState>,
    // Count lag recovery snapshots sent to this client.
    pub lag_recovery_count: u64,

    pub msgs_in: u64,
    pub msgs_out: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,

    pub commands_in: u64,
    pub invalid_json: u32,

    pub last_world_lag_log: Instant,
    pub last_invalid_input_log: Instant,

    pub close_frame: Option<CloseFrame>,
}

async fn bootstrap_connection(
    socket: &mut WebSocket,
    session: &SessionHandle,
    conn_id: u64,
) -> Result<ConnCtx, NetError> {
    // Subscribe to updates *before* doing anything else (awaits) to not miss packets.
    let world_bytes_rx = session.world_bytes_tx.subscribe();
    let world_latest_rx = session.world_latest_tx.subscribe();
    let session_state_rx = session.session_state_tx.subscribe();

    let mut msgs_out = 0;
    let mut bytes_out = 0;

    // Course geometry first, so the client can draw before the first pose.
    let course_msg = ServerMessage::Course(CourseDto::new(session.course(), session.hitbox()));
    bytes_out += send_message(socket, &course_msg).await? as u64;
    msgs_out += 1;

    // Send the listening state so the client can render its controls.
    let initial_state = *session_state_rx.borrow();
    let state_msg = ServerMessage::SessionState(initial_state.into());
    bytes_out += send_message(socket, &state_msg).await? as u64;
    msgs_out += 1;

    // Send the latest pose right away instead of waiting for the next tick.
    let latest = world_latest_rx.borrow().clone();
    if !latest.is_empty() {
        bytes_out += latest.len() as u64;
        socket.send(Message::Text(latest)).await?;
        msgs_out += 1;
    }

    let now = Instant::now() - LOG_THROTTLE;
    Ok(ConnCtx {
        conn_id,
        input_tx: session.input_tx.clone(),
        world_bytes_rx,
        world_latest_rx,
        session_state_rx,
        lag_recovery_count: 0,

        msgs_in: 0,
        msgs_out,
        bytes_in: 0,
        bytes_out,

        commands_in: 0,
        invalid_json: 0,

        last_world_lag_log: now,
        last_invalid_input_log: now,

        close_frame: None,
    })
}

enum LoopControl {
    Continue,
    Disconnect,
}

fn should_log(last: &mut Instant) -> bool {
    if last.elapsed() >= LOG_THROTTLE {
        *last = Instant::now();
        true
    } else {
        false
    }
}

/// Normalizes a recognizer token; `None` means there is nothing to forward.
///
/// Surrounding whitespace is transport noise and is stripped here, so
/// `" right"` from a client reaches the world as `"right"`. The command table
/// itself matches exactly and treats a padded token as unknown.
pub(crate) fn sanitize_token(word: &str) -> Option<&str> {
    let token = word.trim();
    if token.is_empty() || token.len() > MAX_TOKEN_LEN {
        return None;
    }
    Some(token)
}

async fn forward_event(
    input_tx: &mpsc::Sender<GameEvent>,
    event: GameEvent,
) -> Result<LoopControl, NetError> {
    // Wait for queue capacity rather than dropping the command.
    input_tx
        .send(event)
        .await
        .map_err(|_| NetError::InputClosed)?;
    Ok(LoopControl::Continue)
}

async fn run_client_loop(socket: &mut WebSocket, ctx: &mut ConnCtx) -> Result<(), NetError> {
    // Split borrows so `tokio::select!` can hold them concurrently.
    let ConnCtx {
        conn_id,
        input_tx,
        world_bytes_rx,
        world_latest_rx,
        session_state_rx,
        lag_recovery_count,
        msgs_in,
        msgs_out,
        bytes_in,
        bytes_out,
        commands_in,
        invalid_json,
        last_world_lag_log,
        last_invalid_input_log,
        close_frame,
    } = ctx;

    let mut fatal: Option<NetError> = None;

    loop {
        // disconnect becomes true on error
        let disconnect: bool = tokio::select! {
            // Incoming Message from Client
            incoming = socket.recv() => {
                match handle_incoming_ws(
                    incoming,
                    input_tx,
                    msgs_in,
                    bytes_in,
                    commands_in,
                    invalid_json,
                    last_invalid_input_log,
                    close_frame,
                ).await {
                    Ok(LoopControl::Continue) => false,
                    Ok(LoopControl::Disconnect) => true,
                    Err(e) => {
                        fatal = Some(e);
                        true
                    }
                }
            }

            // Outgoing World Update
            world_msg = world_bytes_rx.recv() => {
                match world_msg {
                    Ok(bytes) => match forward_world_bytes(bytes, socket, msgs_out, bytes_out).await {
                        LoopControl::Continue => false,
                        LoopControl::Disconnect => true,
                    },
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        if should_log(last_world_lag_log) {
                            warn!(missed = n, "world updates lagged; sending snapshot");
                        }

                        // Resync strategy: send the latest world snapshot.
                        let latest = world_latest_rx.borrow().clone();
                        if latest.is_empty() {
                            false
                        } else {
                            *lag_recovery_count += 1;
                            match forward_world_bytes(latest, socket, msgs_out, bytes_out).await {
                                LoopControl::Continue => false,
                                LoopControl::Disconnect => true,
                            }
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        fatal = Some(NetError::WorldUpdatesClosed);
                        true
                    }
                }
            }

            // Outgoing Session State
            changed_state = session_state_rx.changed() => {
                match changed_state {
                    Ok(()) => match forward_session_state(session_state_rx, socket, msgs_out, bytes_out).await {
                        LoopControl::Continue => false,
                        LoopControl::Disconnect => true,
                    },
                    Err(_) => {
                        warn!("session state channel closed; disconnecting");
                        fatal = Some(NetError::SessionStateClosed);
                        true
                    }
                }
            }
        };

        if disconnect {
            if let Some(frame) = close_frame.take() {
                let _ = socket.send(Message::Close(Some(frame))).await;
            }
            if let Err(err) = socket.close().await.map_err(NetError::Ws) {
                debug!(error = ?err, "socket close error");
            }
            break;
        }
    }

    debug!(
        conn_id = *conn_id,
        msgs_in = *msgs_in,
        msgs_out = *msgs_out,
        bytes_in = *bytes_in,
        bytes_out = *bytes_out,
        commands_in = *commands_in,
        invalid_json = *invalid_json,
        lag_recovery_count = *lag_recovery_count,
        "connection stats"
    );
    info!("client disconnected");

    if let Some(err) = fatal {
        Err(err)
    } else {
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
async fn handle_incoming_ws(
    incoming: Option<Result<Message, Error>>,
    input_tx: &mpsc::Sender<GameEvent>,
    msgs_in: &mut u64,
    bytes_in: &mut u64,
    commands_in: &mut u64,
    invalid_json: &mut u32,
    last_invalid_input_log: &mut Instant,
    close_frame: &mut Option<CloseFrame>,
) -> Result<LoopControl, NetError> {
    match incoming {
        Some(Ok(msg)) => match msg {
            Message::Text(text) => {
                *msgs_in += 1;
                *bytes_in += text.len() as u64;

                match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(ClientMessage::Command(command)) => {
                        let Some(token) = sanitize_token(&command.word) else {
                            // Empty means "no command this event".
                            return Ok(LoopControl::Continue);
                        };
                        *commands_in += 1;
                        forward_event(
                            input_tx,
                            GameEvent::Command {
                                token: token.to_string(),
                            },
                        )
                        .await
                    }
                    Ok(ClientMessage::StartListening) => {
                        forward_event(input_tx, GameEvent::SetListening { listening: true }).await
                    }
                    Ok(ClientMessage::StopListening) => {
                        forward_event(input_tx, GameEvent::SetListening { listening: false }).await
                    }
                    Err(parse_err) => {
                        *invalid_json += 1;
                        if should_log(last_invalid_input_log) {
                            warn!(
                                bytes = text.len(),
                                error = %parse_err,
                                "failed to parse client message"
                            );
                        }

                        if *invalid_json > MAX_INVALID_JSON {
                            *close_frame = Some(CloseFrame {
                                code: close_code::POLICY,
                                reason: "too many invalid messages".into(),
                            });
                            return Ok(LoopControl::Disconnect);
                        }

                        Ok(LoopControl::Continue)
                    }
                }
            }
            Message::Binary(_) => {
                *close_frame = Some(CloseFrame {
                    code: close_code::UNSUPPORTED,
                    reason: "binary messages not supported".into(),
                });
                Ok(LoopControl::Disconnect)
            }
            Message::Ping(_) | Message::Pong(_) => Ok(LoopControl::Continue),
            Message::Close(_) => Ok(LoopControl::Disconnect),
        },
        Some(Err(e)) => {
            warn!(error = %e, "websocket recv error");
            Ok(LoopControl::Disconnect)
        }
        None => {
            info!("websocket closed");
            Ok(LoopControl::Disconnect)
        }
    }
}

async fn forward_world_bytes(
    world_msg: Utf8Bytes,
    socket: &mut WebSocket,
    msgs_out: &mut u64,
    bytes_out: &mut u64,
) -> LoopControl {
    let bytes_len = world_msg.len();
    match socket
        .send(Message::Text(world_msg))
        .await
        .map_err(NetError::Ws)
    {
        Ok(()) => {
            *msgs_out += 1;
            *bytes_out += bytes_len as u64;
            LoopControl::Continue
        }
        Err(err) => {
            // Log unexpected send failures; disconnect will follow immediately.
            warn!(error = ?err, "failed to send world update");
            LoopControl::Disconnect
        }
    }
}

async fn forward_session_state(
    session_state_rx: &mut Receiver<SessionState>,
    socket: &mut WebSocket,
    msgs_out: &mut u64,
    bytes_out: &mut u64,
) -> LoopControl {
    let st = *session_state_rx.borrow_and_update();
    let msg = ServerMessage::SessionState(st.into());
    match send_message(socket, &msg).await {
        Ok(bytes) => {
            *msgs_out += 1;
            *bytes_out += bytes as u64;
            LoopControl::Continue
        }
        Err(err) => {
            warn!(error = ?err, "failed to send session state");
            LoopControl::Disconnect
        }
    }
}
