use crate::interface_adapters::http::{get_actor, get_course, post_command, post_listening};
use crate::interface_adapters::net::ws_handler;
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .route("/actor", get(get_actor))
        .route("/course", get(get_course))
        .route("/commands", post(post_command))
        .route("/listening", post(post_listening))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tuning::{ActorTuning, CommandMap};
    use crate::domain::{Course, Platform, SpawnPose, World};
    use crate::use_cases::{SessionHandle, SessionSettings};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;

    fn build_test_state(start_listening: bool) -> Arc<AppState> {
        build_test_state_with_world(start_listening, World::default())
    }

    fn build_test_state_with_world(start_listening: bool, world: World) -> Arc<AppState> {
        let session = SessionHandle::spawn(
            &SessionSettings {
                input_channel_capacity: 16,
                world_broadcast_capacity: 16,
                tick_interval: Duration::from_millis(50),
                start_listening,
            },
            world,
        );
        Arc::new(AppState { session })
    }

    fn post_json(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .expect("expected request to build")
    }

    fn get_actor_request() -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri("/actor")
            .body(Body::empty())
            .expect("expected request to build")
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        serde_json::from_slice(&body).expect("expected json body")
    }

    #[tokio::test(start_paused = true)]
    async fn when_actor_is_requested_then_returns_latest_pose_with_zone() {
        let state = build_test_state(false);

        let response = app(state.clone()).oneshot(get_actor_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["actor"]["x"], 0.0);
        assert_eq!(payload["actor"]["rotation"], 0.0);
        assert_eq!(payload["actor"]["zone"], "transfagarasan");
        state.session.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn when_course_is_requested_then_returns_configured_table_and_hitbox() {
        let course = Course {
            ground_y: 400.0,
            platforms: vec![
                Platform::new(0.0, 300.0, 200.0, 10.0),
                Platform::new(250.0, 250.0, 60.0, 10.0),
            ],
        };
        let world = World::new(
            course,
            ActorTuning::default(),
            CommandMap::default(),
            SpawnPose::default(),
        )
        .expect("expected valid world");
        let state = build_test_state_with_world(false, world);

        let request = Request::builder()
            .method("GET")
            .uri("/course")
            .body(Body::empty())
            .expect("expected request to build");

        let response = app(state.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["ground_y"], 400.0);
        assert_eq!(payload["platforms"].as_array().map(Vec::len), Some(2));
        assert_eq!(payload["platforms"][1]["x"], 250.0);
        assert_eq!(payload["hitbox"]["width"], 50.0);
        assert_eq!(payload["hitbox"]["height"], 50.0);
        state.session.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn when_command_is_posted_while_listening_then_returns_202_and_actor_moves() {
        let state = build_test_state(true);

        let response = app(state.clone())
            .oneshot(post_json("/commands", r#"{"word":"dash"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(json_body(response).await["listening"], true);

        tokio::time::sleep(Duration::from_millis(120)).await;

        let response = app(state.clone()).oneshot(get_actor_request()).await.unwrap();
        let payload = json_body(response).await;
        assert_eq!(payload["actor"]["x"], 100.0);
        state.session.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn when_listening_is_disabled_then_posted_commands_are_accepted_but_ignored() {
        let state = build_test_state(true);

        let response = app(state.clone())
            .oneshot(post_json("/listening", r#"{"listening":false}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        // Let the world task apply the toggle.
        tokio::time::sleep(Duration::from_millis(1)).await;

        let response = app(state.clone())
            .oneshot(post_json("/commands", r#"{"word":"right"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(json_body(response).await["listening"], false);

        tokio::time::sleep(Duration::from_millis(120)).await;

        let final_state = state.session.stop().await.expect("expected final state");
        assert_eq!(final_state.x, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn when_posted_word_has_padding_then_it_is_trimmed_before_lookup() {
        let state = build_test_state(true);

        let response = app(state.clone())
            .oneshot(post_json("/commands", r#"{"word":" right\n"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        tokio::time::sleep(Duration::from_millis(120)).await;

        let final_state = state.session.stop().await.expect("expected final state");
        assert_eq!(final_state.x, 50.0);
    }

    #[tokio::test(start_paused = true)]
    async fn when_command_word_is_blank_then_returns_400_and_error_message() {
        let state = build_test_state(true);

        let response = app(state.clone())
            .oneshot(post_json("/commands", r#"{"word":"   "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = json_body(response).await;
        assert_eq!(payload["error"], "word must be a short non-empty token");
        state.session.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn when_listening_payload_is_missing_field_then_returns_422() {
        let state = build_test_state(true);

        let response = app(state.clone())
            .oneshot(post_json("/listening", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        state.session.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn when_world_task_is_stopped_then_returns_503_and_error_message() {
        let state = build_test_state(true);
        state.session.stop().await;

        let response = app(state.clone())
            .oneshot(post_json("/commands", r#"{"word":"up"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let payload = json_body(response).await;
        assert_eq!(payload["error"], "world task is not running");

        let response = app(state).oneshot(get_actor_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test(start_paused = true)]
    async fn when_commands_route_is_called_with_get_then_returns_405() {
        let state = build_test_state(true);

        let request = Request::builder()
            .method("GET")
            .uri("/commands")
            .body(Body::empty())
            .expect("expected request to build");

        let response = app(state.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        state.session.stop().await;
    }
}
