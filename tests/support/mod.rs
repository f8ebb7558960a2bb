// Boots one shared server per test binary and hands out its base URL.
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

use ochi_server::GameConfig;
use ochi_server::domain::Platform;
use ochi_server::frameworks::config::CourseConfig;

static SERVER_URL: OnceLock<String> = OnceLock::new();
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Non-default table so clients can tell the configured course from the built-in one.
pub fn test_course() -> CourseConfig {
    CourseConfig {
        ground_y: 400.0,
        platforms: vec![
            Platform::new(0.0, 300.0, 200.0, 10.0),
            Platform::new(250.0, 250.0, 60.0, 10.0),
        ],
    }
}

// Ensure the test server is running and return the shared base URL.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // The server gets its own OS thread and runtime so it outlives
        // individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                // Ephemeral port to avoid collisions with local services.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{}", addr));

                let config = GameConfig {
                    start_listening: true,
                    course: test_course(),
                    ..GameConfig::default()
                };
                ochi_server::run(listener, config)
                    .await
                    .expect("server failed");
            });
        });
        wait_for_server_url_and_readiness(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// WebSocket URL for the shared server.
#[allow(dead_code)]
pub fn ws_url() -> String {
    let base_url = ensure_server();
    format!("{}/ws", base_url.replacen("http://", "ws://", 1))
}

fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // Retry for a short period to avoid racing server bind/accept.
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}
