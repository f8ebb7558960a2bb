#[tokio::main]
async fn main() -> std::io::Result<()> {
    ochi_server::run_with_config().await
}
