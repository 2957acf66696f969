use tokio::net::TcpListener;

/// Standalone echo server for trying builder chains by hand:
/// `PORT=3000 cargo run -p mock-server`.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("echo server on http://{addr} (try /status/404)");
    mock_server::run(listener).await
}
