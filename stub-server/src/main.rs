use hastebin_stub::StubConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "7777".to_string());
    let config = StubConfig {
        token: std::env::var("HASTEBIN_TOKEN").ok().filter(|t| !t.is_empty()),
        ..StubConfig::default()
    };

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, auth = config.token.is_some(), "hastebin stub listening");
    hastebin_stub::run(listener, config).await
}
