use cryptofpl_server::{app, collaborators, config::Config, fpl::FplClient, routes};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting api server...");

    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match FplClient::new(&config.fpl_api_url, config.fpl_timeout) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build FPL client: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Using FPL API at {}", client.base_url());

    // Built once here and handed to the host app by value
    let api = routes::api::router(&config.mount, collaborators(client));
    let app = app(api);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    let mount = if config.mount.is_empty() { "/" } else { config.mount.as_str() };
    tracing::info!("Server listening on {} (api mounted at {})", addr, mount);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
