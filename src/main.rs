use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use petlodge::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("petlodge=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to prepare database: {}", e);
            std::process::exit(1);
        }
    };

    let session = startup::session_layer(&config);

    let app = router::routes()
        .with_state(AppState { db })
        .layer(session);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting server at {}", config.server_url());

    if config.open_browser {
        let url = config.server_url();
        // Give the server a moment to start accepting connections first
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(1)).await;
            startup::open_browser(&url);
        });
    }

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
