use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::dog::MongoDogStore;

use crate::routes::{self, ServerState};

fn init_logging() {
    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => init_logging_json(),
        _ => init_logging_default(),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load configuration from config.toml, or fall back to env vars with
/// sensible defaults when no file is present.
fn load_config() -> anyhow::Result<configs::AppConfig> {
    let mut cfg = match configs::load_default() {
        Ok(cfg) => cfg,
        Err(_) => {
            let mut cfg = configs::AppConfig::default();
            if let Ok(host) = env::var("SERVER_HOST") {
                cfg.server.host = host;
            }
            if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
                cfg.server.port = port;
            }
            if let Ok(url) = env::var("MONGODB_URL") {
                cfg.database.url = url;
            }
            if let Ok(name) = env::var("MONGODB_DATABASE") {
                cfg.database.database = name;
            }
            cfg
        }
    };
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config()?;

    // One store handle for the process lifetime, injected into every request.
    let db = models::db::connect(&cfg.database.url, &cfg.database.database).await?;
    info!(database = %cfg.database.database, "connected to MongoDB");
    let state = ServerState { dogs: Arc::new(MongoDogStore::new(&db)) };

    let app: Router = routes::build_router(build_cors(), state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting adopdog server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
