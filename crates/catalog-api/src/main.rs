//! # Product Catalog RS
//!
//! In-memory product CRUD service.
//!
//! ## Usage
//!
//! ```bash
//! # Optional settings
//! export HOST=127.0.0.1
//! export LOG_FORMAT=json
//! export RUST_LOG=catalog_api=debug,tower_http=debug
//!
//! # Run the server (always on port 3000)
//! product-catalog
//! ```

use catalog_api::{routes, AppConfig, AppState, LogFormat};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize application state
    let state = AppState::new(AppConfig::from_env());

    init_logging(state.config.log_format);

    print_banner();

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);

    // Create router
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server running at http://localhost:{}", addr.port());

    if !is_prod {
        info!("📦 Products: GET/POST http://{}/products", addr);
        info!("🔎 Product:  GET/PUT/DELETE http://{}/products/{{id}}", addr);
    }

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let (pretty, json) = match format {
        LogFormat::Pretty => (Some(fmt::layer()), None),
        LogFormat::Json => (None, Some(fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(pretty)
        .with(json)
        .with(filter)
        .init();
}

fn print_banner() {
    println!(
        r#"
  📦 Product Catalog RS 📦
  ━━━━━━━━━━━━━━━━━━━━━━━━
  In-memory product API
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
