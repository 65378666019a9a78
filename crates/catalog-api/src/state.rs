//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the product store and the runtime configuration.

use catalog_core::ProductStore;
use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Port the service listens on. Not configurable.
pub const DEFAULT_PORT: u16 = 3000;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: DEFAULT_PORT,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            log_format: std::env::var("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            environment: "development".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Store handle shared across handlers
pub type SharedStore = Arc<RwLock<ProductStore>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Product store; handlers hold the lock for a whole request
    pub store: SharedStore,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state with an empty store
    pub fn new(config: AppConfig) -> Self {
        Self::with_store(config, ProductStore::new())
    }

    /// Create state around an existing store
    pub fn with_store(config: AppConfig, store: ProductStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
