use serde::Deserialize;

/// Configuration options for the advertisements service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Path to the SQLite database file.
    pub database_url: String,
    /// Public origin under which stored media paths are served.
    pub media_base_url: String,
}
