//! Web server for anonboard.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::Database;

use super::handlers::{AppState, SharedDatabase};
use super::router::{create_health_router, create_router};

/// Web server for the API.
pub struct WebServer {
    /// Address to bind, as `host:port`.
    addr: String,
    /// Application state.
    app_state: Arc<AppState>,
    /// Allowed CORS origins.
    cors_origins: Vec<String>,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &ServerConfig, db: SharedDatabase) -> Self {
        Self {
            addr: format!("{}:{}", config.host, config.port),
            app_state: Arc::new(AppState::new(db)),
            cors_origins: config.cors_origins.clone(),
        }
    }

    /// Create a new web server from a raw Database.
    pub fn from_database(config: &ServerConfig, db: Database) -> Self {
        Self::new(config, Arc::new(db))
    }

    /// Address the server will bind.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Build the full application router.
    pub fn router(&self) -> Router {
        create_router(self.app_state.clone(), &self.cors_origins).merge(create_health_router())
    }

    /// Run the web server until it fails.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let router = self.router();
        let listener = TcpListener::bind(&self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }

    /// Run the server in the background and return the bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> Result<SocketAddr, std::io::Error> {
        let router = self.router();
        let listener = TcpListener::bind(&self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn create_test_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec![],
        }
    }

    #[tokio::test]
    async fn test_web_server_new() {
        let config = create_test_config();
        let db = Database::open_in_memory().await.unwrap();

        let server = WebServer::from_database(&config, db);
        assert_eq!(server.addr(), "127.0.0.1:0");
    }

    #[tokio::test]
    async fn test_web_server_run_with_addr() {
        let config = create_test_config();
        let db = Database::open_in_memory().await.unwrap();

        let server = WebServer::from_database(&config, db);
        let addr = server.run_with_addr().await.unwrap();
        assert_ne!(addr.port(), 0);

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.ends_with("OK"));
    }
}
