//! HTTP API for presentation documents.

pub mod error;
pub mod handlers;
pub mod health;
pub mod router;
pub mod shutdown;

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::server::handlers::AppState;
use crate::server::router::build_router;
use crate::server::shutdown::ShutdownManager;
use crate::store::PresentationStore;

pub use error::ApiError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid bind address '{addr}': {reason}")]
    InvalidAddress { addr: String, reason: String },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("bind() must be called before run()")]
    NotBound,

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub struct ApiServer {
    pub addr: SocketAddr,
    /// Bound listener, populated by bind() and consumed by run().
    listener: Option<TcpListener>,
    state: AppState,
    shutdown: Arc<ShutdownManager>,
}

impl ApiServer {
    pub fn new(store: Arc<dyn PresentationStore>) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            listener: None,
            state: AppState::new(store),
            shutdown: Arc::new(ShutdownManager::new()),
        }
    }

    /// Bind to `bind_addr`. Port 0 picks a free port; the actual address is
    /// returned and kept in `self.addr`.
    pub async fn bind(&mut self, bind_addr: &str) -> Result<SocketAddr, ServerError> {
        let requested: SocketAddr =
            bind_addr
                .parse()
                .map_err(|e: std::net::AddrParseError| ServerError::InvalidAddress {
                    addr: bind_addr.to_string(),
                    reason: e.to_string(),
                })?;
        let listener = TcpListener::bind(requested)
            .await
            .map_err(|source| ServerError::Bind {
                addr: requested,
                source,
            })?;
        self.addr = listener.local_addr()?;
        self.listener = Some(listener);
        tracing::info!("API server bound to {}", self.addr);
        Ok(self.addr)
    }

    pub fn handle(&self) -> ApiHandle {
        ApiHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serve until shutdown is signalled.
    ///
    /// Consumes self to take ownership of the bound listener.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = self.listener.ok_or(ServerError::NotBound)?;

        tracing::info!("Serving presentations on http://{}", self.addr);

        let app = build_router(self.state.clone());
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                if let Err(err) = shutdown.wait_for_shutdown().await {
                    tracing::warn!("Signal handler failed: {}", err);
                }
            })
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ApiHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ApiHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
