use axum::Router;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::server::routes::build_router;
use crate::storage::Storage;

pub struct Server {
    listener: TcpListener,
    router: Router,
    local_addr: SocketAddr,
}

impl Server {
    /// Opens (creating if needed) the storage root and binds the listener.
    pub async fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let storage = Arc::new(Storage::open(
            config.storage_root_path(),
            config.max_tree_depth,
        )?);

        let socket = config.socket_address();
        let listener = match TcpListener::bind(&socket).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to {}: {}", socket, e);
                return Err(ServerError::Bind(socket, e));
            }
        };
        let local_addr = listener.local_addr()?;
        info!("Server bound to {}", local_addr);

        Ok(Self {
            listener,
            router: build_router(storage),
            local_addr,
        })
    }

    /// Address the listener actually bound to (useful with port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serves requests until Ctrl-C or SIGTERM.
    pub async fn start(self) -> Result<(), ServerError> {
        info!("Starting file tree server on {}", self.local_addr);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received termination signal, shutting down");
}
