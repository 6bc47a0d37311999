//! Server lifecycle: load fixtures, bind, optionally pre-activate, serve.

use std::future::Future;
use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::domain::source::FixtureSource;
use crate::error::MockApiError;
use crate::presentation::render_catalog;
use crate::router::build_router;
use crate::state::AppState;
use crate::usecase::activate::ActivateFixtureOutput;

/// A mock API server with its catalog fully loaded and its socket bound.
///
/// `serve` consumes the value, so an instance can only be started once.
pub struct MockApi {
    state: AppState,
    listener: TcpListener,
}

impl MockApi {
    /// Load the whole catalog from `source`, then bind `addr`.
    /// The socket is not opened until loading has finished.
    pub async fn bind<S: FixtureSource>(source: &S, addr: &str) -> anyhow::Result<Self> {
        let catalog = source
            .load_all()
            .await
            .context("failed to load fixtures")?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        let port = listener.local_addr().context("failed to read bound address")?.port();

        info!(fixtures = catalog.len(), port, "fixtures loaded");
        Ok(Self {
            state: AppState::new(catalog, port),
            listener,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Activate `name` exactly as `GET /load-fixture?name=<name>` would, but
    /// report the outcome to the console.
    pub fn preactivate(&self, name: &str) -> Result<ActivateFixtureOutput, MockApiError> {
        let result = self.state.activate_usecase().execute(Some(name));
        match &result {
            Ok(output) => info!("{}", output.message),
            Err(err) => {
                let valid: Vec<&str> = self.state.catalog.names().collect();
                error!(valid = ?valid, "{err}");
            }
        }
        result
    }

    /// Printable startup banner: base URL plus every fixture's route table.
    pub fn banner(&self) -> String {
        format!(
            "Mock API started at http://localhost:{}\n{}",
            self.state.port,
            render_catalog(&self.state.catalog, self.state.port)
        )
    }

    /// Serve until Ctrl-C.
    pub async fn serve(self) -> anyhow::Result<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Serve until `signal` resolves.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(signal)
            .await
            .context("server error")
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
