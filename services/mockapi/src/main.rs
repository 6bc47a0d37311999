//! Mock API server: serves canned JSON from a fixtures directory.
//!
//! # Usage
//!
//! ```bash
//! # Serve ./fixtures on port 3000
//! cargo run -p mockapi
//!
//! # Serve another root and start with a fixture already active
//! cargo run -p mockapi -- --fixtures-dir ./mocks --port 4000 --fixture happy-path
//! ```
//!
//! Switch fixtures at runtime with `GET /load-fixture?name=<fixture-name>`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use mockapi::config::MockApiConfig;
use mockapi::infra::loader::FsFixtureSource;
use mockapi::server::MockApi;
use mockapi_core::tracing::{LogFormat, init_tracing};

#[derive(Parser)]
#[command(about = "Serve canned JSON responses from a fixtures directory")]
struct Args {
    /// Port to listen on (overrides MOCKAPI_PORT, default 3000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Interface to bind (overrides MOCKAPI_HOST, default 0.0.0.0)
    #[arg(long)]
    host: Option<String>,

    /// Fixtures root directory (overrides MOCKAPI_FIXTURES_DIR, default ./fixtures)
    #[arg(long)]
    fixtures_dir: Option<PathBuf>,

    /// Fixture to activate at startup (overrides MOCKAPI_FIXTURE)
    #[arg(long)]
    fixture: Option<String>,

    /// Log output format: pretty or json (overrides MOCKAPI_LOG_FORMAT)
    #[arg(long)]
    log_format: Option<LogFormat>,
}

impl Args {
    fn apply(self, mut config: MockApiConfig) -> MockApiConfig {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(dir) = self.fixtures_dir {
            config.fixtures_dir = dir;
        }
        if self.fixture.is_some() {
            config.fixture = self.fixture;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Args::parse().apply(MockApiConfig::from_env());
    init_tracing(config.log_format);

    let source = FsFixtureSource::new(config.fixtures_dir.clone());
    let server = MockApi::bind(&source, &config.bind_addr()).await?;

    if let Some(name) = config.fixture.as_deref() {
        // Failure is already logged; startup continues with no active fixture.
        server.preactivate(name).ok();
    }

    println!("{}", server.banner());
    server.serve().await
}
