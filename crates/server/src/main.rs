// crates/server/src/main.rs
//! Chatvault server binary.
//!
//! Resolves the storage root, binds the HTTP server, and serves until
//! interrupted. There is no startup indexing: every request re-scans the
//! transcript tree, so the server is ready as soon as the socket is bound.

use std::net::SocketAddr;
use std::time::Instant;

use anyhow::Result;
use chatvault_core::StorageConfig;
use chatvault_server::create_app;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Default port for the server.
const DEFAULT_PORT: u16 = 47911;

/// Get the server port from environment or use default.
fn get_port() -> u16 {
    std::env::var("CHATVAULT_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (quiet by default — startup UX uses eprintln)
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let startup_start = Instant::now();

    eprintln!("\n\u{1f4c2} chatvault v{}\n", env!("CARGO_PKG_VERSION"));

    let config = StorageConfig::from_env()?;
    let project_count = chatvault_core::list_projects(&config).await?.len();

    let app = create_app(config.clone());

    let port = get_port();
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    eprintln!(
        "  \u{2713} Ready in {:.0?} \u{2014} {} projects under {}",
        startup_start.elapsed(),
        project_count,
        config.root().display(),
    );
    eprintln!("  \u{2192} http://localhost:{}\n", port);

    axum::serve(listener, app).await?;

    Ok(())
}
