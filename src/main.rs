//! Auto spares API server.
//!
//! ```bash
//! autoparts-api --port 3000 --database-url sqlite://autoparts.db?mode=rwc
//! ```
//!
//! Then visit:
//! - **API**: <http://localhost:3000/>
//! - **Documentation**: <http://localhost:3000/docs>
//!
//! Environment variables can also be used: `DATABASE_URL`, `APP_HOST`,
//! `APP_PORT`, and `RUST_LOG` for log filtering.

use autoparts_api::{config::Config, db, routes};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db = db::connect(&config.database_url).await?;
    let app = routes::build_router(db);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "auto spares API listening");
    axum::serve(listener, app).await?;
    Ok(())
}
