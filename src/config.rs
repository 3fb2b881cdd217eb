use clap::Parser;

/// Runtime configuration, parsed from CLI arguments and environment.
///
/// The database handle built from `database_url` is injected into the router
/// as axum state; nothing here is process-global.
#[derive(Parser, Debug, Clone)]
#[command(name = "autoparts-api", version, about = "Inventory and sales API for an auto-spare-parts shop")]
pub struct Config {
    /// Database connection URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://autoparts.db?mode=rwc")]
    pub database_url: String,

    /// Host to bind the HTTP listener to
    #[arg(long, env = "APP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP listener to
    #[arg(long, env = "APP_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl Config {
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
