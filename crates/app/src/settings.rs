//! Handles settings for the application.
//!
//! Values are layered: built-in defaults, then the optional `settings.toml`
//! (or the file passed with `--config`), then `CAMPAIGNS__*` environment
//! variables, then the remaining command line flags.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";
pub const DEFAULT_SQLITE_PATH: &str = "data/campaigns.db";

#[derive(Debug, Deserialize)]
pub struct App {
    /// Log level applied to the workspace crates.
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

/// Where campaigns are stored.
///
/// In TOML either `database = "memory"` or `database = { sqlite = "path" }`.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub database: Database,
}

#[derive(Debug, Parser)]
#[command(name = "campaign_store", about = "HTTP store for marketing campaigns")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the bind address.
    #[arg(long)]
    bind: Option<String>,
    /// Override the listening port.
    #[arg(long)]
    port: Option<u16>,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let args = Args::parse();
        let settings = Self::build(
            args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH),
            environment(),
        )?;

        Ok(settings.with_args(args))
    }

    fn build(path: &str, environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("database.sqlite", DEFAULT_SQLITE_PATH)?
            .add_source(File::with_name(path).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    fn with_args(mut self, args: Args) -> Self {
        if let Some(bind) = args.bind {
            self.server.bind = bind;
        }
        if let Some(port) = args.port {
            self.server.port = port;
        }
        self
    }
}

/// `CAMPAIGNS__SERVER__PORT=9000` sets `server.port`.
fn environment() -> Environment {
    Environment::with_prefix("CAMPAIGNS")
        .separator("__")
        .try_parsing(true)
}
