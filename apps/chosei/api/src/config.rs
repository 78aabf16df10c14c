use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;
use strum::EnumString;

pub use core_config::Environment;

/// Which store backs the poll repositories (`POLL_STORE`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreKind {
    #[strum(serialize = "mongodb", serialize = "mongo")]
    MongoDb,
    /// In-process, lost on restart; for local development
    Memory,
}

#[derive(Clone, Debug)]
pub enum StoreConfig {
    MongoDb(MongoConfig),
    Memory,
}

impl FromEnv for StoreConfig {
    /// `POLL_STORE` defaults to `mongodb`; MongoDB settings are only read
    /// when that store is selected.
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("POLL_STORE", "mongodb");
        let kind: StoreKind = raw.trim().parse().map_err(|_| ConfigError::ParseError {
            key: "POLL_STORE".to_string(),
            details: format!("expected 'mongodb' or 'memory', got '{raw}'"),
        })?;

        Ok(match kind {
            StoreKind::MongoDb => StoreConfig::MongoDb(MongoConfig::from_env()?),
            StoreKind::Memory => StoreConfig::Memory,
        })
    }
}

/// Application configuration composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub store: StoreConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let store = StoreConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            store,
            server,
            environment,
        })
    }
}
