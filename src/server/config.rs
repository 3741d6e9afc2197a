use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Address the HTTP server binds to when `LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Credentials for the commander account created at startup when no commander exists.
#[derive(Clone, Debug)]
pub struct CommanderSeed {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub listen_addr: SocketAddr,
    pub commander: Option<CommanderSeed>,
    /// Add the starter mission catalogue at startup
    pub seed_missions: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// The commander seed is only configured when both `COMMANDER_EMAIL` and
    /// `COMMANDER_PASSWORD` are present; `COMMANDER_NAME` defaults to "Commander".
    /// `SEED_MISSIONS` defaults to enabled.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr =
            listen_addr
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "LISTEN_ADDR".to_string(),
                    reason: e.to_string(),
                })?;

        let commander = match (lookup("COMMANDER_EMAIL"), lookup("COMMANDER_PASSWORD")) {
            (Some(email), Some(password)) => Some(CommanderSeed {
                email,
                password,
                name: lookup("COMMANDER_NAME").unwrap_or_else(|| "Commander".to_string()),
            }),
            _ => None,
        };

        let seed_missions = match lookup("SEED_MISSIONS").as_deref() {
            None | Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            Some(other) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "SEED_MISSIONS".to_string(),
                    reason: format!("expected true or false, got {:?}", other),
                })
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            listen_addr,
            commander,
            seed_missions,
        })
    }
}
