use crate::error::{BadEnvVarSnafu, CampusResult, ParseEnvVarSnafu};
use dotenvy::var;
use snafu::ResultExt;
use sqlx::sqlite::SqliteConnectOptions;
use std::{path::PathBuf, sync::Arc};

const DEFAULT_DB_PATH: &str = "database.db";
const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
    server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> CampusResult<Self> {
        let server_ip = optional_env_var("CAMPUS_SERVER_IP")?
            .unwrap_or_else(|| DEFAULT_SERVER_IP.to_string());
        Ok(Self::from_parts(DbConfig::new()?, server_ip))
    }

    pub fn from_parts(db_config: DbConfig, server_ip: impl Into<String>) -> Self {
        Self {
            db_config: Arc::new(db_config),
            server_ip: server_ip.into(),
        }
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

#[derive(Debug)]
pub struct DbConfig {
    path: PathBuf,
    max_connections: u32,
}

impl DbConfig {
    pub fn new() -> CampusResult<Self> {
        let path = optional_env_var("CAMPUS_DB_PATH")?
            .map_or_else(|| PathBuf::from(DEFAULT_DB_PATH), PathBuf::from);
        let max_connections = match optional_env_var("CAMPUS_MAX_CONNECTIONS")? {
            Some(raw) => raw.parse().context(ParseEnvVarSnafu {
                name: "CAMPUS_MAX_CONNECTIONS",
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            max_connections,
            ..Self::at_path(path)
        })
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .foreign_keys(true)
    }
}

fn optional_env_var(name: &'static str) -> CampusResult<Option<String>> {
    match var(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(e) => Err(e).context(BadEnvVarSnafu { name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_uses_default_pool_size() {
        let config = DbConfig::at_path("/tmp/campus-test.db");
        assert_eq!(config.max_connections(), DEFAULT_MAX_CONNECTIONS);
        assert_eq!(
            config.connect_options().get_filename(),
            std::path::Path::new("/tmp/campus-test.db")
        );
    }

    #[test]
    fn runtime_configuration_from_parts() {
        let config =
            RuntimeConfiguration::from_parts(DbConfig::at_path("campus.db"), "0.0.0.0:3000");
        assert_eq!(config.server_ip(), "0.0.0.0:3000");
        assert_eq!(config.db_config().max_connections(), DEFAULT_MAX_CONNECTIONS);
    }
}
