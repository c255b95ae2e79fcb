use std::path::PathBuf;

use crate::errors::CustomError;

pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON network table; the built-in table is used when unset.
    pub networks_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, CustomError> {
        let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let port = port
            .parse()
            .map_err(|_| CustomError::InvalidConfig(format!("PORT is not a valid port: {port}")))?;

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            networks_file: std::env::var_os("NETWORKS_FILE")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        })
    }
}
