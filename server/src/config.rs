use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;
pub const SCHEMA_FILE: &str = "schema.graphqls";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub schema_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `PORT` picks the listening port; anything unset or unparsable falls
    /// back to [`DEFAULT_PORT`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring invalid PORT {:?}, using {}", value, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: "0.0.0.0".to_owned(),
            port,
            schema_path: PathBuf::from(SCHEMA_FILE),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
