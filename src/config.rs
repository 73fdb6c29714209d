use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub views_dir: String,
    pub public_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Any endpoint the `any` engine understands: `mem://`, `surrealkv://path`, `ws://host:port`.
    pub url: String,
    pub namespace: String,
    pub database: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Config {
            server: ServerConfig {
                host: var("HOST", "0.0.0.0"),
                port: var("PORT", "3000").parse().unwrap_or(3000),
            },

            database: DatabaseConfig {
                url: var("DATABASE_URL", "surrealkv://testapp1.db"),
                namespace: var("DATABASE_NAMESPACE", "testapp"),
                database: var("DATABASE_NAME", "testapp1"),
            },

            views_dir: var("VIEWS_DIR", "views"),
            public_dir: var("PUBLIC_DIR", "public"),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
impl DatabaseConfig {
    pub fn in_memory() -> Self {
        Self {
            url: "mem://".to_string(),
            namespace: "testapp".to_string(),
            database: "testapp1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.server.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.database.url, "surrealkv://testapp1.db");
        assert_eq!(config.database.namespace, "testapp");
        assert_eq!(config.database.database, "testapp1");
        assert_eq!(config.views_dir, "views");
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URL", "ws://127.0.0.1:8000"),
            ("VIEWS_DIR", "/srv/views"),
        ]);
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.database.url, "ws://127.0.0.1:8000");
        assert_eq!(config.views_dir, "/srv/views");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = config_from(&[("PORT", "not-a-port")]);
        assert_eq!(config.server.port, 3000);
    }
}
