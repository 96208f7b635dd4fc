use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub is_dev: bool,
    pub seed_file: Option<PathBuf>,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub run_migrations: bool,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("Missing env: DATABASE_URL")?;
        let run_migrations_str =
            lookup("RUN_MIGRATIONS").context("Missing env: RUN_MIGRATIONS")?;
        let port_str = lookup("PORT").context("Missing env: PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{other}'",
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let is_dev = match lookup("APP_ENV").as_deref() {
            None | Some("development") => true,
            Some("production") => false,
            Some(other) => {
                return Err(anyhow!(
                    "APP_ENV must be 'development' or 'production', got '{other}'",
                ));
            }
        };

        let seed_file = lookup("SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a valid u32 integer")?,
            None => 5,
        };

        let acquire_timeout_secs = match lookup("DB_ACQUIRE_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .context("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64 integer")?,
            None => 5,
        };

        Ok(Self {
            port,
            is_dev,
            seed_file,
            database: DatabaseConfig {
                url: database_url,
                run_migrations,
                max_connections,
                acquire_timeout_secs,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_required_values_and_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/rewards"),
            ("RUN_MIGRATIONS", "true"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert!(config.is_dev);
        assert!(config.seed_file.is_none());
        assert!(config.database.run_migrations);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.database.acquire_timeout_secs, 5);
    }

    #[test]
    fn reads_optional_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/rewards"),
            ("RUN_MIGRATIONS", "false"),
            ("PORT", "9000"),
            ("APP_ENV", "production"),
            ("SEED_FILE", "data/transactions.json"),
            ("DB_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();

        assert!(!config.is_dev);
        assert_eq!(
            config.seed_file,
            Some(PathBuf::from("data/transactions.json"))
        );
        assert_eq!(config.database.max_connections, 12);
    }

    #[test]
    fn rejects_bad_values() {
        let missing = Config::from_lookup(lookup_from(&[("PORT", "8080")]));
        assert!(missing.unwrap_err().to_string().contains("DATABASE_URL"));

        let bad_flag = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/rewards"),
            ("RUN_MIGRATIONS", "yes"),
            ("PORT", "8080"),
        ]));
        assert!(bad_flag.unwrap_err().to_string().contains("RUN_MIGRATIONS"));

        let bad_port = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/rewards"),
            ("RUN_MIGRATIONS", "false"),
            ("PORT", "eighty"),
        ]));
        assert!(bad_port.unwrap_err().to_string().contains("PORT"));
    }
}
