use std::fmt;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// RuntimeMode selects how the catalog binary receives HTTP requests
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RuntimeMode {
    Server,
    Lambda,
}

impl FromStr for RuntimeMode {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "server" => Ok(RuntimeMode::Server),
            "lambda" => Ok(RuntimeMode::Lambda),
            other => Err(LibraryError::validation(
                format!("unsupported runtime {}", other).as_str(), Some(ENV_RUNTIME.to_string()))),
        }
    }
}

impl Display for RuntimeMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RuntimeMode::Server => write!(f, "server"),
            RuntimeMode::Lambda => write!(f, "lambda"),
        }
    }
}

// IdStrategy selects how the store assigns ids to new books
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum IdStrategy {
    Sequence,
    Uuid,
}

impl FromStr for IdStrategy {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequence" => Ok(IdStrategy::Sequence),
            "uuid" => Ok(IdStrategy::Uuid),
            other => Err(LibraryError::validation(
                format!("unsupported id strategy {}", other).as_str(), Some(ENV_ID_STRATEGY.to_string()))),
        }
    }
}

impl Display for IdStrategy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            IdStrategy::Sequence => write!(f, "sequence"),
            IdStrategy::Uuid => write!(f, "uuid"),
        }
    }
}

pub const ENV_BRANCH: &str = "CATALOG_BRANCH";
pub const ENV_RUNTIME: &str = "CATALOG_RUNTIME";
pub const ENV_LISTEN_ADDR: &str = "CATALOG_LISTEN_ADDR";
pub const ENV_ID_STRATEGY: &str = "CATALOG_ID_STRATEGY";
pub const ENV_SEED: &str = "CATALOG_SEED";
pub const ENV_LOG_LEVEL: &str = "CATALOG_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "CATALOG_LOG_JSON";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub runtime: RuntimeMode,
    pub listen_addr: SocketAddr,
    pub id_strategy: IdStrategy,
    pub seed_catalog: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            runtime: RuntimeMode::Server,
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            id_strategy: IdStrategy::Sequence,
            seed_catalog: true,
            log_level: "info".to_string(),
            log_json: true,
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // builds configuration from any key lookup, unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let branch = lookup(ENV_BRANCH).unwrap_or_else(|| "dev".to_string());
        let mut config = Configuration::new(branch.as_str());
        if let Some(runtime) = lookup(ENV_RUNTIME) {
            config.runtime = runtime.parse()?;
        }
        let addr = lookup(ENV_LISTEN_ADDR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        config.listen_addr = addr.trim().parse().map_err(|err| LibraryError::validation(
            format!("invalid listen address {} {}", addr, err).as_str(), Some(ENV_LISTEN_ADDR.to_string())))?;
        if let Some(strategy) = lookup(ENV_ID_STRATEGY) {
            config.id_strategy = strategy.parse()?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            config.seed_catalog = parse_flag(ENV_SEED, seed.as_str())?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            let level = level.trim().to_ascii_lowercase();
            if tracing::Level::from_str(level.as_str()).is_err() {
                return Err(LibraryError::validation(
                    format!("invalid log level {}", level).as_str(), Some(ENV_LOG_LEVEL.to_string())));
            }
            config.log_level = level;
        }
        if let Some(json) = lookup(ENV_LOG_JSON) {
            config.log_json = parse_flag(ENV_LOG_JSON, json.as_str())?;
        }
        Ok(config)
    }

    pub fn max_log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

fn parse_flag(key: &str, value: &str) -> LibraryResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(LibraryError::validation(
            format!("invalid flag {} for {}", other, key).as_str(), Some(key.to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::domain::{Configuration, IdStrategy, RuntimeMode};
    use crate::core::library::LibraryError;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(RuntimeMode::Server, config.runtime);
        assert_eq!(IdStrategy::Sequence, config.id_strategy);
        assert_eq!("127.0.0.1:3000", config.listen_addr.to_string());
        assert!(config.seed_catalog);
        assert!(config.log_json);
    }

    #[tokio::test]
    async fn test_should_use_defaults_for_empty_lookup() {
        let config = Configuration::from_lookup(|_| None).expect("should build config");
        assert_eq!(Configuration::new("dev"), config);
    }

    #[tokio::test]
    async fn test_should_read_all_settings() {
        let config = Configuration::from_lookup(lookup_from(&[
            ("CATALOG_BRANCH", "prod"),
            ("CATALOG_RUNTIME", "Lambda"),
            ("CATALOG_LISTEN_ADDR", "0.0.0.0:8080"),
            ("CATALOG_ID_STRATEGY", "uuid"),
            ("CATALOG_SEED", "false"),
            ("CATALOG_LOG_LEVEL", "DEBUG"),
            ("CATALOG_LOG_JSON", "0"),
        ])).expect("should build config");
        assert_eq!("prod", config.branch_id.as_str());
        assert_eq!(RuntimeMode::Lambda, config.runtime);
        assert_eq!("0.0.0.0:8080", config.listen_addr.to_string());
        assert_eq!(IdStrategy::Uuid, config.id_strategy);
        assert!(!config.seed_catalog);
        assert_eq!(tracing::Level::DEBUG, config.max_log_level());
        assert!(!config.log_json);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_settings() {
        let cases = [
            ("CATALOG_RUNTIME", "kubernetes"),
            ("CATALOG_LISTEN_ADDR", "not-an-addr"),
            ("CATALOG_ID_STRATEGY", "timestamp"),
            ("CATALOG_SEED", "maybe"),
            ("CATALOG_LOG_LEVEL", "loud"),
            ("CATALOG_LOG_JSON", "2"),
        ];
        for (key, value) in cases {
            let err = Configuration::from_lookup(lookup_from(&[(key, value)]))
                .expect_err("should reject setting");
            match err {
                LibraryError::Validation { reason_code, .. } => assert_eq!(Some(key.to_string()), reason_code),
                other => panic!("unexpected error {:?}", other),
            }
        }
    }
}
