use std::env;

use crate::blockchain::DEFAULT_DIFFICULTY;

/// Process settings read from the environment (and `.env`, loaded by `main`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub difficulty: u32,
    /// Address credited when mining is triggered without one (`GET /api/mine`).
    pub miner_address: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            difficulty: DEFAULT_DIFFICULTY,
            miner_address: "ServerMiner".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; missing or unparseable values keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            difficulty: lookup("DIFFICULTY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.difficulty),
            miner_address: lookup("MINER_ADDRESS")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.miner_address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::collections::HashMap;

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = Config::from_lookup(|_| None);
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.difficulty, 2);
        assert_eq!(cfg.miner_address, "ServerMiner");
    }

    #[test]
    fn overrides_and_bad_values() {
        let vars: HashMap<&str, &str> = [
            ("HOST", "0.0.0.0"),
            ("PORT", "not-a-port"),
            ("DIFFICULTY", "4"),
            ("MINER_ADDRESS", "alice"),
        ]
        .into_iter()
        .collect();
        let cfg = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.difficulty, 4);
        assert_eq!(cfg.miner_address, "alice");
    }
}
