use std::{net::SocketAddr, path::PathBuf, time::Duration};

use color_eyre::eyre::WrapErr;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATS_CACHE_TTL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub seed_path: Option<PathBuf>,
    pub stats_cache_ttl: Duration,
}

impl Config {
    /// Reads `BIND_ADDR`, `SEED_PATH` and `STATS_CACHE_TTL_SECS`. Call
    /// `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> color_eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> color_eyre::Result<Self> {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .wrap_err("invalid BIND_ADDR")?;

        let seed_path = lookup("SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let stats_cache_ttl = lookup("STATS_CACHE_TTL_SECS")
            .map(|x| x.parse::<u64>())
            .transpose()
            .wrap_err("invalid STATS_CACHE_TTL_SECS")?
            .unwrap_or(DEFAULT_STATS_CACHE_TTL_SECS);

        Ok(Self {
            bind_addr,
            seed_path,
            stats_cache_ttl: Duration::from_secs(stats_cache_ttl),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            seed_path: None,
            stats_cache_ttl: Duration::from_secs(DEFAULT_STATS_CACHE_TTL_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, Config::default().bind_addr);
        assert!(config.seed_path.is_none());
        assert_eq!(config.stats_cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("SEED_PATH", "seed.json"),
            ("STATS_CACHE_TTL_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.seed_path, Some(PathBuf::from("seed.json")));
        assert_eq!(config.stats_cache_ttl, Duration::from_secs(5));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("BIND_ADDR", "nowhere")])).is_err());
        assert!(Config::from_lookup(lookup(&[("STATS_CACHE_TTL_SECS", "soon")])).is_err());
    }
}
