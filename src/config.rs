use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::ConfigError;

pub const SEED_VAR: &str = "HUNGER_SEED";
pub const MAX_FPS_VAR: &str = "HUNGER_MAX_FPS";

const DEFAULT_MAX_FPS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed for agent placement; drawn from entropy when unset.
    pub seed: Option<u64>,
    pub max_fps: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            max_fps: DEFAULT_MAX_FPS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        if let Some(seed) = parse_var(&lookup, SEED_VAR)? {
            config.seed = Some(seed);
        }
        if let Some(max_fps) = parse_var(&lookup, MAX_FPS_VAR)? {
            if max_fps == 0 {
                return Err(ConfigError::NotPositive(MAX_FPS_VAR));
            }
            config.max_fps = max_fps;
        }
        Ok(config)
    }

    /// Returns the seed actually used alongside the generator so it can be logged.
    pub fn seeded_rng(&self) -> (u64, SmallRng) {
        let seed = self.seed.unwrap_or_else(rand::random);
        (seed, SmallRng::seed_from_u64(seed))
    }
}

fn parse_var(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<u64>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::NotANumber { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_fps, 60);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn reads_overrides() {
        let config =
            Config::from_lookup(lookup(&[(SEED_VAR, "1234"), (MAX_FPS_VAR, " 30 ")])).unwrap();
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.max_fps, 30);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            Config::from_lookup(lookup(&[(SEED_VAR, "abc")])),
            Err(ConfigError::NotANumber {
                key: SEED_VAR,
                value: "abc".into()
            })
        );
        assert_eq!(
            Config::from_lookup(lookup(&[(MAX_FPS_VAR, "0")])),
            Err(ConfigError::NotPositive(MAX_FPS_VAR))
        );
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let config = Config {
            seed: Some(99),
            ..Config::default()
        };
        let (seed_a, mut a) = config.seeded_rng();
        let (seed_b, mut b) = config.seeded_rng();
        assert_eq!(seed_a, 99);
        assert_eq!(seed_b, 99);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}
