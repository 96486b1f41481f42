use config::{Config as Cfg, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_port() -> u16 {
    8000
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Config {
    /// Reads `PORT` and `MAX_BODY_BYTES` from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::default())
    }

    fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        Cfg::builder()
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> (&'static str, u16) {
        ("0.0.0.0", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_environment(Environment::default().source(Some(map)))
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(from_vars(&[]).unwrap(), Config::default());
        assert_eq!(Config::default().bind_address(), ("0.0.0.0", 8000));
    }

    #[test]
    fn port_and_limit_from_environment() {
        let config = from_vars(&[("PORT", "9100"), ("MAX_BODY_BYTES", "1024"), ("HOME", "/root")])
            .unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        assert!(from_vars(&[("PORT", "eighty")]).is_err());
    }
}
