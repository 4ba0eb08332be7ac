#![forbid(unsafe_code)]

mod error;
mod generator;
mod simulator;
mod summarizer;

pub use error::Error;
pub use generator::Generator;
pub use simulator::Simulator;
pub use summarizer::Summarizer;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of environment variables that override file settings, e.g.
/// `OMNISIGHT_SIMULATOR__LOG_PERIOD=1000`.
pub const ENV_PREFIX: &str = "OMNISIGHT_";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulator: Simulator,
    pub generator: Generator,
    pub summarizer: Summarizer,
}

impl Config {
    /// Built-in defaults, no file and no environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer defaults, the TOML file at `path` and `OMNISIGHT_*` variables.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document layered over the defaults.
    pub fn from_toml_str(document: &str) -> Result<Self, Error> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(document))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.simulator.validate()?;
        self.generator.validate()?;
        self.summarizer.validate()
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, Error> {
        Ok(toml_edit::ser::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[simulator]\nlog_period = 1000\n\n[generator]\nseed = 7").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.simulator.log_period, Duration::from_millis(1000));
        assert_eq!(config.simulator.metrics_period, Duration::from_millis(5000));
        assert_eq!(config.generator.seed, Some(7));
        assert_eq!(config.generator.backlog_size, 50);
    }

    #[test]
    fn missing_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::InvalidPath(_)));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = Config::from_toml_str("[simulator]\nlog_capacity = 0").unwrap_err();
        assert!(matches!(
            err,
            Error::Invalid {
                field: "simulator.log_capacity",
                ..
            }
        ));
    }

    #[test]
    fn toml_output_parses_back() {
        let mut config = Config::new();
        config.generator.seed = Some(42);
        config.simulator.live_source = "edge-proxy".into();

        let rendered = config.to_toml_string().unwrap();
        let parsed = Config::from_toml_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
