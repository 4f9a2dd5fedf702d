use parlor_engine::player::STARTING_CHIPS;
use parlor_engine::rules::{DealerStrategy, Rules};
use parlor_engine::scoring::ScoringScheme;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

pub const CONFIG_ENV: &str = "PARLOR_CONFIG";
pub const SEED_ENV: &str = "PARLOR_SEED";
pub const CHIPS_ENV: &str = "PARLOR_STARTING_CHIPS";
pub const SCORING_ENV: &str = "PARLOR_SCORING";
pub const DEALER_ENV: &str = "PARLOR_DEALER";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_chips: u32,
    pub seed: Option<u64>,
    pub scoring: ScoringScheme,
    pub dealer: DealerStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            seed: None,
            scoring: ScoringScheme::default(),
            dealer: DealerStrategy::default(),
        }
    }
}

impl Config {
    pub fn rules(&self) -> Rules {
        Rules {
            scoring: self.scoring,
            dealer: self.dealer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_chips: ValueSource,
    pub seed: ValueSource,
    pub scoring: ValueSource,
    pub dealer: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_chips: ValueSource::Default,
            seed: ValueSource::Default,
            scoring: ValueSource::Default,
            dealer: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Command-line values that take precedence over file and environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub starting_chips: Option<u32>,
    pub seed: Option<u64>,
    pub scoring: Option<ScoringScheme>,
    pub dealer: Option<DealerStrategy>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(Overrides::default())
}

/// default -> file (`PARLOR_CONFIG`) -> environment -> command line
pub fn resolve(overrides: Overrides) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env_value(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.scoring {
            cfg.scoring = v;
            sources.scoring = ValueSource::File;
        }
        if let Some(v) = f.dealer {
            cfg.dealer = v;
            sources.dealer = ValueSource::File;
        }
    }

    if let Some(seed) = env_value(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(chips) = env_value(CHIPS_ENV) {
        cfg.starting_chips = chips.parse().map_err(|_| {
            ConfigError::Invalid(format!("Invalid starting_chips '{}'", chips))
        })?;
        sources.starting_chips = ValueSource::Env;
    }
    if let Some(scoring) = env_value(SCORING_ENV) {
        cfg.scoring = scoring.parse().map_err(ConfigError::Invalid)?;
        sources.scoring = ValueSource::Env;
    }
    if let Some(dealer) = env_value(DEALER_ENV) {
        cfg.dealer = dealer.parse().map_err(ConfigError::Invalid)?;
        sources.dealer = ValueSource::Env;
    }

    if let Some(v) = overrides.starting_chips {
        cfg.starting_chips = v;
        sources.starting_chips = ValueSource::Cli;
    }
    if let Some(v) = overrides.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Cli;
    }
    if let Some(v) = overrides.scoring {
        cfg.scoring = v;
        sources.scoring = ValueSource::Cli;
    }
    if let Some(v) = overrides.dealer {
        cfg.dealer = v;
        sources.dealer = ValueSource::Cli;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_chips: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    scoring: Option<ScoringScheme>,
    #[serde(default)]
    dealer: Option<DealerStrategy>,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_chips == 0 {
        return Err(ConfigError::Invalid("starting_chips must be >0".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write as _;

    fn clear_env() {
        for key in [CONFIG_ENV, SEED_ENV, CHIPS_ENV, SCORING_ENV, DEALER_ENV] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_without_file_or_env() {
        clear_env();
        let r = load_with_sources().unwrap();
        assert_eq!(r.config, Config::default());
        assert_eq!(r.config.starting_chips, 100);
        assert_eq!(r.sources.scoring, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn precedence_cli_over_env_over_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "starting_chips = 250\nseed = 1\nscoring = \"standard\"\ndealer = \"stand-on-17\""
        )
        .unwrap();
        std::env::set_var(CONFIG_ENV, file.path());
        std::env::set_var(SEED_ENV, "2");

        let r = resolve(Overrides {
            starting_chips: Some(500),
            ..Overrides::default()
        })
        .unwrap();
        clear_env();

        assert_eq!(r.config.starting_chips, 500);
        assert_eq!(r.sources.starting_chips, ValueSource::Cli);
        assert_eq!(r.config.seed, Some(2));
        assert_eq!(r.sources.seed, ValueSource::Env);
        assert_eq!(r.config.scoring, ScoringScheme::Standard);
        assert_eq!(r.sources.scoring, ValueSource::File);
        assert_eq!(r.config.dealer, DealerStrategy::StandOn17);
    }

    #[test]
    #[serial]
    fn bad_env_values_are_rejected() {
        clear_env();
        std::env::set_var(SCORING_ENV, "vegas");
        let r = load_with_sources();
        clear_env();
        assert!(matches!(r, Err(ConfigError::Invalid(_))));

        std::env::set_var(CHIPS_ENV, "0");
        let r = load_with_sources();
        clear_env();
        assert!(matches!(r, Err(ConfigError::Invalid(ref m)) if m == "starting_chips must be >0"));
    }
}
