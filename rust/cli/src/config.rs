use serde::{Deserialize, Serialize};
use std::fs;

use dudo_engine::game::{DEFAULT_WIN_SCORE, STARTING_HAND_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub hand_size: u8,
    pub win_score: u32,
    pub seed: Option<u64>,
    pub bots: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub hand_size: ValueSource,
    pub win_score: ValueSource,
    pub seed: ValueSource,
    pub bots: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            hand_size: ValueSource::Default,
            win_score: ValueSource::Default,
            seed: ValueSource::Default,
            bots: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hand_size: STARTING_HAND_SIZE,
            win_score: DEFAULT_WIN_SCORE,
            seed: None,
            bots: 1,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[allow(dead_code)]
pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves the configuration: defaults, then the TOML file named by
/// `DUDO_CONFIG`, then `DUDO_*` environment variables, tracking which
/// layer supplied each value.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("DUDO_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.hand_size {
            cfg.hand_size = v;
            sources.hand_size = ValueSource::File;
        }
        if let Some(v) = f.win_score {
            cfg.win_score = v;
            sources.win_score = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.bots {
            cfg.bots = v;
            sources.bots = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("DUDO_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(size) = std::env::var("DUDO_HAND_SIZE")
        && !size.is_empty()
    {
        cfg.hand_size = size
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid hand_size".into()))?;
        sources.hand_size = ValueSource::Env;
    }
    if let Ok(score) = std::env::var("DUDO_WIN_SCORE")
        && !score.is_empty()
    {
        cfg.win_score = score
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid win_score".into()))?;
        sources.win_score = ValueSource::Env;
    }
    if let Ok(bots) = std::env::var("DUDO_BOTS")
        && !bots.is_empty()
    {
        cfg.bots = bots
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bots".into()))?;
        sources.bots = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    hand_size: Option<u8>,
    #[serde(default)]
    win_score: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    bots: Option<u8>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.hand_size == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: hand_size must be >=1".into(),
        ));
    }
    if cfg.win_score == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: win_score must be >=1".into(),
        ));
    }
    if cfg.bots == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: bots must be >=1".into(),
        ));
    }
    Ok(())
}
