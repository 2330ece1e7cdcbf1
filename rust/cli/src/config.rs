use cardtable_engine::betting::TurnRotation;
use cardtable_engine::dealer::{MAX_PLAYERS, MIN_PLAYERS};
use cardtable_engine::table::GameSettings;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "CARDTABLE_CONFIG";
pub const SEED_ENV: &str = "CARDTABLE_SEED";
pub const PLAYERS_ENV: &str = "CARDTABLE_PLAYERS";
pub const INITIAL_CHIPS_ENV: &str = "CARDTABLE_INITIAL_CHIPS";
pub const TURN_ROTATION_ENV: &str = "CARDTABLE_TURN_ROTATION";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub players: usize,
    pub initial_chips: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub turn_rotation: TurnRotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub players: ValueSource,
    pub initial_chips: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub turn_rotation: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            players: ValueSource::Default,
            initial_chips: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            turn_rotation: ValueSource::Default,
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
        let settings = GameSettings::default();
        Self {
            seed: None,
            players: MAX_PLAYERS,
            initial_chips: settings.initial_chips,
            small_blind: settings.small_blind,
            big_blind: settings.big_blind,
            turn_rotation: TurnRotation::default(),
        }
    }
}

impl Config {
    /// Table settings for games created from this configuration.
    pub fn game_settings(&self) -> GameSettings {
        GameSettings {
            initial_chips: self.initial_chips,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            ..GameSettings::default()
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
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolves defaults, then the file named by `CARDTABLE_CONFIG`, then the
/// `CARDTABLE_*` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// [`load_with_sources`] against an arbitrary variable lookup.
pub fn load_from<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(path) = var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.initial_chips {
            cfg.initial_chips = v;
            sources.initial_chips = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.turn_rotation {
            cfg.turn_rotation = v;
            sources.turn_rotation = ValueSource::File;
        }
    }

    if let Some(seed) = var(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(players) = var(PLAYERS_ENV) {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid players '{}'", players)))?;
        sources.players = ValueSource::Env;
    }
    if let Some(chips) = var(INITIAL_CHIPS_ENV) {
        cfg.initial_chips = chips
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid initial_chips '{}'", chips)))?;
        sources.initial_chips = ValueSource::Env;
    }
    if let Some(rotation) = var(TURN_ROTATION_ENV) {
        cfg.turn_rotation = rotation.parse().map_err(ConfigError::Invalid)?;
        sources.turn_rotation = ValueSource::Env;
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
    seed: Option<u64>,
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    initial_chips: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    turn_rotation: Option<TurnRotation>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be {}-{}",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }
    cfg.game_settings()
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))
}
