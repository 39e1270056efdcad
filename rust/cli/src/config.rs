//! Layered configuration: built-in defaults, then a TOML file named by
//! `POKERSQUARES_CONFIG`, then `POKERSQUARES_*` environment variables.
//! Command-line flags are applied on top by each command.

use pokersquares_ai::PLAYER_NAMES;
use pokersquares_ai::expectimax::DEFAULT_DEPTH_LIMIT;
use pokersquares_engine::hand::PokerHand;
use pokersquares_engine::player::GAME_MILLIS;
use pokersquares_engine::points::PointSystem;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::fs;

/// Deepest search accepted from configuration. Each extra level multiplies
/// the work per card by roughly (empty cells × undealt cards).
pub const MAX_DEPTH: u32 = 3;

pub const SYSTEM_NAMES: [&str; 3] = ["american", "british", "random"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub depth_limit: u32,
    pub point_system: String,
    pub point_table: Option<Vec<i32>>,
    pub seed: Option<u64>,
    pub player: String,
    pub game_millis: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub depth_limit: ValueSource,
    pub point_system: ValueSource,
    pub point_table: ValueSource,
    pub seed: ValueSource,
    pub player: ValueSource,
    pub game_millis: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            depth_limit: ValueSource::Default,
            point_system: ValueSource::Default,
            point_table: ValueSource::Default,
            seed: ValueSource::Default,
            player: ValueSource::Default,
            game_millis: ValueSource::Default,
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
            depth_limit: DEFAULT_DEPTH_LIMIT,
            point_system: "british".into(),
            point_table: None,
            seed: None,
            player: "expectimax".into(),
            game_millis: GAME_MILLIS,
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
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth_limit > MAX_DEPTH {
            return Err(ConfigError::Invalid(format!(
                "Invalid configuration: depth_limit must be <= {}",
                MAX_DEPTH
            )));
        }
        if self.game_millis == 0 {
            return Err(ConfigError::Invalid(
                "Invalid configuration: game_millis must be >0".into(),
            ));
        }
        let player = self.player.to_ascii_lowercase();
        if !PLAYER_NAMES.contains(&player.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid configuration: unknown player '{}' (expected one of {})",
                self.player,
                PLAYER_NAMES.join(", ")
            )));
        }
        match &self.point_table {
            Some(table) if table.len() != PokerHand::COUNT => {
                return Err(ConfigError::Invalid(format!(
                    "Invalid configuration: point_table needs {} entries, got {}",
                    PokerHand::COUNT,
                    table.len()
                )));
            }
            Some(_) => {}
            None => {
                let system = self.point_system.to_ascii_lowercase();
                if !SYSTEM_NAMES.contains(&system.as_str()) {
                    return Err(ConfigError::Invalid(format!(
                        "Invalid configuration: unknown point system '{}' (expected one of {})",
                        self.point_system,
                        SYSTEM_NAMES.join(", ")
                    )));
                }
            }
        }
        Ok(())
    }

    /// Build the point system this configuration names. A custom table wins
    /// over the system name; the random system is drawn from `seed`.
    pub fn build_point_system(&self, seed: u64) -> Result<PointSystem, ConfigError> {
        if let Some(table) = &self.point_table {
            return PointSystem::from_table("custom", table)
                .map_err(|e| ConfigError::Invalid(e.to_string()));
        }
        if self.point_system.eq_ignore_ascii_case("random") {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            return Ok(PointSystem::random(&mut rng));
        }
        PointSystem::by_name(&self.point_system).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("POKERSQUARES_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.depth_limit {
            cfg.depth_limit = v;
            sources.depth_limit = ValueSource::File;
        }
        if let Some(v) = f.point_system {
            cfg.point_system = v;
            sources.point_system = ValueSource::File;
        }
        if let Some(v) = f.point_table {
            cfg.point_table = Some(v);
            sources.point_table = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.player {
            cfg.player = v;
            sources.player = ValueSource::File;
        }
        if let Some(v) = f.game_millis {
            cfg.game_millis = v;
            sources.game_millis = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("POKERSQUARES_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(depth) = std::env::var("POKERSQUARES_DEPTH")
        && !depth.is_empty()
    {
        cfg.depth_limit = depth
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid depth".into()))?;
        sources.depth_limit = ValueSource::Env;
    }
    if let Ok(system) = std::env::var("POKERSQUARES_POINT_SYSTEM")
        && !system.is_empty()
    {
        cfg.point_system = system;
        sources.point_system = ValueSource::Env;
        // a named system from the environment replaces any table from the file
        cfg.point_table = None;
        sources.point_table = ValueSource::Env;
    }
    if let Ok(player) = std::env::var("POKERSQUARES_PLAYER")
        && !player.is_empty()
    {
        cfg.player = player;
        sources.player = ValueSource::Env;
    }
    if let Ok(millis) = std::env::var("POKERSQUARES_GAME_MILLIS")
        && !millis.is_empty()
    {
        cfg.game_millis = millis
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid game_millis".into()))?;
        sources.game_millis = ValueSource::Env;
    }

    cfg.validate()?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    depth_limit: Option<u32>,
    #[serde(default)]
    point_system: Option<String>,
    #[serde(default)]
    point_table: Option<Vec<i32>>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    player: Option<String>,
    #[serde(default)]
    game_millis: Option<u64>,
}
