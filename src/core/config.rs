//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.manor/config.toml`. If missing on first run, a
//! commented-out default is generated so players can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Variant;
use crate::core::map::{ManorMap, MapError, RoomEntry, RoomSpec, build_map};
use crate::core::state::DEFAULT_VISIT_CAPACITY;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ManorConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    /// Inline map. Empty means the built-in manor.
    #[serde(default)]
    pub rooms: Vec<RoomEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub variant: Option<Variant>,
    pub visit_capacity: Option<usize>,
    pub map_file: Option<String>,
}

/// A standalone map file: just `[[rooms]]` rows.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MapFile {
    #[serde(default)]
    pub rooms: Vec<RoomEntry>,
}

/// CLI overrides (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub variant: Option<Variant>,
    pub map_file: Option<PathBuf>,
    pub visit_capacity: Option<usize>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSource {
    BuiltIn,
    Inline(Vec<RoomEntry>),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub variant: Variant,
    pub visit_capacity: usize,
    pub map: MapSource,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Map(MapError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Map(e) => write!(f, "invalid map: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<MapError> for ConfigError {
    fn from(e: MapError) -> Self {
        ConfigError::Map(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.manor/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".manor"))
}

/// Returns the path to `~/.manor/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.manor/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ManorConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ManorConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ManorConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ManorConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<ManorConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Manor Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# variant = "detective"           # "detective" (collect clues) or "novice"
# visit_capacity = 1024           # turns recorded per exploration
# map_file = "mansion.toml"       # Path relative to ~/.manor/ (or absolute)

# An inline map replaces the built-in manor. Row 0 is the entrance;
# left/right are row indices.
#
# [[rooms]]
# name = "Entrance Hall"
# clue = "A leather glove stained with dried blood"
# left = 1
#
# [[rooms]]
# name = "Cellar"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ManorConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Variant: CLI → env → config → default
    let variant = cli
        .variant
        .or_else(|| env_parsed("MANOR_VARIANT", parse_variant))
        .or(config.general.variant)
        .unwrap_or_default();

    // Visit capacity: CLI → env → config → default
    let visit_capacity = cli
        .visit_capacity
        .or_else(|| env_parsed("MANOR_VISIT_CAPACITY", |s| s.trim().parse().ok()))
        .or(config.general.visit_capacity)
        .unwrap_or(DEFAULT_VISIT_CAPACITY);

    // Map: CLI file → env file → config file → inline rooms → built-in
    let map = cli
        .map_file
        .clone()
        .or_else(|| std::env::var("MANOR_MAP_FILE").ok().map(PathBuf::from))
        .or_else(|| config.general.map_file.as_deref().map(relative_to_config_dir))
        .map(MapSource::File)
        .unwrap_or_else(|| {
            if config.rooms.is_empty() {
                MapSource::BuiltIn
            } else {
                MapSource::Inline(config.rooms.clone())
            }
        });

    ResolvedConfig {
        variant,
        visit_capacity,
        map,
    }
}

fn env_parsed<T>(key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        warn!("Ignoring {}={:?}: not a valid value", key, raw);
    }
    parsed
}

fn parse_variant(raw: &str) -> Option<Variant> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "detective" => Some(Variant::Detective),
        "novice" => Some(Variant::Novice),
        _ => None,
    }
}

/// Relative map paths in the config file are resolved against `~/.manor/`.
fn relative_to_config_dir(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

/// Builds the map named by the resolved config, stripping clues for the novice game.
pub fn load_map(config: &ResolvedConfig) -> Result<ManorMap, ConfigError> {
    let map = match &config.map {
        MapSource::BuiltIn => build_map()?,
        MapSource::Inline(rooms) => build_from_entries(rooms)?,
        MapSource::File(path) => {
            let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
            let file: MapFile = toml::from_str(&contents).map_err(ConfigError::Parse)?;
            info!("Loaded map from {}", path.display());
            build_from_entries(&file.rooms)?
        }
    };

    if config.variant.collects_clues() {
        Ok(map)
    } else {
        Ok(map.without_clues())
    }
}

fn build_from_entries(rooms: &[RoomEntry]) -> Result<ManorMap, MapError> {
    let specs: Vec<RoomSpec<'_>> = rooms.iter().map(RoomEntry::as_spec).collect();
    ManorMap::from_table(&specs)
}
