use std::time::Duration;

pub use config::{Config, File as ConfigFile};
pub use once_cell::sync::OnceCell;
use std::error::Error;

use crate::constants::{DEFAULT_BASE_PATHS, DEFAULT_DEVICE_TIMEOUT_SECS, DEFAULT_INDEX_DEPTH};

static GLOBAL_CONFIG: OnceCell<Config> = OnceCell::new();

/// Load config.toml if present. The tool must run with no config file at
/// all, so a missing file just means defaults.
pub fn init_global_config() -> Result<(), Box<dyn Error>> {
    let mut config = Config::default();
    if std::path::Path::new("config.toml").exists() {
        config.merge(ConfigFile::with_name("config.toml"))?;
    }
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| "Config already set")?;
    Ok(())
}

pub fn get_global_config() -> &'static Config {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Base path templates to search, in priority order.
///
/// `search.base_paths` in config.toml overrides the built-in list; test
/// suites and unusual wallets can narrow or extend the space this way.
pub fn base_paths(config: &Config) -> Vec<String> {
    match config.get_array("search.base_paths") {
        Ok(values) => {
            let paths: Vec<String> = values
                .into_iter()
                .filter_map(|v| v.into_string().ok())
                .collect();
            if paths.is_empty() {
                default_base_paths()
            } else {
                paths
            }
        }
        Err(_) => default_base_paths(),
    }
}

fn default_base_paths() -> Vec<String> {
    DEFAULT_BASE_PATHS.iter().map(|s| s.to_string()).collect()
}

/// Index depth used when --index-depth is not given on the command line
/// (`search.index_depth`, built-in default 5).
pub fn index_depth(config: &Config) -> i64 {
    config
        .get_int("search.index_depth")
        .unwrap_or(DEFAULT_INDEX_DEPTH)
}

/// Per-exchange device timeout (`device.timeout_secs`).
pub fn device_timeout(config: &Config) -> Duration {
    let secs = config
        .get_int("device.timeout_secs")
        .ok()
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_DEVICE_TIMEOUT_SECS as i64);
    Duration::from_secs(secs as u64)
}
