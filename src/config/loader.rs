use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use super::core::CrawlabilityConfig;
use crate::errors::{Error, Result};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "crawlability.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string.
///
/// Unlike snapshot signals, configuration problems are never papered over
/// with defaults: an invalid table fails the whole load.
pub fn parse_and_validate_config(contents: &str) -> Result<CrawlabilityConfig> {
    let config = toml::from_str::<CrawlabilityConfig>(contents)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;
    config.validate()?;
    Ok(config)
}

/// Load and validate configuration from an explicit path
pub fn load_config_from_path(path: &Path) -> Result<CrawlabilityConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    let config = parse_and_validate_config(&contents)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load configuration from `dir/crawlability.toml`, falling back to
/// defaults only when the file does not exist.
pub fn load_config_from_dir(dir: &Path) -> Result<CrawlabilityConfig> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!("No {} in {}. Using default config.", CONFIG_FILE_NAME, dir.display());
        return Ok(CrawlabilityConfig::default());
    }
    load_config_from_path(&path)
}
