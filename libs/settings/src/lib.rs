use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use directories::{ProjectDirs, UserDirs};
use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not access config file")]
    Io(#[from] io::Error),
    #[error("could not parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("could not find a home directory for the config file")]
    NoHomeDir,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct General {
    pub training_file: String,
    pub test_file: String,
    pub log_level: String,
}

impl Default for General {
    fn default() -> Self {
        General {
            training_file: "~/reviews/MovieReviews.txt".into(),
            test_file: "~/reviews/smallReviews.txt".into(),
            log_level: "info".into(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Model {
    pub neutral_lower: f64,
    pub neutral_upper: f64,
}

impl Default for Model {
    fn default() -> Self {
        Model {
            neutral_lower: 1.75,
            neutral_upper: 2.25,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: General,
    pub model: Model,
}

/// Returns the config directory and the config file inside it. `REVIEWS_CONFIG` points at a
/// specific file instead.
pub fn get_config_location() -> Result<(PathBuf, PathBuf), ConfigError> {
    if let Ok(file) = env::var("REVIEWS_CONFIG") {
        let file = parse_location(&file);
        let dir = file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        return Ok((dir, file));
    }
    let project_dir = ProjectDirs::from("", "", "reviews").ok_or(ConfigError::NoHomeDir)?;
    let config_dir = project_dir.config_dir();
    let mut config_path = PathBuf::from(config_dir);
    config_path.push("config.toml");
    Ok((config_dir.to_owned(), config_path))
}

/// Writes the default config if none exists yet and returns where the config lives.
pub fn write_config() -> Result<PathBuf, ConfigError> {
    let (dir, file) = get_config_location()?;
    if !file.exists() {
        fs::create_dir_all(dir)?;
        fs::write(&file, DEFAULT_CONFIG)?;
    }
    Ok(file)
}

pub fn read_config() -> Result<Config, ConfigError> {
    let file = write_config()?;
    read_config_from(&file)
}

pub fn read_config_from(file: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(&fs::read_to_string(file)?)?;
    Ok(config)
}

/// Expands a leading `~` to the user's home directory.
pub fn parse_location(location: &str) -> PathBuf {
    match location.strip_prefix('~') {
        Some(rest) => {
            let home_dir = match UserDirs::new() {
                Some(dirs) => dirs.home_dir().to_path_buf(),
                None => PathBuf::from(env::var("HOME").unwrap_or_default()),
            };
            home_dir.join(rest.trim_start_matches(|c: char| c == '/' || c == '\\'))
        }
        None => PathBuf::from(location),
    }
}
