use clap::ValueEnum;
use std::path::{Path, PathBuf};
use crate::error::ConfigError;

/// ANSI color policy for terminal output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorPolicy {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorPolicy {
    /// Resolve the policy against whether stdout is a terminal
    pub fn enabled(&self, is_tty: bool) -> bool {
        match self {
            ColorPolicy::Auto => is_tty,
            ColorPolicy::Always => true,
            ColorPolicy::Never => false,
        }
    }
}

pub const MIN_BAR_WIDTH: usize = 5;
pub const MAX_BAR_WIDTH: usize = 200;

/// Settings read from the rc file
///
/// The file lives at `~/.projstat/rc` and holds `key=value` lines:
///
/// ```text
/// # comment
/// catalog.location=./catalog.json
/// color=never
/// bar.width=30
/// ```
///
/// A relative `catalog.location` resolves against the rc file's directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub catalog_location: Option<PathBuf>,
    pub color: ColorPolicy,
    pub bar_width: Option<usize>,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".projstat").join("rc"))
    }

    /// Load the rc file, or defaults if there is none
    pub fn load() -> Result<Config, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                log::debug!("no config file at {}", path.display());
                Ok(Config::default())
            }
            None => {
                log::debug!("no home directory; using default config");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Parse rc file contents; `path` is used for relative paths and messages
    pub fn parse(contents: &str, path: &Path) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

        for (idx, raw_line) in contents.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                log::debug!("{}:{}: ignoring line without '='", path.display(), idx + 1);
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            let invalid = |expected: &'static str| ConfigError::InvalidValue {
                path: path.to_path_buf(),
                line: idx + 1,
                key: key.to_string(),
                value: value.to_string(),
                expected,
            };

            match key {
                "catalog.location" => {
                    if value.is_empty() {
                        return Err(invalid("a file path"));
                    }
                    let location = PathBuf::from(value);
                    config.catalog_location = Some(if location.is_relative() {
                        base_dir.join(location)
                    } else {
                        location
                    });
                }
                "color" => {
                    config.color = ColorPolicy::from_str(value, false)
                        .map_err(|_| invalid("auto, always, or never"))?;
                }
                "bar.width" => {
                    let width = value
                        .parse::<usize>()
                        .ok()
                        .filter(|w| (MIN_BAR_WIDTH..=MAX_BAR_WIDTH).contains(w))
                        .ok_or_else(|| invalid("a number from 5 to 200"))?;
                    config.bar_width = Some(width);
                }
                _ => log::debug!("{}:{}: ignoring unknown key '{}'", path.display(), idx + 1, key),
            }
        }

        Ok(config)
    }
}
