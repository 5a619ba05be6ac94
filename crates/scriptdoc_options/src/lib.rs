//! scriptdoc_options: scriptdoc.json parsing and printer configuration.
//!
//! A config file only records what the user set. Command-line overrides are
//! layered on top with [`Config::merge`], and [`Config::resolve`] turns the
//! result into validated [`PrinterOptions`].

use scriptdoc_diagnostics::{ConfigError, ConfigResult};
use scriptdoc_printer::PrinterOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no config is given.
pub const CONFIG_FILE_NAME: &str = "scriptdoc.json";

/// Smallest accepted indentation width.
pub const MIN_INDENT: usize = 1;
/// Largest accepted indentation width.
pub const MAX_INDENT: usize = 16;

/// Printer settings, matching the scriptdoc.json schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    pub indent_spaces: Option<usize>,
    pub print_comments: Option<bool>,
}

impl Config {
    /// Layer `overrides` on top of `self`. Fields set in `overrides` win.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            indent_spaces: overrides.indent_spaces.or(self.indent_spaces),
            print_comments: overrides.print_comments.or(self.print_comments),
        }
    }

    /// Fill unset fields from the defaults and validate the result.
    pub fn resolve(&self) -> ConfigResult<PrinterOptions> {
        let defaults = PrinterOptions::default();
        let indent_spaces = self.indent_spaces.unwrap_or(defaults.indent_spaces);
        if !(MIN_INDENT..=MAX_INDENT).contains(&indent_spaces) {
            return Err(ConfigError::InvalidIndent {
                value: indent_spaces,
                min: MIN_INDENT,
                max: MAX_INDENT,
            });
        }
        Ok(PrinterOptions {
            indent_spaces,
            print_comments: self.print_comments.unwrap_or(defaults.print_comments),
        })
    }
}

/// Parse a scriptdoc.json document from a string.
pub fn parse_config(content: &str) -> Result<Config, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a scriptdoc.json file from a path.
pub fn parse_config_file(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Find scriptdoc.json directly inside `dir`.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Load the explicit config if one is given, otherwise scriptdoc.json from
/// `dir` if present, otherwise an empty config.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> ConfigResult<Config> {
    match explicit {
        Some(path) => parse_config_file(path),
        None => match find_config_file(dir) {
            Some(path) => parse_config_file(&path),
            None => Ok(Config::default()),
        },
    }
}
