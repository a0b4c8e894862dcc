//! Emitter defaults loaded from TOML.
//!
//! ```text
//! [figure]
//! location = "[htp]"
//! width = "\\linewidth"
//! include_args = ""
//!
//! [table]
//! location = "[htp]"
//! small = true
//! centering = false
//! caption_above = true
//! na_rep = ""
//!
//! [sink]
//! mode = "append"
//! ```
//!
//! Every key is optional; missing keys keep the defaults shown above.

use crate::error::{ConfigError, Result};
use crate::sink::FileMode;
use serde::Deserialize;
use std::path::Path;

/// Default float placement for figures and tables.
pub const DEFAULT_LOCATION: &str = "[htp]";

/// Default `\includegraphics` width.
pub const DEFAULT_WIDTH: &str = "\\linewidth";

/// Top-level emitter configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub figure: FigureDefaults,
    pub table: TableDefaults,
    pub sink: SinkDefaults,
}

/// Defaults applied to new figure specs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FigureDefaults {
    pub location: String,
    pub width: String,
    /// Extra `\includegraphics` options appended after the width.
    pub include_args: String,
}

impl Default for FigureDefaults {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            width: DEFAULT_WIDTH.to_string(),
            include_args: String::new(),
        }
    }
}

/// Defaults applied to new table layouts and tabular bodies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableDefaults {
    pub location: String,
    pub small: bool,
    pub centering: bool,
    pub caption_above: bool,
    /// Text substituted for missing cells.
    pub na_rep: String,
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            small: true,
            centering: false,
            caption_above: true,
            na_rep: String::new(),
        }
    }
}

/// Defaults for path-based sinks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SinkDefaults {
    /// Append keeps earlier runs' output in the same file; use `write` to overwrite.
    pub mode: FileMode,
}

impl EmitterConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()).into())
    }

    /// Read and parse a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        log::debug!("loaded emitter config from {}", path.display());
        Self::from_toml_str(&content)
    }
}
