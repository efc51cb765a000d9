//! File loaders, one variant per supported format family.
//!
//! This module provides:
//! - The [`Loader`] trait: `supports_extension` plus `load`
//! - [`YamlLoader`] for `.yml`/`.yaml` files
//! - [`IniLoader`] for `.ini`/`.config` files, with headless-file repair

mod ini;
mod yaml;

pub use ini::{IniLoader, HEADLESS_SECTION};
pub use yaml::YamlLoader;

use std::fmt;
use std::io;
use std::path::Path;

/// Normalized configuration data: nested mappings, sequences and scalars.
pub use serde_yaml::Value;

/// Error type for loading a config file
#[derive(Debug)]
pub enum LoadError {
    /// IO error reading the file
    Io(io::Error),
    /// YAML parsing error
    Yaml(serde_yaml::Error),
    /// INI parsing error
    Ini(::ini::ParseError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read config file: {e}"),
            LoadError::Yaml(e) => write!(f, "failed to parse YAML config file: {e}"),
            LoadError::Ini(e) => write!(f, "failed to parse INI config file: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Yaml(e) => Some(e),
            LoadError::Ini(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(e: serde_yaml::Error) -> Self {
        LoadError::Yaml(e)
    }
}

impl From<::ini::ParseError> for LoadError {
    fn from(e: ::ini::ParseError) -> Self {
        LoadError::Ini(e)
    }
}

/// A loader parses one family of config file formats into [`Value`] data.
///
/// Each variant declares a fixed set of supported extensions; the set is
/// immutable at runtime. Loaders hold no state across `load` calls.
pub trait Loader {
    /// The extensions this loader handles, e.g. `[".yml", ".yaml"]`.
    fn supported_extensions(&self) -> &'static [&'static str];

    /// Whether this loader handles files with the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        self.supported_extensions().contains(&ext)
    }

    /// Load the file at `path` and parse it into normalized mapping data.
    ///
    /// The read is blocking. IO and parse failures propagate to the caller
    /// wrapped in [`LoadError`], with the underlying error preserved as the
    /// source.
    fn load(&self, path: &Path) -> Result<Value, LoadError>;
}

impl fmt::Debug for dyn Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader")
            .field("supported_extensions", &self.supported_extensions())
            .finish()
    }
}
