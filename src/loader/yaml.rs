//! YAML file loading

use std::fs;
use std::path::Path;

use super::{LoadError, Loader, Value};

/// Loader for `.yml` and `.yaml` files.
///
/// Returns the parsed YAML value tree as-is: arbitrary nesting of mappings,
/// sequences and scalars, with no post-processing.
#[derive(Debug, Default)]
pub struct YamlLoader;

impl YamlLoader {
    /// Extensions handled by this loader.
    pub const SUPPORTED_EXTS: &'static [&'static str] = &[".yml", ".yaml"];
}

impl Loader for YamlLoader {
    fn supported_extensions(&self) -> &'static [&'static str] {
        Self::SUPPORTED_EXTS
    }

    fn load(&self, path: &Path) -> Result<Value, LoadError> {
        let content = fs::read_to_string(path)?;
        let data = serde_yaml::from_str(&content)?;
        Ok(data)
    }
}
