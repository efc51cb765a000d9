//! INI file loading

use std::fs;
use std::path::Path;

use ini::Ini;
use serde_yaml::Mapping;

use super::{LoadError, Loader, Value};

/// Section name assigned to options appearing before any `[section]` header.
pub const HEADLESS_SECTION: &str = "__headless__";

/// Loader for `.ini` and `.config` files.
///
/// Output is exactly two levels deep: section name to option name to string
/// value. A file with no `[section]` header is repaired once by prepending a
/// synthetic `[__headless__]` header and re-parsing.
#[derive(Debug, Default)]
pub struct IniLoader;

impl IniLoader {
    /// Extensions handled by this loader.
    pub const SUPPORTED_EXTS: &'static [&'static str] = &[".ini", ".config"];
}

impl Loader for IniLoader {
    fn supported_extensions(&self) -> &'static [&'static str] {
        Self::SUPPORTED_EXTS
    }

    fn load(&self, path: &Path) -> Result<Value, LoadError> {
        let content = fs::read_to_string(path)?;
        let doc = parse_with_repair(&content)?;
        Ok(normalize(&doc))
    }
}

/// Parse INI text, repairing a missing leading section header once.
///
/// The parser files options that precede any `[section]` header under its
/// unnamed general section. When that happens, the content is re-parsed with
/// a literal `[__headless__]` header plus newline prepended, so those options
/// get a real section name. The repair is attempted exactly once; an error
/// from the re-parse propagates.
fn parse_with_repair(content: &str) -> Result<Ini, LoadError> {
    let doc = Ini::load_from_str(content)?;

    let headless = doc
        .section(None::<String>)
        .is_some_and(|props| props.iter().next().is_some());
    if !headless {
        return Ok(doc);
    }

    let repaired = format!("[{HEADLESS_SECTION}]\n{content}");
    Ok(Ini::load_from_str(&repaired)?)
}

/// Rebuild parsed INI data into a section -> option -> string value mapping,
/// iterating sections and options in the order the parser reports them.
fn normalize(doc: &Ini) -> Value {
    let mut root = Mapping::new();
    for (section, props) in doc.iter() {
        let Some(section) = section else {
            continue;
        };
        let mut options = Mapping::new();
        for (key, value) in props.iter() {
            options.insert(Value::from(key), Value::from(value));
        }
        root.insert(Value::from(section), Value::Mapping(options));
    }
    Value::Mapping(root)
}
