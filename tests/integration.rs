use std::fs;
use std::path::Path;

use confit::{FactoryError, LoadError, LoaderFactory, Value, HEADLESS_SECTION};
use tempfile::TempDir;

/// Extension of a path in the dotted form the factory dispatches on.
fn extension_of(path: &Path) -> String {
    format!(".{}", path.extension().unwrap().to_str().unwrap())
}

#[test]
fn test_resolve_then_load_yaml_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.yml");
    fs::write(
        &path,
        r"
First: one
Second: two
Third:
  - Alpha
  - Bravo
  - Charlie:
      - Delta
      - Echo
      - Foxtrot
Fourth: four
",
    )
    .unwrap();

    let factory = LoaderFactory::new([".yml", ".yaml", ".ini"]).unwrap();
    let loader = factory.resolve(&extension_of(&path)).unwrap().unwrap();

    let data = loader.load(&path).unwrap();
    let map = data.as_mapping().unwrap();
    assert_eq!(map.get("First"), Some(&Value::from("one")));
    assert_eq!(map.get("Fourth"), Some(&Value::from("four")));

    let third = map.get("Third").unwrap().as_sequence().unwrap();
    assert_eq!(third.len(), 3);
    let charlie = third[2].as_mapping().unwrap();
    assert_eq!(
        charlie.get("Charlie").unwrap().as_sequence().unwrap().len(),
        3
    );
}

#[test]
fn test_resolve_then_load_headless_ini_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.ini");
    fs::write(&path, "key=value\n").unwrap();

    let factory = LoaderFactory::new([".yml", ".yaml", ".ini"]).unwrap();
    let loader = factory.resolve(&extension_of(&path)).unwrap().unwrap();

    let data = loader.load(&path).unwrap();
    let map = data.as_mapping().unwrap();
    let headless = map.get(HEADLESS_SECTION).unwrap().as_mapping().unwrap();
    assert_eq!(headless.get("key"), Some(&Value::from("value")));
}

#[test]
fn test_config_extension_dispatches_to_ini_loader() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.config");
    fs::write(&path, "[general]\nmode = fast\n").unwrap();

    let factory = LoaderFactory::new([".config"]).unwrap();
    let loader = factory.resolve(".config").unwrap().unwrap();

    let data = loader.load(&path).unwrap();
    let general = data
        .as_mapping()
        .unwrap()
        .get("general")
        .unwrap()
        .as_mapping()
        .unwrap();
    assert_eq!(general.get("mode"), Some(&Value::from("fast")));
}

#[test]
fn test_untargeted_extension_is_not_an_error() {
    let factory = LoaderFactory::new([".yml", ".yaml", ".ini"]).unwrap();
    assert!(factory.resolve(".invalid").unwrap().is_none());
}

#[test]
fn test_targeted_extension_without_loader_is_an_error() {
    let factory = LoaderFactory::new(".noloader").unwrap();
    assert!(matches!(
        factory.resolve(".noloader"),
        Err(FactoryError::NoLoaderFound(ext)) if ext == ".noloader"
    ));
}

#[test]
fn test_load_error_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let factory = LoaderFactory::new(".yml").unwrap();
    let loader = factory.resolve(".yml").unwrap().unwrap();

    let result = loader.load(&dir.path().join("absent.yml"));
    assert!(matches!(result, Err(LoadError::Io(_))));
}
