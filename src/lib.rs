//! confit: load configuration files without hard-coding the format.
//!
//! Given a file extension, [`LoaderFactory`] resolves a [`Loader`] that
//! parses files of that format into a normalized nested [`Value`]. Parsing
//! is delegated to format crates (`serde_yaml`, `rust-ini`); this crate owns
//! only the extension-to-loader resolution and its error semantics.
//!
//! ```no_run
//! use confit::LoaderFactory;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let factory = LoaderFactory::new([".yml", ".yaml", ".ini"])?;
//! if let Some(loader) = factory.resolve(".yml")? {
//!     let data = loader.load("app.yml".as_ref())?;
//!     println!("{data:?}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod factory;
pub mod loader;

pub use factory::{FactoryError, LoaderFactory, TargetExtensions};
pub use loader::{IniLoader, LoadError, Loader, Value, YamlLoader, HEADLESS_SECTION};
