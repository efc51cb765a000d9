//! Extension-to-loader resolution

use std::fmt;

use crate::loader::{IniLoader, Loader, YamlLoader};

/// Error type for loader resolution
#[derive(Debug, PartialEq, Eq)]
pub enum FactoryError {
    /// The factory was given an empty target extension set
    NoTargetExtensions,
    /// A targeted extension has no loader variant supporting it
    NoLoaderFound(String),
}

impl fmt::Display for FactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactoryError::NoTargetExtensions => {
                write!(f, "the loader factory's target extension set must not be empty")
            }
            FactoryError::NoLoaderFound(ext) => {
                write!(f, "no loader found for file extension `{ext}`")
            }
        }
    }
}

impl std::error::Error for FactoryError {}

/// Target extension set accepted by [`LoaderFactory::new`].
///
/// A bare extension string is normalized into a one-element set, so callers
/// can pass `".yml"` or `[".yml", ".ini"]` interchangeably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetExtensions(Vec<String>);

impl From<&str> for TargetExtensions {
    fn from(ext: &str) -> Self {
        TargetExtensions(vec![ext.to_string()])
    }
}

impl From<String> for TargetExtensions {
    fn from(ext: String) -> Self {
        TargetExtensions(vec![ext])
    }
}

impl From<Vec<String>> for TargetExtensions {
    fn from(exts: Vec<String>) -> Self {
        TargetExtensions(exts)
    }
}

impl From<Vec<&str>> for TargetExtensions {
    fn from(exts: Vec<&str>) -> Self {
        TargetExtensions(exts.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for TargetExtensions {
    fn from(exts: &[&str]) -> Self {
        TargetExtensions(exts.iter().map(|e| e.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TargetExtensions {
    fn from(exts: [&str; N]) -> Self {
        TargetExtensions(exts.iter().map(|e| e.to_string()).collect())
    }
}

type LoaderCtor = fn() -> Box<dyn Loader>;

/// Known loader variants with their declared extension sets, scanned in this
/// order; first match wins. Only the matching variant is instantiated.
const VARIANTS: &[(&[&str], LoaderCtor)] = &[
    (YamlLoader::SUPPORTED_EXTS, || Box::new(YamlLoader)),
    (IniLoader::SUPPORTED_EXTS, || Box::new(IniLoader)),
];

/// Resolves file extensions to fresh [`Loader`] instances.
///
/// The factory holds only the set of extensions the caller targets; whether
/// a loader exists for an extension is decided per [`resolve`] call against
/// the fixed variant list.
///
/// [`resolve`]: LoaderFactory::resolve
#[derive(Debug, Clone)]
pub struct LoaderFactory {
    target_exts: Vec<String>,
}

impl LoaderFactory {
    /// Create a factory targeting the given extensions.
    ///
    /// Accepts a bare extension string or a collection of extensions, each
    /// conventionally starting with `.`. Fails with
    /// [`FactoryError::NoTargetExtensions`] if the set is empty.
    pub fn new(target_exts: impl Into<TargetExtensions>) -> Result<Self, FactoryError> {
        let mut factory = LoaderFactory {
            target_exts: Vec::new(),
        };
        factory.set_target_extensions(target_exts)?;
        Ok(factory)
    }

    /// The extensions this factory targets, in the order supplied.
    pub fn target_extensions(&self) -> &[String] {
        &self.target_exts
    }

    /// Replace the target extension set, with the same validation as
    /// [`new`](LoaderFactory::new).
    ///
    /// On error the previously stored set is left untouched.
    pub fn set_target_extensions(
        &mut self,
        target_exts: impl Into<TargetExtensions>,
    ) -> Result<(), FactoryError> {
        let TargetExtensions(exts) = target_exts.into();
        if exts.is_empty() {
            return Err(FactoryError::NoTargetExtensions);
        }
        self.target_exts = exts;
        Ok(())
    }

    /// Get the loader associated with a file extension.
    ///
    /// Returns `Ok(None)` when `ext` is not targeted by this factory: the
    /// factory was not asked to handle it, which is not an error. Returns
    /// [`FactoryError::NoLoaderFound`] when `ext` is targeted but no known
    /// loader variant supports it, signalling a registration gap.
    ///
    /// Matching is exact string equality, case-sensitive, with no
    /// normalization of the leading dot: `.yml` and `.yaml` are distinct.
    /// The returned loader is instantiated fresh per call; no parser state
    /// is shared across resolutions.
    pub fn resolve(&self, ext: &str) -> Result<Option<Box<dyn Loader>>, FactoryError> {
        if !self.target_exts.iter().any(|e| e == ext) {
            return Ok(None);
        }

        for (exts, ctor) in VARIANTS {
            if exts.contains(&ext) {
                return Ok(Some(ctor()));
            }
        }

        Err(FactoryError::NoLoaderFound(ext.to_string()))
    }
}
