//! Data source configuration

use anyhow::{Context, Result};
use lms_core::{loader_for, Catalog, LoaderKind};
use std::fmt;

/// Environment variable naming the source kind (file, database)
pub const SOURCE_ENV: &str = "LMS_SOURCE";

/// Environment variable holding the file path or connection string
pub const PATH_ENV: &str = "LMS_PATH";

/// Where the catalog is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub kind: LoaderKind,
    pub locator: String,
}

impl SourceConfig {
    /// Resolve the source from flags, then environment, then defaults
    pub fn resolve(kind: Option<LoaderKind>, path: Option<String>) -> Result<Self> {
        let kind = match kind {
            Some(kind) => kind,
            None => match std::env::var(SOURCE_ENV) {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("Invalid {} value", SOURCE_ENV))?,
                Err(_) => LoaderKind::default(),
            },
        };

        let locator = path
            .or_else(|| std::env::var(PATH_ENV).ok())
            .unwrap_or_else(|| kind.default_locator().to_string());

        Ok(Self { kind, locator })
    }

    /// Same source kind switch the shell offers; keeps the locator when the
    /// kind is unchanged
    pub fn with_kind(&self, kind: LoaderKind) -> Self {
        let locator = if kind == self.kind {
            self.locator.clone()
        } else {
            kind.default_locator().to_string()
        };
        Self { kind, locator }
    }

    /// Build a catalog loaded from this source
    pub fn open(&self) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        let loader = loader_for(self.kind, self.locator.as_str());
        catalog
            .load_from(loader.as_ref())
            .with_context(|| format!("Failed to load data from {}", self))?;
        Ok(catalog)
    }
}

impl fmt::Display for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.locator)
    }
}
