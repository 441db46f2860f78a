// Catalog sources: built-in sample data or a JSON catalog file

pub mod config;
pub mod loader;
pub mod sample;

pub use config::*;
pub use loader::*;
pub use sample::*;

use std::fmt;
use std::path::PathBuf;
use crate::error::CatalogError;
use crate::models::Catalog;

/// Where the catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Sample,
    File(PathBuf),
}

impl CatalogSource {
    /// Pick the source: explicit path, then `catalog.location`, then the sample
    pub fn resolve(explicit: Option<PathBuf>, config: &Config) -> CatalogSource {
        let source = match explicit.or_else(|| config.catalog_location.clone()) {
            Some(path) => CatalogSource::File(path),
            None => CatalogSource::Sample,
        };
        log::debug!("catalog source: {}", source);
        source
    }

    /// Load the catalog; done once per process
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        match self {
            CatalogSource::Sample => Ok(sample_catalog()),
            CatalogSource::File(path) => load_catalog_file(path),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Sample => write!(f, "built-in sample"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let config = Config {
            catalog_location: Some(PathBuf::from("/etc/catalog.json")),
            ..Config::default()
        };
        assert_eq!(
            CatalogSource::resolve(Some(PathBuf::from("mine.json")), &config),
            CatalogSource::File(PathBuf::from("mine.json"))
        );
        assert_eq!(
            CatalogSource::resolve(None, &config),
            CatalogSource::File(PathBuf::from("/etc/catalog.json"))
        );
        assert_eq!(CatalogSource::resolve(None, &Config::default()), CatalogSource::Sample);
    }

    #[test]
    fn test_sample_source_loads() {
        let catalog = CatalogSource::Sample.load().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(CatalogSource::Sample.to_string(), "built-in sample");
    }
}
