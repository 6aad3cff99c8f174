use std::path::PathBuf;

use thiserror::Error;
use tour_planner::{Catalog, CatalogLoadError, CatalogLoader};

#[derive(Debug, Error)]
pub enum FileLoadError {
    #[error("could not read country data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),
}

/// Reads the country dataset from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileCatalogLoader {
    path: PathBuf,
}

impl FileCatalogLoader {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CatalogLoader for FileCatalogLoader {
    type Error = FileLoadError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| FileLoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("read {} bytes of country data from {}", json.len(), self.path.display());
        Ok(Catalog::from_json(&json)?)
    }
}
