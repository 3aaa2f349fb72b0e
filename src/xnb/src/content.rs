//! Content catalog collaborators.
//!
//! The extraction pipeline only needs two things from a content source: an
//! ordered list of asset names and a raw fetch per name. [`DirCatalog`]
//! serves loose files under a content directory; packed-archive readers
//! plug in behind the same trait.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Content directory not found: {0:?}")]
    MissingContentDir(PathBuf),

    #[error("Asset not found: '{0}'")]
    AssetNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// An asset's raw, undecoded payload
#[derive(Debug, Clone)]
pub struct RawAsset {
    name: String,
    data: Vec<u8>,
}

impl RawAsset {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        RawAsset {
            name: name.into(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Write the payload verbatim, creating parent directories first
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &self.data)
    }
}

/// Source of named assets and their raw payloads.
///
/// Implementations define the enumeration order; the pipeline consumes it
/// as given without re-sorting.
pub trait ContentCatalog {
    /// Asset names in catalog iteration order
    fn assets(&self) -> Vec<String>;

    /// Fetch one asset's raw bytes without decoding its contents
    fn raw_asset(&self, name: &str) -> Result<RawAsset, CatalogError>;
}

/// Catalog over loose files under a content directory.
///
/// Asset names are `/`-separated paths relative to the root, enumerated in
/// sorted order for deterministic runs.
#[derive(Debug)]
pub struct DirCatalog {
    root: PathBuf,
    assets: Vec<String>,
}

impl DirCatalog {
    /// Scan `root` for assets; fails if the directory does not exist
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, CatalogError> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(CatalogError::MissingContentDir(root));
        }

        let mut assets = Vec::new();
        for entry in walkdir::WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if let Ok(rel) = entry.path().strip_prefix(&root) {
                let name = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                assets.push(name);
            }
        }

        Ok(DirCatalog { root, assets })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentCatalog for DirCatalog {
    fn assets(&self) -> Vec<String> {
        self.assets.clone()
    }

    fn raw_asset(&self, name: &str) -> Result<RawAsset, CatalogError> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(CatalogError::AssetNotFound(name.to_string()));
        }
        let data = fs::read(&path)?;
        Ok(RawAsset::new(name, data))
    }
}
