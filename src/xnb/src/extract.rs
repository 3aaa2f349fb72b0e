//! Batch extraction of raw assets into a mirrored directory tree.
//!
//! Walks a catalog in its own iteration order, fetches each asset's raw
//! payload, and writes it under the output directory at the normalized
//! asset name. The run is single-threaded; each asset is fully fetched and
//! written before the next.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::content::{CatalogError, ContentCatalog};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to fetch asset '{name}': {source}")]
    AssetFetchFailure {
        name: String,
        #[source]
        source: CatalogError,
    },

    #[error("Failed to write {path:?}: {source}")]
    AssetWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Extraction cancelled after {completed} assets")]
    Cancelled { completed: usize },
}

/// Per-run policy knobs
#[derive(Debug, Clone, Default)]
pub struct UnpackOptions {
    /// Collect per-asset failures and keep extracting instead of aborting
    /// the run on the first one
    pub keep_going: bool,

    /// Checked between assets; set to stop the run
    pub cancel: Option<Arc<AtomicBool>>,
}

/// One asset that could not be extracted
#[derive(Debug)]
pub struct AssetFailure {
    pub name: String,
    pub error: ExtractError,
}

/// Outcome of an unpack run
#[derive(Debug, Default)]
pub struct UnpackSummary {
    /// Output paths written, in catalog order
    pub written: Vec<PathBuf>,

    /// Assets skipped under the keep-going policy
    pub failures: Vec<AssetFailure>,
}

/// Reduce an asset name to a safe relative path.
///
/// Both separator styles are accepted; empty, `.`, and `..` components are
/// dropped so a name cannot escape the output directory.
pub fn normalize_asset_name(name: &str) -> PathBuf {
    let mut path = PathBuf::new();
    for part in name.split(['/', '\\']) {
        match part {
            "" | "." | ".." => {}
            p => path.push(p),
        }
    }
    path
}

/// Extract every catalog asset beneath `out_dir`, mirroring asset names.
///
/// `progress` is called with each asset name before its fetch. Under the
/// default abort policy the first failure ends the run and is returned to
/// the caller; with [`UnpackOptions::keep_going`] failures are collected in
/// the summary and later assets are still written.
pub fn unpack<C, F>(
    catalog: &C,
    out_dir: &Path,
    options: &UnpackOptions,
    mut progress: F,
) -> Result<UnpackSummary, ExtractError>
where
    C: ContentCatalog + ?Sized,
    F: FnMut(&str),
{
    fs::create_dir_all(out_dir).map_err(|source| ExtractError::AssetWriteFailure {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut summary = UnpackSummary::default();
    for name in catalog.assets() {
        if let Some(cancel) = &options.cancel {
            if cancel.load(Ordering::Relaxed) {
                return Err(ExtractError::Cancelled {
                    completed: summary.written.len(),
                });
            }
        }

        progress(&name);
        match extract_one(catalog, &name, out_dir) {
            Ok(path) => summary.written.push(path),
            Err(error) if options.keep_going => summary.failures.push(AssetFailure { name, error }),
            Err(error) => return Err(error),
        }
    }

    Ok(summary)
}

fn extract_one<C>(catalog: &C, name: &str, out_dir: &Path) -> Result<PathBuf, ExtractError>
where
    C: ContentCatalog + ?Sized,
{
    let asset = catalog
        .raw_asset(name)
        .map_err(|source| ExtractError::AssetFetchFailure {
            name: name.to_string(),
            source,
        })?;

    let out_path = out_dir.join(normalize_asset_name(name));
    asset
        .save(&out_path)
        .map_err(|source| ExtractError::AssetWriteFailure {
            path: out_path.clone(),
            source,
        })?;

    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RawAsset;

    /// In-memory catalog; a `None` payload makes that asset's fetch fail
    struct TestCatalog {
        entries: Vec<(String, Option<Vec<u8>>)>,
    }

    impl TestCatalog {
        fn new(entries: &[(&str, Option<&[u8]>)]) -> Self {
            TestCatalog {
                entries: entries
                    .iter()
                    .map(|(n, d)| (n.to_string(), d.map(<[u8]>::to_vec)))
                    .collect(),
            }
        }
    }

    impl ContentCatalog for TestCatalog {
        fn assets(&self) -> Vec<String> {
            self.entries.iter().map(|(n, _)| n.clone()).collect()
        }

        fn raw_asset(&self, name: &str) -> Result<RawAsset, CatalogError> {
            match self.entries.iter().find(|(n, _)| n == name) {
                Some((_, Some(data))) => Ok(RawAsset::new(name, data.clone())),
                _ => Err(CatalogError::AssetNotFound(name.to_string())),
            }
        }
    }

    #[test]
    fn test_normalize_asset_name() {
        assert_eq!(
            normalize_asset_name("textures/a.png"),
            PathBuf::from("textures").join("a.png")
        );
        assert_eq!(
            normalize_asset_name("textures\\ui\\icon.png"),
            PathBuf::from("textures").join("ui").join("icon.png")
        );
        assert_eq!(
            normalize_asset_name("../../etc/passwd"),
            PathBuf::from("etc").join("passwd")
        );
        assert_eq!(normalize_asset_name("./a//b"), PathBuf::from("a").join("b"));
    }

    #[test]
    fn test_mirrors_asset_paths() {
        let catalog = TestCatalog::new(&[
            ("textures/a.png", Some(b"png")),
            ("sounds/b.wav", Some(b"wav")),
        ]);
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("out");

        let mut seen = Vec::new();
        let summary = unpack(&catalog, &out, &UnpackOptions::default(), |name| {
            seen.push(name.to_string());
        })
        .expect("unpack");

        assert_eq!(seen, ["textures/a.png", "sounds/b.wav"]);
        assert_eq!(summary.written.len(), 2);
        assert!(summary.failures.is_empty());
        assert_eq!(
            fs::read(out.join("textures").join("a.png")).expect("read a"),
            b"png"
        );
        assert_eq!(
            fs::read(out.join("sounds").join("b.wav")).expect("read b"),
            b"wav"
        );
    }

    #[test]
    fn test_abort_on_first_failure() {
        let catalog = TestCatalog::new(&[
            ("a.bin", Some(b"a")),
            ("b.bin", None),
            ("c.bin", Some(b"c")),
        ]);
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("out");

        let mut seen = Vec::new();
        let err = unpack(&catalog, &out, &UnpackOptions::default(), |name| {
            seen.push(name.to_string());
        })
        .expect_err("second asset fails");

        assert!(matches!(err, ExtractError::AssetFetchFailure { ref name, .. } if name == "b.bin"));
        // The run stops at the failure: the third asset is never reached.
        assert_eq!(seen, ["a.bin", "b.bin"]);
        assert!(out.join("a.bin").is_file());
        assert!(!out.join("c.bin").exists());
    }

    #[test]
    fn test_keep_going_collects_failures() {
        let catalog = TestCatalog::new(&[
            ("a.bin", Some(b"a")),
            ("b.bin", None),
            ("c.bin", Some(b"c")),
        ]);
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("out");

        let options = UnpackOptions {
            keep_going: true,
            ..UnpackOptions::default()
        };
        let summary = unpack(&catalog, &out, &options, |_| {}).expect("run completes");

        assert_eq!(summary.written.len(), 2);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].name, "b.bin");
        assert!(out.join("c.bin").is_file());
    }

    #[test]
    fn test_creates_out_dir() {
        let catalog = TestCatalog::new(&[("a.bin", Some(b"a"))]);
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("deep/nested/out");

        unpack(&catalog, &out, &UnpackOptions::default(), |_| {}).expect("unpack");
        assert!(out.join("a.bin").is_file());
    }

    #[test]
    fn test_cancel_checked_between_assets() {
        let catalog = TestCatalog::new(&[("a.bin", Some(b"a")), ("b.bin", Some(b"b"))]);
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("out");

        let cancel = Arc::new(AtomicBool::new(false));
        let options = UnpackOptions {
            keep_going: false,
            cancel: Some(cancel.clone()),
        };

        // Cancel after the first asset has been reported.
        let err = unpack(&catalog, &out, &options, |_| {
            cancel.store(true, Ordering::Relaxed);
        })
        .expect_err("cancelled");

        assert!(matches!(err, ExtractError::Cancelled { completed: 1 }));
        assert!(out.join("a.bin").is_file());
        assert!(!out.join("b.bin").exists());
    }
}
