use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use heart_score::pwa::{
    AssetFetcher, DismissalStore, DismissalStoreError, FetchError, InstallHint, OfflineAssetCache,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) assets: Arc<OfflineAssetCache<FilesystemAssetFetcher>>,
    pub(crate) install_hint: Arc<InstallHint<FileDismissalStore>>,
}

/// Serves the static app shell from a directory on disk. Request
/// paths are rooted at `root`, with "/" aliased to the index page.
pub(crate) struct FilesystemAssetFetcher {
    root: PathBuf,
}

impl FilesystemAssetFetcher {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let relative = match path.trim_start_matches('/') {
            "" => "index.html",
            trimmed => trimmed,
        };
        self.root.join(relative)
    }
}

impl AssetFetcher for FilesystemAssetFetcher {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let file = self.resolve(path);
        fs::read(&file).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => FetchError::NotFound(path.to_string()),
            _ => FetchError::Io {
                path: path.to_string(),
                source,
            },
        })
    }
}

/// File-backed home for the banner-dismissal boolean, the only datum
/// that outlives a request.
pub(crate) struct FileDismissalStore {
    path: PathBuf,
}

impl FileDismissalStore {
    pub(crate) fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(heart_score::pwa::install_hint::DISMISSAL_KEY),
        }
    }
}

impl DismissalStore for FileDismissalStore {
    fn dismissed(&self) -> bool {
        fs::read_to_string(&self.path)
            .map(|contents| contents.trim() == "true")
            .unwrap_or(false)
    }

    fn dismiss(&self) -> Result<(), DismissalStoreError> {
        fs::write(&self.path, "true").map_err(|err| DismissalStoreError(err.to_string()))
    }
}
