use std::collections::HashMap;

/// Root document every failed lookup falls back to, which keeps the
/// single page available offline.
pub const ROOT_DOCUMENT: &str = "/index.html";

/// Assets pre-fetched into the cache at install time.
pub const PRECACHE_ASSETS: &[&str] = &[
    "/",
    "/index.html",
    "/style.css",
    "/script.js",
    "/manifest.json",
];

/// Failures surfaced by an [`AssetFetcher`].
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("asset {0} not found")]
    NotFound(String),
    #[error("unable to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Source of truth the cache falls back to on a miss, e.g. the
/// filesystem behind the server or a remote origin.
pub trait AssetFetcher: Send + Sync {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError>;
}

/// Asset resolved by the cache. `path` names what was actually
/// served, which differs from the request when the root-document
/// fallback kicks in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub path: String,
    pub body: Vec<u8>,
}

fn cache_name(version: u32) -> String {
    format!("clinicaltools-hs-v{version}")
}

/// Cache-first asset store keyed by a versioned cache identifier.
///
/// Mirrors the install/activate/fetch lifecycle of an offline worker:
/// `install` pre-fetches the fixed asset list into the current cache,
/// `activate` deletes every cache left over from earlier versions,
/// and `fetch` serves cached bytes before consulting the fetcher,
/// falling back to the cached root document when both miss.
pub struct OfflineAssetCache<F> {
    current: String,
    fetcher: F,
    caches: HashMap<String, HashMap<String, ResolvedAsset>>,
}

impl<F: AssetFetcher> OfflineAssetCache<F> {
    pub fn new(version: u32, fetcher: F) -> Self {
        Self {
            current: cache_name(version),
            fetcher,
            caches: HashMap::new(),
        }
    }

    /// Identifier of the cache generation currently in use.
    pub fn current_cache(&self) -> &str {
        &self.current
    }

    /// Names of all cache generations still held, current or stale.
    pub fn cache_names(&self) -> Vec<&str> {
        self.caches.keys().map(String::as_str).collect()
    }

    /// Switch to a new cache generation without touching older ones;
    /// `activate` prunes them once the new generation is installed.
    pub fn adopt_version(&mut self, version: u32) {
        self.current = cache_name(version);
    }

    /// Pre-fetch the fixed asset list into the current cache. Fails
    /// wholesale if any listed asset cannot be fetched.
    pub fn install(&mut self) -> Result<(), FetchError> {
        let cache = self.caches.entry(self.current.clone()).or_default();
        for path in PRECACHE_ASSETS {
            let body = self.fetcher.fetch(path)?;
            cache.insert(
                (*path).to_string(),
                ResolvedAsset {
                    path: (*path).to_string(),
                    body,
                },
            );
        }
        Ok(())
    }

    /// Drop every cache generation whose identifier differs from the
    /// current one.
    pub fn activate(&mut self) {
        let current = self.current.clone();
        self.caches.retain(|name, _| *name == current);
    }

    /// Cache-first lookup: cached copy, else the fetcher, else the
    /// cached root document. `None` only when even the fallback is
    /// absent.
    pub fn fetch(&self, path: &str) -> Option<ResolvedAsset> {
        let cache = self.caches.get(&self.current);

        if let Some(asset) = cache.and_then(|entries| entries.get(path)) {
            return Some(asset.clone());
        }

        match self.fetcher.fetch(path) {
            Ok(body) => Some(ResolvedAsset {
                path: path.to_string(),
                body,
            }),
            Err(_) => cache.and_then(|entries| entries.get(ROOT_DOCUMENT)).cloned(),
        }
    }
}
