//! Installable-web-app collaborators: the versioned cache-first asset
//! cache and the install-hint banner decision logic.

pub mod install_hint;
pub mod offline_cache;

pub use install_hint::{
    detect_platform, DismissalStore, DismissalStoreError, InstallHint, PlatformFamily,
};
pub use offline_cache::{AssetFetcher, FetchError, OfflineAssetCache, ResolvedAsset};
