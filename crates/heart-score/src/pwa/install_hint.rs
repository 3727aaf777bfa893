use serde::Serialize;

/// Storage key for the single persisted dismissal flag.
pub const DISMISSAL_KEY: &str = "iosInstallHintDismissed_v1";

const MOBILE_DEVICE_MARKERS: [&str; 3] = ["iPhone", "iPad", "iPod"];

/// Platform family relevant to the install hint. Detection is
/// heuristic string matching, so `Unknown` is a first-class answer
/// rather than a default to desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformFamily {
    MobileAppFamily,
    Desktop,
    Unknown,
}

impl PlatformFamily {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MobileAppFamily => "Mobile",
            Self::Desktop => "Desktop",
            Self::Unknown => "Unknown",
        }
    }
}

/// Classify a client from its user-agent and platform strings.
///
/// A device marker in either string wins; anything else with content
/// is treated as desktop, and empty inputs stay unknown.
pub fn detect_platform(user_agent: &str, platform: &str) -> PlatformFamily {
    let ua_lower = user_agent.to_ascii_lowercase();

    let mobile = MOBILE_DEVICE_MARKERS.iter().any(|marker| {
        platform.contains(marker) || ua_lower.contains(&marker.to_ascii_lowercase())
    });

    if mobile {
        PlatformFamily::MobileAppFamily
    } else if user_agent.trim().is_empty() && platform.trim().is_empty() {
        PlatformFamily::Unknown
    } else {
        PlatformFamily::Desktop
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unable to persist dismissal flag: {0}")]
pub struct DismissalStoreError(pub String);

/// Persistence for the one boolean the banner keeps across visits.
/// Read and written at most once per relevant user action.
pub trait DismissalStore: Send + Sync {
    fn dismissed(&self) -> bool;
    fn dismiss(&self) -> Result<(), DismissalStoreError>;
}

/// Decision logic for the "add to home screen" banner.
pub struct InstallHint<S> {
    store: S,
}

impl<S: DismissalStore> InstallHint<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The banner shows only for the mobile app family, outside an
    /// installed/standalone display mode, and before dismissal.
    pub fn should_show(&self, platform: PlatformFamily, standalone: bool) -> bool {
        if platform != PlatformFamily::MobileAppFamily {
            return false;
        }
        if standalone {
            return false;
        }
        !self.store.dismissed()
    }

    /// User closed the banner; persist the flag so it stays hidden on
    /// later visits.
    pub fn dismiss(&self) -> Result<(), DismissalStoreError> {
        self.store.dismiss()
    }
}
