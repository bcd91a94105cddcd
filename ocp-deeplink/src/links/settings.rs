//! The settings destination.
//!
//! Added after the home and profile links. The router predates this file
//! and was not edited for it.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::link::Deeplink;

/// Opens the settings screen.
#[derive(Debug, Default)]
pub struct SettingsDeeplink {
    presented: AtomicBool,
}

impl SettingsDeeplink {
    /// Creates the link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this link has presented its screen.
    pub fn was_presented(&self) -> bool {
        self.presented.load(Ordering::SeqCst)
    }
}

impl Deeplink for SettingsDeeplink {
    fn execute(&self) {
        // Presents the settings screen.
        #[cfg(feature = "tracing")]
        tracing::info!(screen = "settings", "presenting screen");
        self.presented.store(true, Ordering::SeqCst);
    }
}
