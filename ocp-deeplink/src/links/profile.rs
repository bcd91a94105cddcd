//! The profile destination.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::link::Deeplink;

/// Opens the profile screen.
#[derive(Debug, Default)]
pub struct ProfileDeeplink {
    presented: AtomicBool,
}

impl ProfileDeeplink {
    /// Creates the link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this link has presented its screen.
    pub fn was_presented(&self) -> bool {
        self.presented.load(Ordering::SeqCst)
    }
}

impl Deeplink for ProfileDeeplink {
    fn execute(&self) {
        // Presents the profile screen.
        #[cfg(feature = "tracing")]
        tracing::info!(screen = "profile", "presenting screen");
        self.presented.store(true, Ordering::SeqCst);
    }
}
