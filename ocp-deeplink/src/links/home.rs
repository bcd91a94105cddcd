//! The home destination.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::link::Deeplink;

/// Opens the main screen.
///
/// Carries no domain data. The internal flag only records that
/// presentation happened, so callers can observe the effect of
/// [`execute`](Deeplink::execute).
#[derive(Debug, Default)]
pub struct HomeDeeplink {
    presented: AtomicBool,
}

impl HomeDeeplink {
    /// Creates the link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this link has presented its screen.
    pub fn was_presented(&self) -> bool {
        self.presented.load(Ordering::SeqCst)
    }
}

impl Deeplink for HomeDeeplink {
    fn execute(&self) {
        // Presents the main screen.
        #[cfg(feature = "tracing")]
        tracing::info!(screen = "home", "presenting screen");
        self.presented.store(true, Ordering::SeqCst);
    }
}
