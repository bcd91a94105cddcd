//! The dispatch seam.
//!
//! # The design this replaces
//!
//! The closed version of this module gave every link a tag and matched
//! on it:
//!
//! ```rust,ignore
//! match deeplink.kind() {
//!     DeeplinkType::Home => { /* downcast, call the home method */ }
//!     DeeplinkType::Profile => { /* downcast, call the profile method */ }
//!     // every new destination lands here, in this file
//! }
//! ```
//!
//! The open version keeps no tag. The router forwards to the link's own
//! [`execute`] and is finished; new destinations never touch this file.
//!
//! [`execute`]: crate::Deeplink::execute

use crate::link::Deeplink;

/// Forwards navigation to whatever deeplink it is handed.
///
/// The router is stateless: no routing table, no variant knowledge.
/// Dispatch is a single call through the [`Deeplink`] capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Router;

impl Router {
    /// Creates a router.
    pub fn new() -> Self {
        Self
    }

    /// Executes one deeplink by delegating to its own behavior.
    ///
    /// Accepts anything satisfying [`Deeplink`], trait objects included,
    /// and invokes it exactly once.
    pub fn execute<L: Deeplink + ?Sized>(&self, link: &L) {
        #[cfg(feature = "tracing")]
        tracing::trace!("forwarding deeplink");
        link.execute();
    }
}
