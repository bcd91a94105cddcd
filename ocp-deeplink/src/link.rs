//! The deeplink capability.
//!
//! Every deeplink carries its own presentation behavior. Consumers hold
//! the capability, never a concrete link type, so the set of destinations
//! stays open: a new one is a new implementation, not an edit to a tag
//! and to every match over it.

use std::sync::Arc;

/// A navigable entry point that knows how to present its own screen.
///
/// # Extension
///
/// Adding a destination means implementing this trait on a new type.
/// Nothing that routes deeplinks changes, including [`Router`].
///
/// [`Router`]: crate::Router
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be routed as a deeplink",
    label = "missing `Deeplink` implementation",
    note = "Implement `execute` so routers can forward navigation to `{Self}`."
)]
pub trait Deeplink: Send + Sync {
    /// Presents the screen this link points at.
    fn execute(&self);
}

// Forwarding implementations so routers accept borrowed, boxed, and
// shared links alike.
impl<T: Deeplink + ?Sized> Deeplink for &T {
    fn execute(&self) {
        (**self).execute();
    }
}

impl<T: Deeplink + ?Sized> Deeplink for Box<T> {
    fn execute(&self) {
        (**self).execute();
    }
}

impl<T: Deeplink + ?Sized> Deeplink for Arc<T> {
    fn execute(&self) {
        (**self).execute();
    }
}
