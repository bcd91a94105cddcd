//! # ocp-deeplink
//!
//! The routing half of the open-closed principle examples: a [`Router`]
//! that forwards navigation to any [`Deeplink`] without ever branching
//! on which link it was handed.
//!
//! # The closed design
//!
//! A dispatcher built around a `DeeplinkType` tag must match on that tag,
//! downcast to the concrete link, and call its method. Every new
//! destination edits the tag, the dispatcher, and every other match over
//! the tag; a missed site silently drops the route.
//!
//! # The open design
//!
//! Each destination implements [`Deeplink::execute`] and presents its own
//! screen. The router's entire job is one forwarding call through the
//! capability, so new destinations never touch it.
//!
//! ```rust
//! use ocp_deeplink::{HomeDeeplink, ProfileDeeplink, Router};
//!
//! let router = Router::new();
//! let home = HomeDeeplink::new();
//! let profile = ProfileDeeplink::new();
//!
//! router.execute(&home);
//!
//! assert!(home.was_presented());
//! assert!(!profile.was_presented());
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod link;
mod links;
mod router;
pub mod testing;

// Re-exports
pub use link::Deeplink;
pub use links::{HomeDeeplink, ProfileDeeplink, SettingsDeeplink};
pub use router::Router;
