//! Adding a destination without touching the router.

use std::sync::atomic::{AtomicBool, Ordering};

use ocp_deeplink::{Deeplink, HomeDeeplink, Router};

/// A destination that did not exist when the router was written.
#[derive(Default)]
struct SearchDeeplink {
    presented: AtomicBool,
}

impl SearchDeeplink {
    fn was_presented(&self) -> bool {
        self.presented.load(Ordering::SeqCst)
    }
}

impl Deeplink for SearchDeeplink {
    fn execute(&self) {
        self.presented.store(true, Ordering::SeqCst);
    }
}

#[test]
fn a_new_destination_routes_through_the_unchanged_router() {
    let router = Router::new();
    let search = SearchDeeplink::default();

    router.execute(&search);

    assert!(search.was_presented());
}

#[test]
fn new_and_stock_destinations_share_one_router() {
    let router = Router::new();
    let home = HomeDeeplink::new();
    let search = SearchDeeplink::default();

    router.execute(&home);
    router.execute(&search);

    assert!(home.was_presented());
    assert!(search.was_presented());
}
