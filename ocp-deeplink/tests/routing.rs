//! Routing behavior of the stock destinations.

use ocp_deeplink::testing::{ExecutionLog, RecordingLink};
use ocp_deeplink::{Deeplink, HomeDeeplink, ProfileDeeplink, Router, SettingsDeeplink};

#[test]
fn each_link_presents_only_its_own_screen() {
    let router = Router::new();
    let home = HomeDeeplink::new();
    let profile = ProfileDeeplink::new();

    router.execute(&home);

    assert!(home.was_presented());
    assert!(!profile.was_presented());

    router.execute(&profile);

    assert!(profile.was_presented());
}

#[test]
fn settings_link_routes_like_any_other() {
    let router = Router::new();
    let settings = SettingsDeeplink::new();

    assert!(!settings.was_presented());
    router.execute(&settings);
    assert!(settings.was_presented());
}

#[test]
fn router_invokes_a_link_exactly_once_per_dispatch() {
    let log = ExecutionLog::new();
    let link = RecordingLink::new("home", &log);
    let router = Router::new();

    router.execute(&link);
    assert_eq!(link.executions(), 1);

    router.execute(&link);
    assert_eq!(link.executions(), 2);
    assert_eq!(log.len(), 2);
}

#[test]
fn dispatch_order_follows_call_order() {
    let log = ExecutionLog::new();
    let home = RecordingLink::new("home", &log);
    let profile = RecordingLink::new("profile", &log);
    let router = Router::new();

    router.execute(&home);
    router.execute(&profile);
    router.execute(&home);

    assert_eq!(log.entries(), vec!["home", "profile", "home"]);
}

#[test]
fn router_accepts_trait_objects() {
    let log = ExecutionLog::new();
    let router = Router::new();
    let links: Vec<Box<dyn Deeplink>> = vec![
        Box::new(RecordingLink::new("first", &log)),
        Box::new(RecordingLink::new("second", &log)),
    ];

    for link in &links {
        router.execute(link);
    }

    assert_eq!(log.entries(), vec!["first", "second"]);
}
