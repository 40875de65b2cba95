//! Example: Replay canned platform lifecycle sequences through both trackers.
//!
//! Run with: cargo run -p apz-lifecycle --example replay_lifecycle
//!
//! Pass `raw` as the first argument to disable repeat collapsing on the
//! counter tracker.

use apz_lifecycle::{
    new_callback, AppNotification, ApplicationState, CounterConfig, LifecycleTracker,
    PlatformTracker, StaticStateProvider, TrackerConfig, TrackerVariant, UnitEvent,
    TRIM_MEMORY_UI_HIDDEN,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,apz_lifecycle=debug")),
        )
        .init();

    let collapse_repeats = std::env::args().nth(1).as_deref() != Some("raw");
    let provider = Arc::new(StaticStateProvider::new(ApplicationState::Background));

    println!("=== Activity counter tracker (collapse_repeats = {collapse_repeats}) ===");
    let mut counter = PlatformTracker::from_config(
        TrackerConfig {
            variant: TrackerVariant::ActivityCounter,
            counter: CounterConfig { collapse_repeats },
        },
        provider.clone(),
    );
    counter.start(new_callback(|state| println!("  -> {state}")));
    for event in [
        UnitEvent::Created,
        UnitEvent::Started,
        UnitEvent::Resumed,
        // Permission dialog on top.
        UnitEvent::Paused,
        UnitEvent::Resumed,
        // Home button.
        UnitEvent::Paused,
        UnitEvent::Stopped,
        // Back from the launcher.
        UnitEvent::Started,
        UnitEvent::Resumed,
        UnitEvent::Paused,
        UnitEvent::Stopped,
        UnitEvent::Destroyed,
    ] {
        println!("{event:?}");
        counter.on_unit(event);
    }
    println!("TrimMemory({TRIM_MEMORY_UI_HIDDEN})");
    counter.on_trim_memory(TRIM_MEMORY_UI_HIDDEN);
    counter.stop();

    println!("\n=== Notification tracker (app starts in background) ===");
    let mut notification = PlatformTracker::from_config(
        TrackerConfig {
            variant: TrackerVariant::Notification,
            ..TrackerConfig::default()
        },
        provider,
    );
    notification.start(new_callback(|state| println!("  -> {state}")));
    for event in [
        AppNotification::DidEnterBackground,
        AppNotification::WillEnterForeground,
        AppNotification::DidBecomeActive,
        AppNotification::WillResignActive,
        AppNotification::WillResignActive,
        AppNotification::DidEnterBackground,
        AppNotification::WillTerminate,
    ] {
        println!("{event:?}");
        notification.on_notification(event);
    }
    notification.stop();

    Ok(())
}
