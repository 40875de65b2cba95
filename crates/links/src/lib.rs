//! Deep link and universal link handling.
//!
//! Both registries are plain values owned by the host (no process-wide
//! statics). The host constructs them at startup, routes every link the
//! platform delivers through `handle_incoming`, and exposes them on their
//! channels:
//!
//! | registry | method channel | stream |
//! |---|---|---|
//! | [`DeepLinks`] | `apz_deeplink/method` | `apz_deeplink/events` (raw string) |
//! | [`UniversalLinks`] | `apz_universal_linking` | `apz_universal_linking:onLinkReceived` ([`LinkData`]) |

mod deep;
mod parse;
mod universal;

pub use apz_events::LinkData;
pub use deep::DeepLinks;
pub use parse::{parse_link, LinkError};
pub use universal::UniversalLinks;
