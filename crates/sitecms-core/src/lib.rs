//! Core of sitecms.
//!
//! The content store owns every persisted record, the access guard owns
//! credential lookup and comparison. Handlers authenticate through the guard
//! before they touch the store.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod extract;
pub mod guard;
pub mod prelude;
pub mod store;

pub use app::{App, AppBuilderOpts, AppState, VERSION};
pub use extract::{AuthToken, JsonBody, SiteId};
pub use guard::AccessGuard;
pub use store::ContentStore;

// vim: ts=4
