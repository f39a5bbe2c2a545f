//! sitecms: a multi-tenant site content service.
//!
//! Each site has one business profile record (contact data, hours, services,
//! staff, menu, promotions). Reads are public, updates need the site
//! credential and new sites need the admin credential.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod prelude;
pub mod routes;

mod handler;

pub use app::AppBuilder;
pub use sitecms_core::{App, AppBuilderOpts, AppState, VERSION};
pub use sitecms_types::{error, site_adapter, types};

// vim: ts=4
