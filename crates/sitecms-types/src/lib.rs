//! Shared types, the storage adapter trait, and core utilities for sitecms.
//!
//! Adapter crates depend only on this crate, so a storage backend can be
//! built and tested without pulling in the web stack of the server.

pub mod error;
pub mod extract;
pub mod prelude;
pub mod site_adapter;
pub mod types;
pub mod utils;

// vim: ts=4
