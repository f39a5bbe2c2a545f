//! App state type

use std::sync::Arc;

use crate::guard::AccessGuard;
use crate::store::ContentStore;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub store: ContentStore,
	pub guard: AccessGuard,
}

impl AppState {
	/// Name of the storage backend in use
	pub fn storage_name(&self) -> &'static str {
		self.store.adapter().name()
	}
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	/// CORS origins, `*` allows any
	pub allowed_origins: Box<[Box<str>]>,
}

// vim: ts=4
