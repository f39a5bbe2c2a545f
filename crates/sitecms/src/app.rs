//! App builder - constructs and runs the sitecms application

use std::{collections::HashMap, sync::Arc};

use crate::prelude::*;
use crate::routes;
use sitecms_core::{AccessGuard, AppBuilderOpts, AppState, ContentStore, VERSION};
use sitecms_types::site_adapter::SiteAdapter;

pub struct AppBuilder {
	opts: AppBuilderOpts,
	site_adapter: Option<Arc<dyn SiteAdapter>>,
	admin_password: Option<Box<str>>,
	fallback_credentials: HashMap<Box<str>, Box<str>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		// Several builders may exist in one process (tests), keep the first subscriber
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:8000".into(),
				allowed_origins: Box::new(["*".into()]),
			},
			site_adapter: None,
			admin_password: None,
			fallback_credentials: HashMap::new(),
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn allowed_origins(
		&mut self,
		allowed_origins: impl IntoIterator<Item = impl Into<Box<str>>>,
	) -> &mut Self {
		self.opts.allowed_origins = allowed_origins.into_iter().map(Into::into).collect();
		self
	}

	// Credentials
	pub fn admin_password(&mut self, admin_password: impl Into<Box<str>>) -> &mut Self {
		self.admin_password = Some(admin_password.into());
		self
	}
	/// Credential used for a site that has none stored
	pub fn fallback_credential(
		&mut self,
		site_id: impl Into<Box<str>>,
		password: impl Into<Box<str>>,
	) -> &mut Self {
		self.fallback_credentials.insert(site_id.into(), password.into());
		self
	}

	// Adapters
	pub fn site_adapter(&mut self, site_adapter: Arc<dyn SiteAdapter>) -> &mut Self {
		self.site_adapter = Some(site_adapter);
		self
	}

	/// Assembles the shared app state
	pub fn build(self) -> ClResult<App> {
		let Some(site_adapter) = self.site_adapter else {
			error!("FATAL: No site adapter configured");
			return Err(Error::Internal("No site adapter configured".to_string()));
		};
		if self.admin_password.is_none() {
			warn!("No admin password configured, site creation is disabled");
		}

		let guard =
			AccessGuard::new(site_adapter.clone(), self.fallback_credentials, self.admin_password);
		Ok(Arc::new(AppState {
			opts: self.opts,
			store: ContentStore::new(site_adapter),
			guard,
		}))
	}

	pub async fn run(self) -> ClResult<()> {
		info!("sitecms V{}", VERSION);

		let app = self.build()?;
		info!("Storage backend: {}", app.storage_name());

		let router = routes::init(app.clone());
		let listener = tokio::net::TcpListener::bind(&*app.opts.listen).await?;
		info!("Listening on HTTP {}", app.opts.listen);

		axum::serve(listener, router).await?;
		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
