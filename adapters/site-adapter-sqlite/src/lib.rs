//! SQLite backed site adapter.
//!
//! One `site_content` row per site, nested collections as JSON text
//! columns, and a `site_passwords` table for the durable credentials.

#![forbid(unsafe_code)]

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};

use sitecms::{
	prelude::*,
	site_adapter::SiteAdapter,
	types::{SiteContent, SiteListItem},
	utils::validate_site_id,
};

mod credential;
mod schema;
mod site;
mod utils;

pub const DB_FILE: &str = "sites.db";

#[derive(Debug)]
pub struct SiteAdapterSqlite {
	db: SqlitePool,
}

impl SiteAdapterSqlite {
	/// Opens (or creates) the database inside `dir`
	pub async fn new(dir: impl AsRef<Path>) -> ClResult<Self> {
		tokio::fs::create_dir_all(dir.as_ref()).await?;
		let path = dir.as_ref().join(DB_FILE);

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(&path)
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		info!("Site storage (sqlite) at {:?}", &path);
		Ok(Self { db })
	}
}

#[async_trait]
impl SiteAdapter for SiteAdapterSqlite {
	fn name(&self) -> &'static str {
		"sqlite"
	}

	// Content management
	//********************
	async fn read_site_content(&self, site_id: &str) -> ClResult<Option<SiteContent>> {
		validate_site_id(site_id)?;
		site::read(&self.db, site_id).await
	}

	async fn write_site_content(&self, content: &SiteContent) -> ClResult<()> {
		validate_site_id(&content.site_id)?;
		site::write(&self.db, content).await
	}

	async fn list_sites(&self) -> ClResult<Vec<SiteListItem>> {
		site::list(&self.db).await
	}

	// Credential management
	//***********************
	async fn read_site_credential(&self, site_id: &str) -> ClResult<Option<Box<str>>> {
		validate_site_id(site_id)?;
		credential::read(&self.db, site_id).await
	}

	async fn create_site(&self, content: &SiteContent, credential: &str) -> ClResult<()> {
		validate_site_id(&content.site_id)?;
		site::create(&self.db, content, credential).await
	}
}

// vim: ts=4
