//! Adapter that persists site content records and site credentials.
//!
//! Every backend stores one record per site id. Nested collections are the
//! backend's business: a document store keeps the record as one JSON blob,
//! a relational store keeps one JSON text column per collection.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;
use crate::types::{SiteContent, SiteListItem};

#[async_trait]
pub trait SiteAdapter: Debug + Send + Sync {
	/// Short backend name, reported by the health probe
	fn name(&self) -> &'static str;

	// Content management
	//********************
	/// Reads the stored record of a site, `None` if nothing is stored
	async fn read_site_content(&self, site_id: &str) -> ClResult<Option<SiteContent>>;

	/// Inserts or fully replaces the record stored under `content.site_id`
	async fn write_site_content(&self, content: &SiteContent) -> ClResult<()>;

	/// Lists every stored site ordered by site id
	async fn list_sites(&self) -> ClResult<Vec<SiteListItem>>;

	// Credential management
	//***********************
	/// Reads the durable credential of a site, `None` if there is none
	async fn read_site_credential(&self, site_id: &str) -> ClResult<Option<Box<str>>>;

	/// Creates a site record together with its credential
	///
	/// Both are stored or neither is. Fails with `Error::AlreadyExists` if a
	/// content record is already stored for the site.
	async fn create_site(&self, content: &SiteContent, credential: &str) -> ClResult<()>;
}

// vim: ts=4
