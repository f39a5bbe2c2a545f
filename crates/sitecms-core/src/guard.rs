//! Access guard
//!
//! Resolves the credential of a site and checks caller tokens against it.
//! The durable credential stored by the adapter wins, the injected fallback
//! table is consulted only for sites without one. A site with neither can
//! not be authenticated at all.

use std::{collections::HashMap, sync::Arc};

use crate::prelude::*;
use sitecms_types::site_adapter::SiteAdapter;
use sitecms_types::types::SiteContent;
use sitecms_types::utils::validate_site_id;

#[derive(Debug, Clone)]
pub struct AccessGuard {
	adapter: Arc<dyn SiteAdapter>,
	fallback: HashMap<Box<str>, Box<str>>,
	admin_credential: Option<Box<str>>,
}

impl AccessGuard {
	pub fn new(
		adapter: Arc<dyn SiteAdapter>,
		fallback: HashMap<Box<str>, Box<str>>,
		admin_credential: Option<Box<str>>,
	) -> Self {
		// An empty admin credential would let an empty token through
		let admin_credential = admin_credential.filter(|cred| !cred.is_empty());
		Self { adapter, fallback, admin_credential }
	}

	/// Credential of a site, `None` if it can not be authenticated
	pub async fn resolve_credential(&self, site_id: &str) -> ClResult<Option<Box<str>>> {
		if let Some(credential) = self.adapter.read_site_credential(site_id).await? {
			return Ok(Some(credential));
		}
		Ok(self.fallback.get(site_id).cloned())
	}

	async fn check_credential(&self, site_id: &str, token: &str) -> ClResult<()> {
		match self.resolve_credential(site_id).await? {
			Some(credential) if *credential == *token => Ok(()),
			_ => {
				warn!("Invalid credential for site {}", site_id);
				Err(Error::InvalidCredential)
			}
		}
	}

	/// Checks a caller token before a mutation of `site_id`
	pub async fn authenticate(&self, site_id: &str, token: Option<&str>) -> ClResult<()> {
		let Some(token) = token.filter(|token| !token.is_empty()) else {
			warn!("Missing auth token for site {}", site_id);
			return Err(Error::Unauthorized);
		};
		self.check_credential(site_id, token).await
	}

	/// Checks a password, returning it as the session token
	pub async fn login(&self, site_id: &str, password: &str) -> ClResult<Box<str>> {
		validate_site_id(site_id)?;
		if password.is_empty() {
			warn!("Empty password for site {}", site_id);
			return Err(Error::InvalidCredential);
		}
		self.check_credential(site_id, password).await?;
		info!("Login to site {}", site_id);
		Ok(password.into())
	}

	/// Creates a site with its credential, gated by the admin credential
	pub async fn create_site(
		&self,
		site_id: &str,
		business_name: &str,
		password: &str,
		admin_token: Option<&str>,
	) -> ClResult<SiteContent> {
		match (self.admin_credential.as_deref(), admin_token) {
			(Some(admin), Some(token)) if admin == token => {}
			_ => {
				warn!("Site creation refused: admin auth failed");
				return Err(Error::Forbidden);
			}
		}

		validate_site_id(site_id)?;
		if business_name.trim().is_empty() {
			return Err(Error::ValidationError("business_name must not be empty".into()));
		}
		if password.is_empty() {
			return Err(Error::ValidationError("password must not be empty".into()));
		}

		let content = SiteContent::new(site_id, business_name);
		self.adapter.create_site(&content, password).await?;
		info!("Created site {}", site_id);
		Ok(content)
	}
}

// vim: ts=4
