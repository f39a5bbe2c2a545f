//! Access guard tests
//!
//! Credential resolution, token checks, login and admin gated site creation

use std::{collections::HashMap, sync::Arc};

use sitecms_core::{AccessGuard, ContentStore};
use sitecms_site_adapter_fs::SiteAdapterFs;
use sitecms_types::error::Error;
use sitecms_types::types::{FieldUpdate, MenuItem};
use tempfile::TempDir;

const ADMIN: &str = "admin-secret";

async fn create_test_guard() -> (AccessGuard, ContentStore, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = Arc::new(SiteAdapterFs::new(temp_dir.path()).await.expect("Failed to create adapter"));
	let fallback = HashMap::from([("fritz-salon".into(), "demo123".into())]);
	let guard = AccessGuard::new(adapter.clone(), fallback, Some(ADMIN.into()));
	(guard, ContentStore::new(adapter), temp_dir)
}

#[tokio::test]
async fn test_authenticate_missing_token() {
	let (guard, _store, _temp) = create_test_guard().await;

	assert!(matches!(guard.authenticate("fritz-salon", None).await, Err(Error::Unauthorized)));
	assert!(matches!(guard.authenticate("fritz-salon", Some("")).await, Err(Error::Unauthorized)));
}

#[tokio::test]
async fn test_authenticate_with_fallback_credential() {
	let (guard, _store, _temp) = create_test_guard().await;

	guard.authenticate("fritz-salon", Some("demo123")).await.expect("Correct token should pass");
	let result = guard.authenticate("fritz-salon", Some("demo124")).await;
	assert!(matches!(result, Err(Error::InvalidCredential)));
	// Comparison is exact
	let result = guard.authenticate("fritz-salon", Some("DEMO123")).await;
	assert!(matches!(result, Err(Error::InvalidCredential)));
}

#[tokio::test]
async fn test_unknown_site_never_authenticates() {
	let (guard, _store, _temp) = create_test_guard().await;

	assert!(guard.resolve_credential("nobody").await.expect("resolve").is_none());
	let result = guard.authenticate("nobody", Some("anything")).await;
	assert!(matches!(result, Err(Error::InvalidCredential)));
}

#[tokio::test]
async fn test_durable_credential_overrides_fallback() {
	let (guard, _store, _temp) = create_test_guard().await;

	guard
		.create_site("fritz-salon", "Fritz Salon", "new-pass", Some(ADMIN))
		.await
		.expect("Failed to create site");

	guard.authenticate("fritz-salon", Some("new-pass")).await.expect("Durable credential");
	let result = guard.authenticate("fritz-salon", Some("demo123")).await;
	assert!(matches!(result, Err(Error::InvalidCredential)));
}

#[tokio::test]
async fn test_login() {
	let (guard, _store, _temp) = create_test_guard().await;

	let token = guard.login("fritz-salon", "demo123").await.expect("Login should succeed");
	assert_eq!(&*token, "demo123");
	assert!(matches!(guard.login("fritz-salon", "nope").await, Err(Error::InvalidCredential)));
	assert!(matches!(guard.login("fritz-salon", "").await, Err(Error::InvalidCredential)));
}

#[tokio::test]
async fn test_create_site_requires_admin() {
	let (guard, store, _temp) = create_test_guard().await;

	let result = guard.create_site("new-site", "New", "pw", Some("wrong")).await;
	assert!(matches!(result, Err(Error::Forbidden)));
	let result = guard.create_site("new-site", "New", "pw", None).await;
	assert!(matches!(result, Err(Error::Forbidden)));

	assert!(store.list_sites().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_create_site_disabled_without_admin_credential() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = Arc::new(SiteAdapterFs::new(temp_dir.path()).await.expect("adapter"));
	let guard = AccessGuard::new(adapter, HashMap::new(), Some("".into()));

	let result = guard.create_site("new-site", "New", "pw", Some("")).await;
	assert!(matches!(result, Err(Error::Forbidden)));
}

#[tokio::test]
async fn test_create_site_validates_input() {
	let (guard, _store, _temp) = create_test_guard().await;

	let result = guard.create_site("new-site", "  ", "pw", Some(ADMIN)).await;
	assert!(matches!(result, Err(Error::ValidationError(_))));
	let result = guard.create_site("new-site", "New", "", Some(ADMIN)).await;
	assert!(matches!(result, Err(Error::ValidationError(_))));
	let result = guard.create_site("new site", "New", "pw", Some(ADMIN)).await;
	assert!(matches!(result, Err(Error::ValidationError(_))));
}

#[tokio::test]
async fn test_create_site_twice() {
	let (guard, _store, _temp) = create_test_guard().await;

	guard.create_site("new-site", "New", "first", Some(ADMIN)).await.expect("First create");
	let result = guard.create_site("new-site", "New", "second", Some(ADMIN)).await;

	assert!(matches!(result, Err(Error::AlreadyExists)));
	let credential = guard.resolve_credential("new-site").await.expect("resolve");
	assert_eq!(credential.as_deref(), Some("first"));
}

#[tokio::test]
async fn test_jw_cafe_scenario() {
	let (guard, store, _temp) = create_test_guard().await;

	let content = store.load("jw-cafe").await.expect("Load should not fail");
	assert_eq!(&*content.business_name, "Jw Cafe");
	assert_eq!(&*content.hours.monday, "Closed");

	guard.create_site("jw-cafe", "JW Cafe", "secret1", Some(ADMIN)).await.expect("Create");
	guard.authenticate("jw-cafe", Some("secret1")).await.expect("Authenticate");

	store
		.merge_field(
			"jw-cafe",
			FieldUpdate::MenuItems(vec![MenuItem {
				id: None,
				name: "Latte".into(),
				description: None,
				price: "$4".into(),
				category: None,
			}]),
		)
		.await
		.expect("Merge");

	let content = store.load("jw-cafe").await.expect("Load");
	assert_eq!(content.menu_items[0].id.as_deref(), Some("menu-0"));
	assert_eq!(&*content.business_name, "JW Cafe");
}

// vim: ts=4
