//! Content store tests
//!
//! Default records, full saves and partial field merges over the fs adapter

use std::sync::Arc;

use sitecms_core::ContentStore;
use sitecms_site_adapter_fs::SiteAdapterFs;
use sitecms_types::error::Error;
use sitecms_types::types::{CLOSED, FieldUpdate, Hours, Service, SiteContent, StaffMember};
use tempfile::TempDir;

async fn create_test_store() -> (ContentStore, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = SiteAdapterFs::new(temp_dir.path()).await.expect("Failed to create adapter");
	(ContentStore::new(Arc::new(adapter)), temp_dir)
}

fn service(id: Option<&str>, title: &str) -> Service {
	Service {
		id: id.map(Into::into),
		title: title.into(),
		description: "desc".into(),
		price: None,
		icon: None,
	}
}

#[tokio::test]
async fn test_load_unknown_site_gives_default() {
	let (store, _temp) = create_test_store().await;

	let content = store.load("clater-jewelers").await.expect("Load should not fail");

	assert_eq!(&*content.site_id, "clater-jewelers");
	assert_eq!(&*content.business_name, "Clater Jewelers");
	assert_eq!(content.hours, Hours::default());
	assert_eq!(&*content.hours.sunday, CLOSED);
	assert!(content.services.is_empty());
	assert!(content.staff.is_empty());
	assert!(content.menu_items.is_empty());
	assert!(content.promotions.is_empty());
	assert!(content.tagline.is_none());
}

#[tokio::test]
async fn test_load_is_side_effect_free() {
	let (store, _temp) = create_test_store().await;

	store.load("jw-cafe").await.expect("Load should not fail");

	let sites = store.list_sites().await.expect("Failed to list sites");
	assert!(sites.is_empty());
}

#[tokio::test]
async fn test_save_full_round_trip() {
	let (store, _temp) = create_test_store().await;
	let mut content = SiteContent::new("fritz-salon", "Fritz Salon");
	content.email = Some("hi@fritz.example".into());
	content.services.push(service(Some("svc-0"), "Cut"));

	store.save_full(&content).await.expect("Failed to save");
	let loaded = store.load("fritz-salon").await.expect("Failed to load");

	assert_eq!(loaded, content);
}

#[tokio::test]
async fn test_merge_field_backfills_ids() {
	let (store, _temp) = create_test_store().await;

	store
		.merge_field("fritz-salon", FieldUpdate::Services(vec![service(None, "Cut")]))
		.await
		.expect("Failed to merge");

	let loaded = store.load("fritz-salon").await.expect("Failed to load");
	assert_eq!(loaded.services[0].id.as_deref(), Some("svc-0"));
	// The default record was persisted along with the merged field
	assert_eq!(&*loaded.business_name, "Fritz Salon");
}

#[tokio::test]
async fn test_merge_field_leaves_other_fields() {
	let (store, _temp) = create_test_store().await;
	let mut content = SiteContent::new("fritz-salon", "Fritz Salon");
	content.staff.push(StaffMember {
		id: Some("staff-0".into()),
		name: "Fritz".into(),
		role: "Owner".into(),
		bio: None,
		image: None,
	});
	content.tagline = Some("Since 1990".into());
	store.save_full(&content).await.expect("Failed to save");

	let mut hours = Hours::default();
	hours.monday = "9-17".into();
	store.merge_field("fritz-salon", FieldUpdate::Hours(hours.clone())).await.expect("merge");

	let loaded = store.load("fritz-salon").await.expect("Failed to load");
	assert_eq!(loaded.hours, hours);
	assert_eq!(loaded.staff, content.staff);
	assert_eq!(loaded.tagline, content.tagline);
}

#[tokio::test]
async fn test_merge_field_reindexes_positionally() {
	let (store, _temp) = create_test_store().await;
	store
		.merge_field(
			"fritz-salon",
			FieldUpdate::Services(vec![service(None, "Cut"), service(None, "Color")]),
		)
		.await
		.expect("merge");

	// Keep the second service, add a new one in front without an id
	store
		.merge_field(
			"fritz-salon",
			FieldUpdate::Services(vec![service(None, "Shave"), service(Some("svc-1"), "Color")]),
		)
		.await
		.expect("merge");

	let loaded = store.load("fritz-salon").await.expect("Failed to load");
	let ids: Vec<Option<&str>> = loaded.services.iter().map(|s| s.id.as_deref()).collect();
	assert_eq!(ids, vec![Some("svc-0"), Some("svc-1")]);
}

#[tokio::test]
async fn test_invalid_site_id() {
	let (store, _temp) = create_test_store().await;

	let result = store.load("no/slashes").await;
	assert!(matches!(result, Err(Error::ValidationError(_))));
}

// vim: ts=4
