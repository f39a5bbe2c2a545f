//! Owner update handlers
//!
//! Every handler authenticates the `X-Auth-Token` header against the site
//! credential before it touches the store.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::prelude::*;
use sitecms_core::extract::{AuthToken, JsonBody, SiteId};
use sitecms_types::types::{
	FieldUpdate, Hours, MenuItem, Promotion, Service, SiteContent, StaffMember,
};

#[derive(Debug, Serialize)]
pub struct SaveResponse {
	status: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	site_id: Option<Box<str>>,
}

impl SaveResponse {
	fn saved() -> Self {
		Self { status: "saved", site_id: None }
	}
}

async fn merge(
	app: &App,
	site_id: &str,
	token: &AuthToken,
	update: FieldUpdate,
) -> ClResult<(StatusCode, Json<SaveResponse>)> {
	app.guard.authenticate(site_id, token.as_deref()).await?;
	let field = update.field_name();
	app.store.merge_field(site_id, update).await?;
	info!("Site {} updated {}", site_id, field);
	Ok((StatusCode::OK, Json(SaveResponse::saved())))
}

async fn replace(
	app: &App,
	site_id: Box<str>,
	token: &AuthToken,
	mut content: SiteContent,
) -> ClResult<(StatusCode, Json<SaveResponse>)> {
	app.guard.authenticate(&site_id, token.as_deref()).await?;

	if content.site_id != site_id {
		debug!("Overriding body site_id {:?} with {}", content.site_id, site_id);
	}
	content.site_id = site_id;
	app.store.save_full(&content).await?;

	info!("Site {} saved", content.site_id);
	Ok((StatusCode::OK, Json(SaveResponse { status: "saved", site_id: Some(content.site_id) })))
}

/// PUT /api/admin/{site_id} - Replace the whole record
pub async fn put_site(
	State(app): State<App>,
	SiteId(site_id): SiteId,
	token: AuthToken,
	JsonBody(content): JsonBody<SiteContent>,
) -> ClResult<(StatusCode, Json<SaveResponse>)> {
	replace(&app, site_id, &token, content).await
}

/// PUT /api/admin/sites - Replace the record of the site named `sites`
///
/// The static site creation route shadows `/api/admin/{site_id}` for this id.
pub async fn put_site_named_sites(
	State(app): State<App>,
	token: AuthToken,
	JsonBody(content): JsonBody<SiteContent>,
) -> ClResult<(StatusCode, Json<SaveResponse>)> {
	replace(&app, "sites".into(), &token, content).await
}

/// PUT /api/admin/{site_id}/hours
pub async fn put_hours(
	State(app): State<App>,
	SiteId(site_id): SiteId,
	token: AuthToken,
	JsonBody(hours): JsonBody<Hours>,
) -> ClResult<(StatusCode, Json<SaveResponse>)> {
	merge(&app, &site_id, &token, FieldUpdate::Hours(hours)).await
}

/// PUT /api/admin/{site_id}/services
pub async fn put_services(
	State(app): State<App>,
	SiteId(site_id): SiteId,
	token: AuthToken,
	JsonBody(services): JsonBody<Vec<Service>>,
) -> ClResult<(StatusCode, Json<SaveResponse>)> {
	merge(&app, &site_id, &token, FieldUpdate::Services(services)).await
}

/// PUT /api/admin/{site_id}/menu
pub async fn put_menu(
	State(app): State<App>,
	SiteId(site_id): SiteId,
	token: AuthToken,
	JsonBody(menu_items): JsonBody<Vec<MenuItem>>,
) -> ClResult<(StatusCode, Json<SaveResponse>)> {
	merge(&app, &site_id, &token, FieldUpdate::MenuItems(menu_items)).await
}

/// PUT /api/admin/{site_id}/staff
pub async fn put_staff(
	State(app): State<App>,
	SiteId(site_id): SiteId,
	token: AuthToken,
	JsonBody(staff): JsonBody<Vec<StaffMember>>,
) -> ClResult<(StatusCode, Json<SaveResponse>)> {
	merge(&app, &site_id, &token, FieldUpdate::Staff(staff)).await
}

/// PUT /api/admin/{site_id}/promotions
pub async fn put_promotions(
	State(app): State<App>,
	SiteId(site_id): SiteId,
	token: AuthToken,
	JsonBody(promotions): JsonBody<Vec<Promotion>>,
) -> ClResult<(StatusCode, Json<SaveResponse>)> {
	merge(&app, &site_id, &token, FieldUpdate::Promotions(promotions)).await
}

// vim: ts=4
