//! Public read handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::prelude::*;
use sitecms_core::extract::SiteId;
use sitecms_types::types::{Hours, MenuItem, Service, SiteContent, SiteListItem};

/// GET /api/sites/{site_id} - Full content record
pub async fn get_site(
	State(app): State<App>,
	SiteId(site_id): SiteId,
) -> ClResult<(StatusCode, Json<SiteContent>)> {
	let content = app.store.load(&site_id).await?;
	Ok((StatusCode::OK, Json(content)))
}

/// GET /api/sites/{site_id}/hours
pub async fn get_hours(
	State(app): State<App>,
	SiteId(site_id): SiteId,
) -> ClResult<(StatusCode, Json<Hours>)> {
	let content = app.store.load(&site_id).await?;
	Ok((StatusCode::OK, Json(content.hours)))
}

/// GET /api/sites/{site_id}/services
pub async fn get_services(
	State(app): State<App>,
	SiteId(site_id): SiteId,
) -> ClResult<(StatusCode, Json<Vec<Service>>)> {
	let content = app.store.load(&site_id).await?;
	Ok((StatusCode::OK, Json(content.services)))
}

/// GET /api/sites/{site_id}/menu
pub async fn get_menu(
	State(app): State<App>,
	SiteId(site_id): SiteId,
) -> ClResult<(StatusCode, Json<Vec<MenuItem>>)> {
	let content = app.store.load(&site_id).await?;
	Ok((StatusCode::OK, Json(content.menu_items)))
}

/// GET /api/sites - Every stored site with its business name
pub async fn list_sites(State(app): State<App>) -> ClResult<(StatusCode, Json<Vec<SiteListItem>>)> {
	let sites = app.store.list_sites().await?;
	Ok((StatusCode::OK, Json(sites)))
}

// vim: ts=4
