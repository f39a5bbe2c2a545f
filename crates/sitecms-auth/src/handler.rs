use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use sitecms_core::extract::{AuthToken, JsonBody};

/// # Login
#[derive(Deserialize)]
pub struct LoginReq {
	site_id: String,
	password: String,
}

#[derive(Debug, Serialize)]
pub struct Login {
	token: Box<str>,
	site_id: Box<str>,
}

/// POST /api/auth/login - The returned token is the site password
pub async fn post_login(
	State(app): State<App>,
	JsonBody(req): JsonBody<LoginReq>,
) -> ClResult<(StatusCode, Json<Login>)> {
	let token = app.guard.login(&req.site_id, &req.password).await?;
	Ok((StatusCode::OK, Json(Login { token, site_id: req.site_id.into() })))
}

/// # Create site
#[derive(Deserialize)]
pub struct CreateSiteReq {
	site_id: String,
	business_name: String,
	password: String,
}

#[derive(Debug, Serialize)]
pub struct CreateSiteRes {
	status: &'static str,
	site_id: Box<str>,
}

/// POST /api/admin/sites - Gated by the admin credential in `X-Auth-Token`
pub async fn post_create_site(
	State(app): State<App>,
	admin_token: AuthToken,
	JsonBody(req): JsonBody<CreateSiteReq>,
) -> ClResult<(StatusCode, Json<CreateSiteRes>)> {
	let content = app
		.guard
		.create_site(&req.site_id, &req.business_name, &req.password, admin_token.as_deref())
		.await?;
	Ok((StatusCode::OK, Json(CreateSiteRes { status: "created", site_id: content.site_id })))
}

// vim: ts=4
