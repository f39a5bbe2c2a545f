//! Service level handlers

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::prelude::*;
use sitecms_core::VERSION;

/// GET /
pub async fn get_root() -> (StatusCode, Json<Value>) {
	(StatusCode::OK, Json(json!({ "service": "sitecms", "version": VERSION })))
}

/// GET /health - Liveness probe, reports the storage backend in use
pub async fn get_health(State(app): State<App>) -> (StatusCode, Json<Value>) {
	(
		StatusCode::OK,
		Json(json!({ "status": "ok", "version": VERSION, "storage": app.storage_name() })),
	)
}

// vim: ts=4
