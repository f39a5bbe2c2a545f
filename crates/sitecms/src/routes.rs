use axum::{
	Router,
	http::HeaderValue,
	routing::{get, post, put},
};
use tower_http::{
	cors::{AllowOrigin, Any, CorsLayer},
	trace::TraceLayer,
};

use crate::handler;
use crate::prelude::*;
use sitecms_auth as auth;
use sitecms_site as site;

fn init_cors(allowed_origins: &[Box<str>]) -> CorsLayer {
	if allowed_origins.is_empty() || allowed_origins.iter().any(|origin| &**origin == "*") {
		return CorsLayer::permissive();
	}

	let origins: Vec<HeaderValue> = allowed_origins
		.iter()
		.filter_map(|origin| {
			HeaderValue::from_str(origin)
				.inspect_err(|_| warn!("Ignoring invalid CORS origin: {}", origin))
				.ok()
		})
		.collect();
	CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
}

pub fn init(app: App) -> Router {
	let public_router = Router::new()
		.route("/", get(handler::get_root))
		.route("/health", get(handler::get_health))
		.route("/api/sites", get(site::handler::list_sites))
		.route("/api/sites/{site_id}", get(site::handler::get_site))
		.route("/api/sites/{site_id}/hours", get(site::handler::get_hours))
		.route("/api/sites/{site_id}/services", get(site::handler::get_services))
		.route("/api/sites/{site_id}/menu", get(site::handler::get_menu))
		.route("/api/auth/login", post(auth::handler::post_login));

	// Handlers authenticate the X-Auth-Token header themselves
	let admin_router = Router::new()
		.route(
			"/api/admin/sites",
			post(auth::handler::post_create_site).put(site::update::put_site_named_sites),
		)
		.route("/api/admin/{site_id}", put(site::update::put_site))
		.route("/api/admin/{site_id}/hours", put(site::update::put_hours))
		.route("/api/admin/{site_id}/services", put(site::update::put_services))
		.route("/api/admin/{site_id}/menu", put(site::update::put_menu))
		.route("/api/admin/{site_id}/staff", put(site::update::put_staff))
		.route("/api/admin/{site_id}/promotions", put(site::update::put_promotions));

	let cors = init_cors(&app.opts.allowed_origins);

	Router::new()
		.merge(public_router)
		.merge(admin_router)
		.layer(cors)
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
