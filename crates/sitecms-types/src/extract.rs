//! Custom Axum extractors for sitecms-specific types.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::utils::validate_site_id;

// SiteId //
//********//
/// Site id taken from the `{site_id}` path segment, validated
#[derive(Clone, Debug)]
pub struct SiteId(pub Box<str>);

impl<S> FromRequestParts<S> for SiteId
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		let Path(site_id) = Path::<String>::from_request_parts(parts, state)
			.await
			.map_err(|err| Error::ValidationError(err.body_text()))?;
		validate_site_id(&site_id)?;
		Ok(SiteId(site_id.into()))
	}
}

// JsonBody //
//**********//
/// `Json` body whose rejections answer like every other `Error`
#[derive(Clone, Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let Json(value) = Json::<T>::from_request(req, state)
			.await
			.map_err(|err| Error::ValidationError(err.body_text()))?;
		Ok(JsonBody(value))
	}
}

// vim: ts=4
