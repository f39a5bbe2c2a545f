//! Custom extractors for sitecms request data

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::prelude::*;

pub use sitecms_types::extract::{JsonBody, SiteId};

pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

// AuthToken //
//***********//
/// Token from the `X-Auth-Token` header, `None` if absent or empty
///
/// Non-ASCII bytes are kept (lossily decoded), so a present token always
/// reaches the credential check. Never rejects: whether a missing token is an
/// error is up to the guard.
#[derive(Clone, Debug)]
pub struct AuthToken(pub Option<Box<str>>);

impl AuthToken {
	pub fn as_deref(&self) -> Option<&str> {
		self.0.as_deref()
	}
}

impl<S> FromRequestParts<S> for AuthToken
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let token = parts
			.headers
			.get(AUTH_TOKEN_HEADER)
			.map(|value| String::from_utf8_lossy(value.as_bytes()))
			.filter(|token| !token.is_empty())
			.map(|token| token.into_owned().into_boxed_str());
		Ok(AuthToken(token))
	}
}

// vim: ts=4
