//! Error type shared by the core, the handlers and every storage adapter.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// No token was supplied for an owner-only operation
	Unauthorized,
	/// A token was supplied but does not match the site credential
	InvalidCredential,
	/// Admin-gated operation called with a wrong admin token
	Forbidden,
	/// Site creation collided with an existing record
	AlreadyExists,
	ValidationError(String),
	DbError,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::Unauthorized => write!(f, "missing auth token"),
			Error::InvalidCredential => write!(f, "invalid credentials"),
			Error::Forbidden => write!(f, "admin auth required"),
			Error::AlreadyExists => write!(f, "site already exists"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::DbError => write!(f, "storage error"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl Error {
	pub fn status_code(&self) -> StatusCode {
		match self {
			Error::Unauthorized | Error::InvalidCredential => StatusCode::UNAUTHORIZED,
			Error::Forbidden => StatusCode::FORBIDDEN,
			Error::AlreadyExists => StatusCode::CONFLICT,
			Error::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
			Error::DbError => StatusCode::SERVICE_UNAVAILABLE,
			Error::Internal(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = self.status_code();
		let detail = match &self {
			// Infrastructure details stay in the log
			Error::DbError | Error::Internal(_) | Error::Io(_) => {
				tracing::error!("request failed: {}", self);
				"internal server error".to_string()
			}
			_ => self.to_string(),
		};
		(status, Json(json!({ "detail": detail }))).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_auth_errors_map_to_401() {
		assert_eq!(Error::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
		assert_eq!(Error::InvalidCredential.status_code(), StatusCode::UNAUTHORIZED);
		assert_eq!(Error::Forbidden.status_code(), StatusCode::FORBIDDEN);
		assert_eq!(Error::AlreadyExists.status_code(), StatusCode::CONFLICT);
	}

	#[test]
	fn test_infrastructure_errors() {
		assert_eq!(Error::DbError.status_code(), StatusCode::SERVICE_UNAVAILABLE);
		let io = Error::from(std::io::Error::other("disk gone"));
		assert_eq!(io.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}

// vim: ts=4
