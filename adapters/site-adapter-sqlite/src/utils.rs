//! Shared utilities for the SQLite adapter
//!
//! Error mapping and JSON column helpers used by the domain modules.

use serde::{Serialize, de::DeserializeOwned};

use sitecms::prelude::*;

/// Log database error for debugging
pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Map a sqlx error to a ClResult error, logging it first
pub(crate) fn db_err(err: sqlx::Error) -> Error {
	inspect(&err);
	Error::DbError
}

/// Decode a JSON text column, falling back to `empty` for NULL or blank values
pub(crate) fn parse_json_column<T: DeserializeOwned>(
	column: &str,
	value: Option<&str>,
	empty: &str,
) -> ClResult<T> {
	let value = match value {
		Some(v) if !v.trim().is_empty() => v,
		_ => empty,
	};
	serde_json::from_str(value).map_err(|err| {
		warn!("DB: invalid JSON in column {}: {}", column, err);
		Error::DbError
	})
}

/// Encode a value for a JSON text column
pub(crate) fn to_json_column<T: Serialize>(value: &T) -> ClResult<String> {
	serde_json::to_string(value).map_err(|err| Error::Internal(err.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use sitecms::types::{Hours, Service};

	#[test]
	fn test_parse_json_column_defaults() {
		let hours: Hours = parse_json_column("hours_json", None, "{}").unwrap();
		assert_eq!(hours, Hours::default());

		let services: Vec<Service> = parse_json_column("services_json", Some("  "), "[]").unwrap();
		assert!(services.is_empty());
	}

	#[test]
	fn test_parse_json_column_invalid() {
		let res: ClResult<Vec<Service>> = parse_json_column("services_json", Some("{oops"), "[]");
		assert!(matches!(res, Err(Error::DbError)));
	}

	#[test]
	fn test_to_json_column_failure_is_internal() {
		let map = std::collections::HashMap::from([((1, 2), "non-string key")]);
		assert!(matches!(to_json_column(&map), Err(Error::Internal(_))));
	}
}

// vim: ts=4
