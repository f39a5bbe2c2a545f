//! Site credential lookup

use sqlx::{Row, SqlitePool};

use crate::utils::*;
use sitecms::prelude::*;

/// Read the stored credential of a site
pub(crate) async fn read(db: &SqlitePool, site_id: &str) -> ClResult<Option<Box<str>>> {
	let res = sqlx::query("SELECT password FROM site_passwords WHERE site_id = ?1")
		.bind(site_id)
		.fetch_optional(db)
		.await
		.map_err(db_err)?;

	match res {
		None => Ok(None),
		Some(row) => {
			let password: String = row.try_get("password").map_err(db_err)?;
			Ok(Some(password.into()))
		}
	}
}

// vim: ts=4
