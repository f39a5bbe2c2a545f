//! Site content operations
//!
//! Reads, upserts and lists `site_content` rows, and creates a site row
//! together with its credential in one transaction.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::utils::*;
use sitecms::prelude::*;
use sitecms::types::{SiteContent, SiteListItem};

fn row_to_content(row: &SqliteRow) -> ClResult<SiteContent> {
	let hours_json: Option<&str> = row.try_get("hours_json").map_err(db_err)?;
	let services_json: Option<&str> = row.try_get("services_json").map_err(db_err)?;
	let staff_json: Option<&str> = row.try_get("staff_json").map_err(db_err)?;
	let menu_items_json: Option<&str> = row.try_get("menu_items_json").map_err(db_err)?;
	let promotions_json: Option<&str> = row.try_get("promotions_json").map_err(db_err)?;

	Ok(SiteContent {
		site_id: row.try_get::<String, _>("site_id").map_err(db_err)?.into(),
		business_name: row.try_get::<String, _>("business_name").map_err(db_err)?.into(),
		tagline: row.try_get::<Option<String>, _>("tagline").map_err(db_err)?.map(Into::into),
		phone: row.try_get::<Option<String>, _>("phone").map_err(db_err)?.map(Into::into),
		email: row.try_get::<Option<String>, _>("email").map_err(db_err)?.map(Into::into),
		address: row.try_get::<Option<String>, _>("address").map_err(db_err)?.map(Into::into),
		hours: parse_json_column("hours_json", hours_json, "{}")?,
		services: parse_json_column("services_json", services_json, "[]")?,
		staff: parse_json_column("staff_json", staff_json, "[]")?,
		menu_items: parse_json_column("menu_items_json", menu_items_json, "[]")?,
		promotions: parse_json_column("promotions_json", promotions_json, "[]")?,
	})
}

/// Collections encoded for their JSON text columns
struct EncodedCollections {
	hours: String,
	services: String,
	staff: String,
	menu_items: String,
	promotions: String,
}

impl EncodedCollections {
	fn new(content: &SiteContent) -> ClResult<Self> {
		Ok(Self {
			hours: to_json_column(&content.hours)?,
			services: to_json_column(&content.services)?,
			staff: to_json_column(&content.staff)?,
			menu_items: to_json_column(&content.menu_items)?,
			promotions: to_json_column(&content.promotions)?,
		})
	}
}

/// Read a site record by id
pub(crate) async fn read(db: &SqlitePool, site_id: &str) -> ClResult<Option<SiteContent>> {
	let res = sqlx::query(
		"SELECT site_id, business_name, tagline, phone, email, address,
		hours_json, services_json, staff_json, menu_items_json, promotions_json
		FROM site_content WHERE site_id = ?1",
	)
	.bind(site_id)
	.fetch_optional(db)
	.await
	.map_err(db_err)?;

	res.as_ref().map(row_to_content).transpose()
}

/// Insert or fully replace a site record
pub(crate) async fn write(db: &SqlitePool, content: &SiteContent) -> ClResult<()> {
	let cols = EncodedCollections::new(content)?;

	sqlx::query(
		"INSERT INTO site_content (site_id, business_name, tagline, phone, email, address,
			hours_json, services_json, staff_json, menu_items_json, promotions_json)
		VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
		ON CONFLICT(site_id) DO UPDATE SET
			business_name = excluded.business_name,
			tagline = excluded.tagline,
			phone = excluded.phone,
			email = excluded.email,
			address = excluded.address,
			hours_json = excluded.hours_json,
			services_json = excluded.services_json,
			staff_json = excluded.staff_json,
			menu_items_json = excluded.menu_items_json,
			promotions_json = excluded.promotions_json",
	)
	.bind(&*content.site_id)
	.bind(&*content.business_name)
	.bind(content.tagline.as_deref())
	.bind(content.phone.as_deref())
	.bind(content.email.as_deref())
	.bind(content.address.as_deref())
	.bind(cols.hours.as_str())
	.bind(cols.services.as_str())
	.bind(cols.staff.as_str())
	.bind(cols.menu_items.as_str())
	.bind(cols.promotions.as_str())
	.execute(db)
	.await
	.map_err(db_err)?;

	Ok(())
}

/// List every site ordered by id
pub(crate) async fn list(db: &SqlitePool) -> ClResult<Vec<SiteListItem>> {
	let rows = sqlx::query("SELECT site_id, business_name FROM site_content ORDER BY site_id")
		.fetch_all(db)
		.await
		.map_err(db_err)?;

	rows.iter()
		.map(|row| {
			Ok(SiteListItem {
				site_id: row.try_get::<String, _>("site_id").map_err(db_err)?.into(),
				business_name: row.try_get::<String, _>("business_name").map_err(db_err)?.into(),
			})
		})
		.collect()
}

/// Create a site row and its credential row atomically
pub(crate) async fn create(db: &SqlitePool, content: &SiteContent, credential: &str) -> ClResult<()> {
	let cols = EncodedCollections::new(content)?;
	let mut tx = db.begin().await.map_err(db_err)?;

	let res = sqlx::query(
		"INSERT INTO site_content (site_id, business_name, tagline, phone, email, address,
			hours_json, services_json, staff_json, menu_items_json, promotions_json)
		VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
	)
	.bind(&*content.site_id)
	.bind(&*content.business_name)
	.bind(content.tagline.as_deref())
	.bind(content.phone.as_deref())
	.bind(content.email.as_deref())
	.bind(content.address.as_deref())
	.bind(cols.hours.as_str())
	.bind(cols.services.as_str())
	.bind(cols.staff.as_str())
	.bind(cols.menu_items.as_str())
	.bind(cols.promotions.as_str())
	.execute(&mut *tx)
	.await;

	match res {
		Ok(_) => {}
		Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
			return Err(Error::AlreadyExists);
		}
		Err(err) => return Err(db_err(err)),
	}

	sqlx::query("INSERT OR REPLACE INTO site_passwords (site_id, password) VALUES (?1, ?2)")
		.bind(&*content.site_id)
		.bind(credential)
		.execute(&mut *tx)
		.await
		.map_err(db_err)?;

	tx.commit().await.map_err(db_err)?;

	Ok(())
}

// vim: ts=4
