//! Database schema initialization
//!
//! Scalar fields get their own columns, nested collections are stored as
//! JSON text, one column per collection.

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Site content
	//**************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS site_content (
		site_id text NOT NULL,
		business_name text NOT NULL,
		tagline text,
		phone text,
		email text,
		address text,
		hours_json text DEFAULT '{}',
		services_json text DEFAULT '[]',
		staff_json text DEFAULT '[]',
		menu_items_json text DEFAULT '[]',
		promotions_json text DEFAULT '[]',
		PRIMARY KEY(site_id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Site credentials
	//******************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS site_passwords (
		site_id text NOT NULL,
		password text NOT NULL,
		PRIMARY KEY(site_id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
