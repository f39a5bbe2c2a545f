//! Content store
//!
//! Maps a site id to its content record on top of a `SiteAdapter`. Unknown
//! sites read as a generated default record, partial updates replace one
//! top-level field and back-fill missing sub-record ids.

use std::sync::Arc;

use crate::prelude::*;
use sitecms_types::site_adapter::SiteAdapter;
use sitecms_types::types::{FieldUpdate, Identified, SiteContent, SiteListItem};
use sitecms_types::utils::validate_site_id;

/// Assigns `"<prefix>-<index>"` to every item without an id
///
/// The index is the position in the submitted list, so ids assigned by an
/// earlier update can repeat when the list is replaced wholesale.
pub fn assign_missing_ids<T: Identified>(items: &mut [T]) {
	for (idx, item) in items.iter_mut().enumerate() {
		if item.id().is_none_or(str::is_empty) {
			item.set_id(format!("{}-{}", T::ID_PREFIX, idx).into());
		}
	}
}

fn apply_update(content: &mut SiteContent, update: FieldUpdate) {
	match update {
		FieldUpdate::Hours(hours) => content.hours = hours,
		FieldUpdate::Services(mut services) => {
			assign_missing_ids(&mut services);
			content.services = services;
		}
		FieldUpdate::Staff(mut staff) => {
			assign_missing_ids(&mut staff);
			content.staff = staff;
		}
		FieldUpdate::MenuItems(mut menu_items) => {
			assign_missing_ids(&mut menu_items);
			content.menu_items = menu_items;
		}
		FieldUpdate::Promotions(mut promotions) => {
			assign_missing_ids(&mut promotions);
			content.promotions = promotions;
		}
	}
}

#[derive(Debug, Clone)]
pub struct ContentStore {
	adapter: Arc<dyn SiteAdapter>,
}

impl ContentStore {
	pub fn new(adapter: Arc<dyn SiteAdapter>) -> Self {
		Self { adapter }
	}

	pub fn adapter(&self) -> &Arc<dyn SiteAdapter> {
		&self.adapter
	}

	/// Loads the record of a site, or the default record if none is stored
	pub async fn load(&self, site_id: &str) -> ClResult<SiteContent> {
		validate_site_id(site_id)?;
		match self.adapter.read_site_content(site_id).await? {
			Some(mut content) => {
				content.site_id = site_id.into();
				Ok(content)
			}
			None => {
				debug!("No content stored for {}, serving default", site_id);
				Ok(SiteContent::default_for(site_id))
			}
		}
	}

	/// Upserts the whole record under `content.site_id`
	pub async fn save_full(&self, content: &SiteContent) -> ClResult<()> {
		validate_site_id(&content.site_id)?;
		self.adapter.write_site_content(content).await
	}

	/// Replaces one top-level field and saves the result
	///
	/// Concurrent merges on the same site are last-write-wins.
	pub async fn merge_field(&self, site_id: &str, update: FieldUpdate) -> ClResult<SiteContent> {
		let mut content = self.load(site_id).await?;
		let field = update.field_name();
		apply_update(&mut content, update);
		self.save_full(&content).await?;
		debug!("Merged field {} of {}", field, site_id);
		Ok(content)
	}

	pub async fn list_sites(&self) -> ClResult<Vec<SiteListItem>> {
		self.adapter.list_sites().await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use sitecms_types::types::{MenuItem, Promotion};

	fn menu_item(id: Option<&str>, name: &str) -> MenuItem {
		MenuItem {
			id: id.map(Into::into),
			name: name.into(),
			description: None,
			price: "$1".into(),
			category: None,
		}
	}

	#[test]
	fn test_assign_missing_ids_positional() {
		let mut items = vec![menu_item(None, "a"), menu_item(Some("menu-7"), "b"), menu_item(Some(""), "c")];
		assign_missing_ids(&mut items);

		let ids: Vec<Option<&str>> = items.iter().map(|i| i.id.as_deref()).collect();
		assert_eq!(ids, vec![Some("menu-0"), Some("menu-7"), Some("menu-2")]);
	}

	#[test]
	fn test_apply_update_touches_one_field() {
		let mut content = SiteContent::new("jw-cafe", "JW Cafe");
		content.menu_items.push(menu_item(Some("menu-0"), "Latte"));

		apply_update(
			&mut content,
			FieldUpdate::Promotions(vec![Promotion {
				id: None,
				title: "Happy hour".into(),
				description: "2 for 1".into(),
				active: true,
			}]),
		);

		assert_eq!(content.promotions[0].id.as_deref(), Some("promo-0"));
		assert_eq!(content.menu_items[0].id.as_deref(), Some("menu-0"));
	}
}

// vim: ts=4
