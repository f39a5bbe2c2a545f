//! Site content records and the sub-records they carry.
//!
//! Field names are serialized as-is (snake_case), this is the shape both the
//! public read API and the persisted JSON documents use.

use serde::{Deserialize, Serialize};

use crate::utils::derive_business_name;

pub const CLOSED: &str = "Closed";

fn closed() -> Box<str> {
	CLOSED.into()
}

fn default_true() -> bool {
	true
}

// Hours //
//*******//
/// Opening hours, one free-text status per weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hours {
	pub monday: Box<str>,
	pub tuesday: Box<str>,
	pub wednesday: Box<str>,
	pub thursday: Box<str>,
	pub friday: Box<str>,
	pub saturday: Box<str>,
	pub sunday: Box<str>,
}

impl Default for Hours {
	fn default() -> Self {
		Self {
			monday: closed(),
			tuesday: closed(),
			wednesday: closed(),
			thursday: closed(),
			friday: closed(),
			saturday: closed(),
			sunday: closed(),
		}
	}
}

// Sub-records //
//*************//
/// Sub-records carrying an optional, server-assigned id.
///
/// `ID_PREFIX` is the kind prefix used when an id has to be back-filled
/// (`"<prefix>-<index>"`).
pub trait Identified {
	const ID_PREFIX: &'static str;

	fn id(&self) -> Option<&str>;
	fn set_id(&mut self, id: Box<str>);
}

macro_rules! impl_identified {
	($typ:ty, $prefix:literal) => {
		impl Identified for $typ {
			const ID_PREFIX: &'static str = $prefix;

			fn id(&self) -> Option<&str> {
				self.id.as_deref()
			}

			fn set_id(&mut self, id: Box<str>) {
				self.id = Some(id);
			}
		}
	};
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
	#[serde(default)]
	pub id: Option<Box<str>>,
	pub title: Box<str>,
	pub description: Box<str>,
	#[serde(default)]
	pub price: Option<Box<str>>,
	#[serde(default)]
	pub icon: Option<Box<str>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
	#[serde(default)]
	pub id: Option<Box<str>>,
	pub name: Box<str>,
	pub role: Box<str>,
	#[serde(default)]
	pub bio: Option<Box<str>>,
	#[serde(default)]
	pub image: Option<Box<str>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
	#[serde(default)]
	pub id: Option<Box<str>>,
	pub name: Box<str>,
	#[serde(default)]
	pub description: Option<Box<str>>,
	pub price: Box<str>,
	#[serde(default)]
	pub category: Option<Box<str>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
	#[serde(default)]
	pub id: Option<Box<str>>,
	pub title: Box<str>,
	pub description: Box<str>,
	#[serde(default = "default_true")]
	pub active: bool,
}

impl_identified!(Service, "svc");
impl_identified!(StaffMember, "staff");
impl_identified!(MenuItem, "menu");
impl_identified!(Promotion, "promo");

// SiteContent //
//*************//
/// The full content record of one site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
	/// Overwritten by the server with the key the record is stored under
	#[serde(default)]
	pub site_id: Box<str>,
	pub business_name: Box<str>,
	#[serde(default)]
	pub tagline: Option<Box<str>>,
	#[serde(default)]
	pub phone: Option<Box<str>>,
	#[serde(default)]
	pub email: Option<Box<str>>,
	#[serde(default)]
	pub address: Option<Box<str>>,
	#[serde(default)]
	pub hours: Hours,
	#[serde(default)]
	pub services: Vec<Service>,
	#[serde(default)]
	pub staff: Vec<StaffMember>,
	#[serde(default)]
	pub menu_items: Vec<MenuItem>,
	#[serde(default)]
	pub promotions: Vec<Promotion>,
}

impl SiteContent {
	/// Minimal record: given name, everything else at its default
	pub fn new(site_id: impl Into<Box<str>>, business_name: impl Into<Box<str>>) -> Self {
		Self {
			site_id: site_id.into(),
			business_name: business_name.into(),
			tagline: None,
			phone: None,
			email: None,
			address: None,
			hours: Hours::default(),
			services: Vec::new(),
			staff: Vec::new(),
			menu_items: Vec::new(),
			promotions: Vec::new(),
		}
	}

	/// Record served for a site that has nothing stored yet
	pub fn default_for(site_id: &str) -> Self {
		Self::new(site_id, derive_business_name(site_id))
	}
}

/// Entry of the site listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteListItem {
	pub site_id: Box<str>,
	pub business_name: Box<str>,
}

// FieldUpdate //
//*************//
/// Replacement value for exactly one top-level field of a `SiteContent`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
	Hours(Hours),
	Services(Vec<Service>),
	Staff(Vec<StaffMember>),
	MenuItems(Vec<MenuItem>),
	Promotions(Vec<Promotion>),
}

impl FieldUpdate {
	pub fn field_name(&self) -> &'static str {
		match self {
			FieldUpdate::Hours(_) => "hours",
			FieldUpdate::Services(_) => "services",
			FieldUpdate::Staff(_) => "staff",
			FieldUpdate::MenuItems(_) => "menu_items",
			FieldUpdate::Promotions(_) => "promotions",
		}
	}
}


// vim: ts=4
