//! Utility functions

use crate::prelude::*;

pub const MAX_SITE_ID_LENGTH: usize = 100;

/// Derive the default business name from a site id
///
/// Dashes become spaces, then every alphabetic run is title-cased.
///
/// # Examples
/// - `"jw-cafe"` → `"Jw Cafe"`
/// - `"clater-jewelers"` → `"Clater Jewelers"`
/// - `"shop24-7days"` → `"Shop24 7Days"`
pub fn derive_business_name(site_id: &str) -> String {
	let mut result = String::with_capacity(site_id.len());
	let mut prev_alpha = false;

	for c in site_id.chars() {
		let c = if c == '-' { ' ' } else { c };
		if c.is_alphabetic() {
			if prev_alpha {
				result.extend(c.to_lowercase());
			} else {
				result.extend(c.to_uppercase());
			}
			prev_alpha = true;
		} else {
			result.push(c);
			prev_alpha = false;
		}
	}
	result
}

/// Check that a site id is usable as a storage key
///
/// Accepts 1 to `MAX_SITE_ID_LENGTH` characters of `[A-Za-z0-9_-]`.
pub fn validate_site_id(site_id: &str) -> ClResult<()> {
	if site_id.is_empty() {
		return Err(Error::ValidationError("site_id cannot be empty".to_string()));
	}
	if site_id.len() > MAX_SITE_ID_LENGTH {
		return Err(Error::ValidationError(format!(
			"site_id is longer than {} characters",
			MAX_SITE_ID_LENGTH
		)));
	}
	if !site_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
		return Err(Error::ValidationError(format!(
			"site_id '{}' contains invalid characters",
			site_id
		)));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_derive_business_name() {
		assert_eq!(derive_business_name("jw-cafe"), "Jw Cafe");
		assert_eq!(derive_business_name("clater-jewelers"), "Clater Jewelers");
		assert_eq!(derive_business_name("FRITZ-SALON"), "Fritz Salon");
		assert_eq!(derive_business_name("shop24-7days"), "Shop24 7Days");
		assert_eq!(derive_business_name("a_b"), "A_B");
		assert_eq!(derive_business_name(""), "");
	}

	#[test]
	fn test_valid_site_ids() {
		assert!(validate_site_id("jw-cafe").is_ok());
		assert!(validate_site_id("Site_01").is_ok());
		assert!(validate_site_id(&"a".repeat(MAX_SITE_ID_LENGTH)).is_ok());
	}

	#[test]
	fn test_invalid_site_ids() {
		assert!(matches!(validate_site_id(""), Err(Error::ValidationError(_))));
		assert!(matches!(validate_site_id("../etc"), Err(Error::ValidationError(_))));
		assert!(matches!(validate_site_id("a b"), Err(Error::ValidationError(_))));
		assert!(matches!(
			validate_site_id(&"a".repeat(MAX_SITE_ID_LENGTH + 1)),
			Err(Error::ValidationError(_))
		));
	}
}

// vim: ts=4
