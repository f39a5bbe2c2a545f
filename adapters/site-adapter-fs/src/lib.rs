//! File backed site adapter.
//!
//! Layout under the base directory:
//! - `sites/<site_id>.json`: the full content record as one JSON document
//! - `credentials/<site_id>.json`: the site credential
//!
//! Every write goes to a temporary file first and is renamed into place.

#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::{
	fs::{File, create_dir_all, read_dir, read_to_string, remove_file, rename, try_exists},
	io::AsyncWriteExt,
	sync::Mutex,
};

use sitecms::{
	prelude::*,
	site_adapter::SiteAdapter,
	types::{SiteContent, SiteListItem},
	utils::validate_site_id,
};

const SITES_DIR: &str = "sites";
const CREDENTIALS_DIR: &str = "credentials";

#[derive(Serialize, Deserialize)]
struct StoredCredential {
	site_id: Box<str>,
	password: Box<str>,
}

/// Calculates the path of a per-site JSON file
fn site_file_path(base_dir: &Path, dir: &str, site_id: &str) -> ClResult<PathBuf> {
	validate_site_id(site_id)?;
	Ok(base_dir.join(dir).join(format!("{}.json", site_id)))
}

fn tmp_file_path(path: &Path) -> PathBuf {
	path.with_extension("json.tmp")
}

/// Encodes a document, a failure here is a bug rather than bad input
fn encode<T: Serialize>(value: &T, pretty: bool) -> ClResult<Vec<u8>> {
	let res = if pretty { serde_json::to_vec_pretty(value) } else { serde_json::to_vec(value) };
	res.map_err(|err| Error::Internal(err.to_string()))
}

/// Reads a file, `None` if it does not exist
async fn read_optional(path: &Path) -> ClResult<Option<String>> {
	match read_to_string(path).await {
		Ok(data) => Ok(Some(data)),
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
		Err(err) => {
			warn!("FS: cannot read {:?}: {}", path, err);
			Err(err.into())
		}
	}
}

/// Writes a file through a temporary sibling and a rename
async fn write_replace(path: &Path, data: &[u8]) -> ClResult<()> {
	let tmp_path = tmp_file_path(path);
	let res = async {
		let mut file = File::create(&tmp_path).await?;
		file.write_all(data).await?;
		file.sync_all().await?;
		rename(&tmp_path, path).await?;
		Ok::<(), Error>(())
	}
	.await;

	if res.is_err() {
		warn!("FS: write failed, removing tmpfile: {:?}", &tmp_path);
		let _ = remove_file(&tmp_path).await;
	}
	res
}

#[derive(Debug)]
pub struct SiteAdapterFs {
	base_dir: Box<Path>,
	/// Serializes writers so temp files and existence checks never race
	write_lock: Mutex<()>,
}

impl SiteAdapterFs {
	pub async fn new(base_dir: impl Into<Box<Path>>) -> ClResult<Self> {
		let base_dir: Box<Path> = base_dir.into();
		create_dir_all(base_dir.join(SITES_DIR)).await?;
		create_dir_all(base_dir.join(CREDENTIALS_DIR)).await?;
		info!("Site storage (fs) at {:?}", &base_dir);
		Ok(Self { base_dir, write_lock: Mutex::new(()) })
	}

	async fn write_content_file(&self, content: &SiteContent) -> ClResult<()> {
		let path = site_file_path(&self.base_dir, SITES_DIR, &content.site_id)?;
		let data = encode(content, true)?;
		write_replace(&path, &data).await
	}

	async fn write_credential_file(&self, site_id: &str, password: &str) -> ClResult<()> {
		let path = site_file_path(&self.base_dir, CREDENTIALS_DIR, site_id)?;
		let data = encode(
			&StoredCredential { site_id: site_id.into(), password: password.into() },
			false,
		)?;
		write_replace(&path, &data).await
	}
}

#[async_trait]
impl SiteAdapter for SiteAdapterFs {
	fn name(&self) -> &'static str {
		"fs"
	}

	async fn read_site_content(&self, site_id: &str) -> ClResult<Option<SiteContent>> {
		let path = site_file_path(&self.base_dir, SITES_DIR, site_id)?;
		let Some(data) = read_optional(&path).await? else {
			return Ok(None);
		};
		let mut content: SiteContent = serde_json::from_str(&data).map_err(|err| {
			warn!("FS: corrupt site document {:?}: {}", &path, err);
			Error::DbError
		})?;
		// The file name is the key
		content.site_id = site_id.into();
		Ok(Some(content))
	}

	async fn write_site_content(&self, content: &SiteContent) -> ClResult<()> {
		let _guard = self.write_lock.lock().await;
		self.write_content_file(content).await
	}

	async fn list_sites(&self) -> ClResult<Vec<SiteListItem>> {
		let mut sites = Vec::new();
		let mut entries = read_dir(self.base_dir.join(SITES_DIR)).await?;

		while let Some(entry) = entries.next_entry().await? {
			let path = entry.path();
			if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
				continue;
			}
			let Some(site_id) = path.file_stem().and_then(|stem| stem.to_str()) else {
				continue;
			};
			if validate_site_id(site_id).is_err() {
				debug!("FS: ignoring foreign file {:?}", &path);
				continue;
			}
			// Removed since the directory was read
			let Some(content) = self.read_site_content(site_id).await? else {
				continue;
			};
			sites.push(SiteListItem {
				site_id: content.site_id,
				business_name: content.business_name,
			});
		}

		sites.sort_by(|a, b| a.site_id.cmp(&b.site_id));
		Ok(sites)
	}

	async fn read_site_credential(&self, site_id: &str) -> ClResult<Option<Box<str>>> {
		let path = site_file_path(&self.base_dir, CREDENTIALS_DIR, site_id)?;
		let Some(data) = read_optional(&path).await? else {
			return Ok(None);
		};
		let stored: StoredCredential = serde_json::from_str(&data).map_err(|err| {
			warn!("FS: corrupt credential file {:?}: {}", &path, err);
			Error::DbError
		})?;
		Ok(Some(stored.password))
	}

	async fn create_site(&self, content: &SiteContent, credential: &str) -> ClResult<()> {
		let _guard = self.write_lock.lock().await;

		let content_path = site_file_path(&self.base_dir, SITES_DIR, &content.site_id)?;
		if try_exists(&content_path).await? {
			return Err(Error::AlreadyExists);
		}

		self.write_credential_file(&content.site_id, credential).await?;
		if let Err(err) = self.write_content_file(content).await {
			// Roll back so a failed create leaves nothing behind
			let cred_path = site_file_path(&self.base_dir, CREDENTIALS_DIR, &content.site_id)?;
			let _ = remove_file(&cred_path).await;
			return Err(err);
		}
		Ok(())
	}
}


// vim: ts=4
