use std::{env, path::PathBuf, process::ExitCode, sync::Arc};

use sitecms::AppBuilder;
use sitecms::prelude::*;
use sitecms::site_adapter::SiteAdapter;
use sitecms_site_adapter_fs::SiteAdapterFs;
use sitecms_site_adapter_sqlite::SiteAdapterSqlite;

const DEFAULT_LISTEN: &str = "127.0.0.1:8000";
const DEFAULT_DEMO_PASSWORD: &str = "demo123";

/// Pre-provisioned demo sites and the variables overriding their password
const DEMO_SITES: [(&str, &str); 3] = [
	("clater-jewelers", "CLATER_PASSWORD"),
	("fritz-salon", "FRITZ_PASSWORD"),
	("jw-cafe", "JW_PASSWORD"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Storage {
	Sqlite,
	Fs,
}

#[derive(Debug)]
struct Config {
	listen: String,
	storage: Storage,
	db_dir: PathBuf,
	admin_password: Option<String>,
	demo_credentials: Vec<(&'static str, String)>,
	allowed_origins: Vec<String>,
}

impl Config {
	fn from_vars(var: impl Fn(&str) -> Option<String>) -> ClResult<Self> {
		let listen = match (var("LISTEN"), var("PORT")) {
			(Some(listen), _) => listen,
			(None, Some(port)) => format!("0.0.0.0:{}", port),
			(None, None) => DEFAULT_LISTEN.to_string(),
		};

		let storage = match var("STORAGE").as_deref() {
			None | Some("sqlite") => Storage::Sqlite,
			Some("fs") => Storage::Fs,
			Some(other) => {
				return Err(Error::ValidationError(format!("unknown STORAGE backend: {}", other)));
			}
		};

		let demo_credentials = DEMO_SITES
			.iter()
			.map(|&(site_id, name)| {
				(site_id, var(name).unwrap_or_else(|| DEFAULT_DEMO_PASSWORD.to_string()))
			})
			.collect();

		let allowed_origins = var("ALLOWED_ORIGINS")
			.map(|origins| {
				origins
					.split(',')
					.map(str::trim)
					.filter(|origin| !origin.is_empty())
					.map(String::from)
					.collect()
			})
			.unwrap_or_else(|| vec!["*".to_string()]);

		Ok(Config {
			listen,
			storage,
			db_dir: PathBuf::from(var("DB_DIR").unwrap_or_else(|| "./data".to_string())),
			admin_password: var("ADMIN_PASSWORD").filter(|pw| !pw.is_empty()),
			demo_credentials,
			allowed_origins,
		})
	}
}

async fn run(mut builder: AppBuilder) -> ClResult<()> {
	let config = Config::from_vars(|name| env::var(name).ok())?;

	let site_adapter: Arc<dyn SiteAdapter> = match config.storage {
		Storage::Sqlite => Arc::new(SiteAdapterSqlite::new(&config.db_dir).await?),
		Storage::Fs => Arc::new(SiteAdapterFs::new(config.db_dir.clone()).await?),
	};

	builder
		.listen(config.listen)
		.allowed_origins(config.allowed_origins)
		.site_adapter(site_adapter);
	if let Some(admin_password) = config.admin_password {
		builder.admin_password(admin_password);
	}
	for (site_id, password) in config.demo_credentials {
		builder.fallback_credential(site_id, password);
	}

	builder.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
	let builder = AppBuilder::new();
	match run(builder).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("FATAL: {}", err);
			ExitCode::FAILURE
		}
	}
}


// vim: ts=4
