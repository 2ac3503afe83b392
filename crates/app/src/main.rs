use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt, prelude::*};

use services::{AppServices, CatalogService, Clock, FavoritesService, RemoteCatalogSource};
use storage::catalog::{CatalogSource, EmbeddedCatalogSource, JsonFileCatalogSource};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    catalog: Arc<CatalogService>,
    favorites: Arc<FavoritesService>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    fn favorites(&self) -> Arc<FavoritesService> {
        Arc::clone(&self.favorites)
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }
}

/// Where the record catalog comes from, in precedence order: an explicit
/// URL, an explicit file, or the compiled-in seed data.
enum CatalogChoice {
    Embedded,
    File(String),
    Remote(String),
}

struct Args {
    db_url: String,
    catalog: CatalogChoice,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--catalog <path>] [--catalog-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:study.sqlite3");
    eprintln!("  catalog: embedded seed data");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STUDY_DB_URL, STUDY_CATALOG, STUDY_CATALOG_URL");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("STUDY_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://study.sqlite3".into(), normalize_sqlite_url);
        let mut catalog = match (
            std::env::var("STUDY_CATALOG_URL").ok(),
            std::env::var("STUDY_CATALOG").ok(),
        ) {
            (Some(url), _) => CatalogChoice::Remote(url),
            (None, Some(path)) => CatalogChoice::File(path),
            (None, None) => CatalogChoice::Embedded,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    catalog = CatalogChoice::File(value);
                }
                "--catalog-url" => {
                    let value = require_value(args, "--catalog-url")?;
                    catalog = CatalogChoice::Remote(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, catalog })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("app=info,services=info,storage=info,ui=info"));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_fmt::layer().with_target(true));

    let _ = subscriber.try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let source: Arc<dyn CatalogSource> = match parsed.catalog {
        CatalogChoice::Embedded => Arc::new(EmbeddedCatalogSource),
        CatalogChoice::File(path) => Arc::new(JsonFileCatalogSource::new(path)),
        CatalogChoice::Remote(url) => Arc::new(RemoteCatalogSource::new(url)),
    };

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let app_services = AppServices::new_sqlite(&parsed.db_url, source).await?;
    tracing::info!(db = %parsed.db_url, "storage ready");

    let app = DesktopApp {
        catalog: app_services.catalog(),
        favorites: app_services.favorites(),
    };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("FHIR Study")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
