use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod models;

pub use models::*;

/// Prefix for environment overrides, e.g. `BOOKING__VALIDATION__ENFORCE_LUHN=false`.
pub const ENV_PREFIX: &str = "BOOKING";

/// Run environment used when `RUN_ENV` is not set.
pub const DEFAULT_RUN_ENV: &str = "debug";

/// Loads the configuration from the `config/` directory of the current working directory.
///
/// Sources, later ones winning:
/// 1. `config/default.{toml,yaml,json}`
/// 2. `config/{RUN_ENV}` (`RUN_ENV` defaults to [`DEFAULT_RUN_ENV`])
/// 3. `BOOKING__SECTION__KEY` environment variables
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));
    load_config_from(&config_dir)
}

/// Same as [`load_config`] but reads the files from an explicit directory.
///
/// Missing files are not an error; every section has defaults.
pub fn load_config_from(config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| DEFAULT_RUN_ENV.to_string());
    load_config_for(config_dir, &run_env)
}

/// Loads `default` plus the `run_env` overlay from `config_dir`, then env vars.
pub fn load_config_for(config_dir: &Path, run_env: &str) -> Result<AppConfig, ConfigError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);

    debug!(
        "Loading config from {} (RUN_ENV={})",
        config_dir.display(),
        run_env
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, at most once.
///
/// `DOTENV_OVERRIDE` selects another file; otherwise `.env` is used. A missing
/// file is ignored. Returns the path that was tried.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
