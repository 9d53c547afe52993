use crockford::Settings;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `crockford=debug`.
pub const LOG_ENV: &str = "CROCKFORD_LOG";

/// Expands `~` in a user-supplied config path and checks that it exists.
pub fn resolve_config_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
    if !expanded.is_file() {
        return Err(format!("Config file '{}' does not exist", expanded.display()).into());
    }
    Ok(expanded)
}

/// Builds the stderr subscriber.
///
/// `CROCKFORD_LOG` wins over `default_level`, which comes from settings.
pub fn subscriber(
    default_level: &str,
    color: bool,
) -> impl tracing::Subscriber + Send + Sync + use<> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color && std::io::stderr().is_terminal())
        .with_target(false)
        .finish()
}

/// Loads settings, logging anything that goes wrong on the way with a
/// bootstrap subscriber, then installs the configured one.
pub fn load_settings(
    explicit: Option<&str>,
    color: bool,
) -> Result<Settings, Box<dyn std::error::Error>> {
    let explicit = explicit.map(resolve_config_path).transpose()?;

    let settings = tracing::subscriber::with_default(subscriber("warn", color), || {
        Settings::load_with_overrides(explicit.as_deref())
    })?;

    tracing::subscriber::set_global_default(subscriber(&settings.log.level, color))?;
    tracing::debug!(?settings, "settings loaded");

    Ok(settings)
}
