use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the encode direction.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct EncodeSettings {
    /// Print a newline after the encoded text
    #[serde(default = "default_true")]
    pub trailing_newline: bool,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        EncodeSettings {
            trailing_newline: true,
        }
    }
}

/// Settings for the decode direction.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DecodeSettings {
    /// Drop ASCII whitespace from the symbol source before decoding
    #[serde(default = "default_true")]
    pub skip_whitespace: bool,
}

impl Default for DecodeSettings {
    fn default() -> Self {
        DecodeSettings {
            skip_whitespace: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directive used when `CROCKFORD_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "warn".to_string()
}

/// Settings loaded from TOML files.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub encode: EncodeSettings,
    #[serde(default)]
    pub decode: DecodeSettings,
    #[serde(default)]
    pub log: LogSettings,
}

impl Settings {
    /// Parses settings from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in settings.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../config.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads settings with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in settings (from library)
    /// 2. `~/.config/crockford/config.toml` (user overrides)
    /// 3. `./crockford.toml` (project-local overrides)
    /// 4. `explicit`, if given
    ///
    /// Later files override earlier ones key by key. A user or local file
    /// that fails to parse is skipped with a warning; an explicit file that
    /// fails is an error.
    pub fn load_with_overrides(explicit: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut merged: toml::Table = toml::from_str(include_str!("../../config.toml"))?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("crockford").join("config.toml");
            if user_config_path.exists() {
                match read_table(&user_config_path) {
                    Ok(table) => merge_tables(&mut merged, table),
                    Err(e) => {
                        tracing::warn!(path = ?user_config_path, error = %e, "failed to load user config");
                    }
                }
            }
        }

        let local_config_path = Path::new("crockford.toml");
        if local_config_path.exists() {
            match read_table(local_config_path) {
                Ok(table) => merge_tables(&mut merged, table),
                Err(e) => {
                    tracing::warn!(path = ?local_config_path, error = %e, "failed to load local config");
                }
            }
        }

        if let Some(path) = explicit {
            let table = read_table(path)
                .map_err(|e| format!("Cannot load config '{}': {}", path.display(), e))?;
            merge_tables(&mut merged, table);
        }

        Ok(toml::Value::Table(merged).try_into()?)
    }

    /// Renders the settings as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

fn read_table(path: &Path) -> Result<toml::Table, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merges `other` into `base`, recursing into tables so that only the keys
/// present in `other` are replaced.
pub fn merge_tables(base: &mut toml::Table, other: toml::Table) {
    for (key, value) in other {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let settings = Settings::load_default().unwrap();
        assert!(settings.encode.trailing_newline);
        assert!(settings.decode.skip_whitespace);
        assert_eq!(settings.log.level, "warn");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let settings = Settings::from_toml("[decode]\nskip_whitespace = false\n").unwrap();
        assert!(!settings.decode.skip_whitespace);
        assert!(settings.encode.trailing_newline);
        assert_eq!(settings.log.level, "warn");
    }

    #[test]
    fn test_merge_replaces_only_given_keys() {
        let mut base: toml::Table = toml::from_str(
            r#"
[encode]
trailing_newline = true
[log]
level = "warn"
"#,
        )
        .unwrap();
        let other: toml::Table = toml::from_str(
            r#"
[log]
level = "debug"
"#,
        )
        .unwrap();

        merge_tables(&mut base, other);
        let settings: Settings = toml::Value::Table(base).try_into().unwrap();
        assert!(settings.encode.trailing_newline);
        assert_eq!(settings.log.level, "debug");
    }

    #[test]
    fn test_unknown_value_type_is_rejected() {
        assert!(Settings::from_toml("[encode]\ntrailing_newline = \"yes\"\n").is_err());
    }

    #[test]
    fn test_explicit_file_overrides() {
        let dir = std::env::temp_dir().join(format!("crockford-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("override.toml");
        std::fs::write(&path, "[encode]\ntrailing_newline = false\n").unwrap();

        let settings = Settings::load_with_overrides(Some(&path)).unwrap();
        assert!(!settings.encode.trailing_newline);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_explicit_file_missing_is_error() {
        let path = Path::new("/nonexistent/crockford/override.toml");
        assert!(Settings::load_with_overrides(Some(path)).is_err());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let settings = Settings::default();
        let rendered = settings.to_toml().unwrap();
        assert!(rendered.contains("[encode]"));
        assert_eq!(Settings::from_toml(&rendered).unwrap(), settings);
    }
}
