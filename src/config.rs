use crate::types::*;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub const APP_NAME: &str = "vsprobe";
pub const CONFIG_FILE_NAME: &str = "config.json";

pub fn get_config_file_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("VSPROBE_CONFIG_PATH") {
        return Ok(PathBuf::from(path));
    }

    let path = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
        .join(APP_NAME)
        .join(CONFIG_FILE_NAME);
    tracing::debug!("Config file path: {}", path.display());
    Ok(path)
}

pub fn load_settings() -> Result<ProbeSettings> {
    let config_path = get_config_file_path()?;

    let settings = if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Could not read config file at {}", config_path.display()))?;
        serde_json::from_str(&content).with_context(|| "Could not parse config file as JSON")?
    } else {
        ProbeSettings::default()
    };

    Ok(apply_env_overrides(settings, |name| std::env::var(name).ok()))
}

/// Apply `VSPROBE_*` overrides. Unparseable values are ignored with a warning.
pub fn apply_env_overrides(
    mut settings: ProbeSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> ProbeSettings {
    if let Some(format) = lookup("VSPROBE_FORMAT") {
        match format.parse::<OutputFormat>() {
            Ok(format) => settings.format = format,
            Err(e) => tracing::warn!("Ignoring VSPROBE_FORMAT: {}", e),
        }
    }

    if let Some(show_paths) = lookup("VSPROBE_SHOW_PATHS") {
        settings.show_paths = show_paths.to_lowercase() == "true" || show_paths == "1";
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_env_overrides_apply() {
        let settings = apply_env_overrides(
            ProbeSettings::default(),
            lookup_from(&[("VSPROBE_FORMAT", "JSON"), ("VSPROBE_SHOW_PATHS", "1")]),
        );
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.show_paths);
    }

    #[test]
    fn test_invalid_format_override_is_ignored() {
        let base = ProbeSettings {
            format: OutputFormat::Yaml,
            show_paths: true,
        };
        let settings = apply_env_overrides(
            base,
            lookup_from(&[("VSPROBE_FORMAT", "xml"), ("VSPROBE_SHOW_PATHS", "false")]),
        );
        assert_eq!(settings.format, OutputFormat::Yaml);
        assert!(!settings.show_paths);
    }

    #[test]
    fn test_settings_file_fields_default() {
        let settings: ProbeSettings = serde_json::from_str(r#"{"show_paths": true}"#).unwrap();
        assert_eq!(settings.format, OutputFormat::Plain);
        assert!(settings.show_paths);
    }
}
