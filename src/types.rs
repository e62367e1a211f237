use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported Visual Studio release, keyed in the registry by its build token.
#[derive(Debug, Clone, Copy, Serialize, Eq)]
pub struct KnownVersion {
    pub year: &'static str,
    pub build: &'static str,
}

impl KnownVersion {
    pub const fn new(year: &'static str, build: &'static str) -> Self {
        Self { year, build }
    }
}

impl PartialEq for KnownVersion {
    fn eq(&self, other: &Self) -> bool {
        self.build == other.build
    }
}

/// Expand abbreviated edition tokens into the name shown to users.
pub fn edition_display_name(token: &'static str) -> &'static str {
    if token.eq_ignore_ascii_case("Pro") {
        "Professional"
    } else {
        token
    }
}

/// An installed (version, edition) pair with a resolved install directory.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiscoveredEdition {
    #[serde(flatten)]
    pub version: KnownVersion,
    pub edition: &'static str,
    pub display_name: &'static str,
    pub install_dir: String,
}

impl DiscoveredEdition {
    pub fn new(version: KnownVersion, edition: &'static str, install_dir: String) -> Self {
        debug_assert!(!install_dir.is_empty());
        Self {
            version,
            edition,
            display_name: edition_display_name(edition),
            install_dir,
        }
    }
}

impl fmt::Display for DiscoveredEdition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VS {}/{}: {}",
            self.version.year, self.version.build, self.display_name
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!(
                "Unknown output format '{}'. Valid formats: plain, json, yaml",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProbeSettings {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub show_paths: bool,
}
