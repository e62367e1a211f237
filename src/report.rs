use crate::discovery::{version_key_path, KNOWN_EDITIONS, KNOWN_VERSIONS};
use crate::types::{edition_display_name, DiscoveredEdition, OutputFormat, ProbeSettings};
use anyhow::Result;

/// Render discovered editions for stdout. Plain output has one line per
/// edition and is empty when nothing was found.
pub fn render_editions(editions: &[DiscoveredEdition], settings: &ProbeSettings) -> Result<String> {
    let output: String = match settings.format {
        OutputFormat::Plain => editions
            .iter()
            .map(|edition| {
                if settings.show_paths {
                    format!("{} ({})\n", edition, edition.install_dir)
                } else {
                    format!("{}\n", edition)
                }
            })
            .collect(),
        OutputFormat::Json => serde_json::to_string_pretty(editions)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(editions)?,
    };
    Ok(output)
}

pub fn render_known() -> String {
    let mut out = String::from("--- Known Visual Studio Versions ---\n");
    for version in KNOWN_VERSIONS {
        out.push_str(&format!(
            "  VS {} (build {})  HKLM\\{}\n",
            version.year,
            version.build,
            version_key_path(version)
        ));
    }
    out.push_str("--- Known Editions ---\n");
    for &edition in KNOWN_EDITIONS {
        out.push_str(&format!("  {} -> {}\n", edition, edition_display_name(edition)));
    }
    out
}
