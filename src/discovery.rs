//! Discovery of installed Visual Studio editions.
//!
//! For every known version the engine opens
//! `SOFTWARE\Microsoft\VisualStudio\<build>\Setup\VS` and then each known
//! edition key below it. An edition counts as installed when a `ProductDir`
//! can be resolved, either on the edition key itself or inherited from the
//! `Setup\VS` key. Any missing key just ends that branch.

use crate::error::ProbeError;
use crate::store::{ConfigStore, StoreScope};
use crate::types::{DiscoveredEdition, KnownVersion};

pub const PRODUCT_FAMILY: &str = "VisualStudio";
pub const SETUP_SUBKEY: &str = r"Setup\VS";
pub const PRODUCT_DIR_VALUE: &str = "ProductDir";

/// Releases probed, in report order.
pub const KNOWN_VERSIONS: &[KnownVersion] = &[
    KnownVersion::new("2010", "10.0"),
    KnownVersion::new("2012", "11.0"),
    KnownVersion::new("2013", "12.0"),
    KnownVersion::new("2015", "14.0"),
];

/// Edition keys probed under `Setup\VS`, in report order.
pub const KNOWN_EDITIONS: &[&str] = &["Community", "Pro", "Premium", "Ultimate", "Enterprise"];

/// Registry path of a version's key, relative to the root scope.
pub fn version_key_path(version: &KnownVersion) -> String {
    format!(r"SOFTWARE\Microsoft\{}\{}", PRODUCT_FAMILY, version.build)
}

/// Probe `store` for every known version and edition.
pub fn discover_installed_editions<S: ConfigStore>(
    store: &S,
) -> Result<Vec<DiscoveredEdition>, ProbeError> {
    discover_editions(store, KNOWN_VERSIONS, KNOWN_EDITIONS)
}

/// Probe `store` for the given versions and editions. Results follow the
/// order of `versions`, then the order of `editions`.
pub fn discover_editions<S: ConfigStore>(
    store: &S,
    versions: &[KnownVersion],
    editions: &[&'static str],
) -> Result<Vec<DiscoveredEdition>, ProbeError> {
    let root = store.open_root()?;
    let mut found = Vec::new();

    for version in versions {
        let version_path = version_key_path(version);
        let Some(version_key) = root.open_child(&version_path) else {
            tracing::debug!("VS {} not registered ({})", version.year, version_path);
            continue;
        };
        let Some(setup_key) = version_key.open_child(SETUP_SUBKEY) else {
            tracing::debug!("VS {} has no {} key", version.year, SETUP_SUBKEY);
            continue;
        };

        for &edition in editions {
            let Some(edition_key) = setup_key.open_child(edition) else {
                tracing::debug!("VS {}: no '{}' edition key", version.year, edition);
                continue;
            };

            match resolve_install_dir(&edition_key, &setup_key) {
                Some(install_dir) => {
                    let discovered = DiscoveredEdition::new(*version, edition, install_dir);
                    tracing::info!("Found {} at {}", discovered, discovered.install_dir);
                    found.push(discovered);
                }
                None => {
                    tracing::debug!(
                        "VS {}: '{}' edition key has no {}",
                        version.year,
                        edition,
                        PRODUCT_DIR_VALUE
                    );
                }
            }
        }
    }

    Ok(found)
}

/// The edition's own `ProductDir` wins; otherwise it inherits the setup key's.
fn resolve_install_dir<K: StoreScope>(edition_key: &K, setup_key: &K) -> Option<String> {
    edition_key
        .read_string(PRODUCT_DIR_VALUE)
        .or_else(|| setup_key.read_string(PRODUCT_DIR_VALUE))
}
