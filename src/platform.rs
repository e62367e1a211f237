//! The live Windows registry as a [`ConfigStore`].
//!
//! Every key is opened through the 32-bit registry view (`KEY_WOW64_32KEY`).
//! Visual Studio registers its setup keys there on 64-bit Windows as well, so
//! the view must not follow the bitness of this process.

use crate::error::ProbeError;
use crate::store::{ConfigStore, StoreScope};

pub const ROOT_NAME: &str = "HKEY_LOCAL_MACHINE";

/// `HKEY_LOCAL_MACHINE` of the local machine, 32-bit view.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryStore;

#[cfg(windows)]
mod imp {
    use super::*;
    use std::io;
    use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ, KEY_WOW64_32KEY};
    use winreg::RegKey;

    const VIEW_FLAGS: u32 = KEY_READ | KEY_WOW64_32KEY;

    pub struct RegistryScope(RegKey);

    impl StoreScope for RegistryScope {
        fn open_child(&self, path: &str) -> Option<Self> {
            match self.0.open_subkey_with_flags(path, VIEW_FLAGS) {
                Ok(key) => Some(RegistryScope(key)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => None,
                Err(e) => {
                    tracing::debug!("Treating key '{}' as absent: {}", path, e);
                    None
                }
            }
        }

        fn read_string(&self, name: &str) -> Option<String> {
            match self.0.get_value::<String, _>(name) {
                Ok(value) => {
                    tracing::trace!("Read value '{}' = '{}'", name, value);
                    Some(value).filter(|v| !v.is_empty())
                }
                Err(e) => {
                    tracing::trace!("Value '{}' not readable: {}", name, e);
                    None
                }
            }
        }
    }

    impl ConfigStore for RegistryStore {
        type Scope<'a> = RegistryScope;

        fn open_root(&self) -> Result<Self::Scope<'_>, ProbeError> {
            RegKey::predef(HKEY_LOCAL_MACHINE)
                .open_subkey_with_flags("", VIEW_FLAGS)
                .map(RegistryScope)
                .map_err(|e| ProbeError::StoreUnavailable {
                    root: ROOT_NAME.to_string(),
                    reason: e.to_string(),
                })
        }
    }
}

#[cfg(not(windows))]
mod imp {
    use super::*;

    /// No scope can exist without a registry.
    pub enum RegistryScope {}

    impl StoreScope for RegistryScope {
        fn open_child(&self, _path: &str) -> Option<Self> {
            match *self {}
        }

        fn read_string(&self, _name: &str) -> Option<String> {
            match *self {}
        }
    }

    impl ConfigStore for RegistryStore {
        type Scope<'a> = RegistryScope;

        fn open_root(&self) -> Result<Self::Scope<'_>, ProbeError> {
            Err(ProbeError::StoreUnavailable {
                root: ROOT_NAME.to_string(),
                reason: format!(
                    "the registry is only available on Windows (running on {})",
                    std::env::consts::OS
                ),
            })
        }
    }
}
