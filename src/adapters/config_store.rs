//! Config persistence over any key/value backend.
//!
//! [`StorageConfig`] implements [`ConfigPort`] on top of a [`StoragePort`],
//! keeping the postcard-encoded [`WidgetConfig`] under
//! `dashwidgets::widgetcfg`. The host supplies the backend; [`MemoryStore`]
//! is the in-process one.
//!
//! [`MemoryStore`]: super::MemoryStore

use std::cell::RefCell;

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort, StorageError, StoragePort};
use crate::config::WidgetConfig;

pub const CONFIG_NAMESPACE: &str = "dashwidgets";
pub const CONFIG_KEY: &str = "widgetcfg";

/// Read buffer for the config blob. The encoded default config is well under 200 bytes.
const CONFIG_BUF_SIZE: usize = 1024;

/// [`ConfigPort`] backed by a host [`StoragePort`].
pub struct StorageConfig<S: StoragePort> {
    storage: RefCell<S>,
}

impl<S: StoragePort> StorageConfig<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: RefCell::new(storage),
        }
    }

    /// Give the backend back to the host.
    pub fn into_inner(self) -> S {
        self.storage.into_inner()
    }

    /// Remove the stored config so the next load falls back to defaults.
    pub fn reset(&self) -> Result<(), ConfigError> {
        self.storage
            .borrow_mut()
            .delete(CONFIG_NAMESPACE, CONFIG_KEY)?;
        info!("StorageConfig: stored config erased");
        Ok(())
    }
}

impl<S: StoragePort> ConfigPort for StorageConfig<S> {
    fn load(&self) -> Result<WidgetConfig, ConfigError> {
        let mut buf = [0u8; CONFIG_BUF_SIZE];
        let len = match self
            .storage
            .borrow()
            .read(CONFIG_NAMESPACE, CONFIG_KEY, &mut buf)
        {
            Ok(len) => len,
            Err(StorageError::BufferTooSmall) => {
                warn!("StorageConfig: stored blob exceeds {} bytes", CONFIG_BUF_SIZE);
                return Err(ConfigError::Corrupted);
            }
            Err(e) => return Err(e.into()),
        };
        let cfg = WidgetConfig::from_bytes(&buf[..len])?;
        info!("StorageConfig: loaded config ({} bytes)", len);
        Ok(cfg)
    }

    fn save(&self, config: &WidgetConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let bytes = config.to_bytes()?;
        if bytes.len() > CONFIG_BUF_SIZE {
            return Err(ConfigError::ValidationFailed(
                "encoded config exceeds 1024 bytes",
            ));
        }
        self.storage
            .borrow_mut()
            .write(CONFIG_NAMESPACE, CONFIG_KEY, &bytes)?;
        info!("StorageConfig: config saved ({} bytes)", bytes.len());
        Ok(())
    }
}
