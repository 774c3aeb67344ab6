//! Runtime-editable user settings.

use parking_lot::RwLock;
use tracing::info;

use crate::domain::entities::{EmbedProvider, EnabledProviders};
use crate::domain::ports::SettingsPort;

/// Holds the provider switches; every read takes a fresh snapshot.
#[derive(Debug, Default)]
pub struct SettingsStore {
    providers: RwLock<EnabledProviders>,
}

impl SettingsStore {
    /// Starts from the configured switches.
    #[must_use]
    pub fn new(providers: EnabledProviders) -> Self {
        Self {
            providers: RwLock::new(providers),
        }
    }

    /// Switches one provider on or off.
    pub fn set_provider(&self, provider: EmbedProvider, enabled: bool) {
        let mut providers = self.providers.write();
        *providers = providers.with(provider, enabled);
        info!(%provider, enabled, "Embed provider setting changed");
    }
}

impl SettingsPort for SettingsStore {
    fn enabled_providers(&self) -> EnabledProviders {
        *self.providers.read()
    }
}
