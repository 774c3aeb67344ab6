use crate::domain::entities::EnabledProviders;

/// Port for user settings, read fresh on every call.
pub trait SettingsPort: Send + Sync {
    /// Returns the current mirror provider switches.
    fn enabled_providers(&self) -> EnabledProviders;
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockSettings {
        providers: Mutex<EnabledProviders>,
    }

    impl MockSettings {
        pub fn new(providers: EnabledProviders) -> Self {
            Self {
                providers: Mutex::new(providers),
            }
        }

        pub fn set(&self, providers: EnabledProviders) {
            *self.providers.lock().unwrap() = providers;
        }
    }

    impl SettingsPort for MockSettings {
        fn enabled_providers(&self) -> EnabledProviders {
            *self.providers.lock().unwrap()
        }
    }
}
