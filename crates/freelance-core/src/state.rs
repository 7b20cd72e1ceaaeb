//! Application state with an injected storage port
//!
//! Holds the three persisted objects in memory and writes each one back on
//! every change. A failed write keeps the in-memory value (last write wins)
//! and reports the error so the UI can show it.

use crate::error::Result;
use crate::persist;
use crate::profile::{Profile, ProfileOverview};
use crate::settings::UserSettings;
use crate::storage::KeyValueStore;

#[derive(Debug)]
pub struct AppState<S> {
    store: S,
    profile: Profile,
    overview: ProfileOverview,
    settings: UserSettings,
}

impl<S: KeyValueStore> AppState<S> {
    /// Load everything from `store`, falling back to defaults per object
    ///
    /// Both profile objects are written with defaults on first load; settings
    /// are only written once the user saves them.
    pub fn load(store: S) -> Self {
        let profile: Profile = persist::load_or_init(&store);
        let overview: ProfileOverview = persist::load_or_init(&store);
        let settings: UserSettings = persist::load_or_default(&store);
        log::info!("Loaded dashboard state for {}", profile.name);

        AppState {
            store,
            profile,
            overview,
            settings,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn overview(&self) -> &ProfileOverview {
        &self.overview
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_profile(&mut self, profile: Profile) -> Result<()> {
        self.profile = profile;
        persist::save(&self.store, &self.profile)
    }

    pub fn set_overview(&mut self, overview: ProfileOverview) -> Result<()> {
        self.overview = overview;
        persist::save(&self.store, &self.overview)
    }

    pub fn set_settings(&mut self, settings: UserSettings) -> Result<()> {
        self.settings = settings;
        persist::save(&self.store, &self.settings)
    }

    /// Replace just the profile avatar (image URL or data URL)
    pub fn set_profile_avatar(&mut self, avatar_src: String) -> Result<()> {
        let profile = Profile {
            avatar_src,
            ..self.profile.clone()
        };
        self.set_profile(profile)
    }

    pub fn set_overview_avatar(&mut self, avatar_src: String) -> Result<()> {
        let overview = ProfileOverview {
            avatar_src,
            ..self.overview.clone()
        };
        self.set_overview(overview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::storage::MemoryStore;

    /// Store whose writes always fail, like a full localStorage
    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<()> {
            Err(Error::storage(key, "quota exceeded"))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_fresh_state_uses_defaults() {
        let state = AppState::load(MemoryStore::new());
        assert_eq!(state.profile(), &Profile::default());
        assert_eq!(state.overview(), &ProfileOverview::default());
        assert_eq!(state.settings(), &UserSettings::default());
        assert_eq!(state.store().len(), 2);
    }

    #[test]
    fn test_changes_survive_reload() {
        let store = MemoryStore::new();

        let mut state = AppState::load(&store);
        let profile = Profile {
            name: "Ada Obi".to_string(),
            ..Profile::default()
        };
        state.set_profile(profile.clone()).unwrap();
        state.set_overview_avatar("https://example.com/a.png".to_string()).unwrap();

        let reloaded = AppState::load(&store);
        assert_eq!(reloaded.profile(), &profile);
        assert_eq!(reloaded.overview().avatar_src, "https://example.com/a.png");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_survives_unwritable_store() {
        let state = AppState::load(FullStore);
        assert_eq!(state.profile(), &Profile::default());
    }

    #[test]
    fn test_failed_write_keeps_memory_value() {
        let mut state = AppState::load(FullStore);
        let settings = UserSettings {
            dark_mode: true,
            ..UserSettings::default()
        };

        let err = state.set_settings(settings).unwrap_err();
        assert!(matches!(err, Error::Storage { .. }));
        assert!(state.settings().dark_mode);
    }

    #[test]
    fn test_avatar_update_keeps_other_fields() {
        let mut state = AppState::load(MemoryStore::new());
        state.set_profile_avatar("data:image/png;base64,AAAA".to_string()).unwrap();
        assert_eq!(state.profile().avatar_src, "data:image/png;base64,AAAA");
        assert_eq!(state.profile().name, Profile::default().name);
    }
}
