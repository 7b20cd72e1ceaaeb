//! Account settings and password change validation

use serde::{Deserialize, Serialize};

use crate::config::CONFIG;
use crate::error::{Error, Result};
use crate::persist::Persisted;
use crate::validation;

/// Minimum length for a new password
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Timezone {
    #[default]
    #[serde(rename = "UTC-5")]
    Eastern,
    #[serde(rename = "UTC-6")]
    Central,
    #[serde(rename = "UTC-7")]
    Mountain,
    #[serde(rename = "UTC-8")]
    Pacific,
}

impl Timezone {
    pub const ALL: [Timezone; 4] = [Timezone::Eastern, Timezone::Central, Timezone::Mountain, Timezone::Pacific];

    pub fn offset(&self) -> &'static str {
        match self {
            Timezone::Eastern => "UTC-5",
            Timezone::Central => "UTC-6",
            Timezone::Mountain => "UTC-7",
            Timezone::Pacific => "UTC-8",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timezone::Eastern => "Eastern Time (UTC-5)",
            Timezone::Central => "Central Time (UTC-6)",
            Timezone::Mountain => "Mountain Time (UTC-7)",
            Timezone::Pacific => "Pacific Time (UTC-8)",
        }
    }

    pub fn from_offset(offset: &str) -> Result<Self> {
        Timezone::ALL
            .into_iter()
            .find(|tz| tz.offset() == offset)
            .ok_or_else(|| Error::lookup("timezone", offset))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "CAD")]
    Cad,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Cad];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar (USD)",
            Currency::Eur => "Euro (EUR)",
            Currency::Gbp => "British Pound (GBP)",
            Currency::Cad => "Canadian Dollar (CAD)",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| Error::lookup("currency", code))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notifications {
    pub project_updates: bool,
    pub payment_alerts: bool,
    pub promotional_offers: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Notifications {
            project_updates: true,
            payment_alerts: true,
            promotional_offers: false,
        }
    }
}

/// Everything on the settings page except the password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub profession: String,
    pub hourly_rate: f64,
    pub skills: Vec<String>,
    pub notifications: Notifications,
    pub dark_mode: bool,
    pub timezone: Timezone,
    pub currency: Currency,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            name: "Lauren Jude".to_string(),
            email: "lauren.jude@example.com".to_string(),
            bio: String::new(),
            profession: "Fullstack Developer".to_string(),
            hourly_rate: 75.0,
            skills: vec!["React".to_string(), "Node.js".to_string(), "Rust".to_string()],
            notifications: Notifications::default(),
            dark_mode: false,
            timezone: Timezone::default(),
            currency: Currency::default(),
        }
    }
}

impl Persisted for UserSettings {
    fn storage_key() -> &'static str {
        CONFIG.storage_keys.settings
    }

    fn validate(&self) -> Result<()> {
        if !self.hourly_rate.is_finite() || self.hourly_rate < 0.0 {
            return Err(Error::validation("hourly rate", "must be a non-negative number"));
        }
        Ok(())
    }
}

/// Free-text fields of the profile tab, as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsDraft {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub profession: String,
    pub hourly_rate: String,
    pub skills: String,
}

impl From<&UserSettings> for SettingsDraft {
    fn from(settings: &UserSettings) -> Self {
        SettingsDraft {
            name: settings.name.clone(),
            email: settings.email.clone(),
            bio: settings.bio.clone(),
            profession: settings.profession.clone(),
            hourly_rate: settings.hourly_rate.to_string(),
            skills: settings.skills.join(", "),
        }
    }
}

impl SettingsDraft {
    /// Merge the typed fields into `current`, leaving toggles and selects alone
    pub fn apply(&self, current: &UserSettings) -> Result<UserSettings> {
        Ok(UserSettings {
            name: validation::non_empty("name", &self.name)?,
            email: validation::email("email", &self.email)?,
            bio: self.bio.trim().to_string(),
            profession: self.profession.trim().to_string(),
            hourly_rate: validation::non_negative("hourly rate", &self.hourly_rate)?,
            skills: validation::list(&self.skills),
            ..current.clone()
        })
    }
}

/// Security tab form; never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<()> {
        if self.current.is_empty() {
            return Err(Error::validation("current password", "is required"));
        }
        if self.new.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::validation(
                "new password",
                format!("must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }
        if self.new == self.current {
            return Err(Error::validation("new password", "must differ from the current one"));
        }
        if self.new != self.confirm {
            return Err(Error::validation("confirm password", "does not match"));
        }
        Ok(())
    }

    /// True when nothing has been typed, i.e. no change was requested
    pub fn is_blank(&self) -> bool {
        self.current.is_empty() && self.new.is_empty() && self.confirm.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist;
    use crate::storage::{KeyValueStore, MemoryStore};

    #[test]
    fn test_settings_round_trip() {
        let store = MemoryStore::new();
        let mut settings: UserSettings = persist::load_or_default(&store);
        settings.dark_mode = true;
        settings.timezone = Timezone::Pacific;
        settings.currency = Currency::Eur;

        persist::save(&store, &settings).unwrap();
        let loaded: UserSettings = persist::load_or_default(&store);
        assert_eq!(loaded, settings);

        let raw = store.get("userSettings").unwrap().unwrap();
        assert!(raw.contains(r#""timezone":"UTC-8""#));
        assert!(raw.contains(r#""currency":"EUR""#));
    }

    #[test]
    fn test_legacy_settings_keep_known_fields() {
        let legacy = r#"{"name":"Lauren Jude","email":"l@example.com","notificationsEnabled":true,"darkMode":true,"currency":"USD","timezone":"UTC-6"}"#;
        let store = MemoryStore::with_items([("userSettings", legacy)]);

        let settings: UserSettings = persist::load_or_default(&store);
        assert_eq!(settings.email, "l@example.com");
        assert!(settings.dark_mode);
        assert_eq!(settings.timezone, Timezone::Central);
        assert_eq!(settings.hourly_rate, UserSettings::default().hourly_rate);
    }

    #[test]
    fn test_unknown_currency_falls_back_to_defaults() {
        let legacy = r#"{"name":"Lauren Jude","currency":"UTC-5"}"#;
        let store = MemoryStore::with_items([("userSettings", legacy)]);
        let settings: UserSettings = persist::load_or_default(&store);
        assert_eq!(settings, UserSettings::default());
    }

    #[test]
    fn test_draft_apply_keeps_toggles() {
        let current = UserSettings {
            dark_mode: true,
            ..UserSettings::default()
        };
        let mut draft = SettingsDraft::from(&current);
        draft.skills = "Rust, WebAssembly".to_string();
        draft.hourly_rate = "90".to_string();

        let updated = draft.apply(&current).unwrap();
        assert!(updated.dark_mode);
        assert_eq!(updated.skills, vec!["Rust", "WebAssembly"]);
        assert_eq!(updated.hourly_rate, 90.0);
    }

    #[test]
    fn test_draft_rejects_bad_email_and_rate() {
        let current = UserSettings::default();

        let mut draft = SettingsDraft::from(&current);
        draft.email = "not-an-email".to_string();
        assert!(matches!(draft.apply(&current), Err(Error::Validation { field: "email", .. })));

        let mut draft = SettingsDraft::from(&current);
        draft.hourly_rate = "-5".to_string();
        assert!(draft.apply(&current).is_err());
    }

    #[test]
    fn test_password_change() {
        let ok = PasswordChange {
            current: "old-secret".to_string(),
            new: "n3w-Secret!".to_string(),
            confirm: "n3w-Secret!".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short = PasswordChange {
            new: "short".to_string(),
            confirm: "short".to_string(),
            ..ok.clone()
        };
        assert!(short.validate().is_err());

        let mismatch = PasswordChange {
            confirm: "something-else".to_string(),
            ..ok.clone()
        };
        assert!(matches!(
            mismatch.validate(),
            Err(Error::Validation {
                field: "confirm password",
                ..
            })
        ));

        assert!(PasswordChange::default().is_blank());
    }

    #[test]
    fn test_lookup_helpers() {
        assert_eq!(Timezone::from_offset("UTC-7").unwrap(), Timezone::Mountain);
        assert_eq!(Currency::from_code("GBP").unwrap(), Currency::Gbp);
        assert!(Currency::from_code("JPY").is_err());
    }
}
