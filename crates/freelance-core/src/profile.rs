//! The freelancer's own profile, in its two persisted shapes
//!
//! [`Profile`] backs the dashboard profile card; [`ProfileOverview`] backs the
//! overview card with rating and completion rate. Both are created with
//! defaults on first load and rewritten on every change.

use serde::{Deserialize, Serialize};

use crate::config::CONFIG;
use crate::error::{Error, Result};
use crate::persist::{self, Persisted};
use crate::storage::KeyValueStore;
use crate::validation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub profession: String,
    pub location: String,
    #[serde(deserialize_with = "validation::lenient_u32")]
    pub total_projects: u32,
    /// Image URL or data URL; empty means "use initials"
    #[serde(default)]
    pub avatar_src: String,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: "Lauren Jude".to_string(),
            profession: "Fullstack Developer".to_string(),
            location: "Lagos, Nigeria".to_string(),
            total_projects: 50,
            avatar_src: String::new(),
        }
    }
}

impl Persisted for Profile {
    fn storage_key() -> &'static str {
        CONFIG.storage_keys.profile
    }
}

/// Raw form fields for editing a [`Profile`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub profession: String,
    pub location: String,
    pub total_projects: String,
}

impl From<&Profile> for ProfileDraft {
    fn from(profile: &Profile) -> Self {
        ProfileDraft {
            name: profile.name.clone(),
            profession: profile.profession.clone(),
            location: profile.location.clone(),
            total_projects: profile.total_projects.to_string(),
        }
    }
}

impl ProfileDraft {
    /// Coerce the form into a profile, keeping the current avatar
    pub fn apply(&self, current: &Profile) -> Result<Profile> {
        Ok(Profile {
            name: validation::non_empty("name", &self.name)?,
            profession: self.profession.trim().to_string(),
            location: self.location.trim().to_string(),
            total_projects: validation::whole_number("total projects", &self.total_projects)?,
            avatar_src: current.avatar_src.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOverview {
    pub name: String,
    pub title: String,
    pub location: String,
    pub join_date: String,
    #[serde(deserialize_with = "validation::lenient_u32")]
    pub total_projects: u32,
    /// Percent, 0-100
    pub completion_rate: f64,
    /// Out of five
    pub rating: f64,
    #[serde(default)]
    pub avatar_src: String,
}

impl Default for ProfileOverview {
    fn default() -> Self {
        ProfileOverview {
            name: "Lauren Jude".to_string(),
            title: "Fullstack Developer".to_string(),
            location: "Lagos, Nigeria".to_string(),
            join_date: "January 2021".to_string(),
            total_projects: 50,
            completion_rate: 92.0,
            rating: 4.8,
            avatar_src: String::new(),
        }
    }
}

impl Persisted for ProfileOverview {
    fn storage_key() -> &'static str {
        CONFIG.storage_keys.profile_overview
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.completion_rate) {
            return Err(Error::validation("completion rate", "must be between 0 and 100"));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(Error::validation("rating", "must be between 0 and 5"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileOverviewDraft {
    pub name: String,
    pub title: String,
    pub location: String,
    pub join_date: String,
    pub total_projects: String,
    pub completion_rate: String,
    pub rating: String,
}

impl From<&ProfileOverview> for ProfileOverviewDraft {
    fn from(overview: &ProfileOverview) -> Self {
        ProfileOverviewDraft {
            name: overview.name.clone(),
            title: overview.title.clone(),
            location: overview.location.clone(),
            join_date: overview.join_date.clone(),
            total_projects: overview.total_projects.to_string(),
            completion_rate: overview.completion_rate.to_string(),
            rating: overview.rating.to_string(),
        }
    }
}

impl ProfileOverviewDraft {
    pub fn apply(&self, current: &ProfileOverview) -> Result<ProfileOverview> {
        Ok(ProfileOverview {
            name: validation::non_empty("name", &self.name)?,
            title: self.title.trim().to_string(),
            location: self.location.trim().to_string(),
            join_date: self.join_date.trim().to_string(),
            total_projects: validation::whole_number("total projects", &self.total_projects)?,
            completion_rate: validation::number_in_range("completion rate", &self.completion_rate, 0.0, 100.0)?,
            rating: validation::number_in_range("rating", &self.rating, 0.0, 5.0)?,
            avatar_src: current.avatar_src.clone(),
        })
    }
}

/// Stored profile, or the default one if nothing usable is stored
///
/// The default is written back on first load.
pub fn load_profile<S: KeyValueStore + ?Sized>(store: &S) -> Profile {
    persist::load_or_init(store)
}

pub fn save_profile<S: KeyValueStore + ?Sized>(store: &S, profile: &Profile) -> Result<()> {
    persist::save(store, profile)
}
