//! Project records shown on the projects page and the dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::filter::Searchable;
use crate::priority::Priority;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub status: ProjectStatus,
    pub deadline: NaiveDate,
    /// Percent complete, 0-100
    pub progress: u8,
    pub budget: f64,
    pub client: String,
    pub team: Vec<TeamMember>,
    pub priority: Priority,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Ongoing,
    Upcoming,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Ongoing,
        ProjectStatus::Upcoming,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
        ProjectStatus::Cancelled,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Upcoming => "upcoming",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Upcoming => "Upcoming",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Cancelled => "Cancelled",
        }
    }

    pub fn color_scheme(&self) -> &'static str {
        match self {
            ProjectStatus::Ongoing => "blue",
            ProjectStatus::Upcoming => "purple",
            ProjectStatus::Completed => "green",
            ProjectStatus::OnHold => "orange",
            ProjectStatus::Cancelled => "red",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Accepts either the slug (`on-hold`) or the label (`On Hold`), any case
impl FromStr for ProjectStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.slug().eq_ignore_ascii_case(s) || status.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::lookup("project status", s))
    }
}

impl Searchable for Project {
    type Status = ProjectStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.client]
    }

    fn status(&self) -> ProjectStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slug_and_label() {
        assert_eq!("on-hold".parse::<ProjectStatus>().unwrap(), ProjectStatus::OnHold);
        assert_eq!("On Hold".parse::<ProjectStatus>().unwrap(), ProjectStatus::OnHold);
        assert_eq!("COMPLETED".parse::<ProjectStatus>().unwrap(), ProjectStatus::Completed);
        assert!("paused".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&ProjectStatus::OnHold).unwrap();
        assert_eq!(json, "\"On Hold\"");
    }
}
