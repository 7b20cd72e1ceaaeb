//! Client records shown on the clients page

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::filter::Searchable;
use crate::priority::Priority;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Total projects ever done for this client
    pub projects: u32,
    pub active_projects: u32,
    pub total_spent: f64,
    pub last_contact: NaiveDate,
    pub status: ClientStatus,
    pub avatar: String,
    pub notes: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Inactive,
    Prospective,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 3] = [ClientStatus::Active, ClientStatus::Inactive, ClientStatus::Prospective];

    /// Value used in select boxes and URLs
    pub fn slug(&self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Inactive => "inactive",
            ClientStatus::Prospective => "prospective",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
            ClientStatus::Prospective => "Prospective",
        }
    }

    pub fn color_scheme(&self) -> &'static str {
        match self {
            ClientStatus::Active => "green",
            ClientStatus::Inactive => "orange",
            ClientStatus::Prospective => "blue",
        }
    }
}

impl std::fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ClientStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ClientStatus::ALL
            .into_iter()
            .find(|status| status.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::lookup("client status", s))
    }
}

impl Searchable for Client {
    type Status = ClientStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn status(&self) -> ClientStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_through_slug() {
        for status in ClientStatus::ALL {
            assert_eq!(status.slug().parse::<ClientStatus>().unwrap(), status);
        }
        assert!("archived".parse::<ClientStatus>().is_err());
    }

    #[test]
    fn test_client_json_shape() {
        let json = r#"{
            "id": 1,
            "name": "Sarah Johnson",
            "email": "sarah@techcorp.com",
            "phone": "+1 (555) 123-4567",
            "projects": 8,
            "activeProjects": 3,
            "totalSpent": 42500,
            "lastContact": "2023-05-15",
            "status": "active",
            "avatar": "",
            "notes": "Prefers weekly updates",
            "priority": "high"
        }"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.active_projects, 3);
        assert_eq!(client.status, ClientStatus::Active);
        assert_eq!(client.last_contact, NaiveDate::from_ymd_opt(2023, 5, 15).unwrap());
    }
}
