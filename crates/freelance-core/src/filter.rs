//! Free-text search plus status facet over in-memory records
//!
//! A record is kept when the query is empty or is a case-insensitive
//! substring of one of its search fields, and its status satisfies the facet.
//! Input order is preserved and the source slice is never touched.

use std::str::FromStr;

use crate::error::{Error, Result};

/// A record that can be narrowed by text query and status
pub trait Searchable {
    type Status: Copy + PartialEq;

    /// Fields the free-text query is matched against
    fn search_fields(&self) -> Vec<&str>;

    fn status(&self) -> Self::Status;
}

/// Status constraint: everything, or one exact status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFacet<S> {
    #[default]
    All,
    Only(S),
}

/// Select-box sentinel meaning "no status constraint"
pub const ALL_FACET: &str = "all";

impl<S: Copy + PartialEq> StatusFacet<S> {
    pub fn admits(&self, status: S) -> bool {
        match self {
            StatusFacet::All => true,
            StatusFacet::Only(wanted) => *wanted == status,
        }
    }
}

impl<S> FromStr for StatusFacet<S>
where
    S: FromStr<Err = Error>,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == ALL_FACET {
            return Ok(StatusFacet::All);
        }
        s.parse().map(StatusFacet::Only)
    }
}

/// True when `query` is empty or occurs in any search field, ignoring case
pub fn matches_query<T: Searchable>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records matching both the query and the facet, in input order
pub fn filter<'a, T: Searchable>(records: &'a [T], query: &str, facet: StatusFacet<T::Status>) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| facet.admits(record.status()) && matches_query(*record, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{Client, ClientStatus};
    use crate::project::{Project, ProjectStatus};
    use crate::sample;

    fn names(clients: &[&Client]) -> Vec<String> {
        clients.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_query_matches_single_client() {
        let clients = sample::clients();
        let result = filter(&clients, "sarah", StatusFacet::All);
        assert_eq!(names(&result), vec!["Sarah Johnson"]);
    }

    #[test]
    fn test_inactive_facet() {
        let clients = sample::clients();
        let result = filter(&clients, "", StatusFacet::Only(ClientStatus::Inactive));
        assert_eq!(names(&result), vec!["David Wilson"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let clients = sample::clients();
        assert!(filter(&clients, "zzz", StatusFacet::All).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let clients: Vec<Client> = Vec::new();
        assert!(filter(&clients, "sarah", StatusFacet::All).is_empty());
        assert!(filter(&clients, "", StatusFacet::All).is_empty());
    }

    #[test]
    fn test_query_matches_email_case_insensitively() {
        let clients = sample::clients();
        let result = filter(&clients, "DESIGNSTUDIO", StatusFacet::All);
        assert_eq!(names(&result), vec!["Michael Chen"]);
    }

    #[test]
    fn test_identity_law() {
        let clients = sample::clients();
        let result = filter(&clients, "", StatusFacet::All);
        assert_eq!(result.len(), clients.len());
        for (kept, original) in result.iter().zip(clients.iter()) {
            assert_eq!(*kept, original);
        }
    }

    #[test]
    fn test_results_are_subset_and_narrowing() {
        let clients = sample::clients();
        let queries = ["", "a", "son", ".com", "zzz", "Jessica"];
        let facets = [
            StatusFacet::All,
            StatusFacet::Only(ClientStatus::Active),
            StatusFacet::Only(ClientStatus::Inactive),
            StatusFacet::Only(ClientStatus::Prospective),
        ];

        for facet in facets {
            let by_status = filter(&clients, "", facet);
            for query in queries {
                let result = filter(&clients, query, facet);
                for record in &result {
                    assert!(clients.iter().any(|c| c == *record));
                    assert!(by_status.iter().any(|c| c == record));
                }
            }
        }
    }

    #[test]
    fn test_preserves_input_order() {
        let clients = sample::clients();
        let result = filter(&clients, "", StatusFacet::Only(ClientStatus::Active));
        let ids: Vec<u32> = result.iter().map(|c| c.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_projects_match_title_or_client() {
        let projects = sample::projects();

        let by_client: Vec<&Project> = filter(&projects, "metrobank", StatusFacet::All);
        assert_eq!(by_client.len(), 1);
        assert_eq!(by_client[0].title, "Mobile Banking App");

        let completed = filter(&projects, "", StatusFacet::Only(ProjectStatus::Completed));
        assert_eq!(completed.len(), 2);

        let both = filter(&projects, "portfolio", StatusFacet::Only(ProjectStatus::Ongoing));
        assert!(both.is_empty());
    }

    #[test]
    fn test_parse_facet() {
        assert_eq!("all".parse::<StatusFacet<ClientStatus>>().unwrap(), StatusFacet::All);
        assert_eq!(
            "inactive".parse::<StatusFacet<ClientStatus>>().unwrap(),
            StatusFacet::Only(ClientStatus::Inactive)
        );
        assert_eq!(
            "On Hold".parse::<StatusFacet<ProjectStatus>>().unwrap(),
            StatusFacet::Only(ProjectStatus::OnHold)
        );

        let err = "archived".parse::<StatusFacet<ClientStatus>>().unwrap_err();
        assert!(matches!(err, Error::Lookup { .. }));
    }
}
