//! Derived earnings and portfolio metrics
//!
//! Everything here is recomputed from the stored totals on each render;
//! nothing is cached and nothing mutates the inputs.

use crate::client::{Client, ClientStatus};
use crate::earnings::{EarningsBucket, EarningsTable, TimeRange};
use crate::error::Result;
use crate::project::{Project, ProjectStatus};

/// Round half-up to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `part` as a percentage of `whole`, one decimal. Zero when `whole` is not positive.
pub fn share_percent(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        return 0.0;
    }
    round_to(part / whole * 100.0, 1)
}

/// `total / count`, or `None` when there is nothing to divide by
pub fn average_value(total: f64, count: u32) -> Option<f64> {
    (count > 0).then(|| total / f64::from(count))
}

/// The selected bucket plus the values computed from it
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub range: TimeRange,
    pub bucket: EarningsBucket,
    pub recurring_share: f64,
    pub one_time_share: f64,
    /// `None` when the bucket has no completed projects
    pub average_project_value: Option<f64>,
}

/// Look up `key` (monthly/quarterly/yearly) and derive its metrics
pub fn aggregate(table: &EarningsTable, key: &str) -> Result<DerivedMetrics> {
    let range = key.parse()?;
    Ok(aggregate_range(table, range))
}

pub fn aggregate_range(table: &EarningsTable, range: TimeRange) -> DerivedMetrics {
    let bucket = table.bucket(range);
    DerivedMetrics {
        range,
        bucket: bucket.clone(),
        recurring_share: share_percent(bucket.recurring, bucket.total),
        one_time_share: share_percent(bucket.one_time, bucket.total),
        average_project_value: average_value(bucket.total, bucket.completed_projects),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectStats {
    pub total: usize,
    pub ongoing: usize,
    pub upcoming: usize,
    pub completed: usize,
    /// Completed projects as a share of all projects
    pub completion_rate: f64,
    pub total_budget: f64,
    pub average_progress: Option<f64>,
}

pub fn project_stats(projects: &[Project]) -> ProjectStats {
    let count = |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();
    let completed = count(ProjectStatus::Completed);
    let progress_sum: f64 = projects.iter().map(|p| f64::from(p.progress)).sum();

    ProjectStats {
        total: projects.len(),
        ongoing: count(ProjectStatus::Ongoing),
        upcoming: count(ProjectStatus::Upcoming),
        completed,
        completion_rate: share_percent(completed as f64, projects.len() as f64),
        total_budget: projects.iter().map(|p| p.budget).sum(),
        average_progress: average_value(progress_sum, projects.len() as u32).map(|v| round_to(v, 1)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientStats {
    pub total: usize,
    pub active: usize,
    pub active_projects: u32,
    pub lifetime_revenue: f64,
}

pub fn client_stats(clients: &[Client]) -> ClientStats {
    ClientStats {
        total: clients.len(),
        active: clients.iter().filter(|c| c.status == ClientStatus::Active).count(),
        active_projects: clients.iter().map(|c| c.active_projects).sum(),
        lifetime_revenue: clients.iter().map(|c| c.total_spent).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sample;

    #[test]
    fn test_monthly_shares() {
        let metrics = aggregate(&sample::earnings(), "monthly").unwrap();
        assert_eq!(metrics.range, TimeRange::Monthly);
        assert_eq!(metrics.recurring_share, 61.5);
        assert_eq!(metrics.one_time_share, 38.5);
    }

    #[test]
    fn test_average_project_value() {
        let metrics = aggregate(&sample::earnings(), "yearly").unwrap();
        let avg = metrics.average_project_value.unwrap();
        // 69500 / 165
        assert!((avg - 421.21).abs() < 0.01);
    }

    #[test]
    fn test_average_without_completed_projects() {
        let mut table = sample::earnings();
        table.monthly.completed_projects = 0;
        let metrics = aggregate_range(&table, TimeRange::Monthly);
        assert_eq!(metrics.average_project_value, None);
    }

    #[test]
    fn test_unknown_key_fails() {
        let err = aggregate(&sample::earnings(), "weekly").unwrap_err();
        assert!(matches!(err, Error::Lookup { .. }));
    }

    #[test]
    fn test_aggregate_leaves_table_untouched() {
        let table = sample::earnings();
        let before = table.clone();
        let _ = aggregate(&table, "quarterly").unwrap();
        assert_eq!(table, before);
    }

    #[test]
    fn test_complementary_shares_sum_to_100() {
        let wholes = [1.0, 3.0, 7.0, 5200.0, 15800.0, 69500.0, 12345.67];
        for whole in wholes {
            for step in 0..=10 {
                let part = whole * f64::from(step) / 10.0;
                let sum = share_percent(part, whole) + share_percent(whole - part, whole);
                assert!((sum - 100.0).abs() <= 0.1 + 1e-9, "whole={whole} part={part} sum={sum}");
            }
        }
    }

    #[test]
    fn test_share_of_zero_whole() {
        assert_eq!(share_percent(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_to(61.25, 1), 61.3);
        assert_eq!(round_to(38.4615, 1), 38.5);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_project_stats() {
        let stats = project_stats(&sample::projects());
        assert_eq!(stats.total, 6);
        assert_eq!(stats.ongoing, 2);
        assert_eq!(stats.upcoming, 1);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.completion_rate, 33.3);
        assert_eq!(stats.total_budget, 75500.0);
        // (65 + 35 + 10 + 100 + 25 + 100) / 6
        assert_eq!(stats.average_progress, Some(55.8));
    }

    #[test]
    fn test_project_stats_empty() {
        let stats = project_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.average_progress, None);
    }

    #[test]
    fn test_client_stats() {
        let stats = client_stats(&sample::clients());
        assert_eq!(stats.total, 6);
        assert_eq!(stats.active, 5);
        assert_eq!(stats.active_projects, 12);
        assert_eq!(stats.lifetime_revenue, 292400.0);
    }
}
