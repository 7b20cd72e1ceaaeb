//! Earnings buckets, chart points and recent transactions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Aggregation period selectable on the earnings page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Monthly, TimeRange::Quarterly, TimeRange::Yearly];

    pub fn key(&self) -> &'static str {
        match self {
            TimeRange::Monthly => "monthly",
            TimeRange::Quarterly => "quarterly",
            TimeRange::Yearly => "yearly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Monthly => "Monthly",
            TimeRange::Quarterly => "Quarterly",
            TimeRange::Yearly => "Yearly",
        }
    }

    /// Name of the chart's x axis for this range
    pub fn axis_label(&self) -> &'static str {
        match self {
            TimeRange::Monthly => "Month",
            TimeRange::Quarterly => "Quarter",
            TimeRange::Yearly => "Year",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TimeRange::ALL
            .into_iter()
            .find(|range| range.key() == s)
            .ok_or_else(|| Error::lookup("time range", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub earnings: f64,
}

/// Pre-computed totals for one time range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsBucket {
    pub total: f64,
    pub completed_projects: u32,
    pub total_clients: u32,
    pub recurring: f64,
    pub one_time: f64,
    /// Growth versus the previous period, in percent
    pub growth: f64,
    pub chart: Vec<ChartPoint>,
}

impl EarningsBucket {
    /// Largest chart value, used to scale bars
    pub fn chart_max(&self) -> f64 {
        self.chart.iter().map(|p| p.earnings).fold(0.0, f64::max)
    }
}

/// One bucket per [`TimeRange`], so lookups by range are total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsTable {
    pub monthly: EarningsBucket,
    pub quarterly: EarningsBucket,
    pub yearly: EarningsBucket,
}

impl EarningsTable {
    pub fn bucket(&self, range: TimeRange) -> &EarningsBucket {
        match range {
            TimeRange::Monthly => &self.monthly,
            TimeRange::Quarterly => &self.quarterly,
            TimeRange::Yearly => &self.yearly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Recurring,
    #[serde(rename = "One-Time")]
    OneTime,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Recurring => write!(f, "Recurring"),
            TransactionType::OneTime => write!(f, "One-Time"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Completed,
    Pending,
}

impl TransactionStatus {
    pub fn color_scheme(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "green",
            TransactionStatus::Pending => "orange",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Completed => write!(f, "Completed"),
            TransactionStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// A payment listed under "Recent Transactions"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub client: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub status: TransactionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_time_range_keys() {
        for range in TimeRange::ALL {
            assert_eq!(range.key().parse::<TimeRange>().unwrap(), range);
        }
    }

    #[test]
    fn test_unknown_time_range_is_lookup_error() {
        let err = "weekly".parse::<TimeRange>().unwrap_err();
        assert!(matches!(err, Error::Lookup { kind: "time range", .. }));
        // Keys are exact; labels are not accepted
        assert!("Monthly".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_bucket_lookup() {
        let table = sample::earnings();
        assert_eq!(table.bucket(TimeRange::Monthly).total, 5200.0);
        assert_eq!(table.bucket(TimeRange::Quarterly).total, 15800.0);
        assert_eq!(table.bucket(TimeRange::Yearly).total, 69500.0);
    }

    #[test]
    fn test_chart_max() {
        let table = sample::earnings();
        assert_eq!(table.yearly.chart_max(), 69500.0);
        assert_eq!(table.quarterly.chart_max(), 21000.0);
    }
}
