//! CSV earnings report for the "Export" button

use crate::earnings::Transaction;
use crate::error::{Error, Result};
use crate::format::format_percent;
use crate::metrics::DerivedMetrics;

/// File name offered to the browser, e.g. `earnings-report-monthly.csv`
pub fn report_filename(metrics: &DerivedMetrics) -> String {
    format!("earnings-report-{}.csv", metrics.range.key())
}

/// Summary, chart series and transactions as one flexible CSV document
pub fn earnings_csv(metrics: &DerivedMetrics, transactions: &[Transaction]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(Vec::new());
    let bucket = &metrics.bucket;

    wtr.write_record(["Section", "Item", "Value"])?;
    let summary = [
        ("Range", metrics.range.label().to_string()),
        ("Total Earnings", format!("{:.2}", bucket.total)),
        ("Recurring Income", format!("{:.2}", bucket.recurring)),
        ("Recurring Share", format_percent(metrics.recurring_share, 1)),
        ("One-Time Projects", format!("{:.2}", bucket.one_time)),
        ("One-Time Share", format_percent(metrics.one_time_share, 1)),
        (
            "Avg. Project Value",
            metrics
                .average_project_value
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| "No data".to_string()),
        ),
        ("Completed Projects", bucket.completed_projects.to_string()),
        ("Clients", bucket.total_clients.to_string()),
        ("Growth", format_percent(bucket.growth, 1)),
    ];
    for (item, value) in &summary {
        wtr.write_record(["Summary", *item, value.as_str()])?;
    }

    for point in &bucket.chart {
        wtr.write_record(["Chart", point.label.as_str(), format!("{:.2}", point.earnings).as_str()])?;
    }

    wtr.write_record(["Transactions", "Date", "Client", "Amount", "Type", "Status"])?;
    for tx in transactions {
        wtr.write_record([
            "Transaction".to_string(),
            tx.date.format("%Y-%m-%d").to_string(),
            tx.client.clone(),
            format!("{:.2}", tx.amount),
            tx.kind.to_string(),
            tx.status.to_string(),
        ])?;
    }

    let bytes = wtr.into_inner().map_err(|e| Error::Csv(e.into_error().into()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::earnings::TimeRange;
    use crate::metrics::{aggregate, aggregate_range};
    use crate::sample;

    #[test]
    fn test_report_contents() {
        let metrics = aggregate(&sample::earnings(), "monthly").unwrap();
        let csv = earnings_csv(&metrics, &sample::transactions()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Section,Item,Value");
        assert!(lines.contains(&"Summary,Range,Monthly"));
        assert!(lines.contains(&"Summary,Total Earnings,5200.00"));
        assert!(lines.contains(&"Summary,Recurring Share,61.5%"));
        assert!(lines.contains(&"Chart,Jan,3200.00"));
        assert!(lines.contains(&"Transaction,2023-04-10,DesignStudio,850.00,One-Time,Completed"));
        // header + 10 summary + 4 chart + transactions header + 3 transactions
        assert_eq!(lines.len(), 19);
    }

    #[test]
    fn test_report_without_completed_projects() {
        let mut table = sample::earnings();
        table.yearly.completed_projects = 0;
        let metrics = aggregate_range(&table, TimeRange::Yearly);
        let csv = earnings_csv(&metrics, &[]).unwrap();
        assert!(csv.contains("Summary,Avg. Project Value,No data"));
        assert_eq!(report_filename(&metrics), "earnings-report-yearly.csv");
    }
}
