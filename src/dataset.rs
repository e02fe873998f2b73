use crate::models::DailyRecord;
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Reads the daily summary file and parses it. A missing or unreadable
/// file degrades to an empty record set; the dashboard renders blank.
pub async fn load_records(path: &Path) -> Vec<DailyRecord> {
    match fs::read_to_string(path).await {
        Ok(text) => parse_table(&text),
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            Vec::new()
        }
    }
}

/// Parses the five-column summary table: `date,revenue,refunds,net_revenue,order_count`.
///
/// The first line is the header and is always discarded. Fields are split
/// on bare commas with no quoting support; the input is fixed and trusted.
/// Malformed numeric fields become NaN (orders: 0) and flow into the sums
/// unreported. Row order is preserved as given.
pub fn parse_table(text: &str) -> Vec<DailyRecord> {
    text.lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> DailyRecord {
    let mut fields = line.split(',');
    let date = fields.next().unwrap_or_default().trim().to_string();
    let revenue = parse_decimal(fields.next());
    let refunds = parse_decimal(fields.next());
    let net = parse_decimal(fields.next());
    let orders = fields
        .next()
        .and_then(|field| field.trim().parse::<u64>().ok())
        .unwrap_or(0);

    DailyRecord {
        date,
        revenue,
        refunds,
        net,
        orders,
    }
}

fn parse_decimal(field: Option<&str>) -> f64 {
    field
        .and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

pub fn total_revenue(records: &[DailyRecord]) -> f64 {
    records.iter().map(|record| record.revenue).sum()
}

pub fn total_refunds(records: &[DailyRecord]) -> f64 {
    records.iter().map(|record| record.refunds).sum()
}

pub fn total_orders(records: &[DailyRecord]) -> u64 {
    records
        .iter()
        .fold(0u64, |sum, record| sum.saturating_add(record.orders))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
date,revenue,refunds,net_revenue,order_count
2026-08-25,1200.50,20.00,1180.50,14
2026-08-26,980.00,0.00,980.00,11
2026-08-27,1500.25,130.75,1369.50,18
";

    #[test]
    fn parses_rows_in_source_order() {
        let records = parse_table(TABLE);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].date, "2026-08-25");
        assert_eq!(records[2].date, "2026-08-27");
        assert_eq!(records[1].revenue, 980.0);
        assert_eq!(records[2].refunds, 130.75);
        assert_eq!(records[0].orders, 14);
    }

    #[test]
    fn totals_match_column_sums() {
        let records = parse_table(TABLE);
        assert!((total_revenue(&records) - 3680.75).abs() < 1e-9);
        assert!((total_refunds(&records) - 150.75).abs() < 1e-9);
        assert_eq!(total_orders(&records), 43);
    }

    #[test]
    fn header_is_discarded_even_when_numeric() {
        let records = parse_table("2026-01-01,1,2,3,4\n2026-01-02,5,6,7,8\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "2026-01-02");
    }

    #[test]
    fn malformed_decimal_becomes_nan_and_poisons_sum() {
        let records = parse_table("h\n2026-01-01,oops,1.0,1.0,2\n2026-01-02,10.0,1.0,9.0,3\n");
        assert!(records[0].revenue.is_nan());
        assert!(total_revenue(&records).is_nan());
        assert_eq!(total_refunds(&records), 2.0);
    }

    #[test]
    fn short_row_fills_with_nan_and_zero_orders() {
        let records = parse_table("h\n2026-01-01,5.0\n");
        assert_eq!(records[0].revenue, 5.0);
        assert!(records[0].refunds.is_nan());
        assert!(records[0].net.is_nan());
        assert_eq!(records[0].orders, 0);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let records = parse_table("h\n\n2026-01-01,1,1,0,1\n\n");
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn missing_file_degrades_to_empty_records() {
        let records = load_records(Path::new("/nonexistent/daily_summary.csv")).await;
        assert!(records.is_empty());
        assert_eq!(total_revenue(&records), 0.0);
        assert_eq!(total_refunds(&records), 0.0);
        assert_eq!(total_orders(&records), 0);
    }
}
