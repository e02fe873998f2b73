use crate::models::FreshnessResponse;
use chrono::{Local, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Yesterday,
    Stale,
}

impl Freshness {
    pub fn label(self) -> &'static str {
        match self {
            Freshness::UpToDate => "Data up to date",
            Freshness::Yesterday => "Data from yesterday",
            Freshness::Stale => "Data stale",
        }
    }

    pub fn level(self) -> &'static str {
        match self {
            Freshness::UpToDate => "ok",
            Freshness::Yesterday => "warn",
            Freshness::Stale => "error",
        }
    }
}

pub fn badge(last_date: Option<&str>) -> FreshnessResponse {
    badge_at(Local::now().date_naive(), last_date)
}

pub fn badge_at(today: NaiveDate, last_date: Option<&str>) -> FreshnessResponse {
    let freshness = classify_at(today, last_date);
    FreshnessResponse {
        label: freshness.label().to_string(),
        level: freshness.level().to_string(),
    }
}

/// Compares calendar days only. Any offset other than 0 or 1 is stale;
/// a future-dated last record is deliberately stale too, not corrected.
pub fn classify_at(today: NaiveDate, last_date: Option<&str>) -> Freshness {
    let Some(date) = last_date.and_then(|raw| raw.trim().parse::<NaiveDate>().ok()) else {
        return Freshness::Stale;
    };

    match (today - date).num_days() {
        0 => Freshness::UpToDate,
        1 => Freshness::Yesterday,
        _ => Freshness::Stale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    #[test]
    fn same_day_is_up_to_date() {
        let today = day("2026-08-30");
        assert_eq!(classify_at(today, Some("2026-08-30")), Freshness::UpToDate);
    }

    #[test]
    fn one_day_back_is_yesterday() {
        let today = day("2026-08-30");
        assert_eq!(classify_at(today, Some("2026-08-29")), Freshness::Yesterday);
    }

    #[test]
    fn older_offsets_are_stale() {
        let today = day("2026-08-30");
        assert_eq!(classify_at(today, Some("2026-08-28")), Freshness::Stale);
        assert_eq!(classify_at(today, Some("2025-12-01")), Freshness::Stale);
    }

    #[test]
    fn future_date_is_stale() {
        let today = day("2026-08-30");
        assert_eq!(classify_at(today, Some("2026-08-31")), Freshness::Stale);
    }

    #[test]
    fn missing_or_garbled_date_is_stale() {
        let today = day("2026-08-30");
        assert_eq!(classify_at(today, None), Freshness::Stale);
        assert_eq!(classify_at(today, Some("not a date")), Freshness::Stale);
        assert_eq!(classify_at(today, Some("")), Freshness::Stale);
    }

    #[test]
    fn badge_carries_label_and_level() {
        let badge = badge_at(day("2026-08-30"), Some("2026-08-29"));
        assert_eq!(badge.label, "Data from yesterday");
        assert_eq!(badge.level, "warn");
    }
}
