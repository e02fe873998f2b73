use crate::models::MetricsResponse;

/// Ad-efficiency banding for revenue / ad spend. `NotApplicable` covers
/// an undefined ratio (no ad spend to divide by).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Efficiency {
    NotApplicable,
    Red,
    Yellow,
    Green,
}

impl Efficiency {
    pub fn label(self) -> &'static str {
        match self {
            Efficiency::NotApplicable => "N/A",
            Efficiency::Red => "RED",
            Efficiency::Yellow => "YELLOW",
            Efficiency::Green => "GREEN",
        }
    }
}

/// A ratio of exactly 1.0 is YELLOW; exactly 3.0 is GREEN.
pub fn classify(ratio: Option<f64>) -> Efficiency {
    match ratio {
        None => Efficiency::NotApplicable,
        Some(value) if value < 1.0 => Efficiency::Red,
        Some(value) if value < 3.0 => Efficiency::Yellow,
        Some(_) => Efficiency::Green,
    }
}

/// Blank or non-numeric ad spend defaults to zero.
pub fn parse_ad_spend(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

pub fn compute(revenue: f64, refunds: f64, ad_spend: f64) -> MetricsResponse {
    let efficiency = if ad_spend > 0.0 {
        Some(revenue / ad_spend)
    } else {
        None
    };

    MetricsResponse {
        revenue,
        refunds,
        ad_spend,
        net_profit: revenue - refunds - ad_spend,
        efficiency,
        status: classify(efficiency).label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ad_spend_is_not_applicable() {
        let metrics = compute(1000.0, 100.0, 0.0);
        assert_eq!(metrics.net_profit, 900.0);
        assert!(metrics.efficiency.is_none());
        assert_eq!(metrics.status, "N/A");
    }

    #[test]
    fn threshold_bands() {
        assert_eq!(compute(1000.0, 100.0, 500.0).status, "YELLOW");
        assert_eq!(compute(1000.0, 100.0, 1000.0).status, "YELLOW");
        assert_eq!(compute(1000.0, 100.0, 1001.0).status, "RED");
        assert_eq!(compute(1000.0, 100.0, 300.0).status, "GREEN");
    }

    #[test]
    fn boundary_three_is_green() {
        assert_eq!(classify(Some(3.0)), Efficiency::Green);
        assert_eq!(classify(Some(2.999_999)), Efficiency::Yellow);
        assert_eq!(classify(Some(1.0)), Efficiency::Yellow);
        assert_eq!(classify(Some(0.999_999)), Efficiency::Red);
    }

    #[test]
    fn negative_ad_spend_has_no_ratio() {
        let metrics = compute(1000.0, 0.0, -5.0);
        assert!(metrics.efficiency.is_none());
        assert_eq!(metrics.net_profit, 1005.0);
    }

    #[test]
    fn ad_spend_parsing_is_lenient() {
        assert_eq!(parse_ad_spend(""), 0.0);
        assert_eq!(parse_ad_spend("   "), 0.0);
        assert_eq!(parse_ad_spend("abc"), 0.0);
        assert_eq!(parse_ad_spend(" 250.5 "), 250.5);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let first = compute(1000.0, 100.0, 500.0);
        let second = compute(1000.0, 100.0, 500.0);
        assert_eq!(first.net_profit, second.net_profit);
        assert_eq!(first.efficiency, second.efficiency);
        assert_eq!(first.status, second.status);
    }
}
