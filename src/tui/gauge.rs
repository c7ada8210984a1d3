//! Category health gauges

use crate::model::{RuleCategory, RuleResultSet};

/// Severity band a health score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Critical,
    Warning,
    Good,
    Excellent,
    Neutral,
}

impl HealthBand {
    /// Map a score to its band.
    ///
    /// The Good and Excellent ranges overlap for 81..=90; Good is tested
    /// first and wins there, so only scores above 90 are Excellent.
    pub fn for_score(score: i32) -> Self {
        if score <= 30 {
            return Self::Critical;
        }
        if score > 30 && score <= 70 {
            return Self::Warning;
        }
        if score > 70 && score <= 90 {
            return Self::Good;
        }
        if score > 80 {
            return Self::Excellent;
        }
        Self::Neutral
    }
}

/// Health display for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGauge {
    pub label: String,
    score: u16,
}

impl CategoryGauge {
    pub fn new(label: impl Into<String>, score: i32) -> Self {
        Self {
            label: label.into(),
            score: score.clamp(0, 100) as u16,
        }
    }

    /// One gauge per category, health computed once each, plus an optional
    /// overall gauge averaging them.
    pub fn for_categories(
        categories: &[RuleCategory],
        results: &RuleResultSet,
        overall: bool,
    ) -> Vec<Self> {
        let mut gauges: Vec<Self> = categories
            .iter()
            .map(|cat| Self::new(&cat.name, results.calculate_category_health(&cat.id)))
            .collect();

        if overall && !gauges.is_empty() {
            let total: u32 = gauges.iter().map(|g| u32::from(g.score)).sum();
            let mean = total / gauges.len() as u32;
            gauges.push(Self::new("Overall Health", mean as i32));
        }
        gauges
    }

    pub fn score(&self) -> u16 {
        self.score
    }

    pub fn band(&self) -> HealthBand {
        HealthBand::for_score(i32::from(self.score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Rule, RuleFunctionResult, Severity};

    #[test]
    fn test_band_boundaries() {
        let cases = [
            (0, HealthBand::Critical),
            (30, HealthBand::Critical),
            (31, HealthBand::Warning),
            (70, HealthBand::Warning),
            (71, HealthBand::Good),
            (80, HealthBand::Good),
            (81, HealthBand::Good),
            (90, HealthBand::Good),
            (91, HealthBand::Excellent),
            (100, HealthBand::Excellent),
        ];
        for (score, band) in cases {
            assert_eq!(HealthBand::for_score(score), band, "score {}", score);
        }
    }

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(CategoryGauge::new("x", -5).score(), 0);
        assert_eq!(CategoryGauge::new("x", 250).score(), 100);
        assert_eq!(CategoryGauge::new("x", 250).band(), HealthBand::Excellent);
    }

    #[test]
    fn test_overall_gauge_is_mean() {
        let cats = vec![
            RuleCategory::new("a", "A", ""),
            RuleCategory::new("b", "B", ""),
        ];
        let results = RuleResultSet::from_violations(
            vec![RuleFunctionResult {
                rule_id: "r".to_string(),
                message: "m".to_string(),
                path: String::new(),
                range: None,
                suggested_fix: None,
            }],
            vec![Rule::new("other", "a", Severity::Warn)],
            |id| Rule::new(id, "a", Severity::Warn),
        );

        let gauges = CategoryGauge::for_categories(&cats, &results, true);
        assert_eq!(gauges.len(), 3);
        assert_eq!(gauges[0].score(), 50);
        assert_eq!(gauges[1].score(), 100);
        assert_eq!(gauges[2].label, "Overall Health");
        assert_eq!(gauges[2].score(), 75);

        assert_eq!(CategoryGauge::for_categories(&cats, &results, false).len(), 2);
    }
}
