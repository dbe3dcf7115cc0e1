use super::bins::bin_points;
use super::config::RulesConfig;
use crate::dataset::Row;

/// Binned-metric columns, in evaluation order.
pub const BINNED_COLUMNS: [&str; 4] = ["sales_units", "revenue", "new_clients", "repeat_orders"];

/// Result of scoring one row: the summed score and one trace string per
/// fired rule, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: i64,
    pub hits: Vec<String>,
}

/// Score one row against the rule set.
///
/// Evaluation order is fixed: the four binned metrics, then the
/// visited_last_year bonus, then the strategic_region bonus, then the
/// missing_account_manager penalty. Each family fires at most once.
/// Missing row fields resolve to permissive defaults (0 for numbers,
/// false for the visit flag, true for has_account_manager) and never
/// raise an error.
pub fn score_row(row: &Row, rules: &RulesConfig) -> ScoreResult {
    let mut score = 0i64;
    let mut hits = Vec::new();

    for col in BINNED_COLUMNS {
        let Some(bins) = rules.binned(col).and_then(|r| r.bins.as_deref()) else {
            continue;
        };
        let pts = bin_points(row.number(col), bins);
        score += pts;
        hits.push(format!("{}:{}+{}", col, row.raw_or_zero(col), pts));
    }

    if let Some(pts) = rules
        .visited_last_year
        .as_ref()
        .and_then(|r| r.points_when_true)
    {
        if row.bool_or("visited_last_year", false) {
            score += pts;
            hits.push(format!("visited_last_year+{}", pts));
        }
    }

    if let Some(ref region_rule) = rules.strategic_region {
        let values = region_rule.values.as_deref().unwrap_or_default();
        let pts = region_rule.points.unwrap_or(0);
        if let Some(region) = row.string("region") {
            if values.iter().any(|v| v == region) {
                score += pts;
                hits.push(format!("region[{}]+{}", region, pts));
            }
        }
    }

    if let Some(pts) = rules
        .missing_account_manager
        .as_ref()
        .and_then(|r| r.when_false_has_manager)
    {
        if !row.bool_or("has_account_manager", true) {
            score += pts;
            // No '+' separator here; downstream consumers parse this form.
            hits.push(format!("no_manager{}", pts));
        }
    }

    ScoreResult { score, hits }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::config::{
        Bin, BinnedRule, ManagerPenaltyRule, RegionBonusRule, VisitBonusRule,
    };

    fn row(pairs: &[(&str, &str)]) -> Row {
        let mut row = Row::new();
        for (key, value) in pairs {
            row.insert(key.to_string(), value.to_string());
        }
        row
    }

    fn binned(bins: Vec<Bin>) -> Option<BinnedRule> {
        Some(BinnedRule { bins: Some(bins) })
    }

    #[test]
    fn test_empty_rules_score_zero() {
        let result = score_row(&row(&[("sales_units", "120")]), &RulesConfig::default());
        assert_eq!(result.score, 0);
        assert!(result.hits.is_empty());
    }

    #[test]
    fn test_binned_metric_hit_format() {
        let rules = RulesConfig {
            sales_units: binned(vec![Bin(100.0, 5), Bin(50.0, 3), Bin(0.0, 1)]),
            ..Default::default()
        };
        let result = score_row(&row(&[("sales_units", "75")]), &rules);
        assert_eq!(result.score, 3);
        assert_eq!(result.hits, vec!["sales_units:75+3"]);
    }

    #[test]
    fn test_missing_numeric_column_scores_as_zero() {
        let rules = RulesConfig {
            revenue: binned(vec![Bin(1000.0, 4), Bin(0.0, 1)]),
            ..Default::default()
        };
        let result = score_row(&row(&[]), &rules);
        assert_eq!(result.score, 1);
        assert_eq!(result.hits, vec!["revenue:0+1"]);
    }

    #[test]
    fn test_binned_rule_without_bins_is_skipped() {
        let rules = RulesConfig {
            sales_units: Some(BinnedRule { bins: None }),
            ..Default::default()
        };
        let result = score_row(&row(&[("sales_units", "75")]), &rules);
        assert_eq!(result.score, 0);
        assert!(result.hits.is_empty());
    }

    #[test]
    fn test_visit_bonus_fires_on_true() {
        let rules = RulesConfig {
            visited_last_year: Some(VisitBonusRule {
                points_when_true: Some(1),
            }),
            ..Default::default()
        };
        let result = score_row(&row(&[("visited_last_year", "true")]), &rules);
        assert_eq!(result.score, 1);
        assert_eq!(result.hits, vec!["visited_last_year+1"]);
    }

    #[test]
    fn test_visit_bonus_skipped_on_false_or_missing() {
        let rules = RulesConfig {
            visited_last_year: Some(VisitBonusRule {
                points_when_true: Some(1),
            }),
            ..Default::default()
        };
        assert_eq!(score_row(&row(&[("visited_last_year", "false")]), &rules).score, 0);
        assert_eq!(score_row(&row(&[]), &rules).score, 0);
    }

    #[test]
    fn test_region_bonus_on_membership() {
        let rules = RulesConfig {
            strategic_region: Some(RegionBonusRule {
                values: Some(vec!["EMEA".to_string(), "APAC".to_string()]),
                points: Some(2),
            }),
            ..Default::default()
        };
        let result = score_row(&row(&[("region", "APAC")]), &rules);
        assert_eq!(result.score, 2);
        assert_eq!(result.hits, vec!["region[APAC]+2"]);

        let miss = score_row(&row(&[("region", "LATAM")]), &rules);
        assert_eq!(miss.score, 0);
        assert!(miss.hits.is_empty());
    }

    #[test]
    fn test_manager_penalty_fires_only_on_explicit_false() {
        let rules = RulesConfig {
            missing_account_manager: Some(ManagerPenaltyRule {
                when_false_has_manager: Some(-2),
            }),
            ..Default::default()
        };
        let fired = score_row(&row(&[("has_account_manager", "false")]), &rules);
        assert_eq!(fired.score, -2);
        assert_eq!(fired.hits, vec!["no_manager-2"]);

        // Absent flag is treated as having a manager.
        assert_eq!(score_row(&row(&[]), &rules).score, 0);
        assert_eq!(
            score_row(&row(&[("has_account_manager", "true")]), &rules).score,
            0
        );
    }

    #[test]
    fn test_hit_order_is_fixed() {
        let rules = RulesConfig {
            sales_units: binned(vec![Bin(0.0, 1)]),
            repeat_orders: binned(vec![Bin(0.0, 1)]),
            visited_last_year: Some(VisitBonusRule {
                points_when_true: Some(1),
            }),
            strategic_region: Some(RegionBonusRule {
                values: Some(vec!["EMEA".to_string()]),
                points: Some(2),
            }),
            missing_account_manager: Some(ManagerPenaltyRule {
                when_false_has_manager: Some(-2),
            }),
            ..Default::default()
        };
        let row = row(&[
            ("sales_units", "10"),
            ("repeat_orders", "4"),
            ("visited_last_year", "true"),
            ("region", "EMEA"),
            ("has_account_manager", "false"),
        ]);
        let result = score_row(&row, &rules);
        assert_eq!(result.score, 1 + 1 + 1 + 2 - 2);
        assert_eq!(
            result.hits,
            vec![
                "sales_units:10+1",
                "repeat_orders:4+1",
                "visited_last_year+1",
                "region[EMEA]+2",
                "no_manager-2",
            ]
        );
    }

    #[test]
    fn test_score_row_is_pure() {
        let rules = RulesConfig {
            revenue: binned(vec![Bin(100.0, 5), Bin(0.0, 1)]),
            ..Default::default()
        };
        let row = row(&[("revenue", "250")]);
        assert_eq!(score_row(&row, &rules), score_row(&row, &rules));
    }

    #[test]
    fn test_disabling_a_family_removes_exactly_its_contribution() {
        let full = RulesConfig {
            sales_units: binned(vec![Bin(50.0, 3), Bin(0.0, 1)]),
            visited_last_year: Some(VisitBonusRule {
                points_when_true: Some(1),
            }),
            ..Default::default()
        };
        let without_visit = RulesConfig {
            visited_last_year: None,
            ..full.clone()
        };
        let row = row(&[("sales_units", "80"), ("visited_last_year", "true")]);

        let all = score_row(&row, &full);
        let partial = score_row(&row, &without_visit);
        assert_eq!(all.score - partial.score, 1);
        assert_eq!(partial.hits, vec!["sales_units:80+3"]);
        assert_eq!(all.hits.last().unwrap(), "visited_last_year+1");
    }

    #[test]
    fn test_negative_binned_points_render_signed() {
        let rules = RulesConfig {
            new_clients: binned(vec![Bin(5.0, 2), Bin(0.0, -1)]),
            ..Default::default()
        };
        let result = score_row(&row(&[("new_clients", "2")]), &rules);
        assert_eq!(result.score, -1);
        assert_eq!(result.hits, vec!["new_clients:2+-1"]);
    }
}
