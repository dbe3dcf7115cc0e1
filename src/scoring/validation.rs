use super::config::{BadgeConfig, BinnedRule, RulesConfig};
use crate::scoring::engine::BINNED_COLUMNS;

/// Validate rule and badge configuration at startup.
/// Returns all validation errors at once (not just the first).
///
/// A rule body that is present but missing the sub-field its family
/// needs is an error here rather than a silent no-op rule.
pub fn validate_config(rules: &RulesConfig, badges: &BadgeConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for col in BINNED_COLUMNS {
        if let Some(rule) = rules.binned(col) {
            validate_binned(col, rule, &mut errors);
        }
    }

    if let Some(ref visit) = rules.visited_last_year {
        if visit.points_when_true.is_none() {
            errors.push("rules.visited_last_year: missing 'true' point value".to_string());
        }
    }

    if let Some(ref region) = rules.strategic_region {
        if region.values.is_none() {
            errors.push("rules.strategic_region: missing 'values' list".to_string());
        }
    }

    if let Some(ref penalty) = rules.missing_account_manager {
        if penalty.when_false_has_manager.is_none() {
            errors.push(
                "rules.missing_account_manager: missing 'when_false_has_manager'".to_string(),
            );
        }
    }

    for (name, range) in [
        ("top", &badges.top),
        ("medium", &badges.medium),
        ("low", &badges.low),
    ] {
        if let Some(range) = range {
            if let (Some(min), Some(max)) = (range.min, range.max) {
                if min > max {
                    errors.push(format!(
                        "badges.{}: min {} greater than max {}",
                        name, min, max
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_binned(col: &str, rule: &BinnedRule, errors: &mut Vec<String>) {
    let Some(ref bins) = rule.bins else {
        errors.push(format!("rules.{}: missing 'bins' list", col));
        return;
    };
    for (i, bin) in bins.iter().enumerate() {
        if !bin.threshold().is_finite() {
            errors.push(format!(
                "rules.{}.bins[{}]: threshold must be finite",
                col, i
            ));
        }
    }
}
