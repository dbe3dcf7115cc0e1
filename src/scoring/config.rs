use serde::{Deserialize, Serialize};

/// Rule set applied to each row.
///
/// Each rule family is optional and independently toggleable: an absent
/// family contributes nothing and produces no rule hit. Unknown keys in
/// the YAML are ignored.
///
/// Example YAML:
/// ```yaml
/// rules:
///   sales_units:
///     bins: [[100, 5], [50, 3], [0, 1]]
///   visited_last_year:
///     "true": 1
///   strategic_region:
///     values: [EMEA, APAC]
///     points: 2
///   missing_account_manager:
///     when_false_has_manager: -2
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RulesConfig {
    /// Binned metric: units sold
    #[serde(default)]
    pub sales_units: Option<BinnedRule>,

    /// Binned metric: revenue
    #[serde(default)]
    pub revenue: Option<BinnedRule>,

    /// Binned metric: new clients acquired
    #[serde(default)]
    pub new_clients: Option<BinnedRule>,

    /// Binned metric: repeat orders
    #[serde(default)]
    pub repeat_orders: Option<BinnedRule>,

    /// Bonus awarded when the row's `visited_last_year` flag is true
    #[serde(default)]
    pub visited_last_year: Option<VisitBonusRule>,

    /// Bonus awarded when the row's `region` is in a configured set
    #[serde(default)]
    pub strategic_region: Option<RegionBonusRule>,

    /// Penalty applied when the row's `has_account_manager` flag is false
    #[serde(default)]
    pub missing_account_manager: Option<ManagerPenaltyRule>,
}

impl RulesConfig {
    /// Look up a binned-metric rule by its column name.
    /// Returns None for names outside the four recognized columns.
    pub fn binned(&self, col: &str) -> Option<&BinnedRule> {
        match col {
            "sales_units" => self.sales_units.as_ref(),
            "revenue" => self.revenue.as_ref(),
            "new_clients" => self.new_clients.as_ref(),
            "repeat_orders" => self.repeat_orders.as_ref(),
            _ => None,
        }
    }
}

/// One threshold bin: `[threshold, points]` in YAML.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct Bin(pub f64, pub i64);

impl Bin {
    pub fn threshold(&self) -> f64 {
        self.0
    }

    pub fn points(&self) -> i64 {
        self.1
    }
}

/// Binned-metric rule body.
///
/// Bins are scanned in the order given; configuration is trusted to
/// supply them sorted by descending threshold. An empty list is legal
/// and always yields 0 points.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BinnedRule {
    #[serde(default)]
    pub bins: Option<Vec<Bin>>,
}

/// Boolean-bonus rule body. The point value lives under the literal
/// YAML key `true`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct VisitBonusRule {
    #[serde(rename = "true", default)]
    pub points_when_true: Option<i64>,
}

/// Categorical-bonus rule body.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RegionBonusRule {
    /// Region names that qualify for the bonus
    #[serde(default)]
    pub values: Option<Vec<String>>,

    /// Points awarded on a match (default: 0)
    #[serde(default)]
    pub points: Option<i64>,
}

/// Boolean-penalty rule body. The value is typically negative.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ManagerPenaltyRule {
    #[serde(default)]
    pub when_false_has_manager: Option<i64>,
}

/// Badge tier ranges, checked in the fixed order top, medium, low.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct BadgeConfig {
    #[serde(default)]
    pub top: Option<BadgeRange>,

    #[serde(default)]
    pub medium: Option<BadgeRange>,

    #[serde(default)]
    pub low: Option<BadgeRange>,
}

/// Inclusive score range for one badge tier. Both bounds are optional;
/// a tier only matches exactly when both are present.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
pub struct BadgeRange {
    #[serde(default)]
    pub min: Option<i64>,

    #[serde(default)]
    pub max: Option<i64>,
}
