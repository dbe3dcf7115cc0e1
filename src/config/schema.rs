use serde::{Deserialize, Serialize};

use crate::scoring::{BadgeConfig, RulesConfig};

/// Top-level scoring configuration file.
///
/// Both sections are optional: a missing `rules` section disables every
/// rule family and a missing `badges` section leaves badge assignment
/// to the built-in fallback thresholds.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub badges: BadgeConfig,
}
