use std::fmt;

use super::config::{BadgeConfig, BadgeRange};

/// Fallback thresholds used when the exact tier ranges don't resolve.
const DEFAULT_TOP_MIN: i64 = 18;
const DEFAULT_MEDIUM_MIN: i64 = 13;

/// Badge tier. Ordered so that `Low < Medium < Top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Badge {
    Low,
    Medium,
    Top,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Top => "Top",
            Badge::Medium => "Medium",
            Badge::Low => "Low",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a final score to a badge tier.
///
/// Two stages. First, tiers are checked in the fixed order top, medium,
/// low: a tier with BOTH bounds configured and `min <= score <= max`
/// wins outright. If no tier matches (gaps between ranges, partial
/// bounds, or no badge config at all), open-ended thresholds apply:
/// `score >= top.min` (18 when unset) gives Top, `score >= medium.min`
/// (13 when unset) gives Medium, anything else Low.
///
/// The fallback deliberately reuses the configured mins, so
/// non-contiguous ranges can resolve differently in the two stages.
/// Both stages are kept as-is for config compatibility.
pub fn assign_badge(score: i64, badges: &BadgeConfig) -> Badge {
    let tiers = [
        (&badges.top, Badge::Top),
        (&badges.medium, Badge::Medium),
        (&badges.low, Badge::Low),
    ];
    for (range, badge) in tiers {
        if let Some(BadgeRange {
            min: Some(min),
            max: Some(max),
        }) = range
        {
            if *min <= score && score <= *max {
                return badge;
            }
        }
    }

    let top_min = badges
        .top
        .as_ref()
        .and_then(|r| r.min)
        .unwrap_or(DEFAULT_TOP_MIN);
    if score >= top_min {
        return Badge::Top;
    }
    let medium_min = badges
        .medium
        .as_ref()
        .and_then(|r| r.min)
        .unwrap_or(DEFAULT_MEDIUM_MIN);
    if score >= medium_min {
        return Badge::Medium;
    }
    Badge::Low
}
