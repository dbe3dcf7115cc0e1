use std::collections::BTreeMap;
use std::io::IsTerminal;
use std::path::Path;

use owo_colors::OwoColorize;

use crate::scoring::Badge;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Count badges per tier. BTreeMap keeps the output deterministic.
pub fn badge_counts<'a, I>(badges: I) -> BTreeMap<&'static str, usize>
where
    I: IntoIterator<Item = &'a Badge>,
{
    let mut counts = BTreeMap::new();
    for badge in badges {
        *counts.entry(badge.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Format the end-of-run summary: badge distribution as pretty JSON
/// plus the written output path.
pub fn format_summary(
    counts: &BTreeMap<&'static str, usize>,
    out_path: &Path,
    use_colors: bool,
) -> String {
    // Counts serialize infallibly; a string-keyed map has no failing states.
    let distribution =
        serde_json::to_string_pretty(counts).unwrap_or_else(|_| "{}".to_string());

    if use_colors {
        format!(
            "{} {}\n{} {}",
            "Badge distribution:".bold(),
            distribution,
            "Wrote:".bold(),
            out_path.display().underline()
        )
    } else {
        format!(
            "Badge distribution: {}\nWrote: {}",
            distribution,
            out_path.display()
        )
    }
}
