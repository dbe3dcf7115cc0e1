pub mod formatter;

pub use formatter::{badge_counts, format_summary, should_use_colors};
