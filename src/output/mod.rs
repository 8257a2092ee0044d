pub mod formatter;

pub use formatter::{
    format_breakdown, format_score_line, format_scored_table, should_use_colors, ScoredClient,
};
