use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::clients::Client;
use crate::scoring::ScoreResult;

/// A client with their calculated score for display
pub struct ScoredClient<'a> {
    pub client: &'a Client,
    pub result: &'a ScoreResult,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Paint a score by eligibility band: 70+ green, 40+ yellow, below red.
fn paint_score(score: u32) -> String {
    if score >= 70 {
        score.green().bold().to_string()
    } else if score >= 40 {
        score.yellow().bold().to_string()
    } else {
        score.red().bold().to_string()
    }
}

/// Format the headline result for a single client.
/// Format: "{name} (#{id}): {score}/100"
pub fn format_score_line(client: &Client, result: &ScoreResult, use_colors: bool) -> String {
    if use_colors {
        format!(
            "{} (#{}): {}/100",
            client.name.bold(),
            client.id,
            paint_score(result.score)
        )
    } else {
        format!("{} (#{}): {}/100", client.name, client.id, result.score)
    }
}

/// Format the per-factor breakdown (for verbose mode), one factor per line:
/// "  {label}  {points}/{cap}  {description}", plus the unrounded total.
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let mut lines: Vec<String> = result
        .breakdown
        .factors
        .iter()
        .map(|f| {
            let points = format!("{:>5.2}/{:<2}", f.points, f.cap);
            if use_colors {
                format!("  {:<18}{}  {}", f.label, points.bold(), f.description.dimmed())
            } else {
                format!("  {:<18}{}  {}", f.label, points, f.description)
            }
        })
        .collect();
    lines.push(format!("  {:<18}{:>5.2}", "Total", result.breakdown.total));
    lines.join("\n")
}

/// Format clients as a ranked table with columns: Index, Score, Name, Id.
/// Index column: 3 chars (fits "99."), right-aligned.
/// Score column: right-aligned, 3 chars wide (fits "100").
pub fn format_scored_table(clients: &[ScoredClient], use_colors: bool) -> String {
    if clients.is_empty() {
        return "No clients to score.".to_string();
    }

    clients
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>3}", scored.result.score);

            if use_colors {
                format!(
                    "{} {}  {}  #{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    scored.client.name,
                    scored.client.id
                )
            } else {
                format!(
                    "{} {}  {}  #{}",
                    index_str, score_str, scored.client.name, scored.client.id
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
