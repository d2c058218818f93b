use anyhow::{Context, Result};
use chrono::Duration;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::footprint::{FactorEntry, Priority, ScoreBreakdown, ScoreResult};
use crate::history::HistoryEntry;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format kg CO2e compactly: "847.25 kg", "1.5 t", "2.3 kt"
pub fn format_emissions(kg: f64) -> String {
    // Pick the unit from the value as it will print, so 999.999 kg reads "1 t"
    let tons_shown = (kg / 100.0).round() / 10.0;
    let formatted = if tons_shown.abs() >= 1_000.0 {
        format!("{:.1} kt", kg / 1_000_000.0)
    } else if (kg * 100.0).round().abs() >= 100_000.0 {
        format!("{:.1} t", kg / 1_000.0)
    } else {
        format!("{:.2} kg", kg)
    };

    // Trim trailing .0 (e.g., "1.0 t" -> "1 t")
    formatted.replace(".0 t", " t").replace(".0 kt", " kt")
}

fn priority_tag(priority: Priority, use_colors: bool) -> String {
    let tag = format!("[{}]", priority.as_str());
    if !use_colors {
        return tag;
    }
    match priority {
        Priority::High => tag.red().bold().to_string(),
        Priority::Medium => tag.yellow().to_string(),
        Priority::Low => tag.green().to_string(),
    }
}

/// Format a footprint result as a multi-line report
pub fn format_report(farm: Option<&str>, result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    if let Some(farm) = farm {
        if use_colors {
            lines.push(farm.bold().to_string());
        } else {
            lines.push(farm.to_string());
        }
    }

    let score = format!("{}/100", result.sustainability_score);
    let score = if use_colors {
        score.bold().to_string()
    } else {
        score
    };

    lines.push(format!(
        "  Baseline footprint:     {}",
        format_emissions(result.baseline_footprint)
    ));
    lines.push(format!(
        "  Eco-friendly footprint: {}",
        format_emissions(result.ecofriendly_footprint)
    ));
    lines.push(format!("  Reduction:              {}%", result.reduction_percent));
    lines.push(format!("  Sustainability score:   {}", score));
    lines.push(format!(
        "  Carbon credit:          {:.2} t CO2e, est. value {:.2}",
        result.credit_potential.reduction_tons, result.credit_potential.value_estimate
    ));

    if !result.recommendations.is_empty() {
        lines.push(String::new());
        lines.push("Recommendations:".to_string());
        let width = get_terminal_width();
        for (idx, rec) in result.recommendations.iter().enumerate() {
            let savings = rec
                .co2_savings_kg
                .map(|kg| format!(" (saves {})", format_emissions(kg)))
                .unwrap_or_default();
            lines.push(format!(
                "{:>3}. {} {}{}",
                idx + 1,
                priority_tag(rec.priority, use_colors),
                rec.title,
                savings
            ));
            let description = match width {
                Some(w) if w > 20 => truncate(&rec.description, w - 7),
                _ => rec.description.clone(),
            };
            if use_colors {
                lines.push(format!("       {}", description.dimmed()));
            } else {
                lines.push(format!("       {}", description));
            }
        }
    }

    lines.join("\n")
}

/// Render a footprint result as pretty JSON with camelCase field names
pub fn format_json(result: &ScoreResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize footprint result")
}

/// Format the score breakdown (verbose mode)
pub fn format_breakdown(breakdown: &ScoreBreakdown) -> String {
    let mut lines = vec![format!("  Base: {}", breakdown.base)];
    for bonus in &breakdown.bonuses {
        lines.push(format!("  {:+} {}", bonus.points, bonus.label));
    }
    let raw = breakdown.raw_total();
    let clamped = breakdown.clamped_total();
    if raw != clamped as i32 {
        lines.push(format!("  = {} (clamped to {})", raw, clamped));
    } else {
        lines.push(format!("  = {}", raw));
    }
    lines.join("\n")
}

/// Format emission factors as aligned rows: category, subtype, factor, unit
pub fn format_factor_table(entries: &[FactorEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            format!(
                "{:<11} {:<13} {:>7.3} kg CO2e/{}",
                e.category, e.subtype, e.factor, e.unit
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format saved results as a table with columns: Index, Age, Score, Reduction, Farm
pub fn format_history_table(entries: &[&HistoryEntry], use_colors: bool) -> String {
    if entries.is_empty() {
        return "No saved results.".to_string();
    }

    let term_width = get_terminal_width();
    // Index (4) + age (4) + score (7) + reduction (5) + separators
    let fixed_width = 4 + 1 + 4 + 2 + 7 + 2 + 5 + 2;

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let index_str = format!("{:>3}.", idx + 1);
            let age = format!("{:>4}", format_age(entry.age()));
            let score = format!("{:>3}/100", entry.result.sustainability_score);
            let reduction = format!("{:>4}%", entry.result.reduction_percent);

            let farm = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate(&entry.farm, width - fixed_width)
                }
                Some(_) => truncate(&entry.farm, 20),
                None => entry.farm.clone(),
            };

            if use_colors {
                format!(
                    "{} {}  {}  {}  {}",
                    index_str.dimmed(),
                    age,
                    score.bold(),
                    reduction,
                    farm
                )
            } else {
                format!("{} {}  {}  {}  {}", index_str, age, score, reduction, farm)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format saved results as tab-separated values for scripting
/// Columns: computed_at, farm, score, reduction_percent, baseline, eco (no headers, no colors)
pub fn format_tsv(entries: &[&HistoryEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                entry.computed_at.to_rfc3339(),
                entry.farm,
                entry.result.sustainability_score,
                entry.result.reduction_percent,
                entry.result.baseline_footprint,
                entry.result.ecofriendly_footprint
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}
