//! Parsing helpers shared by the admin form dialogs.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use content::model::{BusinessHours, CaseStat};

/// Split a textarea into trimmed, non-empty list entries.
#[must_use]
pub fn lines_to_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Join list entries back into textarea content for editing.
#[must_use]
pub fn list_to_lines(items: &[String]) -> String {
    items.join("\n")
}

/// Optional text input: whitespace-only collapses to `None`.
#[must_use]
pub fn optional_field(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Parse `value | label` stat lines, keeping at most the three pairs a case
/// study card renders.
#[must_use]
pub fn parse_stats(text: &str) -> Vec<CaseStat> {
    text.lines()
        .filter_map(|line| {
            let (value, label) = line.split_once('|')?;
            let value = value.trim();
            let label = label.trim();
            if value.is_empty() || label.is_empty() {
                return None;
            }
            Some(CaseStat { value: value.to_owned(), label: label.to_owned() })
        })
        .take(3)
        .collect()
}

/// Render stat pairs back into `value | label` lines for editing.
#[must_use]
pub fn stats_to_lines(stats: &[CaseStat]) -> String {
    stats
        .iter()
        .map(|stat| format!("{} | {}", stat.value, stat.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse `days | hours` rows for the business-hours table.
#[must_use]
pub fn parse_hours(text: &str) -> Vec<BusinessHours> {
    text.lines()
        .filter_map(|line| {
            let (days, hours) = line.split_once('|')?;
            let days = days.trim();
            let hours = hours.trim();
            if days.is_empty() || hours.is_empty() {
                return None;
            }
            Some(BusinessHours { days: days.to_owned(), hours: hours.to_owned() })
        })
        .collect()
}

/// Render business-hours rows back into `days | hours` lines.
#[must_use]
pub fn hours_to_lines(hours: &[BusinessHours]) -> String {
    hours
        .iter()
        .map(|row| format!("{} | {}", row.days, row.hours))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse the rating select value, clamping into the 1..=5 star range.
#[must_use]
pub fn parse_rating(value: &str) -> u8 {
    value.trim().parse::<u8>().unwrap_or(5).clamp(1, 5)
}

/// Parse the FAQ order input, defaulting to the end of the list.
#[must_use]
pub fn parse_order(value: &str) -> u32 {
    value.trim().parse::<u32>().unwrap_or(99)
}
