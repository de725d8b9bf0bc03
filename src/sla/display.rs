// Badge text and progress values derived from an SlaResult

use crate::models::Locale;
use super::calculator::{SlaResult, SlaStatus};

/// Whole hours shown on the badge: overdue hours once breached, else remaining
pub fn badge_hours(result: &SlaResult) -> i64 {
    let hours = match result.status {
        SlaStatus::Breached => -result.hours_remaining,
        _ => result.hours_remaining,
    };
    hours.ceil() as i64
}

/// Badge label, e.g. "Remaining: 14h" or "Overdue: 0h"
pub fn badge_label(result: &SlaResult, locale: Locale) -> String {
    let hours = badge_hours(result);
    match (result.status, locale) {
        (SlaStatus::Breached, Locale::En) => format!("Overdue: {}h", hours),
        (SlaStatus::Breached, Locale::Ar) => format!("متأخر: {} ساعة", hours),
        (_, Locale::En) => format!("Remaining: {}h", hours),
        (_, Locale::Ar) => format!("متبقي: {} ساعة", hours),
    }
}

/// Progress value for a bar, never above 100
pub fn progress_value(result: &SlaResult) -> f64 {
    result.percent_elapsed.min(100.0)
}

/// Fixed-width text bar, e.g. "[######----]"
pub fn progress_bar(result: &SlaResult, width: usize) -> String {
    let filled = ((progress_value(result) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
