// SLA evaluation: how much of a target budget a work item has consumed

use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::models::{Locale, StageColor};
use super::business_hours::HoursPolicy;
use super::target::SlaTarget;

/// Tri-state SLA classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaStatus {
    OnTrack,
    AtRisk,
    Breached,
}

impl SlaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlaStatus::OnTrack => "on_track",
            SlaStatus::AtRisk => "at_risk",
            SlaStatus::Breached => "breached",
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        let labels = match self {
            SlaStatus::OnTrack => ("On Track", "في الموعد"),
            SlaStatus::AtRisk => ("At Risk", "معرض للتأخير"),
            SlaStatus::Breached => ("Breached", "متأخر"),
        };
        locale.pick(labels)
    }

    pub fn color(&self) -> StageColor {
        match self {
            SlaStatus::OnTrack => StageColor::Success,
            SlaStatus::AtRisk => StageColor::Warning,
            SlaStatus::Breached => StageColor::Error,
        }
    }
}

/// Result of one SLA evaluation. Derived on every call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlaResult {
    pub hours_elapsed: f64,
    /// Negative once breached
    pub hours_remaining: f64,
    /// Unbounded above
    pub percent_elapsed: f64,
    pub status: SlaStatus,
}

/// Classify an elapsed-hours figure against a target.
///
/// Both thresholds are inclusive: exactly `target_hours` elapsed is breached,
/// exactly `warning_threshold_percent` is at risk. A non-positive target is a
/// configuration error caught by [`SlaTarget::new`]; here it produces
/// infinite or NaN percentages.
pub fn classify(hours_elapsed: f64, target_hours: f64, warning_threshold_percent: f64) -> SlaResult {
    let hours_remaining = target_hours - hours_elapsed;
    let percent_elapsed = 100.0 * hours_elapsed / target_hours;

    let status = if hours_elapsed >= target_hours {
        SlaStatus::Breached
    } else if percent_elapsed >= warning_threshold_percent {
        SlaStatus::AtRisk
    } else {
        SlaStatus::OnTrack
    };

    SlaResult {
        hours_elapsed,
        hours_remaining,
        percent_elapsed,
        status,
    }
}

/// Evaluate in wall-clock hours. A start time after `now` counts as zero elapsed.
pub fn evaluate(
    started_at: DateTime<Utc>,
    target_hours: f64,
    warning_threshold_percent: f64,
    now: DateTime<Utc>,
) -> SlaResult {
    evaluate_with_policy(&HoursPolicy::WallClock, started_at, target_hours, warning_threshold_percent, now)
}

/// Evaluate with an explicit hours policy (wall clock or business hours)
pub fn evaluate_with_policy(
    policy: &HoursPolicy,
    started_at: DateTime<Utc>,
    target_hours: f64,
    warning_threshold_percent: f64,
    now: DateTime<Utc>,
) -> SlaResult {
    let hours_elapsed = policy.elapsed_hours(started_at, now);
    classify(hours_elapsed, target_hours, warning_threshold_percent)
}

/// Evaluate against a validated target
pub fn evaluate_target(
    target: &SlaTarget,
    policy: &HoursPolicy,
    started_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> SlaResult {
    evaluate_with_policy(policy, started_at, target.target_hours(), target.warning_threshold_percent(), now)
}
