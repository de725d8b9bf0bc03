// SLA targets: validated at construction, so the calculator never has to

use serde::Serialize;
use thiserror::Error;
use crate::models::ServiceCategory;

/// Warning threshold used when none is configured
pub const DEFAULT_WARNING_THRESHOLD: f64 = 70.0;

#[derive(Debug, Error, PartialEq)]
pub enum SlaConfigError {
    #[error("target hours must be a positive number, got {0}")]
    NonPositiveTarget(f64),
    #[error("warning threshold must be between 0 and 100 percent, got {0}")]
    ThresholdOutOfRange(f64),
}

/// Hours budget for one service category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlaTarget {
    category: ServiceCategory,
    target_hours: f64,
    warning_threshold_percent: f64,
}

impl SlaTarget {
    pub fn new(
        category: ServiceCategory,
        target_hours: f64,
        warning_threshold_percent: f64,
    ) -> Result<Self, SlaConfigError> {
        if !target_hours.is_finite() || target_hours <= 0.0 {
            return Err(SlaConfigError::NonPositiveTarget(target_hours));
        }
        if !(0.0..=100.0).contains(&warning_threshold_percent) {
            return Err(SlaConfigError::ThresholdOutOfRange(warning_threshold_percent));
        }
        Ok(Self {
            category,
            target_hours,
            warning_threshold_percent,
        })
    }

    /// Built-in target for a category with no stored override
    pub fn default_for(category: ServiceCategory) -> Self {
        let target_hours = match category {
            ServiceCategory::Government => 72.0,
            ServiceCategory::Business => 120.0,
            ServiceCategory::Personal => 48.0,
            ServiceCategory::Legal => 96.0,
            ServiceCategory::Translation => 24.0,
        };
        Self {
            category,
            target_hours,
            warning_threshold_percent: DEFAULT_WARNING_THRESHOLD,
        }
    }

    pub fn category(&self) -> ServiceCategory {
        self.category
    }

    pub fn target_hours(&self) -> f64 {
        self.target_hours
    }

    pub fn warning_threshold_percent(&self) -> f64 {
        self.warning_threshold_percent
    }
}
