use serde::{Deserialize, Serialize};
use super::{ApplicationStatus, Locale};

/// Emphasis tag attached to a stage, consumed by badge and stepper renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageColor {
    Default,
    Primary,
    Success,
    Warning,
    Error,
    Info,
}

impl StageColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageColor::Default => "default",
            StageColor::Primary => "primary",
            StageColor::Success => "success",
            StageColor::Warning => "warning",
            StageColor::Error => "error",
            StageColor::Info => "info",
        }
    }

    /// Terminal color name used by the output layer
    pub fn terminal_color(&self) -> &'static str {
        match self {
            StageColor::Default => "bright_black",
            StageColor::Primary => "blue",
            StageColor::Success => "green",
            StageColor::Warning => "yellow",
            StageColor::Error => "red",
            StageColor::Info => "cyan",
        }
    }
}

/// One named status within a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineStage {
    pub key: ApplicationStatus,
    pub label_primary: &'static str,
    pub label_secondary: &'static str,
    pub color: StageColor,
}

impl PipelineStage {
    /// Build a stage whose labels come from the status itself
    pub const fn new(key: ApplicationStatus, color: StageColor) -> Self {
        let (label_primary, label_secondary) = key.labels();
        Self {
            key,
            label_primary,
            label_secondary,
            color,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        locale.pick((self.label_primary, self.label_secondary))
    }
}

/// Ordered list of stages; insertion order is process order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pipeline {
    pub name: &'static str,
    pub stages: &'static [PipelineStage],
}

impl Pipeline {
    /// Position of a status within the pipeline, None when absent
    pub fn position(&self, status: ApplicationStatus) -> Option<usize> {
        self.stages.iter().position(|stage| stage.key == status)
    }

    pub fn contains(&self, status: ApplicationStatus) -> bool {
        self.position(status).is_some()
    }

    pub fn stage(&self, status: ApplicationStatus) -> Option<&'static PipelineStage> {
        self.stages.iter().find(|stage| stage.key == status)
    }

    pub fn first(&self) -> Option<&'static PipelineStage> {
        self.stages.first()
    }

    pub fn last(&self) -> Option<&'static PipelineStage> {
        self.stages.last()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
