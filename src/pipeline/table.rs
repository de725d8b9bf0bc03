// Static pipeline definitions, one per service category

use crate::models::{ApplicationStatus as S, Pipeline, PipelineStage, StageColor as C, ServiceCategory};

static GOVERNMENT_STAGES: [PipelineStage; 5] = [
    PipelineStage::new(S::Submitted, C::Info),
    PipelineStage::new(S::DocumentsPending, C::Warning),
    PipelineStage::new(S::InProgress, C::Primary),
    PipelineStage::new(S::AwaitingAuthority, C::Warning),
    PipelineStage::new(S::Completed, C::Success),
];

static BUSINESS_STAGES: [PipelineStage; 6] = [
    PipelineStage::new(S::Submitted, C::Info),
    PipelineStage::new(S::Scoping, C::Default),
    PipelineStage::new(S::QuoteSent, C::Warning),
    PipelineStage::new(S::InProgress, C::Primary),
    PipelineStage::new(S::Review, C::Info),
    PipelineStage::new(S::Completed, C::Success),
];

static PERSONAL_STAGES: [PipelineStage; 4] = [
    PipelineStage::new(S::Submitted, C::Info),
    PipelineStage::new(S::DocumentsPending, C::Warning),
    PipelineStage::new(S::InProgress, C::Primary),
    PipelineStage::new(S::Completed, C::Success),
];

static LEGAL_STAGES: [PipelineStage; 6] = [
    PipelineStage::new(S::Submitted, C::Info),
    PipelineStage::new(S::Scoping, C::Default),
    PipelineStage::new(S::QuoteSent, C::Warning),
    PipelineStage::new(S::InProgress, C::Primary),
    PipelineStage::new(S::Review, C::Info),
    PipelineStage::new(S::Completed, C::Success),
];

static TRANSLATION_STAGES: [PipelineStage; 5] = [
    PipelineStage::new(S::Submitted, C::Info),
    PipelineStage::new(S::QuoteSent, C::Warning),
    PipelineStage::new(S::InProgress, C::Primary),
    PipelineStage::new(S::Review, C::Info),
    PipelineStage::new(S::Completed, C::Success),
];

pub static GOVERNMENT: Pipeline = Pipeline { name: "government", stages: &GOVERNMENT_STAGES };
pub static BUSINESS: Pipeline = Pipeline { name: "business", stages: &BUSINESS_STAGES };
pub static PERSONAL: Pipeline = Pipeline { name: "personal", stages: &PERSONAL_STAGES };
pub static LEGAL: Pipeline = Pipeline { name: "legal", stages: &LEGAL_STAGES };
pub static TRANSLATION: Pipeline = Pipeline { name: "translation", stages: &TRANSLATION_STAGES };

/// Pipeline for a known category
pub fn pipeline(category: ServiceCategory) -> &'static Pipeline {
    match category {
        ServiceCategory::Government => &GOVERNMENT,
        ServiceCategory::Business => &BUSINESS,
        ServiceCategory::Personal => &PERSONAL,
        ServiceCategory::Legal => &LEGAL,
        ServiceCategory::Translation => &TRANSLATION,
    }
}

/// Terminal statuses reachable from any stage without passing through the pipeline
pub const TERMINAL_STATUSES: [S; 3] = [S::Rejected, S::Cancelled, S::Archived];
