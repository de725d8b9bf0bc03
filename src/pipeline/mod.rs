//! Status pipelines and single-step traversal
//!
//! Every service category maps to an ordered list of stages. Lookups never
//! fail: unknown or missing categories fall back to the government pipeline,
//! and traversal past either end (or from a status the pipeline does not
//! contain) yields `None`.

pub mod table;

use crate::models::{ApplicationStatus, Pipeline, ServiceCategory};

pub use table::TERMINAL_STATUSES;

/// Pipeline for a category name. Total: unknown, empty and absent names
/// all resolve to the government pipeline.
pub fn pipeline_for_category(category: Option<&str>) -> &'static Pipeline {
    table::pipeline(ServiceCategory::from_str_or_default(category))
}

/// Status immediately after `current`, or None if `current` is last or absent
pub fn next_status(current: ApplicationStatus, pipeline: &Pipeline) -> Option<ApplicationStatus> {
    let index = pipeline.stages.iter().position(|stage| stage.key == current)?;
    pipeline.stages.get(index + 1).map(|stage| stage.key)
}

/// Status immediately before `current`, or None if `current` is first or absent
pub fn previous_status(current: ApplicationStatus, pipeline: &Pipeline) -> Option<ApplicationStatus> {
    let index = pipeline.stages.iter().position(|stage| stage.key == current)?;
    if index == 0 {
        return None;
    }
    pipeline.stages.get(index - 1).map(|stage| stage.key)
}

/// Whether a request in `pipeline` may be moved to `target` directly
pub fn is_valid_target(target: ApplicationStatus, pipeline: &Pipeline) -> bool {
    target.is_terminal() || pipeline.contains(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_pipelines() -> Vec<&'static Pipeline> {
        ServiceCategory::ALL.iter().map(|c| table::pipeline(*c)).collect()
    }

    #[test]
    fn test_known_categories_resolve_to_their_pipeline() {
        assert_eq!(pipeline_for_category(Some("business")).name, "business");
        assert_eq!(pipeline_for_category(Some("Translation")).name, "translation");
        assert_eq!(pipeline_for_category(Some("personal")).name, "personal");
    }

    #[test]
    fn test_unknown_categories_fall_back_to_government() {
        for input in [Some("visa"), Some(""), Some("   "), Some("governmentt"), None] {
            let pipeline = pipeline_for_category(input);
            assert_eq!(pipeline.name, "government", "input {:?}", input);
            assert!(!pipeline.is_empty());
        }
    }

    #[test]
    fn test_pipeline_keys_are_unique_and_non_terminal() {
        for pipeline in all_pipelines() {
            let keys: HashSet<_> = pipeline.stages.iter().map(|s| s.key).collect();
            assert_eq!(keys.len(), pipeline.len(), "duplicate key in {}", pipeline.name);
            assert!(pipeline.stages.iter().all(|s| !s.key.is_terminal()));
            assert_eq!(pipeline.first().map(|s| s.key), Some(ApplicationStatus::Submitted));
            assert_eq!(pipeline.last().map(|s| s.key), Some(ApplicationStatus::Completed));
        }
    }

    #[test]
    fn test_next_and_previous_walk_the_government_pipeline() {
        let p = pipeline_for_category(Some("government"));
        assert_eq!(next_status(ApplicationStatus::Submitted, p), Some(ApplicationStatus::DocumentsPending));
        assert_eq!(next_status(ApplicationStatus::AwaitingAuthority, p), Some(ApplicationStatus::Completed));
        assert_eq!(previous_status(ApplicationStatus::InProgress, p), Some(ApplicationStatus::DocumentsPending));
    }

    #[test]
    fn test_boundaries_yield_none() {
        for pipeline in all_pipelines() {
            let first = pipeline.first().unwrap().key;
            let last = pipeline.last().unwrap().key;
            assert_eq!(next_status(last, pipeline), None);
            assert_eq!(previous_status(first, pipeline), None);
        }
    }

    #[test]
    fn test_absent_status_yields_none() {
        let p = pipeline_for_category(Some("personal"));
        assert_eq!(next_status(ApplicationStatus::QuoteSent, p), None);
        assert_eq!(previous_status(ApplicationStatus::QuoteSent, p), None);
        assert_eq!(next_status(ApplicationStatus::Rejected, p), None);
    }

    #[test]
    fn test_previous_then_next_returns_to_the_same_stage() {
        for pipeline in all_pipelines() {
            for stage in pipeline.stages.iter().skip(1) {
                let back = previous_status(stage.key, pipeline).unwrap_or(stage.key);
                assert_eq!(next_status(back, pipeline), Some(stage.key), "{} in {}", stage.key, pipeline.name);
            }
        }
    }

    #[test]
    fn test_valid_targets() {
        let p = pipeline_for_category(Some("translation"));
        assert!(is_valid_target(ApplicationStatus::Review, p));
        assert!(is_valid_target(ApplicationStatus::Cancelled, p));
        assert!(!is_valid_target(ApplicationStatus::Scoping, p));
    }
}
