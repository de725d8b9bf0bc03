// Pipeline and SLA behavior through the public library API

use chrono::{DateTime, Duration, TimeZone, Utc};
use srl::models::{ApplicationStatus, ServiceCategory};
use srl::pipeline::{next_status, pipeline_for_category, previous_status, table};
use srl::sla::{
    badge_label, evaluate, evaluate_target, evaluate_with_policy, progress_value, BusinessCalendar,
    HoursPolicy, SlaStatus, SlaTarget,
};
use srl::models::Locale;

fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
}

#[test]
fn unknown_categories_never_yield_an_empty_pipeline() {
    for input in [None, Some(""), Some("   "), Some("visa"), Some("GOVERNMENT!")] {
        let pipeline = pipeline_for_category(input);
        assert_eq!(pipeline.name, "government", "input {:?}", input);
        assert!(!pipeline.is_empty());
    }
}

#[test]
fn adjacent_stages_round_trip_in_every_pipeline() {
    for category in ServiceCategory::ALL {
        let pipeline = table::pipeline(category);
        for (i, stage) in pipeline.stages.iter().enumerate() {
            let back = previous_status(stage.key, pipeline).unwrap_or(stage.key);
            let forward = next_status(back, pipeline);
            if i == 0 {
                assert_eq!(previous_status(stage.key, pipeline), None);
            } else {
                assert_eq!(forward, Some(stage.key), "{} in {}", stage.key, category);
            }
        }
        let last = pipeline.last().unwrap().key;
        assert_eq!(next_status(last, pipeline), None);
    }
}

#[test]
fn terminal_statuses_are_outside_every_pipeline() {
    for category in ServiceCategory::ALL {
        let pipeline = table::pipeline(category);
        for status in [ApplicationStatus::Rejected, ApplicationStatus::Cancelled, ApplicationStatus::Archived] {
            assert!(!pipeline.contains(status));
            assert_eq!(next_status(status, pipeline), None);
            assert_eq!(previous_status(status, pipeline), None);
        }
    }
}

#[test]
fn documented_sla_values() {
    let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();

    let result = evaluate(start, 24.0, 70.0, start + Duration::seconds(60_480));
    assert_eq!(result.percent_elapsed, 70.0);
    assert_eq!(result.status, SlaStatus::AtRisk);

    let result = evaluate(start, 24.0, 70.0, start + Duration::hours(24));
    assert_eq!(result.status, SlaStatus::Breached);
    assert_eq!(result.hours_remaining, 0.0);

    let result = evaluate(start, 24.0, 70.0, start + Duration::hours(10));
    assert_eq!(result.status, SlaStatus::OnTrack);
    assert_eq!(badge_label(&result, Locale::En), "Remaining: 14h");

    let result = evaluate(start, 24.0, 70.0, start + Duration::hours(48));
    assert_eq!(result.percent_elapsed, 200.0);
    assert_eq!(progress_value(&result), 100.0);
}

#[test]
fn future_start_counts_as_no_time_elapsed() {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let result = evaluate(now + Duration::hours(5), 24.0, 70.0, now);
    assert_eq!(result.hours_elapsed, 0.0);
    assert_eq!(result.hours_remaining, 24.0);
    assert_eq!(result.status, SlaStatus::OnTrack);
}

#[test]
fn evaluation_is_deterministic_for_a_fixed_now() {
    let start = at("2026-03-01T06:00:00Z");
    let now = at("2026-03-03T06:00:00Z");
    let target = SlaTarget::default_for(ServiceCategory::Personal);
    let a = evaluate_target(&target, &HoursPolicy::WallClock, start, now);
    let b = evaluate_target(&target, &HoursPolicy::WallClock, start, now);
    assert_eq!(a, b);
    assert_eq!(a.status, SlaStatus::Breached);
}

#[test]
fn business_hours_skip_nights_and_weekend() {
    let policy = HoursPolicy::Business(BusinessCalendar::default());

    // Sunday 08:00 to Monday 17:00 at +03:00: two full 9h days
    let hours = policy.elapsed_hours(at("2026-03-01T08:00:00+03:00"), at("2026-03-02T17:00:00+03:00"));
    assert_eq!(hours, 18.0);

    // Thursday 16:00 to Sunday 09:00: Friday and Saturday do not count
    let hours = policy.elapsed_hours(at("2026-03-05T16:00:00+03:00"), at("2026-03-08T09:00:00+03:00"));
    assert_eq!(hours, 2.0);
}

#[test]
fn business_hours_classify_differently_from_wall_clock() {
    let start = at("2026-03-05T16:00:00+03:00");
    let now = at("2026-03-08T09:00:00+03:00");
    let wall = evaluate_with_policy(&HoursPolicy::WallClock, start, 24.0, 70.0, now);
    let business = evaluate_with_policy(&HoursPolicy::Business(BusinessCalendar::default()), start, 24.0, 70.0, now);
    assert_eq!(wall.status, SlaStatus::Breached);
    assert_eq!(business.status, SlaStatus::OnTrack);
}

#[test]
fn target_validation_happens_at_construction() {
    assert!(SlaTarget::new(ServiceCategory::Legal, 0.0, 70.0).is_err());
    assert!(SlaTarget::new(ServiceCategory::Legal, -4.0, 70.0).is_err());
    assert!(SlaTarget::new(ServiceCategory::Legal, f64::NAN, 70.0).is_err());
    assert!(SlaTarget::new(ServiceCategory::Legal, 24.0, 101.0).is_err());
    assert!(SlaTarget::new(ServiceCategory::Legal, 24.0, 0.0).is_ok());
    assert!(SlaTarget::new(ServiceCategory::Legal, 24.0, 100.0).is_ok());
}
