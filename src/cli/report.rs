// Dashboard report across open requests

use crate::cli::output::{format_sla_badge, format_timestamp, sla_counts, RequestView};
use crate::models::{Locale, ServiceCategory};
use crate::sla::SlaStatus;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_ts: i64,
    pub open_requests: usize,
    pub on_track: usize,
    pub at_risk: usize,
    pub breached: usize,
    pub by_category: Vec<(ServiceCategory, usize)>,
    pub attention: Vec<&'a RequestView>,
}

/// Summarize open requests. Attention lists breached then at-risk requests,
/// most consumed budget first.
pub fn build_report(views: &[RequestView], now_ts: i64) -> Report<'_> {
    let counts = sla_counts(views);
    let by_category = ServiceCategory::ALL
        .iter()
        .map(|c| (*c, views.iter().filter(|v| v.request.category == *c).count()))
        .filter(|(_, n)| *n > 0)
        .collect();

    let mut attention: Vec<&RequestView> = views
        .iter()
        .filter(|v| v.sla.status != SlaStatus::OnTrack)
        .collect();
    attention.sort_by(|a, b| {
        b.sla.percent_elapsed
            .partial_cmp(&a.sla.percent_elapsed)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.request.id.cmp(&b.request.id))
    });

    Report {
        generated_ts: now_ts,
        open_requests: views.len(),
        on_track: counts[0].1,
        at_risk: counts[1].1,
        breached: counts[2].1,
        by_category,
        attention,
    }
}

pub fn format_report(report: &Report, locale: Locale, is_tty: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("SRL DASHBOARD  (as of {})\n\n", format_timestamp(report.generated_ts)));

    out.push_str(&format!("OPEN REQUESTS: {}\n", report.open_requests));
    out.push_str(&format!(
        "  {}: {}  {}: {}  {}: {}\n\n",
        SlaStatus::OnTrack.label(locale), report.on_track,
        SlaStatus::AtRisk.label(locale), report.at_risk,
        SlaStatus::Breached.label(locale), report.breached,
    ));

    out.push_str("BY CATEGORY\n");
    if report.by_category.is_empty() {
        out.push_str("  (no open requests)\n");
    }
    for (category, count) in &report.by_category {
        out.push_str(&format!("  {:<12} {}\n", category.as_str(), count));
    }
    out.push('\n');

    out.push_str("ATTENTION NEEDED\n");
    if report.attention.is_empty() {
        out.push_str("  (nothing at risk)\n");
    }
    for view in &report.attention {
        out.push_str(&format!(
            "  #{} {}  {}  {}\n",
            view.request.id.unwrap_or_default(),
            view.reference,
            view.request.title,
            format_sla_badge(&view.sla, locale, is_tty),
        ));
    }
    out
}
