// Output formatting utilities

use crate::models::{ApplicationStatus, Locale, Pipeline, ServiceCategory, ServiceRequest, StageColor, StatusEvent};
use crate::pipeline::table;
use crate::sla::{self, SlaResult, SlaStatus, SlaTarget};
use crate::utils::format_hours;
use chrono::{Local, TimeZone};
use serde::Serialize;
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

/// Map a color name string to its ANSI foreground code
fn color_name_to_fg(name: &str) -> Option<&'static str> {
    match name {
        "black" => Some("\x1b[30m"),
        "red" => Some("\x1b[31m"),
        "green" => Some("\x1b[32m"),
        "yellow" => Some("\x1b[33m"),
        "blue" => Some("\x1b[34m"),
        "magenta" => Some("\x1b[35m"),
        "cyan" => Some("\x1b[36m"),
        "white" => Some("\x1b[37m"),
        "bright_black" => Some("\x1b[90m"),
        _ => None,
    }
}

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate for reliable detection, with fallback to
/// COLUMNS environment variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

/// Apply bold formatting if in TTY mode
fn bold_if_tty(text: &str, is_tty: bool) -> String {
    if is_tty {
        format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Color text with a stage color if in TTY mode
pub fn paint(text: &str, color: StageColor, is_tty: bool) -> String {
    match color_name_to_fg(color.terminal_color()) {
        Some(code) if is_tty => format!("{}{}{}", code, text, ANSI_RESET),
        _ => text.to_string(),
    }
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Pad to `width` display columns, truncating with an ellipsis if needed
fn fit(text: &str, width: usize) -> String {
    let len = display_width(text);
    if len <= width {
        format!("{}{}", text, " ".repeat(width - len))
    } else if width == 0 {
        String::new()
    } else {
        let truncated: String = text.chars().take(width - 1).collect();
        format!("{}…", truncated)
    }
}

/// Format timestamp for display
pub fn format_timestamp(ts: i64) -> String {
    match Local.timestamp_opt(ts, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => ts.to_string(),
    }
}

/// A request with its resolved SLA target and evaluation
#[derive(Debug, Clone, Serialize)]
pub struct RequestView {
    #[serde(flatten)]
    pub request: ServiceRequest,
    pub reference: String,
    pub target_hours: f64,
    pub warning_threshold_percent: f64,
    pub sla: SlaResult,
    pub sla_label: String,
    pub progress: f64,
}

impl RequestView {
    pub fn new(request: ServiceRequest, target: &SlaTarget, result: SlaResult, locale: Locale) -> Self {
        Self {
            reference: request.reference(),
            target_hours: target.target_hours(),
            warning_threshold_percent: target.warning_threshold_percent(),
            sla_label: sla::badge_label(&result, locale),
            progress: sla::progress_value(&result),
            sla: result,
            request,
        }
    }
}

/// Label and color for a status, whether or not it is part of the pipeline
fn status_label(status: ApplicationStatus, pipeline: &Pipeline, locale: Locale) -> (String, StageColor) {
    match pipeline.stage(status) {
        Some(stage) => (stage.label(locale).to_string(), stage.color),
        None => {
            let color = if status.is_terminal() { StageColor::Error } else { StageColor::Default };
            (locale.pick(status.labels()).to_string(), color)
        }
    }
}

/// Horizontal stepper: completed stages, the current one, then pending ones
pub fn format_pipeline(pipeline: &Pipeline, current: Option<ApplicationStatus>, locale: Locale, is_tty: bool) -> String {
    let position = current.and_then(|status| pipeline.position(status));
    let steps: Vec<String> = pipeline
        .stages
        .iter()
        .enumerate()
        .map(|(i, stage)| {
            let label = stage.label(locale);
            match position {
                Some(p) if i < p => paint(&format!("✓ {}", label), StageColor::Success, is_tty),
                Some(p) if i == p => bold_if_tty(&paint(&format!("▶ {}", label), stage.color, is_tty), is_tty),
                _ => format!("○ {}", label),
            }
        })
        .collect();

    let mut out = steps.join(" → ");
    if let Some(status) = current {
        if position.is_none() {
            let (label, color) = status_label(status, pipeline, locale);
            out.push_str(&format!("  [{}]", paint(&label, color, is_tty)));
        }
    }
    out
}

/// Stage listing for one pipeline
pub fn format_pipeline_stages(pipeline: &Pipeline, category: ServiceCategory, locale: Locale, is_tty: bool) -> String {
    let mut out = String::new();
    out.push_str(&bold_if_tty(
        &format!("{} ({})", locale.pick(category.labels()), pipeline.name),
        is_tty,
    ));
    out.push('\n');
    for (i, stage) in pipeline.stages.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} {} {}\n",
            i + 1,
            fit(stage.key.as_str(), 20),
            paint(&fit(stage.label(locale), 24), stage.color, is_tty),
            stage.color.as_str(),
        ));
    }
    out
}

/// All categories with their pipelines as steppers
pub fn format_categories(locale: Locale, is_tty: bool) -> String {
    let mut out = String::new();
    for category in ServiceCategory::ALL {
        let pipeline = table::pipeline(category);
        out.push_str(&format!(
            "{} {}\n    {}\n",
            bold_if_tty(&fit(category.as_str(), 12), is_tty),
            locale.pick(category.labels()),
            format_pipeline(pipeline, None, locale, false),
        ));
    }
    out
}

/// Colored SLA badge
pub fn format_sla_badge(result: &SlaResult, locale: Locale, is_tty: bool) -> String {
    paint(&sla::badge_label(result, locale), result.status.color(), is_tty)
}

/// Request list table
pub fn format_request_table(views: &[RequestView], locale: Locale, is_tty: bool, width: usize) -> String {
    if views.is_empty() {
        return "No requests found.\n".to_string();
    }

    const ID_W: usize = 4;
    const REF_W: usize = 16;
    const CAT_W: usize = 11;
    const STATUS_W: usize = 20;
    const SLA_W: usize = 16;
    const BAR_W: usize = 12;
    let fixed = ID_W + REF_W + CAT_W + STATUS_W + SLA_W + BAR_W + 6;
    let title_w = width.saturating_sub(fixed).clamp(12, 48);

    let mut out = String::new();
    let header = format!(
        "{} {} {} {} {} {} {}",
        fit("ID", ID_W),
        fit("Reference", REF_W),
        fit("Title", title_w),
        fit("Category", CAT_W),
        fit("Status", STATUS_W),
        fit("SLA", SLA_W),
        "Progress",
    );
    out.push_str(&bold_if_tty(header.trim_end(), is_tty));
    out.push('\n');
    out.push_str(&"-".repeat(display_width(header.trim_end())));
    out.push('\n');

    for view in views {
        let req = &view.request;
        let pipeline = table::pipeline(req.category);
        let (label, color) = status_label(req.status, pipeline, locale);
        let sla_text = if req.stopped_ts.is_some() {
            paint(&fit(&format!("{} (stopped)", view.sla.status.label(locale)), SLA_W), StageColor::Default, is_tty)
        } else {
            paint(&fit(&view.sla_label, SLA_W), view.sla.status.color(), is_tty)
        };
        out.push_str(&format!(
            "{} {} {} {} {} {} {}\n",
            fit(&req.id.map(|id| id.to_string()).unwrap_or_default(), ID_W),
            fit(&view.reference, REF_W),
            fit(&req.title, title_w),
            fit(req.category.as_str(), CAT_W),
            paint(&fit(&label, STATUS_W), color, is_tty),
            sla_text,
            sla::progress_bar(&view.sla, BAR_W - 2),
        ));
    }
    out
}

/// SLA evaluation block
pub fn format_sla(
    result: &SlaResult,
    target_hours: f64,
    warning_threshold_percent: f64,
    policy_name: &str,
    locale: Locale,
    is_tty: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Status:     {}\n",
        paint(result.status.label(locale), result.status.color(), is_tty)
    ));
    out.push_str(&format!("Badge:      {}\n", format_sla_badge(result, locale, is_tty)));
    out.push_str(&format!(
        "Elapsed:    {} of {} ({} hours)\n",
        format_hours(result.hours_elapsed),
        format_hours(target_hours),
        policy_name,
    ));
    out.push_str(&format!("Remaining:  {}\n", format_hours(result.hours_remaining)));
    out.push_str(&format!(
        "Progress:   {} {:.1}% (warning at {}%)\n",
        sla::progress_bar(result, 20),
        result.percent_elapsed,
        warning_threshold_percent,
    ));
    out
}

/// Status history listing
pub fn format_history(events: &[StatusEvent], locale: Locale) -> String {
    if events.is_empty() {
        return "No history.\n".to_string();
    }
    let mut out = String::new();
    for event in events {
        let to = locale.pick(event.to_status.labels());
        let line = match event.from_status {
            Some(from) => format!("{}  {} → {}", format_timestamp(event.ts), locale.pick(from.labels()), to),
            None => format!("{}  {}", format_timestamp(event.ts), to),
        };
        out.push_str(&line);
        if let Some(note) = &event.note {
            out.push_str(&format!("  ({})", note));
        }
        out.push('\n');
    }
    out
}

/// Full detail view of one request
pub fn format_request_detail(view: &RequestView, events: &[StatusEvent], policy_name: &str, locale: Locale, is_tty: bool) -> String {
    let req = &view.request;
    let pipeline = table::pipeline(req.category);
    let mut out = String::new();

    out.push_str(&bold_if_tty(&format!("{}  {}", view.reference, req.title), is_tty));
    out.push('\n');
    out.push_str(&format!("Category:   {} ({})\n", locale.pick(req.category.labels()), req.category));
    let (label, color) = status_label(req.status, pipeline, locale);
    out.push_str(&format!("Status:     {}\n", paint(&label, color, is_tty)));
    out.push_str(&format!("Submitted:  {}\n", format_timestamp(req.created_ts)));
    out.push_str(&format!("Updated:    {}\n", format_timestamp(req.modified_ts)));
    if let Some(stopped) = req.stopped_ts {
        out.push_str(&format!("SLA stopped: {}\n", format_timestamp(stopped)));
    }
    out.push('\n');
    out.push_str(&format_pipeline(pipeline, Some(req.status), locale, is_tty));
    out.push_str("\n\n");
    out.push_str(&bold_if_tty("SLA", is_tty));
    out.push('\n');
    out.push_str(&format_sla(&view.sla, view.target_hours, view.warning_threshold_percent, policy_name, locale, is_tty));
    out.push('\n');
    out.push_str(&bold_if_tty("History", is_tty));
    out.push('\n');
    out.push_str(&format_history(events, locale));
    out
}

/// SLA target listing
pub fn format_targets(targets: &[(SlaTarget, bool)], is_tty: bool) -> String {
    let mut out = String::new();
    out.push_str(&bold_if_tty(&format!("{} {} {} {}", fit("Category", 12), fit("Target", 8), fit("Warning", 8), "Source"), is_tty));
    out.push('\n');
    for (target, custom) in targets {
        out.push_str(&format!(
            "{} {} {} {}\n",
            fit(target.category().as_str(), 12),
            fit(&format_hours(target.target_hours()), 8),
            fit(&format!("{}%", target.warning_threshold_percent()), 8),
            if *custom { "custom" } else { "default" },
        ));
    }
    out
}

/// Count of requests per SLA status, in display order
pub fn sla_counts(views: &[RequestView]) -> [(SlaStatus, usize); 3] {
    let count = |status: SlaStatus| views.iter().filter(|v| v.sla.status == status).count();
    [
        (SlaStatus::OnTrack, count(SlaStatus::OnTrack)),
        (SlaStatus::AtRisk, count(SlaStatus::AtRisk)),
        (SlaStatus::Breached, count(SlaStatus::Breached)),
    ]
}
