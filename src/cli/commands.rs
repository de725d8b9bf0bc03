use clap::{Parser, Subcommand};
use rusqlite::Connection;
use crate::config::Config;
use crate::db::DbConnection;
use crate::models::{ApplicationStatus, Locale, ServiceCategory, ServiceRequest};
use crate::pipeline::{self, table};
use crate::repo::{EventRepo, RequestFilter, RequestRepo, TargetRepo};
use crate::sla::{self, HoursPolicy, SlaTarget, DEFAULT_WARNING_THRESHOLD};
use crate::webhook;
use crate::cli::abbrev;
use crate::cli::error::{user_error, parse_category, parse_status, validate_non_empty, validate_request_id};
use crate::cli::output::{self, RequestView};
use crate::cli::report;
use crate::utils::{parse_hours, parse_timestamp};
use chrono::{DateTime, Local, TimeZone, Utc};
use std::io::{Read, Write};
use anyhow::{Context, Result};

#[derive(Parser)]
#[command(name = "srl")]
#[command(about = "Service Request Ledger - track service applications through status pipelines against SLA targets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Display language for labels (en or ar)
    #[arg(long, global = true)]
    pub locale: Option<String>,
    /// Evaluate and record as of this time instead of the current clock
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub now: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the status pipeline for a category (unknown categories show the government pipeline)
    Pipeline {
        /// Service category
        category: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// List service categories and their pipelines
    Categories {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Open a new service request
    Add {
        /// Service category (government, business, personal, legal, translation)
        category: String,
        /// Request title
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        title: Vec<String>,
    },
    /// List requests
    List {
        /// Only requests in this category
        #[arg(long)]
        category: Option<String>,
        /// Only requests with this status
        #[arg(long)]
        status: Option<String>,
        /// Include completed, rejected, cancelled and archived requests
        #[arg(long)]
        all: bool,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show a request with its pipeline position, SLA and history
    Show {
        /// Request ID
        id: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Move a request to the next stage of its pipeline
    Advance {
        /// Request ID
        id: String,
        /// Note recorded with the transition
        #[arg(long)]
        note: Option<String>,
    },
    /// Move a request back one stage
    Back {
        /// Request ID
        id: String,
        /// Note recorded with the transition
        #[arg(long)]
        note: Option<String>,
    },
    /// Move a request to a specific stage or terminal status (rejected, cancelled, archived)
    Move {
        /// Request ID
        id: String,
        /// Target status
        status: String,
        /// Note recorded with the transition
        #[arg(long)]
        note: Option<String>,
    },
    /// Show the status history of a request
    History {
        /// Request ID
        id: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Change the title of a request
    Rename {
        /// Request ID
        id: String,
        /// New title
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        title: Vec<String>,
    },
    /// Permanently delete a request and its history
    Delete {
        /// Request ID
        id: String,
        /// Delete without confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// SLA target management
    Targets {
        #[command(subcommand)]
        subcommand: TargetCommands,
    },
    /// Evaluate an SLA for an arbitrary start time and target
    Sla {
        /// Start time (now, YYYY-MM-DD, YYYY-MM-DDTHH:MM, RFC 3339, @unix, -2h)
        #[arg(long, allow_hyphen_values = true)]
        start: String,
        /// Target budget (e.g. 24, 36.5, 2d, 1d12h)
        #[arg(long)]
        target: String,
        /// Warning threshold in percent
        #[arg(long, default_value_t = DEFAULT_WARNING_THRESHOLD)]
        warning: f64,
        /// Count business hours using the configured calendar
        #[arg(long, conflicts_with = "wall")]
        business: bool,
        /// Count wall-clock hours even if business hours are configured
        #[arg(long)]
        wall: bool,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show dashboard of open requests and SLA health
    Report {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Webhook signature helpers (HMAC-SHA256)
    Webhook {
        #[command(subcommand)]
        subcommand: WebhookCommands,
    },
}

#[derive(Subcommand)]
pub enum TargetCommands {
    /// Set the SLA target for a category
    Set {
        /// Service category
        category: String,
        /// Target budget (e.g. 24, 36.5, 2d, 1d12h)
        hours: String,
        /// Warning threshold in percent
        #[arg(long, default_value_t = DEFAULT_WARNING_THRESHOLD)]
        warning: f64,
    },
    /// List effective SLA targets
    List {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Remove a custom target (the built-in default applies again)
    Remove {
        /// Service category
        category: String,
    },
}

#[derive(Subcommand)]
pub enum WebhookCommands {
    /// Sign a payload
    Sign {
        /// Signing secret (defaults to $SRL_WEBHOOK_SECRET)
        #[arg(long)]
        secret: Option<String>,
        /// Payload file (defaults to stdin)
        #[arg(long)]
        file: Option<std::path::PathBuf>,
        /// Produce a timestamped t=...,v1=... header signed at this unix time
        #[arg(long)]
        timestamp: Option<i64>,
    },
    /// Verify a payload signature
    Verify {
        /// Signing secret (defaults to $SRL_WEBHOOK_SECRET)
        #[arg(long)]
        secret: Option<String>,
        /// Hex signature (optionally sha256=...) or t=...,v1=... header
        #[arg(long)]
        signature: String,
        /// Payload file (defaults to stdin)
        #[arg(long)]
        file: Option<std::path::PathBuf>,
        /// Allowed clock skew in seconds for timestamped headers
        #[arg(long, allow_negative_numbers = true)]
        tolerance: Option<i64>,
    },
}

/// Per-invocation settings. `now` is captured once so every evaluation in a
/// single run sees the same instant.
pub struct RunContext {
    pub config: Config,
    pub locale: Locale,
    pub now: DateTime<Utc>,
    pub is_tty: bool,
}

impl RunContext {
    fn now_ts(&self) -> i64 {
        self.now.timestamp()
    }

    fn connect(&self) -> Result<Connection> {
        DbConnection::connect(&self.config)
    }
}

pub fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let args = match abbrev::expand_command_abbreviations(args) {
        Ok(expanded) => expanded,
        Err(e) => user_error(&e),
    };

    let cli = match Cli::try_parse_from(std::iter::once("srl".to_string()).chain(args)) {
        Ok(cli) => cli,
        // Prints help/version on stdout, usage errors on stderr
        Err(e) => e.exit(),
    };

    let config = Config::load()?;
    let locale = match cli.locale.as_deref() {
        Some(name) => Locale::from_str(name)
            .unwrap_or_else(|| user_error(&format!("Unknown locale '{}'. Use en or ar.", name))),
        None => config.locale,
    };
    let clock = Utc::now();
    let now = match cli.now.as_deref() {
        Some(expr) => parse_timestamp(expr, clock, local_offset(clock))
            .unwrap_or_else(|e| user_error(&e.to_string())),
        None => clock,
    };
    log::debug!("Running as of {} (locale {})", now, locale.as_str());

    let ctx = RunContext {
        config,
        locale,
        now,
        is_tty: output::is_tty(),
    };

    match cli.command {
        Commands::Pipeline { category, json } => handle_pipeline(&ctx, category.as_deref(), json),
        Commands::Categories { json } => handle_categories(&ctx, json),
        Commands::Add { category, title } => handle_add(&ctx, &category, &title.join(" ")),
        Commands::List { category, status, all, json } => {
            handle_list(&ctx, category.as_deref(), status.as_deref(), all, json)
        }
        Commands::Show { id, json } => handle_show(&ctx, &id, json),
        Commands::Advance { id, note } => handle_step(&ctx, &id, Step::Forward, note.as_deref()),
        Commands::Back { id, note } => handle_step(&ctx, &id, Step::Backward, note.as_deref()),
        Commands::Move { id, status, note } => handle_move(&ctx, &id, &status, note.as_deref()),
        Commands::History { id, json } => handle_history(&ctx, &id, json),
        Commands::Rename { id, title } => handle_rename(&ctx, &id, &title.join(" ")),
        Commands::Delete { id, yes } => handle_delete(&ctx, &id, yes),
        Commands::Targets { subcommand } => match subcommand {
            TargetCommands::Set { category, hours, warning } => handle_targets_set(&ctx, &category, &hours, warning),
            TargetCommands::List { json } => handle_targets_list(&ctx, json),
            TargetCommands::Remove { category } => handle_targets_remove(&ctx, &category),
        },
        Commands::Sla { start, target, warning, business, wall, json } => {
            handle_sla(&ctx, &start, &target, warning, business, wall, json)
        }
        Commands::Report { json } => handle_report(&ctx, json),
        Commands::Webhook { subcommand } => match subcommand {
            WebhookCommands::Sign { secret, file, timestamp } => handle_webhook_sign(secret, file, timestamp),
            WebhookCommands::Verify { secret, signature, file, tolerance } => {
                handle_webhook_verify(&ctx, secret, &signature, file, tolerance)
            }
        },
    }
}

fn local_offset(at: DateTime<Utc>) -> chrono::FixedOffset {
    *Local.from_utc_datetime(&at.naive_utc()).offset()
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_request(conn: &Connection, id_str: &str) -> Result<ServiceRequest> {
    let id = validate_request_id(id_str).unwrap_or_else(|e| user_error(&e));
    match RequestRepo::get_by_id(conn, id)? {
        Some(request) => Ok(request),
        None => user_error(&format!("Request {} not found", id)),
    }
}

/// Resolve target and evaluate the SLA for a request as of `ctx.now`
fn view_for(conn: &Connection, ctx: &RunContext, request: ServiceRequest) -> Result<RequestView> {
    let target = TargetRepo::effective(conn, request.category)?;
    let started = ts_to_utc(request.created_ts);
    let until = ts_to_utc(request.sla_clock_ts(ctx.now_ts()));
    let result = sla::evaluate_target(&target, &ctx.config.hours_policy, started, until);
    Ok(RequestView::new(request, &target, result, ctx.locale))
}

fn ts_to_utc(ts: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(ts, 0).single().unwrap_or_default()
}

fn handle_pipeline(ctx: &RunContext, category: Option<&str>, json: bool) -> Result<()> {
    let pipeline = pipeline::pipeline_for_category(category);
    let resolved = ServiceCategory::from_str_or_default(category);
    if let Some(name) = category {
        if ServiceCategory::from_str(name).is_none() {
            log::info!("Unknown category '{}', showing the {} pipeline", name, resolved);
        }
    }
    if json {
        return print_json(pipeline);
    }
    print!("{}", output::format_pipeline_stages(pipeline, resolved, ctx.locale, ctx.is_tty));
    Ok(())
}

fn handle_categories(ctx: &RunContext, json: bool) -> Result<()> {
    if json {
        let pipelines: Vec<_> = ServiceCategory::ALL.iter().map(|c| table::pipeline(*c)).collect();
        return print_json(&pipelines);
    }
    print!("{}", output::format_categories(ctx.locale, ctx.is_tty));
    Ok(())
}

fn handle_add(ctx: &RunContext, category: &str, title: &str) -> Result<()> {
    let category = parse_category(category).unwrap_or_else(|e| user_error(&e));
    validate_non_empty(title, "Title").unwrap_or_else(|e| user_error(&e));

    let conn = ctx.connect()?;
    let request = RequestRepo::create(&conn, title.trim(), category, ctx.now_ts())?;
    println!(
        "Created request {} ({}): {}",
        request.id.unwrap_or_default(),
        request.reference(),
        request.title
    );
    Ok(())
}

fn handle_list(ctx: &RunContext, category: Option<&str>, status: Option<&str>, all: bool, json: bool) -> Result<()> {
    let filter = RequestFilter {
        category: category.map(|c| parse_category(c).unwrap_or_else(|e| user_error(&e))),
        status: status.map(|s| parse_status(s).unwrap_or_else(|e| user_error(&e))),
        include_closed: all,
    };

    let conn = ctx.connect()?;
    let views = RequestRepo::list(&conn, &filter)?
        .into_iter()
        .map(|request| view_for(&conn, ctx, request))
        .collect::<Result<Vec<_>>>()?;

    if json {
        return print_json(&views);
    }
    print!("{}", output::format_request_table(&views, ctx.locale, ctx.is_tty, output::get_terminal_width()));
    Ok(())
}

fn handle_show(ctx: &RunContext, id: &str, json: bool) -> Result<()> {
    let conn = ctx.connect()?;
    let request = load_request(&conn, id)?;
    let events = EventRepo::list_for_request(&conn, request.id.unwrap_or_default())?;
    let view = view_for(&conn, ctx, request)?;

    if json {
        #[derive(serde::Serialize)]
        struct Detail<'a> {
            #[serde(flatten)]
            view: &'a RequestView,
            history: &'a [crate::models::StatusEvent],
        }
        return print_json(&Detail { view: &view, history: &events });
    }
    print!(
        "{}",
        output::format_request_detail(&view, &events, ctx.config.hours_policy.name(), ctx.locale, ctx.is_tty)
    );
    Ok(())
}

#[derive(Clone, Copy)]
enum Step {
    Forward,
    Backward,
}

fn handle_step(ctx: &RunContext, id: &str, step: Step, note: Option<&str>) -> Result<()> {
    let conn = ctx.connect()?;
    let request = load_request(&conn, id)?;
    let pipeline = table::pipeline(request.category);

    let target = match step {
        Step::Forward => pipeline::next_status(request.status, pipeline),
        Step::Backward => pipeline::previous_status(request.status, pipeline),
    };

    let Some(target) = target else {
        // Traversal does not say why; membership does
        let reason = if !pipeline.contains(request.status) {
            format!(
                "its status '{}' is not part of the {} pipeline (use `srl move` to reopen it)",
                request.status, pipeline.name
            )
        } else {
            match step {
                Step::Forward => format!("it is already at the last stage ({})", request.status),
                Step::Backward => format!("it is already at the first stage ({})", request.status),
            }
        };
        user_error(&format!("Cannot move request {}: {}", request.id.unwrap_or_default(), reason));
    };

    apply_transition(ctx, &conn, &request, target, note)
}

fn handle_move(ctx: &RunContext, id: &str, status: &str, note: Option<&str>) -> Result<()> {
    let target = parse_status(status).unwrap_or_else(|e| user_error(&e));
    let conn = ctx.connect()?;
    let request = load_request(&conn, id)?;
    let pipeline = table::pipeline(request.category);

    if !pipeline::is_valid_target(target, pipeline) {
        let stages: Vec<&str> = pipeline.stages.iter().map(|s| s.key.as_str()).collect();
        user_error(&format!(
            "Status '{}' is not part of the {} pipeline. Valid: {}, rejected, cancelled, archived",
            target, pipeline.name, stages.join(", ")
        ));
    }
    if target == request.status {
        user_error(&format!("Request {} is already {}", request.id.unwrap_or_default(), target));
    }

    apply_transition(ctx, &conn, &request, target, note)
}

fn apply_transition(
    ctx: &RunContext,
    conn: &Connection,
    request: &ServiceRequest,
    target: ApplicationStatus,
    note: Option<&str>,
) -> Result<()> {
    let id = request.id.unwrap_or_default();
    let updated = RequestRepo::set_status(conn, id, target, note, ctx.now_ts())?;
    println!(
        "Request {}: {} → {}",
        id,
        ctx.locale.pick(request.status.labels()),
        ctx.locale.pick(updated.status.labels())
    );
    if updated.stopped_ts.is_some() && request.stopped_ts.is_none() {
        let view = view_for(conn, ctx, updated)?;
        println!(
            "SLA clock stopped: {} ({})",
            view.sla.status.label(ctx.locale),
            output::format_sla_badge(&view.sla, ctx.locale, ctx.is_tty)
        );
    }
    Ok(())
}

fn handle_history(ctx: &RunContext, id: &str, json: bool) -> Result<()> {
    let conn = ctx.connect()?;
    let request = load_request(&conn, id)?;
    let events = EventRepo::list_for_request(&conn, request.id.unwrap_or_default())?;
    if json {
        return print_json(&events);
    }
    print!("{}", output::format_history(&events, ctx.locale));
    Ok(())
}

fn handle_rename(ctx: &RunContext, id: &str, title: &str) -> Result<()> {
    validate_non_empty(title, "Title").unwrap_or_else(|e| user_error(&e));
    let conn = ctx.connect()?;
    let request = load_request(&conn, id)?;
    let id = request.id.unwrap_or_default();
    RequestRepo::set_title(&conn, id, title.trim(), ctx.now_ts())?;
    println!("Renamed request {}: {}", id, title.trim());
    Ok(())
}

fn handle_delete(ctx: &RunContext, id: &str, yes: bool) -> Result<()> {
    let conn = ctx.connect()?;
    let request = load_request(&conn, id)?;
    let id = request.id.unwrap_or_default();

    if !yes {
        print!("Delete request {} ({})? [y/N] ", id, request.title);
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    RequestRepo::delete(&conn, id)?;
    println!("Deleted request {}", id);
    Ok(())
}

fn handle_targets_set(ctx: &RunContext, category: &str, hours: &str, warning: f64) -> Result<()> {
    let category = parse_category(category).unwrap_or_else(|e| user_error(&e));
    let hours = parse_hours(hours).unwrap_or_else(|e| user_error(&e.to_string()));
    let target = SlaTarget::new(category, hours, warning).unwrap_or_else(|e| user_error(&e.to_string()));

    let conn = ctx.connect()?;
    TargetRepo::set(&conn, &target, ctx.now_ts())?;
    println!(
        "SLA target for {}: {} (warning at {}%)",
        category,
        crate::utils::format_hours(target.target_hours()),
        target.warning_threshold_percent()
    );
    Ok(())
}

fn handle_targets_list(ctx: &RunContext, json: bool) -> Result<()> {
    let conn = ctx.connect()?;
    let targets = TargetRepo::list_effective(&conn)?;
    if json {
        #[derive(serde::Serialize)]
        struct Row<'a> {
            #[serde(flatten)]
            target: &'a SlaTarget,
            custom: bool,
        }
        let rows: Vec<Row> = targets.iter().map(|(target, custom)| Row { target, custom: *custom }).collect();
        return print_json(&rows);
    }
    print!("{}", output::format_targets(&targets, ctx.is_tty));
    Ok(())
}

fn handle_targets_remove(ctx: &RunContext, category: &str) -> Result<()> {
    let category = parse_category(category).unwrap_or_else(|e| user_error(&e));
    let conn = ctx.connect()?;
    if TargetRepo::remove(&conn, category)? {
        let default = SlaTarget::default_for(category);
        println!(
            "Removed custom target for {}; default {} applies",
            category,
            crate::utils::format_hours(default.target_hours())
        );
    } else {
        println!("No custom target for {}", category);
    }
    Ok(())
}

fn handle_sla(
    ctx: &RunContext,
    start: &str,
    target: &str,
    warning: f64,
    business: bool,
    wall: bool,
    json: bool,
) -> Result<()> {
    let started = parse_timestamp(start, ctx.now, local_offset(ctx.now))
        .unwrap_or_else(|e| user_error(&e.to_string()));
    let hours = parse_hours(target).unwrap_or_else(|e| user_error(&e.to_string()));
    // Validate at the configuration boundary; the calculator itself does not
    let target = SlaTarget::new(ServiceCategory::DEFAULT, hours, warning)
        .unwrap_or_else(|e| user_error(&e.to_string()));

    let policy = if wall {
        HoursPolicy::WallClock
    } else if business {
        match &ctx.config.hours_policy {
            HoursPolicy::Business(calendar) => HoursPolicy::Business(calendar.clone()),
            HoursPolicy::WallClock => HoursPolicy::Business(sla::BusinessCalendar::default()),
        }
    } else {
        ctx.config.hours_policy.clone()
    };

    let result = sla::evaluate_target(&target, &policy, started, ctx.now);
    if json {
        #[derive(serde::Serialize)]
        struct Evaluation<'a> {
            #[serde(flatten)]
            result: &'a sla::SlaResult,
            target_hours: f64,
            warning_threshold_percent: f64,
            hours_policy: &'a str,
            label: String,
            progress: f64,
        }
        return print_json(&Evaluation {
            result: &result,
            target_hours: target.target_hours(),
            warning_threshold_percent: target.warning_threshold_percent(),
            hours_policy: policy.name(),
            label: sla::badge_label(&result, ctx.locale),
            progress: sla::progress_value(&result),
        });
    }
    print!(
        "{}",
        output::format_sla(&result, target.target_hours(), target.warning_threshold_percent(), policy.name(), ctx.locale, ctx.is_tty)
    );
    Ok(())
}

fn handle_report(ctx: &RunContext, json: bool) -> Result<()> {
    let conn = ctx.connect()?;
    let views = RequestRepo::list(&conn, &RequestFilter::default())?
        .into_iter()
        .map(|request| view_for(&conn, ctx, request))
        .collect::<Result<Vec<_>>>()?;
    let report = report::build_report(&views, ctx.now_ts());
    if json {
        return print_json(&report);
    }
    print!("{}", report::format_report(&report, ctx.locale, ctx.is_tty));
    Ok(())
}

fn webhook_secret(secret: Option<String>) -> String {
    secret
        .or_else(|| std::env::var("SRL_WEBHOOK_SECRET").ok())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| user_error("No webhook secret given. Use --secret or set SRL_WEBHOOK_SECRET."))
}

fn read_payload(file: Option<std::path::PathBuf>) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    match file {
        Some(path) => {
            payload = std::fs::read(&path)
                .with_context(|| format!("Failed to read payload file: {}", path.display()))?;
        }
        None => {
            std::io::stdin()
                .read_to_end(&mut payload)
                .context("Failed to read payload from stdin")?;
        }
    }
    Ok(payload)
}

fn handle_webhook_sign(secret: Option<String>, file: Option<std::path::PathBuf>, timestamp: Option<i64>) -> Result<()> {
    let secret = webhook_secret(secret);
    let payload = read_payload(file)?;
    let signature = match timestamp {
        Some(ts) => webhook::sign_timestamped(secret.as_bytes(), &payload, ts)?,
        None => webhook::sign_hex(secret.as_bytes(), &payload)?,
    };
    println!("{}", signature);
    Ok(())
}

fn handle_webhook_verify(
    ctx: &RunContext,
    secret: Option<String>,
    signature: &str,
    file: Option<std::path::PathBuf>,
    tolerance: Option<i64>,
) -> Result<()> {
    let secret = webhook_secret(secret);
    let payload = read_payload(file)?;
    let tolerance = tolerance.unwrap_or(ctx.config.webhook_tolerance_secs);
    if tolerance < 0 {
        user_error(&format!("Invalid tolerance: {}. Tolerance must be a non-negative number of seconds.", tolerance));
    }

    let outcome = if signature.contains("v1=") {
        webhook::verify_timestamped_header(secret.as_bytes(), &payload, signature, tolerance, ctx.now_ts())
            .map(|header| format!("Signature valid (signed at {})", output::format_timestamp(header.timestamp)))
    } else {
        webhook::verify_hex(secret.as_bytes(), &payload, signature).map(|()| "Signature valid".to_string())
    };

    match outcome {
        Ok(message) => {
            println!("{}", message);
            Ok(())
        }
        Err(e) => {
            log::warn!("Webhook verification failed: {}", e);
            user_error(&format!("Signature verification failed: {}", e))
        }
    }
}
