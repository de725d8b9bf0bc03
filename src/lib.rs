//! SRL (Service Request Ledger) - track service applications through
//! category pipelines and measure them against SLA targets
//!
//! This library provides the core functionality for SRL, including:
//! - Static status pipelines per service category and pipeline traversal
//! - A pure SLA calculator (wall-clock or business hours)
//! - Database operations and migrations for requests, history and targets
//! - HMAC-SHA256 webhook signing and verification
//! - CLI command parsing and execution
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use srl::sla::{evaluate, SlaStatus};
//!
//! let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
//! let result = evaluate(start, 24.0, 70.0, start + Duration::hours(18));
//! assert_eq!(result.status, SlaStatus::AtRisk);
//! ```

pub mod config;
pub mod db;
pub mod models;
pub mod pipeline;
pub mod repo;
pub mod sla;
pub mod webhook;
pub mod cli;
pub mod utils;
