// Error handling utilities for consistent error messages and exit codes

use std::process;
use crate::models::{ApplicationStatus, ServiceCategory};
use crate::utils::fuzzy;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, missing resources, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exit with an internal error (exit code 2)
/// Internal errors are for unexpected system failures, database corruption, etc.
pub fn internal_error(message: &str) -> ! {
    eprintln!("Internal error: {}", message);
    process::exit(2);
}

/// Whether an error chain points at an internal failure rather than bad input
pub fn is_internal(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause.downcast_ref::<rusqlite::Error>().is_some()
            || cause.downcast_ref::<std::io::Error>().is_some()
    }) || error.to_string().starts_with("Failed to")
}

/// Validate that a string is not empty
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate that a request ID is valid (positive integer)
pub fn validate_request_id(id_str: &str) -> Result<i64, String> {
    id_str.parse::<i64>()
        .map_err(|_| format!("Invalid request ID: '{}'. Request ID must be a number.", id_str))
        .and_then(|id| {
            if id > 0 {
                Ok(id)
            } else {
                Err(format!("Invalid request ID: {}. Request ID must be positive.", id))
            }
        })
}

/// Parse a category name strictly, suggesting near matches on failure
pub fn parse_category(name: &str) -> Result<ServiceCategory, String> {
    ServiceCategory::from_str(name).ok_or_else(|| {
        let names: Vec<&str> = ServiceCategory::ALL.iter().map(|c| c.as_str()).collect();
        with_suggestions(format!("Unknown category '{}'", name), name, &names)
    })
}

/// Parse a status name, suggesting near matches on failure
pub fn parse_status(name: &str) -> Result<ApplicationStatus, String> {
    ApplicationStatus::from_str(name).ok_or_else(|| {
        let names: Vec<&str> = ApplicationStatus::ALL.iter().map(|s| s.as_str()).collect();
        with_suggestions(format!("Unknown status '{}'", name), name, &names)
    })
}

fn with_suggestions(message: String, search: &str, candidates: &[&str]) -> String {
    let suggestions = fuzzy::suggest(search, candidates, 2);
    if suggestions.is_empty() {
        format!("{}. Valid values: {}", message, candidates.join(", "))
    } else {
        format!("{}. Did you mean: {}?", message, suggestions.join(", "))
    }
}
