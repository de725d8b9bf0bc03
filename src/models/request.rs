use serde::{Deserialize, Serialize};
use chrono::{TimeZone, Utc};
use super::{ApplicationStatus, ServiceCategory};

/// Service request model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: Option<i64>,
    pub uuid: String,
    pub title: String,
    pub category: ServiceCategory,
    pub status: ApplicationStatus,
    pub created_ts: i64,
    pub modified_ts: i64,
    /// When the request entered its current status
    pub status_ts: i64,
    /// First time the request reached a status that stops the SLA clock
    pub stopped_ts: Option<i64>,
}

impl ServiceRequest {
    /// Create a new request at the given status
    pub fn new(title: String, category: ServiceCategory, status: ApplicationStatus, now: i64) -> Self {
        Self {
            id: None,
            uuid: uuid::Uuid::new_v4().to_string(),
            title,
            category,
            status,
            created_ts: now,
            modified_ts: now,
            status_ts: now,
            stopped_ts: None,
        }
    }

    /// Human-readable reference code (SR-YYYYMMDD-id)
    pub fn reference(&self) -> String {
        let date = Utc
            .timestamp_opt(self.created_ts, 0)
            .single()
            .map(|dt| dt.format("%Y%m%d").to_string())
            .unwrap_or_else(|| "00000000".to_string());
        match self.id {
            Some(id) => format!("SR-{}-{:04}", date, id),
            None => format!("SR-{}-new", date),
        }
    }

    /// The instant the SLA clock is read at: the stop time if stopped, else `now`
    pub fn sla_clock_ts(&self, now: i64) -> i64 {
        self.stopped_ts.unwrap_or(now)
    }
}

/// One recorded status transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEvent {
    pub id: Option<i64>,
    pub request_id: i64,
    pub from_status: Option<ApplicationStatus>,
    pub to_status: ApplicationStatus,
    pub ts: i64,
    pub note: Option<String>,
}
