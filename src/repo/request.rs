use rusqlite::{Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use crate::models::{ApplicationStatus, ServiceCategory, ServiceRequest};
use crate::pipeline;
use crate::repo::event::EventRepo;
use anyhow::{Context, Result};

const REQUEST_COLUMNS: &str =
    "id, uuid, title, category, status, created_ts, modified_ts, status_ts, stopped_ts";

/// Filter for listing requests
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    pub category: Option<ServiceCategory>,
    pub status: Option<ApplicationStatus>,
    /// Include completed and terminal requests
    pub include_closed: bool,
}

/// Service request repository for database operations
pub struct RequestRepo;

impl RequestRepo {
    /// Create a request at the first stage of its category pipeline
    pub fn create(conn: &Connection, title: &str, category: ServiceCategory, now: i64) -> Result<ServiceRequest> {
        let pipeline = pipeline::table::pipeline(category);
        let initial = pipeline
            .first()
            .map(|stage| stage.key)
            .unwrap_or(ApplicationStatus::Submitted);
        let request = ServiceRequest::new(title.to_string(), category, initial, now);

        let tx = conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO requests (uuid, title, category, status, created_ts, modified_ts, status_ts)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                request.uuid,
                request.title,
                request.category.as_str(),
                request.status.as_str(),
                request.created_ts,
                request.modified_ts,
                request.status_ts,
            ],
        )
        .with_context(|| format!("Failed to create request: {}", title))?;
        let id = tx.last_insert_rowid();
        EventRepo::record(&tx, id, None, initial, now, None)?;
        tx.commit()?;

        log::debug!("Created request {} ({}) in {}", id, title, category);
        Ok(ServiceRequest {
            id: Some(id),
            ..request
        })
    }

    /// Get request by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<ServiceRequest>> {
        let mut stmt = conn.prepare(&format!("SELECT {} FROM requests WHERE id = ?1", REQUEST_COLUMNS))?;
        let request = stmt.query_row([id], row_to_request).optional()?;
        Ok(request)
    }

    /// List requests matching a filter, oldest first
    pub fn list(conn: &Connection, filter: &RequestFilter) -> Result<Vec<ServiceRequest>> {
        let mut stmt = conn.prepare(&format!("SELECT {} FROM requests ORDER BY id", REQUEST_COLUMNS))?;
        let rows = stmt.query_map([], row_to_request)?;

        let mut requests = Vec::new();
        for row in rows {
            let request = row?;
            if let Some(category) = filter.category {
                if request.category != category {
                    continue;
                }
            }
            if let Some(status) = filter.status {
                if request.status != status {
                    continue;
                }
            } else if !filter.include_closed && request.status.stops_sla_clock() {
                continue;
            }
            requests.push(request);
        }
        Ok(requests)
    }

    /// Move a request to a new status and record the transition.
    ///
    /// Reaching a status that stops the SLA clock records the stop time;
    /// moving back to an open status clears it so the clock resumes.
    pub fn set_status(
        conn: &Connection,
        id: i64,
        to: ApplicationStatus,
        note: Option<&str>,
        now: i64,
    ) -> Result<ServiceRequest> {
        // IMMEDIATE takes the write lock before the read, so the row cannot
        // change between reading the old status and writing the new one
        let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
        let current = Self::get_by_id(&tx, id)?
            .ok_or_else(|| anyhow::anyhow!("Request {} not found", id))?;

        let stopped_ts = if to.stops_sla_clock() {
            current.stopped_ts.or(Some(now))
        } else {
            None
        };

        tx.execute(
            "UPDATE requests SET status = ?1, status_ts = ?2, modified_ts = ?2, stopped_ts = ?3 WHERE id = ?4",
            rusqlite::params![to.as_str(), now, stopped_ts, id],
        )
        .with_context(|| format!("Failed to update status of request {}", id))?;
        EventRepo::record(&tx, id, Some(current.status), to, now, note)?;
        tx.commit()?;

        log::info!("Request {} moved {} -> {}", id, current.status, to);
        Ok(ServiceRequest {
            status: to,
            status_ts: now,
            modified_ts: now,
            stopped_ts,
            ..current
        })
    }

    /// Rename a request
    pub fn set_title(conn: &Connection, id: i64, title: &str, now: i64) -> Result<()> {
        let changed = conn.execute(
            "UPDATE requests SET title = ?1, modified_ts = ?2 WHERE id = ?3",
            rusqlite::params![title, now, id],
        )?;
        if changed == 0 {
            anyhow::bail!("Request {} not found", id);
        }
        Ok(())
    }

    /// Permanently delete a request and its history
    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        let changed = conn.execute("DELETE FROM requests WHERE id = ?1", [id])
            .with_context(|| format!("Failed to delete request {}", id))?;
        if changed == 0 {
            anyhow::bail!("Request {} not found", id);
        }
        Ok(())
    }
}

fn row_to_request(row: &Row) -> rusqlite::Result<ServiceRequest> {
    let category: String = row.get(3)?;
    let status: String = row.get(4)?;
    Ok(ServiceRequest {
        id: Some(row.get(0)?),
        uuid: row.get(1)?,
        title: row.get(2)?,
        category: ServiceCategory::from_str_or_default(Some(&category)),
        status: ApplicationStatus::from_str(&status)
            .ok_or_else(|| invalid_column(4, format!("unknown status '{}'", status)))?,
        created_ts: row.get(5)?,
        modified_ts: row.get(6)?,
        status_ts: row.get(7)?,
        stopped_ts: row.get(8)?,
    })
}

pub(crate) fn invalid_column(index: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        index,
        rusqlite::types::Type::Text,
        message.into(),
    )
}
