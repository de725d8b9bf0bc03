use rusqlite::Connection;
use crate::models::{ApplicationStatus, StatusEvent};
use crate::repo::request::invalid_column;
use anyhow::{Context, Result};

/// Status history repository
pub struct EventRepo;

impl EventRepo {
    /// Append a status transition
    pub fn record(
        conn: &Connection,
        request_id: i64,
        from: Option<ApplicationStatus>,
        to: ApplicationStatus,
        ts: i64,
        note: Option<&str>,
    ) -> Result<i64> {
        conn.execute(
            "INSERT INTO status_events (request_id, from_status, to_status, ts, note)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![request_id, from.map(|s| s.as_str()), to.as_str(), ts, note],
        )
        .with_context(|| format!("Failed to record status change for request {}", request_id))?;
        Ok(conn.last_insert_rowid())
    }

    /// All transitions for a request in the order they were recorded.
    /// A backdated `ts` does not move an event ahead of earlier entries.
    pub fn list_for_request(conn: &Connection, request_id: i64) -> Result<Vec<StatusEvent>> {
        let mut stmt = conn.prepare(
            "SELECT id, request_id, from_status, to_status, ts, note
             FROM status_events WHERE request_id = ?1 ORDER BY id"
        )?;

        let rows = stmt.query_map([request_id], |row| {
            let from: Option<String> = row.get(2)?;
            let to: String = row.get(3)?;
            let from_status = match from {
                Some(s) => Some(
                    ApplicationStatus::from_str(&s)
                        .ok_or_else(|| invalid_column(2, format!("unknown status '{}'", s)))?,
                ),
                None => None,
            };
            Ok(StatusEvent {
                id: Some(row.get(0)?),
                request_id: row.get(1)?,
                from_status,
                to_status: ApplicationStatus::from_str(&to)
                    .ok_or_else(|| invalid_column(3, format!("unknown status '{}'", to)))?,
                ts: row.get(4)?,
                note: row.get(5)?,
            })
        })?;

        let mut events = Vec::new();
        for row in rows {
            events.push(row?);
        }
        Ok(events)
    }
}
