use rusqlite::{Connection, OptionalExtension};
use crate::models::ServiceCategory;
use crate::sla::SlaTarget;
use anyhow::{Context, Result};

/// SLA target repository
pub struct TargetRepo;

impl TargetRepo {
    /// Store (or replace) the target for its category
    pub fn set(conn: &Connection, target: &SlaTarget, now: i64) -> Result<()> {
        conn.execute(
            "INSERT INTO sla_targets (category, target_hours, warning_threshold, modified_ts)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(category) DO UPDATE SET
                target_hours = excluded.target_hours,
                warning_threshold = excluded.warning_threshold,
                modified_ts = excluded.modified_ts",
            rusqlite::params![
                target.category().as_str(),
                target.target_hours(),
                target.warning_threshold_percent(),
                now,
            ],
        )
        .with_context(|| format!("Failed to store SLA target for {}", target.category()))?;
        log::debug!("Stored SLA target for {}: {}h", target.category(), target.target_hours());
        Ok(())
    }

    /// Stored target for a category, if any
    pub fn get(conn: &Connection, category: ServiceCategory) -> Result<Option<SlaTarget>> {
        let row = conn
            .query_row(
                "SELECT target_hours, warning_threshold FROM sla_targets WHERE category = ?1",
                [category.as_str()],
                |row| Ok((row.get::<_, f64>(0)?, row.get::<_, f64>(1)?)),
            )
            .optional()?;

        match row {
            Some((hours, threshold)) => {
                let target = SlaTarget::new(category, hours, threshold)
                    .with_context(|| format!("Stored SLA target for {} is invalid", category))?;
                Ok(Some(target))
            }
            None => Ok(None),
        }
    }

    /// Stored target, or the built-in default for the category
    pub fn effective(conn: &Connection, category: ServiceCategory) -> Result<SlaTarget> {
        Ok(Self::get(conn, category)?.unwrap_or_else(|| SlaTarget::default_for(category)))
    }

    /// Effective targets for every category, with a flag marking stored overrides
    pub fn list_effective(conn: &Connection) -> Result<Vec<(SlaTarget, bool)>> {
        let mut targets = Vec::new();
        for category in ServiceCategory::ALL {
            match Self::get(conn, category)? {
                Some(target) => targets.push((target, true)),
                None => targets.push((SlaTarget::default_for(category), false)),
            }
        }
        Ok(targets)
    }

    /// Remove a stored override; returns whether one existed
    pub fn remove(conn: &Connection, category: ServiceCategory) -> Result<bool> {
        let changed = conn.execute("DELETE FROM sla_targets WHERE category = ?1", [category.as_str()])?;
        Ok(changed > 0)
    }
}
