use rusqlite::{Connection, Result};
use std::collections::HashMap;

/// Current database schema version
const CURRENT_VERSION: u32 = 2;

/// Migration system for managing database schema versions
pub struct MigrationManager;

impl MigrationManager {
    /// Initialize the database with the current schema
    /// This creates the schema_version table and applies all migrations
    pub fn initialize(conn: &Connection) -> Result<()> {
        // Foreign keys are a per-connection setting and cannot change inside a transaction
        conn.execute("PRAGMA foreign_keys=ON", [])?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER PRIMARY KEY
            )",
            [],
        )?;

        let current_version = Self::get_version(conn)?;

        for version in (current_version + 1)..=CURRENT_VERSION {
            log::debug!("Applying schema migration v{}", version);
            Self::apply_migration(conn, version)?;
        }

        Ok(())
    }

    /// Apply a specific migration by version number
    fn apply_migration(conn: &Connection, version: u32) -> Result<()> {
        let migrations = get_migrations();
        if let Some(migration) = migrations.get(&version) {
            let tx = conn.unchecked_transaction()?;
            migration(&tx)?;
            tx.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                [version],
            )?;
            tx.commit()?;
            Ok(())
        } else {
            Err(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_MISUSE),
                Some(format!("No migration found for version {}", version)),
            ))
        }
    }

    /// Get the current schema version
    pub fn get_version(conn: &Connection) -> Result<u32> {
        conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
    }
}

type Migration = fn(&rusqlite::Transaction) -> Result<(), rusqlite::Error>;

/// Get all migrations indexed by version
fn get_migrations() -> HashMap<u32, Migration> {
    let mut migrations: HashMap<u32, Migration> = HashMap::new();
    migrations.insert(1, migration_v1);
    migrations.insert(2, migration_v2);
    migrations
}

/// Migration v1: requests and their status history
fn migration_v1(tx: &rusqlite::Transaction) -> Result<(), rusqlite::Error> {
    tx.execute(
        "CREATE TABLE requests (
            id INTEGER PRIMARY KEY,
            uuid TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            category TEXT NOT NULL CHECK(category IN ('government','business','personal','legal','translation')),
            status TEXT NOT NULL,
            created_ts INTEGER NOT NULL,
            modified_ts INTEGER NOT NULL,
            status_ts INTEGER NOT NULL,
            stopped_ts INTEGER NULL
        )",
        [],
    )?;
    tx.execute("CREATE INDEX idx_requests_status ON requests(status)", [])?;
    tx.execute("CREATE INDEX idx_requests_category ON requests(category)", [])?;

    // Append-only status history
    tx.execute(
        "CREATE TABLE status_events (
            id INTEGER PRIMARY KEY,
            request_id INTEGER NOT NULL REFERENCES requests(id) ON DELETE CASCADE,
            from_status TEXT NULL,
            to_status TEXT NOT NULL,
            ts INTEGER NOT NULL,
            note TEXT NULL
        )",
        [],
    )?;
    tx.execute("CREATE INDEX idx_status_events_request ON status_events(request_id, ts)", [])?;

    Ok(())
}

/// Migration v2: per-category SLA targets
fn migration_v2(tx: &rusqlite::Transaction) -> Result<(), rusqlite::Error> {
    tx.execute(
        "CREATE TABLE sla_targets (
            category TEXT PRIMARY KEY,
            target_hours REAL NOT NULL CHECK(target_hours > 0),
            warning_threshold REAL NOT NULL CHECK(warning_threshold >= 0 AND warning_threshold <= 100),
            modified_ts INTEGER NOT NULL
        )",
        [],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_migration_applies_cleanly() {
        let conn = Connection::open_in_memory().unwrap();
        MigrationManager::initialize(&conn).unwrap();

        let version = MigrationManager::get_version(&conn).unwrap();
        assert_eq!(version, CURRENT_VERSION);
    }

    #[test]
    fn test_migration_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        MigrationManager::initialize(&conn).unwrap();
        MigrationManager::initialize(&conn).unwrap();

        let version = MigrationManager::get_version(&conn).unwrap();
        assert_eq!(version, CURRENT_VERSION);
    }

    #[test]
    fn test_foreign_key_constraints() {
        let conn = Connection::open_in_memory().unwrap();
        MigrationManager::initialize(&conn).unwrap();

        // Event for a request that does not exist
        let result = conn.execute(
            "INSERT INTO status_events (request_id, to_status, ts) VALUES (999, 'submitted', 1000)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_category_check_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        MigrationManager::initialize(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO requests (uuid, title, category, status, created_ts, modified_ts, status_ts)
             VALUES ('u1', 'Visa', 'visa', 'submitted', 1, 1, 1)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_sla_target_check_constraints() {
        let conn = Connection::open_in_memory().unwrap();
        MigrationManager::initialize(&conn).unwrap();

        assert!(conn.execute(
            "INSERT INTO sla_targets (category, target_hours, warning_threshold, modified_ts) VALUES ('legal', 0, 70, 1)",
            [],
        ).is_err());
        assert!(conn.execute(
            "INSERT INTO sla_targets (category, target_hours, warning_threshold, modified_ts) VALUES ('legal', 12, 170, 1)",
            [],
        ).is_err());
    }
}
