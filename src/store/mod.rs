pub mod loader;
pub mod queries;

use std::path::Path;

use anyhow::Context;
use rusqlite::Connection;

/// Open an empty in-memory store with the reference schema in place.
/// The store is populated exactly once and never written to afterwards.
pub fn open_in_memory() -> anyhow::Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory store")?;

    conn.execute_batch(
        "CREATE TABLE appointments (
            doctor_name TEXT NOT NULL,
            date        TEXT NOT NULL,
            time        TEXT NOT NULL,
            location    TEXT NOT NULL,
            status      TEXT NOT NULL
        );
        CREATE TABLE doctors (
            doctor_name        TEXT NOT NULL PRIMARY KEY,
            specialization     TEXT NOT NULL,
            is_available_today INTEGER NOT NULL
        );
        CREATE TABLE hospital_info (
            id              INTEGER PRIMARY KEY CHECK (id = 1),
            complaint_email TEXT NOT NULL,
            support_email   TEXT NOT NULL,
            helpline_number TEXT NOT NULL
        );",
    )
    .context("failed to create store schema")?;

    Ok(conn)
}

/// Build the record store from the reference files in `data_dir`.
/// Any missing file or malformed row aborts startup.
pub fn init_store(data_dir: &Path) -> anyhow::Result<Connection> {
    let conn = open_in_memory()?;
    loader::load_reference_data(&conn, data_dir)?;
    Ok(conn)
}
