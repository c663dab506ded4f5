use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::models::{Doctor, HospitalContact, Slot};

// All queries are read-only; the store is never written after load.

/// A doctor is available on a date iff at least one appointment row for
/// that doctor and date has a status other than cancelled.
pub fn is_doctor_available(
    conn: &Connection,
    doctor_name: &str,
    date: NaiveDate,
) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM appointments
         WHERE lower(doctor_name) = lower(?1)
           AND date = ?2
           AND lower(status) != 'cancelled'",
        params![doctor_name, date.format("%Y-%m-%d").to_string()],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Non-cancelled slots for a doctor on a date, ascending by time.
pub fn doctor_slots(
    conn: &Connection,
    doctor_name: &str,
    date: NaiveDate,
) -> rusqlite::Result<Vec<Slot>> {
    let mut stmt = conn.prepare(
        "SELECT time, location FROM appointments
         WHERE lower(doctor_name) = lower(?1)
           AND date = ?2
           AND lower(status) != 'cancelled'
         ORDER BY time ASC",
    )?;

    let rows = stmt.query_map(
        params![doctor_name, date.format("%Y-%m-%d").to_string()],
        |row| {
            Ok(Slot {
                time: row.get(0)?,
                location: row.get(1)?,
            })
        },
    )?;

    let mut slots = vec![];
    for row in rows {
        slots.push(row?);
    }
    Ok(slots)
}

/// Doctors whose specialization contains the search term
/// (case-insensitive) and who are flagged available today.
pub fn available_by_specialization(conn: &Connection, term: &str) -> rusqlite::Result<Vec<Doctor>> {
    let mut stmt = conn.prepare(
        "SELECT doctor_name, specialization, is_available_today FROM doctors
         WHERE instr(lower(specialization), lower(?1)) > 0
           AND is_available_today = 1
         ORDER BY rowid",
    )?;

    let rows = stmt.query_map(params![term], parse_doctor_row)?;

    let mut doctors = vec![];
    for row in rows {
        doctors.push(row?);
    }
    Ok(doctors)
}

/// Every doctor flagged available today, in table order.
pub fn available_doctors(conn: &Connection) -> rusqlite::Result<Vec<Doctor>> {
    let mut stmt = conn.prepare(
        "SELECT doctor_name, specialization, is_available_today FROM doctors
         WHERE is_available_today = 1
         ORDER BY rowid",
    )?;

    let rows = stmt.query_map([], parse_doctor_row)?;

    let mut doctors = vec![];
    for row in rows {
        doctors.push(row?);
    }
    Ok(doctors)
}

pub fn list_doctors(conn: &Connection) -> rusqlite::Result<Vec<Doctor>> {
    let mut stmt = conn.prepare(
        "SELECT doctor_name, specialization, is_available_today FROM doctors ORDER BY rowid",
    )?;

    let rows = stmt.query_map([], parse_doctor_row)?;

    let mut doctors = vec![];
    for row in rows {
        doctors.push(row?);
    }
    Ok(doctors)
}

pub fn list_specializations(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT DISTINCT specialization FROM doctors ORDER BY specialization")?;

    let rows = stmt.query_map([], |row| row.get(0))?;

    let mut specializations = vec![];
    for row in rows {
        specializations.push(row?);
    }
    Ok(specializations)
}

/// The singleton contact record. Its absence means the loader never ran,
/// which is a construction-time defect.
pub fn hospital_contact(conn: &Connection) -> rusqlite::Result<HospitalContact> {
    let contact = conn.query_row(
        "SELECT complaint_email, support_email, helpline_number FROM hospital_info WHERE id = 1",
        [],
        |row| {
            Ok(HospitalContact {
                complaint_email: row.get(0)?,
                support_email: row.get(1)?,
                helpline_number: row.get(2)?,
            })
        },
    )?;
    Ok(contact)
}

fn parse_doctor_row(row: &rusqlite::Row) -> rusqlite::Result<Doctor> {
    Ok(Doctor {
        doctor_name: row.get(0)?,
        specialization: row.get(1)?,
        available_today: row.get(2)?,
    })
}
