use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use serde::Deserialize;

use crate::models::doctor::parse_availability_flag;
use crate::models::{Appointment, AppointmentStatus, Doctor, GreetingSet, HospitalContact};

// Raw CSV shapes; every field arrives as text and is validated here.

#[derive(Debug, Deserialize)]
struct AppointmentRow {
    doctor_name: String,
    date: String,
    time: String,
    location: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct DoctorRow {
    doctor_name: String,
    specialization: String,
    is_available_today: String,
}

/// Read, validate, and insert all reference tables. A single bad row
/// aborts the whole load so the service never starts on broken data.
pub fn load_reference_data(conn: &Connection, data_dir: &Path) -> anyhow::Result<()> {
    let appointments = {
        let path = data_dir.join("appointments.csv");
        let reader = csv::Reader::from_path(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        read_appointments(reader)
            .with_context(|| format!("invalid appointment data in {}", path.display()))?
    };

    let doctors = {
        let path = data_dir.join("doctors.csv");
        let reader = csv::Reader::from_path(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        read_doctors(reader).with_context(|| format!("invalid doctor data in {}", path.display()))?
    };

    let contact = {
        let path = data_dir.join("hospital_info.json");
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        HospitalContact::from_json(&raw)
            .with_context(|| format!("invalid hospital info in {}", path.display()))?
    };

    insert_appointments(conn, &appointments)?;
    insert_doctors(conn, &doctors)?;
    insert_hospital_contact(conn, &contact)?;

    tracing::info!(
        appointments = appointments.len(),
        doctors = doctors.len(),
        "reference data loaded"
    );

    Ok(())
}

/// Parse `greetings.json` for the chat front-end's canned lines.
pub fn load_greetings(data_dir: &Path) -> anyhow::Result<GreetingSet> {
    let path = data_dir.join("greetings.json");
    let raw =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
    GreetingSet::from_json(&raw)
        .with_context(|| format!("invalid greeting data in {}", path.display()))
}

fn read_appointments<R: Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<Appointment>> {
    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize::<AppointmentRow>().enumerate() {
        let raw = result.with_context(|| format!("failed to read row {}", idx + 1))?;
        let row = parse_appointment(raw).with_context(|| format!("row {}", idx + 1))?;
        rows.push(row);
    }
    Ok(rows)
}

fn read_doctors<R: Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<Doctor>> {
    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize::<DoctorRow>().enumerate() {
        let raw = result.with_context(|| format!("failed to read row {}", idx + 1))?;
        let row = parse_doctor(raw).with_context(|| format!("row {}", idx + 1))?;
        rows.push(row);
    }
    Ok(rows)
}

fn parse_appointment(raw: AppointmentRow) -> anyhow::Result<Appointment> {
    if raw.doctor_name.trim().is_empty() {
        return Err(anyhow::anyhow!("doctor_name is empty"));
    }
    let date = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d")
        .with_context(|| format!("invalid date: {}", raw.date))?;
    validate_time(&raw.time)?;
    let status = AppointmentStatus::parse(&raw.status)?;

    Ok(Appointment {
        doctor_name: raw.doctor_name,
        date,
        time: raw.time,
        location: raw.location,
        status,
    })
}

fn parse_doctor(raw: DoctorRow) -> anyhow::Result<Doctor> {
    if raw.doctor_name.trim().is_empty() {
        return Err(anyhow::anyhow!("doctor_name is empty"));
    }
    let available_today = parse_availability_flag(&raw.is_available_today)?;

    Ok(Doctor {
        doctor_name: raw.doctor_name,
        specialization: raw.specialization,
        available_today,
    })
}

/// Slot times must be zero-padded HH:MM so that lexicographic ordering in
/// the store equals chronological ordering.
fn validate_time(s: &str) -> anyhow::Result<()> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 || parts[0].len() != 2 || parts[1].len() != 2 {
        return Err(anyhow::anyhow!("invalid time format: {s}"));
    }
    let hour: u32 = parts[0]
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid hour in: {s}"))?;
    let minute: u32 = parts[1]
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid minute in: {s}"))?;
    if hour > 23 || minute > 59 {
        return Err(anyhow::anyhow!("time out of range: {s}"));
    }
    Ok(())
}

fn insert_appointments(conn: &Connection, rows: &[Appointment]) -> anyhow::Result<()> {
    let mut stmt = conn.prepare(
        "INSERT INTO appointments (doctor_name, date, time, location, status)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    for row in rows {
        stmt.execute(params![
            row.doctor_name,
            row.date.format("%Y-%m-%d").to_string(),
            row.time,
            row.location,
            row.status.as_str(),
        ])?;
    }
    Ok(())
}

fn insert_doctors(conn: &Connection, rows: &[Doctor]) -> anyhow::Result<()> {
    let mut stmt = conn.prepare(
        "INSERT INTO doctors (doctor_name, specialization, is_available_today)
         VALUES (?1, ?2, ?3)",
    )?;
    for row in rows {
        stmt.execute(params![row.doctor_name, row.specialization, row.available_today])
            .with_context(|| format!("duplicate or invalid doctor row: {}", row.doctor_name))?;
    }
    Ok(())
}

fn insert_hospital_contact(conn: &Connection, contact: &HospitalContact) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO hospital_info (id, complaint_email, support_email, helpline_number)
         VALUES (1, ?1, ?2, ?3)",
        params![
            contact.complaint_email,
            contact.support_email,
            contact.helpline_number
        ],
    )?;
    Ok(())
}
