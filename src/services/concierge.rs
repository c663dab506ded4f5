use chrono::NaiveDate;
use rusqlite::Connection;

use crate::models::Intent;
use crate::services::intent::detect_intent;
use crate::store::queries;

/// Answer one free-text query against the record store. `today` is the
/// reference date for availability checks; the caller decides whether it
/// is wall-clock or a pinned demo date.
pub fn answer(conn: &Connection, today: NaiveDate, text: &str) -> anyhow::Result<String> {
    let classified = detect_intent(text);

    tracing::info!(intent = ?classified.intent, "dispatching query");

    match classified.intent {
        Intent::Greet => Ok(greet_reply()),
        Intent::Thanks => Ok(thanks_reply()),
        Intent::Complaint => complaint_reply(conn),
        Intent::DoctorAvailability => match classified.doctor {
            Some(doctor) => doctor_availability_reply(conn, today, &doctor),
            // No extracted doctor: fall back rather than erroring.
            None => Ok(fallback_reply()),
        },
        Intent::SpecialistLookup => match classified.spec {
            Some(spec) => specialist_reply(conn, &spec),
            None => Ok(fallback_reply()),
        },
        Intent::AllDoctorsAvailable => all_doctors_reply(conn),
        Intent::Fallback => Ok(fallback_reply()),
    }
}

fn greet_reply() -> String {
    "Hello! I'm your CareFlow concierge agent. \
     I can help with doctors, appointments, specializations and complaints. \
     How can I assist you today?"
        .to_string()
}

fn thanks_reply() -> String {
    "You're welcome! If you have any more questions about the hospital, just ask.".to_string()
}

fn complaint_reply(conn: &Connection) -> anyhow::Result<String> {
    let contact = queries::hospital_contact(conn)?;
    Ok(format!(
        "You can register a complaint by emailing **{}** or contacting support at **{}** / **{}**.",
        contact.complaint_email, contact.support_email, contact.helpline_number
    ))
}

fn doctor_availability_reply(
    conn: &Connection,
    today: NaiveDate,
    doctor_name: &str,
) -> anyhow::Result<String> {
    if !queries::is_doctor_available(conn, doctor_name, today)? {
        // Hardcoded cross-reference for Dr. Sharma only; deliberately not
        // generalized to other doctors.
        if doctor_name == "Dr. Sharma" {
            return Ok(
                "Dr. Sharma is not available today; all appointments for today are cancelled. \
                 You can book an appointment with Dr. Patel, who is available today."
                    .to_string(),
            );
        }
        return Ok(format!("{doctor_name} is not available today."));
    }

    let slots = queries::doctor_slots(conn, doctor_name, today)?;
    if slots.is_empty() {
        return Ok(format!(
            "{doctor_name} is available today, but there are no open slots left."
        ));
    }

    let times = slots
        .iter()
        .map(|s| s.time.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!(
        "Yes, you can meet {doctor_name} today. Available time slots are: {times}."
    ))
}

fn specialist_reply(conn: &Connection, spec_key: &str) -> anyhow::Result<String> {
    let (term, pretty) = if spec_key == "cardiology" {
        ("cardio", "cardiology / heart problems")
    } else {
        (spec_key, spec_key)
    };

    let candidates = queries::available_by_specialization(conn, term)?;
    if candidates.is_empty() {
        return Ok(format!(
            "No doctors with that specialization are available today for {pretty}."
        ));
    }

    let names = candidates
        .iter()
        .map(|d| d.doctor_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!(
        "The following doctors are available today for {pretty}: {names}."
    ))
}

fn all_doctors_reply(conn: &Connection) -> anyhow::Result<String> {
    let doctors = queries::available_doctors(conn)?;
    if doctors.is_empty() {
        return Ok("Sorry, no doctors are available today.".to_string());
    }

    let names = doctors
        .iter()
        .map(|d| d.doctor_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("Doctors available today are: {names}."))
}

fn fallback_reply() -> String {
    "I can help with doctor availability (e.g., Dr. Sharma or Dr. Patel), \
     specializations like cardiology, and complaints. Try asking \
     \"Which doctor is available for heart problems?\", \"Can I meet Dr. Sharma today?\", or \
     \"Where can I register a complaint?\""
        .to_string()
}
