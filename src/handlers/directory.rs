use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::store::queries;

#[derive(Serialize)]
pub struct DoctorResponse {
    doctor_name: String,
    specialization: String,
    available_today: bool,
}

// GET /api/doctors
pub async fn get_doctors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DoctorResponse>>, AppError> {
    let doctors = {
        let db = state.db.lock().unwrap();
        queries::list_doctors(&db)?
    };

    let response = doctors
        .into_iter()
        .map(|d| DoctorResponse {
            doctor_name: d.doctor_name,
            specialization: d.specialization,
            available_today: d.available_today,
        })
        .collect();

    Ok(Json(response))
}

// GET /api/specializations
pub async fn get_specializations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, AppError> {
    let specializations = {
        let db = state.db.lock().unwrap();
        queries::list_specializations(&db)?
    };

    Ok(Json(specializations))
}
