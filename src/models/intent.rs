use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greet,
    Thanks,
    Complaint,
    DoctorAvailability,
    SpecialistLookup,
    AllDoctorsAvailable,
    Fallback,
}

/// Result of classifying one user utterance. Produced per query and
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedIntent {
    pub intent: Intent,
    pub doctor: Option<String>,
    pub spec: Option<String>,
}

impl ClassifiedIntent {
    pub fn bare(intent: Intent) -> Self {
        Self {
            intent,
            doctor: None,
            spec: None,
        }
    }
}
