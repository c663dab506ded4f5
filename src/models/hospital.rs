use serde::{Deserialize, Serialize};

/// Singleton contact record for complaint routing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalContact {
    pub complaint_email: String,
    pub support_email: String,
    pub helpline_number: String,
}

impl HospitalContact {
    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        let contact: HospitalContact = serde_json::from_str(s)?;
        for (field, value) in [
            ("complaint_email", &contact.complaint_email),
            ("support_email", &contact.support_email),
            ("helpline_number", &contact.helpline_number),
        ] {
            if value.trim().is_empty() {
                return Err(anyhow::anyhow!("hospital info field {field} is empty"));
            }
        }
        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_json() {
        let json = r#"{"complaint_email":"complaints@h.example","support_email":"support@h.example","helpline_number":"+1-800-555-0100"}"#;
        let contact = HospitalContact::from_json(json).unwrap();
        assert_eq!(contact.complaint_email, "complaints@h.example");
        assert_eq!(contact.helpline_number, "+1-800-555-0100");
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(HospitalContact::from_json("not json").is_err());
    }

    #[test]
    fn test_missing_field() {
        let json = r#"{"complaint_email":"c@h.example","support_email":"s@h.example"}"#;
        assert!(HospitalContact::from_json(json).is_err());
    }

    #[test]
    fn test_empty_field() {
        let json = r#"{"complaint_email":"","support_email":"s@h.example","helpline_number":"123"}"#;
        assert!(HospitalContact::from_json(json).is_err());
    }
}
