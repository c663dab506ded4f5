use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub doctor_name: String,
    pub specialization: String,
    pub available_today: bool,
}

/// The doctor table encodes availability as the strings "true"/"false".
/// Anything else is a data defect and must fail the load.
pub fn parse_availability_flag(s: &str) -> anyhow::Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow::anyhow!(
            "unrecognized availability flag: {other:?} (expected \"true\" or \"false\")"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_true_false() {
        assert!(parse_availability_flag("true").unwrap());
        assert!(parse_availability_flag("TRUE").unwrap());
        assert!(!parse_availability_flag("false").unwrap());
        assert!(!parse_availability_flag(" False ").unwrap());
    }

    #[test]
    fn test_parse_flag_rejects_other_values() {
        assert!(parse_availability_flag("yes").is_err());
        assert!(parse_availability_flag("1").is_err());
        assert!(parse_availability_flag("").is_err());
    }
}
