//! Session context - the most recent score/observation pair for one session.
//!
//! Created once per submitted observation, overwritten by the next, and the
//! only state the responder may read. The core never persists it; callers
//! hand it over as a JSON payload with the flat field layout below.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::observation::SleepObservation;

/// Score plus the observation it was derived from.
///
/// Serializes to the flat payload shape collaborators store:
/// `{"sleep_score": 85, "sleep_hours": 8.0, "disturbances": 0, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    #[serde(rename = "sleep_score")]
    pub score: u8,

    #[serde(flatten)]
    pub observation: SleepObservation,
}

impl SessionContext {
    pub fn new(score: u8, observation: SleepObservation) -> Self {
        Self { score, observation }
    }

    /// Decode a collaborator payload. Any shape or type mismatch is the
    /// responder's "malformed payload" case.
    pub fn from_json_str(raw: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::YesNo;

    fn context() -> SessionContext {
        SessionContext::new(
            85,
            SleepObservation::new(8.0, 0, 21.0, YesNo::No, YesNo::No).unwrap(),
        )
    }

    #[test]
    fn test_round_trip() {
        let ctx = context();
        let json = ctx.to_json().unwrap();
        assert_eq!(SessionContext::from_json_str(&json).unwrap(), ctx);
    }

    #[test]
    fn test_flat_payload_shape() {
        let json = context().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sleep_score"], 85);
        assert_eq!(value["sleep_hours"], 8.0);
        assert_eq!(value["light_exposure"], "no");
    }

    #[test]
    fn test_decodes_collaborator_payload() {
        let raw = r#"{"sleep_hours": 7.5, "disturbances": 1, "temperature": 20.0,
                      "light_exposure": "no", "noise_level": "yes", "sleep_score": 85}"#;
        let ctx = SessionContext::from_json_str(raw).unwrap();
        assert_eq!(ctx.score, 85);
        assert_eq!(ctx.observation.noise_level, YesNo::Yes);
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(SessionContext::from_json_str("not json").is_err());
        assert!(SessionContext::from_json_str(r#"{"sleep_score": "high"}"#).is_err());
        assert!(SessionContext::from_json_str(r#"{"sleep_score": 85}"#).is_err());
    }
}
