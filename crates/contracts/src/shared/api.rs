//! Response envelope shared by the external REST services.
//!
//! The location service answers `{ "data": [...] }`, the lead, dealer, ticket
//! and dispute services answer `{ "success": bool, "data": ..., "message": "..." }`.
//! Both shapes deserialize into [`ApiEnvelope`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the payload.
    ///
    /// An explicit `success: false` wins over any payload that came with it.
    pub fn into_result(self) -> Result<T, String> {
        if self.success == Some(false) {
            return Err(self
                .message
                .unwrap_or_else(|| "Request was rejected by the server".to_string()));
        }
        self.data.ok_or_else(|| {
            self.message
                .unwrap_or_else(|| "Response contained no data".to_string())
        })
    }
}

/// Acknowledgement returned by mutation endpoints that have no payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    /// Only an explicit `success: false` is a failure; `{}` acknowledges.
    pub fn into_result(self) -> Result<(), String> {
        match self.success {
            Some(false) => Err(self
                .message
                .unwrap_or_else(|| "Request was rejected by the server".to_string())),
            _ => Ok(()),
        }
    }

    /// Reads the body of a 2xx mutation reply. Some services answer 204 or
    /// an empty body.
    pub fn from_body(text: &str) -> Result<(), String> {
        if text.trim().is_empty() {
            return Ok(());
        }
        serde_json::from_str::<Ack>(text)
            .map_err(|e| format!("Failed to parse response: {}", e))?
            .into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_shape() {
        let env: ApiEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"data": ["a", "b"]}"#).unwrap();
        assert_eq!(env.into_result().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_success_false_is_error() {
        let env: ApiEnvelope<Vec<String>> = serde_json::from_str(
            r#"{"success": false, "data": [], "message": "Dealer already exists"}"#,
        )
        .unwrap();
        assert_eq!(env.into_result().unwrap_err(), "Dealer already exists");
    }

    #[test]
    fn test_missing_data() {
        let env: ApiEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(env.into_result().is_err());
    }

    #[test]
    fn test_ack() {
        let ack: Ack = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ack.into_result().is_ok());
        let ack: Ack = serde_json::from_str(r#"{"success": false, "message": "nope"}"#).unwrap();
        assert_eq!(ack.into_result().unwrap_err(), "nope");
    }

    #[test]
    fn test_ack_body() {
        assert!(Ack::from_body("").is_ok());
        assert!(Ack::from_body("{}").is_ok());
        assert!(Ack::from_body(r#"{"message": "Created"}"#).is_ok());
        assert_eq!(
            Ack::from_body(r#"{"success": false}"#).unwrap_err(),
            "Request was rejected by the server"
        );
        assert!(Ack::from_body("<html>").is_err());
    }
}
