use serde::{Deserialize, Serialize};

use crate::shared::validation::{require_str, FormError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        let email = require_str(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        Ok(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }
}

/// `data` of a successful `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken")]
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }

    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("admin") || r.eq_ignore_ascii_case("superadmin"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiEnvelope;

    #[test]
    fn test_login_response_from_envelope() {
        let env: ApiEnvelope<LoginResponse> = serde_json::from_str(
            r#"{"success": true, "data": {"accessToken": "abc", "user": {"_id": "u1", "email": "ops@sun.in", "role": "Admin"}}}"#,
        )
        .unwrap();
        let login = env.into_result().unwrap();
        assert_eq!(login.token, "abc");
        assert_eq!(login.user.display_name(), "ops@sun.in");
        assert!(login.user.is_admin());
    }

    #[test]
    fn test_login_request_validation() {
        let req = LoginRequest {
            email: " ops@sun.in ".to_string(),
            password: String::new(),
        };
        assert_eq!(req.validate().unwrap_err(), FormError::Required("Password"));
    }
}
