//! Typed response shapes for each backend endpoint, validated at the
//! boundary instead of duck-typing the JSON.

use serde::{Deserialize, Serialize};

fn default_role() -> String {
    "user".to_string()
}

/// `POST /login` success body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default = "default_role")]
    pub role: String,
}

/// `POST /colorchecks/request` success body.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestAccepted {
    pub id: i64,
}

/// Error body shared by all endpoints: `{"error": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// One row of `GET /users` (admin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub api_token: Option<String>,
}

/// `POST /users` success body (admin only).
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreated {
    pub username: String,
    pub api_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_defaults_role() {
        let r: LoginResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(r.role, "user");

        let r: LoginResponse =
            serde_json::from_str(r#"{"token":"abc123","role":"admin"}"#).unwrap();
        assert_eq!(r.role, "admin");
    }

    #[test]
    fn error_body_tolerates_missing_field() {
        let e: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(e.error.is_none());

        let e: ApiErrorBody = serde_json::from_str(r#"{"error":"invalid pantone"}"#).unwrap();
        assert_eq!(e.error.as_deref(), Some("invalid pantone"));
    }
}
