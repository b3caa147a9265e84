use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::api_error::ApiError;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Signed-in user as kept in browser storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: EntityId,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .map(|r| r.eq_ignore_ascii_case("admin") || r.eq_ignore_ascii_case("administrador"))
            .unwrap_or(false)
    }

    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.username.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<EntityId>,
}

impl RegisterRequest {
    pub fn validate(&self, password_confirmation: &str) -> Result<(), ApiError> {
        if self.username.trim().is_empty() || self.full_name.trim().is_empty() {
            return Err(ApiError::Validation("Usuario y nombre son obligatorios".into()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::Validation(format!(
                "La contraseña debe tener al menos {} caracteres",
                MIN_PASSWORD_LEN
            )));
        }
        if self.password != password_confirmation {
            return Err(ApiError::Validation("Las contraseñas no coinciden".into()));
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(ApiError::Validation("Correo electrónico inválido".into()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            username: "mperez".into(),
            password: "secreto1".into(),
            full_name: "María Pérez".into(),
            email: Some("mperez@example.org".into()),
            role_id: None,
        }
    }

    #[test]
    fn register_validation() {
        assert!(request().validate("secreto1").is_ok());
        assert!(request().validate("otra").is_err());

        let mut short = request();
        short.password = "abc".into();
        assert!(short.validate("abc").is_err());

        let mut bad_mail = request();
        bad_mail.email = Some("nomail".into());
        assert!(bad_mail.validate("secreto1").is_err());
    }

    #[test]
    fn admin_role_detection() {
        let mut user = UserInfo {
            id: 1,
            username: "admin".into(),
            full_name: None,
            role: Some("Administrador".into()),
        };
        assert!(user.is_admin());
        assert_eq!(user.display_name(), "admin");
        user.role = Some("consulta".into());
        assert!(!user.is_admin());
    }

    #[test]
    fn login_response_decodes() {
        let json = r#"{"token":"abc","user":{"id":2,"username":"jr"}}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.user.role, None);
        assert_eq!(resp.token, "abc");
    }
}
