use thiserror::Error;

/// Errors surfaced by calls to the asset registry API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Sesión no iniciada")]
    NotAuthenticated,

    #[error("Sesión expirada, inicie sesión nuevamente")]
    Unauthorized,

    #[error("Registro no encontrado")]
    NotFound,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Error de red: {0}")]
    Network(String),

    #[error("Respuesta inválida: {0}")]
    Decode(String),

    #[error("No se pudo serializar la solicitud: {0}")]
    Encode(String),

    #[error("{0}")]
    Validation(String),

    #[error("Error del navegador: {0}")]
    Browser(String),
}

impl ApiError {
    /// Map a non-success HTTP status (and whatever body came with it).
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Http {
                status,
                message: server_message(body).unwrap_or_else(|| "sin detalle".to_string()),
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// The registry API reports failures as `{"message": "..."}` or `{"error": "..."}`;
/// anything else is passed through trimmed.
fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for key in ["message", "error", "detail"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return Some(text.to_string());
            }
        }
    }
    Some(trimmed.chars().take(200).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_auth_and_missing_statuses() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404, "whatever"), ApiError::NotFound);
        assert!(ApiError::from_status(401, "").is_unauthorized());
    }

    #[test]
    fn extracts_server_message() {
        let err = ApiError::from_status(409, r#"{"message":"El código ya existe"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 409,
                message: "El código ya existe".to_string()
            }
        );
        assert_eq!(err.to_string(), "HTTP 409: El código ya existe");
    }

    #[test]
    fn plain_body_and_empty_body() {
        let err = ApiError::from_status(500, "  boom  ");
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: "boom".to_string()
            }
        );
        let err = ApiError::from_status(502, "");
        assert!(matches!(err, ApiError::Http { message, .. } if message == "sin detalle"));
    }
}
