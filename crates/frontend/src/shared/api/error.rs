use thiserror::Error;

/// Failure of a request to the REST API.
///
/// All variants are treated the same by the UI: the message is shown once
/// as an error notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("No se pudo preparar la solicitud: {0}")]
    Encode(String),

    #[error("Respuesta inesperada del servidor: {0}")]
    Decode(String),

    #[error("Sesión no iniciada")]
    NoSession,
}

impl ApiError {
    /// Build a status error, preferring the server supplied `message`.
    ///
    /// The API answers errors as `{"message": "..."}` or
    /// `{"message": ["...", "..."]}`; anything else falls back to a generic
    /// status text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| match json.get("message") {
                Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
                Some(serde_json::Value::Array(items)) => {
                    let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                    (!parts.is_empty()).then(|| parts.join(", "))
                }
                _ => None,
            })
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }

    /// Text shown to the user in a notification
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
