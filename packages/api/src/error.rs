use thiserror::Error;

/// Failure of a call to the NotesShare API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection reset...).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{}", .message.as_deref().unwrap_or("Request failed"))]
    Server { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The server's own message if it sent one, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_or_prefers_server_message() {
        let err = ApiError::Server {
            status: 400,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(err.message_or("Registration failed"), "Email already registered");
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_message_or_falls_back() {
        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.message_or("Upload failed"), "Upload failed");

        let err = ApiError::Server {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(err.message_or("Upload failed"), "Upload failed");

        let err = ApiError::from(serde_json::from_str::<u32>("x").unwrap_err());
        assert_eq!(err.message_or("Login failed"), "Login failed");
        assert!(err.status().is_none());
    }
}
