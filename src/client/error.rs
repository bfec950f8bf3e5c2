use thiserror::Error;

/// Failure of a backend call, as seen at the mutation boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("server rejected the request ({code})")]
    Status { code: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The transient notification text shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Status { code, .. } => format!("The server rejected the request ({code})."),
            ApiError::Network(_) => "Could not reach the server.".to_string(),
            ApiError::Decode(_) => "Received an unexpected response.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        let err = ApiError::Status {
            code: 403,
            message: "The user doesn't have enough privileges".to_string(),
        };
        assert_eq!(err.user_message(), "The user doesn't have enough privileges");

        let err = ApiError::Status {
            code: 500,
            message: String::new(),
        };
        assert_eq!(err.user_message(), "The server rejected the request (500).");

        let err = ApiError::Network("fetch failed".to_string());
        assert_eq!(err.user_message(), "Could not reach the server.");
    }
}
