use derive_more::Display;

/// Root error type of the adviser
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(ValidationError),
    #[display(fmt = "Signal Error: {}", _0)]
    Signal(SignalError),
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Validation(error)
    }
}

impl From<SignalError> for AppError {
    fn from(error: SignalError) -> Self {
        AppError::Signal(error)
    }
}

/// Rejected domain input
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display(fmt = "hour {} is outside 0-23", _0)]
    HourOutOfRange(u32),
    #[display(fmt = "invalid currency pair: {}", _0)]
    InvalidPair(String),
    #[display(fmt = "session name cannot be empty")]
    EmptySessionName,
    #[display(fmt = "timestamp must be a finite number of milliseconds")]
    NonFiniteTimestamp,
}

impl std::error::Error for ValidationError {}

/// Failure at the analysis-service boundary.
///
/// `Display` yields the user-facing message; the technical detail carried by
/// some variants is meant for logs only.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SignalError {
    #[display(fmt = "CRITICAL: Secure API Key missing from environment.")]
    MissingCredential,
    #[display(fmt = "Quota Exceeded: Backend throttling active.")]
    QuotaExceeded,
    #[display(fmt = "Permission Denied: Invalid Secure Token.")]
    PermissionDenied,
    #[display(fmt = "Gateway Timeout: Network connectivity unstable.")]
    Network(String),
    #[display(fmt = "Malformed Response: Backend returned an unreadable payload.")]
    MalformedResponse(String),
    #[display(fmt = "Unexpected Internal Server Error.")]
    Unexpected(String),
}

impl SignalError {
    /// Map a non-success HTTP status onto the error taxonomy.
    pub fn from_status(status: u16, detail: &str) -> Self {
        match status {
            429 => SignalError::QuotaExceeded,
            401 | 403 => SignalError::PermissionDenied,
            _ => SignalError::Unexpected(format!("HTTP {}: {}", status, detail)),
        }
    }

    /// Technical detail for logging, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            SignalError::Network(d) | SignalError::MalformedResponse(d) | SignalError::Unexpected(d) => {
                Some(d.as_str())
            }
            _ => None,
        }
    }

    /// Short category label shown next to the message.
    pub fn category(&self) -> &'static str {
        match self {
            SignalError::MissingCredential => "configuration",
            SignalError::QuotaExceeded => "quota",
            SignalError::PermissionDenied => "permission",
            SignalError::Network(_) => "network",
            SignalError::MalformedResponse(_) => "response",
            SignalError::Unexpected(_) => "internal",
        }
    }
}

impl std::error::Error for SignalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_categories() {
        assert_eq!(SignalError::from_status(429, ""), SignalError::QuotaExceeded);
        assert_eq!(SignalError::from_status(403, ""), SignalError::PermissionDenied);
        assert_eq!(SignalError::from_status(401, ""), SignalError::PermissionDenied);
        assert!(matches!(SignalError::from_status(500, "boom"), SignalError::Unexpected(_)));
    }

    #[test]
    fn messages_are_distinct() {
        let errors = [
            SignalError::MissingCredential,
            SignalError::QuotaExceeded,
            SignalError::PermissionDenied,
            SignalError::Network("offline".into()),
            SignalError::MalformedResponse("empty".into()),
            SignalError::Unexpected("500".into()),
        ];
        let mut messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), errors.len());
    }

    #[test]
    fn app_error_prefixes_layer() {
        let err: AppError = ValidationError::HourOutOfRange(24).into();
        assert_eq!(err.to_string(), "Validation Error: hour 24 is outside 0-23");
        let err: AppError = SignalError::QuotaExceeded.into();
        assert_eq!(err.to_string(), "Signal Error: Quota Exceeded: Backend throttling active.");
    }

    #[test]
    fn detail_is_kept_out_of_display() {
        let err = SignalError::Network("TypeError: Failed to fetch".into());
        assert!(!err.to_string().contains("TypeError"));
        assert_eq!(err.detail(), Some("TypeError: Failed to fetch"));
    }
}
