use thiserror::Error;

/// Everything that can go wrong between reading credentials and getting an
/// order acknowledged by the venue.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Credentials or client settings are missing or unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Local input check failed; nothing was sent to the venue.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The venue answered and refused the order.
    #[error("Binance API error: code {code}, message: {message}")]
    RemoteRejection { code: i64, message: String },

    /// The venue could not be reached or its answer could not be read.
    #[error("Request error: {0}")]
    Transport(String),
}

impl OrderError {
    /// Short label used when logging the outcome of a submission
    pub fn kind(&self) -> &'static str {
        match self {
            OrderError::Configuration(_) => "ConfigurationError",
            OrderError::Validation(_) => "ValidationError",
            OrderError::RemoteRejection { .. } => "RemoteRejection",
            OrderError::Transport(_) => "TransportFailure",
        }
    }

    /// Operator advice for rejections we recognise.
    pub fn action_hint(&self) -> Option<&'static str> {
        match self {
            OrderError::RemoteRejection { message, .. } => {
                let message = message.to_lowercase();
                if message.contains("margin is insufficient") {
                    Some("Insufficient margin. Please deposit funds or reduce order size.")
                } else if message.contains("filter_price")
                    || message.contains("filter_lot_size")
                    || message.contains("filter failure")
                {
                    Some("Price or quantity not adhering to symbol's trading rules (e.g., step size, min/max).")
                } else {
                    None
                }
            }
            OrderError::Transport(_) => {
                Some("Network issue or invalid response. Check your internet connection or parameters.")
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OrderError {
    fn from(err: reqwest::Error) -> Self {
        OrderError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for OrderError {
    fn from(err: serde_json::Error) -> Self {
        OrderError::Transport(format!("Malformed response: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_hint() {
        let err = OrderError::RemoteRejection {
            code: -2019,
            message: "Margin is insufficient.".to_string(),
        };
        assert_eq!(err.kind(), "RemoteRejection");
        assert!(err.action_hint().unwrap().starts_with("Insufficient margin"));
    }

    #[test]
    fn test_filter_hint_matches_case_insensitively() {
        let err = OrderError::RemoteRejection {
            code: -1013,
            message: "Filter failure: LOT_SIZE".to_string(),
        };
        assert!(err.action_hint().unwrap().contains("trading rules"));

        let err = OrderError::RemoteRejection {
            code: -1111,
            message: "FILTER_PRICE violated".to_string(),
        };
        assert!(err.action_hint().unwrap().contains("trading rules"));

        let err = OrderError::RemoteRejection {
            code: -1121,
            message: "Invalid symbol.".to_string(),
        };
        assert!(err.action_hint().is_none());
    }

    #[test]
    fn test_display_carries_code_and_message() {
        let err = OrderError::RemoteRejection {
            code: -4003,
            message: "Quantity less than or equal to zero.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Binance API error: code -4003, message: Quantity less than or equal to zero."
        );
    }

    #[test]
    fn test_validation_has_no_hint() {
        let err = OrderError::Validation("bad".to_string());
        assert_eq!(err.kind(), "ValidationError");
        assert!(err.action_hint().is_none());
    }
}
