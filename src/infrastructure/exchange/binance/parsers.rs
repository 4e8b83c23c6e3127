use serde::Deserialize;
use serde_json::Value;

use crate::domain::errors::OrderError;
use crate::domain::model::order_result::OrderResult;

/// Error body the venue sends with non-2xx answers
#[derive(Debug, Deserialize)]
pub struct BinanceErrorResponse {
    pub code: i64,
    pub msg: String,
}

/// Turns HTTP answers from the venue into domain results
pub struct BinanceParser;

impl BinanceParser {
    /// Classifies an order-endpoint answer.
    ///
    /// 2xx with a JSON body is a success and is passed through untouched.
    /// Anything else is a rejection when the body carries `{code, msg}`, and a
    /// transport failure otherwise.
    pub fn parse_order_response(status: u16, body: &str) -> Result<OrderResult, OrderError> {
        if (200..300).contains(&status) {
            let raw: Value = serde_json::from_str(body)?;
            return Ok(OrderResult::new(raw));
        }

        match serde_json::from_str::<BinanceErrorResponse>(body) {
            Ok(err) => Err(OrderError::RemoteRejection {
                code: err.code,
                message: err.msg,
            }),
            Err(_) => Err(OrderError::Transport(format!(
                "HTTP {} with unreadable body: {}",
                status,
                body.trim()
            ))),
        }
    }
}
