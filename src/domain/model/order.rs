// Domain model for orders
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::enums::{OrderSide, OrderType, TimeInForce};
use crate::domain::errors::OrderError;

/// A single order intent, built from CLI input and discarded once the
/// outcome has been logged.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
    pub time_in_force: Option<TimeInForce>,
}

impl OrderRequest {
    pub fn market(symbol: &str, side: OrderSide, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.trim().to_uppercase(),
            side,
            order_type: OrderType::Market,
            quantity,
            price: None,
            stop_price: None,
            time_in_force: None,
        }
    }

    pub fn limit(
        symbol: &str,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
        time_in_force: Option<TimeInForce>,
    ) -> Self {
        Self {
            symbol: symbol.trim().to_uppercase(),
            side,
            order_type: OrderType::Limit,
            quantity,
            price: Some(price),
            stop_price: None,
            time_in_force,
        }
    }

    pub fn stop_limit(
        symbol: &str,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
        time_in_force: Option<TimeInForce>,
    ) -> Self {
        Self {
            symbol: symbol.trim().to_uppercase(),
            side,
            order_type: OrderType::StopLimit,
            quantity,
            price: Some(price),
            stop_price: Some(stop_price),
            time_in_force,
        }
    }

    /// Checks the per-type field rules. Runs before anything is sent.
    pub fn validate(&self) -> Result<(), OrderError> {
        validate_symbol(&self.symbol)?;

        ensure_positive("Quantity", self.quantity)?;

        match (self.order_type.requires_price(), self.price) {
            (true, Some(price)) => ensure_positive("Price", price)?,
            (true, None) => {
                return Err(OrderError::Validation(format!(
                    "Price is required for {} orders.",
                    self.order_type.as_str()
                )))
            }
            (false, Some(_)) => {
                return Err(OrderError::Validation(format!(
                    "Price is not accepted for {} orders.",
                    self.order_type.as_str()
                )))
            }
            (false, None) => {}
        }

        match (self.order_type.requires_stop_price(), self.stop_price) {
            (true, Some(stop_price)) => ensure_positive("Stop price", stop_price)?,
            (true, None) => {
                return Err(OrderError::Validation(format!(
                    "Stop price is required for {} orders.",
                    self.order_type.as_str()
                )))
            }
            (false, Some(_)) => {
                return Err(OrderError::Validation(format!(
                    "Stop price is not accepted for {} orders.",
                    self.order_type.as_str()
                )))
            }
            (false, None) => {}
        }

        Ok(())
    }

    /// Translates the request into the order endpoint's parameters.
    ///
    /// MARKET carries neither prices nor time-in-force. LIMIT and STOP_LIMIT
    /// fall back to GTC when no time-in-force was chosen, and STOP_LIMIT goes
    /// out as the venue's `STOP` type with both prices attached.
    pub fn to_venue_params(&self) -> VenueOrderParams {
        let mut params = VenueOrderParams::default();
        params.push("symbol", self.symbol.clone());
        params.push("side", self.side.as_str().to_string());
        params.push("type", self.order_type.venue_type().to_string());
        params.push("quantity", format_decimal(self.quantity));

        if self.order_type.requires_price() {
            if let Some(price) = self.price {
                params.push("price", format_decimal(price));
            }
        }
        if self.order_type.requires_stop_price() {
            if let Some(stop_price) = self.stop_price {
                params.push("stopPrice", format_decimal(stop_price));
            }
        }
        if self.order_type.uses_time_in_force() {
            let tif = self.time_in_force.unwrap_or_default();
            params.push("timeInForce", tif.as_str().to_string());
        }

        params
    }
}

/// Order fields exactly as typed at the prompt, before numeric coercion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderDraft {
    pub order_type: Option<OrderType>,
    pub symbol: String,
    pub side: String,
    pub quantity: String,
    pub price: Option<String>,
    pub stop_price: Option<String>,
    pub time_in_force: Option<String>,
}

impl OrderDraft {
    pub fn new(order_type: OrderType) -> Self {
        Self {
            order_type: Some(order_type),
            ..Default::default()
        }
    }

    /// Converts the text fields into a validated `OrderRequest`
    pub fn coerce(&self) -> Result<OrderRequest, OrderError> {
        let order_type = self
            .order_type
            .ok_or_else(|| OrderError::Validation("Order type is missing.".to_string()))?;
        let side = OrderSide::from_str(&self.side)?;
        let quantity = parse_decimal("Quantity", &self.quantity)?;
        let price = self
            .price
            .as_deref()
            .map(|text| parse_decimal("Price", text))
            .transpose()?;
        let stop_price = self
            .stop_price
            .as_deref()
            .map(|text| parse_decimal("Stop price", text))
            .transpose()?;
        let time_in_force = match self.time_in_force.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(TimeInForce::parse(text).ok_or_else(|| {
                OrderError::Validation(format!(
                    "Invalid time in force '{}'. Expected GTC, IOC or FOK.",
                    text
                ))
            })?),
        };

        let request = OrderRequest {
            symbol: self.symbol.trim().to_uppercase(),
            side,
            order_type,
            quantity,
            price,
            stop_price,
            time_in_force,
        };
        request.validate()?;
        Ok(request)
    }
}

/// Ordered key/value pairs for the order endpoint's query string
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VenueOrderParams {
    pairs: Vec<(&'static str, String)>,
}

impl VenueOrderParams {
    pub fn push(&mut self, key: &'static str, value: String) {
        self.pairs.push((key, value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Symbols are non-empty ASCII alphanumerics such as `BTCUSDT`.
pub fn validate_symbol(symbol: &str) -> Result<(), OrderError> {
    if symbol.is_empty() {
        return Err(OrderError::Validation("Symbol cannot be empty.".to_string()));
    }
    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(OrderError::Validation(format!(
            "Invalid symbol '{}'. Use letters and digits only (e.g., BTCUSDT).",
            symbol
        )));
    }
    Ok(())
}

/// Parses a decimal typed by the user. Accepts plain and scientific notation.
pub fn parse_decimal(field: &str, text: &str) -> Result<Decimal, OrderError> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| {
            OrderError::Validation(format!(
                "Invalid {} '{}'. Please enter a valid number.",
                field.to_lowercase(),
                text
            ))
        })
}

/// Same as `parse_decimal` but also rejects zero and negative values.
pub fn parse_positive_decimal(field: &str, text: &str) -> Result<Decimal, OrderError> {
    let value = parse_decimal(field, text)?;
    ensure_positive(field, value)?;
    Ok(value)
}

fn ensure_positive(field: &str, value: Decimal) -> Result<(), OrderError> {
    if value <= Decimal::ZERO {
        return Err(OrderError::Validation(format!(
            "{} must be greater than 0 (got {}).",
            field, value
        )));
    }
    Ok(())
}

fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}
