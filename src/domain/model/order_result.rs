use serde_json::Value;

/// Raw acknowledgement returned by the order endpoint.
///
/// The payload is kept exactly as the venue sent it; the accessors only read
/// well-known fields for display.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderResult {
    raw: Value,
}

impl OrderResult {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn order_id(&self) -> Option<String> {
        self.field("orderId")
    }

    pub fn client_order_id(&self) -> Option<String> {
        self.field("clientOrderId")
    }

    pub fn status(&self) -> Option<String> {
        self.field("status")
    }

    pub fn executed_qty(&self) -> Option<String> {
        self.field("executedQty")
    }

    pub fn cum_quote(&self) -> Option<String> {
        self.field("cumQuote")
    }

    // Numbers and strings both render; anything else counts as absent
    fn field(&self, key: &str) -> Option<String> {
        match self.raw.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Human-readable summary lines printed after a successful submission
    pub fn summary_lines(&self) -> Vec<String> {
        let or_na = |v: Option<String>| v.unwrap_or_else(|| "N/A".to_string());
        vec![
            format!("Order ID: {}", or_na(self.order_id())),
            format!("Client Order ID: {}", or_na(self.client_order_id())),
            format!("Status: {}", or_na(self.status())),
            format!("Executed Quantity: {}", or_na(self.executed_qty())),
            format!("Cum Quote Quantity: {}", or_na(self.cum_quote())),
        ]
    }
}
