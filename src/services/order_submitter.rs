use log::{debug, error, info, warn};

use crate::domain::errors::OrderError;
use crate::domain::model::order::{OrderDraft, OrderRequest};
use crate::domain::model::order_result::OrderResult;
use crate::domain::traits::OrderGateway;

/// Sends one order at a time through an `OrderGateway` and logs what happened.
pub struct OrderSubmitter<G> {
    gateway: G,
}

impl<G: OrderGateway> OrderSubmitter<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Coerces the typed text into an `OrderRequest` and submits it.
    /// Coercion failures never reach the gateway.
    pub async fn submit_draft(&self, draft: &OrderDraft) -> Result<OrderResult, OrderError> {
        let order = match draft.coerce() {
            Ok(order) => order,
            Err(e) => {
                warn!("{}", e);
                return Err(e);
            }
        };
        self.submit(&order).await
    }

    /// Validates `order`, then issues exactly one gateway call.
    pub async fn submit(&self, order: &OrderRequest) -> Result<OrderResult, OrderError> {
        let order_type = order.order_type.as_str();
        let symbol = order.symbol.as_str();
        let side = order.side.as_str();

        if let Err(e) = order.validate() {
            warn!("Rejected {} order for {} ({}) locally: {}", order_type, symbol, side, e);
            return Err(e);
        }

        let params = order.to_venue_params();
        info!("Attempting to place a {} order for {} ({})...", order_type, symbol, side);
        debug!("Request parameters: {:?}", params);

        match self.gateway.place_order(&params).await {
            Ok(result) => {
                info!(
                    "Order placed successfully! Type: {}, Symbol: {}, Side: {}",
                    order_type, symbol, side
                );
                info!("API Response: {}", result.raw());
                Ok(result)
            }
            Err(e) => {
                error!(
                    "{} for {} order ({}, {}): {}",
                    e.kind(),
                    order_type,
                    symbol,
                    side,
                    e
                );
                if let Some(hint) = e.action_hint() {
                    error!("  Action Required: {}", hint);
                }
                Err(e)
            }
        }
    }
}
