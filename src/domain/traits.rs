use async_trait::async_trait;

use crate::domain::errors::OrderError;
use crate::domain::model::order::VenueOrderParams;
use crate::domain::model::order_result::OrderResult;

/// Anything that can place one order on the venue.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait OrderGateway {
    async fn place_order(&self, params: &VenueOrderParams) -> Result<OrderResult, OrderError>;
}
