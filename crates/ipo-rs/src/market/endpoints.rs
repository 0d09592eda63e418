//! Market module endpoints.

use crate::client::IpoClient;
use crate::errors::IpoError;
use crate::market::models::{HealthResponse, MarketIndex};


const GET_MARKET_INDICES: &str = "/market-indices";
const GET_HEALTH: &str = "/";

impl IpoClient {
    /// Retrieves the market index ticker.
    ///
    /// **Endpoint:** `GET /market-indices`
    ///
    /// An empty list is a valid answer (the backend has not scraped yet).
    pub async fn get_market_indices(&self) -> Result<Vec<MarketIndex>, IpoError> {
        self.get_json(GET_MARKET_INDICES).await
    }


    /// Service liveness check.
    ///
    /// **Endpoint:** `GET /`
    pub async fn get_health(&self) -> Result<HealthResponse, IpoError> {
        self.get_json(GET_HEALTH).await
    }
}
