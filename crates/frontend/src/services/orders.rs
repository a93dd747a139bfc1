//! Snow-shoveling order service.

use cabin_http::error::ClientError;
use cabin_http::types::{CreateOrderRequest, SnowShovelingOrder};
use chrono::{DateTime, Utc};

use crate::client::create_authenticated_client;

#[derive(Clone)]
pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch the resident's upcoming orders.
    pub async fn list(&self) -> Result<Vec<SnowShovelingOrder>, ClientError> {
        let client = create_authenticated_client()?
            .ok_or_else(|| ClientError::Configuration("Not authenticated".into()))?;
        client.list_orders().await
    }

    /// Schedule a shoveling order for the given date.
    pub async fn create(
        &self,
        date: DateTime<Utc>,
        note: Option<String>,
    ) -> Result<SnowShovelingOrder, ClientError> {
        let client = create_authenticated_client()?
            .ok_or_else(|| ClientError::Configuration("Not authenticated".into()))?;
        client
            .create_order(&CreateOrderRequest { date, note })
            .await
    }

    /// Cancel an order.
    pub async fn cancel(&self, id: i64) -> Result<(), ClientError> {
        let client = create_authenticated_client()?
            .ok_or_else(|| ClientError::Configuration("Not authenticated".into()))?;
        client.delete_order(id).await
    }
}
