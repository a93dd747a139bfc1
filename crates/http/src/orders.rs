//! Snow-shoveling order endpoints (authenticated).

use reqwest::Method;

use crate::client::AuthenticatedCabinClient;
use crate::error::ClientError;
use crate::types::{CreateOrderRequest, SnowShovelingOrder};

impl AuthenticatedCabinClient {
    /// `GET /snow_shoveling/orders/`.
    pub async fn list_orders(&self) -> Result<Vec<SnowShovelingOrder>, ClientError> {
        let request = self.request(Method::GET, "/snow_shoveling/orders/");
        self.execute(request).await
    }

    /// `POST /order/snow_shoveling/`.
    pub async fn create_order(
        &self,
        order: &CreateOrderRequest,
    ) -> Result<SnowShovelingOrder, ClientError> {
        let request = self.request(Method::POST, "/order/snow_shoveling/").json(order);
        self.execute(request).await
    }

    /// `DELETE /snow_shoveling/order/delete/{id}/`.
    pub async fn delete_order(&self, id: i64) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/snow_shoveling/order/delete/{id}/"));
        self.execute_empty(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn list_orders_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/snow_shoveling/orders/"))
            .and(header("authorization", "Bearer A1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 3,
                    "date": "2025-01-04T10:00:00Z",
                    "note": "by the front door",
                    "person_ordered": 7,
                    "cabin_number": 12
                }
            ])))
            .mount(&server)
            .await;

        let client = AuthenticatedCabinClient::new(server.uri(), "A1").unwrap();
        let orders = client.list_orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].note.as_deref(), Some("by the front door"));
    }

    #[tokio::test]
    async fn delete_order_accepts_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/snow_shoveling/order/delete/3/"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = AuthenticatedCabinClient::new(server.uri(), "A1").unwrap();
        client.delete_order(3).await.unwrap();
    }

    #[tokio::test]
    async fn expired_token_maps_to_authentication_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/snow_shoveling/orders/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "detail": "Given token not valid for any token type"
            })))
            .mount(&server)
            .await;

        let client = AuthenticatedCabinClient::new(server.uri(), "stale").unwrap();
        let err = client.list_orders().await.unwrap_err();
        assert!(err.is_auth_expired());
    }
}
