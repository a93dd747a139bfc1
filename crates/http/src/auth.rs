//! Token and resident-onboarding endpoints, plus the HTTP refresher.

use async_trait::async_trait;
use reqwest::Method;

use cabin_core::{AuthError, TokenGrant, TokenRefresher};

use crate::client::PublicCabinClient;
use crate::error::ClientError;
use crate::types::{
    ApiMessage, RefreshRequest, RegisterRequest, TokenRequest, TokenResponse, VerifyRequest,
};

impl PublicCabinClient {
    /// `POST /token/` with username and password.
    pub async fn obtain_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, ClientError> {
        let request = self.request(Method::POST, "/token/").json(&TokenRequest {
            username: username.to_string(),
            password: password.to_string(),
        });
        self.execute(request).await
    }

    /// `POST /token/refresh/` with the current refresh token.
    pub async fn refresh_token(&self, refresh: &str) -> Result<TokenResponse, ClientError> {
        let request = self
            .request(Method::POST, "/token/refresh/")
            .json(&RefreshRequest {
                refresh: refresh.to_string(),
            });
        self.execute(request).await
    }

    /// `POST /resident/register/`.
    pub async fn register_resident(
        &self,
        registration: &RegisterRequest,
    ) -> Result<ApiMessage, ClientError> {
        let request = self
            .request(Method::POST, "/resident/register/")
            .json(registration);
        self.execute(request).await
    }

    /// `POST /resident/verify/{email}/` with the six-digit code.
    pub async fn verify_resident(
        &self,
        email: &str,
        code: &str,
    ) -> Result<ApiMessage, ClientError> {
        let request = self
            .request(Method::POST, &format!("/resident/verify/{email}/"))
            .json(&VerifyRequest {
                code: code.to_string(),
                email: email.to_string(),
            });
        self.execute(request).await
    }

    /// `POST /resident/resend/code/{email}/`.
    pub async fn resend_verification_code(&self, email: &str) -> Result<ApiMessage, ClientError> {
        let request = self.request(Method::POST, &format!("/resident/resend/code/{email}/"));
        self.execute(request).await
    }
}

/// Refreshes tokens over `POST /token/refresh/`.
pub struct HttpTokenRefresher {
    client: PublicCabinClient,
}

impl HttpTokenRefresher {
    pub fn new(client: PublicCabinClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl TokenRefresher for HttpTokenRefresher {
    async fn refresh(&self, refresh_token: &str) -> Result<TokenGrant, AuthError> {
        let response = self
            .client
            .refresh_token(refresh_token)
            .await
            .map_err(auth_error)?;
        Ok(TokenGrant {
            access_token: response.access,
            refresh_token: response.refresh,
            access_lifetime_secs: response.token_expiration,
            refresh_lifetime_secs: response.token_refresh_expiration,
        })
    }
}

fn auth_error(err: ClientError) -> AuthError {
    match err {
        ClientError::Request(e) if e.is_decode() => AuthError::MalformedResponse(e.to_string()),
        ClientError::Request(e) => AuthError::RefreshTransport(e.to_string()),
        ClientError::AuthenticationFailed(message) => AuthError::RefreshRejected {
            status: 401,
            message,
        },
        ClientError::Forbidden(message) => AuthError::RefreshRejected {
            status: 403,
            message,
        },
        ClientError::BadRequest(message) => AuthError::RefreshRejected {
            status: 400,
            message,
        },
        ClientError::NotFound(message) => AuthError::RefreshRejected {
            status: 404,
            message,
        },
        ClientError::ServerError { status, message } => {
            AuthError::RefreshRejected { status, message }
        }
        ClientError::Serialization(e) => AuthError::MalformedResponse(e.to_string()),
        ClientError::Configuration(message) => AuthError::RefreshTransport(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn refresher(server: &MockServer) -> HttpTokenRefresher {
        HttpTokenRefresher::new(PublicCabinClient::new(server.uri()).unwrap())
    }

    #[tokio::test]
    async fn refresh_parses_string_lifetimes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token/refresh/"))
            .and(body_json(json!({"refresh": "R1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access": "A2",
                "refresh": "R2",
                "token_expiration": "900",
                "token_refresh_expiration": "604800"
            })))
            .mount(&server)
            .await;

        let grant = refresher(&server).await.refresh("R1").await.unwrap();
        assert_eq!(grant.access_token, "A2");
        assert_eq!(grant.refresh_token, "R2");
        assert_eq!(grant.access_lifetime_secs, 900.0);
        assert_eq!(grant.refresh_lifetime_secs, 604_800.0);
    }

    #[tokio::test]
    async fn rejected_refresh_maps_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token/refresh/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "detail": "Token is invalid or expired"
            })))
            .mount(&server)
            .await;

        let err = refresher(&server).await.refresh("stale").await.unwrap_err();
        match err {
            AuthError::RefreshRejected { status, .. } => assert_eq!(status, 401),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_maps_to_malformed_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token/refresh/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = refresher(&server).await.refresh("R1").await.unwrap_err();
        assert!(matches!(err, AuthError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_maps_to_transport() {
        // Port from a server that has already shut down. An exclusive
        // (non-pooled) server is required so drop actually frees the port.
        let server = MockServer::builder().start().await;
        let uri = server.uri();
        drop(server);

        let refresher = HttpTokenRefresher::new(PublicCabinClient::new(uri).unwrap());
        let err = refresher.refresh("R1").await.unwrap_err();
        assert!(matches!(err, AuthError::RefreshTransport(_)));
    }
}
