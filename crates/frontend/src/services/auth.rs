//! Login, registration, and verification flows.

use cabin_core::TokenIssue;
use cabin_http::error::{flatten_field_errors, ClientError};
use cabin_http::types::{ApiMessage, RegisterRequest};

use crate::client::create_public_client;
use crate::session;

#[derive(Clone)]
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    /// Log in and persist the issued session.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let client = create_public_client()?;
        let response = client.obtain_token(username, password).await?;

        session::login(TokenIssue {
            access_token: response.access,
            refresh_token: response.refresh,
            user_id: response.id.unwrap_or_default(),
            access_lifetime_secs: response.token_expiration,
            refresh_lifetime_secs: response.token_refresh_expiration,
        });
        Ok(())
    }

    /// Register a new resident. Verification happens in a separate step.
    pub async fn register(&self, registration: &RegisterRequest) -> Result<ApiMessage, ClientError> {
        let client = create_public_client()?;
        client.register_resident(registration).await
    }

    /// Submit the six-digit verification code.
    pub async fn verify(&self, email: &str, code: &str) -> Result<ApiMessage, ClientError> {
        let client = create_public_client()?;
        client.verify_resident(email, code).await
    }

    /// Ask the backend to send a new verification code.
    pub async fn resend_code(&self, email: &str) -> Result<ApiMessage, ClientError> {
        let client = create_public_client()?;
        client.resend_verification_code(email).await
    }
}

/// Turn a client error into lines suitable for inline form display.
///
/// Field-validation bodies become one `field: message` line each; everything
/// else becomes a single generic line.
pub fn form_error_lines(err: &ClientError) -> Vec<String> {
    let body = match err {
        ClientError::BadRequest(body)
        | ClientError::AuthenticationFailed(body)
        | ClientError::Forbidden(body)
        | ClientError::NotFound(body) => body,
        other => return vec![other.to_string()],
    };

    match serde_json::from_str(body) {
        Ok(json) => {
            let lines = flatten_field_errors(&json);
            if lines.is_empty() {
                vec![body.clone()]
            } else {
                lines
            }
        }
        Err(_) => vec![body.clone()],
    }
}
