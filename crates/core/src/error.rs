use thiserror::Error;

/// Failures of the token refresh flow.
///
/// `SessionManager::is_authenticated` collapses all of these to `false`; the
/// variants are kept distinct so embedders that call `refresh` directly can
/// tell a rejected token apart from an unreachable endpoint.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The refresh endpoint answered with a non-success status.
    #[error("token refresh rejected with status {status}: {message}")]
    RefreshRejected { status: u16, message: String },

    /// The refresh endpoint could not be reached.
    #[error("token refresh transport error: {0}")]
    RefreshTransport(String),

    /// The refresh endpoint answered with a body we could not interpret.
    #[error("malformed token response: {0}")]
    MalformedResponse(String),

    /// No session is present in the store.
    #[error("no stored session")]
    NoSession,

    /// The refresh token itself has expired; a refresh cannot succeed.
    #[error("refresh token expired")]
    SessionExpired,
}
