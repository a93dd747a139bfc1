//! Typed HTTP client for the CabinConnect backend API.
//!
//! Two client types split the API surface by authentication requirement:
//! [`PublicCabinClient`] for token issuance and resident onboarding,
//! [`AuthenticatedCabinClient`] for the snow-shoveling endpoints that need a
//! bearer token. [`HttpTokenRefresher`] implements the cabin-core refresher
//! seam over `POST /token/refresh/`.

pub mod auth;
pub mod client;
pub mod error;
pub mod orders;
pub mod types;

pub use auth::HttpTokenRefresher;
pub use client::{AuthenticatedCabinClient, CabinClientBuilder, PublicCabinClient};
pub use error::ClientError;
