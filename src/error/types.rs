/**
 * API Error Types
 *
 * This module defines the error taxonomy for the service. Every failure a
 * request can hit maps onto one of these variants, and each variant knows
 * its HTTP status code and client-facing message.
 *
 * # Error Categories
 *
 * ## Authentication errors (401)
 *
 * Missing or undecodable credentials and tokens:
 * - `TokenRequired` / `InvalidToken` on protected routes
 * - `CredentialsRequired` / `InvalidCredentials` on the exchange route
 *
 * ## Validation errors (422)
 *
 * Rejected request payloads and mutations aimed at records that do not
 * exist (or are owned by another user, which is reported identically).
 *
 * ## Read misses (404)
 *
 * `ListNotFound` carries its status so that read paths report 404 while
 * mutations aimed at the same missing list report 422.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Request-level error type
///
/// Each variant maps to an HTTP status code via [`ApiError::status_code`]
/// and to a human-readable message via `Display`. The `ListNotFound` and
/// `ItemNotFound` variants carry their status because the same miss is a
/// 404 on a read and a 422 behind a mutation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Protected route called without an Authorization header
    #[error("Token required")]
    TokenRequired,

    /// Token header present but undecodable, or resolving to no user
    #[error("Invalid token")]
    InvalidToken,

    /// Exchange route called without a Basic Authorization header
    #[error("Invalid email/password")]
    CredentialsRequired,

    /// Known email, wrong password
    #[error("Invalid e-mail/password combination")]
    InvalidCredentials,

    /// Unknown email that failed provisioning validation
    #[error("user could not be created")]
    UserNotCreated,

    /// List absent or owned by another user
    #[error("List does not exist")]
    ListNotFound {
        /// HTTP status code for this miss (404 on reads, 422 on writes)
        status: StatusCode,
    },

    /// Item absent or belonging to another list
    #[error("Item does not exist")]
    ItemNotFound {
        /// HTTP status code for this miss
        status: StatusCode,
    },

    /// Request body carried no list name
    #[error("List is required")]
    ListRequired,

    /// List name present but blank
    #[error("Error list could not be created")]
    ListNotCreated,

    /// Request body carried no item name
    #[error("Item name is required")]
    ItemRequired,

    /// Item name present but blank
    #[error("Item could not be created")]
    ItemNotCreated,

    /// Underlying datastore failure; the cause is logged, not leaked
    #[error("Something went wrong")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Missing list on a read path
    pub fn list_not_found() -> Self {
        Self::ListNotFound {
            status: StatusCode::NOT_FOUND,
        }
    }

    /// Missing list behind a mutation
    pub fn list_rejected() -> Self {
        Self::ListNotFound {
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Missing item behind a mutation
    pub fn item_rejected() -> Self {
        Self::ItemNotFound {
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::TokenRequired
            | Self::InvalidToken
            | Self::CredentialsRequired
            | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::ListNotFound { status } | Self::ItemNotFound { status } => *status,
            Self::UserNotCreated
            | Self::ListRequired
            | Self::ListNotCreated
            | Self::ItemRequired
            | Self::ItemNotCreated
            | Self::Database(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
