/**
 * Authentication Handler Types
 *
 * Response types for the credential exchange endpoint.
 */

use serde::Serialize;
use uuid::Uuid;

/// Exchange response
///
/// Returned by `POST /authenticate`. The `id` field is present only when
/// the exchange created a new user.
#[derive(Serialize, Debug)]
pub struct AuthenticateResponse {
    /// ID of the freshly created user, omitted for returning users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Session token for subsequent requests
    pub token: String,
}
