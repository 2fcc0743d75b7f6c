//! Claims carried by the access tokens this backend issues.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inserted into request extensions by `JwtExtract`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Player id
    pub sub: Uuid,
    /// Display name at registration time
    pub name: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
