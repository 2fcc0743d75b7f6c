use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Lifetime of tokens minted at registration and login.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// bcrypt work factor used unless overridden.
pub const DEFAULT_PASSWORD_HASH_COST: u32 = bcrypt::DEFAULT_COST;

/// Configuration for JWT and password-hashing settings
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
    pub token_ttl: Duration,
    /// bcrypt cost for newly stored passwords (4..=31)
    pub password_hash_cost: u32,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: DEFAULT_TOKEN_TTL,
            password_hash_cost: DEFAULT_PASSWORD_HASH_COST,
        }
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn with_password_hash_cost(mut self, cost: u32) -> Self {
        self.password_hash_cost = cost;
        self
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"crossline_default_secret_for_tests_only".to_vec())
    }
}
