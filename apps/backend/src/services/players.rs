//! Player registration and password login.

use sea_orm::ConnectionTrait;
use tracing::{info, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, ValidationKind};
use crate::repos::players::{self, Player};

const MAX_DISPLAY_NAME_CHARS: usize = 64;
/// bcrypt only reads the first 72 bytes; longer input is refused outright.
const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Clone, Copy)]
pub struct PlayerService {
    hash_cost: u32,
}

impl PlayerService {
    pub fn new(hash_cost: u32) -> Self {
        Self { hash_cost }
    }

    /// Creates a player under a fresh id. Names are trimmed, must be
    /// 1..=64 characters afterwards and must not be registered already.
    pub async fn register<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        display_name: &str,
        password: &str,
    ) -> Result<Player, DomainError> {
        let name = normalize_display_name(display_name)?;
        validate_password(password)?;

        if players::display_name_taken(conn, name).await? {
            return Err(name_taken(name));
        }

        let hash = hash_password(password.to_string(), self.hash_cost).await?;
        let player = players::create_player(conn, name, &hash)
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent registration.
                DomainError::Conflict(ConflictKind::Other(_), _) => name_taken(name),
                other => other,
            })?;
        info!(player_id = %player.id, "Player registered");
        Ok(player)
    }

    /// Checks a display name and password pair. Unknown names and wrong
    /// passwords fail the same way.
    pub async fn login<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        display_name: &str,
        password: &str,
    ) -> Result<Player, DomainError> {
        let Ok(name) = normalize_display_name(display_name) else {
            return Err(invalid_credentials());
        };
        let Some(creds) = players::find_credentials(conn, name).await? else {
            return Err(invalid_credentials());
        };

        if !verify_password(password.to_string(), creds.password_hash).await? {
            warn!(player_id = %creds.player.id, "Login rejected");
            return Err(invalid_credentials());
        }
        info!(player_id = %creds.player.id, "Player logged in");
        Ok(creds.player)
    }
}

fn normalize_display_name(raw: &str) -> Result<&str, DomainError> {
    let name = raw.trim();
    let chars = name.chars().count();
    if chars == 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidDisplayName,
            "Display name must not be empty",
        ));
    }
    if chars > MAX_DISPLAY_NAME_CHARS {
        return Err(DomainError::validation(
            ValidationKind::InvalidDisplayName,
            format!("Display name must be at most {MAX_DISPLAY_NAME_CHARS} characters"),
        ));
    }
    Ok(name)
}

fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidPassword,
            "Password must not be empty",
        ));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(DomainError::validation(
            ValidationKind::InvalidPassword,
            format!("Password must be at most {MAX_PASSWORD_BYTES} bytes"),
        ));
    }
    Ok(())
}

fn name_taken(name: &str) -> DomainError {
    DomainError::conflict(
        ConflictKind::DisplayNameTaken,
        format!("Display name '{name}' is already taken"),
    )
}

fn invalid_credentials() -> DomainError {
    DomainError::validation(
        ValidationKind::InvalidCredentials,
        "Unknown display name or wrong password",
    )
}

fn hashing_failed(detail: String) -> DomainError {
    DomainError::infra(InfraErrorKind::Other("PasswordHash".into()), detail)
}

async fn hash_password(password: String, cost: u32) -> Result<String, DomainError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| hashing_failed(format!("hashing task failed: {e}")))?
        .map_err(|e| hashing_failed(format!("password hashing failed: {e}")))
}

async fn verify_password(password: String, hash: String) -> Result<bool, DomainError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| hashing_failed(format!("verify task failed: {e}")))?
        .map_err(|e| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("stored password hash is unreadable: {e}"),
            )
        })
}
