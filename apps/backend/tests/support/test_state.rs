use std::sync::Arc;

use crossline_backend::config::db::{DbKind, DbProfile};
use crossline_backend::domain::{MiscueSource, NeverMiscue};
use crossline_backend::infra::state::{build_state, StateBuilder};
use crossline_backend::state::app_state::AppState;
use crossline_backend::state::security_config::SecurityConfig;
use crossline_backend::AppError;

/// Same builder the binary uses, over a private in-memory SQLite database,
/// with miscues switched off and the cheapest bcrypt cost.
pub fn test_state_builder() -> StateBuilder {
    build_state()
        .with_db(DbKind::SqliteMemory, DbProfile::Test)
        .with_security(SecurityConfig::default().with_password_hash_cost(4))
        .with_miscue(Arc::new(NeverMiscue))
}

pub async fn build_test_state() -> Result<AppState, AppError> {
    test_state_builder().build().await
}

pub async fn build_test_state_with_miscue(
    miscue: Arc<dyn MiscueSource>,
) -> Result<AppState, AppError> {
    test_state_builder().with_miscue(miscue).build().await
}
