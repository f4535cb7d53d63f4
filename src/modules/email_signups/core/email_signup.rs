use serde::{Deserialize, Serialize};

/// One captured signup. Created by the store, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSignup {
    pub id: String,
    pub email: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}
