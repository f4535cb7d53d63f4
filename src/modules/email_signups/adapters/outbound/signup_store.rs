// Port for signup persistence.
//
// Responsibilities
// - Insert a record with a generated id and creation time.
// - Look a record up by its exact email.
//
// Boundaries
// - No uniqueness check here. The sign up handler decides duplicates before inserting.

use crate::modules::email_signups::core::email_signup::EmailSignup;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignupStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait SignupStore: Send + Sync {
    async fn insert(&self, email: &str) -> Result<EmailSignup, SignupStoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<EmailSignup>, SignupStoreError>;
}
