// Sign up handler orchestrates the write flow.
//
// Responsibilities
// - Validate the raw body into a SignUp command.
// - Look the email up, let the decider reject duplicates, then insert.
// - Hold a lock across lookup and insert so concurrent duplicates cannot both pass.

use crate::modules::email_signups::adapters::outbound::signup_store::{
    SignupStore, SignupStoreError,
};
use crate::modules::email_signups::core::email_signup::EmailSignup;
use crate::modules::email_signups::use_cases::sign_up::command::SignUp;
use crate::modules::email_signups::use_cases::sign_up::decide::{DecideError, decide_sign_up};
use crate::modules::email_signups::use_cases::sign_up::schema::{
    ValidationError, validate_sign_up,
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum SignUpError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("email already registered")]
    DuplicateEmail,

    #[error(transparent)]
    Store(#[from] SignupStoreError),
}

impl From<DecideError> for SignUpError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::DuplicateEmail => SignUpError::DuplicateEmail,
        }
    }
}

pub struct SignUpHandler<TStore>
where
    TStore: SignupStore + 'static,
{
    store: Arc<TStore>,
    write_lock: Mutex<()>,
}

impl<TStore> SignUpHandler<TStore>
where
    TStore: SignupStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn handle(&self, raw: &Value) -> Result<EmailSignup, SignUpError> {
        let command = validate_sign_up(raw).inspect_err(|error| {
            tracing::debug!(issues = ?error.issues, "sign up input rejected");
        })?;
        self.sign_up(command).await
    }

    pub async fn sign_up(&self, command: SignUp) -> Result<EmailSignup, SignUpError> {
        let _guard = self.write_lock.lock().await;

        let existing = self.store.find_by_email(command.email()).await?;
        decide_sign_up(existing.as_ref()).inspect_err(|_| {
            tracing::debug!("sign up rejected: email already registered");
        })?;

        let signup = self.store.insert(command.email()).await?;
        tracing::info!(signup_id = %signup.id, "email signup created");
        Ok(signup)
    }
}
