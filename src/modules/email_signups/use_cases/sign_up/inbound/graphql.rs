use async_graphql::{Context, ErrorExtensions, ID, Object, Result as GqlResult, SimpleObject};
use serde_json::json;

use crate::modules::email_signups::use_cases::sign_up::handler::SignUpError;
use crate::modules::email_signups::use_cases::sign_up::inbound::http::{
    DUPLICATE_EMAIL_ERROR, INTERNAL_ERROR, INVALID_EMAIL_ERROR,
};
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct EmailSignupPayload {
    pub id: ID,
    pub email: String,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn email_signup(
        &self,
        context: &Context<'_>,
        email: String,
    ) -> GqlResult<EmailSignupPayload> {
        let state = context.data_unchecked::<AppState>();

        match state
            .sign_up_handler
            .handle(&json!({ "email": email }))
            .await
        {
            Ok(signup) => Ok(EmailSignupPayload {
                id: ID(signup.id),
                email: signup.email,
            }),
            Err(SignUpError::Validation(error)) => {
                let details = serde_json::to_value(&error.issues)
                    .ok()
                    .and_then(|issues| async_graphql::Value::from_json(issues).ok())
                    .unwrap_or(async_graphql::Value::Null);
                Err(async_graphql::Error::new(INVALID_EMAIL_ERROR)
                    .extend_with(|_, extensions| extensions.set("details", details)))
            }
            Err(SignUpError::DuplicateEmail) => {
                Err(async_graphql::Error::new(DUPLICATE_EMAIL_ERROR))
            }
            Err(error) => {
                tracing::error!(error = %error, "email signup failed");
                Err(async_graphql::Error::new(INTERNAL_ERROR))
            }
        }
    }
}
