use crate::modules::email_signups::adapters::outbound::signup_store_in_memory::InMemorySignupStore;
use crate::modules::email_signups::use_cases::sign_up::handler::SignUpHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub sign_up_handler: Arc<SignUpHandler<InMemorySignupStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemorySignupStore>) -> Self {
        Self {
            sign_up_handler: Arc::new(SignUpHandler::new(store)),
        }
    }

    /// Fresh state with an empty store. Every call is isolated from the others.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemorySignupStore::new()))
    }
}
