/// Validated input of the sign up use case.
///
/// Only `schema::validate_sign_up` constructs it, so holding one means the
/// email already passed the address rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUp {
    email: String,
}

impl SignUp {
    pub(crate) fn new(email: String) -> Self {
        Self { email }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
