// Pure decision function for sign up.
//
// Rules
// - An email that already has a signup is rejected.
// - Never perform input or output.

use crate::modules::email_signups::core::email_signup::EmailSignup;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("email already registered")]
    DuplicateEmail,
}

pub fn decide_sign_up(existing: Option<&EmailSignup>) -> Result<(), DecideError> {
    match existing {
        None => Ok(()),
        Some(_) => Err(DecideError::DuplicateEmail),
    }
}

#[cfg(test)]
mod sign_up_decide_tests {
    use super::*;
    use crate::tests::fixtures::emails::VALID_EMAIL;
    use rstest::rstest;

    #[rstest]
    fn it_should_accept_an_unseen_email() {
        assert_eq!(decide_sign_up(None), Ok(()));
    }

    #[rstest]
    fn it_should_reject_an_email_with_an_existing_signup() {
        let existing = EmailSignup {
            id: "sig-fixed-0001".to_string(),
            email: VALID_EMAIL.to_string(),
            created_at: 1_700_000_000_000,
        };
        assert_eq!(
            decide_sign_up(Some(&existing)),
            Err(DecideError::DuplicateEmail)
        );
    }
}
