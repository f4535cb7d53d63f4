// In memory implementation of the SignupStore port.
//
// Purpose
// - Serve the running process and tests without a database. Restarting clears every record.
//
// Responsibilities
// - Key records by generated id.
// - Keep created_at non-decreasing in insertion order.

use crate::modules::email_signups::adapters::outbound::signup_store::{
    SignupStore, SignupStoreError,
};
use crate::modules::email_signups::core::email_signup::EmailSignup;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    signups: HashMap<String, EmailSignup>,
    last_created_at: i64,
}

#[derive(Default)]
pub struct InMemorySignupStore {
    inner: RwLock<Inner>,
    offline: bool,
}

impl InMemorySignupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail as an unreachable backend would.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.signups.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn ensure_online(&self) -> Result<(), SignupStoreError> {
        if self.offline {
            return Err(SignupStoreError::Backend("Signup store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SignupStore for InMemorySignupStore {
    async fn insert(&self, email: &str) -> Result<EmailSignup, SignupStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let created_at = Utc::now().timestamp_millis().max(guard.last_created_at);
        let signup = EmailSignup {
            id: Uuid::now_v7().to_string(),
            email: email.to_string(),
            created_at,
        };
        guard.last_created_at = created_at;
        guard.signups.insert(signup.id.clone(), signup.clone());
        Ok(signup)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<EmailSignup>, SignupStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .signups
            .values()
            .find(|signup| signup.email == email)
            .cloned())
    }
}

#[cfg(test)]
mod in_memory_signup_store_tests {
    use super::*;
    use crate::tests::fixtures::emails::VALID_EMAIL;
    use rstest::{fixture, rstest};
    use std::collections::HashSet;

    #[fixture]
    fn store() -> InMemorySignupStore {
        InMemorySignupStore::new()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_insert_and_return_the_record(store: InMemorySignupStore) {
        let before = Utc::now().timestamp_millis();
        let signup = store.insert(VALID_EMAIL).await.expect("insert failed");
        assert_eq!(signup.email, VALID_EMAIL);
        assert!(!signup.id.is_empty());
        assert!(signup.created_at >= before);
        assert!(signup.created_at <= Utc::now().timestamp_millis());
        assert_eq!(store.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_find_an_email_before_it_is_inserted(store: InMemorySignupStore) {
        let found = store.find_by_email(VALID_EMAIL).await.expect("lookup failed");
        assert_eq!(found, None);
        assert!(store.is_empty().await);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_find_the_inserted_record_without_side_effects(
        store: InMemorySignupStore,
    ) {
        let inserted = store.insert(VALID_EMAIL).await.expect("insert failed");
        let first = store.find_by_email(VALID_EMAIL).await.expect("lookup failed");
        let second = store.find_by_email(VALID_EMAIL).await.expect("lookup failed");
        assert_eq!(first, Some(inserted));
        assert_eq!(first, second);
        assert_eq!(store.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_match_emails_exactly(store: InMemorySignupStore) {
        store.insert("Demo@GamingCenter.in").await.expect("insert failed");
        let found = store
            .find_by_email("demo@gamingcenter.in")
            .await
            .expect("lookup failed");
        assert_eq!(found, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_check_uniqueness_on_insert(store: InMemorySignupStore) {
        let first = store.insert(VALID_EMAIL).await.expect("insert failed");
        let second = store.insert(VALID_EMAIL).await.expect("insert failed");
        assert_ne!(first.id, second.id);
        assert_eq!(store.len().await, 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_generate_distinct_ids_and_ordered_timestamps(store: InMemorySignupStore) {
        let mut ids = HashSet::new();
        let mut last_created_at = i64::MIN;
        for i in 0..50 {
            let signup = store
                .insert(&format!("user{i}@example.com"))
                .await
                .expect("insert failed");
            assert!(signup.created_at >= last_created_at);
            last_created_at = signup.created_at;
            ids.insert(signup.id);
        }
        assert_eq!(ids.len(), 50);
        assert_eq!(store.len().await, 50);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_every_call_when_offline(mut store: InMemorySignupStore) {
        store.toggle_offline();
        let offline = SignupStoreError::Backend("Signup store offline".into());
        assert_eq!(store.insert(VALID_EMAIL).await, Err(offline.clone()));
        assert_eq!(store.find_by_email(VALID_EMAIL).await, Err(offline));
        assert!(store.is_empty().await);
    }
}
