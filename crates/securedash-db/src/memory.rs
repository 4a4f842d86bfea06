use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use securedash_models::{AccountId, AccountRecord, Email, NewAccount, Role};

use crate::store::{AccountStore, StoreError, StoreResult};

/// In-process [`AccountStore`].
///
/// Insertion-ordered. Every uniqueness check runs under the same write lock
/// as the mutation it guards.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<Vec<AccountRecord>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

fn check_unique(
    accounts: &[AccountRecord],
    id: Option<AccountId>,
    email: &Email,
    role: Role,
) -> StoreResult<()> {
    let others = accounts.iter().filter(|a| Some(a.id) != id);
    for other in others {
        if other.email == *email {
            return Err(StoreError::DuplicateEmail);
        }
        if role.is_superadmin() && other.role.is_superadmin() {
            return Err(StoreError::SuperadminExists);
        }
    }
    Ok(())
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn insert(&self, account: NewAccount) -> StoreResult<AccountRecord> {
        let mut accounts = self.accounts.write().await;
        check_unique(&accounts, None, &account.email, account.role)?;

        let now = Utc::now();
        let record = AccountRecord {
            id: AccountId::new(),
            name: account.name,
            email: account.email,
            credential_hash: account.credential_hash,
            role: account.role,
            modules: account.modules,
            created_at: now,
            updated_at: now,
        };
        accounts.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: AccountId) -> StoreResult<Option<AccountRecord>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> StoreResult<Option<AccountRecord>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.email == *email).cloned())
    }

    async fn list_by_roles(&self, roles: &[Role]) -> StoreResult<Vec<AccountRecord>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .filter(|a| roles.contains(&a.role))
            .cloned()
            .collect())
    }

    async fn superadmin_exists(&self) -> StoreResult<bool> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().any(|a| a.role.is_superadmin()))
    }

    async fn save(&self, account: &AccountRecord) -> StoreResult<AccountRecord> {
        let mut accounts = self.accounts.write().await;
        check_unique(&accounts, Some(account.id), &account.email, account.role)?;

        let slot = accounts
            .iter_mut()
            .find(|a| a.id == account.id)
            .ok_or(StoreError::NotFound)?;

        slot.name = account.name.clone();
        slot.email = account.email.clone();
        slot.credential_hash = account.credential_hash.clone();
        slot.role = account.role;
        slot.modules = account.modules.clone();
        slot.updated_at = Utc::now();

        Ok(slot.clone())
    }

    async fn delete(&self, id: AccountId) -> StoreResult<bool> {
        let mut accounts = self.accounts.write().await;
        let before = accounts.len();
        accounts.retain(|a| a.id != id);
        Ok(accounts.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_account(email: &str, role: Role) -> NewAccount {
        NewAccount {
            name: "Test".into(),
            email: Email::new(email).unwrap(),
            credential_hash: "hash".into(),
            role,
            modules: vec![],
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MemoryAccountStore::new();
        let record = store
            .insert(new_account("a@x.com", Role::User))
            .await
            .unwrap();

        let by_id = store.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@x.com");

        let email = Email::new("A@X.COM").unwrap();
        let by_email = store.find_by_email(&email).await.unwrap().unwrap();
        assert_eq!(by_email.id, record.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryAccountStore::new();
        store
            .insert(new_account("a@x.com", Role::User))
            .await
            .unwrap();

        let err = store
            .insert(new_account(" A@x.com", Role::Admin))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_second_superadmin_rejected() {
        let store = MemoryAccountStore::new();
        store
            .insert(new_account("root@x.com", Role::Superadmin))
            .await
            .unwrap();
        assert!(store.superadmin_exists().await.unwrap());

        let err = store
            .insert(new_account("root2@x.com", Role::Superadmin))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::SuperadminExists));
    }

    #[tokio::test]
    async fn test_concurrent_superadmin_inserts() {
        let store = Arc::new(MemoryAccountStore::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .insert(new_account(&format!("root{}@x.com", i), Role::Superadmin))
                    .await
                    .is_ok()
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_save_updates_fields() {
        let store = MemoryAccountStore::new();
        let mut record = store
            .insert(new_account("a@x.com", Role::User))
            .await
            .unwrap();

        record.role = Role::Admin;
        record.modules = vec!["reports".into()];
        let saved = store.save(&record).await.unwrap();

        assert_eq!(saved.role, Role::Admin);
        assert_eq!(saved.modules, vec!["reports".to_string()]);
        assert_eq!(saved.created_at, record.created_at);
        assert!(saved.updated_at >= record.updated_at);
    }

    #[tokio::test]
    async fn test_save_rejects_taken_email() {
        let store = MemoryAccountStore::new();
        store
            .insert(new_account("a@x.com", Role::User))
            .await
            .unwrap();
        let mut b = store
            .insert(new_account("b@x.com", Role::User))
            .await
            .unwrap();

        let original = b.clone();
        b.email = Email::new("A@x.com").unwrap();
        b.name = "Changed".into();
        assert!(matches!(
            store.save(&b).await.unwrap_err(),
            StoreError::DuplicateEmail
        ));

        let stored = store.find_by_id(original.id).await.unwrap().unwrap();
        assert_eq!(stored, original);

        // An account keeps its own email across saves.
        let saved = store.save(&original).await.unwrap();
        assert_eq!(saved.email, "b@x.com");
    }

    #[tokio::test]
    async fn test_save_missing_account() {
        let store = MemoryAccountStore::new();
        let mut record = store
            .insert(new_account("a@x.com", Role::User))
            .await
            .unwrap();
        store.delete(record.id).await.unwrap();

        record.name = "Gone".into();
        assert!(matches!(
            store.save(&record).await.unwrap_err(),
            StoreError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_list_by_roles_keeps_insertion_order() {
        let store = MemoryAccountStore::new();
        store
            .insert(new_account("root@x.com", Role::Superadmin))
            .await
            .unwrap();
        store
            .insert(new_account("u1@x.com", Role::User))
            .await
            .unwrap();
        store
            .insert(new_account("a1@x.com", Role::Admin))
            .await
            .unwrap();

        let listed = store
            .list_by_roles(&[Role::Admin, Role::User])
            .await
            .unwrap();
        let emails: Vec<&str> = listed.iter().map(|a| a.email.as_str()).collect();
        assert_eq!(emails, vec!["u1@x.com", "a1@x.com"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryAccountStore::new();
        let record = store
            .insert(new_account("a@x.com", Role::User))
            .await
            .unwrap();

        assert!(store.delete(record.id).await.unwrap());
        assert!(!store.delete(record.id).await.unwrap());
        assert!(store.is_empty().await);
    }
}
