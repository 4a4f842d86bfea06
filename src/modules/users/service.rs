use tracing::{info, instrument};

use securedash_core::{ModuleCatalog, hash_password, verify_dummy_password, verify_password};
use securedash_db::AccountStore;
use securedash_models::{Account, AccountId, AccountRecord, Email, NewAccount, Role};
use securedash_observability::track_account_created;

use crate::modules::users::error::AccountError;
use crate::modules::users::model::{RegisterAccountDto, UpdateAccountDto};

/// Account directory operations.
///
/// Every write that touches `modules` re-validates against the catalog, and
/// every validation runs before anything is hashed or persisted, so a failed
/// call leaves the account untouched.
pub struct AccountService;

fn normalize_name(name: &str) -> Result<String, AccountError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AccountError::Validation("Name is required".to_string()));
    }
    Ok(name.to_string())
}

fn parse_email(email: &str) -> Result<Email, AccountError> {
    Email::new(email).map_err(|e| AccountError::Validation(e.to_string()))
}

/// Parses a role a superadmin may hand out. `superadmin` is never assignable.
fn parse_assignable_role(role: &str) -> Result<Role, AccountError> {
    role.parse::<Role>()
        .ok()
        .filter(Role::is_assignable)
        .ok_or(AccountError::InvalidRole)
}

fn validate_modules(catalog: &ModuleCatalog, modules: &[String]) -> Result<Vec<String>, AccountError> {
    catalog.normalize(modules).map_err(AccountError::InvalidModules)
}

impl AccountService {
    /// Creates the one and only superadmin, granted every module.
    #[instrument(skip(store, catalog, password))]
    pub async fn bootstrap_superadmin(
        store: &dyn AccountStore,
        catalog: &ModuleCatalog,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, AccountError> {
        if store.superadmin_exists().await? {
            return Err(AccountError::SuperadminExists);
        }

        let name = normalize_name(name)?;
        let email = parse_email(email)?;
        let credential_hash = hash_password(password)?;

        // The store re-checks atomically; a concurrent bootstrap that passed
        // the check above still fails here with SuperadminExists.
        let record = store
            .insert(NewAccount {
                name,
                email,
                credential_hash,
                role: Role::Superadmin,
                modules: catalog.all_owned(),
            })
            .await?;

        track_account_created(Role::Superadmin.as_str());
        info!(account_id = %record.id, "Superadmin created");
        Ok(record.into())
    }

    /// Checks an email/password pair. Unknown email and wrong password are
    /// indistinguishable to the caller.
    #[instrument(skip(store, password))]
    pub async fn authenticate(
        store: &dyn AccountStore,
        email: &str,
        password: &str,
    ) -> Result<AccountRecord, AccountError> {
        let record = match Email::new(email) {
            Ok(email) => store.find_by_email(&email).await?,
            Err(_) => None,
        };

        // Unknown accounts still pay for one bcrypt check.
        let Some(record) = record else {
            verify_dummy_password(password);
            return Err(AccountError::InvalidCredentials);
        };

        if !verify_password(password, &record.credential_hash)? {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(record)
    }

    /// Creates an admin or user account. Callers must already be authorized
    /// as superadmin.
    #[instrument(skip(store, catalog, dto), fields(email = %dto.email))]
    pub async fn register(
        store: &dyn AccountStore,
        catalog: &ModuleCatalog,
        dto: RegisterAccountDto,
    ) -> Result<Account, AccountError> {
        let role = match dto.role.as_deref() {
            Some(role) => parse_assignable_role(role)?,
            None => Role::default(),
        };
        let modules = validate_modules(catalog, dto.modules.as_deref().unwrap_or_default())?;
        let name = normalize_name(&dto.name)?;
        let email = parse_email(&dto.email)?;

        if store.find_by_email(&email).await?.is_some() {
            return Err(AccountError::DuplicateEmail);
        }

        let credential_hash = hash_password(&dto.password)?;

        let record = store
            .insert(NewAccount {
                name,
                email,
                credential_hash,
                role,
                modules,
            })
            .await?;

        track_account_created(role.as_str());
        info!(account_id = %record.id, role = %role, "Account registered");
        Ok(record.into())
    }

    /// Partial update.
    ///
    /// With `acting_as_admin` the patch may also change `role` and `modules`.
    /// Otherwise those fields are ignored whatever the payload says. The
    /// superadmin's role can never change.
    #[instrument(skip(store, catalog, patch))]
    pub async fn update(
        store: &dyn AccountStore,
        catalog: &ModuleCatalog,
        id: AccountId,
        patch: UpdateAccountDto,
        acting_as_admin: bool,
    ) -> Result<Account, AccountError> {
        let mut record = store.find_by_id(id).await?.ok_or(AccountError::NotFound)?;

        if acting_as_admin {
            if let Some(role) = patch.role.as_deref() {
                record.role = if record.role.is_superadmin() {
                    match role.parse::<Role>() {
                        Ok(Role::Superadmin) => Role::Superadmin,
                        Ok(_) => {
                            return Err(AccountError::SuperadminImmutable(
                                "Super Admin role cannot be changed",
                            ));
                        }
                        Err(_) => return Err(AccountError::InvalidRole),
                    }
                } else {
                    parse_assignable_role(role)?
                };
            }
            if let Some(modules) = patch.modules.as_deref() {
                record.modules = validate_modules(catalog, modules)?;
            }
        }

        if let Some(name) = patch.name.as_deref() {
            record.name = normalize_name(name)?;
        }
        if let Some(email) = patch.email.as_deref() {
            record.email = parse_email(email)?;
        }
        if let Some(password) = patch.password.as_deref() {
            record.credential_hash = hash_password(password)?;
        }

        let saved = store.save(&record).await?;
        info!(account_id = %saved.id, acting_as_admin, "Account updated");
        Ok(saved.into())
    }

    /// Admin and user accounts, oldest first. `filter` narrows to one of the
    /// two; asking for `superadmin` is an invalid role.
    #[instrument(skip(store))]
    pub async fn list(
        store: &dyn AccountStore,
        filter: Option<&str>,
    ) -> Result<Vec<Account>, AccountError> {
        let roles = match filter {
            Some(role) => vec![parse_assignable_role(role)?],
            None => Role::ASSIGNABLE.to_vec(),
        };

        let records = store.list_by_roles(&roles).await?;
        Ok(records.into_iter().map(Account::from).collect())
    }

    #[instrument(skip(store))]
    pub async fn get_by_id(store: &dyn AccountStore, id: AccountId) -> Result<Account, AccountError> {
        store
            .find_by_id(id)
            .await?
            .map(Account::from)
            .ok_or(AccountError::NotFound)
    }

    /// Deletes an account.
    ///
    /// The superadmin cannot be removed: superadmin is only reachable through
    /// the one-time bootstrap, so deleting it would reopen that route and
    /// allow a second superadmin over the life of the system. Fails with
    /// `SuperadminImmutable` in that case, in addition to `NotFound`.
    #[instrument(skip(store))]
    pub async fn remove(store: &dyn AccountStore, id: AccountId) -> Result<(), AccountError> {
        let record = store.find_by_id(id).await?.ok_or(AccountError::NotFound)?;

        if record.role.is_superadmin() {
            return Err(AccountError::SuperadminImmutable(
                "Super Admin cannot be deleted",
            ));
        }

        if !store.delete(id).await? {
            return Err(AccountError::NotFound);
        }

        info!(account_id = %id, "Account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use securedash_db::MemoryAccountStore;
    use std::time::{Duration, Instant};

    fn register_dto(email: &str, role: Option<&str>, modules: &[&str]) -> RegisterAccountDto {
        RegisterAccountDto {
            name: "Test User".into(),
            email: email.into(),
            password: "secret1".into(),
            role: role.map(str::to_string),
            modules: Some(modules.iter().map(|m| m.to_string()).collect()),
        }
    }

    #[tokio::test]
    async fn test_bootstrap_grants_all_modules() {
        let store = MemoryAccountStore::new();
        let catalog = ModuleCatalog::standard();

        let account =
            AccountService::bootstrap_superadmin(&store, &catalog, "A", "a@x.com", "secret1")
                .await
                .unwrap();

        assert_eq!(account.role, Role::Superadmin);
        assert_eq!(account.modules, catalog.all_owned());

        let second =
            AccountService::bootstrap_superadmin(&store, &catalog, "B", "b@x.com", "secret1").await;
        assert!(matches!(second, Err(AccountError::SuperadminExists)));
    }

    #[tokio::test]
    async fn test_register_rejects_foreign_modules() {
        let store = MemoryAccountStore::new();
        let catalog = ModuleCatalog::standard();

        let result = AccountService::register(
            &store,
            &catalog,
            register_dto("u@x.com", Some("user"), &["inventory", "bogus"]),
        )
        .await;

        match result {
            Err(AccountError::InvalidModules(invalid)) => assert_eq!(invalid, vec!["bogus"]),
            other => panic!("expected InvalidModules, got {:?}", other),
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_register_rejects_superadmin_role() {
        let store = MemoryAccountStore::new();
        let result = AccountService::register(
            &store,
            &ModuleCatalog::standard(),
            register_dto("u@x.com", Some("superadmin"), &[]),
        )
        .await;
        assert!(matches!(result, Err(AccountError::InvalidRole)));
    }

    #[tokio::test]
    async fn test_register_defaults_to_user() {
        let store = MemoryAccountStore::new();
        let account = AccountService::register(
            &store,
            &ModuleCatalog::standard(),
            register_dto("u@x.com", None, &["reports", "inventory", "reports"]),
        )
        .await
        .unwrap();

        assert_eq!(account.role, Role::User);
        assert_eq!(account.modules, vec!["inventory", "reports"]);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_case_insensitive() {
        let store = MemoryAccountStore::new();
        let catalog = ModuleCatalog::standard();
        AccountService::register(&store, &catalog, register_dto("dup@x.com", None, &[]))
            .await
            .unwrap();

        let result =
            AccountService::register(&store, &catalog, register_dto(" DUP@x.com ", None, &[]))
                .await;
        assert!(matches!(result, Err(AccountError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_authenticate_collapses_failures() {
        let store = MemoryAccountStore::new();
        let catalog = ModuleCatalog::standard();
        AccountService::register(&store, &catalog, register_dto("u@x.com", None, &[]))
            .await
            .unwrap();

        let wrong_password = AccountService::authenticate(&store, "u@x.com", "nope").await;
        let unknown_email = AccountService::authenticate(&store, "who@x.com", "secret1").await;

        let a = wrong_password.unwrap_err();
        let b = unknown_email.unwrap_err();
        assert!(matches!(a, AccountError::InvalidCredentials));
        assert!(matches!(b, AccountError::InvalidCredentials));
        assert_eq!(a.to_string(), b.to_string());

        let ok = AccountService::authenticate(&store, "U@X.com", "secret1").await;
        assert!(ok.is_ok());
    }

    async fn average_failure(store: &MemoryAccountStore, email: &str, runs: u32) -> Duration {
        let start = Instant::now();
        for _ in 0..runs {
            let result = AccountService::authenticate(store, email, "wrong-password").await;
            assert!(matches!(result, Err(AccountError::InvalidCredentials)));
        }
        start.elapsed() / runs
    }

    #[tokio::test]
    async fn test_unknown_email_costs_a_hash_check() {
        let store = MemoryAccountStore::new();
        let catalog = ModuleCatalog::standard();
        AccountService::register(&store, &catalog, register_dto("u@x.com", None, &[]))
            .await
            .unwrap();
        // First dummy check also builds the dummy hash.
        let _ = AccountService::authenticate(&store, "warmup@x.com", "x").await;

        let wrong_password = average_failure(&store, "u@x.com", 3).await;
        let unknown_email = average_failure(&store, "who@x.com", 3).await;
        let unparseable_email = average_failure(&store, "not-an-email", 3).await;

        for elapsed in [unknown_email, unparseable_email] {
            assert!(
                elapsed * 4 > wrong_password,
                "{:?} vs {:?}",
                elapsed,
                wrong_password
            );
        }
    }

    #[tokio::test]
    async fn test_self_service_ignores_role_and_modules() {
        let store = MemoryAccountStore::new();
        let catalog = ModuleCatalog::standard();
        let account = AccountService::register(
            &store,
            &catalog,
            register_dto("admin@x.com", Some("admin"), &["reports"]),
        )
        .await
        .unwrap();

        let patch = UpdateAccountDto {
            name: Some("Renamed".into()),
            role: Some("superadmin".into()),
            modules: Some(vec!["x".into()]),
            ..Default::default()
        };
        let updated = AccountService::update(&store, &catalog, account.id, patch, false)
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.role, Role::Admin);
        assert_eq!(updated.modules, vec!["reports"]);
    }

    #[tokio::test]
    async fn test_admin_update_validates_before_saving() {
        let store = MemoryAccountStore::new();
        let catalog = ModuleCatalog::standard();
        let account = AccountService::register(
            &store,
            &catalog,
            register_dto("u@x.com", Some("user"), &["reports"]),
        )
        .await
        .unwrap();

        let patch = UpdateAccountDto {
            name: Some("Changed".into()),
            modules: Some(vec!["dashboard".into(), "nope".into()]),
            ..Default::default()
        };
        let result = AccountService::update(&store, &catalog, account.id, patch, true).await;
        assert!(matches!(result, Err(AccountError::InvalidModules(_))));

        let unchanged = AccountService::get_by_id(&store, account.id).await.unwrap();
        assert_eq!(unchanged.name, "Test User");
        assert_eq!(unchanged.modules, vec!["reports"]);
    }

    #[tokio::test]
    async fn test_superadmin_role_is_terminal() {
        let store = MemoryAccountStore::new();
        let catalog = ModuleCatalog::standard();
        let root =
            AccountService::bootstrap_superadmin(&store, &catalog, "Root", "root@x.com", "secret1")
                .await
                .unwrap();

        let patch = UpdateAccountDto {
            role: Some("user".into()),
            ..Default::default()
        };
        let result = AccountService::update(&store, &catalog, root.id, patch, true).await;
        assert!(matches!(result, Err(AccountError::SuperadminImmutable(_))));

        let removed = AccountService::remove(&store, root.id).await;
        assert!(matches!(removed, Err(AccountError::SuperadminImmutable(_))));
    }

    #[tokio::test]
    async fn test_list_filters() {
        let store = MemoryAccountStore::new();
        let catalog = ModuleCatalog::standard();
        AccountService::bootstrap_superadmin(&store, &catalog, "Root", "root@x.com", "secret1")
            .await
            .unwrap();
        AccountService::register(&store, &catalog, register_dto("a@x.com", Some("admin"), &[]))
            .await
            .unwrap();
        AccountService::register(&store, &catalog, register_dto("u@x.com", Some("user"), &[]))
            .await
            .unwrap();

        assert_eq!(AccountService::list(&store, None).await.unwrap().len(), 2);
        let admins = AccountService::list(&store, Some("admin")).await.unwrap();
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].role, Role::Admin);
        assert!(matches!(
            AccountService::list(&store, Some("superadmin")).await,
            Err(AccountError::InvalidRole)
        ));
    }

    #[tokio::test]
    async fn test_remove_missing_account() {
        let store = MemoryAccountStore::new();
        let result = AccountService::remove(&store, AccountId::new()).await;
        assert!(matches!(result, Err(AccountError::NotFound)));
    }
}
