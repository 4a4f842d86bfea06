//! PostgreSQL store tests.
//!
//! Need a reachable `DATABASE_URL`; run with `cargo test -- --ignored`.

use securedash_db::{AccountStore, PgAccountStore, PgPool, StoreError};
use securedash_models::{Email, NewAccount, Role};

fn new_account(email: &str, role: Role) -> NewAccount {
    NewAccount {
        name: "Test".into(),
        email: Email::new(email).unwrap(),
        credential_hash: "hash".into(),
        role,
        modules: vec!["reports".into()],
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_insert_and_find(pool: PgPool) {
    let store = PgAccountStore::new(pool);

    let record = store
        .insert(new_account("ada@example.com", Role::Admin))
        .await
        .unwrap();

    let by_id = store.find_by_id(record.id).await.unwrap().unwrap();
    assert_eq!(by_id.role, Role::Admin);
    assert_eq!(by_id.modules, vec!["reports".to_string()]);

    let by_email = store
        .find_by_email(&Email::new("ADA@example.com").unwrap())
        .await
        .unwrap();
    assert_eq!(by_email.map(|r| r.id), Some(record.id));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_unique_constraints_map_to_store_errors(pool: PgPool) {
    let store = PgAccountStore::new(pool);

    store
        .insert(new_account("root@example.com", Role::Superadmin))
        .await
        .unwrap();

    let duplicate = store
        .insert(new_account("root@example.com", Role::User))
        .await;
    assert!(matches!(duplicate, Err(StoreError::DuplicateEmail)));

    let second = store
        .insert(new_account("other@example.com", Role::Superadmin))
        .await;
    assert!(matches!(second, Err(StoreError::SuperadminExists)));

    assert!(store.superadmin_exists().await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_list_save_and_delete(pool: PgPool) {
    let store = PgAccountStore::new(pool);

    store
        .insert(new_account("root@example.com", Role::Superadmin))
        .await
        .unwrap();
    let admin = store
        .insert(new_account("admin@example.com", Role::Admin))
        .await
        .unwrap();
    store
        .insert(new_account("user@example.com", Role::User))
        .await
        .unwrap();

    let listed = store.list_by_roles(&Role::ASSIGNABLE).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|r| !r.role.is_superadmin()));

    let mut changed = admin.clone();
    changed.role = Role::User;
    changed.name = "Renamed".into();
    let saved = store.save(&changed).await.unwrap();
    assert_eq!(saved.role, Role::User);
    assert_eq!(saved.name, "Renamed");
    assert_eq!(saved.created_at, admin.created_at);

    assert!(store.delete(admin.id).await.unwrap());
    assert!(!store.delete(admin.id).await.unwrap());
    assert!(matches!(store.save(&changed).await, Err(StoreError::NotFound)));
}
