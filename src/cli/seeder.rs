use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use tracing::warn;

use securedash_core::ModuleCatalog;
use securedash_db::AccountStore;
use securedash_models::Role;

use crate::modules::users::error::AccountError;
use crate::modules::users::model::RegisterAccountDto;
use crate::modules::users::service::AccountService;

/// Password given to every seeded account.
pub const SEED_PASSWORD: &str = "password123";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub created: usize,
    pub skipped: usize,
}

fn random_modules(catalog: &ModuleCatalog) -> Vec<String> {
    catalog
        .all()
        .iter()
        .filter(|_| (0..2).fake::<u8>() == 1)
        .map(|m| m.to_string())
        .collect()
}

fn email_part(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase()
}

fn fake_account(catalog: &ModuleCatalog, role: Role, index: usize) -> RegisterAccountDto {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();

    RegisterAccountDto {
        name: format!("{} {}", first_name, last_name),
        email: format!(
            "{}.{}.{}{}@example.com",
            email_part(&first_name),
            email_part(&last_name),
            role,
            index
        ),
        password: SEED_PASSWORD.to_string(),
        role: Some(role.to_string()),
        modules: Some(random_modules(catalog)),
    }
}

/// Registers `admins` admin and `users` user accounts with random catalog
/// modules. Accounts whose generated email is already taken are skipped.
pub async fn seed_accounts(
    store: &dyn AccountStore,
    admins: usize,
    users: usize,
) -> Result<SeedSummary, AccountError> {
    let catalog = ModuleCatalog::standard();
    let mut summary = SeedSummary::default();

    let plan = std::iter::repeat_n(Role::Admin, admins).chain(std::iter::repeat_n(Role::User, users));

    for (index, role) in plan.enumerate() {
        let dto = fake_account(&catalog, role, index);
        match AccountService::register(store, &catalog, dto).await {
            Ok(_) => summary.created += 1,
            Err(AccountError::DuplicateEmail) => {
                warn!(index, "Seed account email already taken, skipping");
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}
