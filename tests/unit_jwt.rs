use securedash_auth::{TOKEN_TTL_SECONDS, TokenError, issue_token_at, verify_token_at};
use securedash_config::JwtConfig;
use securedash_models::{AccountId, Role};

const ISSUED_AT: i64 = 1_700_000_000;

fn config() -> JwtConfig {
    JwtConfig::new("test_secret_key_for_testing_purposes")
}

#[test]
fn test_token_valid_just_before_seven_days() {
    let id = AccountId::new();
    let token = issue_token_at(id, Role::Admin, &config(), ISSUED_AT).unwrap();

    let claims = verify_token_at(&token, &config(), ISSUED_AT + TOKEN_TTL_SECONDS - 1).unwrap();

    assert_eq!(claims.sub, id);
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.iat, ISSUED_AT);
    assert_eq!(claims.exp, ISSUED_AT + 604_800);
}

#[test]
fn test_token_expired_at_and_after_seven_days() {
    let token = issue_token_at(AccountId::new(), Role::User, &config(), ISSUED_AT).unwrap();

    for offset in [TOKEN_TTL_SECONDS, TOKEN_TTL_SECONDS + 1] {
        let result = verify_token_at(&token, &config(), ISSUED_AT + offset);
        assert_eq!(result.unwrap_err(), TokenError::Expired);
    }
}

#[test]
fn test_token_from_other_secret_is_invalid() {
    let token = issue_token_at(AccountId::new(), Role::Superadmin, &config(), ISSUED_AT).unwrap();

    let result = verify_token_at(&token, &JwtConfig::new("another-secret"), ISSUED_AT + 1);

    assert_eq!(result.unwrap_err(), TokenError::Invalid);
}

#[test]
fn test_every_role_round_trips() {
    for role in [Role::Superadmin, Role::Admin, Role::User] {
        let token = issue_token_at(AccountId::new(), role, &config(), ISSUED_AT).unwrap();
        let claims = verify_token_at(&token, &config(), ISSUED_AT).unwrap();
        assert_eq!(claims.role, role);
    }
}
