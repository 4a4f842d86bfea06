use axum::{
    Router,
    routing::{get, post, put},
};

use crate::modules::users::controller::{
    delete_account, get_me, list_accounts, list_modules, register_account, update_account,
    update_profile,
};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_accounts))
        .route("/modules", get(list_modules))
        .route("/register", post(register_account))
        .route("/me", get(get_me))
        .route("/updateProfile", put(update_profile))
        .route("/{id}", put(update_account).delete(delete_account))
}
