use axum::{Router, routing::post};

use crate::modules::auth::controller::{create_superadmin, login};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/createsuperadmin", post(create_superadmin))
        .route("/login", post(login))
}
