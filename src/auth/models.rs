//! Auth Models

use serde::{Deserialize, Serialize};

/// Body of `POST /register` and `POST /login`
#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// Public view of an account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserView {
    pub id: String,
    pub username: String,
    pub points: u64,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserView,
}
