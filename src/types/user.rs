use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RUserCreate {
    pub username: String,
    pub full_name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserCreateRes {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub auth_hash: String,
}
