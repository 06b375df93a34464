use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserCreateRes};
use crate::utils::token::{construct_token, encrypt, new_token};

#[post("")]
pub async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    if body.username.trim().is_empty() {
        return Err(AppError::Validation("username must not be empty".to_string()));
    }

    let secret = new_token();
    let auth_hash =
        encrypt(&secret).map_err(|_| AppError::Internal("token hashing failed".to_string()))?;

    let user_id = db
        .create_user(DBUserCreate {
            username: body.username.clone(),
            full_name: body.full_name.clone(),
            email: body.email.clone(),
            auth_hash,
        })
        .await?;

    Ok(ApiResponse::Ok(UserCreateRes {
        token: construct_token(user_id, &secret),
    }))
}
