use actix_web::HttpRequest;
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::user::Model as UserModel;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::{extract_token_parts, verify};

/// Positional id segments must be present and numeric.
pub fn parse_item_id(raw: &str, message: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::NotFound(message.to_string()))
}

/// Escapes `&`, `<` and `>`; quotes pass through untouched.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn base_url(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

/// Resolves the authenticated user behind a bearer token, or fails with
/// the calling operation's Unauthorized message. A missing token fails
/// without touching the database.
pub async fn require_user(
    db: &PostgresService,
    auth: Option<BearerAuth>,
    message: &str,
) -> Result<UserModel, AppError> {
    let unauthorized = || AppError::Unauthorized(message.to_string());

    let auth = auth.ok_or_else(unauthorized)?;
    let (user_id, secret) = extract_token_parts(auth.token()).ok_or_else(unauthorized)?;

    let user = db.get_user_by_id(user_id).await?.ok_or_else(unauthorized)?;
    match verify(&secret, &user.auth_hash) {
        Ok(true) => Ok(user),
        _ => Err(unauthorized()),
    }
}
