use crate::types::error::AppError;
use actix_web::http::header;
use actix_web::{HttpResponse, Responder};
use serde::Serialize;

pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
    Created(T),
    /// 201 with a Location header and no body.
    CreatedAt(String),
    NoContent,
    /// 204 with a Location header.
    NoContentAt(String),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
            ApiResponse::Created(v) => HttpResponse::Created().json(v),
            ApiResponse::CreatedAt(location) => HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .finish(),
            ApiResponse::NoContent => HttpResponse::NoContent().finish(),
            ApiResponse::NoContentAt(location) => HttpResponse::NoContent()
                .insert_header((header::LOCATION, location))
                .finish(),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
