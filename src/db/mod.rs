pub mod event;
pub mod event_host;
pub mod postgres_service;
pub mod talk;
pub mod user;
