//! Request and response DTOs

pub mod auth;

pub use auth::{AuthResponse, LoginRequest, LogoutResponse, ReissueRequest, ReissueResponse};
