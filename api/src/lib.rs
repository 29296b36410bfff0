//! HTTP API layer for the Moim auth service
//!
//! Exposes login, reissue and logout endpoints over actix-web; all
//! token semantics live in `moim_core`, storage in `moim_infra`.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
