//! Repository interfaces for persistence operations

pub mod token;
pub mod user;

pub use token::{InMemoryTokenBlacklist, InMemoryTokenRepository, TokenBlacklist, TokenRepository};
pub use user::{InMemoryUserDirectory, UserDirectory};
