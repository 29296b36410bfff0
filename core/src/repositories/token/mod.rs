//! Refresh token persistence and access token blacklist interfaces

mod blacklist;
mod mock;
mod r#trait;

pub use blacklist::TokenBlacklist;
pub use r#trait::TokenRepository;

pub use mock::{InMemoryTokenBlacklist, InMemoryTokenRepository};

#[cfg(test)]
mod tests;
