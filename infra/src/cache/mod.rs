//! Redis cache layer
//!
//! Holds the Redis client and the access token blacklist built on it.

pub mod redis_client;
pub mod token_blacklist;

pub use redis_client::RedisClient;
pub use token_blacklist::RedisTokenBlacklist;
