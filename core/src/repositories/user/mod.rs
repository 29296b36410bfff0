//! User directory interface

mod mock;
mod r#trait;

pub use mock::InMemoryUserDirectory;
pub use r#trait::UserDirectory;
