//! MySQL repository implementations

mod token_repository_impl;
mod user_directory_impl;

pub use token_repository_impl::MySqlTokenRepository;
pub use user_directory_impl::MySqlUserDirectory;
