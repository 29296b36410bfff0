//! OAuth provider user-info extraction
//!
//! Each provider returns its own attribute shape from the user-info
//! endpoint; an extractor per provider maps that shape to
//! [`CanonicalUserInfo`](crate::domain::value_objects::CanonicalUserInfo).
//! Providers are registered by name, so adding one never touches a
//! central switch.

mod extractor;
mod registry;

pub use extractor::{
    GoogleUserInfoExtractor, KakaoUserInfoExtractor, NaverUserInfoExtractor, UserInfoExtractor,
};
pub use registry::ProviderRegistry;
