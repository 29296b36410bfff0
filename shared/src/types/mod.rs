//! Common type definitions shared across the workspace

pub mod response;
