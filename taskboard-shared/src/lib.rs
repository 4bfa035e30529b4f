//! # Taskboard Shared Library
//!
//! This crate contains the types and business logic shared by the Taskboard
//! API server and its tests.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `auth`: Bearer-token verification (JWT) and request middleware
//! - `db`: Connection pool, migrations, and demo seed data

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the Taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
