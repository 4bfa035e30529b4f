/// Database utilities
///
/// # Modules
///
/// - [`pool`]: SQLite connection pool management
/// - [`migrations`]: Embedded schema migrations
/// - [`seed`]: Demo fixture data, inserted on explicit opt-in

pub mod migrations;
pub mod pool;
pub mod seed;
