/// API route handlers
///
/// Organized by resource:
///
/// - `root`: Welcome message at /
/// - `health`: Health check endpoint
/// - `tasks`: Task CRUD endpoints

pub mod health;
pub mod root;
pub mod tasks;
