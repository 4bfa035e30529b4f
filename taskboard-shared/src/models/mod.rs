/// Database models for Taskboard
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `user`: User accounts, provisioned out of band and referenced by tasks
/// - `task`: Tasks with an optional assignee

pub mod task;
pub mod user;
