/// Demo fixture data
///
/// Inserts a handful of users and tasks so a fresh instance has something
/// to show. Opt-in via configuration; a database that already contains
/// users is left untouched.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::models::task::{Task, TaskData};
use crate::models::user::{CreateUser, User};

/// Inserts demo users and tasks into an empty database
///
/// Skipped when any user already exists, so restarting a seeded instance
/// does not duplicate rows.
///
/// # Errors
///
/// Returns an error if any insert fails.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if User::count(pool).await? > 0 {
        debug!("Users already present, skipping demo seed");
        return Ok(());
    }

    let mut user_ids = Vec::new();
    for (username, password_hash) in [
        ("john_doe", "password1"),
        ("jane_smith", "password2"),
        ("alex_brown", "password3"),
    ] {
        let user = User::create(
            pool,
            CreateUser {
                username: username.to_string(),
                password_hash: password_hash.to_string(),
            },
        )
        .await?;
        user_ids.push(user.id);
    }

    for (i, (title, description, status)) in [
        ("Task 1", "Description for Task 1", "pending"),
        ("Task 2", "Description for Task 2", "in progress"),
        ("Task 3", "Description for Task 3", "completed"),
    ]
    .into_iter()
    .enumerate()
    {
        Task::create(
            pool,
            TaskData {
                title: title.to_string(),
                description: Some(description.to_string()),
                status: Some(status.to_string()),
                assignee_id: Some(user_ids[i]),
            },
        )
        .await?;
    }

    info!(
        users = user_ids.len(),
        tasks = 3,
        "Inserted demo seed data"
    );
    Ok(())
}
