/// Task model and database operations
///
/// Tasks are the core entity of the system: a title, optional free-form
/// description and status, and an optional assignee. Every operation here is
/// a single SQL statement; update and delete derive existence from the rows
/// the write touched rather than from a preceding read, so concurrent
/// requests against the same id cannot race between a check and the write.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     title TEXT NOT NULL CHECK (length(title) > 0),
///     description TEXT,
///     status TEXT,
///     assignee_id INTEGER REFERENCES users(id),
///     created_at TEXT NOT NULL,
///     updated_at TEXT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::task::{Task, TaskData};
/// # use sqlx::SqlitePool;
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let task = Task::create(&pool, TaskData {
///     title: "Write release notes".to_string(),
///     description: Some("v0.1.0 changelog".to_string()),
///     status: Some("pending".to_string()),
///     assignee_id: None,
/// }).await?;
///
/// assert!(Task::find_by_id(&pool, task.id).await?.is_some());
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Task row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID, assigned by the database and never reused
    pub id: i64,

    /// Task title, never empty for a persisted row
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Free-form status string; no fixed set of values is enforced
    pub status: Option<String>,

    /// Assignee user ID (a back-reference, not ownership)
    pub assignee_id: Option<i64>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last written; equals `created_at` until the
    /// first update
    pub updated_at: DateTime<Utc>,
}

/// The mutable fields of a task
///
/// Used for both create and update: an update replaces every field here in
/// one statement, there is no partial patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskData {
    /// Task title (required, non-empty; enforced by the handlers and by a
    /// CHECK constraint)
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Optional free-form status
    pub status: Option<String>,

    /// Optional assignee user ID
    pub assignee_id: Option<i64>,
}

impl Task {
    /// Creates a new task
    ///
    /// The id and both timestamps are generated here; `created_at` and
    /// `updated_at` start out equal.
    ///
    /// # Errors
    ///
    /// Returns an error on constraint violation (empty title, unknown
    /// assignee) or any other database failure.
    pub async fn create(pool: &SqlitePool, data: TaskData) -> Result<Self, sqlx::Error> {
        let now = Utc::now();

        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, status, assignee_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, title, description, status, assignee_id, created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.status)
        .bind(data.assignee_id)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID, returning `None` when no row matches
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, status, assignee_id, created_at, updated_at
            FROM tasks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks ordered by id ascending
    ///
    /// The result is a snapshot at call time; writes that land while the
    /// statement runs are not reflected.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, status, assignee_id, created_at, updated_at
            FROM tasks
            ORDER BY id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Replaces every mutable field of a task and refreshes `updated_at`
    ///
    /// Returns `None` when the id matched zero rows. Existence comes from
    /// the write itself, not from a separate lookup.
    ///
    /// # Errors
    ///
    /// Returns an error on constraint violation or database failure.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: TaskData,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = ?,
                description = ?,
                status = ?,
                assignee_id = ?,
                updated_at = ?
            WHERE id = ?
            RETURNING id, title, description, status, assignee_id, created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.status)
        .bind(data.assignee_id)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Deletes a task, returning whether a row was removed
    ///
    /// A second delete of the same id returns `false`, it is not an error.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts all tasks
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
