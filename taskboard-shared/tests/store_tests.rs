/// Integration tests for the task and user stores
///
/// These run against a private in-memory SQLite database per test, with the
/// real migrations applied, so every statement is exercised end to end.

use sqlx::SqlitePool;
use taskboard_shared::db::migrations::run_migrations;
use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
use taskboard_shared::db::seed::seed_demo_data;
use taskboard_shared::models::task::{Task, TaskData};
use taskboard_shared::models::user::{CreateUser, User};

async fn test_pool() -> SqlitePool {
    let pool = create_pool(DatabaseConfig::default())
        .await
        .expect("Should create in-memory pool");
    run_migrations(&pool).await.expect("Should run migrations");
    pool
}

fn task_data(title: &str) -> TaskData {
    TaskData {
        title: title.to_string(),
        description: None,
        status: None,
        assignee_id: None,
    }
}

#[tokio::test]
async fn test_create_assigns_increasing_ids() {
    let pool = test_pool().await;

    let first = Task::create(&pool, task_data("first")).await.unwrap();
    let second = Task::create(&pool, task_data("second")).await.unwrap();
    let third = Task::create(&pool, task_data("third")).await.unwrap();

    assert!(second.id > first.id);
    assert!(third.id > second.id);
    assert_eq!(first.created_at, first.updated_at);
}

#[tokio::test]
async fn test_find_by_id_missing_returns_none() {
    let pool = test_pool().await;

    let found = Task::find_by_id(&pool, 9999).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let pool = test_pool().await;

    let task = Task::create(
        &pool,
        TaskData {
            title: "original".to_string(),
            description: Some("keep me?".to_string()),
            status: Some("pending".to_string()),
            assignee_id: None,
        },
    )
    .await
    .unwrap();

    let updated = Task::update(&pool, task.id, task_data("renamed"))
        .await
        .unwrap()
        .expect("Task should exist");

    // Full replace: fields omitted from the new data are cleared.
    assert_eq!(updated.title, "renamed");
    assert!(updated.description.is_none());
    assert!(updated.status.is_none());
    assert_eq!(updated.created_at, task.created_at);
    assert!(updated.updated_at > updated.created_at);
}

#[tokio::test]
async fn test_updated_at_strictly_increases() {
    let pool = test_pool().await;

    let task = Task::create(&pool, task_data("t")).await.unwrap();
    let first = Task::update(&pool, task.id, task_data("t2"))
        .await
        .unwrap()
        .unwrap();
    let second = Task::update(&pool, task.id, task_data("t3"))
        .await
        .unwrap()
        .unwrap();

    assert!(first.updated_at > task.updated_at);
    assert!(second.updated_at > first.updated_at);
}

#[tokio::test]
async fn test_update_missing_returns_none() {
    let pool = test_pool().await;

    let result = Task::update(&pool, 123, task_data("ghost")).await.unwrap();
    assert!(result.is_none());
    assert_eq!(Task::count(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_reports_affected_rows() {
    let pool = test_pool().await;

    let task = Task::create(&pool, task_data("doomed")).await.unwrap();

    assert!(Task::delete(&pool, task.id).await.unwrap());
    // Second delete of the same id touches zero rows.
    assert!(!Task::delete(&pool, task.id).await.unwrap());
    assert!(Task::find_by_id(&pool, task.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_ordered_by_id() {
    let pool = test_pool().await;

    let a = Task::create(&pool, task_data("a")).await.unwrap();
    let b = Task::create(&pool, task_data("b")).await.unwrap();
    let c = Task::create(&pool, task_data("c")).await.unwrap();

    Task::delete(&pool, b.id).await.unwrap();

    let tasks = Task::list(&pool).await.unwrap();
    let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);
}

#[tokio::test]
async fn test_empty_title_rejected_by_schema() {
    let pool = test_pool().await;

    let result = Task::create(&pool, task_data("")).await;
    assert!(result.is_err());
    assert_eq!(Task::count(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_unknown_assignee_rejected() {
    let pool = test_pool().await;

    let result = Task::create(
        &pool,
        TaskData {
            title: "orphan".to_string(),
            description: None,
            status: None,
            assignee_id: Some(42),
        },
    )
    .await;

    assert!(result.is_err());
    assert_eq!(Task::count(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_assignee_reference_persists() {
    let pool = test_pool().await;

    let user = User::create(
        &pool,
        CreateUser {
            username: "assignee".to_string(),
            password_hash: "opaque".to_string(),
        },
    )
    .await
    .unwrap();

    let task = Task::create(
        &pool,
        TaskData {
            title: "assigned".to_string(),
            description: None,
            status: Some("pending".to_string()),
            assignee_id: Some(user.id),
        },
    )
    .await
    .unwrap();

    let fetched = Task::find_by_id(&pool, task.id).await.unwrap().unwrap();
    assert_eq!(fetched.assignee_id, Some(user.id));
}

#[tokio::test]
async fn test_user_lookup() {
    let pool = test_pool().await;

    let user = User::create(
        &pool,
        CreateUser {
            username: "jane".to_string(),
            password_hash: "opaque".to_string(),
        },
    )
    .await
    .unwrap();

    let by_id = User::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "jane");

    let by_name = User::find_by_username(&pool, "jane").await.unwrap().unwrap();
    assert_eq!(by_name.id, user.id);

    assert!(User::find_by_username(&pool, "nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let pool = test_pool().await;

    let data = CreateUser {
        username: "dup".to_string(),
        password_hash: "opaque".to_string(),
    };

    User::create(&pool, data.clone()).await.unwrap();
    assert!(User::create(&pool, data).await.is_err());
}

#[tokio::test]
async fn test_seed_demo_data_is_idempotent() {
    let pool = test_pool().await;

    seed_demo_data(&pool).await.unwrap();
    assert_eq!(User::count(&pool).await.unwrap(), 3);
    assert_eq!(Task::count(&pool).await.unwrap(), 3);

    let tasks = Task::list(&pool).await.unwrap();
    assert_eq!(tasks[0].title, "Task 1");
    assert_eq!(tasks[0].status.as_deref(), Some("pending"));
    assert!(tasks[0].assignee_id.is_some());

    // A second run finds existing users and does nothing.
    seed_demo_data(&pool).await.unwrap();
    assert_eq!(User::count(&pool).await.unwrap(), 3);
    assert_eq!(Task::count(&pool).await.unwrap(), 3);
}
