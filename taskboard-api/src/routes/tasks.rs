/// Task CRUD endpoints
///
/// Each handler follows the same linear flow: parse the body or path,
/// validate, run exactly one store operation, map the outcome to a
/// response. Validation happens before the store is touched, so a rejected
/// request never mutates storage. Whether these routes require a bearer
/// token is decided by configuration in the router, not here.
///
/// # Endpoints
///
/// | Method & Path     | Success                  | Failure        |
/// |-------------------|--------------------------|----------------|
/// | POST /tasks       | 201 `{message, id}`      | 400; 500       |
/// | GET /tasks        | 200 `{tasks: [...]}`     | 500            |
/// | GET /tasks/:id    | 200 `{task}`             | 404; 500       |
/// | PUT /tasks/:id    | 200 `{message}`          | 400; 404; 500  |
/// | DELETE /tasks/:id | 200 `{message}`          | 404; 500       |

use crate::{app::AppState, error::{ApiError, ApiResult}};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use taskboard_shared::models::task::{Task, TaskData};
use validator::Validate;

/// Request body for create and update
///
/// Update replaces every field, so the two operations share one shape. The
/// title is modeled as an `Option` so that an absent field and an empty
/// string fail validation the same way instead of dying in deserialization.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TaskPayload {
    /// Task title (required, non-empty)
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title is required")
    )]
    pub title: Option<String>,

    /// Optional description
    pub description: Option<String>,

    /// Optional free-form status
    pub status: Option<String>,

    /// Optional assignee user ID
    pub assignee_id: Option<i64>,
}

impl TaskPayload {
    /// Validates the payload and converts it into store input
    fn into_data(self) -> ApiResult<TaskData> {
        self.validate()?;

        let title = self
            .title
            .ok_or_else(|| ApiError::BadRequest("Title is required".to_string()))?;

        Ok(TaskData {
            title,
            description: self.description,
            status: self.status,
            assignee_id: self.assignee_id,
        })
    }
}

/// Response for a successful create
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskCreatedResponse {
    /// Confirmation message
    pub message: String,

    /// ID of the new task
    pub id: i64,
}

/// Response for the list endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskListResponse {
    /// All tasks, ordered by id ascending
    pub tasks: Vec<Task>,
}

/// Response for a single task fetch
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResponse {
    /// The requested task
    pub task: Task,
}

/// Plain confirmation response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Confirmation message
    pub message: String,
}

/// Creates a new task
///
/// Returns 201 with the store-generated id. A missing or empty title is
/// rejected with 400 before the store is called; a constraint violation
/// (e.g. unknown assignee) surfaces as 500.
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskPayload>,
) -> ApiResult<(StatusCode, Json<TaskCreatedResponse>)> {
    let data = payload.into_data()?;

    let task = Task::create(&state.db, data).await?;

    tracing::info!(task_id = task.id, "Task created");

    Ok((
        StatusCode::CREATED,
        Json(TaskCreatedResponse {
            message: "Task created successfully".to_string(),
            id: task.id,
        }),
    ))
}

/// Lists all tasks, ordered by id ascending
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<TaskListResponse>> {
    let tasks = Task::list(&state.db).await?;

    Ok(Json(TaskListResponse { tasks }))
}

/// Fetches a single task by id
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TaskResponse>> {
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(TaskResponse { task }))
}

/// Replaces every mutable field of a task
///
/// Existence is decided by the rows the update touched; there is no
/// separate lookup, so two concurrent updates of the same id cannot race
/// between a check and the write.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> ApiResult<Json<MessageResponse>> {
    let data = payload.into_data()?;

    Task::update(&state.db, id, data)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    tracing::info!(task_id = id, "Task updated");

    Ok(Json(MessageResponse {
        message: "Task updated successfully".to_string(),
    }))
}

/// Deletes a task
///
/// Deleting an id that no longer exists answers 404 by the same
/// affected-row rule, so a repeated delete is harmless.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = Task::delete(&state.db, id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    tracing::info!(task_id = id, "Task deleted");

    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}
