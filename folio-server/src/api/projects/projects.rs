//! Project REST API handlers
//!
//! Same shape as the Pokédex handlers: acquire the pool, one repository
//! call, envelope the result. Listings come back newest-first.

use crate::api::present;
use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CreateProjectRequest, DeleteResponse, ProjectListResponse,
    ProjectResponse, UpdateProjectRequest,
};

use folio_core::{NewProject, ProjectPatch};
use folio_db::ProjectRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/projects
///
/// List all projects, newest first
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<ProjectListResponse>> {
    let repo = ProjectRepository::new(state.db.acquire().await?);
    let projects = repo.find_all().await?;

    let data: Vec<_> = projects.into_iter().map(Into::into).collect();
    let count = data.len();

    Ok(Json(ProjectListResponse {
        success: true,
        data,
        count,
    }))
}

/// POST /api/v1/projects
///
/// Create a new project
pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    // Presence pre-check; constraint validation happens on the write path
    let title = present(req.title.as_deref());
    let content = present(req.content.as_deref());
    let image_url = present(req.image_url.as_deref());
    let skills = req.skills.as_deref().filter(|s| !s.is_empty());

    let (Some(title), Some(content), Some(image_url), Some(skills)) =
        (title, content, image_url, skills)
    else {
        return Err(ApiError::BadRequest {
            message: "all fields are required and at least one skill must be provided".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let repo = ProjectRepository::new(state.db.acquire().await?);
    let project = repo
        .create(&NewProject {
            title: title.to_string(),
            content: content.to_string(),
            image_url: image_url.to_string(),
            skills: skills.to_vec(),
        })
        .await?;

    log::info!("Created project {}", project.id);

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            success: true,
            data: project.into(),
            message: Some("Project created successfully".to_string()),
        }),
    ))
}

/// GET /api/v1/projects/{id}
///
/// Get a single project by id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    let repo = ProjectRepository::new(state.db.acquire().await?);
    let project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "Project not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(ProjectResponse {
        success: true,
        data: project.into(),
        message: None,
    }))
}

/// PUT /api/v1/projects/{id}
///
/// Apply a partial update to a project
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;
    let patch = ProjectPatch::from(req);

    let repo = ProjectRepository::new(state.db.acquire().await?);
    let project = repo
        .update(project_id, &patch)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "Project not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::info!("Updated project {}", project.id);

    Ok(Json(ProjectResponse {
        success: true,
        data: project.into(),
        message: Some("Project updated successfully".to_string()),
    }))
}

/// DELETE /api/v1/projects/{id}
///
/// Remove a project
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    let repo = ProjectRepository::new(state.db.acquire().await?);
    let deleted = repo.delete(project_id).await?;

    if !deleted {
        return Err(ApiError::NotFound {
            message: "Project not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted project {}", project_id);

    Ok(Json(DeleteResponse {
        success: true,
        message: "Project deleted successfully".to_string(),
    }))
}
